use serde_json::Value;

use super::client::api_call;
use crate::models::{CapsuleView, ContainerView};
use crate::utils::to_local_time;

const SERVICE: &str = "/container/v1";

pub async fn load_containers(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Vec<ContainerView> {
    let endpoint = format!("{}/containers", SERVICE);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    let mut containers = Vec::new();
    if let Some(arr) = payload.get("containers").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                containers.push(ContainerView {
                    uuid: obj.get("uuid").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                    name: obj.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                    status: obj
                        .get("status")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    image: obj
                        .get("image")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    host: obj.get("host").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                });
            }
        }
    }
    containers
}

/// The container detail page renders many nested structures, so the raw
/// payload is returned and card-building happens in the handler.
pub async fn load_container(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    container_id: &str,
) -> Value {
    let endpoint = format!("{}/containers/{}", SERVICE, container_id);
    api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await
}

pub async fn load_capsules(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Vec<CapsuleView> {
    let endpoint = format!("{}/capsules", SERVICE);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    let mut capsules = Vec::new();
    if let Some(arr) = payload.get("capsules").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                capsules.push(CapsuleView {
                    uuid: obj.get("uuid").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                    name: obj
                        .get("meta_name")
                        .or_else(|| obj.get("name"))
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    status: obj
                        .get("status")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    cpu_display: obj
                        .get("cpu")
                        .and_then(|v| v.as_f64())
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "—".into()),
                    memory_display: obj
                        .get("memory")
                        .and_then(|v| v.as_str())
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "—".into()),
                    created_display: obj
                        .get("created_at")
                        .and_then(|v| v.as_str())
                        .map(to_local_time)
                        .unwrap_or_default(),
                });
            }
        }
    }
    capsules
}

pub async fn delete_capsule(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    capsule_id: &str,
) -> Value {
    let endpoint = format!("{}/capsules/{}", SERVICE, capsule_id);
    api_call(client, api_base_url, api_token, "DELETE", &endpoint, None, None).await
}
