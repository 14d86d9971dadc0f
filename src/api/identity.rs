use serde_json::Value;

use super::client::api_call;
use crate::models::RoleView;

const SERVICE: &str = "/identity/v3";

fn role_from_value(obj: &serde_json::Map<String, Value>) -> RoleView {
    RoleView {
        id: obj.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        name: obj.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        description: obj
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
    }
}

/// Load identity roles. The identity service has no name filter for roles,
/// so filtering happens here.
pub async fn load_roles(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    name_filter: Option<&str>,
) -> Vec<RoleView> {
    let endpoint = format!("{}/roles", SERVICE);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    let mut roles = Vec::new();
    if let Some(arr) = payload.get("roles").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                roles.push(role_from_value(obj));
            }
        }
    }
    if let Some(filter) = name_filter.map(str::trim).filter(|f| !f.is_empty()) {
        let needle = filter.to_lowercase();
        roles.retain(|r| r.name.to_lowercase().contains(&needle));
    }
    roles
}

pub async fn load_role(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    role_id: &str,
) -> Option<RoleView> {
    let endpoint = format!("{}/roles/{}", SERVICE, role_id);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    payload
        .get("role")
        .and_then(|v| v.as_object())
        .map(role_from_value)
}
