use serde_json::Value;

use super::client::api_call;
use crate::models::{ActionEventView, ActionLogEntry, ServerView};
use crate::resources::instance::{format_action, format_action_event, format_power_state, format_status};
use crate::utils::to_local_time;

const SERVICE: &str = "/compute/v2.1";

fn addresses_of(obj: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn server_from_value(obj: &serde_json::Map<String, Value>) -> ServerView {
    let status = obj
        .get("status")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_lowercase();
    ServerView {
        id: obj.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        name: obj
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("(no name)")
            .to_string(),
        image_name: obj
            .get("image_name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        fixed_addresses: addresses_of(obj, "fixed_addresses"),
        floating_addresses: addresses_of(obj, "floating_addresses"),
        flavor: obj.get("flavor").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        status_display: format_status(&status),
        status,
        task_state: obj
            .get("task_state")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
        vm_state: obj
            .get("vm_state")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
        power_state_display: obj
            .get("power_state")
            .and_then(|v| v.as_str())
            .map(format_power_state)
            .unwrap_or_default(),
        locked: obj.get("locked").and_then(|v| v.as_bool()).unwrap_or(false),
        created_display: obj
            .get("created_at")
            .and_then(|v| v.as_str())
            .map(to_local_time)
            .unwrap_or_default(),
    }
}

/// Load the servers list, optionally filtered by name on the backend.
pub async fn load_servers(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    name_filter: Option<&str>,
) -> Vec<ServerView> {
    let params = name_filter
        .filter(|n| !n.trim().is_empty())
        .map(|n| vec![("name".to_string(), n.trim().to_string())]);
    let endpoint = format!("{}/servers/detail", SERVICE);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, params).await;
    let mut servers = Vec::new();
    if let Some(arr) = payload.get("servers").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                servers.push(server_from_value(obj));
            }
        }
    }
    servers
}

/// Load one server; returns the view plus the raw payload for the detail rows.
pub async fn load_server(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    server_id: &str,
) -> (ServerView, Value) {
    let endpoint = format!("{}/servers/{}", SERVICE, server_id);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    let view = payload
        .get("server")
        .and_then(|v| v.as_object())
        .map(server_from_value)
        .unwrap_or_else(|| ServerView::new_with_defaults(server_id.to_string()));
    (view, payload)
}

/// Create a server. `user_data` must already be base64-encoded.
pub async fn launch_server(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    name: &str,
    image_ref: &str,
    flavor_ref: &str,
    network_id: &str,
    user_data: Option<String>,
) -> Value {
    let mut server = serde_json::json!({
        "name": name,
        "imageRef": image_ref,
        "flavorRef": flavor_ref,
        "networks": [{"uuid": network_id}],
    });
    if let Some(encoded) = user_data {
        server["user_data"] = Value::from(encoded);
    }
    let endpoint = format!("{}/servers", SERVICE);
    api_call(
        client,
        api_base_url,
        api_token,
        "POST",
        &endpoint,
        Some(serde_json::json!({"server": server})),
        None,
    )
    .await
}

/// Submit one of the instance action verbs (os-start, os-stop, reboot,
/// lock, unlock).
pub async fn server_action(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    server_id: &str,
    body: Value,
) -> Value {
    let endpoint = format!("{}/servers/{}/action", SERVICE, server_id);
    api_call(client, api_base_url, api_token, "POST", &endpoint, Some(body), None).await
}

pub async fn delete_server(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    server_id: &str,
) -> Value {
    let endpoint = format!("{}/servers/{}", SERVICE, server_id);
    api_call(client, api_base_url, api_token, "DELETE", &endpoint, None, None).await
}

pub async fn load_action_log(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    server_id: &str,
) -> Vec<ActionLogEntry> {
    let endpoint = format!("{}/servers/{}/os-instance-actions", SERVICE, server_id);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    let mut entries = Vec::new();
    if let Some(arr) = payload.get("instanceActions").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                entries.push(ActionLogEntry {
                    action_display: obj
                        .get("action")
                        .and_then(|v| v.as_str())
                        .map(format_action)
                        .unwrap_or_default(),
                    request_id: obj
                        .get("request_id")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    user_id: obj
                        .get("user_id")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    project_id: obj
                        .get("project_id")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    start_display: obj
                        .get("start_time")
                        .and_then(|v| v.as_str())
                        .map(to_local_time)
                        .unwrap_or_default(),
                    message: obj
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                });
            }
        }
    }
    entries
}

/// Events of one logged request, newest first.
pub async fn load_action_events(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    server_id: &str,
    request_id: &str,
) -> Vec<ActionEventView> {
    let endpoint = format!(
        "{}/servers/{}/os-instance-actions/{}",
        SERVICE, server_id, request_id
    );
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    let mut events = Vec::new();
    if let Some(arr) = payload
        .get("instanceAction")
        .and_then(|a| a.get("events"))
        .and_then(|d| d.as_array())
    {
        for item in arr {
            if let Some(obj) = item.as_object() {
                events.push(ActionEventView {
                    event_display: obj
                        .get("event")
                        .and_then(|v| v.as_str())
                        .map(format_action_event)
                        .unwrap_or_default(),
                    start_display: obj
                        .get("start_time")
                        .and_then(|v| v.as_str())
                        .map(to_local_time)
                        .unwrap_or_default(),
                    finish_display: obj
                        .get("finish_time")
                        .and_then(|v| v.as_str())
                        .map(to_local_time)
                        .unwrap_or_else(|| "-".to_string()),
                    result_display: match obj.get("result").and_then(|v| v.as_str()) {
                        Some("Success") => "Success".to_string(),
                        _ => "-".to_string(),
                    },
                });
            }
        }
    }
    events.reverse();
    events
}
