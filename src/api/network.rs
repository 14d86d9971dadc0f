use serde_json::Value;

use super::client::api_call;
use crate::models::{AddressPairView, FixedIpView, PortView};
use crate::resources::network::format_network_status;
use crate::utils::to_local_time;

const SERVICE: &str = "/network/v2.0";

fn port_from_value(obj: &serde_json::Map<String, Value>) -> PortView {
    let status = obj
        .get("status")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();
    let fixed_ips = obj
        .get("fixed_ips")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_object())
                .map(|ip| FixedIpView {
                    ip_address: ip
                        .get("ip_address")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    subnet_id: ip
                        .get("subnet_id")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    let security_groups = obj
        .get("security_groups")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default();
    let allowed_address_pairs = obj
        .get("allowed_address_pairs")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_object())
                .map(|pair| AddressPairView {
                    ip_address: pair
                        .get("ip_address")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    mac_address: pair
                        .get("mac_address")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    PortView {
        id: obj.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        name: obj.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        status_display: format_network_status(&status),
        status,
        network_id: obj
            .get("network_id")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        mac_address: obj
            .get("mac_address")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        description: obj
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        port_security_enabled: obj
            .get("port_security_enabled")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        created_display: obj
            .get("created_at")
            .and_then(|v| v.as_str())
            .map(to_local_time)
            .unwrap_or_default(),
        fixed_ips,
        security_groups,
        allowed_address_pairs,
    }
}

pub async fn load_ports(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Vec<PortView> {
    let endpoint = format!("{}/ports", SERVICE);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    let mut ports = Vec::new();
    if let Some(arr) = payload.get("ports").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                ports.push(port_from_value(obj));
            }
        }
    }
    ports
}

pub async fn load_port(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    port_id: &str,
) -> Option<PortView> {
    let endpoint = format!("{}/ports/{}", SERVICE, port_id);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    payload
        .get("port")
        .and_then(|v| v.as_object())
        .map(port_from_value)
}
