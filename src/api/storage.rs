use serde_json::Value;

use super::client::api_call;
use crate::models::{VolumeAttachmentView, VolumeImageView, VolumeTransferView, VolumeView};
use crate::utils::to_local_time;

const SERVICE: &str = "/volume/v3";

fn volume_from_value(obj: &serde_json::Map<String, Value>) -> VolumeView {
    let attachments = obj
        .get("attachments")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_object())
                .map(|att| {
                    let server_id = att
                        .get("server_id")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string();
                    VolumeAttachmentView {
                        server_name: att
                            .get("server_name")
                            .and_then(|v| v.as_str())
                            .unwrap_or(&server_id)
                            .to_string(),
                        server_id,
                        device: att
                            .get("device")
                            .and_then(|v| v.as_str())
                            .unwrap_or("")
                            .to_string(),
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    let image = obj
        .get("volume_image_metadata")
        .and_then(|v| v.as_object())
        .map(|meta| VolumeImageView {
            image_id: meta
                .get("image_id")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            image_name: meta
                .get("image_name")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        });
    let transfer = obj
        .get("transfer")
        .and_then(|v| v.as_object())
        .map(|tr| VolumeTransferView {
            id: tr.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
            name: tr.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
            created_display: tr
                .get("created_at")
                .and_then(|v| v.as_str())
                .map(to_local_time)
                .unwrap_or_default(),
        });
    VolumeView {
        id: obj.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        name: obj.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        status: obj
            .get("status")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        size_display: obj
            .get("size")
            .and_then(|v| v.as_i64())
            .map(|n| format!("{} GB", n))
            .unwrap_or_else(|| "—".into()),
        volume_type: obj
            .get("volume_type")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        // the block storage service reports bootable as the string "true"
        bootable: obj.get("bootable").and_then(|v| v.as_str()) == Some("true"),
        created_display: obj
            .get("created_at")
            .and_then(|v| v.as_str())
            .map(to_local_time)
            .unwrap_or_default(),
        attachments,
        image,
        transfer,
    }
}

pub async fn load_volumes(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Vec<VolumeView> {
    let endpoint = format!("{}/volumes/detail", SERVICE);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    let mut volumes = Vec::new();
    if let Some(arr) = payload.get("volumes").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                volumes.push(volume_from_value(obj));
            }
        }
    }
    volumes
}

pub async fn load_volume(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    volume_id: &str,
) -> Option<VolumeView> {
    let endpoint = format!("{}/volumes/{}", SERVICE, volume_id);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await;
    payload
        .get("volume")
        .and_then(|v| v.as_object())
        .map(volume_from_value)
}
