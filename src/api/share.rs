use super::client::api_call;
use crate::models::ShareGroupTypeView;

const SERVICE: &str = "/share/v2";

/// Load share group types. Public and private types are always requested
/// together (`is_public=all`).
pub async fn load_share_group_types(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Vec<ShareGroupTypeView> {
    let endpoint = format!("{}/share-group-types", SERVICE);
    let params = vec![("is_public".to_string(), "all".to_string())];
    let payload = api_call(
        client,
        api_base_url,
        api_token,
        "GET",
        &endpoint,
        None,
        Some(params),
    )
    .await;
    let mut types = Vec::new();
    if let Some(arr) = payload.get("share_group_types").and_then(|d| d.as_array()) {
        for item in arr {
            if let Some(obj) = item.as_object() {
                let specs = obj
                    .get("group_specs")
                    .and_then(|v| v.as_object())
                    .map(|map| {
                        map.iter()
                            .map(|(k, v)| match v.as_str() {
                                Some(s) => format!("{} = {}", k, s),
                                None => format!("{} = {}", k, v),
                            })
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                types.push(ShareGroupTypeView {
                    id: obj.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                    name: obj.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                    visibility_display: if obj
                        .get("is_public")
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false)
                    {
                        "Public".to_string()
                    } else {
                        "Private".to_string()
                    },
                    group_specs_display: if specs.is_empty() { "-".to_string() } else { specs },
                });
            }
        }
    }
    types
}
