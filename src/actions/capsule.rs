use async_trait::async_trait;
use serde_json::Value;

use super::Action;
use crate::api::delete_capsule;
use crate::models::AppState;

pub struct DeleteCapsule;

#[async_trait]
impl Action for DeleteCapsule {
    fn id(&self) -> &'static str {
        "delete-capsule"
    }

    fn title(&self) -> &'static str {
        "Delete Capsule"
    }

    fn policy(&self) -> &'static str {
        "container:capsule:delete"
    }

    fn danger(&self) -> bool {
        true
    }

    fn confirm_message(&self, target: &str) -> String {
        format!(
            "Deleting capsule {} removes all of its containers. Continue?",
            target
        )
    }

    fn submit_path(&self, target_id: &str) -> String {
        format!("/capsules/{}/delete", target_id)
    }

    fn done_path(&self, _target_id: &str) -> String {
        "/capsules".to_string()
    }

    async fn submit(&self, state: &AppState, target_id: &str) -> Value {
        delete_capsule(&state.client, &state.api_base_url, &state.api_token, target_id).await
    }
}
