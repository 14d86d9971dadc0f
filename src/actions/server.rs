use async_trait::async_trait;
use serde_json::Value;

use super::Action;
use crate::api::{delete_server, server_action};
use crate::models::AppState;

pub struct StartServer;

#[async_trait]
impl Action for StartServer {
    fn id(&self) -> &'static str {
        "start-server"
    }

    fn title(&self) -> &'static str {
        "Start Server"
    }

    fn policy(&self) -> &'static str {
        "os_compute_api:servers:start"
    }

    fn submit_path(&self, target_id: &str) -> String {
        format!("/servers/{}/start", target_id)
    }

    fn done_path(&self, target_id: &str) -> String {
        format!("/servers/{}", target_id)
    }

    async fn submit(&self, state: &AppState, target_id: &str) -> Value {
        server_action(
            &state.client,
            &state.api_base_url,
            &state.api_token,
            target_id,
            serde_json::json!({"os-start": null}),
        )
        .await
    }
}

pub struct StopServer;

#[async_trait]
impl Action for StopServer {
    fn id(&self) -> &'static str {
        "stop-server"
    }

    fn title(&self) -> &'static str {
        "Stop Server"
    }

    fn policy(&self) -> &'static str {
        "os_compute_api:servers:stop"
    }

    fn submit_path(&self, target_id: &str) -> String {
        format!("/servers/{}/stop", target_id)
    }

    fn done_path(&self, target_id: &str) -> String {
        format!("/servers/{}", target_id)
    }

    async fn submit(&self, state: &AppState, target_id: &str) -> Value {
        server_action(
            &state.client,
            &state.api_base_url,
            &state.api_token,
            target_id,
            serde_json::json!({"os-stop": null}),
        )
        .await
    }
}

pub struct RebootServer;

#[async_trait]
impl Action for RebootServer {
    fn id(&self) -> &'static str {
        "reboot-server"
    }

    fn title(&self) -> &'static str {
        "Reboot Server"
    }

    fn policy(&self) -> &'static str {
        "os_compute_api:servers:reboot"
    }

    fn confirm_message(&self, target: &str) -> String {
        format!(
            "Rebooting interrupts anything running on {}. Continue?",
            target
        )
    }

    fn submit_path(&self, target_id: &str) -> String {
        format!("/servers/{}/reboot", target_id)
    }

    fn done_path(&self, target_id: &str) -> String {
        format!("/servers/{}", target_id)
    }

    async fn submit(&self, state: &AppState, target_id: &str) -> Value {
        server_action(
            &state.client,
            &state.api_base_url,
            &state.api_token,
            target_id,
            serde_json::json!({"reboot": {"type": "SOFT"}}),
        )
        .await
    }
}

pub struct LockServer;

#[async_trait]
impl Action for LockServer {
    fn id(&self) -> &'static str {
        "lock-server"
    }

    fn title(&self) -> &'static str {
        "Lock Server"
    }

    fn policy(&self) -> &'static str {
        "os_compute_api:os-lock-server:lock"
    }

    fn submit_path(&self, target_id: &str) -> String {
        format!("/servers/{}/lock", target_id)
    }

    fn done_path(&self, target_id: &str) -> String {
        format!("/servers/{}", target_id)
    }

    async fn submit(&self, state: &AppState, target_id: &str) -> Value {
        server_action(
            &state.client,
            &state.api_base_url,
            &state.api_token,
            target_id,
            serde_json::json!({"lock": null}),
        )
        .await
    }
}

pub struct UnlockServer;

#[async_trait]
impl Action for UnlockServer {
    fn id(&self) -> &'static str {
        "unlock-server"
    }

    fn title(&self) -> &'static str {
        "Unlock Server"
    }

    fn policy(&self) -> &'static str {
        "os_compute_api:os-lock-server:unlock"
    }

    fn submit_path(&self, target_id: &str) -> String {
        format!("/servers/{}/unlock", target_id)
    }

    fn done_path(&self, target_id: &str) -> String {
        format!("/servers/{}", target_id)
    }

    async fn submit(&self, state: &AppState, target_id: &str) -> Value {
        server_action(
            &state.client,
            &state.api_base_url,
            &state.api_token,
            target_id,
            serde_json::json!({"unlock": null}),
        )
        .await
    }
}

pub struct DeleteServer;

#[async_trait]
impl Action for DeleteServer {
    fn id(&self) -> &'static str {
        "delete-server"
    }

    fn title(&self) -> &'static str {
        "Delete Server"
    }

    fn policy(&self) -> &'static str {
        "os_compute_api:servers:delete"
    }

    fn danger(&self) -> bool {
        true
    }

    fn confirm_message(&self, target: &str) -> String {
        format!(
            "Deleting {} cannot be undone. The instance and its ephemeral disks will be removed.",
            target
        )
    }

    fn submit_path(&self, target_id: &str) -> String {
        format!("/servers/{}/delete", target_id)
    }

    fn done_path(&self, _target_id: &str) -> String {
        "/servers".to_string()
    }

    async fn submit(&self, state: &AppState, target_id: &str) -> Value {
        delete_server(&state.client, &state.api_base_url, &state.api_token, target_id).await
    }
}
