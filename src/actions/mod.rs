//! Resource actions behind the shared confirmation dialog.
//!
//! Each destructive or state-changing button is one `Action`
//! implementation: a stable id used in the confirm route, a policy string
//! checked against the console role, and the backend submit call.

pub mod capsule;
pub mod server;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::AppState;

pub use capsule::DeleteCapsule;
pub use server::{DeleteServer, LockServer, RebootServer, StartServer, StopServer, UnlockServer};

#[async_trait]
pub trait Action: Send + Sync {
    /// Stable identifier used in `/confirm/:action/:id` routes.
    fn id(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Policy string gating both the button and the submit.
    fn policy(&self) -> &'static str;

    /// Danger actions render with the destructive button style.
    fn danger(&self) -> bool {
        false
    }

    fn confirm_message(&self, target: &str) -> String {
        format!(
            "Are you sure you want to perform \"{}\" on {}?",
            self.title(),
            target
        )
    }

    /// Route the confirmation form posts to.
    fn submit_path(&self, target_id: &str) -> String;

    /// Where the browser lands after the submit.
    fn done_path(&self, target_id: &str) -> String;

    async fn submit(&self, state: &AppState, target_id: &str) -> Value;
}

static REGISTRY: &[&dyn Action] = &[
    &StartServer,
    &StopServer,
    &RebootServer,
    &LockServer,
    &UnlockServer,
    &DeleteServer,
    &DeleteCapsule,
];

pub fn lookup(action_id: &str) -> Option<&'static dyn Action> {
    REGISTRY.iter().copied().find(|a| a.id() == action_id)
}

pub fn all() -> &'static [&'static dyn Action] {
    REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_are_unique_and_resolvable() {
        for action in all() {
            let found = lookup(action.id()).expect("registered action must resolve");
            assert_eq!(found.title(), action.title());
        }
        let mut ids: Vec<_> = all().iter().map(|a| a.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(lookup("shrink-server").is_none());
    }

    #[test]
    fn test_delete_actions_are_danger() {
        assert!(lookup("delete-server").unwrap().danger());
        assert!(lookup("delete-capsule").unwrap().danger());
        assert!(!lookup("start-server").unwrap().danger());
    }

    #[test]
    fn test_capsule_delete_attributes() {
        let action = lookup("delete-capsule").unwrap();
        assert_eq!(action.policy(), "container:capsule:delete");
        assert_eq!(action.title(), "Delete Capsule");
        assert_eq!(action.submit_path("abc"), "/capsules/abc/delete");
        assert_eq!(action.done_path("abc"), "/capsules");
    }
}
