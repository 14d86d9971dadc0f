use base64::Engine;

use nimbus::actions;
use nimbus::policy;
use nimbus::resources::instance;
use nimbus::resources::userdata;

#[test]
fn test_every_action_policy_is_admin_reachable() {
    // An action whose policy no role satisfies could never be submitted
    for action in actions::all() {
        assert!(
            policy::allows("admin", action.policy()),
            "admin cannot reach action {}",
            action.id()
        );
    }
}

#[test]
fn test_members_cannot_reach_mutating_actions() {
    for action in actions::all() {
        assert!(
            !policy::allows("member", action.policy()),
            "member unexpectedly allowed for {}",
            action.id()
        );
    }
}

#[test]
fn test_confirm_routes_round_trip_through_the_registry() {
    for action in actions::all() {
        let submit = action.submit_path("abc-123");
        assert!(submit.starts_with('/'), "{} submit path", action.id());
        assert!(submit.contains("abc-123"));
        assert!(action.done_path("abc-123").starts_with('/'));
        assert!(action.confirm_message("abc-123").contains("abc-123"));
    }
}

#[test]
fn test_launch_user_data_decodes_to_the_composed_document() {
    // The launch handler base64-encodes the composed payload for the
    // compute API; the guest must see the exact document after decoding.
    let payload = userdata::compose(Some("Secret1"), Some("echo hi"));
    let encoded = base64::engine::general_purpose::STANDARD.encode(&payload);
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), payload);
}

#[test]
fn test_action_gating_matches_status_predicates() {
    // Start only makes sense shut off, stop only active; both respect the
    // lock unless an admin is asking.
    assert!(instance::is_shut_off("SHUTOFF", None));
    assert!(!instance::is_shut_off("ACTIVE", None));
    assert!(instance::is_active("ACTIVE", None));
    assert!(instance::is_not_locked_or_admin(true, true));
    assert!(!instance::is_not_locked_or_admin(true, false));
}
