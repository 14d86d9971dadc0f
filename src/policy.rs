//! Policy gate consulted before an action button is shown or submitted.
//!
//! Policy strings follow the backend services' own rule names. The console
//! collapses them onto its two local roles: read-only pages are open to
//! members, anything that mutates backend state needs an admin.

const MEMBER_POLICIES: &[&str] = &[
    "identity:list_roles",
    "identity:get_role",
    "os_compute_api:servers:index",
    "os_compute_api:servers:show",
    "os_compute_api:os-instance-actions:list",
    "get_port",
    "volume:get_all",
    "volume:get",
    "container:container:get_all",
    "container:container:get_one",
    "container:capsule:get_all",
    "manila:share_type:index",
];

const ADMIN_POLICIES: &[&str] = &[
    "os_compute_api:servers:create",
    "os_compute_api:servers:delete",
    "os_compute_api:servers:start",
    "os_compute_api:servers:stop",
    "os_compute_api:servers:reboot",
    "os_compute_api:os-lock-server:lock",
    "os_compute_api:os-lock-server:unlock",
    "container:capsule:delete",
];

/// Whether a console role satisfies a policy string. Admins pass every known
/// policy; unknown policy strings deny everyone else.
pub fn allows(role: &str, policy: &str) -> bool {
    if role == "admin" {
        return MEMBER_POLICIES.contains(&policy) || ADMIN_POLICIES.contains(&policy);
    }
    MEMBER_POLICIES.contains(&policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_can_list_but_not_mutate() {
        assert!(allows("member", "identity:list_roles"));
        assert!(allows("member", "manila:share_type:index"));
        assert!(!allows("member", "container:capsule:delete"));
        assert!(!allows("member", "os_compute_api:servers:delete"));
    }

    #[test]
    fn test_admin_passes_all_known_policies() {
        assert!(allows("admin", "get_port"));
        assert!(allows("admin", "container:capsule:delete"));
        assert!(allows("admin", "os_compute_api:os-lock-server:lock"));
    }

    #[test]
    fn test_unknown_policy_denied() {
        assert!(!allows("member", "baremetal:node:delete"));
        assert!(!allows("admin", "baremetal:node:delete"));
    }
}
