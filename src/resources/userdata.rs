//! Cloud-init user-data composition for instance launch.
//!
//! The compute service accepts a boot-time payload that cloud-init consumes
//! inside the guest. When the operator sets a root password and/or an init
//! script, the two are combined into one MIME multipart/mixed document.

/// Fixed multipart boundary shared by every composed payload.
pub const BOUNDARY: &str = "===============2309984059743762475==";

const PASSWORD_SENTINEL: &str = "USER_PASSWORD";
const SCRIPT_SENTINEL: &str = "USER_DATA";

const PASSWORD_AND_SCRIPT: &str = concat!(
    "Content-Type: multipart/mixed; boundary=\"===============2309984059743762475==\"\n",
    "MIME-Version: 1.0\n",
    "\n",
    "--===============2309984059743762475==\n",
    "Content-Type: text/cloud-config; charset=\"us-ascii\" \n",
    "MIME-Version: 1.0\n",
    "Content-Transfer-Encoding: 7bit\n",
    "Content-Disposition: attachment; filename=\"ssh-pwauth-script.txt\" \n",
    "\n",
    "#cloud-config\n",
    "disable_root: false\n",
    "ssh_pwauth: true\n",
    "password: USER_PASSWORD\n",
    "\n",
    "--===============2309984059743762475==\n",
    "Content-Type: text/x-shellscript; charset=\"us-ascii\" \n",
    "MIME-Version: 1.0\n",
    "Content-Transfer-Encoding: 7bit\n",
    "Content-Disposition: attachment; filename=\"passwd-script.txt\" \n",
    "\n",
    "#!/bin/sh\n",
    "echo 'root:USER_PASSWORD' | chpasswd\n",
    "\n",
    "--===============2309984059743762475==\n",
    "Content-Type: text/x-shellscript; charset=\"us-ascii\" \n",
    "MIME-Version: 1.0\n",
    "Content-Transfer-Encoding: 7bit\n",
    "Content-Disposition: attachment; filename=\"init-shell.txt\" \n",
    "\n",
    "USER_DATA\n",
    "\n",
    "--===============2309984059743762475==--",
);

const PASSWORD_ONLY: &str = concat!(
    "Content-Type: multipart/mixed; boundary=\"===============2309984059743762475==\" \n",
    "MIME-Version: 1.0\n",
    "\n",
    "--===============2309984059743762475==\n",
    "Content-Type: text/cloud-config; charset=\"us-ascii\" \n",
    "MIME-Version: 1.0\n",
    "Content-Transfer-Encoding: 7bit\n",
    "Content-Disposition: attachment; filename=\"ssh-pwauth-script.txt\" \n",
    "\n",
    "#cloud-config\n",
    "disable_root: false\n",
    "ssh_pwauth: true\n",
    "password: USER_PASSWORD\n",
    "\n",
    "--===============2309984059743762475==\n",
    "Content-Type: text/x-shellscript; charset=\"us-ascii\" \n",
    "MIME-Version: 1.0\n",
    "Content-Transfer-Encoding: 7bit\n",
    "Content-Disposition: attachment; filename=\"passwd-script.txt\" \n",
    "\n",
    "#!/bin/sh\n",
    "echo 'root:USER_PASSWORD' | chpasswd\n",
    "\n",
    "--===============2309984059743762475==--",
);

const SCRIPT_ONLY: &str = concat!(
    "Content-Type: multipart/mixed; boundary=\"===============2309984059743762475==\" \n",
    "MIME-Version: 1.0\n",
    "\n",
    "--===============2309984059743762475==\n",
    "Content-Type: text/x-shellscript; charset=\"us-ascii\" \n",
    "MIME-Version: 1.0\n",
    "Content-Transfer-Encoding: 7bit\n",
    "Content-Disposition: attachment; filename=\"init-shell.txt\" \n",
    "\n",
    "USER_DATA\n",
    "\n",
    "--===============2309984059743762475==--",
);

/// Optional inputs for a composed user-data payload.
///
/// Empty form fields are normalized to `None` by the callers, so `Some("")`
/// does not occur in practice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDataRequest {
    pub password: Option<String>,
    pub script: Option<String>,
}

impl UserDataRequest {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.script.is_none()
    }

    pub fn compose(&self) -> String {
        compose(self.password.as_deref(), self.script.as_deref())
    }
}

/// Builds the MIME multipart/mixed user-data document.
///
/// With a password the payload carries a `text/cloud-config` part that
/// enables root login plus a `chpasswd` shell part; with a script it carries
/// a `text/x-shellscript` part holding the script verbatim; with both, all
/// three parts in that order. With neither, the script part is emitted with
/// an empty body.
///
/// Substitution is literal token replacement. The caller must ensure the
/// values contain neither the sentinel tokens (`USER_PASSWORD`, `USER_DATA`)
/// nor the boundary string, since no escaping is applied to them.
pub fn compose(password: Option<&str>, script: Option<&str>) -> String {
    match (password, script) {
        (Some(password), Some(script)) => PASSWORD_AND_SCRIPT
            .replace(PASSWORD_SENTINEL, password)
            .replace(SCRIPT_SENTINEL, script),
        (Some(password), None) => PASSWORD_ONLY.replace(PASSWORD_SENTINEL, password),
        (None, script) => SCRIPT_ONLY.replace(SCRIPT_SENTINEL, script.unwrap_or("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part_count(payload: &str) -> usize {
        let delimiter = format!("--{}\n", BOUNDARY);
        payload.matches(&delimiter).count()
    }

    #[test]
    fn test_both_inputs_yield_three_parts() {
        let payload = compose(Some("Secret1"), Some("echo hi"));
        assert_eq!(part_count(&payload), 3);
        assert!(payload.ends_with(&format!("--{}--", BOUNDARY)));
    }

    #[test]
    fn test_password_only_yields_two_parts() {
        let payload = compose(Some("Secret1"), None);
        assert_eq!(part_count(&payload), 2);
        assert!(payload.contains("password: Secret1\n"));
        assert!(payload.contains("echo 'root:Secret1' | chpasswd\n"));
        assert!(!payload.contains("init-shell.txt"));
    }

    #[test]
    fn test_script_only_yields_single_shellscript_part() {
        let payload = compose(None, Some("echo hi"));
        assert_eq!(part_count(&payload), 1);
        assert!(!payload.contains("text/cloud-config"));
        assert!(payload.contains("\necho hi\n"));
    }

    #[test]
    fn test_password_replaced_in_every_position() {
        let payload = compose(Some("pw"), Some("run"));
        assert!(!payload.contains(PASSWORD_SENTINEL));
        assert!(!payload.contains(SCRIPT_SENTINEL));
        assert!(payload.contains("password: pw\n"));
        assert!(payload.contains("echo 'root:pw' | chpasswd\n"));
    }

    #[test]
    fn test_no_inputs_gives_empty_script_body() {
        let payload = compose(None, None);
        assert_eq!(part_count(&payload), 1);
        assert!(payload.contains("\n\n\n--"));
        assert!(!payload.contains(SCRIPT_SENTINEL));
    }

    #[test]
    fn test_request_wrapper_matches_free_function() {
        let req = UserDataRequest {
            password: Some("pw".into()),
            script: None,
        };
        assert_eq!(req.compose(), compose(Some("pw"), None));
        assert!(!req.is_empty());
        assert!(UserDataRequest::default().is_empty());
    }
}
