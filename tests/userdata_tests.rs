use nimbus::resources::userdata::{compose, BOUNDARY, UserDataRequest};

fn boundary_line() -> String {
    format!("--{}\n", BOUNDARY)
}

fn closing_line() -> String {
    format!("--{}--", BOUNDARY)
}

/// Body of the init-shell part: everything between the part's blank line
/// and the trailing blank line before the closing boundary.
fn init_shell_body(payload: &str) -> &str {
    let marker = "Content-Disposition: attachment; filename=\"init-shell.txt\" \n\n";
    let start = payload.find(marker).expect("init-shell part present") + marker.len();
    let rest = &payload[start..];
    let end = rest.find("\n\n--").expect("part terminator present");
    &rest[..end]
}

#[test]
fn test_password_and_script_yield_three_parts_in_order() {
    let payload = compose(Some("Secret1"), Some("echo hi"));

    assert_eq!(payload.matches(&boundary_line()).count(), 3);
    assert!(payload.ends_with(&closing_line()));

    let cloud_config = payload.find("text/cloud-config").unwrap();
    let chpasswd = payload.find("passwd-script.txt").unwrap();
    let user_script = payload.find("init-shell.txt").unwrap();
    assert!(cloud_config < chpasswd);
    assert!(chpasswd < user_script);

    assert!(payload.contains("password: Secret1\n"));
    assert!(payload.contains("echo 'root:Secret1' | chpasswd\n"));
    assert_eq!(init_shell_body(&payload), "echo hi");
}

#[test]
fn test_password_only_yields_two_parts() {
    let payload = compose(Some("Secret1"), None);

    assert_eq!(payload.matches(&boundary_line()).count(), 2);
    assert!(payload.ends_with(&closing_line()));
    assert!(payload.contains("password: Secret1\n"));
    assert!(payload.contains("echo 'root:Secret1' | chpasswd\n"));
    // No third part: the only shellscript is the chpasswd snippet
    assert!(!payload.contains("init-shell.txt"));
    assert_eq!(payload.matches("text/x-shellscript").count(), 1);
}

#[test]
fn test_script_only_is_single_verbatim_part() {
    let payload = compose(None, Some("echo hi"));

    assert_eq!(payload.matches(&boundary_line()).count(), 1);
    assert!(!payload.contains("text/cloud-config"));
    assert!(!payload.contains("chpasswd"));
    assert_eq!(payload.matches("text/x-shellscript").count(), 1);
    assert_eq!(init_shell_body(&payload), "echo hi");
}

#[test]
fn test_multiline_script_is_preserved_verbatim() {
    let script = "#!/bin/sh\napt-get update\napt-get install -y nginx";
    let payload = compose(None, Some(script));
    assert_eq!(init_shell_body(&payload), script);
}

#[test]
fn test_both_absent_is_script_template_with_empty_body() {
    let payload = compose(None, None);

    assert_eq!(payload, compose(None, Some("")));
    assert_eq!(payload.matches(&boundary_line()).count(), 1);
    assert_eq!(init_shell_body(&payload), "");
    assert!(!payload.contains("USER_DATA"));
}

#[test]
fn test_compose_is_deterministic() {
    let a = compose(Some("pw"), Some("run-me"));
    let b = compose(Some("pw"), Some("run-me"));
    assert_eq!(a, b);

    let req = UserDataRequest {
        password: Some("pw".into()),
        script: Some("run-me".into()),
    };
    assert_eq!(req.compose(), a);
}

#[test]
fn test_document_header_declares_the_fixed_boundary() {
    for payload in [
        compose(Some("x"), Some("y")),
        compose(Some("x"), None),
        compose(None, Some("y")),
    ] {
        let first_line = payload.lines().next().unwrap();
        assert!(first_line.starts_with("Content-Type: multipart/mixed; boundary="));
        assert!(first_line.contains(BOUNDARY));
        assert!(payload.contains("MIME-Version: 1.0\n"));
    }
}
