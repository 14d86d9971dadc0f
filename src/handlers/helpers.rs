use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, CurrentUser};
use crate::policy;

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get("session_id").map(|c| c.value().to_string())
}

pub fn current_username_from_jar(state: &AppState, jar: &CookieJar) -> Option<String> {
    let sid = session_id_from_jar(jar)?;
    state.sessions.lock().unwrap().get(&sid).cloned()
}

pub fn build_current_user(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let username = current_username_from_jar(state, jar)?;
    let role = state.role_of(&username);
    Some(CurrentUser { username, role })
}

pub fn take_flash_messages(state: &AppState, jar: &CookieJar) -> Vec<String> {
    let Some(sid) = session_id_from_jar(jar) else {
        return vec![];
    };
    let mut fs = state.flash_store.lock().unwrap();
    fs.remove(&sid).unwrap_or_default()
}

pub fn flash(state: &AppState, jar: &CookieJar, message: String) {
    if let Some(sid) = session_id_from_jar(jar) {
        state.push_flash(&sid, message);
    }
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

pub fn build_template_globals(state: &AppState, jar: &CookieJar) -> TemplateGlobals {
    let current_user = build_current_user(state, jar);
    let flash_messages = take_flash_messages(state, jar);
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        current_user,
        api_hostname: crate::utils::hostname_from_url(&state.api_base_url),
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Resolves the session to a user and checks the policy gate. On failure
/// the caller returns the ready-made redirect.
pub fn require_policy(
    state: &AppState,
    jar: &CookieJar,
    policy_str: &'static str,
) -> Result<CurrentUser, Response> {
    let Some(user) = build_current_user(state, jar) else {
        return Err(Redirect::to("/login").into_response());
    };
    if !policy::allows(&user.role, policy_str) {
        flash(
            state,
            jar,
            "You are not authorized to perform this operation.".to_string(),
        );
        return Err(Redirect::to("/servers").into_response());
    }
    Ok(user)
}

/// True when the backend response carries an error payload: a transport
/// error, an empty-body status >= 400, or a fault envelope like
/// `{"badRequest": {"message": ..., "code": 400}}`.
pub fn response_failed(payload: &serde_json::Value) -> bool {
    if payload.get("error").is_some() {
        return true;
    }
    if matches!(
        payload.get("status").and_then(|s| s.as_u64()),
        Some(code) if code >= 400
    ) {
        return true;
    }
    if let Some(obj) = payload.as_object() {
        if obj.len() == 1 {
            if let Some(inner) = obj.values().next() {
                return inner.get("message").is_some() && inner.get("code").is_some();
            }
        }
    }
    false
}

pub fn response_error_message(payload: &serde_json::Value) -> String {
    if let Some(err) = payload.get("error").and_then(|v| v.as_str()) {
        return err.to_string();
    }
    // Backend services wrap faults as {"<fault>": {"message": ...}}
    if let Some(obj) = payload.as_object() {
        for value in obj.values() {
            if let Some(message) = value.get("message").and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    "The backend rejected the request.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fault_envelopes_are_failures() {
        assert!(response_failed(&json!({"error": "Request failed: timeout"})));
        assert!(response_failed(&json!({"status": 409})));
        assert!(response_failed(
            &json!({"badRequest": {"message": "Invalid imageRef", "code": 400}})
        ));
        assert!(!response_failed(&json!({"status": 204})));
        assert!(!response_failed(&json!({"server": {"id": "abc"}})));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            response_error_message(&json!({"error": "Request failed"})),
            "Request failed"
        );
        assert_eq!(
            response_error_message(
                &json!({"itemNotFound": {"message": "Instance could not be found", "code": 404}})
            ),
            "Instance could not be found"
        );
        assert_eq!(
            response_error_message(&json!({})),
            "The backend rejected the request."
        );
    }
}
