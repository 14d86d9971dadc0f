use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::actions;
use crate::models::AppState;
use crate::templates::ConfirmationTemplate;

use super::helpers::{build_template_globals, render_template, require_policy, TemplateGlobals};

/// Shared confirm dialog for every registered action.
pub async fn confirmation_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((action_id, target_id)): Path<(String, String)>,
) -> Response {
    let Some(action) = actions::lookup(&action_id) else {
        return Redirect::to("/servers").into_response();
    };
    if let Err(redirect) = require_policy(&state, &jar, action.policy()) {
        return redirect;
    }
    let button_class = if action.danger() { "danger" } else { "primary" };
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(ConfirmationTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        title: action.title().to_string(),
        message: action.confirm_message(&target_id),
        target_url: action.submit_path(&target_id),
        confirm_label: action.title().to_string(),
        cancel_url: action.done_path(&target_id),
        button_class: button_class.to_string(),
    })
}
