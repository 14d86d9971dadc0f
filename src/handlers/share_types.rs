use axum::{extract::State, response::Response};
use axum_extra::extract::cookie::CookieJar;

use crate::api::load_share_group_types;
use crate::models::AppState;
use crate::templates::ShareGroupTypesTemplate;

use super::helpers::{build_template_globals, render_template, require_policy, TemplateGlobals};

pub async fn share_group_types_list(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "manila:share_type:index") {
        return redirect;
    }
    let share_group_types =
        load_share_group_types(&state.client, &state.api_base_url, &state.api_token).await;
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(ShareGroupTypesTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        share_group_types: &share_group_types,
    })
}
