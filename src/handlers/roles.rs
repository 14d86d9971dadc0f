use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::{load_role, load_roles};
use crate::models::AppState;
use crate::templates::{RoleDetailTemplate, RolesTemplate};

use super::helpers::{build_template_globals, flash, render_template, require_policy, TemplateGlobals};
use super::servers::NameFilter;

pub async fn roles_list(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(filter): Query<NameFilter>,
) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "identity:list_roles") {
        return redirect;
    }
    let roles = load_roles(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        Some(filter.name.as_str()),
    )
    .await;
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(RolesTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        roles: &roles,
        name_filter: filter.name,
    })
}

pub async fn role_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(role_id): Path<String>,
) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "identity:get_role") {
        return redirect;
    }
    let Some(role) = load_role(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        &role_id,
    )
    .await
    else {
        flash(&state, &jar, format!("Role {} was not found.", role_id));
        return Redirect::to("/roles").into_response();
    };
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(RoleDetailTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        role,
    })
}
