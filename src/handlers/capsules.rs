use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::actions;
use crate::api::load_capsules;
use crate::models::AppState;
use crate::policy;
use crate::templates::CapsulesTemplate;

use super::helpers::{
    build_template_globals, flash, render_template, require_policy, response_error_message,
    response_failed, TemplateGlobals,
};

pub async fn capsules_list(State(state): State<AppState>, jar: CookieJar) -> Response {
    let user = match require_policy(&state, &jar, "container:capsule:get_all") {
        Ok(user) => user,
        Err(redirect) => return redirect,
    };
    let capsules = load_capsules(&state.client, &state.api_base_url, &state.api_token).await;
    let can_delete = policy::allows(&user.role, "container:capsule:delete");
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(CapsulesTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        capsules: &capsules,
        can_delete,
    })
}

pub async fn capsule_delete_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(capsule_id): Path<String>,
) -> Response {
    let Some(action) = actions::lookup("delete-capsule") else {
        return Redirect::to("/capsules").into_response();
    };
    if let Err(redirect) = require_policy(&state, &jar, action.policy()) {
        return redirect;
    }
    let response = action.submit(&state, &capsule_id).await;
    if response_failed(&response) {
        flash(&state, &jar, response_error_message(&response));
    } else {
        flash(&state, &jar, format!("Capsule {} deleted.", capsule_id));
    }
    Redirect::to(&action.done_path(&capsule_id)).into_response()
}
