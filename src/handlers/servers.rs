use axum::{
    extract::{Form, Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use base64::Engine;
use serde::Deserialize;

use crate::actions;
use crate::api::{
    launch_server, load_action_events, load_action_log, load_server, load_servers,
};
use crate::models::{ActionButtonView, AppState, DetailRow, LaunchForm, ServerView};
use crate::policy;
use crate::resources::instance;
use crate::resources::userdata;
use crate::templates::{
    LaunchTemplate, RequestEventsTemplate, ServerDetailTemplate, ServersTemplate,
};
use crate::utils::build_query_string;

use super::helpers::{
    build_template_globals, flash, render_template, require_policy, response_error_message,
    response_failed, TemplateGlobals,
};

#[derive(Deserialize)]
pub struct NameFilter {
    #[serde(default)]
    pub name: String,
}

pub async fn servers_list(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(filter): Query<NameFilter>,
) -> Response {
    let user = match require_policy(&state, &jar, "os_compute_api:servers:index") {
        Ok(user) => user,
        Err(redirect) => return redirect,
    };
    let servers = load_servers(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        Some(filter.name.as_str()),
    )
    .await;
    let can_launch = policy::allows(&user.role, "os_compute_api:servers:create");
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(ServersTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        servers: &servers,
        name_filter: filter.name,
        can_launch,
    })
}

fn detail_rows(server: &ServerView) -> Vec<DetailRow> {
    let mut rows = vec![
        DetailRow::text("Name", server.name.clone()),
        DetailRow::text("ID", server.id.clone()),
        DetailRow::text("Status", server.status_display.clone()),
        DetailRow::text(
            "Task State",
            instance::format_task_state(server.task_state.as_deref()),
        ),
        DetailRow::text("Lock State", server.lock_display()),
        DetailRow::text("Image", server.image_name.clone()),
        DetailRow::text("Flavor", server.flavor.clone()),
    ];
    if !server.power_state_display.is_empty() {
        rows.push(DetailRow::text(
            "Power State",
            server.power_state_display.clone(),
        ));
    }
    if !server.fixed_addresses.is_empty() {
        rows.push(DetailRow::text(
            "Fixed IPs",
            server.fixed_addresses.join(", "),
        ));
    }
    if !server.floating_addresses.is_empty() {
        rows.push(DetailRow::text(
            "Floating IPs",
            server.floating_addresses.join(", "),
        ));
    }
    rows.push(DetailRow::text("Created", server.created_display.clone()));
    rows
}

/// Action buttons for one server, filtered by policy, lock state, and the
/// status the action makes sense in.
fn action_buttons(server: &ServerView, role: &str, is_admin: bool) -> Vec<ActionButtonView> {
    let vm_state = server.vm_state.as_deref();
    let task_state = server.task_state.as_deref();
    let lock_ok = instance::is_not_locked_or_admin(server.locked, is_admin);
    let mut buttons = Vec::new();
    for action in actions::all() {
        if !policy::allows(role, action.policy()) {
            continue;
        }
        let visible = match action.id() {
            "start-server" => lock_ok && instance::is_shut_off(&server.status, vm_state),
            "stop-server" => lock_ok && instance::is_active(&server.status, vm_state),
            "reboot-server" => {
                lock_ok && instance::is_active_or_shut_off(&server.status, vm_state)
            }
            "lock-server" => !server.locked,
            "unlock-server" => server.locked && is_admin,
            "delete-server" => lock_ok && instance::is_not_deleting(task_state),
            _ => false,
        };
        if visible {
            buttons.push(ActionButtonView {
                title: action.title().to_string(),
                confirm_href: format!("/confirm/{}/{}", action.id(), server.id),
                danger: action.danger(),
            });
        }
    }
    buttons
}

pub async fn server_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(server_id): Path<String>,
) -> Response {
    let user = match require_policy(&state, &jar, "os_compute_api:servers:show") {
        Ok(user) => user,
        Err(redirect) => return redirect,
    };
    let (server, _raw) = load_server(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        &server_id,
    )
    .await;
    let action_log = if policy::allows(&user.role, "os_compute_api:os-instance-actions:list") {
        load_action_log(
            &state.client,
            &state.api_base_url,
            &state.api_token,
            &server_id,
        )
        .await
    } else {
        vec![]
    };
    let details = detail_rows(&server);
    let action_buttons = action_buttons(&server, &user.role, user.is_admin());
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(ServerDetailTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        server,
        details,
        action_buttons,
        action_log,
    })
}

/// Event breakdown of one logged request.
pub async fn request_events(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((server_id, request_id)): Path<(String, String)>,
) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "os_compute_api:os-instance-actions:list")
    {
        return redirect;
    }
    let events = load_action_events(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        &server_id,
        &request_id,
    )
    .await;
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(RequestEventsTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        server_id,
        request_id,
        events,
    })
}

pub async fn launch_get(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "os_compute_api:servers:create") {
        return redirect;
    }
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(LaunchTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        error: None,
    })
}

pub async fn launch_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LaunchForm>,
) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "os_compute_api:servers:create") {
        return redirect;
    }
    // Root password and init script ride along as cloud-init user-data;
    // the compute API wants the document base64-encoded.
    let user_data = if form.password().is_some() || form.script().is_some() {
        let payload = userdata::compose(form.password(), form.script());
        Some(base64::engine::general_purpose::STANDARD.encode(payload))
    } else {
        None
    };
    let response = launch_server(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        form.name.trim(),
        form.image_ref.trim(),
        form.flavor_ref.trim(),
        form.network_id.trim(),
        user_data,
    )
    .await;
    if response_failed(&response) {
        let TemplateGlobals {
            current_user,
            api_hostname,
            base_url,
            flash_messages,
            has_flash_messages,
        } = build_template_globals(&state, &jar);
        return render_template(LaunchTemplate {
            current_user,
            api_hostname,
            base_url,
            flash_messages,
            has_flash_messages,
            error: Some(response_error_message(&response)),
        });
    }
    flash(&state, &jar, format!("Server {} is building.", form.name));
    if let Some(id) = response
        .get("server")
        .and_then(|s| s.get("id"))
        .and_then(|v| v.as_str())
    {
        return Redirect::to(&format!("/servers/{}", id)).into_response();
    }
    let query = build_query_string(&[("name", form.name.trim())]);
    Redirect::to(&format!("/servers{}", query)).into_response()
}

/// Shared submit path for the confirm-dialog server actions.
async fn submit_server_action(
    state: AppState,
    jar: CookieJar,
    server_id: String,
    action_id: &str,
) -> Response {
    let Some(action) = actions::lookup(action_id) else {
        return Redirect::to("/servers").into_response();
    };
    let user = match require_policy(&state, &jar, action.policy()) {
        Ok(user) => user,
        Err(redirect) => return redirect,
    };
    let (server, _raw) = load_server(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        &server_id,
    )
    .await;
    // Unlock is the one action a locked instance accepts.
    if action.id() != "unlock-server"
        && !instance::is_not_locked_or_admin(server.locked, user.is_admin())
    {
        flash(
            &state,
            &jar,
            "This instance is locked; an admin must unlock it first.".to_string(),
        );
        return Redirect::to(&format!("/servers/{}", server_id)).into_response();
    }
    if !instance::is_not_deleting(server.task_state.as_deref()) {
        flash(&state, &jar, "This instance is being deleted.".to_string());
        return Redirect::to(&format!("/servers/{}", server_id)).into_response();
    }
    let response = action.submit(&state, &server_id).await;
    if response_failed(&response) {
        flash(&state, &jar, response_error_message(&response));
        return Redirect::to(&format!("/servers/{}", server_id)).into_response();
    }
    flash(&state, &jar, format!("{} submitted.", action.title()));
    Redirect::to(&action.done_path(&server_id)).into_response()
}

pub async fn server_start_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(server_id): Path<String>,
) -> Response {
    submit_server_action(state, jar, server_id, "start-server").await
}

pub async fn server_stop_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(server_id): Path<String>,
) -> Response {
    submit_server_action(state, jar, server_id, "stop-server").await
}

pub async fn server_reboot_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(server_id): Path<String>,
) -> Response {
    submit_server_action(state, jar, server_id, "reboot-server").await
}

pub async fn server_lock_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(server_id): Path<String>,
) -> Response {
    submit_server_action(state, jar, server_id, "lock-server").await
}

pub async fn server_unlock_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(server_id): Path<String>,
) -> Response {
    submit_server_action(state, jar, server_id, "unlock-server").await
}

pub async fn server_delete_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(server_id): Path<String>,
) -> Response {
    submit_server_action(state, jar, server_id, "delete-server").await
}
