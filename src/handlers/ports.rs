use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::{load_port, load_ports};
use crate::models::{AppState, DetailRow, PortView};
use crate::templates::{PortDetailTemplate, PortsTemplate};
use crate::utils::yes_no;

use super::helpers::{build_template_globals, flash, render_template, require_policy, TemplateGlobals};

pub async fn ports_list(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "get_port") {
        return redirect;
    }
    let ports = load_ports(&state.client, &state.api_base_url, &state.api_token).await;
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(PortsTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        ports: &ports,
    })
}

fn port_infos(port: &PortView) -> Vec<DetailRow> {
    vec![
        DetailRow::text("Name", port.name.clone()),
        DetailRow::text("Created At", port.created_display.clone()),
        DetailRow::text("Status", port.status_display.clone()),
        DetailRow::text("Network ID", port.network_id.clone()),
        DetailRow::text(
            "Port Security Enabled",
            yes_no(port.port_security_enabled),
        ),
        DetailRow::text("Mac Address", port.mac_address.clone()),
        DetailRow::text("Description", port.description.clone()),
    ]
}

pub async fn port_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(port_id): Path<String>,
) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "get_port") {
        return redirect;
    }
    let Some(port) = load_port(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        &port_id,
    )
    .await
    else {
        flash(&state, &jar, format!("Port {} was not found.", port_id));
        return Redirect::to("/ports").into_response();
    };
    let infos = port_infos(&port);
    // Ports with port security disabled have no effective security groups.
    let show_security_groups = port.port_security_enabled;
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(PortDetailTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        port,
        infos,
        show_security_groups,
    })
}
