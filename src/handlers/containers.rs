use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;

use crate::api::{load_container, load_containers};
use crate::models::{AppState, DetailCard, DetailRow};
use crate::templates::{ContainerDetailTemplate, ContainersTemplate};
use crate::utils::{pretty_json, yes_no};

use super::helpers::{build_template_globals, render_template, require_policy, TemplateGlobals};

pub async fn containers_list(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "container:container:get_all") {
        return redirect;
    }
    let containers = load_containers(&state.client, &state.api_base_url, &state.api_token).await;
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(ContainersTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        containers: &containers,
    })
}

fn text_of(data: &Value, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

fn text_row(data: &Value, label: &str, key: &str) -> DetailRow {
    DetailRow::text(label, text_of(data, key))
}

fn pre_row(data: &Value, label: &str, key: &str) -> DetailRow {
    DetailRow::pre(label, pretty_json(data.get(key).unwrap_or(&Value::Null)))
}

fn base_info_card(data: &Value) -> DetailCard {
    DetailCard::new(
        "Base Info",
        vec![
            text_row(data, "ID", "uuid"),
            text_row(data, "Name", "name"),
            text_row(data, "Status", "status"),
            text_row(data, "Status Detail", "status_detail"),
            text_row(data, "Status Reason", "status_reason"),
            text_row(data, "Task State", "task_state"),
            text_row(data, "Command", "command"),
        ],
    )
}

fn miscellaneous_card(data: &Value) -> DetailCard {
    let interactive = data
        .get("interactive")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let labels = data
        .get("labels")
        .and_then(|v| v.get("cloud-shell"))
        .and_then(|v| v.as_str())
        .unwrap_or("-")
        .to_string();
    DetailCard::new(
        "Miscellaneous",
        vec![
            text_row(data, "Host", "host"),
            text_row(data, "Workdir", "workdir"),
            pre_row(data, "Environment", "environment"),
            DetailRow::text("Interactive", yes_no(interactive)),
            DetailRow::text("Labels", labels),
            pre_row(data, "Links", "links"),
        ],
    )
}

fn spec_card(data: &Value) -> DetailCard {
    DetailCard::new(
        "Spec",
        vec![
            text_row(data, "Image", "image"),
            text_row(data, "Image Driver", "image_driver"),
            text_row(data, "Image Pull Policy", "image_pull_policy"),
            text_row(data, "Hostname", "hostname"),
            text_row(data, "Runtime", "runtime"),
            text_row(data, "CPU", "cpu"),
            text_row(data, "Memory", "memory"),
            text_row(data, "Disk", "disk"),
            pre_row(data, "Restart Policy", "restart_policy"),
            text_row(data, "Auto Remove", "auto_remove"),
            text_row(data, "Auto Heal", "auto_heal"),
            pre_row(data, "Addresses", "addresses"),
            pre_row(data, "Ports", "ports"),
            pre_row(data, "Security Groups", "security_groups"),
        ],
    )
}

pub async fn container_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(container_id): Path<String>,
) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "container:container:get_one") {
        return redirect;
    }
    let data = load_container(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        &container_id,
    )
    .await;
    let container_name = text_of(&data, "name");
    let left_cards = vec![base_info_card(&data), miscellaneous_card(&data)];
    let right_cards = vec![spec_card(&data)];
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(ContainerDetailTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        container_name,
        left_cards,
        right_cards,
    })
}
