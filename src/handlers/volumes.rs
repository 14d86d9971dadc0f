use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::{load_volume, load_volumes};
use crate::models::{AppState, DetailCard, DetailRow, VolumeView};
use crate::templates::{VolumeDetailTemplate, VolumesTemplate};

use super::helpers::{build_template_globals, flash, render_template, require_policy, TemplateGlobals};

pub async fn volumes_list(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "volume:get_all") {
        return redirect;
    }
    let volumes = load_volumes(&state.client, &state.api_base_url, &state.api_token).await;
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(VolumesTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        volumes: &volumes,
    })
}

/// Attachment, source-image, and transfer cards; the latter two only when
/// the volume actually has that data.
fn volume_cards(volume: &VolumeView) -> Vec<DetailCard> {
    let attachment_rows = if volume.attachments.is_empty() {
        vec![DetailRow::text("Attached To", "-")]
    } else {
        volume
            .attachments
            .iter()
            .map(|att| {
                DetailRow::text(
                    "Attached To",
                    format!("{} on {}", att.device, att.server_name),
                )
            })
            .collect()
    };
    let mut cards = vec![DetailCard::new("Attachments Info", attachment_rows)];
    if let Some(image) = &volume.image {
        cards.push(DetailCard::new(
            "Volume Source",
            vec![
                DetailRow::text("Image", image.image_name.clone()),
                DetailRow::text("Image ID", image.image_id.clone()),
            ],
        ));
    }
    if let Some(transfer) = &volume.transfer {
        cards.push(DetailCard::new(
            "Volume Transfer",
            vec![
                DetailRow::text("ID", transfer.id.clone()),
                DetailRow::text("Name", transfer.name.clone()),
                DetailRow::text("Created", transfer.created_display.clone()),
            ],
        ));
    }
    cards
}

pub async fn volume_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(volume_id): Path<String>,
) -> Response {
    if let Err(redirect) = require_policy(&state, &jar, "volume:get") {
        return redirect;
    }
    let Some(volume) = load_volume(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        &volume_id,
    )
    .await
    else {
        flash(&state, &jar, format!("Volume {} was not found.", volume_id));
        return Redirect::to("/volumes").into_response();
    };
    let cards = volume_cards(&volume);
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(VolumeDetailTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        volume,
        cards,
    })
}
