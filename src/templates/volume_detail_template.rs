use askama::Template;

use crate::models::{CurrentUser, DetailCard, VolumeView};

#[derive(Template)]
#[template(path = "volume_detail.html")]
pub struct VolumeDetailTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub volume: VolumeView,
    pub cards: Vec<DetailCard>,
}

crate::impl_base_template!(VolumeDetailTemplate);
