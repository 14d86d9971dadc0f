use askama::Template;

use crate::models::{CurrentUser, VolumeView};

#[derive(Template)]
#[template(path = "volumes.html")]
pub struct VolumesTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub volumes: &'a [VolumeView],
}

crate::impl_base_template!(VolumesTemplate<'_>);
