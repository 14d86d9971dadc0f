use askama::Template;

use crate::models::{CurrentUser, PortView};

#[derive(Template)]
#[template(path = "ports.html")]
pub struct PortsTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub ports: &'a [PortView],
}

crate::impl_base_template!(PortsTemplate<'_>);
