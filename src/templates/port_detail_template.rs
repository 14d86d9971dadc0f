use askama::Template;

use crate::models::{CurrentUser, DetailRow, PortView};

#[derive(Template)]
#[template(path = "port_detail.html")]
pub struct PortDetailTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub port: PortView,
    pub infos: Vec<DetailRow>,
    /// Ports with port security disabled hide the security groups section.
    pub show_security_groups: bool,
}

crate::impl_base_template!(PortDetailTemplate);
