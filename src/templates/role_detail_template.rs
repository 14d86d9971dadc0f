use askama::Template;

use crate::models::{CurrentUser, RoleView};

#[derive(Template)]
#[template(path = "role_detail.html")]
pub struct RoleDetailTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub role: RoleView,
}

crate::impl_base_template!(RoleDetailTemplate);
