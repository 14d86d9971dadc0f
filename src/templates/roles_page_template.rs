use askama::Template;

use crate::models::{CurrentUser, RoleView};

#[derive(Template)]
#[template(path = "roles.html")]
pub struct RolesTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub roles: &'a [RoleView],
    pub name_filter: String,
}

crate::impl_base_template!(RolesTemplate<'_>);
