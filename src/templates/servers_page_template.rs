use askama::Template;

use crate::models::{CurrentUser, ServerView};

#[derive(Template)]
#[template(path = "servers.html")]
pub struct ServersTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub servers: &'a [ServerView],
    pub name_filter: String,
    pub can_launch: bool,
}

crate::impl_base_template!(ServersTemplate<'_>);
