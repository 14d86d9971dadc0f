use askama::Template;

use crate::models::{ActionButtonView, ActionLogEntry, CurrentUser, DetailRow, ServerView};

#[derive(Template)]
#[template(path = "server_detail.html")]
pub struct ServerDetailTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub server: ServerView,
    pub details: Vec<DetailRow>,
    pub action_buttons: Vec<ActionButtonView>,
    pub action_log: Vec<ActionLogEntry>,
}

crate::impl_base_template!(ServerDetailTemplate);
