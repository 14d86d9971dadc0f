use askama::Template;

use crate::models::{ActionEventView, CurrentUser};

#[derive(Template)]
#[template(path = "request_events.html")]
pub struct RequestEventsTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub server_id: String,
    pub request_id: String,
    pub events: Vec<ActionEventView>,
}

crate::impl_base_template!(RequestEventsTemplate);
