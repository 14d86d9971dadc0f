use askama::Template;

use crate::models::{CapsuleView, CurrentUser};

#[derive(Template)]
#[template(path = "capsules.html")]
pub struct CapsulesTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub capsules: &'a [CapsuleView],
    pub can_delete: bool,
}

crate::impl_base_template!(CapsulesTemplate<'_>);
