use askama::Template;

use crate::models::{ContainerView, CurrentUser};

#[derive(Template)]
#[template(path = "containers.html")]
pub struct ContainersTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub containers: &'a [ContainerView],
}

crate::impl_base_template!(ContainersTemplate<'_>);
