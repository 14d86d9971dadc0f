use askama::Template;

use crate::models::{CurrentUser, DetailCard};

#[derive(Template)]
#[template(path = "container_detail.html")]
pub struct ContainerDetailTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub container_name: String,
    pub left_cards: Vec<DetailCard>,
    pub right_cards: Vec<DetailCard>,
}

crate::impl_base_template!(ContainerDetailTemplate);
