use askama::Template;

use crate::models::{CurrentUser, ShareGroupTypeView};

#[derive(Template)]
#[template(path = "share_group_types.html")]
pub struct ShareGroupTypesTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub share_group_types: &'a [ShareGroupTypeView],
}

crate::impl_base_template!(ShareGroupTypesTemplate<'_>);
