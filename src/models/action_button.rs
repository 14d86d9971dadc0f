/// A rendered action button: links into the shared confirm dialog.
#[derive(Clone, Debug)]
pub struct ActionButtonView {
    pub title: String,
    pub confirm_href: String,
    pub danger: bool,
}
