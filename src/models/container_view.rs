/// Row model for the containers list; the detail page is card-based.
#[derive(Clone, Debug)]
pub struct ContainerView {
    pub uuid: String,
    pub name: String,
    pub status: String,
    pub image: String,
    pub host: String,
}
