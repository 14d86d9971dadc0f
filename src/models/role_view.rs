#[derive(Clone, Debug)]
pub struct RoleView {
    pub id: String,
    pub name: String,
    pub description: String,
}
