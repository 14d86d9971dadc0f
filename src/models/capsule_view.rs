#[derive(Clone, Debug)]
pub struct CapsuleView {
    pub uuid: String,
    pub name: String,
    pub status: String,
    pub cpu_display: String,
    pub memory_display: String,
    pub created_display: String,
}
