#[derive(Clone, Debug)]
pub struct ShareGroupTypeView {
    pub id: String,
    pub name: String,
    pub visibility_display: String,
    pub group_specs_display: String,
}
