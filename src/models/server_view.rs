/// Row model for the servers list and the detail header.
#[derive(Clone, Debug)]
pub struct ServerView {
    pub id: String,
    pub name: String,
    pub image_name: String,
    pub fixed_addresses: Vec<String>,
    pub floating_addresses: Vec<String>,
    pub flavor: String,
    pub status: String,
    pub status_display: String,
    pub task_state: Option<String>,
    pub vm_state: Option<String>,
    pub power_state_display: String,
    pub locked: bool,
    pub created_display: String,
}

impl ServerView {
    pub fn new_with_defaults(server_id: String) -> Self {
        Self {
            id: server_id,
            name: "(no name)".into(),
            image_name: "".into(),
            fixed_addresses: vec![],
            floating_addresses: vec![],
            flavor: "".into(),
            status: "".into(),
            status_display: "".into(),
            task_state: None,
            vm_state: None,
            power_state_display: "".into(),
            locked: false,
            created_display: "".into(),
        }
    }

    /// Lock badge shown next to the name, matching the list column.
    pub fn lock_display(&self) -> &'static str {
        if self.locked {
            "Locked"
        } else {
            "Unlocked"
        }
    }
}
