/// One row of the instance action log.
#[derive(Clone, Debug)]
pub struct ActionLogEntry {
    pub action_display: String,
    pub request_id: String,
    pub user_id: String,
    pub project_id: String,
    pub start_display: String,
    pub message: String,
}

/// One event of a single logged request.
#[derive(Clone, Debug)]
pub struct ActionEventView {
    pub event_display: String,
    pub start_display: String,
    pub finish_display: String,
    pub result_display: String,
}
