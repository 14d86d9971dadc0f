use serde::{Deserialize, Serialize};

/// Local console account persisted in users.json.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
    pub role: String,
}
