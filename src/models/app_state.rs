use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::user_record::UserRecord;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<Mutex<HashMap<String, UserRecord>>>,
    pub sessions: Arc<Mutex<HashMap<String, String>>>,
    pub flash_store: Arc<Mutex<HashMap<String, Vec<String>>>>,
    pub api_base_url: String,
    pub api_token: String,
    pub public_base_url: String,
    pub client: reqwest::Client,
    pub custom_css: Option<String>,
}

impl AppState {
    /// Role of the console account behind a session, empty when unknown.
    pub fn role_of(&self, username: &str) -> String {
        self.users
            .lock()
            .unwrap()
            .get(username)
            .map(|rec| rec.role.clone())
            .unwrap_or_default()
    }

    pub fn push_flash(&self, session_id: &str, message: String) {
        let mut flashes = self.flash_store.lock().unwrap();
        flashes
            .entry(session_id.to_string())
            .or_default()
            .push(message);
    }
}
