//! Local console accounts: PBKDF2 password hashing and the users.json store.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use hex::encode as hex_encode;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;

use crate::config::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_ROLE, DEFAULT_ADMIN_USERNAME, DEFAULT_PBKDF2_ITERATIONS,
};
use crate::models::UserRecord;

pub const USERS_FILE: &str = "users.json";

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("failed to access the account store: {0}")]
    Io(#[from] std::io::Error),
    #[error("account store is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

pub fn generate_password_hash(password: &str) -> String {
    let mut salt_bytes = [0u8; 12];
    rand::rngs::OsRng.fill_bytes(&mut salt_bytes);
    let salt = hex_encode(salt_bytes);
    let mut dk = [0u8; 32];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        DEFAULT_PBKDF2_ITERATIONS,
        &mut dk,
    );
    let hash_hex = hex_encode(dk);
    format!(
        "pbkdf2:sha256:{}${}${}",
        DEFAULT_PBKDF2_ITERATIONS, salt, hash_hex
    )
}

pub fn verify_password(stored: &str, candidate: &str) -> bool {
    if let Some(rest) = stored.strip_prefix("pbkdf2:sha256:") {
        if let Some((iter_s, salt_hash)) = rest.split_once('$') {
            if let Some((salt, expected_hash)) = salt_hash.split_once('$') {
                if let Ok(iter) = iter_s.parse::<u32>() {
                    let mut dk = [0u8; 32];
                    pbkdf2_hmac::<Sha256>(candidate.as_bytes(), salt.as_bytes(), iter, &mut dk);
                    let computed = hex_encode(dk);
                    return computed == expected_hash;
                }
            }
        }
    }
    false
}

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex_encode(b)
}

/// Load accounts from a store file. When the file is missing, a default
/// admin account is seeded and written back.
pub fn load_users_from_path(path: &Path) -> Arc<Mutex<HashMap<String, UserRecord>>> {
    let mut map: HashMap<String, UserRecord> = HashMap::new();

    if path.exists() {
        if let Ok(text) = std::fs::read_to_string(path) {
            if let Ok(json_val) = serde_json::from_str::<serde_json::Value>(&text) {
                if let Some(obj) = json_val.as_object() {
                    for (k, v) in obj.iter() {
                        if let Some(pw) = v.get("password").and_then(|x| x.as_str()) {
                            let role = v
                                .get("role")
                                .and_then(|x| x.as_str())
                                .unwrap_or("member")
                                .to_string();
                            map.insert(
                                k.to_lowercase(),
                                UserRecord {
                                    password: pw.to_string(),
                                    role,
                                },
                            );
                        }
                    }
                }
            }
        }
    } else {
        map.insert(
            DEFAULT_ADMIN_USERNAME.into(),
            UserRecord {
                password: generate_password_hash(DEFAULT_ADMIN_PASSWORD),
                role: DEFAULT_ADMIN_ROLE.into(),
            },
        );
        let store = Arc::new(Mutex::new(map));
        if let Err(e) = persist_users_to_path(&store, path) {
            tracing::warn!(%e, "Could not seed the account store");
        }
        return store;
    }

    Arc::new(Mutex::new(map))
}

pub fn load_users_from_file() -> Arc<Mutex<HashMap<String, UserRecord>>> {
    load_users_from_path(Path::new(USERS_FILE))
}

pub fn persist_users_to_path(
    users_arc: &Arc<Mutex<HashMap<String, UserRecord>>>,
    path: &Path,
) -> Result<(), AccountError> {
    let users = users_arc.lock().unwrap();
    let mut serialized: serde_json::Map<String, serde_json::Value> = serde_json::Map::new();
    for (u, rec) in users.iter() {
        serialized.insert(
            u.clone(),
            serde_json::json!({"password": rec.password, "role": rec.role}),
        );
    }
    let text = serde_json::to_string_pretty(&serde_json::Value::Object(serialized))?;
    std::fs::write(path, text)?;
    Ok(())
}

pub fn persist_users_file(
    users_arc: &Arc<Mutex<HashMap<String, UserRecord>>>,
) -> Result<(), AccountError> {
    persist_users_to_path(users_arc, Path::new(USERS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_round_trip() {
        let hash = generate_password_hash("s3cret");
        assert!(hash.starts_with("pbkdf2:sha256:"));
        assert!(verify_password(&hash, "s3cret"));
        assert!(!verify_password(&hash, "other"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("plaintext", "plaintext"));
        assert!(!verify_password("pbkdf2:sha256:abc", "x"));
    }

    #[test]
    fn test_session_ids_are_random_hex() {
        let a = random_session_id();
        let b = random_session_id();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_store_round_trip_and_seeding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        // Missing file seeds the default admin
        let store = load_users_from_path(&path);
        assert!(store.lock().unwrap().contains_key(DEFAULT_ADMIN_USERNAME));
        assert!(path.exists());

        store.lock().unwrap().insert(
            "viewer".into(),
            UserRecord {
                password: generate_password_hash("pw"),
                role: "member".into(),
            },
        );
        persist_users_to_path(&store, &path).unwrap();

        let reloaded = load_users_from_path(&path);
        let map = reloaded.lock().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("viewer").unwrap().role, "member");
    }
}
