pub mod accounts;

pub use accounts::{
    generate_password_hash, load_users_from_file, persist_users_file, random_session_id,
    verify_password, AccountError,
};
