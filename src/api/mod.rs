pub mod client;
pub mod compute;
pub mod container;
pub mod identity;
pub mod network;
pub mod share;
pub mod storage;

pub use client::api_call;
pub use compute::{
    delete_server, launch_server, load_action_events, load_action_log, load_server, load_servers,
    server_action,
};
pub use container::{delete_capsule, load_capsules, load_container, load_containers};
pub use identity::{load_role, load_roles};
pub use network::{load_port, load_ports};
pub use share::load_share_group_types;
pub use storage::{load_volume, load_volumes};
