pub mod auth;
pub mod capsules;
pub mod containers;
pub mod helpers;
pub mod middleware;
pub mod ports;
pub mod roles;
pub mod servers;
pub mod share_types;
pub mod system;
pub mod volumes;
