// Per-resource display dictionaries and payload builders
pub mod instance;
pub mod network;
pub mod userdata;
