// Base template trait for the shared page chrome
pub mod base_template;
pub use base_template::BaseTemplate;

// Individual template files
pub mod capsules_page_template;
pub mod confirmation_template;
pub mod container_detail_template;
pub mod containers_page_template;
pub mod launch_template;
pub mod login_template;
pub mod port_detail_template;
pub mod ports_page_template;
pub mod request_events_template;
pub mod role_detail_template;
pub mod roles_page_template;
pub mod server_detail_template;
pub mod servers_page_template;
pub mod share_group_types_template;
pub mod volume_detail_template;
pub mod volumes_page_template;

pub use capsules_page_template::CapsulesTemplate;
pub use confirmation_template::ConfirmationTemplate;
pub use container_detail_template::ContainerDetailTemplate;
pub use containers_page_template::ContainersTemplate;
pub use launch_template::LaunchTemplate;
pub use login_template::LoginTemplate;
pub use port_detail_template::PortDetailTemplate;
pub use ports_page_template::PortsTemplate;
pub use request_events_template::RequestEventsTemplate;
pub use role_detail_template::RoleDetailTemplate;
pub use roles_page_template::RolesTemplate;
pub use server_detail_template::ServerDetailTemplate;
pub use servers_page_template::ServersTemplate;
pub use share_group_types_template::ShareGroupTypesTemplate;
pub use volume_detail_template::VolumeDetailTemplate;
pub use volumes_page_template::VolumesTemplate;
