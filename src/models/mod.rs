pub mod action_button;
pub mod action_log;
pub mod app_state;
pub mod capsule_view;
pub mod container_view;
pub mod current_user;
pub mod detail_card;
pub mod launch_form;
pub mod port_view;
pub mod role_view;
pub mod server_view;
pub mod share_group_type_view;
pub mod user_record;
pub mod volume_view;

pub use action_button::ActionButtonView;
pub use action_log::{ActionEventView, ActionLogEntry};
pub use app_state::AppState;
pub use capsule_view::CapsuleView;
pub use container_view::ContainerView;
pub use current_user::CurrentUser;
pub use detail_card::{DetailCard, DetailRow};
pub use launch_form::LaunchForm;
pub use port_view::{AddressPairView, FixedIpView, PortView};
pub use role_view::RoleView;
pub use server_view::ServerView;
pub use share_group_type_view::ShareGroupTypeView;
pub use user_record::UserRecord;
pub use volume_view::{VolumeAttachmentView, VolumeImageView, VolumeTransferView, VolumeView};
