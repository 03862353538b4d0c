pub mod dispatch_event;
pub mod get_session;
pub mod list_profiles;
pub mod save_profile;

pub use dispatch_event::dispatch_event_handler;
pub use get_session::get_session_handler;
pub use list_profiles::{list_profiles_handler, ProfileResponse};
pub use save_profile::{save_profile_handler, AttachmentRequest, SaveProfileRequest};
