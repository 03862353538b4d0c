mod dashboard_session_service;
mod list_profiles_service;
mod save_profile_service;

pub use dashboard_session_service::DashboardSessionService;
pub use list_profiles_service::ListProfilesService;
pub use save_profile_service::SaveProfileService;
