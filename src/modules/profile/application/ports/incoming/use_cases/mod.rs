mod dashboard_session_use_case;
mod list_profiles_use_case;
mod save_profile_use_case;

pub use dashboard_session_use_case::{DashboardSessionError, DashboardSessionUseCase};
pub use list_profiles_use_case::{ListProfilesError, ListProfilesUseCase};
pub use save_profile_use_case::{
    SaveProfileCommand, SaveProfileCommandError, SaveProfileError, SaveProfileUseCase,
};
