use serde::{Deserialize, Serialize};

use crate::profile::application::domain::{
    entities::ProfileRecord,
    form::ProfileForm,
    summary::{ProfileSummary, SavedProfilesTable},
};

pub const PROFILE_SAVED_NOTICE: &str = "Profile saved successfully!";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Per-process dashboard state. Saved records live in the profile store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DashboardSession {
    pub form: ProfileForm,
    pub show_saved: bool,
    pub theme: Theme,
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub form: ProfileForm,
    pub summary: ProfileSummary,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_profiles: Option<SavedProfilesTable>,
}

impl DashboardSession {
    /// `saved` is only consulted while the saved-profiles table is toggled on.
    pub fn render(&self, notice: Option<String>, saved: Option<&[ProfileRecord]>) -> DashboardView {
        let saved_profiles = if self.show_saved {
            Some(SavedProfilesTable::from_records(saved.unwrap_or_default()))
        } else {
            None
        };

        DashboardView {
            form: self.form.clone(),
            summary: ProfileSummary::from(&self.form),
            theme: self.theme,
            notice,
            saved_profiles,
        }
    }
}
