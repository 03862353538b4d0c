use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::application::domain::{
    entities::{
        CertificateName, ProficiencyError, ProficiencyLevel, ProfileRecord, Skill, SkillRatings,
        StagedAttachment,
    },
    policies::attachment_policy::{AttachmentError, AttachmentPolicy, AttachmentSlot},
    session::Theme,
};

pub const DEFAULT_DATE_OF_BIRTH: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("2000-01-01 is a valid date"),
};

//
// ──────────────────────────────────────────────────────────
// Events
// ──────────────────────────────────────────────────────────
//

/// One user interaction with the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    SetName(String),
    SetDateOfBirth(NaiveDate),
    SetBio(String),
    StagePhoto(StagedAttachment),
    ClearPhoto,
    SelectSkills(Vec<Skill>),
    SetSkillLevel { skill: Skill, level: i64 },
    SetProjectTitle(String),
    SetProjectDescription(String),
    StageCertificate(StagedAttachment),
    ClearCertificate,
    SaveProfile,
    ShowSavedProfiles(bool),
    SetTheme(Theme),
}

impl FormEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            FormEvent::SetName(_) => "set_name",
            FormEvent::SetDateOfBirth(_) => "set_date_of_birth",
            FormEvent::SetBio(_) => "set_bio",
            FormEvent::StagePhoto(_) => "stage_photo",
            FormEvent::ClearPhoto => "clear_photo",
            FormEvent::SelectSkills(_) => "select_skills",
            FormEvent::SetSkillLevel { .. } => "set_skill_level",
            FormEvent::SetProjectTitle(_) => "set_project_title",
            FormEvent::SetProjectDescription(_) => "set_project_description",
            FormEvent::StageCertificate(_) => "stage_certificate",
            FormEvent::ClearCertificate => "clear_certificate",
            FormEvent::SaveProfile => "save_profile",
            FormEvent::ShowSavedProfiles(_) => "show_saved_profiles",
            FormEvent::SetTheme(_) => "set_theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Skill {0} is not selected")]
    SkillNotSelected(Skill),

    #[error(transparent)]
    Proficiency(#[from] ProficiencyError),

    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}

//
// ──────────────────────────────────────────────────────────
// Transient form state
// ──────────────────────────────────────────────────────────
//

/// Current, unsaved values of every input on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub bio: String,
    pub photo: Option<StagedAttachment>,
    pub skills: SkillRatings,
    pub project_title: String,
    pub project_description: String,
    pub certificate: Option<StagedAttachment>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: DEFAULT_DATE_OF_BIRTH,
            bio: String::new(),
            photo: None,
            skills: SkillRatings::new(),
            project_title: String::new(),
            project_description: String::new(),
            certificate: None,
        }
    }
}

impl ProfileForm {
    /// Applies one field edit. A rejected event leaves the form untouched.
    pub fn apply(&mut self, event: FormEvent, policy: &AttachmentPolicy) -> Result<(), FormError> {
        match event {
            FormEvent::SetName(name) => self.name = name,
            FormEvent::SetDateOfBirth(date) => self.date_of_birth = date,
            FormEvent::SetBio(bio) => self.bio = bio,
            FormEvent::StagePhoto(photo) => {
                policy.check(AttachmentSlot::Photo, &photo)?;
                self.photo = Some(photo);
            }
            FormEvent::ClearPhoto => self.photo = None,
            FormEvent::SelectSkills(skills) => self.skills.select_only(&skills),
            FormEvent::SetSkillLevel { skill, level } => {
                if !self.skills.contains(skill) {
                    return Err(FormError::SkillNotSelected(skill));
                }
                self.skills.rate(skill, ProficiencyLevel::new(level)?);
            }
            FormEvent::SetProjectTitle(title) => self.project_title = title,
            FormEvent::SetProjectDescription(description) => {
                self.project_description = description
            }
            FormEvent::StageCertificate(certificate) => {
                policy.check(AttachmentSlot::Certificate, &certificate)?;
                self.certificate = Some(certificate);
            }
            FormEvent::ClearCertificate => self.certificate = None,
            // session-level events, handled by the dashboard session
            FormEvent::SaveProfile | FormEvent::ShowSavedProfiles(_) | FormEvent::SetTheme(_) => {}
        }
        Ok(())
    }

    /// Snapshot of the form as it would be saved right now.
    pub fn to_record(&self) -> ProfileRecord {
        let certificate_name = match &self.certificate {
            Some(file) => CertificateName::File(file.file_name.clone()),
            None => CertificateName::Absent,
        };

        ProfileRecord {
            name: self.name.clone(),
            date_of_birth: self.date_of_birth,
            bio: self.bio.clone(),
            skills: self.skills,
            project_title: self.project_title.clone(),
            project_description: self.project_description.clone(),
            certificate_name,
        }
    }
}
