use chrono::NaiveDate;
use serde::Serialize;

use crate::profile::application::domain::{
    entities::{ProfileRecord, Skill},
    form::ProfileForm,
};

/// Everything the summary tab shows, derived from the form on each render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub skill_bars: Vec<SkillBar>,
    pub project: ProjectMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificatePreview>,
}

/// One progress bar, also one bar of the skill chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBar {
    pub skill: Skill,
    pub level: u8,
    pub fraction: f32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetrics {
    pub title: String,
    pub description: String,
    pub word_count: usize,
    pub title_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Image,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificatePreview {
    pub file_name: String,
    pub kind: PreviewKind,
}

impl From<&ProfileForm> for ProfileSummary {
    fn from(form: &ProfileForm) -> Self {
        let skill_bars = form
            .skills
            .iter()
            .map(|(skill, level)| SkillBar {
                skill,
                level: level.value(),
                fraction: level.fraction(),
                label: format!("{}: {}/10", skill, level),
            })
            .collect();

        let certificate = form.certificate.as_ref().map(|file| CertificatePreview {
            file_name: file.file_name.clone(),
            kind: if file.is_image() {
                PreviewKind::Image
            } else {
                PreviewKind::Document
            },
        });

        Self {
            name: form.name.clone(),
            date_of_birth: form.date_of_birth,
            bio: form.bio.clone(),
            photo: form.photo.as_ref().map(|p| p.file_name.clone()),
            skill_bars,
            project: ProjectMetrics {
                title: form.project_title.clone(),
                description: form.project_description.clone(),
                word_count: form.project_description.split_whitespace().count(),
                title_length: form.project_title.chars().count(),
            },
            certificate,
        }
    }
}

/// Tabular rendering of the saved profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedProfilesTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl SavedProfilesTable {
    pub const COLUMNS: [&'static str; 7] = [
        "Name",
        "DOB",
        "Bio",
        "Skills",
        "Project Title",
        "Project Desc",
        "Certificate",
    ];

    pub fn from_records(records: &[ProfileRecord]) -> Self {
        let rows = records
            .iter()
            .map(|record| {
                let skills = record
                    .skills
                    .iter()
                    .map(|(skill, level)| format!("{skill}: {level}"))
                    .collect::<Vec<_>>()
                    .join(", ");

                vec![
                    record.name.clone(),
                    record.date_of_birth.to_string(),
                    record.bio.clone(),
                    skills,
                    record.project_title.clone(),
                    record.project_description.clone(),
                    record.certificate_name.to_string(),
                ]
            })
            .collect();

        Self {
            columns: Self::COLUMNS.to_vec(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
