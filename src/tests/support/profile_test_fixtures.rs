use chrono::NaiveDate;
use maplit::btreemap;

use crate::profile::application::domain::{
    entities::{CertificateName, ProficiencyLevel, ProfileRecord, Skill},
    form::ProfileForm,
};

/// The record produced by saving Asha's dashboard with no certificate.
pub fn asha_record() -> ProfileRecord {
    ProfileRecord {
        name: "Asha".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2001, 5, 1).unwrap(),
        bio: String::new(),
        skills: btreemap! {
            Skill::Python => ProficiencyLevel::new(8).unwrap(),
            Skill::Sql => ProficiencyLevel::new(6).unwrap(),
        }
        .into(),
        project_title: "Tracker".to_string(),
        project_description: "A tracker app".to_string(),
        certificate_name: CertificateName::Absent,
    }
}

/// A record of an untouched form, renamed.
pub fn record_named(name: &str) -> ProfileRecord {
    ProfileRecord {
        name: name.to_string(),
        ..ProfileForm::default().to_record()
    }
}
