use async_trait::async_trait;

use crate::profile::application::domain::{
    entities::ProfileRecord,
    form::ProfileForm,
    policies::attachment_policy::{AttachmentError, AttachmentPolicy, AttachmentSlot},
};

//
// ──────────────────────────────────────────────────────────
// Save Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    record: ProfileRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveProfileCommandError {
    #[error(transparent)]
    InvalidAttachment(#[from] AttachmentError),
}

impl SaveProfileCommand {
    /// Snapshots `form`, re-checking staged uploads against `policy`.
    pub fn new(
        form: &ProfileForm,
        policy: &AttachmentPolicy,
    ) -> Result<Self, SaveProfileCommandError> {
        if let Some(photo) = &form.photo {
            policy.check(AttachmentSlot::Photo, photo)?;
        }
        if let Some(certificate) = &form.certificate {
            policy.check(AttachmentSlot::Certificate, certificate)?;
        }

        Ok(Self {
            record: form.to_record(),
        })
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    pub fn into_record(self) -> ProfileRecord {
        self.record
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveProfileError {
    #[error("Profile store error: {0}")]
    StoreFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SaveProfileUseCase: Send + Sync {
    async fn execute(&self, command: SaveProfileCommand) -> Result<ProfileRecord, SaveProfileError>;
}
