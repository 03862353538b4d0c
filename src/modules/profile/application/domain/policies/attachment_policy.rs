use std::fmt;
use std::path::Path;

use crate::profile::application::domain::entities::StagedAttachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentSlot {
    Photo,
    Certificate,
}

impl AttachmentSlot {
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            AttachmentSlot::Photo => &["png", "jpg", "jpeg"],
            AttachmentSlot::Certificate => &["pdf", "png", "jpg", "jpeg"],
        }
    }
}

impl fmt::Display for AttachmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttachmentSlot::Photo => "photo",
            AttachmentSlot::Certificate => "certificate",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachmentError {
    #[error("File type '{extension}' is not accepted for {slot} uploads")]
    UnsupportedType {
        slot: AttachmentSlot,
        extension: String,
    },

    #[error("{slot} file too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge {
        slot: AttachmentSlot,
        max_bytes: u64,
        actual_bytes: u64,
    },
}

/// File-type and size limits of the two upload inputs. File names are
/// otherwise taken verbatim.
#[derive(Debug, Clone)]
pub struct AttachmentPolicy {
    pub max_file_size_bytes: u64,
}

impl AttachmentPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 200 * 1024 * 1024; // 200MB

    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
        }
    }

    pub fn check(
        &self,
        slot: AttachmentSlot,
        attachment: &StagedAttachment,
    ) -> Result<(), AttachmentError> {
        let ext = ext_lower(&attachment.file_name);
        if !slot.allowed_extensions().contains(&ext.as_str()) {
            return Err(AttachmentError::UnsupportedType {
                slot,
                extension: ext,
            });
        }

        if attachment.size_bytes > self.max_file_size_bytes {
            return Err(AttachmentError::FileTooLarge {
                slot,
                max_bytes: self.max_file_size_bytes,
                actual_bytes: attachment.size_bytes,
            });
        }

        Ok(())
    }
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

fn ext_lower(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}
