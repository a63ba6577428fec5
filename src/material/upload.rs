use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::MaterialRecord;
use crate::types::identifiers::{MaterialId, SubjectId};

pub const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No PDF file selected")]
    NoFileSelected,
    #[error("Please select a PDF file (got {0:?})")]
    NotPdf(String),
    #[error("No subject selected")]
    NoSubjectSelected,
}

/// What the caller knows about a picked file. Content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileMetadata {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// Accepts only files whose MIME type is exactly `application/pdf`.
pub fn validate_file(file: &FileMetadata) -> Result<(), UploadError> {
    if file.mime_type == PDF_MIME_TYPE {
        Ok(())
    } else {
        Err(UploadError::NotPdf(file.mime_type.clone()))
    }
}

/// A pending "add material" action: the file picked and the subject chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: Option<FileMetadata>,
    pub subject: Option<SubjectId>,
}

impl UploadRequest {
    pub fn new(file: Option<FileMetadata>, subject: Option<SubjectId>) -> Self {
        Self { file, subject }
    }

    /// Validate and turn the request into a fresh record with a new id.
    ///
    /// Checks run in order: file present, file is a PDF, subject chosen.
    pub fn into_record(self, now: DateTime<Utc>) -> Result<MaterialRecord, UploadError> {
        let file = self.file.ok_or(UploadError::NoFileSelected)?;
        validate_file(&file)?;

        let subject = self
            .subject
            .filter(|s| !s.is_empty())
            .ok_or(UploadError::NoSubjectSelected)?;

        Ok(MaterialRecord::new(
            MaterialId::generate(),
            file.name,
            subject,
            file.size,
            file.mime_type,
            now,
        ))
    }
}

impl MaterialRecord {
    /// Build a record for `file` under `subject`, stamped with the current time.
    pub fn from_upload(file: FileMetadata, subject: SubjectId) -> Result<Self, UploadError> {
        UploadRequest::new(Some(file), Some(subject)).into_record(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reported_before_subject() {
        let err = UploadRequest::default().into_record(Utc::now()).unwrap_err();
        assert_eq!(err, UploadError::NoFileSelected);
    }

    #[test]
    fn empty_subject_counts_as_unselected() {
        let req = UploadRequest::new(
            Some(FileMetadata::new("a.pdf", 1, PDF_MIME_TYPE)),
            Some(SubjectId::new("")),
        );
        assert_eq!(req.into_record(Utc::now()), Err(UploadError::NoSubjectSelected));
    }
}
