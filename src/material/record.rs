use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{MaterialId, SubjectId};

/// Upload time as ISO 8601 text.
///
/// The stored text is kept verbatim; it is only interpreted by [`parse`](Self::parse).
/// Records written elsewhere may carry any ISO 8601 form and still load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadedAt(String);

impl UploadedAt {
    pub fn new(text: impl Into<String>) -> Self {
        UploadedAt(text.into())
    }

    /// Current time with millisecond precision and a `Z` suffix.
    pub fn now() -> Self {
        Utc::now().into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the text as a UTC instant.
    ///
    /// Accepts RFC 3339, a date-time without offset (read as UTC) and a bare date
    /// (midnight UTC). `None` for anything else.
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        let s = self.0.as_str();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Utc.from_utc_datetime(&naive));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}

impl From<DateTime<Utc>> for UploadedAt {
    fn from(dt: DateTime<Utc>) -> Self {
        UploadedAt(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<&str> for UploadedAt {
    fn from(s: &str) -> Self {
        UploadedAt(s.to_string())
    }
}

impl fmt::Display for UploadedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata describing one uploaded PDF. The file content itself is never kept.
///
/// Field order is the persisted key order:
/// `id`, `fileName`, `subjectId`, `fileSize`, `fileType`, `uploadedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    pub id: MaterialId,
    pub file_name: String,
    pub subject_id: SubjectId,
    pub file_size: u64,
    pub file_type: String,
    pub uploaded_at: UploadedAt,
}

impl MaterialRecord {
    pub fn new(
        id: MaterialId,
        file_name: impl Into<String>,
        subject_id: SubjectId,
        file_size: u64,
        file_type: impl Into<String>,
        uploaded_at: impl Into<UploadedAt>,
    ) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            subject_id,
            file_size,
            file_type: file_type.into(),
            uploaded_at: uploaded_at.into(),
        }
    }

    /// Size in KiB, as shown next to the file name in listings.
    pub fn size_kib(&self) -> f64 {
        self.file_size as f64 / 1024.0
    }
}
