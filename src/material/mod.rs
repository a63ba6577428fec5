pub mod collection;
pub mod record;
pub mod subject;
pub mod upload;

pub use crate::types::identifiers::{MaterialId, SubjectId};
pub use collection::MaterialCollection;
pub use record::{MaterialRecord, UploadedAt};
pub use subject::{Subject, SubjectCatalog};
pub use upload::{validate_file, FileMetadata, UploadError, UploadRequest, PDF_MIME_TYPE};
