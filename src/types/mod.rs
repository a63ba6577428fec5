pub mod identifiers;

pub use identifiers::{MaterialId, SubjectId};
