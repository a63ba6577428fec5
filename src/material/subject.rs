use serde::{Deserialize, Serialize};

use crate::types::identifiers::SubjectId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub title: String,
}

impl Subject {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: SubjectId::new(id),
            title: title.into(),
        }
    }
}

/// Read-only, caller-supplied list of subjects.
///
/// The store never consults it; it only backs default selection
/// and title lookups for whoever renders the materials.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    /// The subject preselected when nothing has been chosen yet: the first one.
    pub fn default_selection(&self) -> Option<&SubjectId> {
        self.subjects.first().map(|s| &s.id)
    }

    pub fn title_of(&self, id: &SubjectId) -> Option<&str> {
        self.subjects
            .iter()
            .find(|s| &s.id == id)
            .map(|s| s.title.as_str())
    }

    pub fn contains(&self, id: &SubjectId) -> bool {
        self.subjects.iter().any(|s| &s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }
}
