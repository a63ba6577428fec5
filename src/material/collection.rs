use serde::{Deserialize, Serialize};

use super::record::MaterialRecord;
use crate::types::identifiers::{MaterialId, SubjectId};

/// Ordered list of material records. This is the whole persisted state.
///
/// Insertion order is preserved. Ids are not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialCollection {
    records: Vec<MaterialRecord>,
}

impl MaterialCollection {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn push(&mut self, record: MaterialRecord) {
        self.records.push(record);
    }

    /// Records whose subject equals `subject_id`, in their original relative order.
    pub fn by_subject(&self, subject_id: &SubjectId) -> MaterialCollection {
        self.records
            .iter()
            .filter(|r| &r.subject_id == subject_id)
            .cloned()
            .collect()
    }

    /// Drop every record with the given id. Returns how many were dropped.
    pub fn remove_id(&mut self, id: &MaterialId) -> usize {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        before - self.records.len()
    }

    pub fn get(&self, id: &MaterialId) -> Option<&MaterialRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[MaterialRecord] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<MaterialRecord> {
        self.records
    }
}

impl From<Vec<MaterialRecord>> for MaterialCollection {
    fn from(records: Vec<MaterialRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MaterialRecord> for MaterialCollection {
    fn from_iter<I: IntoIterator<Item = MaterialRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MaterialCollection {
    type Item = MaterialRecord;
    type IntoIter = std::vec::IntoIter<MaterialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a MaterialCollection {
    type Item = &'a MaterialRecord;
    type IntoIter = std::slice::Iter<'a, MaterialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
