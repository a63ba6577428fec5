/// Key the collection has always been stored under.
pub const DEFAULT_STORAGE_KEY: &str = "userUploadedMaterials";

/// Where the store keeps its collection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoreConfig {
    /// Backend key holding the serialized collection. Stores sharing a
    /// backend but using different keys never see each other's records.
    pub storage_key: String,
}

impl StoreConfig {
    pub fn v0() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
        }
    }

    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::v0()
    }
}
