use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Audio,
    Video,
    Image,
    Document,
}

/// Flat media-asset record, independent of the course tree. `used_in`
/// holds course titles by name only; there is no foreign-key enforcement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LibraryItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub size: u64,
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub used_in: Vec<String>,
}

/// Asset payload as accepted by `add_library_item`; id, upload date and
/// `used_in` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLibraryItem {
    pub name: String,
    pub kind: AssetKind,
    pub size: u64,
    pub category: String,
}
