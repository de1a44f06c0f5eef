use crate::model::library::AssetKind;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct AddLibraryItemPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ListLibraryItemsParams {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AssetKind>,
}
