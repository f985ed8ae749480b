use crate::types::{CandidateList, ItemName};
use serde::{Deserialize, Serialize};

/// One cache record: an original item name together with every canonical
/// encoding derived from it. Serialized with camelCase keys to stay
/// compatible with map files written by prior consumers of this format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedItem {
    pub item_name: ItemName,
    pub candidates: CandidateList,
}

impl MappedItem {
    pub fn new(item_name: impl Into<ItemName>, candidates: CandidateList) -> Self {
        Self {
            item_name: item_name.into(),
            candidates,
        }
    }
}
