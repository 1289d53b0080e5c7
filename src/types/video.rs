use serde::{Deserialize, Serialize};

/// A stored video: store-assigned id, display name and cover-image identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: i64,
    pub name: String,
    pub cover_image: String,
}
