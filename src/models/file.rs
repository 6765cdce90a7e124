use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, Utc};

/// A stored file entry. Field names here are the internal ones; clients see
/// [`FileResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub file_type: String,
    pub tx_id: String,
    pub uploaded_at: DateTime<Utc>,
    pub owner: String,
    pub is_public: bool,
    pub tags: Vec<String>,
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub size: u64,
    #[serde(alias = "file_type", alias = "type")]
    pub file_type: String,
    #[serde(alias = "tx_id")]
    #[validate(length(min = 1))]
    pub tx_id: String,
    #[validate(length(min = 1))]
    pub owner: String,
    #[serde(alias = "is_public")]
    pub is_public: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Client-facing file shape shared by every file endpoint.
#[derive(Serialize, Debug)]
pub struct FileResponse {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(rename = "txId")]
    pub tx_id: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
    pub owner: String,
}

impl From<FileRecord> for FileResponse {
    fn from(file: FileRecord) -> Self {
        Self {
            id: file.id,
            name: file.name,
            size: file.size,
            file_type: file.file_type,
            tx_id: file.tx_id,
            uploaded_at: file.uploaded_at,
            owner: file.owner,
        }
    }
}
