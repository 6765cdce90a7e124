use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub wallet_address: String,
    pub created_at: DateTime<Utc>,
    pub total_files: u64,
    pub total_storage: u64,
    pub last_activity: DateTime<Utc>,
}

impl User {
    pub fn new(wallet_address: &str, now: DateTime<Utc>) -> Self {
        Self {
            wallet_address: wallet_address.to_string(),
            created_at: now,
            total_files: 0,
            total_storage: 0,
            last_activity: now,
        }
    }
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(alias = "wallet_address")]
    #[validate(length(min = 1))]
    pub wallet_address: String,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_files: u64,
    pub total_storage: u64,
    pub files_uploaded_today: u64,
    pub storage_used_today: u64,
    pub most_used_file_types: Vec<FileTypeUsage>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileTypeUsage {
    pub file_type: String,
    pub count: u64,
    pub total_size: u64,
}
