use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, Utc};

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShareFileRequest {
    #[serde(alias = "recipient_address")]
    #[validate(length(min = 1))]
    pub recipient_address: String,
    #[serde(alias = "access_level")]
    #[validate(custom = "validate_access_level")]
    pub access_level: Option<String>,
    #[serde(alias = "expires_at")]
    pub expires_at: Option<DateTime<Utc>>,
}

fn validate_access_level(level: &str) -> Result<(), validator::ValidationError> {
    if level != "read" && level != "write" {
        return Err(validator::ValidationError::new("Access level must be either 'read' or 'write'"));
    }
    Ok(())
}

/// Share confirmation. Nothing backs it; it is built and returned as-is.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub id: String,
    pub file_id: String,
    pub recipient_address: String,
    pub access_level: String,
    pub shared_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
