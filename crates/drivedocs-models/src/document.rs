//! Document records fetched from the remote document backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw-id-keyed owner lists attached to a document by the backend.
///
/// Resolved against a [`super::ResolvedContext`] in a second pass; see the
/// owner-category resolver in the core crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOwners {
    #[serde(default)]
    pub drivers: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub trailers: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

/// One document as returned by the file-listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub owners: FileOwners,
}

/// Whether a document's expiry date has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Active,
    Expired,
}

impl ExpiryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }
}

impl DriveFile {
    /// Records without a file name are malformed and excluded from every
    /// downstream view.
    pub fn is_displayable(&self) -> bool {
        !self.file_name.is_empty()
    }

    /// Expired iff the expiry date is strictly before `now`. A missing
    /// expiry date is always active.
    pub fn expiry_status(&self, now: DateTime<Utc>) -> ExpiryStatus {
        match self.expiry_date {
            Some(expiry) if expiry < now => ExpiryStatus::Expired,
            _ => ExpiryStatus::Active,
        }
    }
}

/// Per-database behaviour switches from the config endpoint. Unknown fields
/// are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    #[serde(default)]
    pub restrict_download: bool,
}

/// Whether the driver has accepted the end-user license agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulaStatus {
    Accepted,
    Pending,
}

/// Preview handle returned by the file-open endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePreview {
    pub url: String,
    #[serde(default)]
    pub content_type: Option<String>,
}
