//! Core types for the POI subsystem.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::time::Duration;

/// Origin the detail endpoint path is appended to.
pub const DEFAULT_API_BASE: &str = "https://www.iesdouyin.com";

/// The share service answers desktop clients differently, so we look like a phone.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response body of the POI detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoiDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub status_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub poi_info: PoiInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoiInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub poi_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub poi_name: String,
    /// Degrees east.
    #[serde(deserialize_with = "null_as_default")]
    pub poi_longitude: f64,
    /// Degrees north.
    #[serde(deserialize_with = "null_as_default")]
    pub poi_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub address_info: AddressInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub province: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub simple_addr: String,
}

/// Outcome of following a short link to its POI identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPoi {
    /// The short URL actually requested, after sanitizing.
    pub short_url: String,
    /// Absolute redirect target.
    pub resolved_url: String,
    pub poi_id: String,
}

/// A full lookup: where the link pointed and what the API said about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoiLookup {
    #[serde(flatten)]
    pub resolved: ResolvedPoi,
    pub detail: PoiDetail,
}

/// Settings for [`PoiClient`](super::PoiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub user_agent: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// What a parse failure was parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTarget {
    Url,
    Json,
}

impl fmt::Display for ParseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url => write!(f, "URL"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// POI resolution and fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum PoiError {
    #[error("no URL given")]
    EmptyInput,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("no redirect occurred, status code: {status}")]
    NoRedirect { status: u16 },

    #[error("redirect response (status {status}) has no usable Location header")]
    MissingLocation { status: u16 },

    #[error("failed to parse {target}: {message}")]
    Parse { target: ParseTarget, message: String },

    #[error("no poi_id parameter in {url}")]
    IdentifierNotFound { url: String },

    #[error("detail API returned status code {status}")]
    HttpStatus { status: u16 },

    #[error("failed to read response body: {0}")]
    BodyRead(String),
}

impl PoiError {
    pub(crate) fn url(err: impl fmt::Display) -> Self {
        Self::Parse {
            target: ParseTarget::Url,
            message: err.to_string(),
        }
    }

    pub(crate) fn json(err: impl fmt::Display) -> Self {
        Self::Parse {
            target: ParseTarget::Json,
            message: err.to_string(),
        }
    }
}

/// Which half of the workflow failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    Resolve,
    Fetch,
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve => write!(f, "Failed to resolve POI ID"),
            Self::Fetch => write!(f, "Failed to fetch POI details"),
        }
    }
}

/// A [`PoiError`] tagged with the stage it came from.
#[derive(Debug, thiserror::Error)]
#[error("{stage}: {source}")]
pub struct LookupError {
    pub stage: LookupStage,
    #[source]
    pub source: PoiError,
}
