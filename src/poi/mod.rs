//! POI subsystem: share-link resolution and place detail lookup.
//!
//! Short link → HEAD (no redirect following) → `Location` → `poi_id` → detail API.

pub mod client;
pub mod detail;
pub mod extract;
pub mod redirect;
pub mod types;

pub use client::PoiClient;
pub use detail::{detail_url, parse_detail};
pub use extract::extract_poi_id;
pub use redirect::{sanitize_short_url, Redirect};
pub use types::{
    AddressInfo, ClientConfig, LookupError, LookupStage, ParseTarget, PoiDetail, PoiError, PoiInfo,
    PoiLookup, ResolvedPoi, DEFAULT_API_BASE, DEFAULT_USER_AGENT,
};
