//! Text and JSON rendering of a lookup for standard output.

use crate::poi::{LookupError, PoiLookup};

/// Format a coordinate pair as `lon, lat` with six decimals.
pub fn format_coords(lon: f64, lat: f64) -> String {
    format!("{:.6}, {:.6}", lon, lat)
}

/// Render a successful lookup as a short human-readable report.
pub fn render_report(lookup: &PoiLookup) -> String {
    let info = &lookup.detail.poi_info;
    let address = &info.address_info;

    format!(
        "Resolved POI ID: {}\n\
         \n\
         === POI Details ===\n\
         Name: {}\n\
         Address: {}\n\
         Province: {}\n\
         City: {}\n\
         Coordinates (lon, lat): {}\n",
        lookup.resolved.poi_id,
        info.poi_name,
        address.address,
        address.province,
        address.city,
        format_coords(info.poi_longitude, info.poi_latitude),
    )
}

/// One line describing which stage failed and why.
pub fn render_failure(err: &LookupError) -> String {
    err.to_string()
}

/// Pretty-printed JSON of the resolved link and the full detail record.
pub fn render_json(lookup: &PoiLookup) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(lookup)
}
