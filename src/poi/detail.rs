//! POI detail endpoint.

use super::types::{PoiDetail, PoiError};
use log::{debug, warn};
use url::Url;

const DETAIL_PATH: &str = "/web/api/v2/poi/detail/";

/// Build the detail endpoint URL for `poi_id` on `api_base`.
pub fn detail_url(api_base: &str, poi_id: &str) -> Result<Url, PoiError> {
    let base = Url::parse(api_base).map_err(PoiError::url)?;
    let mut url = base.join(DETAIL_PATH).map_err(PoiError::url)?;
    url.query_pairs_mut().clear().append_pair("poi_id", poi_id);
    Ok(url)
}

/// Decode a detail response body.
pub fn parse_detail(body: &str) -> Result<PoiDetail, PoiError> {
    serde_json::from_str(body).map_err(PoiError::json)
}

/// GET the detail record for `poi_id`. Anything but a 200 is an error.
pub fn fetch_detail(
    agent: &ureq::Agent,
    api_base: &str,
    user_agent: &str,
    poi_id: &str,
) -> Result<PoiDetail, PoiError> {
    let url = detail_url(api_base, poi_id)?;

    debug!("GET {}", url);
    let response = match agent.get(url.as_str()).set("User-Agent", user_agent).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => return Err(PoiError::HttpStatus { status }),
        Err(ureq::Error::Transport(e)) => return Err(PoiError::Transport(e.to_string())),
    };

    let status = response.status();
    if status != 200 {
        return Err(PoiError::HttpStatus { status });
    }

    let body = response
        .into_string()
        .map_err(|e| PoiError::BodyRead(e.to_string()))?;
    let detail = parse_detail(&body)?;

    if detail.status_code != 0 {
        warn!(
            "detail API reported status_code {} for poi_id {}",
            detail.status_code, poi_id
        );
    }

    Ok(detail)
}
