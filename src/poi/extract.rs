//! Pulling `poi_id` out of a resolved share URL.

use super::types::PoiError;
use regex::Regex;
use std::sync::LazyLock;
use url::{form_urlencoded, Url};

pub const POI_ID_PARAM: &str = "poi_id";

// Fallback for query strings a URL parser splits differently (`;` joins,
// ids in the fragment). A value ends at `&` or `#`.
static POI_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"poi_id=([^&#]+)").expect("valid poi_id pattern"));

/// Extract the POI identifier from a fully resolved URL.
pub fn extract_poi_id(resolved_url: &str) -> Result<String, PoiError> {
    let url = Url::parse(resolved_url).map_err(PoiError::url)?;

    let from_query = url
        .query_pairs()
        .find(|(key, _)| key == POI_ID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());
    if let Some(id) = from_query {
        return Ok(id);
    }

    POI_ID_PATTERN
        .captures(resolved_url)
        .and_then(|caps| caps.get(1))
        .map(|m| decode_query_value(m.as_str()))
        .ok_or_else(|| PoiError::IdentifierNotFound {
            url: resolved_url.to_string(),
        })
}

/// Decode a raw query value the way `query_pairs` would (`%XX` and `+`).
fn decode_query_value(raw: &str) -> String {
    let pair = format!("{}={}", POI_ID_PARAM, raw);
    form_urlencoded::parse(pair.as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poi::types::ParseTarget;

    #[test]
    fn test_extract_from_query() {
        let id = extract_poi_id("https://www.iesdouyin.com/share/poi/detail?poi_id=123456").unwrap();
        assert_eq!(id, "123456");
    }

    #[test]
    fn test_extract_among_other_params() {
        let id = extract_poi_id(
            "https://www.iesdouyin.com/share/poi/detail/?from=share&poi_id=6601129423558574093&u_code=abc",
        )
        .unwrap();
        assert_eq!(id, "6601129423558574093");
    }

    #[test]
    fn test_extract_percent_decoded() {
        let id = extract_poi_id("https://example.com/p?poi_id=B0FF%2D12").unwrap();
        assert_eq!(id, "B0FF-12");
    }

    #[test]
    fn test_extract_first_occurrence() {
        let id = extract_poi_id("https://example.com/p?poi_id=first&poi_id=second").unwrap();
        assert_eq!(id, "first");
    }

    #[test]
    fn test_fallback_semicolon_segment() {
        let id = extract_poi_id("https://example.com/p?from=share;poi_id=777").unwrap();
        assert_eq!(id, "777");
    }

    #[test]
    fn test_fallback_decodes_percent_escapes() {
        let id = extract_poi_id("https://example.com/p?from=share;poi_id=B0FF%2D12").unwrap();
        assert_eq!(id, "B0FF-12");
        let url = crate::poi::detail_url("https://www.iesdouyin.com", &id).unwrap();
        assert_eq!(url.query(), Some("poi_id=B0FF-12"));
    }

    #[test]
    fn test_fallback_stops_at_fragment() {
        let id = extract_poi_id("https://example.com/p?from=share;poi_id=777#top").unwrap();
        assert_eq!(id, "777");
        let url = crate::poi::detail_url("https://www.iesdouyin.com", &id).unwrap();
        assert_eq!(url.query(), Some("poi_id=777"));
    }

    #[test]
    fn test_fallback_fragment() {
        let id = extract_poi_id("https://example.com/share#/detail?poi_id=abc123&x=1").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn test_empty_value_falls_back() {
        let id = extract_poi_id("https://example.com/p?poi_id=&ref=x#poi_id=42").unwrap();
        assert_eq!(id, "42");
    }

    #[test]
    fn test_not_found() {
        let err = extract_poi_id("https://www.douyin.com/video/123").unwrap_err();
        match err {
            PoiError::IdentifierNotFound { url } => assert_eq!(url, "https://www.douyin.com/video/123"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_everywhere_not_found() {
        let err = extract_poi_id("https://example.com/p?poi_id=").unwrap_err();
        assert!(matches!(err, PoiError::IdentifierNotFound { .. }));
    }

    #[test]
    fn test_unparseable_url() {
        let err = extract_poi_id("not a url poi_id=1").unwrap_err();
        assert!(matches!(err, PoiError::Parse { target: ParseTarget::Url, .. }));
    }
}
