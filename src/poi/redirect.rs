//! Short-link redirect resolution.
//!
//! The short URL is never followed. We ask for its headers once, with
//! redirects disabled on the agent, and read the `Location` it points at.

use super::types::PoiError;
use log::debug;
use url::Url;

/// One hop: the short URL requested and the absolute URL it redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

/// Cut pasted share text down to the URL at its start.
///
/// Share buttons copy things like `https://v.douyin.com/xyz/ 1@0.com` or a
/// URL followed by a caption. Leading whitespace is skipped and everything
/// from the next whitespace character on is dropped.
pub fn sanitize_short_url(raw: &str) -> Result<&str, PoiError> {
    raw.split_whitespace().next().ok_or(PoiError::EmptyInput)
}

/// HEAD the short URL and return where it redirects.
///
/// `agent` must be built with `redirects(0)`, otherwise ureq follows the hop
/// itself and we only ever see the final status.
pub fn resolve_redirect(agent: &ureq::Agent, user_agent: &str, raw: &str) -> Result<Redirect, PoiError> {
    let short = sanitize_short_url(raw)?;
    let request_url = Url::parse(short).map_err(PoiError::url)?;

    debug!("HEAD {}", request_url);
    let response = match agent
        .head(request_url.as_str())
        .set("User-Agent", user_agent)
        .call()
    {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => return Err(PoiError::NoRedirect { status }),
        Err(ureq::Error::Transport(e)) => return Err(PoiError::Transport(e.to_string())),
    };

    let status = response.status();
    if !(300..400).contains(&status) {
        return Err(PoiError::NoRedirect { status });
    }

    let location = response
        .header("Location")
        .filter(|l| !l.trim().is_empty())
        .ok_or(PoiError::MissingLocation { status })?;

    // Relative targets are legal in Location; anchor them on the request.
    let target = request_url.join(location.trim()).map_err(PoiError::url)?;
    debug!("{} -> {} ({})", request_url, target, status);

    Ok(Redirect {
        from: short.to_string(),
        to: target.into(),
    })
}
