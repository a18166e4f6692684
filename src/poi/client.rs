//! POI client: runs redirect resolution, id extraction and the detail fetch in order.

use super::detail;
use super::extract::extract_poi_id;
use super::redirect::resolve_redirect;
use super::types::{ClientConfig, LookupError, LookupStage, PoiDetail, PoiError, PoiLookup, ResolvedPoi};
use log::info;

/// Blocking client for the share-link and detail endpoints.
pub struct PoiClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl PoiClient {
    pub fn new(config: ClientConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new().redirects(0);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Follow a short link one hop and extract the `poi_id` it carries.
    ///
    /// `raw` may be pasted share text; see [`sanitize_short_url`](super::sanitize_short_url).
    pub fn resolve_poi_id(&self, raw: &str) -> Result<ResolvedPoi, PoiError> {
        let redirect = resolve_redirect(&self.agent, &self.config.user_agent, raw)?;
        let poi_id = extract_poi_id(&redirect.to)?;
        info!("resolved {} to poi_id {}", redirect.from, poi_id);

        Ok(ResolvedPoi {
            short_url: redirect.from,
            resolved_url: redirect.to,
            poi_id,
        })
    }

    /// Fetch the detail record for a known identifier.
    pub fn fetch_detail(&self, poi_id: &str) -> Result<PoiDetail, PoiError> {
        detail::fetch_detail(&self.agent, &self.config.api_base, &self.config.user_agent, poi_id)
    }

    /// Resolve a short link, then fetch its details.
    pub fn lookup(&self, raw: &str) -> Result<PoiLookup, LookupError> {
        let resolved = self.resolve_poi_id(raw).map_err(|source| LookupError {
            stage: LookupStage::Resolve,
            source,
        })?;
        self.complete(resolved)
    }

    /// Fetch details for an identifier obtained elsewhere. No redirect is made.
    pub fn lookup_id(&self, poi_id: &str) -> Result<PoiLookup, LookupError> {
        if poi_id.trim().is_empty() {
            return Err(LookupError {
                stage: LookupStage::Resolve,
                source: PoiError::EmptyInput,
            });
        }
        let resolved = ResolvedPoi {
            short_url: String::new(),
            resolved_url: String::new(),
            poi_id: poi_id.trim().to_string(),
        };
        self.complete(resolved)
    }

    fn complete(&self, resolved: ResolvedPoi) -> Result<PoiLookup, LookupError> {
        let detail = self.fetch_detail(&resolved.poi_id).map_err(|source| LookupError {
            stage: LookupStage::Fetch,
            source,
        })?;
        Ok(PoiLookup { resolved, detail })
    }
}

impl Default for PoiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
