use super::models::{ApiCompetitor, Listing, Match, Squad};
use crate::Result;
use crate::traits::{Credentials, RegistrationSource};
use tracing::debug;

const MATCH_FIXTURE: &str = include_str!("fixtures/match.json");
const SQUADS_FIXTURE: &str = include_str!("fixtures/squads.json");
const COMPETITORS_FIXTURE: &str = include_str!("fixtures/competitors.json");

/// Serves the embedded fixture dataset for every match id, without touching
/// the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummySource;

#[async_trait::async_trait]
impl RegistrationSource for DummySource {
    async fn match_detail(&self, url: &str, _credentials: &Credentials) -> Result<Match> {
        debug!("Serving dummy match for {}", url);
        Ok(serde_json::from_str(MATCH_FIXTURE)?)
    }

    async fn squads(&self, url: &str, _credentials: &Credentials) -> Result<Vec<Squad>> {
        debug!("Serving dummy squads for {}", url);
        let listing: Listing<Squad> = serde_json::from_str(SQUADS_FIXTURE)?;
        Ok(listing.into_parts().0)
    }

    async fn competitors(
        &self,
        url: &str,
        _credentials: &Credentials,
    ) -> Result<Vec<ApiCompetitor>> {
        debug!("Serving dummy competitors for {}", url);
        let listing: Listing<ApiCompetitor> = serde_json::from_str(COMPETITORS_FIXTURE)?;
        Ok(listing.into_parts().0)
    }

    fn name(&self) -> &'static str {
        "dummy"
    }
}
