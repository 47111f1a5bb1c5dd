//! Fetch-then-resolve flow for one match, with each stage as its own type so
//! competitors can only be resolved once the match and squads are in hand.

use crate::canonical::models::Registration;
use crate::error::{ImporterError, Result};
use crate::lookups::LookupTables;
use crate::sources::shootnscoreit::{Match, ResourceUrls, ShootnScoreItClient, Squad};
use crate::traits::Credentials;
use tracing::info;

/// Output of the match fetch.
#[derive(Debug, Clone)]
pub struct MatchStage {
    pub match_info: Match,
}

/// Output of the match and squad fetches; everything competitors need.
#[derive(Debug, Clone)]
pub struct SquadStage {
    pub match_info: Match,
    pub squads: Vec<Squad>,
}

pub struct RegistrationPipeline<'a> {
    client: &'a ShootnScoreItClient,
    credentials: &'a Credentials,
    urls: ResourceUrls,
    tables: LookupTables,
}

impl<'a> RegistrationPipeline<'a> {
    pub fn new(
        client: &'a ShootnScoreItClient,
        match_id: &str,
        credentials: &'a Credentials,
    ) -> Result<Self> {
        validate_request(match_id, credentials)?;

        Ok(Self {
            client,
            credentials,
            urls: client.urls_for(match_id),
            tables: LookupTables::load(),
        })
    }

    pub async fn match_stage(&self) -> Result<MatchStage> {
        let match_info = self
            .client
            .fetch_match(&self.urls.match_url, self.credentials)
            .await?;

        Ok(MatchStage { match_info })
    }

    pub async fn squad_stage(&self, stage: MatchStage) -> Result<SquadStage> {
        let squads = self
            .client
            .fetch_squads(&self.urls.squads_url, self.credentials)
            .await?;

        Ok(SquadStage {
            match_info: stage.match_info,
            squads,
        })
    }

    /// Fetches the match and its squads concurrently.
    pub async fn prepare(&self) -> Result<SquadStage> {
        let (match_info, squads) = tokio::try_join!(
            self.client
                .fetch_match(&self.urls.match_url, self.credentials),
            self.client
                .fetch_squads(&self.urls.squads_url, self.credentials),
        )?;

        Ok(SquadStage { match_info, squads })
    }

    pub async fn resolve(&self, stage: SquadStage) -> Result<Registration> {
        let competitors = self
            .client
            .fetch_competitors(
                &self.urls.competitors_url,
                &self.tables,
                &stage.match_info,
                &stage.squads,
                self.credentials,
            )
            .await?;

        info!(
            "Registration for '{}' has {} competitors in {} squads",
            stage.match_info.name,
            competitors.len(),
            stage.squads.len()
        );

        Ok(Registration {
            match_info: stage.match_info,
            competitors,
        })
    }

    pub async fn run(&self) -> Result<Registration> {
        let stage = self.prepare().await?;
        self.resolve(stage).await
    }
}

/// Rejects requests missing a field, before anything is sent upstream.
pub fn validate_request(match_id: &str, credentials: &Credentials) -> Result<()> {
    let match_id = match_id.trim();

    if match_id.is_empty()
        || credentials.username.trim().is_empty()
        || credentials.password.is_empty()
    {
        return Err(ImporterError::ValidationError(
            "match id, username and password are all required".to_string(),
        ));
    }

    if !match_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ImporterError::ValidationError(format!(
            "match id '{}' must only contain letters and digits",
            match_id
        )));
    }

    Ok(())
}
