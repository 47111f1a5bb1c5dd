use registration::{
    Credentials, Match, Registration, RegistrationPipeline, Result, ShootnScoreItClient,
};

/// Fetch only the match detail, to confirm the id and credentials work
pub async fn get_match(
    client: &ShootnScoreItClient,
    match_id: &str,
    credentials: &Credentials,
) -> Result<Match> {
    let pipeline = RegistrationPipeline::new(client, match_id, credentials)?;
    let stage = pipeline.match_stage().await?;
    Ok(stage.match_info)
}

/// Fetch and resolve the full registration for a match
pub async fn get_registration(
    client: &ShootnScoreItClient,
    match_id: &str,
    credentials: &Credentials,
) -> Result<Registration> {
    let pipeline = RegistrationPipeline::new(client, match_id, credentials)?;
    pipeline.run().await
}
