use crate::Result;
use crate::sources::shootnscoreit::{ApiCompetitor, Match, Squad};
use std::fmt;

/// Shoot'n Score It login, forwarded with each request and never kept.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Where the raw match, squad and competitor payloads come from.
#[async_trait::async_trait]
pub trait RegistrationSource: Send + Sync {
    async fn match_detail(&self, url: &str, credentials: &Credentials) -> Result<Match>;

    async fn squads(&self, url: &str, credentials: &Credentials) -> Result<Vec<Squad>>;

    async fn competitors(&self, url: &str, credentials: &Credentials)
    -> Result<Vec<ApiCompetitor>>;

    fn name(&self) -> &'static str;
}
