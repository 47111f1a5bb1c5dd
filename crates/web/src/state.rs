use registration::ShootnScoreItClient;
use std::sync::Arc;

/// Shared by every request; the client's data mode is fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ShootnScoreItClient>,
}

impl AppState {
    pub fn new(client: ShootnScoreItClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}
