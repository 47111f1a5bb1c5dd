pub mod canonical;
pub mod error;
pub mod export;
pub mod lookups;
pub mod pipeline;
pub mod sources;
pub mod traits;

pub use canonical::models::{Competitor, Registration};
pub use error::{ImporterError, RemoteStatus, Result};
pub use lookups::LookupTables;
pub use pipeline::{MatchStage, RegistrationPipeline, SquadStage};
pub use traits::{Credentials, RegistrationSource};

// Re-export Shoot'n Score It types
pub use sources::shootnscoreit::{
    DEFAULT_BASE_URL, DataMode, Match, ResourceUrls, ShootnScoreItClient, Squad,
};
