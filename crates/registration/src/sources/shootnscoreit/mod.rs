//! Shoot'n Score It IPSC match API: match detail, squads and competitors.

mod client;
mod fixtures;
mod models;
mod resolver;
mod urls;

pub use client::{DataMode, ShootnScoreItClient};
pub use fixtures::DummySource;
pub use models::*;
pub use resolver::EntityResolver;
pub use urls::{DEFAULT_BASE_URL, ResourceUrls};
