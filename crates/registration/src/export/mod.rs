pub mod practiscore;

pub use practiscore::{PractiScoreExporter, file_name};
