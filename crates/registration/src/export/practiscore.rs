//! PractiScore competitor import file.
//!
//! The column set and order below is what PractiScore's CSV import expects.
//! Any change to [`HEADERS`] must bump [`PRACTISCORE_SCHEMA_VERSION`].

use crate::canonical::models::Competitor;
use crate::error::{ImporterError, Result};
use csv::{Terminator, WriterBuilder};
use tracing::debug;

pub const PRACTISCORE_SCHEMA_VERSION: u32 = 1;

pub const HEADERS: [&str; 11] = [
    "Comp#",
    "First Name",
    "Last Name",
    "Email",
    "Member#",
    "Alias",
    "Division",
    "Power Factor",
    "Category",
    "Region",
    "Squad",
];

pub struct PractiScoreExporter;

impl PractiScoreExporter {
    /// Header row followed by one row per competitor, in input order.
    pub fn rows(competitors: &[Competitor]) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(competitors.len() + 1);
        rows.push(HEADERS.iter().map(|h| h.to_string()).collect());
        rows.extend(competitors.iter().map(Self::row));
        rows
    }

    /// Writes every row into a buffer; callers only ever see complete output.
    pub fn render(competitors: &[Competitor]) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for row in Self::rows(competitors) {
            writer.write_record(&row)?;
        }

        let buffer = writer
            .into_inner()
            .map_err(|e| ImporterError::IoError(e.into_error()))?;

        debug!(
            "Rendered {} competitors into {} bytes (schema v{})",
            competitors.len(),
            buffer.len(),
            PRACTISCORE_SCHEMA_VERSION
        );

        Ok(buffer)
    }

    fn row(competitor: &Competitor) -> Vec<String> {
        vec![
            competitor
                .number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            competitor.first_name.clone(),
            competitor.last_name.clone(),
            competitor.email.clone(),
            competitor.member_number.clone(),
            competitor.alias.clone(),
            competitor.division.clone(),
            competitor.power_factor.clone(),
            competitor.category.clone(),
            competitor.region.clone(),
            competitor.squad.clone(),
        ]
    }
}

/// Match name used when the remote one has nothing usable in it.
const FALLBACK_STEM: &str = "registration";

/// `<match name>.csv` with spaces replaced by underscores.
///
/// The match name comes from Shoot'n Score It, so path separators and control
/// characters are replaced too. The result is always a single path component.
pub fn file_name(match_name: &str) -> String {
    let stem: String = match_name
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' => '-',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.trim_matches('.').is_empty() {
        return format!("{}.csv", FALLBACK_STEM);
    }

    format!("{}.csv", stem)
}
