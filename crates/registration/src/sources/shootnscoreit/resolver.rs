use super::models::{ApiCompetitor, Match, Squad};
use crate::canonical::models::Competitor;
use crate::lookups::{LookupTables, UNKNOWN};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Joins raw competitors against the match's squads and the code tables.
///
/// Resolution never fails: a squad reference that does not resolve becomes an
/// empty squad name and unknown codes become [`UNKNOWN`].
pub struct EntityResolver<'a> {
    tables: LookupTables,
    match_info: &'a Match,
    squad_names: HashMap<u64, String>,
}

impl<'a> EntityResolver<'a> {
    pub fn new(tables: LookupTables, match_info: &'a Match, squads: &[Squad]) -> Self {
        let mut squad_names = HashMap::with_capacity(squads.len());
        for squad in squads {
            squad_names
                .entry(squad.id)
                .or_insert_with(|| squad.display_name());
        }

        Self {
            tables,
            match_info,
            squad_names,
        }
    }

    /// Resolves every competitor, keeping the order they were fetched in.
    pub fn resolve(&self, competitors: Vec<ApiCompetitor>) -> Vec<Competitor> {
        let resolved: Vec<Competitor> = competitors
            .into_iter()
            .map(|raw| self.resolve_one(raw))
            .collect();

        info!(
            "Resolved {} competitors for match {} ({})",
            resolved.len(),
            self.match_info.id,
            self.match_info.name
        );

        resolved
    }

    fn resolve_one(&self, raw: ApiCompetitor) -> Competitor {
        let squad = self.squad_name(&raw);

        let category = self.tables.categories.resolve(raw.category.as_ref());
        let division = self.tables.divisions.resolve(raw.division.as_ref());
        let region = self.tables.regions.resolve(raw.region.as_deref());

        for (table, value, code) in [
            (
                self.tables.categories.name(),
                category,
                raw.category.map(|c| c.to_string()),
            ),
            (
                self.tables.divisions.name(),
                division,
                raw.division.map(|d| d.to_string()),
            ),
            (self.tables.regions.name(), region, raw.region.clone()),
        ] {
            if value == UNKNOWN {
                warn!(
                    "Competitor {} has unknown {} code {:?}",
                    raw.id, table, code
                );
            }
        }

        Competitor {
            id: raw.id,
            number: raw.number,
            first_name: raw.first_name,
            last_name: raw.last_name,
            email: raw.email.unwrap_or_default(),
            member_number: raw.member_number.unwrap_or_default(),
            alias: raw.alias.unwrap_or_default(),
            power_factor: raw.power_factor.unwrap_or_default(),
            category: category.to_string(),
            division: division.to_string(),
            region: region.to_string(),
            squad,
        }
    }

    fn squad_name(&self, raw: &ApiCompetitor) -> String {
        let Some(squad_id) = raw.squad else {
            debug!("Competitor {} is not squadded", raw.id);
            return String::new();
        };

        match self.squad_names.get(&squad_id) {
            Some(name) => name.clone(),
            None => {
                warn!(
                    "Competitor {} references squad {} which is not in match {}",
                    raw.id, squad_id, self.match_info.id
                );
                String::new()
            }
        }
    }
}
