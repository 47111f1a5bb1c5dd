use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Match {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub starts: Option<NaiveDate>,
    #[serde(default)]
    pub venue: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Squad {
    pub id: u64,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Squad {
    /// Name shown in the export: the squad's own name, else its number.
    pub fn display_name(&self) -> String {
        match (self.name.as_deref().map(str::trim), self.number) {
            (Some(name), _) if !name.is_empty() => name.to_string(),
            (_, Some(number)) => format!("Squad {}", number),
            _ => String::new(),
        }
    }
}

/// A competitor as the competitors endpoint returns it, codes unresolved.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiCompetitor {
    pub id: u64,
    pub number: Option<u32>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub member_number: Option<String>,
    pub alias: Option<String>,
    pub category: Option<u32>,
    pub division: Option<u32>,
    pub region: Option<String>,
    pub power_factor: Option<String>,
    pub squad: Option<u64>,
}

/// List endpoints answer either with a bare array or with a page envelope.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum Listing<T> {
    Page {
        results: Vec<T>,
        #[serde(default)]
        next: Option<String>,
    },
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        match self {
            Self::Page { results, next } => (results, next.filter(|n| !n.is_empty())),
            Self::Items(items) => (items, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squad_display_name_prefers_name() {
        let squad = Squad {
            id: 1,
            number: Some(3),
            name: Some(" Squad Three ".to_string()),
        };
        assert_eq!(squad.display_name(), "Squad Three");
    }

    #[test]
    fn test_squad_display_name_falls_back_to_number() {
        let squad = Squad {
            id: 1,
            number: Some(3),
            name: Some("   ".to_string()),
        };
        assert_eq!(squad.display_name(), "Squad 3");

        let squad = Squad {
            id: 1,
            number: None,
            name: None,
        };
        assert_eq!(squad.display_name(), "");
    }

    #[test]
    fn test_competitor_tolerates_missing_fields() {
        let competitor: ApiCompetitor = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(competitor.id, 7);
        assert_eq!(competitor.first_name, "");
        assert!(competitor.category.is_none());
        assert!(competitor.squad.is_none());
    }

    #[test]
    fn test_listing_accepts_bare_array_and_page() {
        let bare: Listing<Squad> = serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        let (items, next) = bare.into_parts();
        assert_eq!(items.len(), 2);
        assert!(next.is_none());

        let page: Listing<Squad> =
            serde_json::from_str(r#"{"results": [{"id": 1}], "next": "http://x/?page=2"}"#)
                .unwrap();
        let (items, next) = page.into_parts();
        assert_eq!(items.len(), 1);
        assert_eq!(next.as_deref(), Some("http://x/?page=2"));
    }

    #[test]
    fn test_match_date_is_optional() {
        let m: Match = serde_json::from_str(r#"{"id": 5, "name": "Club Night"}"#).unwrap();
        assert!(m.starts.is_none());

        let m: Match =
            serde_json::from_str(r#"{"id": 5, "name": "Club Night", "starts": "2024-04-13"}"#)
                .unwrap();
        assert_eq!(m.starts, NaiveDate::from_ymd_opt(2024, 4, 13));
    }
}
