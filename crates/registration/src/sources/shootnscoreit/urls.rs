pub const DEFAULT_BASE_URL: &str = "https://shootnscoreit.com/api/ipsc/match/";

/// The three resource locations belonging to one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUrls {
    pub match_url: String,
    pub squads_url: String,
    pub competitors_url: String,
}

impl ResourceUrls {
    pub fn for_match(base_url: &str, match_id: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let match_url = format!("{}/{}/", base, match_id.trim());

        Self {
            squads_url: format!("{}squads/", match_url),
            competitors_url: format!("{}competitors/", match_url),
            match_url,
        }
    }
}
