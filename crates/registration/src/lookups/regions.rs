use super::LookupTable;

/// IPSC regions keyed by the three letter code Shoot'n Score It stores.
pub(super) fn table() -> LookupTable<&'static str> {
    LookupTable::new(
        "region",
        [
            ("AUS", "Australia"),
            ("AUT", "Austria"),
            ("BEL", "Belgium"),
            ("CAN", "Canada"),
            ("CHE", "Switzerland"),
            ("CZE", "Czech Republic"),
            ("DEU", "Germany"),
            ("DNK", "Denmark"),
            ("ESP", "Spain"),
            ("EST", "Estonia"),
            ("FIN", "Finland"),
            ("FRA", "France"),
            ("GBR", "Great Britain"),
            ("GRC", "Greece"),
            ("HUN", "Hungary"),
            ("IRL", "Ireland"),
            ("ITA", "Italy"),
            ("LTU", "Lithuania"),
            ("LVA", "Latvia"),
            ("NLD", "Netherlands"),
            ("NOR", "Norway"),
            ("NZL", "New Zealand"),
            ("POL", "Poland"),
            ("PRT", "Portugal"),
            ("RUS", "Russia"),
            ("SVK", "Slovakia"),
            ("SVN", "Slovenia"),
            ("SWE", "Sweden"),
            ("UKR", "Ukraine"),
            ("USA", "United States"),
            ("ZAF", "South Africa"),
        ],
    )
}
