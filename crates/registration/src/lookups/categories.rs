use super::LookupTable;

/// IPSC competitor categories keyed by their Shoot'n Score It id.
pub(super) fn table() -> LookupTable<u32> {
    LookupTable::new(
        "category",
        [
            (1, "Lady"),
            (2, "Junior"),
            (3, "Senior"),
            (4, "Super Senior"),
            (5, "Super Junior"),
            (6, "Grand Senior"),
        ],
    )
}
