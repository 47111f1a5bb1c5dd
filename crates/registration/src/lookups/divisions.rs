use super::LookupTable;

pub(super) fn table() -> LookupTable<u32> {
    LookupTable::new(
        "division",
        [
            (1, "Open"),
            (2, "Standard"),
            (3, "Production"),
            (4, "Revolver"),
            (5, "Classic"),
            (6, "Production Optics"),
            (7, "Production Optics Light"),
            (8, "PCC"),
        ],
    )
}
