//! Static code tables used to turn Shoot'n Score It codes into the names
//! PractiScore expects. Each table is built once per process and shared.

mod categories;
mod divisions;
mod regions;

use lazy_static::lazy_static;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Display value for a code that is present but not in the table.
pub const UNKNOWN: &str = "Unknown";

lazy_static! {
    static ref CATEGORIES: LookupTable<u32> = categories::table();
    static ref DIVISIONS: LookupTable<u32> = divisions::table();
    static ref REGIONS: LookupTable<&'static str> = regions::table();
}

pub fn categories() -> &'static LookupTable<u32> {
    &CATEGORIES
}

pub fn divisions() -> &'static LookupTable<u32> {
    &DIVISIONS
}

pub fn regions() -> &'static LookupTable<&'static str> {
    &REGIONS
}

#[derive(Debug, Clone)]
pub struct LookupTable<K> {
    name: &'static str,
    entries: HashMap<K, &'static str>,
}

impl<K: Eq + Hash> LookupTable<K> {
    pub fn new(name: &'static str, entries: impl IntoIterator<Item = (K, &'static str)>) -> Self {
        Self {
            name,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<Q>(&self, code: &Q) -> Option<&'static str>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(code).copied()
    }

    /// Resolves an optional code to its display name.
    ///
    /// A missing code resolves to the empty string, a code the table does not
    /// know resolves to [`UNKNOWN`].
    pub fn resolve<Q>(&self, code: Option<&Q>) -> &'static str
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match code {
            None => "",
            Some(code) => self.get(code).unwrap_or(UNKNOWN),
        }
    }
}

/// The three tables handed to the resolver together.
#[derive(Debug, Clone, Copy)]
pub struct LookupTables {
    pub categories: &'static LookupTable<u32>,
    pub divisions: &'static LookupTable<u32>,
    pub regions: &'static LookupTable<&'static str>,
}

impl LookupTables {
    pub fn load() -> Self {
        Self {
            categories: categories(),
            divisions: divisions(),
            regions: regions(),
        }
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::load()
    }
}
