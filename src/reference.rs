// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Country codes known to DCS, in the order the game lists them.
static DCS_COUNTRIES: Lazy<ReferenceSet> = Lazy::new(|| {
    ReferenceSet::from_iter([
        "RUS", "UKR", "USA", "TUR", "UK", "FRA", "GER", "AUSAF", "CAN", "SPN", "NETH", "BEL", "NOR",
        "DEN", "ISR", "GRG", "INS", "ABH", "RSO", "ITA", "AUS", "SUI", "AUT", "BLR", "BGR", "CZE",
        "CHN", "HRV", "EGY", "FIN", "GRC", "HUN", "IND", "IRN", "IRQ", "JPN", "KAZ", "PRK", "PAK",
        "POL", "ROU", "SAU", "SRB", "SVK", "KOR", "SWE", "SYR", "YEM", "VNM", "VEN", "TUN", "THA",
        "SDN", "PHL", "MAR", "MEX", "MYS", "LBY", "JOR", "IDN", "HND", "ETH", "CHL", "BRA", "BHR",
        "NZG", "YUG", "SUN", "RSI", "DZA", "KWT", "QAT", "OMN", "ARE", "CUB", "RSA",
    ])
});

/// Ordered, duplicate-free list of tokens a target list must contain.
///
/// Insertion order is kept; inserting a token twice keeps the first position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct ReferenceSet {
    tokens: IndexSet<String>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock DCS country list.
    pub fn dcs_countries() -> Self {
        DCS_COUNTRIES.clone()
    }

    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.tokens.insert(token.into())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ReferenceSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl From<Vec<String>> for ReferenceSet {
    fn from(tokens: Vec<String>) -> Self {
        tokens.into_iter().collect()
    }
}
