use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier printed on the box of a set (e.g., `3836`).
///
/// Set numbers stay strings: historical numbers carry leading zeros and
/// variant suffixes, and nothing in the catalog does arithmetic on them.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetNumber(pub String);

/// Product line a set is sold under (e.g., `Town`, `Games`).
///
/// Mandatory per the source contract. Records missing it still deserialize so
/// the violation surfaces on the query that needs the field, with the set
/// number attached, instead of failing the whole load.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(pub String);

impl SetNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Theme {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_number_round_trips_as_bare_string() {
        let number = SetNumber("3836".to_string());
        let serialized = serde_json::to_string(&number).unwrap();
        assert_eq!(serialized, "\"3836\"");
        let parsed: SetNumber = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, number);
    }

    #[test]
    fn theme_round_trips_as_bare_string() {
        let theme = Theme("Advanced models".to_string());
        let serialized = serde_json::to_string(&theme).unwrap();
        assert_eq!(serialized, "\"Advanced models\"");
        let parsed: Theme = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn display_matches_the_inner_value() {
        assert_eq!(SetNumber("0012".to_string()).to_string(), "0012");
        assert_eq!(Theme("Town".to_string()).to_string(), "Town");
    }
}
