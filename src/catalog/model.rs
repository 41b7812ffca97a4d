//! Deserializable representation of one catalog entry.
//!
//! The fields mirror the JSON source contract (`number`, `name`, `theme`,
//! `pieces`, `tags`); deserialization is structural, matched by field name.
//! Records are immutable after load and queries only ever borrow from them.

use crate::catalog::identity::{SetNumber, Theme};
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
/// One set as stored in the catalog file.
///
/// `theme` is mandatory by contract but kept optional here so a record that
/// violates the contract loads anyway and faults on the query that reads the
/// field. `tags` may be absent or empty; both mean the set carries no tags.
pub struct LegoSet {
    pub number: SetNumber,
    pub name: String,
    #[serde(default)]
    pub theme: Option<Theme>,
    pub pieces: u32,
    #[serde(default)]
    pub tags: Option<BTreeSet<String>>,
}

impl LegoSet {
    /// True when the set carries `tag` exactly (case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_full_record() {
        let set: LegoSet = serde_json::from_str(
            r#"{"number":"3836","name":"Garage","theme":"Town","pieces":50,"tags":["Car"]}"#,
        )
        .unwrap();
        assert_eq!(set.number.as_str(), "3836");
        assert_eq!(set.name, "Garage");
        assert_eq!(set.theme.as_ref().map(Theme::as_str), Some("Town"));
        assert_eq!(set.pieces, 50);
        assert!(set.has_tag("Car"));
    }

    #[test]
    fn theme_and_tags_may_be_absent() {
        let set: LegoSet =
            serde_json::from_str(r#"{"number":"604","name":"Tractor","pieces":6}"#).unwrap();
        assert!(set.theme.is_none());
        assert!(set.tags.is_none());
        assert!(!set.has_tag("Car"));
    }

    #[test]
    fn empty_tag_list_matches_nothing() {
        let set: LegoSet = serde_json::from_str(
            r#"{"number":"4002","name":"Boat","theme":"Sea","pieces":200,"tags":[]}"#,
        )
        .unwrap();
        assert_eq!(set.tags.as_ref().map(BTreeSet::len), Some(0));
        assert!(!set.has_tag("Car"));
    }

    #[test]
    fn missing_required_field_is_a_parse_failure() {
        let result = serde_json::from_str::<LegoSet>(r#"{"number":"604","name":"Tractor"}"#);
        assert!(result.is_err());
    }
}
