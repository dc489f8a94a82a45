use serde::{Deserialize, Serialize};

/// One registered person: sensor identifier mapped to display name and group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Identifier assigned by the sensor (primary key).
    pub identifier: i64,
    /// Display name, normalized. Unique across the roster under
    /// case-insensitive comparison, independent of identifier.
    pub name: String,
    /// Group the entry belongs to. References a `GroupTag` by name.
    pub group: String,
}

impl RosterEntry {
    pub fn new(identifier: i64, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            identifier,
            name: name.into(),
            group: group.into(),
        }
    }

    /// Lowercased normalized name, the key used for uniqueness checks.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Normalize a name: strip leading/trailing whitespace and collapse
/// internal runs of whitespace to a single space. Applied before every
/// comparison and store; the uniqueness rule does not rely on storage
/// collation.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_collapses() {
        assert_eq!(normalize_name("  Ryan   Tan  "), "Ryan Tan");
        assert_eq!(normalize_name("Ryan"), "Ryan");
        assert_eq!(normalize_name("\tRyan\n Tan"), "Ryan Tan");
    }

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn name_key_is_case_insensitive() {
        let a = RosterEntry::new(1, "Ryan", "Class A");
        let b = RosterEntry::new(2, "RYAN", "Class B");
        assert_eq!(a.name_key(), b.name_key());
    }

    proptest::proptest! {
        #[test]
        fn normalize_is_idempotent(s in ".{0,80}") {
            let once = normalize_name(&s);
            proptest::prop_assert_eq!(normalize_name(&once), once);
        }

        #[test]
        fn normalized_has_no_edge_or_double_spaces(s in ".{0,80}") {
            let n = normalize_name(&s);
            proptest::prop_assert!(!n.starts_with(' ') && !n.ends_with(' '));
            proptest::prop_assert!(!n.contains("  "));
        }
    }
}
