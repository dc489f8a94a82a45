use serde::{Deserialize, Serialize};

/// A named category (class/cohort) roster entries belong to.
/// May not be deleted while any roster entry references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTag {
    pub name: String,
}

impl GroupTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Groups seeded when the store is first initialized and empty.
pub const DEFAULT_GROUPS: &[&str] = &["Class A", "Class B"];
