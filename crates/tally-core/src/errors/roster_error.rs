/// Typed rejections for roster and group administration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("duplicate name blocked: \"{name}\" already belongs to another identifier")]
    DuplicateName { name: String },

    #[error("no roster entry for identifier {identifier}")]
    NotFound { identifier: i64 },

    #[error("cannot delete group \"{group}\": {count} roster entries still reference it")]
    GroupInUse { group: String, count: usize },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("invalid identifier {identifier}: must be a non-negative integer")]
    InvalidIdentifier { identifier: i64 },
}
