use serde::{Deserialize, Serialize};

use crate::constants::FILTER_ALL;

/// Filter over the attendance log: optional group, optional day.
/// Both `None` means every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub group: Option<String>,
    /// `YYYY-MM-DD` prefix matching the start of record timestamps.
    pub date_prefix: Option<String>,
}

impl RecordFilter {
    /// No filtering.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter by group. `"ALL"`, empty, and `None` all mean no group filter.
    pub fn by_group(group: Option<&str>) -> Self {
        Self {
            group: group
                .map(str::trim)
                .filter(|g| !g.is_empty() && *g != FILTER_ALL)
                .map(str::to_string),
            date_prefix: None,
        }
    }

    /// Restrict this filter to a single day.
    pub fn on_day(mut self, date_prefix: impl Into<String>) -> Self {
        self.date_prefix = Some(date_prefix.into());
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.group.is_none() && self.date_prefix.is_none()
    }
}
