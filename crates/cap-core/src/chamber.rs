//! Chamber classification for legislator records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two congressional chambers, each backed by its own mirror table.
///
/// A member belongs to the chamber selected by the type of their latest
/// term: `"rep"` → House, `"sen"` → Senate. Any other term type is dropped
/// from both outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// SQL table this chamber's records are mirrored into.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Senate => "senate",
        }
    }

    /// Classify an upstream term type string into a chamber.
    ///
    /// Returns `None` for anything other than `"rep"` or `"sen"`.
    #[must_use]
    pub fn from_term_type(term_type: &str) -> Option<Self> {
        match term_type {
            "rep" => Some(Self::House),
            "sen" => Some(Self::Senate),
            _ => None,
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
