use serde::{Deserialize, Serialize};

/// A normalized legislator record, one row in the `house` or `senate` table.
///
/// Every field is stored as TEXT. `id` is the stable bioguide identifier and
/// primary key; all other columns are overwritten on each sync. `state` holds
/// the full state name (empty string when the upstream abbreviation is not a
/// recognized state), and `position` is the raw term type (`"rep"` / `"sen"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Legislator {
    pub fullname: String,
    pub firstname: String,
    pub lastname: String,
    pub id: String,
    pub party: String,
    pub state: String,
    pub position: String,
    pub start_term: String,
    pub end_term: String,
}
