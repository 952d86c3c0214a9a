//! Table repositories.

mod chamber;

pub use chamber::ReconcileOutcome;
