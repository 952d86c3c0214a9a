//! # cap-core
//!
//! Core types for capitol-sync.
//!
//! This crate provides the types shared across all capitol-sync crates:
//! - The `Legislator` record as it is stored in the mirror tables
//! - The `Chamber` enum mapping term types to target tables
//! - The state abbreviation → full name lookup

pub mod chamber;
pub mod legislator;
pub mod states;

pub use chamber::Chamber;
pub use legislator::Legislator;
pub use states::state_name;
