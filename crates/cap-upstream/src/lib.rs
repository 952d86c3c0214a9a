//! # cap-upstream
//!
//! HTTP client and transformer for the upstream legislators dataset.
//!
//! The upstream source is a single JSON document listing every current
//! member of Congress with their full term history. [`UpstreamClient`]
//! fetches and deserializes it; [`transform::split_chambers`] normalizes
//! the raw members into per-chamber [`cap_core::Legislator`] record sets.

mod client;
mod error;
pub mod models;
pub mod transform;

pub use client::UpstreamClient;
pub use error::UpstreamError;
