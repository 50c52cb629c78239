//! Compliance & revalidation evaluator.
//!
//! Pure functions over immutable record snapshots. Nothing in this module
//! touches the database, caches results, or holds state — callers fetch the
//! latest rows and recompute on every read, so derived values can never go
//! stale between requests.

pub mod progress;
pub mod report;
pub mod revalidation;
pub mod status;
