//! Forecourt - Pipeline
//!
//! The aggregation orchestrator: fetch every configured retailer feed,
//! normalize, and append the combined batch to the snapshot store.
//!
//! # Design
//!
//! - **Sequential over sources**: feeds are pulled one at a time; a slow or
//!   failing source delays the run but the serving path is unaffected, since
//!   the run lives on its own task.
//! - **Per-source daily idempotence**: a source that already contributed
//!   rows today is skipped, via the store's fetch markers.
//! - **Single write phase**: nothing is written until every source has been
//!   tried; an all-empty run leaves the store untouched, metadata included.
//! - **Error boundary**: the spawned task logs and swallows a failed run.

mod aggregator;
mod error;

#[cfg(test)]
mod aggregator_test;

pub use aggregator::{Aggregator, RunSummary};
pub use error::{PipelineError, Result};
