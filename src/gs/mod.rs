//! Global Search over order-1 schemata (GS1).
//!
//! Samples candidates uniformly, accumulating per-locus per-allele fitness
//! statistics, and periodically spends one evaluation on the candidate
//! assembled from the best order-1 schema of every locus.
//!
//! # References
//!
//! Das & Whitley (1991), "The only challenging problems are deceptive:
//! global search by solving order-1 hyperplanes".

mod config;
mod runner;

pub use config::GsConfig;
pub use runner::{GlobalSearchRunner, GsStrategy};
