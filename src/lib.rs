//! Evaluation-budgeted stochastic global optimization algorithms (SGoals).
//!
//! Every algorithm in this crate runs against a finite budget of
//! objective-function calls, routed through a single per-run
//! [`Evaluator`](core::Evaluator) that keeps best-so-far bookkeeping and
//! optional traces. On top of that shared engine the crate provides:
//!
//! - **Hill Climbing (HC / RMHC)**: single-point search with neutral-drift
//!   acceptance and a pluggable variation operator.
//! - **Global Search (GS1)**: uniform sampling with periodic order-1 schema
//!   reconstruction, after Das & Whitley (1991).
//! - **GABO**: Gene Analysis Bitstring Optimization — per-locus causal
//!   analysis partitioning genome positions into intron-like and coding-like
//!   sets, estimating best alleles from single-flip experiments, and
//!   detecting pairwise non-separability through complement probing,
//!   after Gomez & Leon (2022).
//!
//! # Architecture
//!
//! `core` defines the search-space-agnostic machinery: the problem trait,
//! the budget tracker, the run-loop engine, and the experiment harness.
//! `binary` and `real` define the two supported candidate representations
//! together with their variation operators and benchmark functions. Each
//! algorithm lives in its own module with a `Config`/`Runner` pair.
//!
//! # Reproducibility
//!
//! Every runner takes an optional seed; a seeded run consumes random numbers
//! in a fixed order per algorithm step, so results are bit-reproducible.
//! All per-run state (budget counter, locus classification, contribution
//! tables) is owned by the run and discarded at its end — independent runs
//! may execute concurrently on separate threads.

pub mod binary;
pub mod core;
pub mod gabo;
pub mod gs;
pub mod hc;
pub mod real;
