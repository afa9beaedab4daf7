//! Hill Climbing with neutral mutations.
//!
//! The classical single-point loop: vary the current candidate, evaluate
//! the variant, keep the better of the two with ties favoring the variant.
//! With [`BitMutation::FlipOne`](crate::binary::BitMutation) this is the
//! "random mutation hill-climbing" (RMHC) of Forrest & Mitchell; with
//! per-bit mutation it is the classical neutral-drift hill climber.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcRunner, HcStrategy};
