//! Search-space-agnostic machinery shared by every algorithm.
//!
//! - [`SearchProblem`]: the user-facing problem contract (objective,
//!   initial sampling, optimization direction, optional known optimum).
//! - [`Evaluator`]: the evaluation budget tracker — the single arbiter of
//!   how many objective calls have happened in a run.
//! - [`Engine`] / [`Strategy`]: the run-loop state machine, parameterized
//!   by an init-strategy, a step-strategy, and a finished-predicate.
//! - [`experiment`]: repetition harness aggregating independent runs.

mod budget;
mod engine;
mod experiment;
mod types;

pub use budget::Evaluator;
pub use engine::{Engine, EngineState, Strategy};
pub use experiment::{experiment, ExperimentSummary};
pub use types::{pick, Direction, RunResult, SearchProblem, Trace, Variation};
