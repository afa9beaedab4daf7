//! Repetition harness for independent runs.

use super::types::{RunResult, SearchProblem};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Aggregate statistics over `runs` independent repetitions.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSummary {
    /// Number of repetitions aggregated.
    pub runs: usize,
    /// Fraction of runs matching the declared optimum; `None` when the
    /// problem declares no optimum.
    pub success_rate: Option<f64>,
    /// Mean of best fitness across runs.
    pub mean_best: f64,
    /// Sample standard deviation of best fitness across runs.
    pub std_best: f64,
    /// Mean evaluations consumed per run.
    pub mean_evaluations: f64,
    /// Mean call index of the last strict improvement per run.
    pub mean_evals_to_best: f64,
}

/// Runs `run_one(i)` for `i in 0..runs` and aggregates the records.
///
/// Repetitions are independent: each closure invocation must construct its
/// own run state (and derive its own seed from `i` for reproducibility).
/// With the `parallel` feature the repetitions execute on the rayon pool;
/// within a run everything stays strictly sequential.
///
/// # Panics
/// Panics if `runs` is zero.
pub fn experiment<P, F>(problem: &P, runs: usize, run_one: F) -> ExperimentSummary
where
    P: SearchProblem,
    F: Fn(usize) -> RunResult<P::Solution> + Sync,
    P::Solution: Send,
{
    assert!(runs > 0, "experiment needs at least one run");

    #[cfg(feature = "parallel")]
    let results: Vec<RunResult<P::Solution>> = (0..runs).into_par_iter().map(&run_one).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<RunResult<P::Solution>> = (0..runs).map(&run_one).collect();

    let n = runs as f64;
    let bests: Vec<f64> = results.iter().map(|r| r.best_fitness).collect();
    let mean_best = bests.iter().sum::<f64>() / n;
    let var_best = if runs > 1 {
        bests.iter().map(|b| (b - mean_best).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };

    let success_rate = problem.optimum().map(|opt| {
        bests.iter().filter(|&&b| b == opt).count() as f64 / n
    });

    ExperimentSummary {
        runs,
        success_rate,
        mean_best,
        std_best: var_best.sqrt(),
        mean_evaluations: results.iter().map(|r| r.evaluations as f64).sum::<f64>() / n,
        mean_evals_to_best: results.iter().map(|r| r.evals_to_best as f64).sum::<f64>() / n,
    }
}
