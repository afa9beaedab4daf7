//! Core trait and type definitions shared by all algorithms.

use rand::Rng;

/// Optimization direction, declared once per problem and never mutated
/// during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Lower objective values are better.
    Minimize,
    /// Higher objective values are better.
    Maximize,
}

impl Direction {
    /// Whether `candidate` is at least as good as `incumbent`.
    ///
    /// Ties count as improvements. This is what allows neutral drift across
    /// flat fitness plateaus, which the GABO intron analysis relies on.
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::Minimize => candidate <= incumbent,
            Direction::Maximize => candidate >= incumbent,
        }
    }
}

/// Neutral hill-climbing tie-break between two (candidate, fitness) pairs.
///
/// Returns `(best, f_best, other, f_other)`. The second pair wins ties, so
/// callers should pass the newer candidate second.
pub fn pick<S>(direction: Direction, x: S, fx: f64, y: S, fy: f64) -> (S, f64, S, f64) {
    if direction.improves(fy, fx) {
        (y, fy, x, fx)
    } else {
        (x, fx, y, fy)
    }
}

/// Defines a black-box optimization problem.
///
/// The user supplies the objective function, a way to sample initial
/// candidates, the optimization direction, and (for benchmark functions
/// with a known answer) the optimal objective value used by success-rate
/// instrumentation and early stopping.
///
/// The objective must accept any candidate the space can produce. It is
/// assumed pure and fast; all budget accounting happens in the
/// [`Evaluator`](super::Evaluator), never here.
pub trait SearchProblem: Send + Sync {
    /// The candidate representation.
    type Solution: Clone + PartialEq + Send;

    /// Optimization direction for objective values.
    fn direction(&self) -> Direction;

    /// Samples a fresh candidate uniformly from the search space.
    fn initial<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the objective value of a candidate.
    fn objective(&self, x: &Self::Solution) -> f64;

    /// The known optimal objective value, if any.
    ///
    /// Used only for test instrumentation and early termination; real
    /// unknown-optimum problems return `None`.
    fn optimum(&self) -> Option<f64> {
        None
    }
}

/// A variation operator producing a new candidate from an existing one.
///
/// Operators are explicit values rather than introspected closures; an
/// operator that needs parents of a different arity gets its own trait.
pub trait Variation<S>: Send + Sync {
    /// Produces a variant of `x`. Never mutates `x` itself.
    fn vary<R: Rng>(&self, x: &S, rng: &mut R) -> S;
}

/// Per-call and per-generation fitness traces of a run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    /// Raw objective value of every call, in call order.
    pub fitness: Vec<f64>,
    /// Best-so-far objective value after every call.
    pub best_so_far: Vec<f64>,
    /// Best objective per generation (population strategies only).
    pub generation_best: Vec<f64>,
    /// Worst objective per generation (population strategies only).
    pub generation_worst: Vec<f64>,
}

/// The record produced by a run: best candidate seen, its fitness, and
/// evaluation bookkeeping. Immutable once the run terminates.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult<S> {
    /// Best candidate observed within budget.
    pub best: S,
    /// Objective value of `best`.
    pub best_fitness: f64,
    /// Total objective-function calls consumed.
    pub evaluations: usize,
    /// Call index of the last strict best-fitness improvement.
    pub evals_to_best: usize,
    /// Full traces, when requested at run start.
    pub trace: Option<Trace>,
}
