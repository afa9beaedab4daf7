//! The evaluation budget tracker.

use super::types::{pick, Direction, RunResult, SearchProblem, Trace};

/// Wraps a problem's objective function with a finite evaluation budget and
/// best-so-far bookkeeping.
///
/// Every algorithm must route every objective call through [`evaluate`]
/// (or [`evaluate_all`]); none may call the raw objective directly, or
/// budget accounting breaks. Callers are expected to check
/// [`can_evaluate`] before spending budget — an operation that needs a
/// fixed number of paired calls (COSA needs 2 per locus) checks for all of
/// them up front. Evaluating past the budget is a programming error and
/// panics.
///
/// All state here is per-run: constructed at run start, consumed into a
/// [`RunResult`] at run end.
///
/// [`evaluate`]: Evaluator::evaluate
/// [`evaluate_all`]: Evaluator::evaluate_all
/// [`can_evaluate`]: Evaluator::can_evaluate
pub struct Evaluator<'a, P: SearchProblem> {
    problem: &'a P,
    max_evals: usize,
    count: usize,
    best: Option<(P::Solution, f64)>,
    evals_to_best: usize,
    trace: Option<Trace>,
}

impl<'a, P: SearchProblem> Evaluator<'a, P> {
    /// Creates a fresh tracker with an untouched budget of `max_evals` calls.
    pub fn new(problem: &'a P, max_evals: usize, trace: bool) -> Self {
        Self {
            problem,
            max_evals,
            count: 0,
            best: None,
            evals_to_best: 0,
            trace: trace.then(Trace::default),
        }
    }

    /// The problem under evaluation.
    pub fn problem(&self) -> &'a P {
        self.problem
    }

    /// The problem's optimization direction.
    pub fn direction(&self) -> Direction {
        self.problem.direction()
    }

    /// Objective calls consumed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether `n` further calls fit within the budget. Consumes nothing.
    pub fn can_evaluate(&self, n: usize) -> bool {
        self.count + n <= self.max_evals
    }

    /// Whether no further call fits within the budget.
    pub fn budget_exhausted(&self) -> bool {
        !self.can_evaluate(1)
    }

    /// Whether the best fitness matches the problem's declared optimum.
    pub fn optimum_reached(&self) -> bool {
        match (self.problem.optimum(), &self.best) {
            (Some(opt), Some((_, f))) => *f == opt,
            _ => false,
        }
    }

    /// Best (candidate, fitness) pair observed so far.
    pub fn best(&self) -> Option<(&P::Solution, f64)> {
        self.best.as_ref().map(|(x, f)| (x, *f))
    }

    /// Neutral tie-break between two pairs under the problem's direction.
    pub fn pick(
        &self,
        x: P::Solution,
        fx: f64,
        y: P::Solution,
        fy: f64,
    ) -> (P::Solution, f64, P::Solution, f64) {
        pick(self.direction(), x, fx, y, fy)
    }

    /// Evaluates one candidate, consuming one unit of budget.
    ///
    /// Updates the best record with neutral drift (ties replace the stored
    /// candidate) while the improvement index only advances on strict
    /// fitness changes.
    ///
    /// # Panics
    /// Panics if the budget is already exhausted; callers must check
    /// [`can_evaluate`](Evaluator::can_evaluate) first.
    pub fn evaluate(&mut self, x: &P::Solution) -> f64 {
        assert!(
            self.can_evaluate(1),
            "evaluation budget exhausted ({} of {} calls used)",
            self.count,
            self.max_evals
        );
        self.count += 1;
        let fx = self.problem.objective(x);
        let direction = self.direction();

        match &mut self.best {
            None => {
                self.best = Some((x.clone(), fx));
                self.evals_to_best = 1;
            }
            Some((bx, bf)) => {
                if direction.improves(fx, *bf) {
                    if fx != *bf {
                        self.evals_to_best = self.count;
                    }
                    *bx = x.clone();
                    *bf = fx;
                }
            }
        }

        if let Some(trace) = &mut self.trace {
            trace.fitness.push(fx);
            trace.best_so_far.push(self.best.as_ref().map(|(_, f)| *f).unwrap_or(fx));
        }
        fx
    }

    /// Evaluates candidates in order until the budget runs out.
    ///
    /// Returns one fitness per evaluated candidate; the result is shorter
    /// than `xs` when the budget ran out mid-population.
    pub fn evaluate_all(&mut self, xs: &[P::Solution]) -> Vec<f64> {
        let mut fs = Vec::with_capacity(xs.len());
        for x in xs {
            if !self.can_evaluate(1) {
                break;
            }
            fs.push(self.evaluate(x));
        }
        fs
    }

    /// Records per-generation population statistics into the trace.
    ///
    /// No-op when tracing is off or `fitnesses` is empty.
    pub fn record_generation(&mut self, fitnesses: &[f64]) {
        let Some(trace) = &mut self.trace else { return };
        let (Some(min), Some(max)) = (
            fitnesses.iter().copied().reduce(f64::min),
            fitnesses.iter().copied().reduce(f64::max),
        ) else {
            return;
        };
        let (best, worst) = match self.problem.direction() {
            Direction::Minimize => (min, max),
            Direction::Maximize => (max, min),
        };
        trace.generation_best.push(best);
        trace.generation_worst.push(worst);
    }

    /// Consumes the tracker into the run's immutable record.
    ///
    /// # Panics
    /// Panics if no evaluation ever happened (a strategy's `init` must
    /// evaluate at least one candidate).
    pub fn finish(self) -> RunResult<P::Solution> {
        let (best, best_fitness) = self.best.expect("run performed no evaluations");
        RunResult {
            best,
            best_fitness,
            evaluations: self.count,
            evals_to_best: self.evals_to_best,
            trace: self.trace,
        }
    }
}
