//! The shared run-loop state machine.

use super::budget::Evaluator;
use super::types::{RunResult, SearchProblem};
use rand::Rng;

/// Lifecycle of an engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    NotStarted,
    Running,
    Terminated,
}

/// Pluggable behavior driving the engine.
///
/// A strategy is composed into the engine rather than subclassing it: it
/// supplies the initial state (a single candidate or a whole population),
/// one search step, and an optional algorithm-specific termination
/// predicate. The engine owns the stop decision; a strategy only spends
/// budget it has checked for via
/// [`Evaluator::can_evaluate`].
pub trait Strategy<P: SearchProblem> {
    /// Search state threaded through the run. Single-point strategies use
    /// `(P::Solution, f64)`; population strategies carry their vectors.
    type State;

    /// Produces and evaluates the initial state, consuming budget.
    fn init<R: Rng>(&mut self, eval: &mut Evaluator<'_, P>, rng: &mut R) -> Self::State;

    /// Advances the search by one step, consuming budget.
    fn step<R: Rng>(
        &mut self,
        state: Self::State,
        eval: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) -> Self::State;

    /// Algorithm-specific termination, checked in addition to budget
    /// exhaustion and declared-optimum matching.
    fn finished(&self, _state: &Self::State) -> bool {
        false
    }
}

/// Generic budgeted run loop: `init`, then `step` until a stop condition
/// holds, then the evaluator's record.
pub struct Engine {
    state: EngineState,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            state: EngineState::NotStarted,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Runs `strategy` against `problem` within `max_evals` objective calls.
    ///
    /// The stop condition is: budget exhausted, or the declared optimum was
    /// matched, or the strategy reports itself finished. Budget-starved runs
    /// terminate gracefully with the best candidate observed so far.
    pub fn run<P, S, R>(
        &mut self,
        problem: &P,
        strategy: &mut S,
        max_evals: usize,
        trace: bool,
        rng: &mut R,
    ) -> RunResult<P::Solution>
    where
        P: SearchProblem,
        S: Strategy<P>,
        R: Rng,
    {
        assert_eq!(
            self.state,
            EngineState::NotStarted,
            "engine instances are single-use"
        );

        let mut eval = Evaluator::new(problem, max_evals, trace);
        let mut state = strategy.init(&mut eval, rng);
        self.state = EngineState::Running;

        while !Self::stop(strategy, &state, &eval) {
            state = strategy.step(state, &mut eval, rng);
        }

        self.state = EngineState::Terminated;
        eval.finish()
    }

    fn stop<P, S>(strategy: &S, state: &S::State, eval: &Evaluator<'_, P>) -> bool
    where
        P: SearchProblem,
        S: Strategy<P>,
    {
        eval.budget_exhausted() || eval.optimum_reached() || strategy.finished(state)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{pick, Direction};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Maximize x over [0, 100] in integer steps.
    struct Count {
        optimum: Option<f64>,
    }

    impl SearchProblem for Count {
        type Solution = i64;

        fn direction(&self) -> Direction {
            Direction::Maximize
        }

        fn initial<R: Rng>(&self, _rng: &mut R) -> i64 {
            0
        }

        fn objective(&self, x: &i64) -> f64 {
            *x as f64
        }

        fn optimum(&self) -> Option<f64> {
            self.optimum
        }
    }

    /// Deterministic single-point strategy: increment the candidate.
    struct Increment;

    impl Strategy<Count> for Increment {
        type State = (i64, f64);

        fn init<R: Rng>(&mut self, eval: &mut Evaluator<'_, Count>, rng: &mut R) -> (i64, f64) {
            let x = eval.problem().initial(rng);
            let fx = eval.evaluate(&x);
            (x, fx)
        }

        fn step<R: Rng>(
            &mut self,
            (x, fx): (i64, f64),
            eval: &mut Evaluator<'_, Count>,
            _rng: &mut R,
        ) -> (i64, f64) {
            let y = x + 1;
            let fy = eval.evaluate(&y);
            let (b, fb, _, _) = pick(eval.direction(), x, fx, y, fy);
            (b, fb)
        }

        fn finished(&self, (x, _): &(i64, f64)) -> bool {
            *x >= 100
        }
    }

    #[test]
    fn test_budget_stop() {
        let problem = Count { optimum: None };
        let mut engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(0);
        let result = engine.run(&problem, &mut Increment, 10, false, &mut rng);
        assert_eq!(engine.state(), EngineState::Terminated);
        assert_eq!(result.evaluations, 10);
        assert_eq!(result.best_fitness, 9.0);
    }

    #[test]
    fn test_optimum_stop() {
        let problem = Count { optimum: Some(5.0) };
        let mut engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(0);
        let result = engine.run(&problem, &mut Increment, 1000, false, &mut rng);
        assert_eq!(result.best_fitness, 5.0);
        assert_eq!(result.evaluations, 6);
    }

    #[test]
    fn test_strategy_finished_stop() {
        let problem = Count { optimum: None };
        let mut engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(0);
        let result = engine.run(&problem, &mut Increment, 1000, false, &mut rng);
        assert_eq!(result.best_fitness, 100.0);
        assert!(result.evaluations < 1000);
    }

    #[test]
    fn test_single_evaluation_budget() {
        let problem = Count { optimum: None };
        let mut engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(0);
        let result = engine.run(&problem, &mut Increment, 1, false, &mut rng);
        assert_eq!(result.evaluations, 1);
        assert_eq!(result.best, 0);
        assert_eq!(result.evals_to_best, 1);
    }

    #[test]
    #[should_panic(expected = "single-use")]
    fn test_engine_is_single_use() {
        let problem = Count { optimum: None };
        let mut engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(0);
        engine.run(&problem, &mut Increment, 5, false, &mut rng);
        engine.run(&problem, &mut Increment, 5, false, &mut rng);
    }

    /// Population strategy resampling a fixed-size generation each step.
    struct Resample {
        size: usize,
    }

    impl Strategy<Count> for Resample {
        type State = (Vec<i64>, Vec<f64>);

        fn init<R: Rng>(
            &mut self,
            eval: &mut Evaluator<'_, Count>,
            rng: &mut R,
        ) -> (Vec<i64>, Vec<f64>) {
            let pop: Vec<i64> = (0..self.size)
                .map(|_| rng.random_range(0..50))
                .collect();
            let fs = eval.evaluate_all(&pop);
            eval.record_generation(&fs);
            (pop, fs)
        }

        fn step<R: Rng>(
            &mut self,
            _state: (Vec<i64>, Vec<f64>),
            eval: &mut Evaluator<'_, Count>,
            rng: &mut R,
        ) -> (Vec<i64>, Vec<f64>) {
            let pop: Vec<i64> = (0..self.size)
                .map(|_| rng.random_range(0..50))
                .collect();
            let fs = eval.evaluate_all(&pop);
            eval.record_generation(&fs);
            (pop, fs)
        }
    }

    #[test]
    fn test_population_run_respects_budget_and_traces_generations() {
        let problem = Count { optimum: None };
        let mut engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(42);
        let result = engine.run(&problem, &mut Resample { size: 4 }, 10, true, &mut rng);

        assert!(result.evaluations <= 10);
        let trace = result.trace.unwrap();
        assert_eq!(trace.fitness.len(), result.evaluations);
        assert!(!trace.generation_best.is_empty());
        for (b, w) in trace.generation_best.iter().zip(&trace.generation_worst) {
            assert!(b >= w);
        }
    }
}
