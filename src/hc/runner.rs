//! HC execution loop.

use super::config::HcConfig;
use crate::core::{Engine, Evaluator, RunResult, SearchProblem, Strategy, Variation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single-point strategy: vary, evaluate, keep the pick winner.
pub struct HcStrategy<V> {
    variation: V,
}

impl<V> HcStrategy<V> {
    pub fn new(variation: V) -> Self {
        Self { variation }
    }
}

impl<P, V> Strategy<P> for HcStrategy<V>
where
    P: SearchProblem,
    V: Variation<P::Solution>,
{
    type State = (P::Solution, f64);

    fn init<R: Rng>(&mut self, eval: &mut Evaluator<'_, P>, rng: &mut R) -> Self::State {
        let x = eval.problem().initial(rng);
        let fx = eval.evaluate(&x);
        (x, fx)
    }

    fn step<R: Rng>(
        &mut self,
        (x, fx): Self::State,
        eval: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) -> Self::State {
        let y = self.variation.vary(&x, rng);
        let fy = eval.evaluate(&y);
        let (b, fb, _, _) = eval.pick(x, fx, y, fy);
        (b, fb)
    }
}

/// Executes Hill Climbing.
pub struct HcRunner;

impl HcRunner {
    /// Runs HC with the given variation operator.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`HcConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P, V>(problem: &P, variation: V, config: &HcConfig) -> RunResult<P::Solution>
    where
        P: SearchProblem,
        V: Variation<P::Solution>,
    {
        config.validate().expect("invalid HcConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let mut strategy = HcStrategy::new(variation);
        Engine::new().run(
            problem,
            &mut strategy,
            config.max_evaluations,
            config.trace,
            &mut rng,
        )
    }
}
