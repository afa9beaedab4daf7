//! GS1 execution loop.

use super::config::GsConfig;
use crate::binary::BitString;
use crate::core::{Direction, Engine, Evaluator, RunResult, SearchProblem, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Population strategy: uniform sampling with per-allele fitness
/// accumulators, reconstructing the schema-best candidate every
/// `check` evaluations.
pub struct GsStrategy {
    check: usize,
    // Indexed [allele][locus]: sum of sample fitness and sample count.
    sums: [Vec<f64>; 2],
    counts: [Vec<usize>; 2],
}

impl GsStrategy {
    pub fn new(check: usize) -> Self {
        Self {
            check,
            sums: [Vec::new(), Vec::new()],
            counts: [Vec::new(), Vec::new()],
        }
    }

    fn observe(&mut self, x: &BitString, fx: f64) {
        for (k, b) in x.iter().enumerate() {
            let a = b as usize;
            self.sums[a][k] += fx;
            self.counts[a][k] += 1;
        }
    }

    /// Assembles the candidate whose every locus carries the allele with
    /// the better observed mean fitness. Loci seen with only one allele
    /// keep that allele; ties resolve to allele 1.
    fn schema_best(&self, direction: Direction) -> BitString {
        (0..self.sums[0].len())
            .map(|k| {
                match (self.counts[0][k], self.counts[1][k]) {
                    (0, _) => true,
                    (_, 0) => false,
                    (c0, c1) => {
                        let m0 = self.sums[0][k] / c0 as f64;
                        let m1 = self.sums[1][k] / c1 as f64;
                        direction.improves(m1, m0)
                    }
                }
            })
            .collect()
    }
}

impl<P> Strategy<P> for GsStrategy
where
    P: SearchProblem<Solution = BitString>,
{
    type State = (Vec<BitString>, Vec<f64>);

    fn init<R: Rng>(&mut self, eval: &mut Evaluator<'_, P>, rng: &mut R) -> Self::State {
        let x = eval.problem().initial(rng);
        let d = x.len();
        self.sums = [vec![0.0; d], vec![0.0; d]];
        self.counts = [vec![0; d], vec![0; d]];

        let fx = eval.evaluate(&x);
        self.observe(&x, fx);
        (vec![x], vec![fx])
    }

    fn step<R: Rng>(
        &mut self,
        (mut pop, mut fs): Self::State,
        eval: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) -> Self::State {
        let checkpoint = (eval.count() + 1) % self.check == 0;
        if checkpoint {
            // Spend this call on the schema-best reconstruction; it does
            // not feed back into the accumulators.
            let y = self.schema_best(eval.direction());
            let fy = eval.evaluate(&y);
            pop.push(y);
            fs.push(fy);
            eval.record_generation(&fs);
            (Vec::new(), Vec::new())
        } else {
            let d = self.sums[0].len();
            let x = BitString::random(d, rng);
            let fx = eval.evaluate(&x);
            self.observe(&x, fx);
            pop.push(x);
            fs.push(fx);
            (pop, fs)
        }
    }
}

/// Executes the GS1 global search.
pub struct GlobalSearchRunner;

impl GlobalSearchRunner {
    /// Runs GS1 on a bitstring problem.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GsConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P>(problem: &P, config: &GsConfig) -> RunResult<BitString>
    where
        P: SearchProblem<Solution = BitString>,
    {
        config.validate().expect("invalid GsConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let check = config.check_interval.unwrap_or(config.max_evaluations);
        let mut strategy = GsStrategy::new(check);
        Engine::new().run(
            problem,
            &mut strategy,
            config.max_evaluations,
            config.trace,
            &mut rng,
        )
    }
}
