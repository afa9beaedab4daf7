//! GABO execution: ICSplit, IOSA, COSA, and the orchestrating runner.

use super::config::GaboConfig;
use super::types::{signed_contribution, GeneAnalysis};
use crate::binary::BitString;
use crate::core::{Engine, Evaluator, RunResult, SearchProblem, Strategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Result of a GABO run: the usual evaluation record plus the final locus
/// classification.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaboResult {
    /// Best-so-far record of the run.
    pub record: RunResult<BitString>,
    /// Locus partition and contribution history at termination.
    pub analysis: GeneAnalysis,
}

enum Phase {
    /// First step: ICSplit followed by an initial COSA.
    Split,
    /// Every later step: one IOSA pass followed by one COSA pass.
    Rounds,
}

/// The GABO search behavior, driven by the shared [`Engine`].
///
/// All analysis state lives in this per-run value; nothing is shared
/// across runs.
pub struct GaboStrategy {
    analysis: GeneAnalysis,
    phase: Phase,
}

impl GaboStrategy {
    pub fn new() -> Self {
        Self {
            analysis: GeneAnalysis::new(0),
            phase: Phase::Split,
        }
    }

    /// Consumes the strategy, exposing the final locus classification.
    pub fn into_analysis(self) -> GeneAnalysis {
        self.analysis
    }

    /// Records and returns the signed contribution of a flip experiment.
    fn contribution<P>(
        &mut self,
        eval: &Evaluator<'_, P>,
        x: &BitString,
        fx: f64,
        fy: f64,
        k: usize,
    ) -> f64
    where
        P: SearchProblem<Solution = BitString>,
    {
        let c = signed_contribution(eval.direction(), x.get(k), fx, fy);
        self.analysis.contributions.record(k, c);
        c
    }

    /// The full stop condition, also consulted mid-phase before optional
    /// reconstruction evaluations.
    fn stop_now<P>(&self, eval: &Evaluator<'_, P>) -> bool
    where
        P: SearchProblem<Solution = BitString>,
    {
        eval.budget_exhausted() || eval.optimum_reached() || self.analysis.complete()
    }

    /// Flips every currently-coding locus; falls back to the full
    /// complement when no locus is coding yet.
    fn coding_complement(&self, x: &BitString) -> BitString {
        if self.analysis.coding.is_empty() {
            x.complement()
        } else {
            x.multi_flipped(&self.analysis.coding)
        }
    }

    /// Evaluates the candidate assembled from each locus's best observed
    /// allele and keeps the pick winner. Skipped when the run is stopping.
    fn best_by_contribution<P>(
        &mut self,
        x: BitString,
        fx: f64,
        eval: &mut Evaluator<'_, P>,
    ) -> (BitString, f64)
    where
        P: SearchProblem<Solution = BitString>,
    {
        if self.stop_now(eval) {
            return (x, fx);
        }
        let y: BitString = x
            .iter()
            .enumerate()
            .map(|(k, b)| self.analysis.contributions.best_allele(k, b))
            .collect();
        let fy = eval.evaluate(&y);
        let (x, fx, _, _) = eval.pick(x, fx, y, fy);
        (x, fx)
    }

    /// One flip experiment per locus in random order, moving loci with
    /// non-zero contribution from intron to coding. A budget exhausted
    /// mid-scan yields a legitimate partial classification.
    fn icsplit<P, R>(
        &mut self,
        mut x: BitString,
        mut fx: f64,
        eval: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) -> (BitString, f64)
    where
        P: SearchProblem<Solution = BitString>,
        R: Rng,
    {
        let mut order: Vec<usize> = (0..x.len()).collect();
        order.shuffle(rng);
        for k in order {
            if !eval.can_evaluate(1) {
                return (x, fx);
            }
            let y = x.flipped(k);
            let fy = eval.evaluate(&y);
            let (bx, bfx, _, ofy) = eval.pick(x, fx, y, fy);
            x = bx;
            fx = bfx;
            if self.contribution(eval, &x, fx, ofy, k) != 0.0 {
                self.analysis.reclassify(k);
            }
        }
        self.best_by_contribution(x, fx, eval)
    }

    /// Re-tests every intron-classified locus once, in random order,
    /// against the current genomic background. A locus judged neutral
    /// earlier may prove non-neutral here and is reclassified as coding.
    fn iosa<P, R>(
        &mut self,
        mut x: BitString,
        mut fx: f64,
        eval: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) -> (BitString, f64)
    where
        P: SearchProblem<Solution = BitString>,
        R: Rng,
    {
        self.analysis.intron.shuffle(rng);
        let mut i = 0;
        while i < self.analysis.intron.len() {
            if !eval.can_evaluate(1) {
                return (x, fx);
            }
            let k = self.analysis.intron[i];
            let y = x.flipped(k);
            let fy = eval.evaluate(&y);
            let (bx, bfx, _, ofy) = eval.pick(x, fx, y, fy);
            x = bx;
            fx = bfx;
            if self.contribution(eval, &x, fx, ofy, k) != 0.0 {
                self.analysis.reclassify(k);
            } else {
                i += 1;
            }
        }
        (x, fx)
    }

    /// Separability probing: measures each coding locus's contribution on
    /// the current candidate and on its coding complement; a disagreement
    /// marks the locus permanently non-separable. Each locus test costs
    /// exactly two evaluations, checked up front.
    fn cosa<P, R>(
        &mut self,
        x: BitString,
        fx: f64,
        eval: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) -> (BitString, f64)
    where
        P: SearchProblem<Solution = BitString>,
        R: Rng,
    {
        if self.analysis.coding.is_empty() || !eval.can_evaluate(1) {
            return (x, fx);
        }
        let xc = self.coding_complement(&x);
        let fxc = eval.evaluate(&xc);
        let (mut x, mut fx, mut xc, mut fxc) = eval.pick(x, fx, xc, fxc);

        let mut order = self.analysis.coding.clone();
        order.shuffle(rng);
        for k in order {
            if self.analysis.non_separable.contains(&k) {
                continue;
            }
            if !eval.can_evaluate(2) {
                return (x, fx);
            }
            let y = x.flipped(k);
            let fy = eval.evaluate(&y);
            let yc = self.coding_complement(&y);
            let fyc = eval.evaluate(&yc);

            let cx = self.contribution(eval, &x, fx, fy, k);
            let cxc = self.contribution(eval, &xc, fxc, fyc, k);
            if cx != cxc {
                self.analysis.non_separable.insert(k);
                self.analysis.separable.remove(&k);
            } else {
                self.analysis.separable.insert(k);
            }

            // Keep the tracked complement partner consistent with the
            // retained candidate.
            let prev = x.clone();
            let (by, bfy, byc, bfyc) = eval.pick(y, fy, yc, fyc);
            let (bx, bfx, _, _) = eval.pick(x, fx, by, bfy);
            if bx != prev {
                xc = byc;
                fxc = bfyc;
            }
            x = bx;
            fx = bfx;
        }
        self.best_by_contribution(x, fx, eval)
    }
}

impl Default for GaboStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Strategy<P> for GaboStrategy
where
    P: SearchProblem<Solution = BitString>,
{
    type State = (BitString, f64);

    fn init<R: Rng>(&mut self, eval: &mut Evaluator<'_, P>, rng: &mut R) -> Self::State {
        let x = eval.problem().initial(rng);
        self.analysis = GeneAnalysis::new(x.len());
        self.phase = Phase::Split;
        let fx = eval.evaluate(&x);
        (x, fx)
    }

    fn step<R: Rng>(
        &mut self,
        (x, fx): Self::State,
        eval: &mut Evaluator<'_, P>,
        rng: &mut R,
    ) -> Self::State {
        match self.phase {
            Phase::Split => {
                self.phase = Phase::Rounds;
                let (x, fx) = self.icsplit(x, fx, eval, rng);
                self.cosa(x, fx, eval, rng)
            }
            Phase::Rounds => {
                let (x, fx) = self.iosa(x, fx, eval, rng);
                self.cosa(x, fx, eval, rng)
            }
        }
    }

    fn finished(&self, _state: &Self::State) -> bool {
        self.analysis.complete()
    }
}

/// Executes GABO.
pub struct GaboRunner;

impl GaboRunner {
    /// Runs GABO on a bitstring problem.
    ///
    /// Sequence: evaluate the initial candidate, ICSplit, COSA, then
    /// alternate IOSA and COSA until the budget is exhausted, the declared
    /// optimum is matched, or the locus analysis is complete. A budget too
    /// small for even the initial scan still yields the best candidate
    /// observed within it.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaboConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P>(problem: &P, config: &GaboConfig) -> GaboResult
    where
        P: SearchProblem<Solution = BitString>,
    {
        config.validate().expect("invalid GaboConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let mut strategy = GaboStrategy::new();
        let record = Engine::new().run(
            problem,
            &mut strategy,
            config.max_evaluations,
            config.trace,
            &mut rng,
        );
        GaboResult {
            record,
            analysis: strategy.into_analysis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::functions::{boundedly4, max_ones, royal_road8};
    use crate::binary::BitFunction;
    use crate::core::Direction;

    fn partition_invariants(result: &GaboResult, d: usize) {
        let analysis = &result.analysis;
        let mut seen: Vec<usize> = analysis
            .intron
            .iter()
            .chain(analysis.coding.iter())
            .copied()
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..d).collect::<Vec<_>>(), "intron/coding must partition the loci");
        for k in &analysis.intron {
            assert!(!analysis.coding.contains(k));
        }
        for k in analysis.separable.iter().chain(analysis.non_separable.iter()) {
            assert!(analysis.coding.contains(k), "separability applies to coding loci only");
        }
    }

    #[test]
    fn test_max_ones_reaches_optimum_within_small_budget() {
        let problem = BitFunction::max_ones(8);
        let config = GaboConfig::default().with_max_evaluations(50).with_seed(42);

        let result = GaboRunner::run(&problem, &config);

        assert_eq!(result.record.best_fitness, 8.0);
        assert_eq!(result.record.best, BitString::ones(8));
        assert!(result.record.evaluations < 50, "got {}", result.record.evaluations);
        partition_invariants(&result, 8);
    }

    #[test]
    fn test_separable_problem_terminates_by_classification() {
        // No declared optimum: termination must come from the locus
        // analysis itself, not from optimum matching.
        let problem = BitFunction::custom(8, Direction::Maximize, None, max_ones);
        let config = GaboConfig::default().with_max_evaluations(200).with_seed(7);

        let result = GaboRunner::run(&problem, &config);

        assert!(result.analysis.complete());
        assert!(result.analysis.intron.is_empty());
        assert_eq!(result.analysis.coding.len(), 8);
        assert_eq!(result.analysis.separable.len(), 8);
        assert!(result.analysis.non_separable.is_empty());
        assert_eq!(result.record.best_fitness, 8.0);
        assert!(
            result.record.evaluations < 200,
            "classification-complete runs must stop early, got {}",
            result.record.evaluations
        );
        partition_invariants(&result, 8);
    }

    #[test]
    fn test_deceptive_blocks_all_coding_and_interacting() {
        // Three boundedly-deceptive 4-bit blocks: every flip moves fitness,
        // so no locus may end up intron; within a block the contribution of
        // a locus depends on its neighbors, which the complement probe
        // exposes as non-separability. No declared optimum, so the full
        // analysis runs regardless of the candidates encountered.
        let problem = BitFunction::custom(12, Direction::Maximize, None, boundedly4);
        let config = GaboConfig::default().with_max_evaluations(2000).with_seed(11);

        let result = GaboRunner::run(&problem, &config);

        assert!(result.analysis.intron.is_empty(), "no locus of boundedly4 is neutral");
        assert_eq!(result.analysis.coding.len(), 12);
        assert_eq!(
            result.analysis.non_separable.len(),
            12,
            "block-internal interaction must be detected at every locus"
        );
        assert!(result.record.evaluations <= 2000);
        partition_invariants(&result, 12);
    }

    #[test]
    fn test_neutral_loci_stay_intron() {
        // Only the first four of eight loci matter; the rest are true
        // introns and must survive every IOSA re-test.
        let problem = BitFunction::custom(8, Direction::Maximize, None, |x: &BitString| {
            (0..4).filter(|&k| x.get(k)).count() as f64
        });
        let config = GaboConfig::default().with_max_evaluations(200).with_seed(5);

        let result = GaboRunner::run(&problem, &config);

        let mut intron = result.analysis.intron.clone();
        intron.sort_unstable();
        assert_eq!(intron, vec![4, 5, 6, 7]);
        let mut coding = result.analysis.coding.clone();
        coding.sort_unstable();
        assert_eq!(coding, vec![0, 1, 2, 3]);
        assert_eq!(result.record.best_fitness, 4.0);
        // Unconfirmed introns keep the run alive to the last evaluation.
        assert_eq!(result.record.evaluations, 200);
        partition_invariants(&result, 8);
    }

    #[test]
    fn test_budget_of_one_returns_initial_record() {
        let problem = BitFunction::max_ones(8);
        let config = GaboConfig::default().with_max_evaluations(1).with_seed(3);

        let result = GaboRunner::run(&problem, &config);

        assert_eq!(result.record.evaluations, 1);
        assert_eq!(result.record.evals_to_best, 1);
        assert_eq!(result.analysis.coding.len(), 0);
        assert_eq!(result.analysis.intron.len(), 8);
        assert_eq!(
            result.record.best_fitness,
            result.record.best.count_ones() as f64
        );
    }

    #[test]
    fn test_plateau_function_burns_budget_gracefully() {
        // Royal Road from a random start shows flat fitness almost
        // everywhere; whatever the classification ends up being, the
        // budget invariant and the locus partition must hold.
        let problem = BitFunction::custom(8, Direction::Maximize, None, royal_road8);
        let config = GaboConfig::default().with_max_evaluations(100).with_seed(13);

        let result = GaboRunner::run(&problem, &config);

        assert!(result.record.evaluations <= 100);
        partition_invariants(&result, 8);
    }

    #[test]
    fn test_contribution_history_grows_only() {
        let problem = BitFunction::custom(8, Direction::Maximize, None, boundedly4);
        let config = GaboConfig::default().with_max_evaluations(300).with_seed(17);

        let result = GaboRunner::run(&problem, &config);

        // Every locus was probed at least once by ICSplit.
        for k in 0..8 {
            assert!(!result.analysis.contributions.samples(k).is_empty());
        }
        partition_invariants(&result, 8);
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let problem = BitFunction::mixed(20);
        let config = GaboConfig::default().with_max_evaluations(400).with_seed(23);

        let a = GaboRunner::run(&problem, &config);
        let b = GaboRunner::run(&problem, &config);

        assert_eq!(a.record.best, b.record.best);
        assert_eq!(a.record.best_fitness, b.record.best_fitness);
        assert_eq!(a.record.evaluations, b.record.evaluations);
        assert_eq!(a.analysis.coding, b.analysis.coding);
        assert_eq!(a.analysis.non_separable, b.analysis.non_separable);
    }

    #[test]
    fn test_trace_records_every_call() {
        let problem = BitFunction::max_ones(10);
        let config = GaboConfig::default()
            .with_max_evaluations(100)
            .with_trace(true)
            .with_seed(29);

        let result = GaboRunner::run(&problem, &config);

        let trace = result.record.trace.unwrap();
        assert_eq!(trace.fitness.len(), result.record.evaluations);
        assert_eq!(trace.best_so_far.len(), result.record.evaluations);
        for w in trace.best_so_far.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_empty_genome_is_degenerate_not_an_error() {
        let problem = BitFunction::custom(0, Direction::Maximize, None, |_x: &BitString| 0.0);
        let config = GaboConfig::default().with_max_evaluations(5).with_seed(1);

        let result = GaboRunner::run(&problem, &config);

        assert!(result.record.best.is_empty());
        assert!(result.analysis.complete());
        assert!(result.record.evaluations <= 5);
    }
}
