//! Gene-level bookkeeping: signed contributions and locus classification.

use crate::core::Direction;
use std::collections::HashSet;

/// Signed contribution of a single-flip experiment at locus `k`.
///
/// `fx` is the fitness of the retained candidate `x`, `fy` the fitness of
/// its one-bit variant; `allele` is the retained candidate's value at the
/// flipped locus. The raw change is measured in the optimization direction
/// and then negated when the retained allele is 0, so that a positive
/// contribution always means "allele 1 is better at this locus".
///
/// The value is a noisy, context-dependent estimate: it depends on the
/// rest of the genome at measurement time. Repeated samples accumulate in
/// the [`ContributionTable`] and are reduced by largest magnitude.
pub fn signed_contribution(direction: Direction, allele: bool, fx: f64, fy: f64) -> f64 {
    let c = match direction {
        Direction::Minimize => fy - fx,
        Direction::Maximize => fx - fy,
    };
    if allele {
        c
    } else {
        -c
    }
}

/// Append-only per-locus history of signed contribution samples.
///
/// Entries never shrink; they only grow until the run completes.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContributionTable {
    samples: Vec<Vec<f64>>,
}

impl ContributionTable {
    pub fn new(d: usize) -> Self {
        Self {
            samples: vec![Vec::new(); d],
        }
    }

    /// Number of loci tracked.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Appends one sample for locus `k`.
    pub fn record(&mut self, k: usize, c: f64) {
        self.samples[k].push(c);
    }

    /// All samples observed for locus `k`, in measurement order.
    pub fn samples(&self, k: usize) -> &[f64] {
        &self.samples[k]
    }

    /// The allele backed by the single sample of greatest magnitude.
    ///
    /// A positive extreme votes for allele 1, a negative one for allele 0.
    /// When every sample is exactly zero the current allele is kept —
    /// "most extreme evidence wins", never an average, because outlier
    /// measurements under interaction effects are informative.
    pub fn best_allele(&self, k: usize, current: bool) -> bool {
        let mut allele = current;
        let mut magnitude = 0.0;
        for &c in &self.samples[k] {
            if c > magnitude {
                allele = true;
                magnitude = c;
            } else if -c > magnitude {
                allele = false;
                magnitude = -c;
            }
        }
        allele
    }
}

/// Per-run partition of the loci `[0, D)`.
///
/// Loci start intron-like (no fitness effect observed) and move
/// monotonically into `coding` as soon as any flip experiment shows a
/// non-zero contribution; they never move back. Within coding, a locus
/// whose contribution is confirmed to disagree between a candidate and
/// its coding complement is permanently `non_separable`; loci whose
/// measurements agree are recorded in `separable` (re-confirmed on each
/// later pass).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneAnalysis {
    /// Signed contribution history per locus.
    pub contributions: ContributionTable,
    /// Loci with no observed fitness effect so far.
    pub intron: Vec<usize>,
    /// Loci confirmed to affect fitness, in discovery order.
    pub coding: Vec<usize>,
    /// Coding loci whose most recent separability probe agreed.
    pub separable: HashSet<usize>,
    /// Coding loci confirmed to interact with other coding loci.
    pub non_separable: HashSet<usize>,
}

impl GeneAnalysis {
    pub fn new(d: usize) -> Self {
        Self {
            contributions: ContributionTable::new(d),
            intron: (0..d).collect(),
            coding: Vec::new(),
            separable: HashSet::new(),
            non_separable: HashSet::new(),
        }
    }

    /// Number of loci under analysis.
    pub fn dimension(&self) -> usize {
        self.contributions.len()
    }

    /// Moves locus `k` from intron to coding. No-op if already coding.
    pub fn reclassify(&mut self, k: usize) {
        if let Some(pos) = self.intron.iter().position(|&j| j == k) {
            self.intron.remove(pos);
            self.coding.push(k);
        }
    }

    /// Whether every coding locus has a confirmed-separable probe and no
    /// confirmed interaction.
    pub fn all_coding_separable(&self) -> bool {
        self.coding
            .iter()
            .all(|k| self.separable.contains(k) && !self.non_separable.contains(k))
    }

    /// The locus-analysis termination condition: nothing intron-like left
    /// to confirm, and every coding locus confirmed separable.
    pub fn complete(&self) -> bool {
        self.intron.is_empty() && self.all_coding_separable()
    }
}
