//! Bit-vector candidates and their variation operators.

use crate::core::Variation;
use rand::Rng;
use std::fmt;
use std::ops::Index;

/// A fixed-length vector of binary alleles.
///
/// Candidates are owned by the search loop holding them; every variation
/// produces a fresh copy, since algorithms repeatedly compare a candidate
/// against variants derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Builds a bitstring from explicit alleles.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Samples a uniform random bitstring of length `d`.
    pub fn random<R: Rng>(d: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..d).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// The all-ones bitstring of length `d`.
    pub fn ones(d: usize) -> Self {
        Self {
            bits: vec![true; d],
        }
    }

    /// The all-zeros bitstring of length `d`.
    pub fn zeros(d: usize) -> Self {
        Self {
            bits: vec![false; d],
        }
    }

    /// Number of loci.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The allele at locus `k`.
    pub fn get(&self, k: usize) -> bool {
        self.bits[k]
    }

    /// A copy with locus `k` flipped.
    pub fn flipped(&self, k: usize) -> Self {
        let mut y = self.clone();
        y.bits[k] = !y.bits[k];
        y
    }

    /// A copy with every locus flipped.
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|&b| !b).collect(),
        }
    }

    /// A copy with every locus in `loci` flipped.
    pub fn multi_flipped(&self, loci: &[usize]) -> Self {
        let mut y = self.clone();
        for &k in loci {
            y.bits[k] = !y.bits[k];
        }
        y
    }

    /// Number of one-alleles (the MaxOnes fitness).
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Iterates over the alleles in locus order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl Index<usize> for BitString {
    type Output = bool;

    fn index(&self, k: usize) -> &bool {
        &self.bits[k]
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Standard bitstring mutation operators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitMutation {
    /// Flips exactly one uniformly chosen locus (RMHC variation).
    FlipOne,
    /// Flips each locus independently with the given rate; `None` uses the
    /// classical `1/len` default.
    PerBit { rate: Option<f64> },
}

impl Variation<BitString> for BitMutation {
    fn vary<R: Rng>(&self, x: &BitString, rng: &mut R) -> BitString {
        match self {
            BitMutation::FlipOne if x.is_empty() => x.clone(),
            BitMutation::FlipOne => x.flipped(rng.random_range(0..x.len())),
            BitMutation::PerBit { rate } => {
                let p = rate.unwrap_or(1.0 / x.len().max(1) as f64);
                x.iter()
                    .map(|b| if rng.random_bool(p) { !b } else { b })
                    .collect()
            }
        }
    }
}
