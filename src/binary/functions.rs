//! Benchmark functions over bitstrings.
//!
//! The classical suite the bitstring-optimization literature reports on:
//! MaxOnes, Goldberg's 3-deceptive and boundedly-deceptive functions,
//! Forrest's Royal Road, and the Mixed composition of all four.

use super::space::BitString;
use crate::core::{Direction, SearchProblem};
use rand::Rng;

/// Sum of one-alleles.
pub fn max_ones(x: &BitString) -> f64 {
    x.count_ones() as f64
}

/// Goldberg's 3-deceptive function over consecutive 3-bit blocks.
///
/// Each block scores by its integer value (LSB first):
/// 28, 26, 22, 0, 14, 0, 0, 30. The optimum is all-ones (30 per block),
/// while the gradient points toward all-zeros (28).
pub fn deceptive3(x: &BitString) -> f64 {
    const SCORE: [f64; 8] = [28.0, 26.0, 22.0, 0.0, 14.0, 0.0, 0.0, 30.0];
    let mut c = 0.0;
    let mut i = 0;
    while i + 3 <= x.len() {
        let d = (x.get(i) as usize) + 2 * (x.get(i + 1) as usize) + 4 * (x.get(i + 2) as usize);
        c += SCORE[d];
        i += 3;
    }
    c
}

/// Goldberg's boundedly-deceptive function over consecutive 4-bit blocks.
///
/// A block with `u` ones scores `u` when saturated (`u == 4`) and `3 - u`
/// otherwise.
pub fn boundedly4(x: &BitString) -> f64 {
    generic_boundedly(x, 4)
}

fn generic_boundedly(x: &BitString, size: usize) -> f64 {
    let mut c = 0.0;
    let mut i = 0;
    while i + size <= x.len() {
        let u = (i..i + size).filter(|&k| x.get(k)).count();
        c += if u == size {
            u as f64
        } else {
            (size - 1 - u) as f64
        };
        i += size;
    }
    c
}

/// Forrest's Royal Road with 8-bit blocks: each fully-set block scores its
/// size, anything else scores zero.
pub fn royal_road8(x: &BitString) -> f64 {
    generic_royal_road(x, 8)
}

/// Royal Road with 16-bit blocks.
pub fn royal_road16(x: &BitString) -> f64 {
    generic_royal_road(x, 16)
}

fn generic_royal_road(x: &BitString, size: usize) -> f64 {
    let mut c = 0.0;
    let mut i = 0;
    while i + size <= x.len() {
        if (i..i + size).all(|k| x.get(k)) {
            c += size as f64;
        }
        i += size;
    }
    c
}

/// The Mixed function of Gomez & Leon (2022): each 20-bit block is
/// MaxOnes on bits 0..5, 3-deceptive on 5..8, boundedly-deceptive on
/// 8..12, and Royal Road 8 on 12..20.
pub fn mixed(x: &BitString) -> f64 {
    let mut f = 0.0;
    let mut start = 0;
    while start + 20 <= x.len() {
        let block: BitString = (start..start + 20).map(|k| x.get(k)).collect();
        let head: BitString = (0..5).map(|k| block.get(k)).collect();
        let dec: BitString = (5..8).map(|k| block.get(k)).collect();
        let bnd: BitString = (8..12).map(|k| block.get(k)).collect();
        let rr: BitString = (12..20).map(|k| block.get(k)).collect();
        f += max_ones(&head) + deceptive3(&dec) + boundedly4(&bnd) + royal_road8(&rr);
        start += 20;
    }
    f
}

/// A bitstring optimization problem: a dimension, a direction, an
/// objective, and (for the standard suite) the known optimum.
pub struct BitFunction<F> {
    dimension: usize,
    direction: Direction,
    optimum: Option<f64>,
    f: F,
}

impl<F> BitFunction<F>
where
    F: Fn(&BitString) -> f64 + Send + Sync,
{
    /// Wraps an arbitrary objective.
    pub fn custom(dimension: usize, direction: Direction, optimum: Option<f64>, f: F) -> Self {
        Self {
            dimension,
            direction,
            optimum,
            f,
        }
    }

    /// Problem dimension (number of loci).
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl BitFunction<fn(&BitString) -> f64> {
    /// MaxOnes maximization; optimum `d`.
    pub fn max_ones(d: usize) -> Self {
        Self::custom(d, Direction::Maximize, Some(d as f64), max_ones)
    }

    /// 3-deceptive maximization; optimum `10 d` for `d` divisible by 3.
    pub fn deceptive3(d: usize) -> Self {
        Self::custom(d, Direction::Maximize, Some(10.0 * d as f64), deceptive3)
    }

    /// Boundedly-deceptive maximization; optimum `d` for `d` divisible by 4.
    pub fn boundedly4(d: usize) -> Self {
        Self::custom(d, Direction::Maximize, Some(d as f64), boundedly4)
    }

    /// Royal Road 8 maximization; optimum `d` for `d` divisible by 8.
    pub fn royal_road8(d: usize) -> Self {
        Self::custom(d, Direction::Maximize, Some(d as f64), royal_road8)
    }

    /// Mixed maximization; optimum `47 d / 20` for `d` divisible by 20.
    pub fn mixed(d: usize) -> Self {
        Self::custom(d, Direction::Maximize, Some(47.0 * d as f64 / 20.0), mixed)
    }
}

impl<F> SearchProblem for BitFunction<F>
where
    F: Fn(&BitString) -> f64 + Send + Sync,
{
    type Solution = BitString;

    fn direction(&self) -> Direction {
        self.direction
    }

    fn initial<R: Rng>(&self, rng: &mut R) -> BitString {
        BitString::random(self.dimension, rng)
    }

    fn objective(&self, x: &BitString) -> f64 {
        (self.f)(x)
    }

    fn optimum(&self) -> Option<f64> {
        self.optimum
    }
}
