//! Real-vector benchmark functions.

use crate::core::{Direction, SearchProblem};
use rand::Rng;

/// Sphere function: `sum(x_i^2)`, minimum 0 at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// Rastrigin function, minimum 0 at the origin.
pub fn rastrigin(x: &[f64]) -> f64 {
    let a = 10.0;
    a * x.len() as f64
        + x.iter()
            .map(|&v| v * v - a * (2.0 * std::f64::consts::PI * v).cos())
            .sum::<f64>()
}

/// A real-vector problem over the box `[low, high]^d`.
pub struct RealFunction<F> {
    dimension: usize,
    low: f64,
    high: f64,
    direction: Direction,
    optimum: Option<f64>,
    f: F,
}

impl<F> RealFunction<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    pub fn custom(
        dimension: usize,
        low: f64,
        high: f64,
        direction: Direction,
        optimum: Option<f64>,
        f: F,
    ) -> Self {
        Self {
            dimension,
            low,
            high,
            direction,
            optimum,
            f,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The per-component feasible interval.
    pub fn bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

impl RealFunction<fn(&[f64]) -> f64> {
    /// Sphere minimization over `[-5.12, 5.12]^d`.
    pub fn sphere(d: usize) -> Self {
        Self::custom(d, -5.12, 5.12, Direction::Minimize, Some(0.0), sphere)
    }

    /// Rastrigin minimization over `[-5.12, 5.12]^d`.
    pub fn rastrigin(d: usize) -> Self {
        Self::custom(d, -5.12, 5.12, Direction::Minimize, Some(0.0), rastrigin)
    }
}

impl<F> SearchProblem for RealFunction<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    type Solution = Vec<f64>;

    fn direction(&self) -> Direction {
        self.direction
    }

    fn initial<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.dimension)
            .map(|_| rng.random_range(self.low..self.high))
            .collect()
    }

    fn objective(&self, x: &Vec<f64>) -> f64 {
        (self.f)(x)
    }

    fn optimum(&self) -> Option<f64> {
        self.optimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sphere_minimum_at_origin() {
        assert_eq!(sphere(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(sphere(&[1.0, 2.0]), 5.0);
    }

    #[test]
    fn test_rastrigin_minimum_at_origin() {
        assert!(rastrigin(&[0.0; 4]).abs() < 1e-9);
        assert!(rastrigin(&[1.3, -2.1]) > 0.0);
    }

    #[test]
    fn test_initial_samples_inside_box() {
        let problem = RealFunction::sphere(6);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let x = problem.initial(&mut rng);
            assert_eq!(x.len(), 6);
            assert!(x.iter().all(|&v| (-5.12..5.12).contains(&v)));
        }
    }
}
