//! Variation over bounded real vectors.

use crate::core::Variation;
use rand::Rng;

/// Uniform bounded perturbation: adds a step drawn from `(-step, step)` to
/// each component, clamping to the feasible interval when bounds are set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepMutation {
    /// Maximum per-component step size.
    pub step: f64,
    /// Feasible interval applied to every component, if any.
    pub bounds: Option<(f64, f64)>,
}

impl StepMutation {
    pub fn new(step: f64) -> Self {
        Self { step, bounds: None }
    }

    pub fn bounded(step: f64, low: f64, high: f64) -> Self {
        Self {
            step,
            bounds: Some((low, high)),
        }
    }
}

impl Variation<Vec<f64>> for StepMutation {
    fn vary<R: Rng>(&self, x: &Vec<f64>, rng: &mut R) -> Vec<f64> {
        x.iter()
            .map(|&v| {
                let mut w = v + rng.random_range(-self.step..self.step);
                if let Some((low, high)) = self.bounds {
                    w = w.clamp(low, high);
                }
                w
            })
            .collect()
    }
}
