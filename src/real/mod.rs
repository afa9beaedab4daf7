//! Real-vector search space (secondary to the bitstring space).
//!
//! Candidates are `Vec<f64>` points inside a bounded box; [`StepMutation`]
//! is the single-point variation operator used by hill climbing over this
//! space.

mod functions;
mod space;

pub use functions::{rastrigin, sphere, RealFunction};
pub use space::StepMutation;
