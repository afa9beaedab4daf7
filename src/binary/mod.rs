//! Fixed-length bit-vector search space.
//!
//! [`BitString`] is the candidate representation used by the bitstring
//! algorithms (HC, GS1, GABO); [`BitMutation`] supplies the standard
//! variation operators; [`functions`] holds the benchmark suite the
//! bitstring literature tests against.

mod space;

pub mod functions;

pub use functions::BitFunction;
pub use space::{BitMutation, BitString};
