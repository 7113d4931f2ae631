//! Core tensor plumbing for fitting whole-brain models to recordings.
//!
//! Everything downstream of a simulator run flows through the types in this
//! crate: simulated state trajectories arrive as a [`SimulationOutput`]
//! bundle of node×time tensors, get summarized into functional-connectivity
//! matrices by the [`fc`] primitives, and are guarded on the way in by the
//! shape checks in [`validate`].
//!
//! All numeric work happens on [`candle_core::Tensor`]s so that every
//! intermediate stays on the autograd tape and the final fit statistic can
//! be backpropagated into the physiological parameters that produced the
//! simulation.

pub mod device;
pub mod error;
pub mod fc;
pub mod output;
pub mod validate;

pub use device::DevicePlacement;
pub use error::{FitError, FitResult};
pub use output::SimulationOutput;
