//! Differentiable objectives for fitting simulated brain activity.
//!
//! Each objective implements the [`Loss`] trait: it picks one trajectory
//! out of a [`neurofit_core::SimulationOutput`] bundle by key, compares it
//! against an empirical target tensor, and returns a rank-0 differentiable
//! scalar for the optimizer to backpropagate.
//!
//! - [`FcLoss`] compares functional connectivity derived from two time
//!   series.
//! - [`FixedFcLoss`] compares against a connectivity matrix the caller
//!   already computed.
//! - [`SquaredErrorLoss`] compares the raw series pointwise.
//! - [`CompositeLoss`] blends any of the above with scalar weights.

mod composite;
mod fc;
mod loss;
mod ts;

pub use composite::CompositeLoss;
pub use fc::{FcLoss, FixedFcLoss};
pub use loss::Loss;
pub use ts::SquaredErrorLoss;
