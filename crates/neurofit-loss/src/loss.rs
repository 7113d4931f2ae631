//! The objective contract every fit statistic implements.

use candle_core::Tensor;
use neurofit_core::{FitResult, SimulationOutput};

/// A differentiable fit statistic between a simulation and a target.
///
/// Implementations hold only immutable construction-time configuration
/// (which simulated variable to read, where to place intermediates), so a
/// single instance can be evaluated every optimization step. `compute` is
/// a pure function of its arguments: argument-contract checks run first
/// and fail fast, then the statistic is assembled from tensor operations
/// so the returned rank-0 scalar stays on the autograd tape.
///
/// The meaning of `emp` is per-implementation: a node×time recording for
/// series-based objectives, a node×node connectivity matrix for the fixed
/// variant.
pub trait Loss: Send + Sync {
    /// Evaluate the objective.
    fn compute(&self, sim: &SimulationOutput, emp: &Tensor) -> FitResult<Tensor>;
}
