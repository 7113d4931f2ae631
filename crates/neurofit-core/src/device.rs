//! Compute-device placement.
//!
//! Losses that receive externally materialized tensors (a precomputed
//! connectivity matrix, typically loaded on an accelerator) need to build
//! their own intermediates in the same memory space, or the first mixed
//! operation fails. [`DevicePlacement`] is the serializable configuration
//! value a pipeline threads through to pick that space; it resolves to a
//! concrete [`candle_core::Device`] once, at loss construction time.

use candle_core::Device;
use serde::{Deserialize, Serialize};

use crate::error::FitResult;

/// Where a loss materializes the tensors it creates itself.
///
/// Defaults to host CPU. Resolving a CUDA placement on a build without CUDA
/// support fails fast with the runtime's own error rather than silently
/// falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DevicePlacement {
    /// Host CPU placement.
    #[default]
    Cpu,
    /// CUDA device by ordinal.
    Cuda { index: usize },
}

impl DevicePlacement {
    /// Resolve the placement to a concrete device handle.
    pub fn resolve(&self) -> FitResult<Device> {
        let device = match self {
            DevicePlacement::Cpu => Device::Cpu,
            DevicePlacement::Cuda { index } => Device::new_cuda(*index)?,
        };
        tracing::debug!(placement = ?self, "resolved compute device");
        Ok(device)
    }
}
