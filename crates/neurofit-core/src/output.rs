//! Simulation output bundle.
//!
//! A simulator run produces several named state and output trajectories
//! (membrane potential, synaptic gating, a BOLD readout). A loss only ever
//! compares one of them against ground truth, selected by key, so the
//! bundle is a thin named map with a checked lookup that reports what WAS
//! available when the key is wrong.

use std::collections::HashMap;

use candle_core::Tensor;

use crate::error::{FitError, FitResult};

/// Named node×time trajectories produced by one simulation window.
///
/// Rebuilt every optimization step; the tensors inside stay attached to the
/// autograd graph of the parameters that generated them.
#[derive(Debug, Clone, Default)]
pub struct SimulationOutput {
    outputs: HashMap<String, Tensor>,
}

impl SimulationOutput {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trajectory under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, series: Tensor) {
        self.outputs.insert(key.into(), series);
    }

    /// Look up a trajectory, `None` if absent.
    pub fn get(&self, key: &str) -> Option<&Tensor> {
        self.outputs.get(key)
    }

    /// Look up a trajectory, erroring with the set of available keys.
    pub fn require(&self, key: &str) -> FitResult<&Tensor> {
        self.outputs.get(key).ok_or_else(|| {
            let mut available: Vec<String> = self.outputs.keys().cloned().collect();
            available.sort();
            FitError::MissingSimKey {
                key: key.to_string(),
                available,
            }
        })
    }

    /// Iterate over the stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    /// Number of stored trajectories.
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Tensor)> for SimulationOutput {
    fn from_iter<I: IntoIterator<Item = (K, Tensor)>>(iter: I) -> Self {
        Self {
            outputs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
