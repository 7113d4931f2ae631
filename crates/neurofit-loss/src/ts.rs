//! Pointwise time-series objective.

use candle_core::Tensor;
use neurofit_core::{validate, FitResult, SimulationOutput};

use crate::loss::Loss;

/// Sum of squared differences between the keyed simulated series and an
/// equal-shaped empirical series.
///
/// Unlike the FC objectives this compares sample by sample, so the two
/// windows must have the same length as well as the same node count.
#[derive(Debug, Clone)]
pub struct SquaredErrorLoss {
    sim_key: String,
}

impl SquaredErrorLoss {
    /// Build an objective reading the simulated variable named `sim_key`.
    pub fn new(sim_key: impl Into<String>) -> Self {
        Self {
            sim_key: sim_key.into(),
        }
    }

    /// The simulated variable this objective reads.
    pub fn sim_key(&self) -> &str {
        &self.sim_key
    }
}

impl Loss for SquaredErrorLoss {
    fn compute(&self, sim: &SimulationOutput, emp: &Tensor) -> FitResult<Tensor> {
        let sim_series = sim.require(&self.sim_key)?;
        let (sim_nodes, sim_samples) = validate::expect_matrix("simulated series", sim_series)?;
        let (emp_nodes, emp_samples) = validate::expect_matrix("empirical series", emp)?;
        validate::expect_same_nodes("simulated series", sim_nodes, "empirical series", emp_nodes)?;
        validate::expect_same_samples(
            "simulated series",
            sim_samples,
            "empirical series",
            emp_samples,
        )?;

        tracing::debug!(
            key = %self.sim_key,
            nodes = sim_nodes,
            samples = sim_samples,
            "computing squared-error loss"
        );

        Ok((sim_series - emp)?.sqr()?.sum_all()?)
    }
}
