//! Functional-connectivity objectives.
//!
//! Both objectives score how well the correlation structure of a simulated
//! series reproduces an empirical one: build the node×node FC matrix of
//! the simulation, take the strictly lower triangle of both matrices,
//! correlate the two triangle sequences, and map that correlation `r`
//! through `-ln(0.5 + 0.5·r)`. A perfect match (r = 1) scores 0, an
//! uncorrelated pair scores ln 2, and the score grows without bound as the
//! structures anti-correlate.
//!
//! FC matrices are rebuilt on every call. The upstream parameters change
//! every optimization step, so there is nothing to cache.

use candle_core::{Device, Tensor};
use neurofit_core::fc::{fc_matrix, lower_triangle, pearson, tril_indices};
use neurofit_core::{validate, DevicePlacement, FitResult, SimulationOutput};

use crate::loss::Loss;

/// Negative log-likelihood mapping of a correlation coefficient.
///
/// `r` in [-1, 1] is shifted into (0, 1] and negated in log space. A
/// correlation of exactly -1 maps to +infinity.
fn correlation_nll(r: &Tensor) -> FitResult<Tensor> {
    Ok(r.affine(0.5, 0.5)?.log()?.neg()?)
}

/// FC objective between a simulated and an empirical time series.
///
/// Both arguments are node×time matrices with the same node count; the
/// window lengths may differ since each series is summarized into its own
/// FC matrix before comparison.
#[derive(Debug, Clone)]
pub struct FcLoss {
    sim_key: String,
}

impl FcLoss {
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

impl Loss for FcLoss {
    fn compute(&self, sim: &SimulationOutput, emp: &Tensor) -> FitResult<Tensor> {
        let sim_series = sim.require(&self.sim_key)?;
        let (sim_nodes, sim_samples) = validate::expect_matrix("simulated series", sim_series)?;
        let (emp_nodes, _) = validate::expect_matrix("empirical series", emp)?;
        validate::expect_same_nodes("simulated series", sim_nodes, "empirical series", emp_nodes)?;

        tracing::debug!(
            key = %self.sim_key,
            nodes = sim_nodes,
            samples = sim_samples,
            "computing FC correlation loss"
        );

        let sim_fc = fc_matrix(sim_series)?;
        let emp_fc = fc_matrix(emp)?;

        let indices = tril_indices(sim_nodes, sim_series.device())?;
        let sim_triangle = lower_triangle(&sim_fc, &indices)?;
        let emp_triangle = lower_triangle(&emp_fc, &indices)?;

        let r = pearson(&emp_triangle, &sim_triangle)?;
        correlation_nll(&r)
    }
}

/// FC objective against a connectivity matrix supplied directly.
///
/// Used when no empirical series is available, only its precomputed
/// node×node FC. The empirical matrix often lives on an accelerator, so
/// the triangle-selection indices derived from its shape are materialized
/// on the device configured at construction (host CPU by default) and the
/// empirical FC is never recomputed.
#[derive(Debug, Clone)]
pub struct FixedFcLoss {
    sim_key: String,
    device: Device,
}

impl FixedFcLoss {
    /// Build an objective with host-CPU placement.
    pub fn new(sim_key: impl Into<String>) -> Self {
        Self::with_device(sim_key, Device::Cpu)
    }

    /// Build an objective placing its intermediates on `device`.
    pub fn with_device(sim_key: impl Into<String>, device: Device) -> Self {
        Self {
            sim_key: sim_key.into(),
            device,
        }
    }

    /// Build an objective from a serializable placement value.
    pub fn with_placement(
        sim_key: impl Into<String>,
        placement: DevicePlacement,
    ) -> FitResult<Self> {
        Ok(Self::with_device(sim_key, placement.resolve()?))
    }

    /// The simulated variable this objective reads.
    pub fn sim_key(&self) -> &str {
        &self.sim_key
    }

    /// The device intermediates are materialized on.
    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl Loss for FixedFcLoss {
    fn compute(&self, sim: &SimulationOutput, emp: &Tensor) -> FitResult<Tensor> {
        let sim_series = sim.require(&self.sim_key)?;
        let (sim_nodes, sim_samples) = validate::expect_matrix("simulated series", sim_series)?;
        let emp_nodes = validate::expect_square("empirical FC", emp)?;
        validate::expect_same_nodes("simulated series", sim_nodes, "empirical FC", emp_nodes)?;

        tracing::debug!(
            key = %self.sim_key,
            nodes = sim_nodes,
            samples = sim_samples,
            "computing fixed-FC correlation loss"
        );

        let sim_fc = fc_matrix(sim_series)?;

        let indices = tril_indices(emp_nodes, &self.device)?;
        let emp_triangle = lower_triangle(emp, &indices)?;
        let sim_triangle = lower_triangle(&sim_fc, &indices)?;

        let r = pearson(&emp_triangle, &sim_triangle)?;
        correlation_nll(&r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::Device;
    use neurofit_core::FitError;

    fn series(data: Vec<f32>, nodes: usize, samples: usize) -> Tensor {
        Tensor::from_vec(data, (nodes, samples), &Device::Cpu).unwrap()
    }

    fn bundle(key: &str, t: Tensor) -> SimulationOutput {
        [(key, t)].into_iter().collect()
    }

    #[test]
    fn nll_maps_perfect_correlation_to_zero() {
        let r = Tensor::new(1.0f32, &Device::Cpu).unwrap();
        let loss = correlation_nll(&r).unwrap().to_scalar::<f32>().unwrap();
        assert!(loss.abs() < 1e-6);
    }

    #[test]
    fn nll_maps_zero_correlation_to_ln_two() {
        let r = Tensor::new(0.0f32, &Device::Cpu).unwrap();
        let loss = correlation_nll(&r).unwrap().to_scalar::<f32>().unwrap();
        assert!((loss - std::f32::consts::LN_2).abs() < 1e-6);
    }

    #[test]
    fn missing_key_fails_before_any_arithmetic() {
        let sim = bundle("bold", series(vec![0.0; 6], 2, 3));
        let emp = series(vec![0.0; 6], 2, 3);
        let err = FcLoss::new("eeg").compute(&sim, &emp).unwrap_err();
        assert!(matches!(err, FitError::MissingSimKey { .. }));
    }

    #[test]
    fn non_matrix_empirical_series_is_rejected() {
        let sim = bundle("bold", series(vec![0.1, 0.4, 0.2, 0.9, 0.5, 0.3], 2, 3));
        let emp = Tensor::from_vec(vec![0.0f32; 6], 6, &Device::Cpu).unwrap();
        let err = FcLoss::new("bold").compute(&sim, &emp).unwrap_err();
        assert!(matches!(err, FitError::NotAMatrix { name: "empirical series", .. }));
    }

    #[test]
    fn node_count_mismatch_is_rejected() {
        let sim = bundle("bold", series(vec![0.1; 12], 3, 4));
        let emp = series(vec![0.2; 8], 2, 4);
        let err = FcLoss::new("bold").compute(&sim, &emp).unwrap_err();
        assert!(matches!(
            err,
            FitError::NodeCountMismatch { left: 3, right: 2, .. }
        ));
    }

    #[test]
    fn fixed_variant_rejects_rectangular_target() {
        let sim = bundle("bold", series(vec![0.1; 12], 3, 4));
        let emp = series(vec![0.2; 6], 3, 2);
        let err = FixedFcLoss::new("bold").compute(&sim, &emp).unwrap_err();
        assert!(matches!(err, FitError::NotSquare { name: "empirical FC", .. }));
    }

    #[test]
    fn differing_window_lengths_are_accepted() {
        let sim = bundle(
            "bold",
            series(
                vec![
                    0.3, -1.2, 0.8, 1.1, //
                    -0.5, 0.2, 0.9, -0.7, //
                    1.4, -0.3, 0.6, -1.0,
                ],
                3,
                4,
            ),
        );
        let emp = series(
            vec![
                0.6, -0.9, 1.3, //
                0.4, -1.1, 0.7, //
                -0.8, 1.2, 0.1,
            ],
            3,
            3,
        );
        let loss = FcLoss::new("bold").compute(&sim, &emp).unwrap();
        assert_eq!(loss.dims(), &[] as &[usize]);
    }
}
