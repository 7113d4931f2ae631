//! Weighted combination of objectives.

use candle_core::Tensor;
use neurofit_core::{FitError, FitResult, SimulationOutput};

use crate::loss::Loss;

/// Weighted sum of component objectives over one simulation bundle and
/// one empirical target.
///
/// Typical use is blending a connectivity objective with a pointwise one,
/// each reading its own simulated variable. All components receive the
/// same `emp` tensor, so only combine objectives that agree on what the
/// target is.
#[derive(Default)]
pub struct CompositeLoss {
    terms: Vec<(f64, Box<dyn Loss>)>,
}

impl CompositeLoss {
    /// Build an empty combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component with the given weight.
    pub fn with_term(mut self, weight: f64, loss: impl Loss + 'static) -> Self {
        self.terms.push((weight, Box::new(loss)));
        self
    }

    /// Number of component terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no terms were added.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Loss for CompositeLoss {
    fn compute(&self, sim: &SimulationOutput, emp: &Tensor) -> FitResult<Tensor> {
        let mut terms = self.terms.iter();
        let (first_weight, first_loss) = terms.next().ok_or(FitError::EmptyComposite)?;

        let mut total = (first_loss.compute(sim, emp)? * *first_weight)?;
        for (weight, loss) in terms {
            total = (total + (loss.compute(sim, emp)? * *weight)?)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ts::SquaredErrorLoss;
    use candle_core::Device;

    fn series(data: Vec<f32>) -> Tensor {
        Tensor::from_vec(data, (2, 2), &Device::Cpu).unwrap()
    }

    #[test]
    fn empty_composite_is_rejected() {
        let sim: SimulationOutput = [("states", series(vec![0.0; 4]))].into_iter().collect();
        let emp = series(vec![0.0; 4]);
        let err = CompositeLoss::new().compute(&sim, &emp).unwrap_err();
        assert!(matches!(err, FitError::EmptyComposite));
    }

    #[test]
    fn weights_scale_and_add() {
        let sim: SimulationOutput = [("states", series(vec![1.0, 0.0, 0.0, 0.0]))]
            .into_iter()
            .collect();
        let emp = series(vec![0.0; 4]);

        // Single squared-error term is 1.0, so 0.25x + 0.5x of it is 0.75.
        let combined = CompositeLoss::new()
            .with_term(0.25, SquaredErrorLoss::new("states"))
            .with_term(0.5, SquaredErrorLoss::new("states"));
        let loss = combined
            .compute(&sim, &emp)
            .unwrap()
            .to_scalar::<f32>()
            .unwrap();
        assert!((loss - 0.75).abs() < 1e-6);
    }
}
