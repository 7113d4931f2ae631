//! Argument-contract checks shared by the loss implementations.
//!
//! Every check runs before any tensor arithmetic and names the offending
//! argument together with the expected and actual shape. A rejected call
//! is an integration bug in the surrounding pipeline, not something to
//! retry.

use candle_core::Tensor;

use crate::error::{FitError, FitResult};

/// Require a rank-2 node×time matrix; returns `(nodes, samples)`.
pub fn expect_matrix(name: &'static str, tensor: &Tensor) -> FitResult<(usize, usize)> {
    match tensor.dims() {
        [nodes, samples] => Ok((*nodes, *samples)),
        shape => Err(FitError::NotAMatrix {
            name,
            shape: shape.to_vec(),
        }),
    }
}

/// Require a square node×node matrix; returns the node count.
pub fn expect_square(name: &'static str, tensor: &Tensor) -> FitResult<usize> {
    match tensor.dims() {
        [rows, cols] if rows == cols => Ok(*rows),
        shape => Err(FitError::NotSquare {
            name,
            shape: shape.to_vec(),
        }),
    }
}

/// Require two arguments to agree on node count.
pub fn expect_same_nodes(
    left_name: &'static str,
    left: usize,
    right_name: &'static str,
    right: usize,
) -> FitResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(FitError::NodeCountMismatch {
            left_name,
            left,
            right_name,
            right,
        })
    }
}

/// Require two series to agree on sample count.
pub fn expect_same_samples(
    left_name: &'static str,
    left: usize,
    right_name: &'static str,
    right: usize,
) -> FitResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(FitError::SampleCountMismatch {
            left_name,
            left,
            right_name,
            right,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::Device;

    #[test]
    fn matrix_accepts_rank_two() {
        let t = Tensor::zeros((3, 10), candle_core::DType::F32, &Device::Cpu).unwrap();
        assert_eq!(expect_matrix("signal", &t).unwrap(), (3, 10));
    }

    #[test]
    fn matrix_rejects_vector() {
        let t = Tensor::zeros(5, candle_core::DType::F32, &Device::Cpu).unwrap();
        let err = expect_matrix("signal", &t).unwrap_err();
        match err {
            FitError::NotAMatrix { name, shape } => {
                assert_eq!(name, "signal");
                assert_eq!(shape, vec![5]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn square_rejects_rectangle() {
        let t = Tensor::zeros((3, 4), candle_core::DType::F32, &Device::Cpu).unwrap();
        assert!(matches!(
            expect_square("connectivity", &t),
            Err(FitError::NotSquare { .. })
        ));
    }

    #[test]
    fn node_mismatch_carries_both_counts() {
        let err = expect_same_nodes("simulated", 3, "empirical", 5).unwrap_err();
        match err {
            FitError::NodeCountMismatch {
                left, right, ..
            } => {
                assert_eq!(left, 3);
                assert_eq!(right, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
