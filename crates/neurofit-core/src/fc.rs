//! Functional-connectivity primitives.
//!
//! A recording or simulated trajectory is summarized into a node×node
//! Pearson correlation matrix (the functional connectivity, FC), and two
//! FC matrices are compared through the correlation of their strictly
//! lower-triangular entries. Everything here is expressed as tensor
//! operations so gradients flow from the comparison scalar back into the
//! signal that produced the FC.
//!
//! # Degenerate input
//!
//! A node with zero temporal variance makes its diagonal covariance entry
//! zero and the normalization divides by zero; the NaN is propagated, not
//! caught. Callers that need to react to a flat signal should check the
//! final loss for finiteness.

use candle_core::{Device, Tensor};

use crate::error::FitResult;
use crate::validate::expect_matrix;

/// Pearson correlation matrix of a node×time signal.
///
/// Each row is demeaned over time, the covariance `C = X·Xᵀ` of the
/// demeaned signal is formed, and `C` is normalized by the outer product
/// of the square roots of its diagonal. The result is symmetric with a
/// unit diagonal, up to floating-point error.
pub fn fc_matrix(signal: &Tensor) -> FitResult<Tensor> {
    let (nodes, _samples) = expect_matrix("signal", signal)?;

    let row_means = signal.mean_keepdim(1)?;
    let centered = signal.broadcast_sub(&row_means)?;
    let cov = centered.matmul(&centered.t()?)?;

    let std = diagonal(&cov)?.sqrt()?;
    let fc = cov
        .broadcast_div(&std.reshape((nodes, 1))?)?
        .broadcast_div(&std.reshape((1, nodes))?)?;
    Ok(fc)
}

/// Flat indices of the strictly lower triangle of an `nodes`×`nodes`
/// matrix, row-major, materialized on `device`.
///
/// Row-major traversal (row 1 first) gives element-wise corresponding
/// sequences for any two matrices of the same shape, which is what makes
/// the triangles of two FC matrices comparable entry by entry.
pub fn tril_indices(nodes: usize, device: &Device) -> FitResult<Tensor> {
    let mut indices = Vec::with_capacity(nodes.saturating_sub(1) * nodes / 2);
    for row in 1..nodes {
        for col in 0..row {
            indices.push((row * nodes + col) as u32);
        }
    }
    let count = indices.len();
    Ok(Tensor::from_vec(indices, count, device)?)
}

/// Select the entries at `indices` from a flattened square matrix.
///
/// The index tensor decides the device the selection runs on, so a caller
/// holding an externally supplied matrix builds the indices on that
/// matrix's device and both selections stay in one memory space.
pub fn lower_triangle(matrix: &Tensor, indices: &Tensor) -> FitResult<Tensor> {
    Ok(matrix.flatten_all()?.index_select(indices, 0)?)
}

/// Pearson correlation between two equal-length 1-D tensors.
///
/// Both sequences are demeaned independently; a constant sequence makes
/// the denominator zero and the NaN propagates.
pub fn pearson(a: &Tensor, b: &Tensor) -> FitResult<Tensor> {
    let a_centered = a.broadcast_sub(&a.mean_all()?)?;
    let b_centered = b.broadcast_sub(&b.mean_all()?)?;

    let numerator = (&a_centered * &b_centered)?.sum_all()?;
    let a_norm = (&a_centered * &a_centered)?.sum_all()?.sqrt()?;
    let b_norm = (&b_centered * &b_centered)?.sum_all()?.sqrt()?;
    Ok((numerator / (a_norm * b_norm)?)?)
}

fn diagonal(matrix: &Tensor) -> FitResult<Tensor> {
    let (n, _) = matrix.dims2()?;
    let indices: Vec<u32> = (0..n as u32).map(|i| i * (n as u32 + 1)).collect();
    let indices = Tensor::from_vec(indices, n, matrix.device())?;
    Ok(matrix.flatten_all()?.index_select(&indices, 0)?)
}
