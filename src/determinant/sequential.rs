use super::OverflowPolicy;
use super::arithmetic::cofactor_term;
use crate::error::Result;
use crate::matrix::Matrix;

/// Determinant by cofactor expansion along the first column, on the calling
/// thread, with checked arithmetic
///
/// Runs in O(n!) time, which limits it to small matrices.
pub fn determinant(a: &Matrix) -> Result<i64> {
    determinant_with(a, OverflowPolicy::Checked)
}

/// [`determinant`] with an explicit overflow policy
pub fn determinant_with(a: &Matrix, policy: OverflowPolicy) -> Result<i64> {
    let n = a.dimension();
    if n == 1 {
        return Ok(a.get(0, 0));
    }

    let mut sum = 0_i128;
    for row in 0..n {
        let minor_determinant = determinant_with(&a.minor(row), policy)?;
        sum = policy.add(sum, cofactor_term(row, a.get(row, 0), minor_determinant), n)?;
    }

    policy.finish(sum, n)
}
