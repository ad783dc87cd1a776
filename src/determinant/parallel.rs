use super::arithmetic::cofactor_term;
use super::{OverflowPolicy, determinant_with};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::parallel::{ProgressFn, WorkerPool};

/// One top-level branch of the expansion: a row of the input together with
/// its own copy of the minor
struct Branch {
    row: usize,
    entry: i64,
    minor: Matrix,
}

/// Determinant with the outermost row expansion fanned out over `pool`,
/// using checked arithmetic
///
/// Each row becomes one task computing `sign(row) * a[row][0] * det(minor)`
/// sequentially; the driver waits for every task and sums the results. The
/// value always equals [`determinant`](super::determinant) on the same
/// input. A failing task aborts the whole computation.
pub fn determinant_parallel(a: &Matrix, pool: &WorkerPool) -> Result<i64> {
    determinant_parallel_with(a, pool, OverflowPolicy::Checked, None)
}

/// [`determinant_parallel`] with an explicit overflow policy and an optional
/// progress callback invoked once per finished row
pub fn determinant_parallel_with(
    a: &Matrix,
    pool: &WorkerPool,
    policy: OverflowPolicy,
    progress: Option<&ProgressFn<'_>>,
) -> Result<i64> {
    let n = a.dimension();
    if n == 1 {
        return Ok(a.get(0, 0));
    }

    let branches: Vec<Branch> = (0..n)
        .map(|row| Branch {
            row,
            entry: a.get(row, 0),
            minor: a.minor(row),
        })
        .collect();

    tracing::debug!(
        "Expanding {}x{} matrix across {} workers",
        n,
        n,
        pool.workers()
    );

    let terms = pool.execute(
        branches,
        |branch, worker_id| {
            let minor_determinant = determinant_with(&branch.minor, policy)?;
            let term = cofactor_term(branch.row, branch.entry, minor_determinant);
            tracing::trace!("Row {} contributed {} [worker-{}]", branch.row, term, worker_id);
            Ok(term)
        },
        progress,
    )?;

    let sum = terms
        .into_iter()
        .try_fold(0_i128, |sum, term| policy.add(sum, term, n))?;
    policy.finish(sum, n)
}
