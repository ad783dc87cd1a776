use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How 64-bit overflow during cofactor expansion is handled
///
/// Terms and running sums of one expansion level are kept in `i128`; only
/// the level's final value has to fit in `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with [`Error::Overflow`] when a determinant does not fit in `i64`
    #[default]
    Checked,
    /// Wrap around in two's complement, like a plain `i64` accumulator
    Wrapping,
}

impl OverflowPolicy {
    pub(crate) fn add(self, accumulator: i128, term: i128, dimension: usize) -> Result<i128> {
        match self {
            OverflowPolicy::Checked => accumulator
                .checked_add(term)
                .ok_or(Error::Overflow { dimension }),
            OverflowPolicy::Wrapping => Ok(accumulator.wrapping_add(term)),
        }
    }

    /// Narrow a level's sum back to `i64`
    pub(crate) fn finish(self, sum: i128, dimension: usize) -> Result<i64> {
        match self {
            OverflowPolicy::Checked => {
                i64::try_from(sum).map_err(|_| Error::Overflow { dimension })
            }
            // Truncation keeps the value modulo 2^64, same as i64 wrapping ops
            OverflowPolicy::Wrapping => Ok(sum as i64),
        }
    }
}

/// `sign(row) * entry * minor_determinant`, where the sign is `+1` for even
/// rows and `-1` for odd rows
///
/// Exact: the product of two `i64` values always fits in `i128`.
pub(crate) fn cofactor_term(row: usize, entry: i64, minor_determinant: i64) -> i128 {
    let product = i128::from(entry) * i128::from(minor_determinant);
    if row % 2 == 1 { -product } else { product }
}
