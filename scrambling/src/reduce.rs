//! Sign-tracking Gaussian elimination over GF(2).

use crate::error::ScramblingError;
use crate::rowsum;
use gf2mat::BitMatrix;

/// Echelonized stabilizer matrix together with its propagated signs.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReductionResult {
    pub matrix: BitMatrix,
    pub signs: Vec<bool>,
    pub rank: usize,
}

/// Brings an N×2N stabilizer matrix to row echelon form, carrying the sign
/// vector along through the rowsum rule.
///
/// Row operations are forward-only: a pivot row is only ever added into rows
/// below it, and pivot columns are scanned left to right, so the result is
/// stable under repeated application. Every row swap swaps the matching sign
/// entries, and every row addition reruns [`rowsum::combine`] on the updated
/// row, so `signs[j]` always belongs to `matrix.row(j)`.
///
/// # Errors
///
/// [`ScramblingError::InvalidDimension`] if the matrix is not N×2N for the
/// given qubit count or the sign vector does not have one entry per row.
pub fn reduce(
    mut matrix: BitMatrix,
    mut signs: Vec<bool>,
    qubit_count: usize,
) -> Result<ReductionResult, ScramblingError> {
    if matrix.row_count() != qubit_count
        || matrix.column_count() != 2 * qubit_count
        || signs.len() != qubit_count
    {
        return Err(ScramblingError::InvalidDimension {
            rows: matrix.row_count(),
            columns: matrix.column_count(),
            qubit_count,
        });
    }

    let mut current_row = 0;
    for column in 0..2 * qubit_count {
        if current_row == qubit_count {
            break;
        }
        let Some(pivot) = (current_row..qubit_count).find(|&row| matrix.get((row, column)))
        else {
            continue;
        };
        matrix.swap_rows(current_row, pivot);
        signs.swap(current_row, pivot);
        for row in current_row + 1..qubit_count {
            if matrix.get((row, column)) {
                matrix.add_into_row(row, current_row);
                signs[row] = rowsum::combine(
                    matrix.row(row),
                    matrix.row(current_row),
                    signs[row],
                    signs[current_row],
                    qubit_count,
                );
            }
        }
        current_row += 1;
    }

    Ok(ReductionResult { matrix, signs, rank: current_row })
}
