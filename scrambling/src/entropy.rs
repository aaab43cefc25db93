//! Operator entanglement entropy across a bipartition.

use crate::encode::StabilizerBinaryState;
use crate::error::ScramblingError;
use itertools::Itertools;

/// Entanglement entropy, in bits, of the last `cut` qubits of a stabilizer
/// state given by N binary generators.
///
/// Every generator is restricted to the cut: the trailing `cut` columns of
/// the X-part together with the trailing `cut` columns of the Z-part. The
/// entropy is the GF(2) rank of that restriction minus `cut`. For a valid
/// (independent, commuting) generator set the result is non-negative,
/// symmetric under complementing the cut, and zero at both trivial cuts; it
/// is returned as a plain signed difference so malformed generator sets
/// surface as negative values rather than being clamped away.
///
/// # Errors
///
/// [`ScramblingError::InvalidDimension`] if the matrix is not N×2N, and
/// [`ScramblingError::InvalidCut`] if `cut > N`.
pub fn entropy(state: &StabilizerBinaryState, cut: usize) -> Result<i64, ScramblingError> {
    let qubit_count = state.qubit_count();
    if state.matrix.column_count() != 2 * qubit_count || state.signs.len() != qubit_count {
        return Err(ScramblingError::InvalidDimension {
            rows: state.matrix.row_count(),
            columns: state.matrix.column_count(),
            qubit_count,
        });
    }
    if cut > qubit_count {
        return Err(ScramblingError::InvalidCut { cut, qubit_count });
    }

    let rows = (0..qubit_count).collect_vec();
    let columns = (qubit_count - cut..qubit_count)
        .chain(2 * qubit_count - cut..2 * qubit_count)
        .collect_vec();
    let restricted_rank = state.matrix.submatrix(&rows, &columns).rank();
    Ok(restricted_rank as i64 - cut as i64)
}
