//! Out-of-time-order correlator weight of an evolved perturbation.

use crate::encode::stabilizer_state_of;
use crate::error::ScramblingError;
use crate::reduce::reduce;
use crate::tableau::Tableau;
use itertools::Itertools;

/// Squared overlap between the time-evolved perturbation and the unevolved
/// Z generators.
///
/// The transported perturbation `T = U⁻¹ · V · U` (evolution `U` applied
/// first) is itself a Clifford circuit; its conjugated Z generators are
/// encoded and reduced, and the sample is read off the reduced form:
///
/// * `r` is the rank of the X-part (first N columns), the number of
///   generators `T` fails to preserve up to phase;
/// * if any remaining row carries a negative sign the overlap vanishes
///   exactly and the sample is `0.0`;
/// * otherwise the sample is `2^(-r/2)`.
///
/// The result is always in `[0, 1]`, and `1.0` exactly when `T` fixes every
/// Z generator.
///
/// # Errors
///
/// [`ScramblingError::InvalidDimension`] when the two circuits act on
/// different qubit counts; otherwise whatever the tableau's outputs report.
pub fn otoc_sample<T: Tableau>(evolved: &T, perturbation: &T) -> Result<f64, ScramblingError> {
    let qubit_count = evolved.qubit_count();
    if perturbation.qubit_count() != qubit_count {
        return Err(ScramblingError::InvalidDimension {
            rows: perturbation.qubit_count(),
            columns: 2 * perturbation.qubit_count(),
            qubit_count,
        });
    }

    let transported = evolved.inverse().compose(perturbation).compose(evolved);
    let state = stabilizer_state_of(&transported)?;
    let reduced = reduce(state.matrix, state.signs, qubit_count)?;

    let rows = (0..qubit_count).collect_vec();
    let x_columns = (0..qubit_count).collect_vec();
    let x_rank = reduced.matrix.submatrix(&rows, &x_columns).rank();

    if reduced.signs[x_rank..].iter().any(|&negative| negative) {
        return Ok(0.0);
    }
    Ok((-0.5 * x_rank as f64).exp2())
}
