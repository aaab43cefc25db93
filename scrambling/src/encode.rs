//! Binary symplectic encoding of a set of Pauli operators.

use crate::error::ScramblingError;
use crate::pauli::PauliOperator;
use crate::tableau::Tableau;
use gf2mat::{BitMatrix, BitVec};

/// N Pauli generators packed as an N×2N GF(2) matrix plus a sign per row.
///
/// Row `j` holds the X-part of generator `j` in columns `0..N` and its
/// Z-part in columns `N..2N`.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StabilizerBinaryState {
    pub matrix: BitMatrix,
    pub signs: Vec<bool>,
}

impl StabilizerBinaryState {
    #[must_use]
    pub fn qubit_count(&self) -> usize {
        self.matrix.row_count()
    }
}

/// Packs one generator per operator, in order.
///
/// # Errors
///
/// [`ScramblingError::InvalidDimension`] unless exactly `qubit_count`
/// operators are given and each acts on `qubit_count` qubits.
pub fn encode(
    operators: &[PauliOperator],
    qubit_count: usize,
) -> Result<StabilizerBinaryState, ScramblingError> {
    if operators.len() != qubit_count
        || operators.iter().any(|operator| operator.qubit_count() != qubit_count)
    {
        return Err(ScramblingError::InvalidDimension {
            rows: operators.len(),
            columns: operators
                .iter()
                .map(|operator| 2 * operator.qubit_count())
                .max()
                .unwrap_or(0),
            qubit_count,
        });
    }

    let rows = operators.iter().map(|operator| {
        operator
            .x_bits()
            .iter()
            .chain(operator.z_bits().iter())
            .collect::<BitVec>()
    });
    let matrix = BitMatrix::from_rows(rows.collect(), 2 * qubit_count);
    let signs = operators.iter().map(|operator| operator.sign().is_negative()).collect();
    Ok(StabilizerBinaryState { matrix, signs })
}

/// Encodes the images of all N computational-basis Z generators under the
/// given circuit.
///
/// # Errors
///
/// Propagates any [`ScramblingError`] from the tableau's outputs.
pub fn stabilizer_state_of<T: Tableau>(tableau: &T) -> Result<StabilizerBinaryState, ScramblingError> {
    let qubit_count = tableau.qubit_count();
    let operators = (0..qubit_count)
        .map(|qubit| tableau.z_output(qubit))
        .collect::<Result<Vec<_>, _>>()?;
    encode(&operators, qubit_count)
}
