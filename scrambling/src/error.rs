use derive_more::{Display, Error};

/// Precondition failures at the crate's public entry points.
///
/// All three variants are fail-fast contract checks: the computation itself
/// is deterministic and pure, so none of them is retryable, and none is
/// recovered from by clamping or coercion.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error)]
pub enum ScramblingError {
    /// Matrix or operator dimensions inconsistent with the declared qubit
    /// count (rows ≠ N or columns ≠ 2N).
    #[display("shape {rows}x{columns} does not match {qubit_count} qubits")]
    InvalidDimension {
        rows: usize,
        columns: usize,
        qubit_count: usize,
    },

    /// Bipartition cut outside `0..=qubit_count`.
    #[display("cut {cut} is outside 0..={qubit_count}")]
    InvalidCut { cut: usize, qubit_count: usize },

    /// An upstream Pauli operator carried a sign that is not exactly ±1.
    #[display("operator sign {sign} is not exactly +1 or -1")]
    MalformedOperator { sign: f64 },
}
