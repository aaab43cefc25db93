//! Scrambling diagnostics for randomly-evolved stabilizer circuits.
//!
//! The crate measures two things about an evolving Clifford circuit:
//! operator entanglement entropy across a bipartition
//! ([`entropy::entropy`]) and an out-of-time-order correlator weight
//! ([`otoc::otoc_sample`]).
//!
//! Both reduce to binary symplectic algebra: the circuit's Pauli outputs are
//! encoded as an N×2N matrix over GF(2) with a per-row sign vector
//! ([`encode::encode`]), the matrix is brought to row echelon form while the
//! signs are propagated through the rowsum rule ([`reduce::reduce`]), and the
//! scalar diagnostics are read off ranks and signs of the reduced structure.
//!
//! The circuit itself is reached through the [`tableau::Tableau`] trait;
//! [`tableau::CliffordTableau`] is the built-in implementation.
//!
//! ```
//! use scrambling::steps::OperatorString;
//! use scrambling::tableau::{CliffordTableau, Tableau};
//! use scrambling::otoc::otoc_sample;
//!
//! let evolved = CliffordTableau::identity(1);
//! let perturbation: OperatorString = "X".parse().unwrap();
//! let sample = otoc_sample(&evolved, &perturbation.tableau()).unwrap();
//! assert_eq!(sample, 1.0);
//! ```

pub mod encode;
pub mod entropy;
pub mod error;
pub mod otoc;
pub mod pauli;
pub mod reduce;
pub mod rowsum;
pub mod steps;
pub mod tableau;

pub use encode::{encode, stabilizer_state_of, StabilizerBinaryState};
pub use entropy::entropy;
pub use error::ScramblingError;
pub use gf2mat::{BitMatrix, BitVec};
pub use otoc::otoc_sample;
pub use pauli::{PauliOperator, Sign};
pub use reduce::{reduce, ReductionResult};
pub use tableau::{CliffordTableau, Tableau};
