//! Dense linear algebra over GF(2).
//!
//! [`BitVec`] is a word-packed vector of bits; [`BitMatrix`] is a row-major
//! matrix of them. Addition is XOR, multiplication is AND, and the only
//! nontrivial algorithm is forward Gaussian elimination
//! ([`BitMatrix::echelonize`]), which underpins [`BitMatrix::rank`].

pub mod matrix;
pub mod vec;

pub use matrix::BitMatrix;
pub use vec::{BitVec, Word};
