use crate::error::ScramblingError;
use gf2mat::BitVec;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Overall sign of a Pauli operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Converts a simulator-reported real sign (+1 or −1) into a sign bit.
    ///
    /// Anything other than exactly ±1 (in particular the real part of an
    /// imaginary phase) is an invariant violation in the upstream simulator
    /// and is rejected as [`ScramblingError::MalformedOperator`].
    pub fn try_from_real(value: f64) -> Result<Self, ScramblingError> {
        if value == 1.0 {
            Ok(Self::Plus)
        } else if value == -1.0 {
            Ok(Self::Minus)
        } else {
            Err(ScramblingError::MalformedOperator { sign: value })
        }
    }

    #[must_use]
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Minus
        } else {
            Self::Plus
        }
    }

    /// The sign as a bit: 0 for "+", 1 for "−".
    #[must_use]
    pub fn bit(self) -> bool {
        self == Self::Minus
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self == Self::Minus
    }
}

/// One Pauli string over N qubits: an X-part and a Z-part bit vector plus a
/// sign. A set bit in both parts at the same site is a Y.
///
/// Instances are immutable; they are produced by a tableau's
/// [`z_output`](crate::tableau::Tableau::z_output) (or parsed in tests) and
/// consumed once by [`encode`](crate::encode::encode).
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PauliOperator {
    x_bits: BitVec,
    z_bits: BitVec,
    sign: Sign,
}

impl PauliOperator {
    /// Builds an operator from its symplectic halves.
    ///
    /// # Panics
    ///
    /// Panics if the two halves have different lengths.
    pub fn new(x_bits: BitVec, z_bits: BitVec, sign: Sign) -> Self {
        assert_eq!(x_bits.len(), z_bits.len(), "X and Z parts must have equal length");
        Self { x_bits, z_bits, sign }
    }

    pub fn identity(qubit_count: usize) -> Self {
        Self::new(BitVec::zeros(qubit_count), BitVec::zeros(qubit_count), Sign::Plus)
    }

    pub fn x(qubit_index: usize, qubit_count: usize) -> Self {
        let mut result = Self::identity(qubit_count);
        result.x_bits.set(qubit_index, true);
        result
    }

    pub fn y(qubit_index: usize, qubit_count: usize) -> Self {
        let mut result = Self::identity(qubit_count);
        result.x_bits.set(qubit_index, true);
        result.z_bits.set(qubit_index, true);
        result
    }

    pub fn z(qubit_index: usize, qubit_count: usize) -> Self {
        let mut result = Self::identity(qubit_count);
        result.z_bits.set(qubit_index, true);
        result
    }

    #[must_use]
    pub fn qubit_count(&self) -> usize {
        self.x_bits.len()
    }

    #[must_use]
    pub fn x_bits(&self) -> &BitVec {
        &self.x_bits
    }

    #[must_use]
    pub fn z_bits(&self) -> &BitVec {
        &self.z_bits
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of sites carrying a Y (both bits set).
    #[must_use]
    pub fn y_count(&self) -> usize {
        (0..self.qubit_count())
            .filter(|&qubit| self.x_bits.index(qubit) && self.z_bits.index(qubit))
            .count()
    }
}

impl fmt::Display for PauliOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign.is_negative() { '-' } else { '+' };
        let letters = (0..self.qubit_count())
            .map(|qubit| match (self.x_bits.index(qubit), self.z_bits.index(qubit)) {
                (false, false) => '_',
                (true, false) => 'X',
                (true, true) => 'Y',
                (false, true) => 'Z',
            })
            .join("");
        write!(formatter, "{sign}{letters}")
    }
}

/// Error for unparsable Pauli or operator strings.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct PauliStringParsingError;

impl FromStr for PauliOperator {
    type Err = PauliStringParsingError;

    /// Parses strings like `"+XZ_Y"` or `"-ZZ"`; `I` and `_` both denote the
    /// identity site, and the sign prefix is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, letters) = match s.strip_prefix(['+', '-']) {
            Some(rest) => (Sign::from_bit(s.starts_with('-')), rest),
            None => (Sign::Plus, s),
        };
        let mut x_bits = Vec::new();
        let mut z_bits = Vec::new();
        for letter in letters.chars() {
            let (x, z) = match letter {
                'I' | '_' => (false, false),
                'X' => (true, false),
                'Y' => (true, true),
                'Z' => (false, true),
                _ => return Err(PauliStringParsingError),
            };
            x_bits.push(x);
            z_bits.push(z);
        }
        Ok(Self::new(
            x_bits.into_iter().collect(),
            z_bits.into_iter().collect(),
            sign,
        ))
    }
}
