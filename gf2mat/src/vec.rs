use std::fmt;
use std::str::FromStr;

/// Storage unit for packed bits.
pub type Word = u64;

const WORD_BITS: usize = Word::BITS as usize;

/// A dynamically-sized vector of bits with word-packed storage.
///
/// Bits beyond the logical length are kept zero, so [`weight`](BitVec::weight)
/// and equality work directly on the underlying words.
///
/// # Example
///
/// ```
/// use gf2mat::BitVec;
///
/// let mut v: BitVec = [true, false, true].into_iter().collect();
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.weight(), 2);
/// v.set(1, true);
/// assert!(v.index(1));
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    words: Vec<Word>,
    bit_count: usize,
}

impl BitVec {
    /// Creates a vector of `bit_count` zero bits.
    pub fn zeros(bit_count: usize) -> Self {
        Self {
            words: vec![0; bit_count.div_ceil(WORD_BITS)],
            bit_count,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bit_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn index(&self, index: usize) -> bool {
        assert!(index < self.bit_count, "bit index {index} out of range");
        self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 != 0
    }

    /// Sets the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, to: bool) {
        assert!(index < self.bit_count, "bit index {index} out of range");
        let mask = 1 << (index % WORD_BITS);
        if to {
            self.words[index / WORD_BITS] |= mask;
        } else {
            self.words[index / WORD_BITS] &= !mask;
        }
    }

    /// Number of set bits.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// XORs `other` into `self`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn xor_assign(&mut self, other: &Self) {
        assert_eq!(self.bit_count, other.bit_count, "length mismatch in xor_assign");
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word ^= other_word;
        }
    }

    /// Parity of the bitwise AND with `other` (the GF(2) inner product).
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn dot(&self, other: &Self) -> bool {
        assert_eq!(self.bit_count, other.bit_count, "length mismatch in dot");
        self.words
            .iter()
            .zip(&other.words)
            .map(|(left, right)| (left & right).count_ones())
            .sum::<u32>()
            % 2
            != 0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |index| self.index(index))
    }

    fn push(&mut self, bit: bool) {
        if self.bit_count % WORD_BITS == 0 {
            self.words.push(0);
        }
        self.bit_count += 1;
        if bit {
            self.set(self.bit_count - 1, true);
        }
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<Bits: IntoIterator<Item = bool>>(iter: Bits) -> Self {
        let mut result = Self::zeros(0);
        for bit in iter {
            result.push(bit);
        }
        result
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(formatter, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVec {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "BitVec({self})")
    }
}

impl FromStr for BitVec {
    type Err = usize;

    /// Parses a string of `0`/`1` characters; `Err` holds the position of the
    /// first offending character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, char)| match char {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(position),
            })
            .collect()
    }
}
