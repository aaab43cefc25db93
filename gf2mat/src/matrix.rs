use crate::BitVec;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// A 2D matrix of bits, stored as word-packed rows.
///
/// The matrix supports the row operations needed for linear algebra over
/// GF(2): row swap, row XOR, forward Gaussian elimination and rank.
///
/// # Example
///
/// ```
/// use gf2mat::BitMatrix;
///
/// let m: BitMatrix = "110\n011\n101".parse().unwrap();
/// assert_eq!(m.shape(), (3, 3));
/// assert_eq!(m.rank(), 2); // the three rows sum to zero
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<BitVec>,
    column_count: usize,
}

impl BitMatrix {
    /// Creates a matrix with all bits set to zero.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| BitVec::zeros(columns)).collect(),
            column_count: columns,
        }
    }

    /// Creates an identity matrix of the given dimension.
    pub fn identity(dimension: usize) -> Self {
        let mut result = Self::zeros(dimension, dimension);
        for index in 0..dimension {
            result.set((index, index), true);
        }
        result
    }

    /// Creates a matrix from owned rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from `column_count`.
    pub fn from_rows(rows: Vec<BitVec>, column_count: usize) -> Self {
        assert!(
            rows.iter().all(|row| row.len() == column_count),
            "row length does not match column count"
        );
        Self { rows, column_count }
    }

    /// Creates a matrix from nested iterators of boolean values.
    pub fn from_iter<Row, Rows>(iter: Rows, column_count: usize) -> Self
    where
        Row: IntoIterator<Item = bool>,
        Rows: IntoIterator<Item = Row>,
    {
        let rows = iter.into_iter().map(|row| row.into_iter().collect()).collect();
        Self::from_rows(rows, column_count)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Returns the matrix dimensions as `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.column_count)
    }

    #[must_use]
    pub fn get(&self, index: (usize, usize)) -> bool {
        self.rows[index.0].index(index.1)
    }

    pub fn set(&mut self, index: (usize, usize), to: bool) {
        self.rows[index.0].set(index.1, to);
    }

    #[must_use]
    pub fn row(&self, index: usize) -> &BitVec {
        &self.rows[index]
    }

    #[must_use]
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &BitVec> {
        self.rows.iter()
    }

    pub fn swap_rows(&mut self, left_row_index: usize, right_row_index: usize) {
        self.rows.swap(left_row_index, right_row_index);
    }

    /// XORs row `from_index` into row `to_index` (addition in GF(2)).
    ///
    /// # Panics
    ///
    /// Panics if the two indices are equal.
    pub fn add_into_row(&mut self, to_index: usize, from_index: usize) {
        assert_ne!(to_index, from_index, "cannot add a row into itself");
        let (to_row, from_row) = if to_index < from_index {
            let (left, right) = self.rows.split_at_mut(from_index);
            (&mut left[to_index], &right[0])
        } else {
            let (left, right) = self.rows.split_at_mut(to_index);
            (&mut right[0], &left[from_index])
        };
        to_row.xor_assign(from_row);
    }

    /// Extracts a submatrix by selecting specific rows and columns.
    pub fn submatrix(&self, rows: &[usize], columns: &[usize]) -> Self {
        Self::from_iter(
            rows.iter()
                .map(|&row| columns.iter().map(|&column| self.get((row, column))).collect_vec()),
            columns.len(),
        )
    }

    /// Reduces the matrix to row echelon form in place.
    ///
    /// Forward elimination only, no back-substitution: for each column the
    /// first row at or below the working position with a set bit becomes the
    /// pivot, is swapped up, and is XORed into every later row with a set bit
    /// in that column. Returns the pivot column indices in ascending order.
    pub fn echelonize(&mut self) -> Vec<usize> {
        let (row_count, column_count) = self.shape();
        let mut pivot_columns = Vec::new();
        let mut current_row = 0;
        for column in 0..column_count {
            if current_row == row_count {
                break;
            }
            let Some(pivot_row) = (current_row..row_count).find(|&row| self.get((row, column))) else {
                continue;
            };
            self.swap_rows(current_row, pivot_row);
            for row in current_row + 1..row_count {
                if self.get((row, column)) {
                    self.add_into_row(row, current_row);
                }
            }
            pivot_columns.push(column);
            current_row += 1;
        }
        pivot_columns
    }

    /// Computes the rank of the matrix over GF(2).
    #[must_use]
    pub fn rank(&self) -> usize {
        self.clone().echelonize().len()
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.rows.iter().join("\n"))
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "BitMatrix(shape={:?},value=\n{self})", self.shape())
    }
}

impl FromStr for BitMatrix {
    type Err = usize;

    /// Parses newline-separated rows of `0`/`1` characters; `Err` holds the
    /// byte position of the first offending character. All rows must have the
    /// same length as the first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<BitVec> = Vec::new();
        let mut offset = 0;
        for line in s.lines() {
            let row: BitVec = line.parse().map_err(|position: usize| offset + position)?;
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(offset);
                }
            }
            offset += line.len() + 1;
            rows.push(row);
        }
        let column_count = rows.first().map_or(0, BitVec::len);
        Ok(Self::from_rows(rows, column_count))
    }
}
