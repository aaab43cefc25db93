//! Symplectic tableau representation of Clifford circuits.

use crate::error::ScramblingError;
use crate::pauli::{PauliOperator, Sign};
use crate::rowsum::phase_contribution;
use gf2mat::BitVec;
use rand::Rng;

/// A Clifford circuit viewed through its action on Pauli operators.
///
/// Implementations only need to expose conjugated Z generators plus
/// composition and inversion; the entropy and OTOC extractors never look
/// inside the circuit itself.
pub trait Tableau: Sized {
    fn qubit_count(&self) -> usize;

    /// The circuit applying `rhs` first and then `self`.
    fn compose(&self, rhs: &Self) -> Self;

    /// The inverse circuit.
    fn inverse(&self) -> Self;

    /// The image of the generator `Z_qubit` under conjugation by the circuit.
    ///
    /// # Errors
    ///
    /// Implementations backed by an external simulator report a
    /// [`ScramblingError::MalformedOperator`] when the simulator hands back a
    /// non-real sign.
    fn z_output(&self, qubit: usize) -> Result<PauliOperator, ScramblingError>;
}

/// Image of one generator under conjugation: a Pauli string with a sign.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorImage {
    pub x_bits: BitVec,
    pub z_bits: BitVec,
    pub negated: bool,
}

impl GeneratorImage {
    fn basis_x(qubit: usize, qubit_count: usize) -> Self {
        let mut x_bits = BitVec::zeros(qubit_count);
        x_bits.set(qubit, true);
        Self { x_bits, z_bits: BitVec::zeros(qubit_count), negated: false }
    }

    fn basis_z(qubit: usize, qubit_count: usize) -> Self {
        let mut z_bits = BitVec::zeros(qubit_count);
        z_bits.set(qubit, true);
        Self { x_bits: BitVec::zeros(qubit_count), z_bits, negated: false }
    }
}

/// Aaronson-Gottesman style tableau: the images of all `X_k` and `Z_k`
/// generators under conjugation by the circuit.
///
/// Gates are applied by left multiplication (`left_mul_*`), updating every
/// stored image in place. All stored images are Hermitian, so each carries a
/// plain sign bit rather than a mod-4 phase.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliffordTableau {
    qubit_count: usize,
    x_images: Vec<GeneratorImage>,
    z_images: Vec<GeneratorImage>,
}

impl CliffordTableau {
    pub fn identity(qubit_count: usize) -> Self {
        Self {
            qubit_count,
            x_images: (0..qubit_count)
                .map(|qubit| GeneratorImage::basis_x(qubit, qubit_count))
                .collect(),
            z_images: (0..qubit_count)
                .map(|qubit| GeneratorImage::basis_z(qubit, qubit_count))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity(self.qubit_count)
    }

    #[must_use]
    pub fn x_image(&self, qubit: usize) -> &GeneratorImage {
        &self.x_images[qubit]
    }

    #[must_use]
    pub fn z_image(&self, qubit: usize) -> &GeneratorImage {
        &self.z_images[qubit]
    }

    fn images_mut(&mut self) -> impl Iterator<Item = &mut GeneratorImage> {
        self.x_images.iter_mut().chain(self.z_images.iter_mut())
    }

    pub fn left_mul_x(&mut self, qubit: usize) {
        for image in self.images_mut() {
            image.negated ^= image.z_bits.index(qubit);
        }
    }

    pub fn left_mul_z(&mut self, qubit: usize) {
        for image in self.images_mut() {
            image.negated ^= image.x_bits.index(qubit);
        }
    }

    pub fn left_mul_hadamard(&mut self, qubit: usize) {
        for image in self.images_mut() {
            let x = image.x_bits.index(qubit);
            let z = image.z_bits.index(qubit);
            image.negated ^= x & z;
            image.x_bits.set(qubit, z);
            image.z_bits.set(qubit, x);
        }
    }

    pub fn left_mul_root_z(&mut self, qubit: usize) {
        for image in self.images_mut() {
            let x = image.x_bits.index(qubit);
            let z = image.z_bits.index(qubit);
            image.negated ^= x & z;
            image.z_bits.set(qubit, x ^ z);
        }
    }

    pub fn left_mul_cx(&mut self, control: usize, target: usize) {
        assert_ne!(control, target, "control and target must differ");
        for image in self.images_mut() {
            let x_control = image.x_bits.index(control);
            let z_control = image.z_bits.index(control);
            let x_target = image.x_bits.index(target);
            let z_target = image.z_bits.index(target);
            image.negated ^= x_control & z_target & !(x_target ^ z_control);
            image.x_bits.set(target, x_target ^ x_control);
            image.z_bits.set(control, z_control ^ z_target);
        }
    }

    pub fn left_mul_swap(&mut self, left: usize, right: usize) {
        for image in self.images_mut() {
            let x_left = image.x_bits.index(left);
            image.x_bits.set(left, image.x_bits.index(right));
            image.x_bits.set(right, x_left);
            let z_left = image.z_bits.index(left);
            image.z_bits.set(left, image.z_bits.index(right));
            image.z_bits.set(right, z_left);
        }
    }

    /// A tableau drawn by applying a long random sequence of one- and
    /// two-qubit Clifford gates.
    pub fn random(qubit_count: usize, rng: &mut impl Rng) -> Self {
        let mut result = Self::identity(qubit_count);
        if qubit_count == 0 {
            return result;
        }
        for _ in 0..20 * qubit_count * qubit_count + 20 {
            let qubit = rng.gen_range(0..qubit_count);
            match rng.gen_range(0..3) {
                0 => result.left_mul_hadamard(qubit),
                1 => result.left_mul_root_z(qubit),
                _ if qubit_count > 1 => {
                    let mut other = rng.gen_range(0..qubit_count - 1);
                    if other >= qubit {
                        other += 1;
                    }
                    result.left_mul_cx(qubit, other);
                }
                _ => result.left_mul_hadamard(qubit),
            }
        }
        result
    }

    /// Conjugates an arbitrary Hermitian Pauli, given as 2N symplectic bits
    /// (X-part then Z-part) and a sign, through the circuit.
    ///
    /// The image is assembled as a product of stored generator images while
    /// an exponent of `i` is accumulated; Hermiticity of the result forces
    /// the exponent even, which is checked in debug builds.
    fn image_of(&self, bits: &BitVec, negated: bool) -> GeneratorImage {
        let qubit_count = self.qubit_count;
        debug_assert_eq!(bits.len(), 2 * qubit_count);

        // P = i^y · X^x Z^z per qubit, with y the number of Y sites.
        let mut phase = 2 * i32::from(negated);
        for qubit in 0..qubit_count {
            phase += i32::from(bits.index(qubit) && bits.index(qubit + qubit_count));
        }

        let mut accumulated_x = BitVec::zeros(qubit_count);
        let mut accumulated_z = BitVec::zeros(qubit_count);
        let images = (0..qubit_count)
            .filter(|&qubit| bits.index(qubit))
            .map(|qubit| &self.x_images[qubit])
            .chain(
                (0..qubit_count)
                    .filter(|&qubit| bits.index(qubit + qubit_count))
                    .map(|qubit| &self.z_images[qubit]),
            );
        for image in images {
            phase += 2 * i32::from(image.negated);
            for qubit in 0..qubit_count {
                phase += phase_contribution(
                    accumulated_x.index(qubit),
                    accumulated_z.index(qubit),
                    image.x_bits.index(qubit),
                    image.z_bits.index(qubit),
                );
            }
            accumulated_x.xor_assign(&image.x_bits);
            accumulated_z.xor_assign(&image.z_bits);
        }

        let phase = phase.rem_euclid(4);
        debug_assert_eq!(phase % 2, 0, "image of a Hermitian Pauli must be Hermitian");
        GeneratorImage { x_bits: accumulated_x, z_bits: accumulated_z, negated: phase == 2 }
    }

    /// Concatenated symplectic bits (X-part then Z-part) of one stored image.
    fn image_bits(&self, row: usize) -> BitVec {
        let image = if row < self.qubit_count {
            &self.x_images[row]
        } else {
            &self.z_images[row - self.qubit_count]
        };
        image.x_bits.iter().chain(image.z_bits.iter()).collect()
    }
}

impl Tableau for CliffordTableau {
    fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    fn compose(&self, rhs: &Self) -> Self {
        assert_eq!(
            self.qubit_count, rhs.qubit_count,
            "composed circuits must act on the same qubits"
        );
        let image_through_self = |image: &GeneratorImage| {
            let bits: BitVec = image.x_bits.iter().chain(image.z_bits.iter()).collect();
            self.image_of(&bits, image.negated)
        };
        Self {
            qubit_count: self.qubit_count,
            x_images: rhs.x_images.iter().map(image_through_self).collect(),
            z_images: rhs.z_images.iter().map(image_through_self).collect(),
        }
    }

    fn inverse(&self) -> Self {
        let qubit_count = self.qubit_count;
        let size = 2 * qubit_count;
        // The symplectic inverse is Λ Sᵀ Λ, with Λ swapping the X and Z
        // halves; the sign of each inverse image is recovered by pushing its
        // bits back through the forward circuit.
        let rows: Vec<BitVec> = (0..size).map(|row| self.image_bits(row)).collect();
        let inverse_image = |row: usize| {
            let bits: BitVec = (0..size)
                .map(|column| rows[(column + qubit_count) % size].index((row + qubit_count) % size))
                .collect();
            let roundtrip = self.image_of(&bits, false);
            GeneratorImage {
                x_bits: bits.iter().take(qubit_count).collect(),
                z_bits: bits.iter().skip(qubit_count).collect(),
                negated: roundtrip.negated,
            }
        };
        Self {
            qubit_count,
            x_images: (0..qubit_count).map(inverse_image).collect(),
            z_images: (qubit_count..size).map(inverse_image).collect(),
        }
    }

    fn z_output(&self, qubit: usize) -> Result<PauliOperator, ScramblingError> {
        let image = &self.z_images[qubit];
        Ok(PauliOperator::new(
            image.x_bits.clone(),
            image.z_bits.clone(),
            Sign::from_bit(image.negated),
        ))
    }
}
