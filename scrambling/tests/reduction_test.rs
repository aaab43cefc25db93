use proptest::prelude::*;
use rand::prelude::*;
use scrambling::rowsum::{combine, phase_contribution};
use scrambling::{reduce, stabilizer_state_of, BitVec, CliffordTableau, StabilizerBinaryState};

fn random_state(seed: u64, qubit_count: usize) -> StabilizerBinaryState {
    let mut rng = StdRng::seed_from_u64(seed);
    let tableau = CliffordTableau::random(qubit_count, &mut rng);
    stabilizer_state_of(&tableau).unwrap()
}

#[test]
fn phase_contributions_match_single_qubit_products() {
    // Exponent of i in P1 · P2 for every ordered pair of single-qubit
    // Paulis, with Y kept Hermitian. Rows and columns ordered I, X, Z, Y.
    let paulis = [(false, false), (true, false), (false, true), (true, true)];
    let expected = [
        [0, 0, 0, 0],   // I · {I, X, Z, Y}
        [0, 0, -1, 1],  // X·Z = -iY, X·Y = iZ
        [0, 1, 0, -1],  // Z·X = iY, Z·Y = -iX
        [0, -1, 1, 0],  // Y·X = -iZ, Y·Z = iX
    ];
    for (left_index, &(x1, z1)) in paulis.iter().enumerate() {
        for (right_index, &(x2, z2)) in paulis.iter().enumerate() {
            assert_eq!(
                phase_contribution(x1, z1, x2, z2),
                expected[left_index][right_index],
                "({x1},{z1}) * ({x2},{z2})"
            );
        }
    }
}

type Complex = (i32, i32);

fn complex_mul(left: Complex, right: Complex) -> Complex {
    (
        left.0 * right.0 - left.1 * right.1,
        left.0 * right.1 + left.1 * right.0,
    )
}

fn pauli_matrix(x: bool, z: bool, negative: bool) -> [[Complex; 2]; 2] {
    let mut matrix = match (x, z) {
        (false, false) => [[(1, 0), (0, 0)], [(0, 0), (1, 0)]],
        (true, false) => [[(0, 0), (1, 0)], [(1, 0), (0, 0)]],
        (false, true) => [[(1, 0), (0, 0)], [(0, 0), (-1, 0)]],
        (true, true) => [[(0, 0), (0, -1)], [(0, 1), (0, 0)]],
    };
    if negative {
        for row in &mut matrix {
            for entry in row {
                *entry = (-entry.0, -entry.1);
            }
        }
    }
    matrix
}

fn matrix_mul(left: [[Complex; 2]; 2], right: [[Complex; 2]; 2]) -> [[Complex; 2]; 2] {
    let mut product = [[(0, 0); 2]; 2];
    for row in 0..2 {
        for column in 0..2 {
            for inner in 0..2 {
                let term = complex_mul(left[row][inner], right[inner][column]);
                product[row][column].0 += term.0;
                product[row][column].1 += term.1;
            }
        }
    }
    product
}

#[test]
fn combine_matches_reference_products_on_one_qubit() {
    // All 16 single-qubit bit combinations, each under all four sign
    // combinations, checked against literal 2x2 matrix multiplication.
    // `combine` receives the already-summed row, as the reducer passes it.
    let paulis = [(false, false), (true, false), (false, true), (true, true)];
    for &(x_left, z_left) in &paulis {
        for &(x_right, z_right) in &paulis {
            for sign_left in [false, true] {
                for sign_right in [false, true] {
                    let left_row: BitVec = [x_left, z_left].into_iter().collect();
                    let mut summed: BitVec = [x_right, z_right].into_iter().collect();
                    summed.xor_assign(&left_row);
                    let combined = combine(&summed, &left_row, sign_right, sign_left, 1);

                    if (x_left & z_right) != (z_left & x_right) {
                        // Anti-commuting factors leave an odd power of i;
                        // the rule always reports a nontrivial residue.
                        assert!(combined, "({x_left},{z_left}) * ({x_right},{z_right})");
                    } else {
                        let product = matrix_mul(
                            pauli_matrix(x_left, z_left, sign_left),
                            pauli_matrix(x_right, z_right, sign_right),
                        );
                        let expected =
                            pauli_matrix(x_left ^ x_right, z_left ^ z_right, combined);
                        assert_eq!(
                            product, expected,
                            "({x_left},{z_left},{sign_left}) * ({x_right},{z_right},{sign_right})"
                        );
                    }
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn reduction_is_idempotent(seed in any::<u64>(), qubit_count in 1usize..8) {
        let state = random_state(seed, qubit_count);
        let once = reduce(state.matrix, state.signs, qubit_count).unwrap();
        let twice = reduce(once.matrix.clone(), once.signs.clone(), qubit_count).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn rank_matches_sign_free_elimination(seed in any::<u64>(), qubit_count in 1usize..8) {
        let state = random_state(seed, qubit_count);
        let expected = state.matrix.rank();
        let reduced = reduce(state.matrix, state.signs, qubit_count).unwrap();
        prop_assert_eq!(reduced.rank, expected);
        // Conjugated Z generators always stay independent.
        prop_assert_eq!(reduced.rank, qubit_count);
    }

    #[test]
    fn rank_survives_lock_step_permutation(
        seed in any::<u64>(),
        permutation_seed in any::<u64>(),
        qubit_count in 2usize..8,
    ) {
        let state = random_state(seed, qubit_count);

        let mut order: Vec<usize> = (0..qubit_count).collect();
        order.shuffle(&mut StdRng::seed_from_u64(permutation_seed));
        let columns: Vec<usize> = (0..2 * qubit_count).collect();
        let permuted_matrix = state.matrix.submatrix(&order, &columns);
        let permuted_signs: Vec<bool> = order.iter().map(|&row| state.signs[row]).collect();

        let reduced = reduce(state.matrix, state.signs, qubit_count).unwrap();
        let permuted = reduce(permuted_matrix, permuted_signs, qubit_count).unwrap();
        prop_assert_eq!(reduced.rank, permuted.rank);
    }

    #[test]
    fn echelon_pivots_ascend_and_signs_stay_per_row(seed in any::<u64>(), qubit_count in 1usize..8) {
        let state = random_state(seed, qubit_count);
        let reduced = reduce(state.matrix, state.signs, qubit_count).unwrap();
        prop_assert_eq!(reduced.signs.len(), qubit_count);

        let leading: Vec<Option<usize>> = (0..qubit_count)
            .map(|row| (0..2 * qubit_count).find(|&column| reduced.matrix.get((row, column))))
            .collect();
        for pair in leading.windows(2) {
            match (pair[0], pair[1]) {
                (Some(first), Some(second)) => prop_assert!(first < second),
                (None, Some(_)) => prop_assert!(false, "zero row above a nonzero row"),
                _ => {}
            }
        }
    }
}
