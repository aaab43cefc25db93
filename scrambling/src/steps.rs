//! Scheduling of circuit layers and operator-string perturbations.

use crate::pauli::PauliStringParsingError;
use crate::tableau::CliffordTableau;
use std::str::FromStr;

/// When a circuit layer fires during a stepped evolution.
///
/// Step 0 is reserved for initialization layers; the recurring triggers all
/// skip it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepTrigger {
    /// Only on the initialization step.
    First,
    /// On every step after initialization.
    Always,
    /// On even steps after initialization.
    Even,
    /// On odd steps.
    Odd,
}

impl StepTrigger {
    #[must_use]
    pub fn should_apply(self, step_index: usize) -> bool {
        match self {
            Self::First => step_index == 0,
            Self::Always => step_index > 0,
            Self::Even => step_index > 0 && step_index % 2 == 0,
            Self::Odd => step_index % 2 == 1,
        }
    }
}

/// Site of an operator string: the two single-site operators whose spreading
/// the diagnostics track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    X,
    Y,
}

/// A product of single-site X and Y operators, one letter per qubit.
///
/// The string is realized as a Clifford-circuit perturbation: an X site
/// leaves the circuit untouched and a Y site contributes a bit flip, so the
/// all-X string is the identity and perturbs nothing.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorString {
    sites: Vec<Site>,
}

impl OperatorString {
    pub fn all_x(qubit_count: usize) -> Self {
        Self { sites: vec![Site::X; qubit_count] }
    }

    #[must_use]
    pub fn qubit_count(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn site(&self, qubit: usize) -> Site {
        self.sites[qubit]
    }

    /// The perturbation circuit this string denotes.
    pub fn tableau(&self) -> CliffordTableau {
        let mut result = CliffordTableau::identity(self.qubit_count());
        for (qubit, &site) in self.sites.iter().enumerate() {
            if site == Site::Y {
                result.left_mul_x(qubit);
            }
        }
        result
    }
}

impl FromStr for OperatorString {
    type Err = PauliStringParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sites = s
            .chars()
            .map(|letter| match letter {
                'X' => Ok(Site::X),
                'Y' => Ok(Site::Y),
                _ => Err(PauliStringParsingError),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { sites })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::Tableau;

    #[test]
    fn trigger_truth_table() {
        let expectations = [
            (StepTrigger::First, [true, false, false, false, false]),
            (StepTrigger::Always, [false, true, true, true, true]),
            (StepTrigger::Even, [false, false, true, false, true]),
            (StepTrigger::Odd, [false, true, false, true, false]),
        ];
        for (trigger, expected) in expectations {
            for (step_index, &should) in expected.iter().enumerate() {
                assert_eq!(
                    trigger.should_apply(step_index),
                    should,
                    "{trigger:?} at step {step_index}"
                );
            }
        }
    }

    #[test]
    fn all_x_string_is_the_identity_circuit() {
        assert!(OperatorString::all_x(4).tableau().is_identity());
        let parsed: OperatorString = "XXXX".parse().unwrap();
        assert_eq!(parsed, OperatorString::all_x(4));
    }

    #[test]
    fn y_sites_contribute_bit_flips() {
        let string: OperatorString = "XYX".parse().unwrap();
        let tableau = string.tableau();
        assert_eq!(tableau.z_output(0).unwrap().to_string(), "+Z__");
        assert_eq!(tableau.z_output(1).unwrap().to_string(), "-_Z_");
        assert_eq!(string.site(1), Site::Y);
    }

    #[test]
    fn rejects_letters_outside_the_alphabet() {
        assert!("XZ".parse::<OperatorString>().is_err());
    }
}
