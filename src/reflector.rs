//! Reflector: the fixed turnaround wheel.
//!
//! A reflector pairs up all 26 letters. Its table must be an involution
//! with no fixed point, which is what makes the whole machine self-inverse
//! and guarantees that no letter is enciphered to itself.

use crate::error::RotorMachineError;
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// A fixed-point-free involutive permutation of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    table: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Creates a reflector from its 26-letter table.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidWiring`] if `table` is not a
    /// permutation, or [`RotorMachineError::InvalidReflector`] if it maps a
    /// letter to itself or is not its own inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::reflector::Reflector;
    ///
    /// let b = Reflector::new("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    /// assert_eq!(b.reflect(0), 24); // A <-> Y
    /// assert!(Reflector::new("id", "ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn new(name: &str, table: &str) -> Result<Self, RotorMachineError> {
        let perm = alphabet::parse_permutation(table)?;
        let involutive = perm
            .iter()
            .enumerate()
            .all(|(i, &p)| p as usize != i && perm[p as usize] as usize == i);
        if !involutive {
            return Err(RotorMachineError::InvalidReflector(table.to_string()));
        }
        Ok(Self::from_indices(name, perm))
    }

    /// Builds a reflector from a table already known to be valid.
    pub(crate) fn from_indices(name: &str, table: [u8; ALPHABET_LEN]) -> Self {
        Reflector {
            name: name.to_string(),
            table,
        }
    }

    /// Reflects an alphabet index.
    pub fn reflect(&self, input: u8) -> u8 {
        self.table[input as usize % ALPHABET_LEN]
    }

    /// Returns the catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the table as a 26-letter string.
    pub fn table(&self) -> String {
        alphabet::permutation_to_string(&self.table)
    }
}
