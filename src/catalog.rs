//! Catalog of rotor types and reflectors available to a machine.
//!
//! The catalog is an explicit value handed to
//! [`Machine::with_catalog`](crate::Machine::with_catalog); there is no
//! global registry. The standard catalog carries the historical rotors
//! I-V and reflectors B and C.

use crate::error::RotorMachineError;
use crate::reflector::Reflector;
use crate::rotor::RotorSpec;
use crate::utils::alphabet::{letters_to_indices, ALPHABET_LEN};

/// Historical rotor tables: (name, wiring, notch).
const STANDARD_ROTORS: [(&str, [u8; ALPHABET_LEN], u8); 5] = [
    ("I", letters_to_indices(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ"), b'Q' - b'A'),
    ("II", letters_to_indices(b"AJDKSIRUXBLHWTMCQGZNPYFVOE"), b'E' - b'A'),
    ("III", letters_to_indices(b"BDFHJLCPRTXVZNYEIWGAKMUSQO"), b'V' - b'A'),
    ("IV", letters_to_indices(b"ESOVPZJAYQUIRHXLNFTGKDCMWB"), b'J' - b'A'),
    ("V", letters_to_indices(b"VZBRGITYUPSDNHLXAWMJQOFEKC"), b'Z' - b'A'),
];

/// Historical reflector tables: (name, table).
const STANDARD_REFLECTORS: [(&str, [u8; ALPHABET_LEN]); 2] = [
    ("B", letters_to_indices(b"YRUHQSLDPXNGOKMIEBFZCWVJAT")),
    ("C", letters_to_indices(b"FVPJIAOYEDRZXWGCTKUQSBNMHL")),
];

/// Named rotor types and reflectors.
///
/// Lookups ignore ASCII case, so `"iii"` finds rotor `III`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rotors: Vec<RotorSpec>,
    reflectors: Vec<Reflector>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// Creates a catalog with no entries.
    pub fn empty() -> Self {
        Catalog {
            rotors: Vec::new(),
            reflectors: Vec::new(),
        }
    }

    /// Creates the standard catalog: rotors I-V, reflectors B and C.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.rotor("II").unwrap().notch(), 'E');
    /// assert!(catalog.rotor("VIII").is_err());
    /// ```
    pub fn standard() -> Self {
        Catalog {
            rotors: STANDARD_ROTORS
                .iter()
                .map(|&(name, wiring, notch)| RotorSpec::from_indices(name, wiring, notch))
                .collect(),
            reflectors: STANDARD_REFLECTORS
                .iter()
                .map(|&(name, table)| Reflector::from_indices(name, table))
                .collect(),
        }
    }

    /// Adds a rotor type.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::DuplicateCatalogEntry`] if a rotor with
    /// the same name is already present.
    pub fn with_rotor(mut self, spec: RotorSpec) -> Result<Self, RotorMachineError> {
        if self.find_rotor(spec.name()).is_some() {
            return Err(RotorMachineError::DuplicateCatalogEntry(
                spec.name().to_string(),
            ));
        }
        self.rotors.push(spec);
        Ok(self)
    }

    /// Adds a reflector.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::DuplicateCatalogEntry`] if a reflector
    /// with the same name is already present.
    pub fn with_reflector(mut self, reflector: Reflector) -> Result<Self, RotorMachineError> {
        if self.find_reflector(reflector.name()).is_some() {
            return Err(RotorMachineError::DuplicateCatalogEntry(
                reflector.name().to_string(),
            ));
        }
        self.reflectors.push(reflector);
        Ok(self)
    }

    /// Looks up a rotor type by name.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::UnknownRotor`] if no rotor has that name.
    pub fn rotor(&self, name: &str) -> Result<&RotorSpec, RotorMachineError> {
        self.find_rotor(name)
            .ok_or_else(|| RotorMachineError::UnknownRotor(name.to_string()))
    }

    /// Looks up a rotor type by its registration index.
    ///
    /// In the standard catalog index 0, 1 and 2 are rotors I, II and III.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::UnknownRotor`] if `index` is out of range.
    pub fn rotor_by_index(&self, index: usize) -> Result<&RotorSpec, RotorMachineError> {
        self.rotors
            .get(index)
            .ok_or_else(|| RotorMachineError::UnknownRotor(index.to_string()))
    }

    /// Looks up a reflector by name.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::UnknownReflector`] if no reflector has that name.
    pub fn reflector(&self, name: &str) -> Result<&Reflector, RotorMachineError> {
        self.find_reflector(name)
            .ok_or_else(|| RotorMachineError::UnknownReflector(name.to_string()))
    }

    /// Returns the registered rotor names in registration order.
    pub fn rotor_names(&self) -> impl Iterator<Item = &str> {
        self.rotors.iter().map(|r| r.name())
    }

    /// Returns the registered reflector names in registration order.
    pub fn reflector_names(&self) -> impl Iterator<Item = &str> {
        self.reflectors.iter().map(|r| r.name())
    }

    fn find_rotor(&self, name: &str) -> Option<&RotorSpec> {
        self.rotors
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    fn find_reflector(&self, name: &str) -> Option<&Reflector> {
        self.reflectors
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }
}
