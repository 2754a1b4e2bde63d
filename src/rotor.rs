//! Rotor: one wheel of the machine.
//!
//! A rotor is a fixed wiring permutation plus a notch, fitted into a slot
//! with a ring setting and a mutable rotational position. The wiring is
//! shared, immutable data ([`RotorSpec`]); only the position changes while
//! text is processed.

use crate::error::RotorMachineError;
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// Immutable description of a rotor type: its wiring and notch letter.
///
/// Wirings are stored as index tables, with the inverse precomputed so
/// both directions are a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    name: String,
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    notch: u8,
}

impl RotorSpec {
    /// Creates a rotor type from a 26-letter wiring and a notch letter.
    ///
    /// # Parameters
    /// - `name`: Catalog name (e.g. `"I"`).
    /// - `wiring`: Output letter for each input contact `A..Z`.
    /// - `notch`: Window letter at which this rotor drives its left neighbor.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidWiring`] if `wiring` is not a
    /// permutation of the alphabet, or [`RotorMachineError::InvalidNotch`]
    /// if `notch` is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::rotor::RotorSpec;
    ///
    /// let spec = RotorSpec::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q').unwrap();
    /// assert_eq!(spec.notch(), 'Q');
    /// assert!(RotorSpec::new("bad", "ABC", 'A').is_err());
    /// ```
    pub fn new(name: &str, wiring: &str, notch: char) -> Result<Self, RotorMachineError> {
        let wiring = alphabet::parse_permutation(wiring)?;
        let notch = alphabet::index_of(notch).ok_or(RotorMachineError::InvalidNotch(notch))?;
        Ok(Self::from_indices(name, wiring, notch))
    }

    /// Builds a spec from tables already known to be valid.
    pub(crate) fn from_indices(name: &str, wiring: [u8; ALPHABET_LEN], notch: u8) -> Self {
        RotorSpec {
            name: name.to_string(),
            inverse: alphabet::invert(&wiring),
            wiring,
            notch,
        }
    }

    /// Returns the catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wiring as a 26-letter string.
    pub fn wiring(&self) -> String {
        alphabet::permutation_to_string(&self.wiring)
    }

    /// Returns the notch letter.
    pub fn notch(&self) -> char {
        alphabet::symbol_at(self.notch)
    }
}

/// A rotor fitted into a machine slot.
///
/// `ring_setting` and `position` are always kept in `[0, 26)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    notch: u8,
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Fits a rotor of type `spec` with the given ring setting and position.
    ///
    /// Both values are reduced modulo 26; range checking with slot
    /// information is done by [`Machine`](crate::Machine) construction.
    pub fn new(spec: &RotorSpec, ring_setting: u8, position: u8) -> Self {
        Rotor {
            wiring: spec.wiring,
            inverse: spec.inverse,
            notch: spec.notch,
            ring_setting: ring_setting % ALPHABET_LEN as u8,
            position: position % ALPHABET_LEN as u8,
        }
    }

    /// Advances the rotor by one position (mod 26).
    pub fn step(&mut self) {
        self.position = alphabet::normalize(self.position as i32 + 1);
    }

    /// Returns true if the letter in the window equals the notch letter.
    ///
    /// Evaluated on the position before the machine steps.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Substitutes an alphabet index travelling right to left.
    ///
    /// Looks up `wiring[(input + position - ring_setting) mod 26]`.
    pub fn forward(&self, input: u8) -> u8 {
        let idx = alphabet::normalize(self.offset() + input as i32);
        self.wiring[idx as usize]
    }

    /// Substitutes an alphabet index travelling left to right.
    ///
    /// Exact inverse of [`forward`](Self::forward) at the same position.
    pub fn backward(&self, input: u8) -> u8 {
        let idx = self.inverse[input as usize % ALPHABET_LEN];
        alphabet::normalize(idx as i32 - self.offset())
    }

    /// Returns the current position (0..26).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Sets the position, reduced modulo 26.
    pub fn set_position(&mut self, position: u8) {
        self.position = position % ALPHABET_LEN as u8;
    }

    /// Returns the ring setting (0..26).
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Net wiring offset: `position - ring_setting`.
    fn offset(&self) -> i32 {
        self.position as i32 - self.ring_setting as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotor_i() -> RotorSpec {
        RotorSpec::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q').unwrap()
    }

    #[test]
    fn test_spec_accessors() {
        let spec = rotor_i();
        assert_eq!(spec.name(), "I");
        assert_eq!(spec.wiring(), "EKMFLGDQVZNTOWYHXUSPAIBRCJ");
        assert_eq!(spec.notch(), 'Q');
    }

    #[test]
    fn test_spec_rejects_invalid_notch() {
        let result = RotorSpec::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", '7');
        assert_eq!(result, Err(RotorMachineError::InvalidNotch('7')));
    }

    #[test]
    fn test_spec_rejects_duplicate_letter() {
        let result = RotorSpec::new("X", "EEMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q');
        assert!(matches!(result, Err(RotorMachineError::InvalidWiring(_))));
    }

    #[test]
    fn test_new_normalizes_settings() {
        let rotor = Rotor::new(&rotor_i(), 27, 52);
        assert_eq!(rotor.ring_setting(), 1);
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn test_step_wraps() {
        let mut rotor = Rotor::new(&rotor_i(), 0, 25);
        rotor.step();
        assert_eq!(rotor.position(), 0);
        rotor.step();
        assert_eq!(rotor.position(), 1);
    }

    #[test]
    fn test_at_notch() {
        // Q is index 16
        let mut rotor = Rotor::new(&rotor_i(), 0, 15);
        assert!(!rotor.at_notch());
        rotor.step();
        assert!(rotor.at_notch());
        rotor.step();
        assert!(!rotor.at_notch());
    }

    #[test]
    fn test_at_notch_ignores_ring_setting() {
        let rotor = Rotor::new(&rotor_i(), 5, 16);
        assert!(rotor.at_notch());
    }

    #[test]
    fn test_forward_at_origin_matches_wiring() {
        let rotor = Rotor::new(&rotor_i(), 0, 0);
        assert_eq!(rotor.forward(0), 4); // A -> E
        assert_eq!(rotor.forward(1), 10); // B -> K
        assert_eq!(rotor.forward(25), 9); // Z -> J
    }

    #[test]
    fn test_forward_applies_position_and_ring() {
        // position 1: A reads contact B -> K
        let rotor = Rotor::new(&rotor_i(), 0, 1);
        assert_eq!(rotor.forward(0), 10);
        // ring 1 cancels position 1
        let rotor = Rotor::new(&rotor_i(), 1, 1);
        assert_eq!(rotor.forward(0), 4);
        // ring 1 at position 0: A reads contact Z -> J
        let rotor = Rotor::new(&rotor_i(), 1, 0);
        assert_eq!(rotor.forward(0), 9);
    }

    #[test]
    fn test_backward_inverts_forward_everywhere() {
        let spec = rotor_i();
        for ring in 0..26u8 {
            for pos in 0..26u8 {
                let rotor = Rotor::new(&spec, ring, pos);
                for s in 0..26u8 {
                    assert_eq!(rotor.backward(rotor.forward(s)), s);
                    assert_eq!(rotor.forward(rotor.backward(s)), s);
                }
            }
        }
    }

    #[test]
    fn test_set_position() {
        let mut rotor = Rotor::new(&rotor_i(), 0, 0);
        rotor.set_position(30);
        assert_eq!(rotor.position(), 4);
    }
}
