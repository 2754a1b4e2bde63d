//! Machine configuration.
//!
//! A [`MachineConfig`] is the explicit session setup a host layer collects
//! (rotor order, start positions, ring settings, plugboard cabling). It is
//! plain data: validation happens when a [`Machine`](crate::Machine) is
//! built from it, so a bad configuration is rejected before any text is
//! processed.

use crate::error::RotorMachineError;
use crate::plugboard::Plugboard;
use crate::utils::alphabet;

/// Number of rotor slots in the machine (left, middle, right).
pub const ROTOR_SLOTS: usize = 3;

/// Name of the reflector used when none is chosen.
pub const DEFAULT_REFLECTOR: &str = "B";

/// Session settings for a three-rotor machine.
///
/// Slot order is left, middle, right: index 0 is the slowest rotor and
/// index 2 steps on every keypress.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineConfig {
    /// Catalog names of the rotors, left to right.
    pub rotors: [String; ROTOR_SLOTS],
    /// Catalog name of the reflector.
    pub reflector: String,
    /// Start positions, each in `0..26`.
    pub positions: [u8; ROTOR_SLOTS],
    /// Ring settings, each in `0..26`.
    pub ring_settings: [u8; ROTOR_SLOTS],
    /// Plugboard cables as letter pairs.
    pub plugboard: Vec<(char, char)>,
}

impl Default for MachineConfig {
    /// Rotors I, II, III at `AAA`, rings at 0, reflector B, no cables.
    fn default() -> Self {
        Self::new(["I", "II", "III"], [0, 0, 0], [0, 0, 0])
    }
}

impl MachineConfig {
    /// Creates a configuration with reflector B and an empty plugboard.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::MachineConfig;
    ///
    /// let config = MachineConfig::new(["I", "II", "III"], [1, 2, 3], [0, 0, 0])
    ///     .with_pair('A', 'B');
    /// assert_eq!(config.reflector, "B");
    /// assert_eq!(config.plugboard, vec![('A', 'B')]);
    /// ```
    pub fn new(
        rotors: [&str; ROTOR_SLOTS],
        positions: [u8; ROTOR_SLOTS],
        ring_settings: [u8; ROTOR_SLOTS],
    ) -> Self {
        MachineConfig {
            rotors: rotors.map(str::to_string),
            reflector: DEFAULT_REFLECTOR.to_string(),
            positions,
            ring_settings,
            plugboard: Vec::new(),
        }
    }

    /// Selects the reflector by catalog name.
    pub fn with_reflector(mut self, name: &str) -> Self {
        self.reflector = name.to_string();
        self
    }

    /// Replaces the plugboard cabling.
    pub fn with_plugboard(mut self, pairs: &[(char, char)]) -> Self {
        self.plugboard = pairs.to_vec();
        self
    }

    /// Adds one plugboard cable.
    pub fn with_pair(mut self, a: char, b: char) -> Self {
        self.plugboard.push((a, b));
        self
    }

    /// Replaces the plugboard cabling from pair notation such as `"AB CD"`.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::MalformedPlugboardPair`] for a token that
    /// is not two characters. Letter validity is checked at machine build.
    pub fn with_plugboard_notation(mut self, notation: &str) -> Result<Self, RotorMachineError> {
        self.plugboard = Plugboard::parse_pairs(notation)?;
        Ok(self)
    }

    /// Sets the start positions from the three window letters, e.g. `"ADU"`.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::InvalidWindow`] unless `window` is exactly
    /// three ASCII letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::MachineConfig;
    ///
    /// let config = MachineConfig::default().with_window("adu").unwrap();
    /// assert_eq!(config.positions, [0, 3, 20]);
    /// assert!(MachineConfig::default().with_window("AB").is_err());
    /// ```
    pub fn with_window(mut self, window: &str) -> Result<Self, RotorMachineError> {
        let invalid = || RotorMachineError::InvalidWindow(window.to_string());
        let mut positions = [0u8; ROTOR_SLOTS];
        let mut chars = window.chars();
        for slot in positions.iter_mut() {
            let c = chars.next().ok_or_else(invalid)?;
            *slot = alphabet::index_of(c).ok_or_else(invalid)?;
        }
        if chars.next().is_some() {
            return Err(invalid());
        }
        self.positions = positions;
        Ok(self)
    }
}
