//! Machine: the rotor cipher orchestrator.
//!
//! Owns three rotors (left, middle, right), a reflector and a plugboard,
//! and drives the per-keypress protocol: step the rotors, then route the
//! letter through plugboard, rotors right to left, reflector, rotors left
//! to right and plugboard again.
//!
//! Because every stage is an involution or is undone on the way back, the
//! whole keypress is self-inverse: a second machine with the same settings
//! turns ciphertext back into plaintext.

use crate::catalog::Catalog;
use crate::config::{MachineConfig, ROTOR_SLOTS};
use crate::error::RotorMachineError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// Slot index of the slowest rotor.
const LEFT: usize = 0;

/// Slot index of the middle rotor.
const MIDDLE: usize = 1;

/// Slot index of the rotor that steps on every keypress.
const RIGHT: usize = 2;

/// Three-rotor cipher machine.
///
/// # Stepping
///
/// Before each letter is substituted, notches are read from the current
/// positions and then:
/// 1. if the middle rotor is at its notch, the left and middle rotors step
///    (the double step);
/// 2. otherwise, if the right rotor is at its notch, the middle rotor steps;
/// 3. the right rotor always steps.
///
/// Only alphabetic characters are keypresses. Everything else passes
/// through without stepping.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: [Rotor; ROTOR_SLOTS],
    reflector: Reflector,
    plugboard: Plugboard,
    start_positions: [u8; ROTOR_SLOTS],
}

impl Machine {
    /// Builds a machine from `config` using the standard catalog.
    ///
    /// # Errors
    /// Returns a [`RotorMachineError`] if any rotor or reflector is unknown,
    /// a position or ring setting is outside `0..26`, or the plugboard pairs
    /// are invalid. Nothing is partially applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::new(["I", "II", "III"], [0, 0, 0], [0, 0, 0]);
    /// let mut encoder = Machine::new(&config).unwrap();
    /// let mut decoder = Machine::new(&config).unwrap();
    ///
    /// let ciphertext = encoder.process("HELLO");
    /// assert_ne!(ciphertext, "HELLO");
    /// assert_eq!(decoder.process(&ciphertext), "HELLO");
    /// ```
    ///
    /// ```
    /// use rotormachine::{Machine, MachineConfig};
    ///
    /// let config = MachineConfig::new(["I", "II", "IX"], [0, 0, 0], [0, 0, 0]);
    /// assert!(Machine::new(&config).is_err());
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, RotorMachineError> {
        Self::with_catalog(config, &Catalog::standard())
    }

    /// Builds a machine from `config`, resolving names in `catalog`.
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn with_catalog(
        config: &MachineConfig,
        catalog: &Catalog,
    ) -> Result<Self, RotorMachineError> {
        let settings = config.ring_settings.iter().zip(config.positions.iter());
        for (slot, (&ring, &position)) in settings.enumerate() {
            if ring as usize >= ALPHABET_LEN {
                return Err(RotorMachineError::RingSettingOutOfRange { slot, value: ring });
            }
            if position as usize >= ALPHABET_LEN {
                return Err(RotorMachineError::PositionOutOfRange {
                    slot,
                    value: position,
                });
            }
        }

        let left = Self::fit_rotor(config, catalog, LEFT)?;
        let middle = Self::fit_rotor(config, catalog, MIDDLE)?;
        let right = Self::fit_rotor(config, catalog, RIGHT)?;
        let reflector = catalog.reflector(&config.reflector)?.clone();
        let plugboard = Plugboard::new(&config.plugboard)?;

        Ok(Machine {
            rotors: [left, middle, right],
            reflector,
            plugboard,
            start_positions: config.positions,
        })
    }

    /// Resolves and fits the rotor for one slot.
    fn fit_rotor(
        config: &MachineConfig,
        catalog: &Catalog,
        slot: usize,
    ) -> Result<Rotor, RotorMachineError> {
        let spec = catalog.rotor(&config.rotors[slot])?;
        Ok(Rotor::new(
            spec,
            config.ring_settings[slot],
            config.positions[slot],
        ))
    }

    /// Enciphers (or deciphers) a text.
    ///
    /// ASCII letters are uppercased and substituted; every other character
    /// is copied unchanged and does not advance the rotors. The output has
    /// the same number of characters as the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::{Machine, MachineConfig};
    ///
    /// let mut machine = Machine::new(&MachineConfig::default()).unwrap();
    /// let out = machine.process("Hello, World 42!");
    /// assert_eq!(out.chars().count(), 16);
    /// assert_eq!(&out[5..7], ", ");
    /// assert!(out.ends_with(" 42!"));
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encipher_char(c)).collect()
    }

    /// Enciphers one character: a single keypress.
    ///
    /// Non-letters are returned unchanged and leave the rotors untouched.
    pub fn encipher_char(&mut self, c: char) -> char {
        match alphabet::index_of(c) {
            Some(index) => {
                self.step_rotors();
                alphabet::symbol_at(self.substitute(index))
            }
            None => c,
        }
    }

    /// Advances the rotors for one keypress.
    ///
    /// Notch state is read from the pre-step positions.
    fn step_rotors(&mut self) {
        if self.rotors[MIDDLE].at_notch() {
            self.rotors[LEFT].step();
            self.rotors[MIDDLE].step();
        } else if self.rotors[RIGHT].at_notch() {
            self.rotors[MIDDLE].step();
        }
        self.rotors[RIGHT].step();
    }

    /// Routes one alphabet index through the signal path at the current
    /// rotor positions.
    fn substitute(&self, index: u8) -> u8 {
        let mut signal = self.plugboard.swap(index);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter() {
            signal = rotor.backward(signal);
        }
        self.plugboard.swap(signal)
    }

    /// Returns the current rotor positions, left to right.
    pub fn positions(&self) -> [u8; ROTOR_SLOTS] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Returns the letters currently showing in the rotor windows.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::{Machine, MachineConfig};
    ///
    /// let mut machine = Machine::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.window(), "AAA");
    /// machine.process("X");
    /// assert_eq!(machine.window(), "AAB");
    /// ```
    pub fn window(&self) -> String {
        self.positions()
            .iter()
            .map(|&p| alphabet::symbol_at(p))
            .collect()
    }

    /// Moves the rotors to new positions without changing the session start.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::PositionOutOfRange`] if any value is
    /// outside `0..26`; the rotors are left unchanged in that case.
    pub fn set_positions(&mut self, positions: [u8; ROTOR_SLOTS]) -> Result<(), RotorMachineError> {
        if let Some(slot) = positions.iter().position(|&p| p as usize >= ALPHABET_LEN) {
            return Err(RotorMachineError::PositionOutOfRange {
                slot,
                value: positions[slot],
            });
        }
        for (rotor, &position) in self.rotors.iter_mut().zip(positions.iter()) {
            rotor.set_position(position);
        }
        Ok(())
    }

    /// Returns the rotors to the start positions of the session.
    ///
    /// After reset, processing the same text reproduces the same output as
    /// right after construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::{Machine, MachineConfig};
    ///
    /// let mut machine = Machine::new(&MachineConfig::default()).unwrap();
    /// let first = machine.process("ATTACK AT DAWN");
    /// machine.reset();
    /// assert_eq!(machine.process("ATTACK AT DAWN"), first);
    /// ```
    pub fn reset(&mut self) {
        for (rotor, &position) in self.rotors.iter_mut().zip(self.start_positions.iter()) {
            rotor.set_position(position);
        }
    }

    /// Returns the rotor in `slot` (0 = left, 2 = right), if any.
    pub fn rotor(&self, slot: usize) -> Option<&Rotor> {
        self.rotors.get(slot)
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}
