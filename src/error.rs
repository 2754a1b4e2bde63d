//! Error types for the rotormachine library.
//!
//! Every variant is a configuration error: it is raised while building a
//! rotor, reflector, plugboard or machine and never while processing text.

use thiserror::Error;

/// Errors produced while configuring a rotor machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorMachineError {
    /// Rotor name is not present in the catalog.
    #[error("Unknown rotor '{0}'")]
    UnknownRotor(String),
    /// Reflector name is not present in the catalog.
    #[error("Unknown reflector '{0}'")]
    UnknownReflector(String),
    /// Ring setting is outside [0, 26).
    #[error("Ring setting {value} for slot {slot} is outside the range 0..26")]
    RingSettingOutOfRange { slot: usize, value: u8 },
    /// Start position is outside [0, 26).
    #[error("Position {value} for slot {slot} is outside the range 0..26")]
    PositionOutOfRange { slot: usize, value: u8 },
    /// Plugboard pair references a symbol outside A-Z.
    #[error("Plugboard symbol '{0}' is not a letter A-Z")]
    InvalidPlugboardSymbol(char),
    /// A symbol appears in more than one plugboard pair.
    #[error("Plugboard symbol '{0}' is used in more than one pair")]
    PlugboardSymbolReused(char),
    /// A plugboard pair connects a symbol to itself.
    #[error("Plugboard symbol '{0}' cannot be paired with itself")]
    PlugboardSelfPair(char),
    /// Plugboard notation token is not exactly two letters.
    #[error("Malformed plugboard pair '{0}'")]
    MalformedPlugboardPair(String),
    /// Rotor wiring is not a permutation of A-Z.
    #[error("Wiring '{0}' is not a permutation of the alphabet")]
    InvalidWiring(String),
    /// Notch is not a letter A-Z.
    #[error("Notch '{0}' is not a letter A-Z")]
    InvalidNotch(char),
    /// Reflector table is not a fixed-point-free involution of A-Z.
    #[error("Reflector '{0}' is not a fixed-point-free involution")]
    InvalidReflector(String),
    /// A rotor or reflector with this name is already registered.
    #[error("Catalog already contains an entry named '{0}'")]
    DuplicateCatalogEntry(String),
    /// Window string does not hold exactly three letters.
    #[error("Window '{0}' must be exactly three letters A-Z")]
    InvalidWindow(String),
}
