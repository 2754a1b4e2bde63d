//! Three-rotor cipher machine engine.
//!
//! Models the classical rotor cipher machine: a plugboard, three rotors
//! with ring settings and notch-driven stepping (including the middle
//! rotor's double step), and a reflector. The resulting substitution is
//! self-inverse, so the same settings both encipher and decipher.
//!
//! # Architecture
//!
//! ```text
//! Rotor / Reflector / Plugboard   (fixed permutation tables, O(1) lookups)
//!     ↑ named in
//! Catalog        (rotor types I-V, reflectors B and C, or custom entries)
//!     ↑ resolved by
//! Machine        (orchestrator: stepping + plugboard → rotors → reflector
//!                 → rotors → plugboard for every letter)
//!     ↑ built from
//! MachineConfig  (rotor order, positions, ring settings, plugboard pairs)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with two identically configured machines:
//!
//! ```
//! use rotormachine::{Machine, MachineConfig};
//!
//! let config = MachineConfig::new(["I", "II", "III"], [0, 0, 0], [0, 0, 0])
//!     .with_pair('A', 'B');
//!
//! let mut encoder = Machine::new(&config).unwrap();
//! let ciphertext = encoder.process("ABAB");
//!
//! let mut decoder = Machine::new(&config).unwrap();
//! assert_eq!(decoder.process(&ciphertext), "ABAB");
//! ```
//!
//! Invalid settings are rejected when the machine is built:
//!
//! ```
//! use rotormachine::{Machine, MachineConfig};
//!
//! let config = MachineConfig::default().with_plugboard(&[('A', 'B'), ('A', 'C')]);
//! assert!(Machine::new(&config).is_err());
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod utils;

mod machine;

pub use catalog::Catalog;
pub use config::MachineConfig;
pub use error::RotorMachineError;
pub use machine::Machine;
