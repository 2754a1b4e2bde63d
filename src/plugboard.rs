//! Plugboard: the pre/post substitution stage.
//!
//! Up to 13 disjoint letter pairs are cabled together; letters that are not
//! cabled pass straight through. The board is applied on entry and again on
//! exit of every keypress.

use crate::error::RotorMachineError;
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// A partial, mutual pairing over the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [u8; ALPHABET_LEN],
    pairs: Vec<(char, char)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Creates a plugboard with no cables.
    pub fn identity() -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, item) in table.iter_mut().enumerate() {
            *item = i as u8;
        }
        Plugboard {
            table,
            pairs: Vec::new(),
        }
    }

    /// Creates a plugboard from letter pairs (either case).
    ///
    /// # Errors
    /// - [`RotorMachineError::InvalidPlugboardSymbol`] if a symbol is not a letter.
    /// - [`RotorMachineError::PlugboardSelfPair`] if a pair joins a letter to itself.
    /// - [`RotorMachineError::PlugboardSymbolReused`] if a letter is in two pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotormachine::plugboard::Plugboard;
    ///
    /// let board = Plugboard::new(&[('A', 'B'), ('c', 'd')]).unwrap();
    /// assert_eq!(board.swap(0), 1);
    /// assert_eq!(board.swap(3), 2);
    /// assert_eq!(board.swap(4), 4);
    ///
    /// assert!(Plugboard::new(&[('A', 'B'), ('B', 'C')]).is_err());
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, RotorMachineError> {
        let mut board = Self::identity();
        for &(a, b) in pairs {
            let ia = alphabet::index_of(a).ok_or(RotorMachineError::InvalidPlugboardSymbol(a))?;
            let ib = alphabet::index_of(b).ok_or(RotorMachineError::InvalidPlugboardSymbol(b))?;
            if ia == ib {
                return Err(RotorMachineError::PlugboardSelfPair(alphabet::symbol_at(ia)));
            }
            for idx in [ia, ib] {
                if board.table[idx as usize] != idx {
                    return Err(RotorMachineError::PlugboardSymbolReused(
                        alphabet::symbol_at(idx),
                    ));
                }
            }
            board.table[ia as usize] = ib;
            board.table[ib as usize] = ia;
            board
                .pairs
                .push((alphabet::symbol_at(ia), alphabet::symbol_at(ib)));
        }
        Ok(board)
    }

    /// Creates a plugboard from space-separated pair notation, e.g. `"AB CD"`.
    ///
    /// # Errors
    /// Returns [`RotorMachineError::MalformedPlugboardPair`] for any token that
    /// is not exactly two characters, plus every error of [`new`](Self::new).
    pub fn parse(notation: &str) -> Result<Self, RotorMachineError> {
        Self::new(&Self::parse_pairs(notation)?)
    }

    /// Splits pair notation into character pairs without validating letters.
    ///
    /// An empty or all-whitespace string yields no pairs.
    pub fn parse_pairs(notation: &str) -> Result<Vec<(char, char)>, RotorMachineError> {
        notation
            .split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(a), Some(b), None) => Ok((a, b)),
                    _ => Err(RotorMachineError::MalformedPlugboardPair(token.to_string())),
                }
            })
            .collect()
    }

    /// Returns the partner of `input`, or `input` itself when uncabled.
    pub fn swap(&self, input: u8) -> u8 {
        self.table[input as usize % ALPHABET_LEN]
    }

    /// Returns the cabled pairs in uppercase, in configuration order.
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }
}
