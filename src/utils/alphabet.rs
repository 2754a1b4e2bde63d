//! Alphabet and modular index utilities.
//!
//! The machine works on the fixed 26-letter alphabet `A..Z`. Symbols are
//! carried internally as alphabet indices (`0..26`); these helpers convert
//! between characters and indices and normalize rotor offsets.

use crate::error::RotorMachineError;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The fixed alphabet, indexed by alphabet position.
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the alphabet index of an ASCII letter (either case).
///
/// # Returns
/// `Some(0..26)` for `A..Z`/`a..z`, `None` for every other character.
pub fn index_of(symbol: char) -> Option<u8> {
    if symbol.is_ascii_alphabetic() {
        Some(symbol.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the uppercase letter at `index` (taken modulo 26).
pub fn symbol_at(index: u8) -> char {
    ALPHABET[index as usize % ALPHABET_LEN] as char
}

/// Normalizes an arbitrary offset into `[0, 26)`.
///
/// Negative offsets wrap around, so `normalize(-1) == 25`.
pub fn normalize(offset: i32) -> u8 {
    offset.rem_euclid(ALPHABET_LEN as i32) as u8
}

/// Parses a 26-letter table into an index permutation.
///
/// Entry `i` of the result is the alphabet index of the `i`-th letter of
/// `table`. Lowercase letters are accepted.
///
/// # Errors
/// Returns [`RotorMachineError::InvalidWiring`] if `table` is not exactly
/// 26 letters with every letter appearing once.
pub(crate) fn parse_permutation(table: &str) -> Result<[u8; ALPHABET_LEN], RotorMachineError> {
    let invalid = || RotorMachineError::InvalidWiring(table.to_string());

    if table.chars().count() != ALPHABET_LEN {
        return Err(invalid());
    }

    let mut perm = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (slot, c) in perm.iter_mut().zip(table.chars()) {
        let idx = index_of(c).ok_or_else(invalid)?;
        if seen[idx as usize] {
            return Err(invalid());
        }
        seen[idx as usize] = true;
        *slot = idx;
    }
    Ok(perm)
}

/// Converts a built-in uppercase table into indices at compile time.
///
/// Only used for the standard catalog tables; a non-uppercase byte fails
/// const evaluation.
pub(crate) const fn letters_to_indices(table: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut out = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        assert!(table[i].is_ascii_uppercase());
        out[i] = table[i] - b'A';
        i += 1;
    }
    out
}

/// Builds the inverse of an index permutation.
pub(crate) fn invert(perm: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut inverse = [0u8; ALPHABET_LEN];
    for (i, &p) in perm.iter().enumerate() {
        inverse[p as usize] = i as u8;
    }
    inverse
}

/// Renders an index permutation back into its 26-letter form.
pub(crate) fn permutation_to_string(perm: &[u8; ALPHABET_LEN]) -> String {
    perm.iter().map(|&i| symbol_at(i)).collect()
}
