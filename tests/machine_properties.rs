//! Property-based tests for the rotor machine.
//!
//! Uses proptest to check the algebraic laws the cipher relies on over
//! random settings: self-inverse processing, rotor invertibility, reflector
//! involution, pass-through of non-letters and deterministic stepping.

use proptest::array::uniform3;
use proptest::prelude::*;
use rotormachine::reflector::Reflector;
use rotormachine::rotor::Rotor;
use rotormachine::{Catalog, Machine, MachineConfig};

const ROTOR_NAMES: [&str; 5] = ["I", "II", "III", "IV", "V"];

/// Random rotor choice, positions and ring settings.
fn arb_settings() -> impl Strategy<Value = ([usize; 3], [u8; 3], [u8; 3])> {
    (
        uniform3(0usize..5),
        uniform3(0u8..26),
        uniform3(0u8..26),
    )
}

/// Random disjoint plugboard pairs (0 to 13 cables).
fn arb_plugboard() -> impl Strategy<Value = Vec<(char, char)>> {
    (Just((b'A'..=b'Z').collect::<Vec<u8>>()).prop_shuffle(), 0usize..=13).prop_map(
        |(letters, cables)| {
            letters
                .chunks(2)
                .take(cables)
                .map(|pair| (pair[0] as char, pair[1] as char))
                .collect()
        },
    )
}

fn build_config(
    (rotors, positions, rings): ([usize; 3], [u8; 3], [u8; 3]),
    pairs: &[(char, char)],
) -> MachineConfig {
    MachineConfig::new(rotors.map(|i| ROTOR_NAMES[i]), positions, rings).with_plugboard(pairs)
}

// =============================================================================
// Involution
// =============================================================================

proptest! {
    /// process(process(P)) == P for two machines with identical settings.
    #[test]
    fn prop_process_is_self_inverse(
        settings in arb_settings(),
        pairs in arb_plugboard(),
        text in "[A-Za-z0-9 ,.!?]{0,200}",
    ) {
        let config = build_config(settings, &pairs);
        let mut encoder = Machine::new(&config).unwrap();
        let mut decoder = Machine::new(&config).unwrap();
        let ciphertext = encoder.process(&text);
        prop_assert_eq!(decoder.process(&ciphertext), text.to_ascii_uppercase());
    }

    /// Messages made only of cabled letters still round-trip.
    #[test]
    fn prop_plugboard_letters_roundtrip(
        settings in arb_settings(),
        pairs in arb_plugboard(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..100),
    ) {
        prop_assume!(!pairs.is_empty());
        let letters: Vec<char> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        let text: String = picks.iter().map(|i| letters[i.index(letters.len())]).collect();

        let config = build_config(settings, &pairs);
        let ciphertext = Machine::new(&config).unwrap().process(&text);
        prop_assert_eq!(Machine::new(&config).unwrap().process(&ciphertext), text);
    }

    /// No letter is ever enciphered to itself.
    #[test]
    fn prop_no_letter_maps_to_itself(
        settings in arb_settings(),
        pairs in arb_plugboard(),
        text in "[A-Z]{1,200}",
    ) {
        let mut machine = Machine::new(&build_config(settings, &pairs)).unwrap();
        let ciphertext = machine.process(&text);
        for (p, c) in text.chars().zip(ciphertext.chars()) {
            prop_assert_ne!(p, c);
        }
    }
}

// =============================================================================
// Component laws
// =============================================================================

proptest! {
    /// backward(forward(s)) == s for every rotor, position and ring setting.
    #[test]
    fn prop_rotor_backward_inverts_forward(
        rotor in 0usize..5,
        ring in 0u8..26,
        position in 0u8..26,
        s in 0u8..26,
    ) {
        let catalog = Catalog::standard();
        let spec = catalog.rotor(ROTOR_NAMES[rotor]).unwrap();
        let rotor = Rotor::new(spec, ring, position);
        prop_assert_eq!(rotor.backward(rotor.forward(s)), s);
        prop_assert_eq!(rotor.forward(rotor.backward(s)), s);
    }

    /// Building a reflector from any random pairing of all 26 letters works
    /// and the result is a fixed-point-free involution.
    #[test]
    fn prop_random_reflector_is_involution(
        letters in Just((b'A'..=b'Z').collect::<Vec<u8>>()).prop_shuffle(),
    ) {
        let mut table = [b'A'; 26];
        for pair in letters.chunks(2) {
            table[(pair[0] - b'A') as usize] = pair[1];
            table[(pair[1] - b'A') as usize] = pair[0];
        }
        let table = String::from_utf8(table.to_vec()).unwrap();
        let reflector = Reflector::new("R", &table).unwrap();
        for s in 0..26u8 {
            prop_assert_eq!(reflector.reflect(reflector.reflect(s)), s);
            prop_assert_ne!(reflector.reflect(s), s);
        }
    }
}

// =============================================================================
// Pass-through and stepping
// =============================================================================

proptest! {
    /// Non-letters are copied in place and never move the rotors.
    #[test]
    fn prop_non_letters_pass_through(
        settings in arb_settings(),
        text in "[0-9 ,.;:!?\\-\n\t]{0,100}",
    ) {
        let config = build_config(settings, &[]);
        let mut machine = Machine::new(&config).unwrap();
        prop_assert_eq!(machine.process(&text), text);
        prop_assert_eq!(machine.positions(), config.positions);
    }

    /// Non-letters keep their index in mixed text.
    #[test]
    fn prop_non_letters_keep_positions(
        settings in arb_settings(),
        text in "[A-Za-z0-9 ]{0,100}",
    ) {
        let mut machine = Machine::new(&build_config(settings, &[])).unwrap();
        let output = machine.process(&text);
        prop_assert_eq!(output.len(), text.len());
        for (i, o) in text.chars().zip(output.chars()) {
            if !i.is_ascii_alphabetic() {
                prop_assert_eq!(i, o);
            } else {
                prop_assert!(o.is_ascii_uppercase());
            }
        }
    }

    /// The position trajectory is reproducible and the right rotor moves
    /// exactly once per letter.
    #[test]
    fn prop_stepping_is_deterministic(
        settings in arb_settings(),
        presses in 1usize..120,
    ) {
        let config = build_config(settings, &[]);
        let mut first = Machine::new(&config).unwrap();
        let mut second = Machine::new(&config).unwrap();
        let mut previous = first.positions();
        for _ in 0..presses {
            first.encipher_char('A');
            second.encipher_char('Z');
            let now = first.positions();
            prop_assert_eq!(now, second.positions());
            prop_assert_eq!(now[2], (previous[2] + 1) % 26);
            previous = now;
        }
    }

    /// reset() replays the session from its start positions.
    #[test]
    fn prop_reset_replays(
        settings in arb_settings(),
        text in "[A-Z]{1,80}",
    ) {
        let mut machine = Machine::new(&build_config(settings, &[])).unwrap();
        let first = machine.process(&text);
        machine.reset();
        prop_assert_eq!(machine.process(&text), first);
    }
}
