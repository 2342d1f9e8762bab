//! Code Generator - erzeugt den geheimen Code einer Partie

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::{Code, GUESS_COLORS, PEGS, Peg};

/// Erzeugt 4 unabhängige, gleichverteilte Pegs aus 0..GUESS_COLORS
///
/// Der PRNG wird bei jedem Aufruf neu mit `seed` initialisiert. Damit sich
/// aufeinanderfolgende Partien unterscheiden, muss der Seed zeitabhängig sein
/// (siehe [`crate::SeedSource`]).
pub fn generate_code(seed: u64) -> Code {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut pegs = [Peg::default(); PEGS];
    for peg in pegs.iter_mut() {
        *peg = Peg::new(rng.gen_range(0..GUESS_COLORS)).unwrap_or_default();
    }
    Code::new(pegs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_is_deterministic_per_seed() {
        assert_eq!(generate_code(42), generate_code(42));
    }

    #[test]
    fn test_generate_code_uses_guess_colors_only() {
        for seed in 0..500 {
            let code = generate_code(seed);
            assert!(code.pegs().iter().all(|peg| peg.index() < GUESS_COLORS));
        }
    }

    #[test]
    fn test_generate_code_varies_with_seed() {
        let first = generate_code(1);
        assert!((2..100).any(|seed| generate_code(seed) != first));
    }

    #[test]
    fn test_generate_code_covers_all_colors() {
        let mut seen = [false; GUESS_COLORS as usize];
        for seed in 0..200 {
            for peg in generate_code(seed).pegs() {
                seen[peg.index() as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
