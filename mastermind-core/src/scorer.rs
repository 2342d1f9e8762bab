//! Bewertung eines Guess gegen den geheimen Code
//!
//! Pure Function ohne Seiteneffekte (testbar!)

use crate::types::{Code, Guess, Score};

/// Vergleicht `guess` mit `code` für beliebige Key-Längen `N`
///
/// 1. Black: gleiche Farbe an gleicher Position.
/// 2. White: für jede Nicht-Black-Position im Guess (aufsteigend) wird der
///    erste noch freie Nicht-Black-Peg im Code mit gleicher Farbe verbraucht.
///    Jeder Code-Peg zählt höchstens einmal.
///
/// # Beispiele
///
/// ```
/// # use mastermind_core::score_pegs;
/// // Code {0,0,1,1}, Guess {0,1,0,0} → 1 black, 2 white (nicht 3)
/// let score = score_pegs(&[0, 1, 0, 0], &[0, 0, 1, 1]);
/// assert_eq!((score.black, score.white), (1, 2));
/// ```
pub fn score_pegs<T: PartialEq, const N: usize>(guess: &[T; N], code: &[T; N]) -> Score {
    let mut exact = [false; N];
    let mut consumed = [false; N];

    for (i, (g, c)) in guess.iter().zip(code).enumerate() {
        exact[i] = g == c;
    }

    for (i, g) in guess.iter().enumerate() {
        if exact[i] {
            continue;
        }
        // erster freier Treffer gewinnt, danach zur nächsten Guess-Position
        if let Some(j) = (0..N).find(|&j| !exact[j] && !consumed[j] && code[j] == *g) {
            consumed[j] = true;
        }
    }

    Score {
        black: exact.iter().filter(|&&e| e).count() as u8,
        white: consumed.iter().filter(|&&c| c).count() as u8,
    }
}

/// Bewertet den Guess gegen den Code
pub fn score(guess: &Guess, code: &Code) -> Score {
    score_pegs(guess.pegs(), code.pegs())
}
