//! Round History / Display Renderer
//!
//! Verwaltet die beiden Pixel-Buffer und den Runden-Zähler:
//!
//! - **Big Strip** (32 Pixel): `[0..4]` zeigt den Guess, der gerade
//!   eingegeben wird, danach folgen 7 Slots mit je 4 Pixeln für vergangene Guesses.
//! - **Small Strip** (28 Pixel): 7 Slots mit je 4 Feedback-Pixeln.
//!
//! Solange Platz ist, wird angehängt. Danach scrollt jede weitere Runde die
//! älteste Runde raus (Shift um 4 Pixel).

use crate::palette::PaletteColor;
use crate::types::{Guess, PEGS, Score};

/// Länge des Big Strips (Guesses)
pub const BIG_STRIP_LEN: usize = 32;

/// Länge des Small Strips (Feedback)
pub const SMALL_STRIP_LEN: usize = 28;

/// Runden, die vor dem ersten Scrollen Platz haben
pub const WINDOW_ROUNDS: u32 = 7;

/// Ein Pixel: Palette-Farbe oder aus
pub type Pixel = Option<PaletteColor>;

/// Auswahl des LED-Strips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strip {
    Big,
    Small,
}

/// Inhalt beider Strips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub big: [Pixel; BIG_STRIP_LEN],
    pub small: [Pixel; SMALL_STRIP_LEN],
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            big: [None; BIG_STRIP_LEN],
            small: [None; SMALL_STRIP_LEN],
        }
    }
}

impl Frame {
    pub fn strip(&self, strip: Strip) -> &[Pixel] {
        match strip {
            Strip::Big => &self.big,
            Strip::Small => &self.small,
        }
    }

    /// Bereich des aktuell eingegebenen Guess
    pub fn current_guess(&self) -> &[Pixel] {
        &self.big[..PEGS]
    }
}

/// Pixel-Buffer plus Runden-Zähler R
#[derive(Debug, Clone, Default)]
pub struct History {
    frame: Frame,
    round: u32,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Anzahl bisher abgegebener Guesses in dieser Partie
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Wurde schon gescrollt bzw. wird die nächste Runde scrollen?
    pub fn is_full(&self) -> bool {
        self.round >= WINDOW_ROUNDS
    }

    /// Schreibt den Guess in den Eingabe-Bereich `big[0..4]`
    pub fn show_guess(&mut self, guess: &Guess) {
        write_guess(&mut self.frame.big[..PEGS], guess);
    }

    /// Schaltet den Eingabe-Bereich `big[0..4]` aus
    pub fn blank_guess(&mut self) {
        self.frame.big[..PEGS].fill(None);
    }

    /// Trägt eine bewertete Runde ein und erhöht R
    ///
    /// Hinweis: Im Append-Fall landet der Guess im Slot `4*(R+1)`, also dem
    /// Slot *hinter* dem der aktuellen Runde. Das Verhalten wird bewusst so
    /// beibehalten, ist aber verdächtig (evtl. ungewollt).
    pub fn record(&mut self, guess: &Guess, score: Score) {
        let full = self.is_full();
        let big = &mut self.frame.big;
        let small = &mut self.frame.small;

        if !full {
            let slot = self.round as usize * PEGS;
            write_guess(&mut big[slot + PEGS..slot + 2 * PEGS], guess);
            write_feedback(&mut small[slot..slot + PEGS], score);
        } else {
            // älteste Runde verwerfen, Eingabe-Bereich [0..4] bleibt unberührt
            big.copy_within(2 * PEGS.., PEGS);
            small.copy_within(PEGS.., 0);

            write_guess(&mut big[BIG_STRIP_LEN - PEGS..], guess);
            write_feedback(&mut small[SMALL_STRIP_LEN - PEGS..], score);
        }

        self.round = self.round.saturating_add(1);
    }

    /// Neue Partie: R = 0, beide Strips aus
    pub fn clear(&mut self) {
        self.frame = Frame::default();
        self.round = 0;
    }
}

fn write_guess(slot: &mut [Pixel], guess: &Guess) {
    for (pixel, peg) in slot.iter_mut().zip(guess.pegs()) {
        *pixel = Some(PaletteColor::Guess(*peg));
    }
}

/// Erst alle Blacks, dann alle Whites, Rest aus
fn write_feedback(slot: &mut [Pixel], score: Score) {
    let mut black = score.black;
    let mut white = score.white;
    for pixel in slot.iter_mut() {
        *pixel = if black > 0 {
            black -= 1;
            Some(PaletteColor::Exact)
        } else if white > 0 {
            white -= 1;
            Some(PaletteColor::ColorOnly)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Peg;

    fn guess(pegs: [u8; PEGS]) -> Guess {
        Guess::new(pegs.map(|p| Peg::new(p).unwrap()))
    }

    fn guess_pixels(pegs: [u8; PEGS]) -> [Pixel; PEGS] {
        pegs.map(|p| Some(PaletteColor::Guess(Peg::new(p).unwrap())))
    }

    #[test]
    fn test_first_round_goes_to_second_slot() {
        let mut history = History::new();
        history.record(&guess([5, 4, 3, 2]), Score::new(1, 2));

        assert_eq!(history.frame().big[4..8], guess_pixels([5, 4, 3, 2]));
        assert_eq!(
            history.frame().small[0..4],
            [
                Some(PaletteColor::Exact),
                Some(PaletteColor::ColorOnly),
                Some(PaletteColor::ColorOnly),
                None
            ]
        );
        assert_eq!(history.round(), 1);
    }

    #[test]
    fn test_seventh_round_fills_last_slot() {
        let mut history = History::new();
        for _ in 0..6 {
            history.record(&guess([0, 0, 0, 0]), Score::new(0, 0));
        }
        history.record(&guess([1, 1, 1, 1]), Score::new(4, 0));

        assert_eq!(history.frame().big[28..32], guess_pixels([1, 1, 1, 1]));
        assert_eq!(history.frame().small[24..28], [Some(PaletteColor::Exact); 4]);
        assert!(history.is_full());
    }

    #[test]
    fn test_eighth_round_scrolls() {
        let mut history = History::new();
        history.show_guess(&guess([3, 3, 3, 3]));
        for round in 0..7u8 {
            history.record(&guess([round % 6; 4]), Score::new(round % 5, 0));
        }
        history.record(&guess([5, 5, 5, 5]), Score::new(0, 1));

        let frame = history.frame();
        // Eingabe-Bereich unverändert
        assert_eq!(frame.big[0..4], guess_pixels([3, 3, 3, 3]));
        // Runde 0 ist weg, Runde 1 steht jetzt vorne
        assert_eq!(frame.big[4..8], guess_pixels([1, 1, 1, 1]));
        assert_eq!(frame.big[24..28], guess_pixels([0, 0, 0, 0]));
        assert_eq!(frame.big[28..32], guess_pixels([5, 5, 5, 5]));
        assert_eq!(frame.small[0..4], [Some(PaletteColor::Exact), None, None, None]);
        assert_eq!(frame.small[24..28], [Some(PaletteColor::ColorOnly), None, None, None]);
        assert_eq!(history.round(), 8);
    }

    #[test]
    fn test_scroll_turns_off_unused_feedback() {
        let mut history = History::new();
        for _ in 0..7 {
            history.record(&guess([2, 2, 2, 2]), Score::new(4, 0));
        }
        history.record(&guess([2, 0, 1, 3]), Score::new(1, 0));

        assert_eq!(
            history.frame().small[24..28],
            [Some(PaletteColor::Exact), None, None, None]
        );
        assert_eq!(history.frame().small[20..24], [Some(PaletteColor::Exact); 4]);
    }

    #[test]
    fn test_blank_and_clear() {
        let mut history = History::new();
        history.show_guess(&Guess::default());
        history.record(&Guess::default(), Score::new(2, 0));
        history.blank_guess();
        assert_eq!(history.frame().current_guess(), &[None::<PaletteColor>; PEGS]);

        history.clear();
        assert_eq!(history.frame(), &Frame::default());
        assert_eq!(history.round(), 0);
    }
}
