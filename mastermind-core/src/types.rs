//! Core Types für das Mastermind-Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies: Pegs, Guess, Code, Score,
//! Buttons und die Events, die der Game-Loop loggt.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anzahl der Pegs pro Guess/Code
pub const PEGS: usize = 4;

/// Anzahl der Farben, die in Guess und Code erlaubt sind (Palette-Index 0-5)
pub const GUESS_COLORS: u8 = 6;

/// Anzahl der Buttons (4x Farbwechsel + 1x Submit)
pub const BUTTONS: usize = 5;

/// Fehler beim Erzeugen eines Pegs außerhalb von 0..GUESS_COLORS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPeg(pub u8);

/// Ein Farb-Slot in Guess oder Code (Palette-Index 0-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Peg(u8);

impl Peg {
    /// Erstellt einen Peg, `None` wenn `index >= GUESS_COLORS`
    pub const fn new(index: u8) -> Option<Self> {
        if index < GUESS_COLORS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Palette-Index des Pegs
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Nächste Farbe, nach der letzten geht es wieder bei 0 los
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % GUESS_COLORS)
    }
}

impl TryFrom<u8> for Peg {
    type Error = InvalidPeg;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Peg::new(index).ok_or(InvalidPeg(index))
    }
}

/// Aktuell eingegebener Guess (Guess Register)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Guess([Peg; PEGS]);

impl Default for Guess {
    /// Startwert {0, 1, 2, 3}: unterschiedliche Farben, damit man beim
    /// Spielstart alle vier Positionen auseinanderhalten kann
    fn default() -> Self {
        Self([Peg(0), Peg(1), Peg(2), Peg(3)])
    }
}

impl Guess {
    pub const fn new(pegs: [Peg; PEGS]) -> Self {
        Self(pegs)
    }

    pub const fn pegs(&self) -> &[Peg; PEGS] {
        &self.0
    }

    /// Schaltet die Farbe an `position` eine weiter und gibt den neuen Peg zurück
    ///
    /// # Panics
    /// Wenn `position >= PEGS`. Aufrufer gehen immer über [`Button::action`].
    pub fn cycle(&mut self, position: usize) -> Peg {
        let peg = self.0[position].next();
        self.0[position] = peg;
        peg
    }

    /// Setzt den Guess auf {0, 1, 2, 3} zurück
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Geheimer Code einer Runde - wird nur über [`crate::generate_code`] erzeugt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Code([Peg; PEGS]);

impl Code {
    pub const fn new(pegs: [Peg; PEGS]) -> Self {
        Self(pegs)
    }

    pub const fn pegs(&self) -> &[Peg; PEGS] {
        &self.0
    }
}

/// Ergebnis eines Vergleichs Guess ↔ Code
///
/// - `black`: richtige Farbe an richtiger Position
/// - `white`: richtige Farbe an falscher Position
///
/// Invariante: `black + white <= PEGS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// Alle Pegs exakt getroffen
    pub const WIN: Score = Score {
        black: PEGS as u8,
        white: 0,
    };

    pub const fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    pub const fn is_win(self) -> bool {
        self.black == Self::WIN.black && self.white == Self::WIN.white
    }
}

/// Die fünf Hardware-Buttons in Scan-Reihenfolge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    CyclePeg0,
    CyclePeg1,
    CyclePeg2,
    CyclePeg3,
    Submit,
}

/// Was ein Button im Spiel auslöst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Farbe an Position 0-3 weiterschalten
    CycleColor(usize),
    /// Guess abschicken und bewerten
    Submit,
}

impl Button {
    /// Alle Buttons in Scan-Reihenfolge (Button 0 zuerst)
    pub const ALL: [Button; BUTTONS] = [
        Button::CyclePeg0,
        Button::CyclePeg1,
        Button::CyclePeg2,
        Button::CyclePeg3,
        Button::Submit,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Button → Action Mapping
    pub const fn action(self) -> Action {
        match self {
            Button::CyclePeg0 => Action::CycleColor(0),
            Button::CyclePeg1 => Action::CycleColor(1),
            Button::CyclePeg2 => Action::CycleColor(2),
            Button::CyclePeg3 => Action::CycleColor(3),
            Button::Submit => Action::Submit,
        }
    }
}

/// Ergebnis eines Button-Drucks, wird vom Game-Loop geloggt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Farbe an `position` wurde auf `peg` weitergeschaltet
    ColorCycled { position: usize, peg: Peg },
    /// Runde `round` (ab 0) wurde mit `score` bewertet
    Scored { round: u32, score: Score },
    /// Code in Runde `round` geknackt, Board ist zurückgesetzt
    Won { round: u32 },
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Peg {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Peg({})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Score {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Score {{ black: {}, white: {} }}", self.black, self.white)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Button {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Button::CyclePeg0 => defmt::write!(fmt, "CyclePeg0"),
            Button::CyclePeg1 => defmt::write!(fmt, "CyclePeg1"),
            Button::CyclePeg2 => defmt::write!(fmt, "CyclePeg2"),
            Button::CyclePeg3 => defmt::write!(fmt, "CyclePeg3"),
            Button::Submit => defmt::write!(fmt, "Submit"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GameEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            GameEvent::ColorCycled { position, peg } => {
                defmt::write!(fmt, "ColorCycled {{ position: {}, peg: {} }}", position, peg)
            }
            GameEvent::Scored { round, score } => {
                defmt::write!(fmt, "Scored {{ round: {}, score: {} }}", round, score)
            }
            GameEvent::Won { round } => {
                defmt::write!(fmt, "Won {{ round: {} }}", round)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peg_rejects_feedback_colors() {
        assert_eq!(Peg::new(5).map(Peg::index), Some(5));
        assert_eq!(Peg::new(6), None);
        assert_eq!(Peg::try_from(7), Err(InvalidPeg(7)));
    }

    #[test]
    fn test_peg_next_wraps() {
        assert_eq!(Peg(5).next(), Peg(0));
        assert_eq!(Peg(2).next(), Peg(3));
    }

    #[test]
    fn test_guess_default_is_distinct_colors() {
        let guess = Guess::default();
        assert_eq!(guess.pegs(), &[Peg(0), Peg(1), Peg(2), Peg(3)]);
    }

    #[test]
    fn test_guess_cycle_six_times_is_identity() {
        for position in 0..PEGS {
            let mut guess = Guess::default();
            for _ in 0..GUESS_COLORS {
                guess.cycle(position);
            }
            assert_eq!(guess, Guess::default());
        }
    }

    #[test]
    fn test_guess_reset() {
        let mut guess = Guess::default();
        guess.cycle(0);
        guess.cycle(3);
        guess.reset();
        assert_eq!(guess, Guess::default());
    }

    #[test]
    fn test_button_dispatch() {
        assert_eq!(Button::from_index(2).map(Button::action), Some(Action::CycleColor(2)));
        assert_eq!(Button::from_index(4).map(Button::action), Some(Action::Submit));
        assert_eq!(Button::from_index(5), None);
    }

    #[test]
    fn test_score_win() {
        assert!(Score::new(4, 0).is_win());
        assert!(!Score::new(2, 2).is_win());
    }
}
