//! Game State Machine
//!
//! Eine `Game`-Instanz besitzt den kompletten Spielzustand (Guess Register,
//! geheimer Code, History mit beiden Pixel-Buffern und Runden-Zähler) sowie
//! die Hardware-Kollaborateure. Es gibt keinen globalen Zustand.

use embedded_hal::delay::DelayNs;

use crate::code::generate_code;
use crate::history::{Frame, History, Strip};
use crate::scorer::score;
use crate::traits::{LedError, PixelDisplay, SeedSource};
use crate::types::{Action, Button, Code, GameEvent, Guess};

/// Anzahl der Blink-Zyklen nach einem Sieg
pub const WIN_BLINKS: usize = 3;

/// Dauer einer Blink-Phase (an bzw. aus) in ms
pub const WIN_BLINK_MS: u32 = 500;

/// Mastermind-Partie mit Display, Delay und Seed-Quelle
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (RMT-Strips, esp-hal Delay, Hardware-RNG) im Production-Code
/// - Mock Implementationen in Tests
pub struct Game<D, W, S> {
    display: D,
    delay: W,
    seeds: S,
    guess: Guess,
    code: Option<Code>,
    history: History,
}

impl<D, W, S> Game<D, W, S>
where
    D: PixelDisplay,
    W: DelayNs,
    S: SeedSource,
{
    pub fn new(display: D, delay: W, seeds: S) -> Self {
        Self {
            display,
            delay,
            seeds,
            guess: Guess::default(),
            code: None,
            history: History::new(),
        }
    }

    /// Zeichnet den Startzustand: Guess {0,1,2,3} vorne, alles andere aus
    pub fn start(&mut self) -> Result<(), LedError> {
        self.reset();
        self.present_all()
    }

    /// Führt die Aktion eines entprellten Button-Drucks aus
    pub fn press(&mut self, button: Button) -> Result<GameEvent, LedError> {
        match button.action() {
            Action::CycleColor(position) => self.cycle_color(position),
            Action::Submit => self.submit(),
        }
    }

    /// Schaltet die Farbe an `position` (0-3) weiter und zeigt den Guess neu an
    ///
    /// # Panics
    /// Wenn `position >= PEGS`, siehe [`Guess::cycle`]. Über [`Game::press`]
    /// kommen nur gültige Positionen an.
    pub fn cycle_color(&mut self, position: usize) -> Result<GameEvent, LedError> {
        let peg = self.guess.cycle(position);
        self.history.show_guess(&self.guess);
        self.present_guess()?;
        Ok(GameEvent::ColorCycled { position, peg })
    }

    /// Bewertet den aktuellen Guess und trägt die Runde ein
    ///
    /// Bei einem Sieg blockiert der Aufruf für die komplette Blink-Animation
    /// (`WIN_BLINKS` × 2 × `WIN_BLINK_MS`) und setzt danach das Board zurück.
    /// Der Reset passiert auch dann, wenn ein Flush fehlschlägt. Zurückgegeben
    /// wird dann der erste Fehler.
    pub fn submit(&mut self) -> Result<GameEvent, LedError> {
        let round = self.history.round();
        let code = match self.code {
            Some(code) if round > 0 => code,
            _ => {
                let code = generate_code(self.seeds.seed());
                self.code = Some(code);
                code
            }
        };

        let score = score(&self.guess, &code);
        self.history.record(&self.guess, score);
        let shown = self.present_all();

        if !score.is_win() {
            shown?;
            return Ok(GameEvent::Scored { round, score });
        }

        let winner = self.guess;
        let blinked = self.blink(&winner);
        self.reset();
        let cleared = self.present_all();

        shown.and(blinked).and(cleared)?;
        Ok(GameEvent::Won { round })
    }

    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    /// Anzahl der abgegebenen Guesses in der laufenden Partie
    pub fn round(&self) -> u32 {
        self.history.round()
    }

    pub fn frame(&self) -> &Frame {
        self.history.frame()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn blink(&mut self, winner: &Guess) -> Result<(), LedError> {
        for _ in 0..WIN_BLINKS {
            self.history.show_guess(winner);
            self.present_guess()?;
            self.delay.delay_ms(WIN_BLINK_MS);

            self.history.blank_guess();
            self.present_guess()?;
            self.delay.delay_ms(WIN_BLINK_MS);
        }
        Ok(())
    }

    /// Neue Partie: Guess zurück, Code verwerfen, beide Strips leeren
    fn reset(&mut self) {
        self.guess.reset();
        self.code = None;
        self.history.clear();
        self.history.show_guess(&self.guess);
    }

    /// Nur den Eingabe-Bereich `big[0..4]` schreiben
    fn present_guess(&mut self) -> Result<(), LedError> {
        for (index, pixel) in self.history.frame().current_guess().iter().enumerate() {
            self.display.set_pixel(Strip::Big, index, *pixel);
        }
        self.display.flush()
    }

    fn present_all(&mut self) -> Result<(), LedError> {
        let frame = self.history.frame();
        for strip in [Strip::Big, Strip::Small] {
            for (index, pixel) in frame.strip(strip).iter().enumerate() {
                self.display.set_pixel(strip, index, *pixel);
            }
        }
        self.display.flush()
    }
}
