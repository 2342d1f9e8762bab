//! Mastermind Core - Platform-agnostic Spiel-Logik und Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits für Strips, Buttons und Seed sowie die komplette
//! Spiel-Logik (Scorer, Debouncer, History, State Machine).

#![no_std]

pub mod code;
pub mod debounce;
pub mod game;
pub mod history;
pub mod palette;
pub mod scorer;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use code::generate_code;
pub use debounce::{DEBOUNCE_MS, Debouncer};
pub use game::{Game, WIN_BLINK_MS, WIN_BLINKS};
pub use history::{BIG_STRIP_LEN, Frame, History, Pixel, SMALL_STRIP_LEN, Strip, WINDOW_ROUNDS};
pub use palette::{DEFAULT_BRIGHTNESS, PALETTE_SIZE, PaletteColor, pixel_rgb};
pub use scorer::{score, score_pegs};
pub use traits::{ButtonReader, LedError, PixelDisplay, SeedSource};
pub use types::{
    Action, BUTTONS, Button, Code, GUESS_COLORS, GameEvent, Guess, InvalidPeg, PEGS, Peg, Score,
};
