//! Farb-Palette: 6 Spielfarben + 2 Feedback-Farben
//!
//! Der Core arbeitet nur mit Palette-Indizes. Die Umrechnung nach RGB8
//! passiert erst beim Schreiben auf den Strip.

use rgb::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Peg;

/// Anzahl der Palette-Einträge
pub const PALETTE_SIZE: usize = 8;

/// Standard-Helligkeit (HSV value)
pub const DEFAULT_BRIGHTNESS: u8 = 156;

/// (hue, saturation) pro Palette-Index
const PALETTE_HUE_SAT: [(u8, u8); PALETTE_SIZE] = [
    (0, 232),   // Rot
    (176, 232), // Blau
    (96, 200),  // Grün
    (32, 232),  // Orange
    (224, 198), // Pink
    (120, 208), // Cyan
    (80, 255),  // Lime - exakter Treffer
    (10, 255),  // Tomate - nur Farbe richtig
];

/// Farbe eines Pixels im Spiel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaletteColor {
    /// Spielfarbe 0-5
    Guess(Peg),
    /// Feedback: richtige Farbe an richtiger Position
    Exact,
    /// Feedback: richtige Farbe an falscher Position
    ColorOnly,
}

impl PaletteColor {
    /// Palette-Index 0-7
    pub const fn index(self) -> u8 {
        match self {
            PaletteColor::Guess(peg) => peg.index(),
            PaletteColor::Exact => 6,
            PaletteColor::ColorOnly => 7,
        }
    }

    /// Rechnet die Palette-Farbe mit gegebener Helligkeit nach RGB um
    pub fn to_rgb(self, brightness: u8) -> RGB8 {
        let (hue, sat) = PALETTE_HUE_SAT[self.index() as usize];
        hsv2rgb(Hsv {
            hue,
            sat,
            val: brightness,
        })
    }
}

/// RGB-Wert für einen Pixel, ausgeschaltete Pixel sind schwarz
pub fn pixel_rgb(pixel: Option<PaletteColor>, brightness: u8) -> RGB8 {
    pixel.map_or(RGB8::default(), |color| color.to_rgb(brightness))
}
