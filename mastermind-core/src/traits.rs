//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::history::Strip;
use crate::palette::PaletteColor;
use crate::types::BUTTONS;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für die beiden LED-Strips
///
/// Abstrahiert den Zugriff auf zwei adressierbare Strips (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtStripDisplay (ESP32 RMT Peripheral, 2 Channels)
/// - **Testing:** MockDisplay (in-memory Mock)
pub trait PixelDisplay {
    /// Setzt Pixel `index` auf `strip` im Buffer (noch nicht sichtbar)
    ///
    /// `None` schaltet den Pixel aus.
    fn set_pixel(&mut self, strip: Strip, index: usize, color: Option<PaletteColor>);

    /// Schreibt beide Buffer auf die physischen Strips
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn flush(&mut self) -> Result<(), LedError>;
}

/// Trait für die fünf Buttons
pub trait ButtonReader {
    /// Rohe Pegel (active-high) in Button-Reihenfolge
    fn read(&mut self) -> [bool; BUTTONS];
}

/// Quelle für den Seed des Code Generators
///
/// Muss sich zwischen zwei Aufrufen ändern (z.B. Zeit + Hardware-RNG),
/// sonst bekommt jede Partie denselben Code.
pub trait SeedSource {
    fn seed(&mut self) -> u64;
}

impl<T: SeedSource + ?Sized> SeedSource for &mut T {
    fn seed(&mut self) -> u64 {
        T::seed(self)
    }
}
