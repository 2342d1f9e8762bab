// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für den Big Strip (32 LEDs: aktueller Guess + History)
pub const LED_BIG_GPIO_PIN: u8 = 4;

/// GPIO-Pin für den Small Strip (28 LEDs: Feedback)
pub const LED_SMALL_GPIO_PIN: u8 = 5;

/// Helligkeits-Level für alle Palette-Farben (HSV value, 0-255)
pub const LED_BRIGHTNESS: u8 = mastermind_core::DEFAULT_BRIGHTNESS;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Button Konfiguration
// ============================================================================

/// GPIO-Pins der Buttons in Spiel-Reihenfolge
/// Index 0-3: Farbe an Position 0-3 weiterschalten, Index 4: Submit
pub const BUTTON_GPIO_PINS: [u8; mastermind_core::BUTTONS] = [18, 19, 20, 21, 22];

/// Abstand zwischen zwei Button-Abfragen in Millisekunden
/// Muss deutlich kleiner als das Debounce-Fenster (50 ms) sein
pub const POLL_INTERVAL_MS: u64 = 1;
