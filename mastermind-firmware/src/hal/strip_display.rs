// Zwei WS2812 Strips als PixelDisplay
//
// Big Strip (Guesses) auf RMT Channel 0, Small Strip (Feedback) auf Channel 1.
// Der Core setzt Palette-Farben, hier werden sie nach RGB8 umgerechnet und
// beim flush() auf beide Strips geschrieben.

use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use mastermind_core::{
    BIG_STRIP_LEN, LedError, PaletteColor, PixelDisplay, SMALL_STRIP_LEN, Strip, pixel_rgb,
};

/// RMT Buffer-Größe für `leds` LEDs (3 Farben * 8 Bits pro LED + 1 Reset)
pub const fn rmt_buffer_size(leds: usize) -> usize {
    leds * 24 + 1
}

pub const BIG_BUFFER_SIZE: usize = rmt_buffer_size(BIG_STRIP_LEN);
pub const SMALL_BUFFER_SIZE: usize = rmt_buffer_size(SMALL_STRIP_LEN);

/// Real Hardware Display mit zwei Strips
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Die Buffer müssen länger leben als der Adapter, daher werden sie
/// im Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtStripDisplay<'a> {
    big: SmartLedsAdapter<'a, BIG_BUFFER_SIZE>,
    small: SmartLedsAdapter<'a, SMALL_BUFFER_SIZE>,
    big_pixels: [RGB8; BIG_STRIP_LEN],
    small_pixels: [RGB8; SMALL_STRIP_LEN],
    brightness: u8,
}

impl<'a> RmtStripDisplay<'a> {
    /// Erstellt ein neues RmtStripDisplay
    ///
    /// # Parameter
    /// - `rmt_peripheral`: RMT Peripheral (Channel 0 + 1 werden belegt)
    /// - `big_pin` / `small_pin`: Datenleitungen der beiden Strips
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `big_buffer` / `small_buffer`: Buffer aus `smart_led_buffer!`
    /// - `brightness`: HSV value für alle Palette-Farben
    pub fn new(
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        big_pin: esp_hal::peripherals::GPIO4<'a>,
        small_pin: esp_hal::peripherals::GPIO5<'a>,
        rmt_clock_mhz: u32,
        big_buffer: &'a mut [PulseCode; BIG_BUFFER_SIZE],
        small_buffer: &'a mut [PulseCode; SMALL_BUFFER_SIZE],
        brightness: u8,
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        Ok(Self {
            big: SmartLedsAdapter::new(rmt.channel0, big_pin, big_buffer),
            small: SmartLedsAdapter::new(rmt.channel1, small_pin, small_buffer),
            big_pixels: [RGB8::default(); BIG_STRIP_LEN],
            small_pixels: [RGB8::default(); SMALL_STRIP_LEN],
            brightness,
        })
    }
}

impl PixelDisplay for RmtStripDisplay<'_> {
    fn set_pixel(&mut self, strip: Strip, index: usize, color: Option<PaletteColor>) {
        let pixels: &mut [RGB8] = match strip {
            Strip::Big => &mut self.big_pixels,
            Strip::Small => &mut self.small_pixels,
        };
        if let Some(pixel) = pixels.get_mut(index) {
            *pixel = pixel_rgb(color, self.brightness);
        }
    }

    fn flush(&mut self) -> Result<(), LedError> {
        self.big
            .write(self.big_pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)?;
        self.small
            .write(self.small_pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
