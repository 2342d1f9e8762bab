// Fünf Taster an GPIO-Eingängen (active-high, interner Pull-Down)

use esp_hal::gpio::{Input, InputConfig, Pull};
use mastermind_core::{BUTTONS, ButtonReader};

/// Liest die fünf Buttons in Spiel-Reihenfolge (0-3 Farbwechsel, 4 Submit)
pub struct GpioButtons<'a> {
    pins: [Input<'a>; BUTTONS],
}

impl<'a> GpioButtons<'a> {
    /// Erstellt die Eingänge mit Pull-Down, ein gedrückter Taster zieht auf High
    pub fn new(
        peg0: esp_hal::peripherals::GPIO18<'a>,
        peg1: esp_hal::peripherals::GPIO19<'a>,
        peg2: esp_hal::peripherals::GPIO20<'a>,
        peg3: esp_hal::peripherals::GPIO21<'a>,
        submit: esp_hal::peripherals::GPIO22<'a>,
    ) -> Self {
        let config = InputConfig::default().with_pull(Pull::Down);
        Self {
            pins: [
                Input::new(peg0, config),
                Input::new(peg1, config),
                Input::new(peg2, config),
                Input::new(peg3, config),
                Input::new(submit, config),
            ],
        }
    }
}

impl ButtonReader for GpioButtons<'_> {
    fn read(&mut self) -> [bool; BUTTONS] {
        let mut levels = [false; BUTTONS];
        for (level, pin) in levels.iter_mut().zip(&self.pins) {
            *level = pin.is_high();
        }
        levels
    }
}
