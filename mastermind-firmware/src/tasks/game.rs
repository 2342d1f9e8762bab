// Game Task - Pollt die Buttons und treibt das Spiel
use defmt::{error, info};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::delay::DelayNs;
use esp_hal::delay::Delay;
use esp_hal_smartled::smart_led_buffer;

use mastermind_core::{
    BIG_STRIP_LEN, BUTTONS, Button, ButtonReader, Debouncer, Game, GameEvent, PixelDisplay,
    SMALL_STRIP_LEN, SeedSource,
};

use crate::config::{LED_BRIGHTNESS, POLL_INTERVAL_MS, RMT_CLOCK_MHZ};
use crate::hal::{GpioButtons, HardwareSeed, RmtStripDisplay};

/// Game Loop - Testbare Logik ohne direkte Hardware-Abhängigkeit
///
/// Eine Iteration:
/// - liest alle fünf Buttons einmal
/// - entprellt sie und führt jeden Druck in Button-Reihenfolge komplett aus
/// - wartet `POLL_INTERVAL_MS` bis zur nächsten Abfrage
///
/// Während der Gewinn-Animation blockiert `game.press()`. Buttons, die in
/// dieser Zeit gedrückt werden, gehen verloren.
///
/// # Parameter
/// - `buttons`: Button Reader (Hardware oder Mock)
/// - `game`: Spiel mit Display, Delay und Seed-Quelle
pub async fn game_logic<B, D, W, S>(mut buttons: B, mut game: Game<D, W, S>) -> !
where
    B: ButtonReader,
    D: PixelDisplay,
    W: DelayNs,
    S: SeedSource,
{
    if let Err(e) = game.start() {
        error!("Failed to draw start screen: {}", e);
    }
    info!("Game ready, waiting for guesses");

    let mut debouncer = Debouncer::<BUTTONS>::default();

    loop {
        let now_ms = Instant::now().as_millis();

        for index in debouncer.poll(buttons.read(), now_ms) {
            let Some(button) = Button::from_index(index) else {
                continue;
            };

            match game.press(button) {
                Ok(event) => log_event(event),
                Err(e) => error!("Failed to write to LED strips ({}): {}", button, e),
            }
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::ColorCycled { position, peg } => {
            info!("Position {} -> Farbe {}", position, peg.index());
        }
        GameEvent::Scored { round, score } => {
            info!(
                "Runde {}: {} black, {} white",
                round + 1,
                score.black,
                score.white
            );
        }
        GameEvent::Won { round } => {
            info!("Code geknackt in Runde {}! Neues Spiel", round + 1);
        }
    }
}

/// Game Task - Embassy Task
///
/// Dieser Task übernimmt die Hardware-Initialisierung der Strips und ruft
/// dann die testbare `game_logic()` Funktion auf.
///
/// # Parameter
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `big_pin` / `small_pin`: Datenleitungen der beiden Strips
/// - `buttons`: bereits konfigurierte Button-Eingänge
#[embassy_executor::task]
pub async fn game_task(
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    big_pin: esp_hal::peripherals::GPIO4<'static>,
    small_pin: esp_hal::peripherals::GPIO5<'static>,
    buttons: GpioButtons<'static>,
) {
    // Buffer für SmartLED Daten erstellen (ein Buffer pro Strip)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut big_buffer = smart_led_buffer!(BIG_STRIP_LEN);
    let mut small_buffer = smart_led_buffer!(SMALL_STRIP_LEN);

    // Hardware initialisieren: RmtStripDisplay kapselt RMT + beide SmartLED Adapter
    let display = match RmtStripDisplay::new(
        rmt_peripheral,
        big_pin,
        small_pin,
        RMT_CLOCK_MHZ,
        &mut big_buffer,
        &mut small_buffer,
        LED_BRIGHTNESS,
    ) {
        Ok(display) => display,
        Err(e) => {
            error!("Failed to initialize RMT: {}", e);
            return;
        }
    };

    let game = Game::new(display, Delay::new(), HardwareSeed::new());

    // Business Logic aufrufen
    game_logic(buttons, game).await
}
