// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;

// Projekt-Module und Konfiguration
use mastermind_firmware::config::{BUTTON_GPIO_PINS, LED_BIG_GPIO_PIN, LED_SMALL_GPIO_PIN};
use mastermind_firmware::hal::GpioButtons;
use mastermind_firmware::tasks::game_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den Game Task.
/// Danach schläft main() - die ganze Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!(
        "Mastermind: big strip GPIO{}, small strip GPIO{}, buttons GPIO{}",
        LED_BIG_GPIO_PIN, LED_SMALL_GPIO_PIN, BUTTON_GPIO_PINS
    );

    // Buttons: Reihenfolge muss zu BUTTON_GPIO_PINS passen
    let buttons = GpioButtons::new(
        peripherals.GPIO18,
        peripherals.GPIO19,
        peripherals.GPIO20,
        peripherals.GPIO21,
        peripherals.GPIO22,
    );

    // Spawn Game Task (Strips + Buttons)
    spawner
        .spawn(game_task(
            peripherals.RMT,
            peripherals.GPIO4,
            peripherals.GPIO5,
            buttons,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
