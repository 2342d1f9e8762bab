// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus mastermind-core
// für die echte Hardware (Strips, Buttons, RNG).

pub mod buttons;
pub mod seed;
pub mod strip_display;

pub use buttons::GpioButtons;
pub use seed::HardwareSeed;
pub use strip_display::RmtStripDisplay;
