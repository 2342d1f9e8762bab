// Seed für den Code Generator: Hardware-RNG gemischt mit der Laufzeit

use embassy_time::Instant;
use esp_hal::rng::Rng;
use mastermind_core::SeedSource;

pub struct HardwareSeed {
    rng: Rng,
}

impl HardwareSeed {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }
}

impl Default for HardwareSeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for HardwareSeed {
    fn seed(&mut self) -> u64 {
        // Zeitpunkt des ersten Submits ändert sich von Partie zu Partie
        ((self.rng.random() as u64) << 32) ^ Instant::now().as_micros()
    }
}
