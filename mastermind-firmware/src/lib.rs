// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von mastermind-core
pub use mastermind_core::{Button, Game, GameEvent, LedError, PixelDisplay, Score};
