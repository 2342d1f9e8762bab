// Task-Modul: Enthält den Embassy Task
//
// Es gibt genau einen Task, der Buttons pollt und das Spiel treibt.
// Alle Spiel-Operationen laufen innerhalb einer Loop-Iteration komplett durch.

pub mod game;

// Re-export Tasks für einfachen Import
pub use game::{game_logic, game_task};
