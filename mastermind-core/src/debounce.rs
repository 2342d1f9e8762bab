//! Debounced Input Source
//!
//! Wird in jeder Loop-Iteration mit den rohen Pin-Pegeln und der aktuellen
//! Zeit aufgerufen (Polling, keine Interrupts). Jeder Button hat seinen
//! eigenen Zustand, es gibt keine Wechselwirkung zwischen Buttons.

use heapless::Vec;

/// Minimale Zeit in ms, die ein Pegel stabil sein muss
pub const DEBOUNCE_MS: u64 = 50;

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    /// Roher Pegel der letzten Abfrage
    last_reading: bool,
    /// Zuletzt akzeptierter stabiler Pegel
    stable: bool,
    /// Zeitpunkt der letzten rohen Pegeländerung
    last_change_ms: u64,
}

/// Entprellt `N` active-high Buttons
#[derive(Debug, Clone)]
pub struct Debouncer<const N: usize> {
    buttons: [ButtonState; N],
    window_ms: u64,
}

impl<const N: usize> Default for Debouncer<N> {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS)
    }
}

impl<const N: usize> Debouncer<N> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            buttons: [ButtonState::default(); N],
            window_ms,
        }
    }

    /// Verarbeitet eine Abfrage aller Pins
    ///
    /// Gibt die Indizes der Buttons zurück, deren stabiler Pegel gerade von
    /// low auf high gewechselt ist (aufsteigend sortiert). Loslassen erzeugt
    /// kein Event.
    pub fn poll(&mut self, readings: [bool; N], now_ms: u64) -> Vec<usize, N> {
        let mut pressed = Vec::new();

        for (index, (state, reading)) in self.buttons.iter_mut().zip(readings).enumerate() {
            if reading != state.last_reading {
                state.last_change_ms = now_ms;
            }
            state.last_reading = reading;

            if now_ms.saturating_sub(state.last_change_ms) > self.window_ms
                && reading != state.stable
            {
                state.stable = reading;
                if reading {
                    // Kapazität N reicht immer für N Buttons
                    let _ = pressed.push(index);
                }
            }
        }

        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: [bool; 2] = [false, false];
    const FIRST: [bool; 2] = [true, false];

    #[test]
    fn test_press_accepted_after_window() {
        let mut debouncer = Debouncer::<2>::default();
        assert!(debouncer.poll(FIRST, 100).is_empty());
        assert!(debouncer.poll(FIRST, 150).is_empty());
        assert_eq!(debouncer.poll(FIRST, 151).as_slice(), &[0]);
    }

    #[test]
    fn test_press_reported_once() {
        let mut debouncer = Debouncer::<2>::default();
        debouncer.poll(FIRST, 0);
        assert_eq!(debouncer.poll(FIRST, 60).as_slice(), &[0]);
        assert!(debouncer.poll(FIRST, 200).is_empty());
        assert!(debouncer.poll(FIRST, 1000).is_empty());
    }

    #[test]
    fn test_bounce_restarts_window() {
        let mut debouncer = Debouncer::<2>::default();
        debouncer.poll(FIRST, 0);
        debouncer.poll(UP, 30);
        debouncer.poll(FIRST, 40);
        assert!(debouncer.poll(FIRST, 80).is_empty());
        assert_eq!(debouncer.poll(FIRST, 91).as_slice(), &[0]);
    }

    #[test]
    fn test_release_is_silent() {
        let mut debouncer = Debouncer::<2>::default();
        debouncer.poll(FIRST, 0);
        debouncer.poll(FIRST, 60);
        debouncer.poll(UP, 100);
        assert!(debouncer.poll(UP, 200).is_empty());
        assert!(debouncer.poll(UP, 1000).is_empty());
    }

    #[test]
    fn test_press_release_press_reports_twice() {
        let mut debouncer = Debouncer::<1>::default();
        let mut presses = 0;
        for now in 0..300u64 {
            let level = !(100..200).contains(&now);
            presses += debouncer.poll([level], now).len();
        }
        assert_eq!(presses, 2);
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut debouncer = Debouncer::<2>::default();
        debouncer.poll([true, false], 0);
        // Button 1 wackelt, Button 0 bleibt stabil
        debouncer.poll([true, true], 40);
        assert_eq!(debouncer.poll([true, true], 51).as_slice(), &[0]);
        assert_eq!(debouncer.poll([true, true], 91).as_slice(), &[1]);
    }
}
