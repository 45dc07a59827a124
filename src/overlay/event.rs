//! Press event routing
//!
//! Turns host input events into hit-tests and selection toggles.

use crate::domain::{Point, RegionId};

use super::state::OverlayState;

/// Phase of a single-pointer press gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer position in view coordinates plus the gesture phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressEvent {
    pub x: f32,
    pub y: f32,
    pub phase: PressPhase,
}

impl PressEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            phase: PressPhase::Down,
        }
    }
}

/// What the overlay did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOutcome {
    /// Always true: the overlay swallows every pointer event it receives
    pub consumed: bool,
    /// Region whose selection flipped, if any
    pub toggled: Option<RegionId>,
}

/// Route a press event into the overlay state
///
/// Only the initial press hit-tests. Every phase is reported as consumed.
pub fn handle_press(state: &mut OverlayState, event: PressEvent) -> EventOutcome {
    let toggled = match event.phase {
        PressPhase::Down => {
            let point = Point::from_f32(event.x, event.y);
            let hit = state.hit_test(point);
            if let Some(id) = hit {
                state.toggle_selection(id);
                log::debug!(
                    "Press at ({}, {}) toggled region {} (selected: {})",
                    point.x,
                    point.y,
                    id.index(),
                    state.is_selected(id)
                );
            }
            hit
        }
        PressPhase::Move | PressPhase::Up | PressPhase::Cancel => None,
    };

    EventOutcome {
        consumed: true,
        toggled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Rect, TextRegion};

    fn hello_world() -> OverlayState {
        let mut state = OverlayState::default();
        state.set_regions(vec![
            TextRegion::new("Hello", Rect::new(0, 0, 50, 20)),
            TextRegion::new("World", Rect::new(60, 0, 110, 20)),
        ]);
        state.take_redraw();
        state
    }

    #[test]
    fn test_tap_twice_deselects() {
        let mut state = hello_world();

        let first = handle_press(&mut state, PressEvent::down(10.0, 10.0));
        assert!(first.consumed);
        assert_eq!(state.selected_text(), "Hello");
        assert!(state.take_redraw());

        let second = handle_press(&mut state, PressEvent::down(10.0, 10.0));
        assert_eq!(second.toggled, first.toggled);
        assert_eq!(state.selected_text(), "");
    }

    #[test]
    fn test_other_phases_are_consumed_but_ignored() {
        let mut state = hello_world();
        for phase in [PressPhase::Move, PressPhase::Up, PressPhase::Cancel] {
            let outcome = handle_press(
                &mut state,
                PressEvent {
                    x: 10.0,
                    y: 10.0,
                    phase,
                },
            );
            assert!(outcome.consumed);
            assert_eq!(outcome.toggled, None);
        }
        assert!(!state.has_selection());
        assert!(!state.needs_redraw());
    }

    #[test]
    fn test_miss_is_consumed_without_redraw() {
        let mut state = hello_world();
        let outcome = handle_press(&mut state, PressEvent::down(55.0, 10.0));
        assert!(outcome.consumed);
        assert_eq!(outcome.toggled, None);
        assert!(!state.needs_redraw());
    }

    #[test]
    fn test_fractional_coordinates_truncate() {
        let mut state = hello_world();
        // 49.9 truncates to 49, still inside Hello's half-open bounds
        let outcome = handle_press(&mut state, PressEvent::down(49.9, 19.9));
        assert_eq!(outcome.toggled.map(|id| id.index()), Some(0));
    }
}
