//! Drag handling for the before/after divider.
//!
//! The pane feeds raw pointer events in; the machine decides whether the
//! divider moves. Kept apart from the widget so the press/move/release
//! rules are testable without a UI.

/// Pointer events the split pane feeds into the drag machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Pointer pressed at this x (screen coordinates).
    Press { x: f32 },
    /// Pointer moved to this x.
    Move { x: f32 },
    /// Pointer released, or the gesture was cancelled.
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Drag state for the divider.
///
/// Hovering never moves the divider: position updates flow only between a
/// press and the matching release.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitDrag {
    phase: DragPhase,
}

impl SplitDrag {
    /// Feed one pointer event. Returns the new divider percent when the
    /// event moved it, `None` otherwise.
    pub fn handle(&mut self, event: DragEvent, pane_left: f32, pane_width: f32) -> Option<f32> {
        match event {
            DragEvent::Press { x } => {
                self.phase = DragPhase::Dragging;
                Some(divider_percent(x, pane_left, pane_width))
            }
            DragEvent::Move { x } => match self.phase {
                DragPhase::Dragging => Some(divider_percent(x, pane_left, pane_width)),
                DragPhase::Idle => None,
            },
            DragEvent::Release => {
                self.phase = DragPhase::Idle;
                None
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }
}

/// Convert a pointer x into a divider position as a percent of pane width.
/// The pointer is clamped to the pane, so dragging past either edge pins
/// the divider there.
pub fn divider_percent(x: f32, pane_left: f32, pane_width: f32) -> f32 {
    if pane_width <= f32::EPSILON {
        return 0.0;
    }
    let offset = (x - pane_left).clamp(0.0, pane_width);
    (offset / pane_width) * 100.0
}
