use splitpane_core::{Orientation, PaneDimensions, PaneEvent, Position, SizeUnit};

use crate::resize::resize;

// ──────────────────────────────────────────────
// DragState: splitter gesture state machine
// ──────────────────────────────────────────────

/// Geometry captured for an in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragInfo {
    /// Container size sampled once at press time and held for the gesture.
    pub pane_info: PaneDimensions,
    /// Last recorded pointer position.
    pub anchor: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// The splitter ignores all pointer input.
    NotDraggable,
    /// Dragging is enabled, no gesture in progress.
    Idle,
    Dragging(DragInfo),
}

impl DragState {
    pub fn from_draggable(draggable: bool) -> Self {
        if draggable {
            DragState::Idle
        } else {
            DragState::NotDraggable
        }
    }

    pub fn phase(&self) -> DragPhase {
        match self {
            DragState::NotDraggable => DragPhase::Disabled,
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging(_) => DragPhase::Dragging,
        }
    }

    /// Apply one event. Returns the next state and what happened, if
    /// anything. Combinations outside the transition table are no-ops.
    pub(crate) fn step(
        self,
        event: PaneEvent,
        orientation: Orientation,
        size: SizeUnit,
    ) -> (DragState, Option<DragOutcome>) {
        match (self, event) {
            (DragState::Idle, PaneEvent::Press(sample)) => {
                let info = DragInfo {
                    pane_info: sample.container(),
                    anchor: sample.position(),
                };
                log::debug!(
                    "splitter drag started at ({}, {}) in {}x{}",
                    info.anchor.x,
                    info.anchor.y,
                    info.pane_info.width,
                    info.pane_info.height
                );
                (DragState::Dragging(info), Some(DragOutcome::Started))
            }
            (DragState::Dragging(info), PaneEvent::Move(sample)) => {
                let position = sample.client_position();
                let delta = position.delta_from(info.anchor);
                let resized = resize(
                    orientation,
                    size,
                    delta,
                    info.pane_info.width,
                    info.pane_info.height,
                );
                log::trace!("splitter moved by ({}, {}): {:?}", delta.x, delta.y, resized);
                let next = DragInfo {
                    anchor: position,
                    ..info
                };
                (DragState::Dragging(next), Some(DragOutcome::Resized(resized)))
            }
            (DragState::Dragging(_), PaneEvent::Release(_)) => {
                log::debug!("splitter drag ended");
                (DragState::Idle, Some(DragOutcome::Ended))
            }
            (state, _) => (state, None),
        }
    }
}

/// Result of a transition that did something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragOutcome {
    Started,
    Resized(SizeUnit),
    Ended,
}

// ──────────────────────────────────────────────
// Read model
// ──────────────────────────────────────────────

/// Drag phase without geometry, for affordance styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Disabled,
    Idle,
    Dragging,
}

/// Pointer cursor the adapter should show over the splitter handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorHint {
    Default,
    ResizeColumn,
    ResizeRow,
}

impl DragPhase {
    pub fn cursor(self, orientation: Orientation) -> CursorHint {
        match (self, orientation) {
            (DragPhase::Disabled, _) => CursorHint::Default,
            (_, Orientation::Horizontal) => CursorHint::ResizeColumn,
            (_, Orientation::Vertical) => CursorHint::ResizeRow,
        }
    }
}
