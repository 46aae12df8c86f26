// Split pane controller
// Holds orientation, split position and drag state; turns adapter events
// into new states plus at most one notification.

mod drag;
mod regions;
mod resize;
mod settings;

pub use drag::{CursorHint, DragInfo, DragPhase, DragState};
pub use regions::{split_regions, SplitRegions};
pub use resize::resize;
pub use settings::{load_settings, SplitterSettings};

use splitpane_core::{Orientation, PaneDimensions, PaneEvent, SizeUnit};

use drag::DragOutcome;

// ──────────────────────────────────────────────
// UpdateConfig: optional notifications
// ──────────────────────────────────────────────

/// Messages to emit around a gesture. Absent entries emit nothing.
pub struct UpdateConfig<M> {
    pub on_resize_started: Option<M>,
    pub on_resize: Option<Box<dyn Fn(SizeUnit) -> M>>,
    pub on_resize_ended: Option<M>,
}

impl<M> Default for UpdateConfig<M> {
    fn default() -> Self {
        Self {
            on_resize_started: None,
            on_resize: None,
            on_resize_ended: None,
        }
    }
}

impl<M: Clone> UpdateConfig<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_resize_started(mut self, message: M) -> Self {
        self.on_resize_started = Some(message);
        self
    }

    pub fn on_resize(mut self, to_message: impl Fn(SizeUnit) -> M + 'static) -> Self {
        self.on_resize = Some(Box::new(to_message));
        self
    }

    pub fn on_resize_ended(mut self, message: M) -> Self {
        self.on_resize_ended = Some(message);
        self
    }

    fn notify(&self, outcome: DragOutcome) -> Option<M> {
        match outcome {
            DragOutcome::Started => self.on_resize_started.clone(),
            DragOutcome::Resized(size) => self.on_resize.as_ref().map(|f| f(size)),
            DragOutcome::Ended => self.on_resize_ended.clone(),
        }
    }
}

// ──────────────────────────────────────────────
// PaneState
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneState {
    orientation: Orientation,
    splitter_position: SizeUnit,
    drag_state: DragState,
}

impl PaneState {
    /// Draggable state with a 50% split.
    pub fn init(orientation: Orientation) -> Self {
        Self {
            orientation,
            splitter_position: SizeUnit::default(),
            drag_state: DragState::Idle,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn splitter_position(&self) -> SizeUnit {
        self.splitter_position
    }

    pub fn drag_state(&self) -> DragState {
        self.drag_state
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag_state.phase()
    }

    pub fn cursor(&self) -> CursorHint {
        self.drag_phase().cursor(self.orientation)
    }

    /// Regions for the two panes and the handle inside `container`.
    pub fn regions(&self, container: PaneDimensions, splitter_thickness: i32) -> SplitRegions {
        split_regions(
            self.orientation,
            &self.splitter_position,
            container,
            splitter_thickness,
        )
    }

    #[must_use]
    pub fn set_orientation(mut self, orientation: Orientation) -> Self {
        if self.orientation != orientation {
            log::debug!("splitter orientation set to {:?}", orientation);
        }
        self.orientation = orientation;
        self
    }

    /// Enable or disable dragging. Any gesture in progress is dropped.
    #[must_use]
    pub fn set_draggable(mut self, draggable: bool) -> Self {
        if matches!(self.drag_state, DragState::Dragging(_)) {
            log::debug!("splitter drag abandoned by draggable toggle");
        }
        log::debug!("splitter draggable set to {}", draggable);
        self.drag_state = DragState::from_draggable(draggable);
        self
    }

    /// Replace the split position wholesale.
    #[must_use]
    pub fn configure_splitter(mut self, size: SizeUnit) -> Self {
        self.splitter_position = size;
        self
    }

    /// Apply an event without emitting notifications.
    #[must_use]
    pub fn update(self, event: PaneEvent) -> Self {
        self.update_with(&UpdateConfig::<()>::default(), event).0
    }

    /// Apply an event and return the message `config` maps it to, if any.
    pub fn update_with<M: Clone>(
        mut self,
        config: &UpdateConfig<M>,
        event: PaneEvent,
    ) -> (Self, Option<M>) {
        let (drag_state, outcome) =
            self.drag_state
                .step(event, self.orientation, self.splitter_position);
        self.drag_state = drag_state;

        let Some(outcome) = outcome else {
            return (self, None);
        };
        if let DragOutcome::Resized(size) = outcome {
            self.splitter_position = size;
        }
        (self, config.notify(outcome))
    }
}

impl Default for PaneState {
    fn default() -> Self {
        Self::init(Orientation::default())
    }
}
