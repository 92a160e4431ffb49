//! Pointer, selection and auto-scroll state machine.
//!
//! This is everything the widget does minus the DOM: the browser binding in
//! [`viewer`](crate::viewer) resolves event targets to cells, reads the clock
//! and the container geometry, and forwards them here. Keeping it free of
//! `web_sys` makes the whole interaction testable natively.
//!
//! States are `idle` and `dragging`:
//! - pointer-down enters `dragging`, anchors `start` and zeroes the velocity
//! - pointer-move always recomputes the velocity; while dragging it also
//!   moves `end`, at most once per style throttle interval
//! - pointer-up returns to `idle`; `end` is frozen unless the config commits it

use tracing::debug;

use crate::config::{PointerUpPolicy, ScrollerConfig};
use crate::grid::Grid;
use crate::speed::velocity_for_pointer;
use crate::style::{selection_css, BoundsMode};
use crate::throttle::Throttle;
use crate::types::{CellPosition, ContainerMetrics, PointerPosition, ScrollVelocity, Selection};

/// What the host must do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Nothing visible changed.
    None,
    /// The style changed and a frame is already queued.
    Pending,
    /// The style changed; schedule a frame and call [`Controller::render_frame`] in it.
    ScheduleFrame,
}

#[derive(Debug, Clone)]
pub struct Controller {
    config: ScrollerConfig,
    grid: Grid,
    selection: Selection,
    velocity: ScrollVelocity,
    dragging: bool,
    style_throttle: Throttle,
    frame_pending: bool,
}

impl Controller {
    pub fn new(config: ScrollerConfig) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        let style_throttle = Throttle::new(config.style_update_interval_ms);
        Self {
            config,
            grid,
            selection: Selection::default(),
            velocity: ScrollVelocity::ZERO,
            dragging: false,
            style_throttle,
            frame_pending: false,
        }
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn velocity(&self) -> ScrollVelocity {
        self.velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer pressed. `cell` is `None` when the target is not one of our cells.
    pub fn pointer_down(&mut self, cell: Option<CellPosition>) {
        self.dragging = true;
        self.velocity = ScrollVelocity::ZERO;
        if let Some(cell) = self.in_grid(cell) {
            self.selection.start = Some(cell);
        }
        debug!(start = ?self.selection.start, "drag started");
    }

    /// Pointer moved anywhere on the page.
    pub fn pointer_move(
        &mut self,
        pointer: PointerPosition,
        metrics: &ContainerMetrics,
        cell: Option<CellPosition>,
        now_ms: f64,
    ) -> Refresh {
        self.velocity = velocity_for_pointer(pointer, metrics, &self.config);
        if !self.dragging || !self.style_throttle.ready(now_ms) {
            return Refresh::None;
        }
        let Some(cell) = self.in_grid(cell) else {
            return Refresh::None;
        };
        self.style_throttle.stamp(now_ms);
        self.selection.end = Some(cell);
        self.request_frame()
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, cell: Option<CellPosition>) -> Refresh {
        let was_dragging = std::mem::replace(&mut self.dragging, false);
        debug!(end = ?self.selection.end, "drag ended");
        if !was_dragging || self.config.pointer_up_policy == PointerUpPolicy::Freeze {
            return Refresh::None;
        }
        match self.in_grid(cell) {
            Some(cell) => {
                self.selection.end = Some(cell);
                self.request_frame()
            }
            None => Refresh::None,
        }
    }

    /// One firing of the auto-scroll ticker.
    ///
    /// Returns the new scroll offset, or `None` when idle or not moving.
    pub fn tick(&self, scroll_offset: (f64, f64)) -> Option<(f64, f64)> {
        if !self.dragging || self.velocity.is_zero() {
            return None;
        }
        Some((
            scroll_offset.0 + self.velocity.x,
            scroll_offset.1 + self.velocity.y,
        ))
    }

    /// Style rule for the current selection, scoped to `container_selector`.
    pub fn selection_css(&self, container_selector: &str) -> String {
        selection_css(
            container_selector,
            &self.selection,
            BoundsMode::from_normalize_flag(self.config.normalize_bounds),
            &self.config.highlight_color,
        )
    }

    /// Run inside the scheduled frame: clears the pending flag and returns the rule to apply.
    pub fn render_frame(&mut self, container_selector: &str) -> String {
        self.frame_pending = false;
        self.selection_css(container_selector)
    }

    fn request_frame(&mut self) -> Refresh {
        if self.frame_pending {
            Refresh::Pending
        } else {
            self.frame_pending = true;
            Refresh::ScheduleFrame
        }
    }

    fn in_grid(&self, cell: Option<CellPosition>) -> Option<CellPosition> {
        cell.filter(|c| self.grid.contains(*c))
    }
}
