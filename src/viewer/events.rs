//! Mouse event handlers for `SelectionScroller`.
//!
//! Listeners live on `window`, so targets can be anything on the page. Cell
//! lookup only accepts grid cells inside our own table.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, MouseEvent, Node};

use super::{now_ms, Mount, SelectionScroller, SharedState};
use crate::controller::Refresh;
use crate::grid::{parse_cell_id, CELL_SELECTOR, COL_ATTR, ROW_ATTR};
use crate::types::{CellPosition, PointerPosition};

impl SelectionScroller {
    pub(crate) fn internal_mouse_down(
        state: &Rc<RefCell<SharedState>>,
        mount: &Mount,
        event: &MouseEvent,
    ) {
        let cell = cell_at_target(mount, event.target());
        state.borrow_mut().controller.pointer_down(cell);
    }

    pub(crate) fn internal_mouse_move(
        state: &Rc<RefCell<SharedState>>,
        mount: &Rc<Mount>,
        event: &MouseEvent,
    ) {
        let pointer = PointerPosition::new(f64::from(event.client_x()), f64::from(event.client_y()));
        let metrics = mount.metrics();
        let cell = cell_at_target(mount, event.target());
        let refresh = state
            .borrow_mut()
            .controller
            .pointer_move(pointer, &metrics, cell, now_ms());
        if refresh == Refresh::ScheduleFrame {
            Self::schedule_style_frame(state, mount);
        }
    }

    pub(crate) fn internal_mouse_up(
        state: &Rc<RefCell<SharedState>>,
        mount: &Rc<Mount>,
        event: &MouseEvent,
    ) {
        let cell = cell_at_target(mount, event.target());
        let refresh = state.borrow_mut().controller.pointer_up(cell);
        if refresh == Refresh::ScheduleFrame {
            Self::schedule_style_frame(state, mount);
        }
    }
}

/// Resolve an event target to a grid cell of this widget's table.
fn cell_at_target(mount: &Mount, target: Option<EventTarget>) -> Option<CellPosition> {
    let element = target?.dyn_into::<Element>().ok()?;
    let cell = element.closest(CELL_SELECTOR).ok()??;
    let node: &Node = &cell;
    if !mount.table.contains(Some(node)) {
        return None;
    }
    parse_cell_id(
        cell.get_attribute(ROW_ATTR).as_deref(),
        cell.get_attribute(COL_ATTR).as_deref(),
    )
}
