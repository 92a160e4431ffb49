//! Auto-scroll ticker and animation-frame style refresh for `SelectionScroller`.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::{Mount, SelectionScroller, SharedState};
use crate::error::{self, ScrollerError};

impl SelectionScroller {
    /// Start the recurring ticker. It runs until the widget is dropped.
    pub(crate) fn start_ticker(
        window: &Window,
        state: &Rc<RefCell<SharedState>>,
        mount: &Rc<Mount>,
        interval_ms: u32,
    ) -> error::Result<(Closure<dyn FnMut()>, i32)> {
        let weak_state = Rc::downgrade(state);
        let mount = Rc::clone(mount);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(state) = weak_state.upgrade() {
                Self::handle_tick(&state, &mount);
            }
        }) as Box<dyn FnMut()>);
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|e| ScrollerError::dom("setInterval", &e))?;
        Ok((closure, handle))
    }

    pub(crate) fn handle_tick(state: &Rc<RefCell<SharedState>>, mount: &Mount) {
        // Release the borrow before touching the DOM.
        let next = {
            let s = state.borrow();
            if !s.controller.is_dragging() {
                return;
            }
            s.controller.tick(mount.scroll_offset())
        };
        if let Some((x, y)) = next {
            mount.container.scroll_to_with_x_and_y(x, y);
        }
    }

    /// Queue a style refresh for the next animation frame.
    pub(crate) fn schedule_style_frame(state: &Rc<RefCell<SharedState>>, mount: &Rc<Mount>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        if s.frame_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let mount = Rc::clone(mount);
            let closure = Closure::wrap(Box::new(move |_timestamp: f64| {
                if let Some(state) = weak_state.upgrade() {
                    Self::handle_style_frame(&state, &mount);
                }
            }) as Box<dyn FnMut(f64)>);
            s.frame_closure = Some(closure);
        }
        let Some(callback) = s.frame_closure.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => s.frame_handle = Some(handle),
            Err(e) => {
                warn!(error = ?e, "requestAnimationFrame failed; applying style now");
                s.frame_handle = None;
                let css = s.controller.render_frame(&mount.selector);
                drop(s);
                mount.apply_style(&css);
            }
        }
    }

    pub(crate) fn handle_style_frame(state: &Rc<RefCell<SharedState>>, mount: &Mount) {
        let css = {
            let mut s = state.borrow_mut();
            s.frame_handle = None;
            s.controller.render_frame(&mount.selector)
        };
        debug!(css = %css, "selection style refreshed");
        mount.apply_style(&css);
    }
}
