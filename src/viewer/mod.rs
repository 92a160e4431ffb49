//! `SelectionScroller` - the WASM-exported widget.
//!
//! This module owns the browser side of the widget:
//! - Locating the container, table and style mount points
//! - Writing the grid markup into the table
//! - Listening to `mousedown`/`mousemove`/`mouseup` on `window`
//! - Running the auto-scroll ticker and the animation-frame style refresh
//!
//! All interaction state lives in a [`Controller`] shared with the event
//! closures through `Rc<RefCell<SharedState>>`.

mod events;
mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use tracing::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, Window};

use crate::config::ScrollerConfig;
use crate::controller::Controller;
use crate::error::{self, ScrollerError};
use crate::types::ContainerMetrics;

/// Elements the widget is mounted on. Shared read-only with every closure.
pub(crate) struct Mount {
    pub(crate) selector: String,
    pub(crate) container: Element,
    pub(crate) table: Element,
    pub(crate) style_element: Element,
}

impl Mount {
    fn locate(window: &Window, selector: &str, style_element_id: &str) -> error::Result<Self> {
        let document = window.document().ok_or(ScrollerError::NoWindow)?;
        let container = document
            .query_selector(selector)
            .map_err(|e| ScrollerError::dom("querySelector", &e))?
            .ok_or_else(|| ScrollerError::MissingMountPoint(format!("container `{selector}`")))?;
        let table = container
            .query_selector("table")
            .map_err(|e| ScrollerError::dom("querySelector", &e))?
            .ok_or_else(|| {
                ScrollerError::MissingMountPoint(format!("`table` inside `{selector}`"))
            })?;
        let style_element = document.get_element_by_id(style_element_id).ok_or_else(|| {
            ScrollerError::MissingMountPoint(format!("style element `#{style_element_id}`"))
        })?;
        Ok(Self {
            selector: selector.to_string(),
            container,
            table,
            style_element,
        })
    }

    pub(crate) fn metrics(&self) -> ContainerMetrics {
        let rect = self.container.get_bounding_client_rect();
        ContainerMetrics {
            left: rect.left(),
            top: rect.top(),
            width: f64::from(self.container.client_width()),
            height: f64::from(self.container.client_height()),
        }
    }

    /// Current scroll offset, keeping fractional pixels where the browser reports them.
    pub(crate) fn scroll_offset(&self) -> (f64, f64) {
        (
            scroll_f64(&self.container, "scrollLeft", self.container.scroll_left()),
            scroll_f64(&self.container, "scrollTop", self.container.scroll_top()),
        )
    }

    pub(crate) fn apply_style(&self, css: &str) {
        self.style_element.set_text_content(Some(css));
    }
}

fn scroll_f64(element: &Element, property: &str, fallback: i32) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str(property))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(fallback))
}

/// Monotonic clock in milliseconds.
pub(crate) fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

/// State shared by the widget and its event closures.
pub(crate) struct SharedState {
    pub(crate) controller: Controller,
    pub(crate) frame_closure: Option<Closure<dyn FnMut(f64)>>,
    pub(crate) frame_handle: Option<i32>,
}

/// Drag-select table widget with edge-proximity auto-scroll.
#[wasm_bindgen]
pub struct SelectionScroller {
    state: Rc<RefCell<SharedState>>,
    mount: Rc<Mount>,
    window: Window,
    listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
    #[allow(dead_code)] // Kept alive for the interval
    tick_closure: Closure<dyn FnMut()>,
    tick_handle: i32,
}

#[wasm_bindgen]
impl SelectionScroller {
    /// Mount on the container matching `selector` with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str) -> Result<SelectionScroller, JsValue> {
        Ok(Self::mount(selector, ScrollerConfig::default())?)
    }

    /// Mount with a configuration object; omitted keys take their defaults.
    #[wasm_bindgen(js_name = "withConfig")]
    pub fn with_config(selector: &str, config: JsValue) -> Result<SelectionScroller, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            ScrollerConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<ScrollerConfig>(config)
                .map_err(|e| ScrollerError::InvalidConfig(e.to_string()))?
        };
        Ok(Self::mount(selector, config)?)
    }

    /// Rewrite the whole table. Existing content is replaced.
    #[wasm_bindgen(js_name = "rebuildTable")]
    pub fn rebuild_table(&self) {
        let html = self.state.borrow().controller.grid().to_html();
        self.mount.table.set_inner_html(&html);
    }

    /// `{ start, end }`, each `{ col, row }` or `null`.
    #[wasm_bindgen]
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        let selection = self.state.borrow().controller.selection();
        serde_wasm_bindgen::to_value(&selection)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Current auto-scroll velocity `[x, y]` in pixels per tick.
    #[wasm_bindgen(js_name = "scrollSpeed")]
    pub fn scroll_speed(&self) -> Vec<f64> {
        let v = self.state.borrow().controller.velocity();
        vec![v.x, v.y]
    }

    #[wasm_bindgen(js_name = "isDragging")]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().controller.is_dragging()
    }

    /// The rule currently describing the selection.
    ///
    /// Read from the state, not the style block, so it can differ from what is
    /// drawn: it leads the block by up to one frame, and after a click without
    /// movement it pairs the new `start` with the previous drag's `end` while
    /// the block still shows the old rectangle. Both agree again on the next
    /// throttled move.
    #[wasm_bindgen(js_name = "selectionCss")]
    pub fn selection_css(&self) -> String {
        self.state
            .borrow()
            .controller
            .selection_css(&self.mount.selector)
    }

    #[wasm_bindgen]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.state.borrow().controller.config())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

impl SelectionScroller {
    fn mount(selector: &str, config: ScrollerConfig) -> error::Result<Self> {
        console_error_panic_hook::set_once();
        config.validate()?;
        if selector.trim().is_empty() {
            return Err(ScrollerError::InvalidConfig(
                "selector must not be empty".to_string(),
            ));
        }

        let window = web_sys::window().ok_or(ScrollerError::NoWindow)?;
        let mount = Rc::new(Mount::locate(&window, selector, &config.style_element_id)?);
        let tick_interval_ms = config.tick_interval_ms;

        let state = Rc::new(RefCell::new(SharedState {
            controller: Controller::new(config),
            frame_closure: None,
            frame_handle: None,
        }));

        let grid = state.borrow().controller.grid();
        mount.table.set_inner_html(&grid.to_html());

        let listeners = Self::register_listeners(&window, &state, &mount)?;
        let (tick_closure, tick_handle) =
            Self::start_ticker(&window, &state, &mount, tick_interval_ms)?;

        info!(
            selector,
            rows = grid.rows(),
            cols = grid.cols(),
            tick_interval_ms,
            "selection scroller mounted"
        );

        Ok(Self {
            state,
            mount,
            window,
            listeners,
            tick_closure,
            tick_handle,
        })
    }

    fn register_listeners(
        window: &Window,
        state: &Rc<RefCell<SharedState>>,
        mount: &Rc<Mount>,
    ) -> error::Result<Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>> {
        let mut listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)> = Vec::new();

        // Mouse down
        {
            let state = Rc::clone(state);
            let mount = Rc::clone(mount);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                Self::internal_mouse_down(&state, &mount, &event);
            }) as Box<dyn FnMut(MouseEvent)>);
            listeners.push(("mousedown", closure));
        }

        // Mouse move (velocity + throttled selection end)
        {
            let state = Rc::clone(state);
            let mount = Rc::clone(mount);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                Self::internal_mouse_move(&state, &mount, &event);
            }) as Box<dyn FnMut(MouseEvent)>);
            listeners.push(("mousemove", closure));
        }

        // Mouse up
        {
            let state = Rc::clone(state);
            let mount = Rc::clone(mount);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                Self::internal_mouse_up(&state, &mount, &event);
            }) as Box<dyn FnMut(MouseEvent)>);
            listeners.push(("mouseup", closure));
        }

        for (name, closure) in &listeners {
            window
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                .map_err(|e| ScrollerError::dom("addEventListener", &e))?;
        }
        Ok(listeners)
    }
}

impl Drop for SelectionScroller {
    fn drop(&mut self) {
        for (name, closure) in &self.listeners {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                warn!(event = name, error = ?e, "failed to remove listener");
            }
        }
        self.window.clear_interval_with_handle(self.tick_handle);
        if let Some(handle) = self.state.borrow_mut().frame_handle.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}
