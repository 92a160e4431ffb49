//! selection-scroller - drag-select table cells in the browser
//!
//! Renders a large HTML table and lets the user drag out a rectangular
//! selection, auto-scrolling the container while the pointer is near or past
//! its edges:
//! - Quadratic "magnetic edge" speed ramp, independent of the tick rate
//! - Throttled, frame-aligned style refresh (one structural CSS rule)
//! - Cells carry explicit `(row, col)` identifiers; no DOM index walking
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SelectionScroller } from 'selection-scroller';
//! await init();
//! const scroller = new SelectionScroller('.table-container');
//! // or: SelectionScroller.withConfig('.table-container', { rows: 50, normalizeBounds: true });
//! ```
//!
//! The page must provide the container (with a `<table>` inside) and a
//! `<style id="scroll-selection-style">` element.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod speed;
pub mod style;
pub mod throttle;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::{PointerUpPolicy, ScrollerConfig};
pub use controller::{Controller, Refresh};
pub use error::ScrollerError;
pub use grid::Grid;
pub use types::*;
#[cfg(target_arch = "wasm32")]
pub use viewer::SelectionScroller;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
