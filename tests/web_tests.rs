//! Browser tests for the mounted widget
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use js_sys::Promise;
use selection_scroller::{ScrollerConfig, SelectionScroller};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Append a container with a table and a style element, both uniquely named.
fn fixture(name: &str) -> (Element, Element) {
    let doc = document();
    // Fixed cell size so a tall grid overflows the container.
    let layout = doc.create_element("style").unwrap();
    layout.set_text_content(Some(&format!(
        ".{name} td {{ width: 20px; height: 20px; padding: 0; }}"
    )));
    let container = doc.create_element("div").unwrap();
    container.set_class_name(name);
    container
        .set_attribute("style", "width: 400px; height: 300px; overflow: auto;")
        .unwrap();
    let table = doc.create_element("table").unwrap();
    container.append_child(&table).unwrap();
    let style = doc.create_element("style").unwrap();
    style.set_id(&format!("{name}-style"));
    let body = doc.body().unwrap();
    body.append_child(&layout).unwrap();
    body.append_child(&style).unwrap();
    body.append_child(&container).unwrap();
    (container, table)
}

fn config(name: &str, rows: u32, cols: u32) -> wasm_bindgen::JsValue {
    serde_wasm_bindgen::to_value(&ScrollerConfig {
        rows,
        cols,
        style_element_id: format!("{name}-style"),
        ..ScrollerConfig::default()
    })
    .unwrap()
}

fn cell(table: &Element, row: u32, col: u32) -> Element {
    table
        .query_selector(&format!("td[data-row=\"{row}\"][data-col=\"{col}\"]"))
        .unwrap()
        .unwrap()
}

fn style_text(name: &str) -> String {
    document()
        .get_element_by_id(&format!("{name}-style"))
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn fire(target: &Element, kind: &str) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn fire_at(target: &Element, kind: &str, client_x: f64, client_y: f64) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(client_x as i32);
    init.set_client_y(client_y as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Resolve after `ms` milliseconds of wall time.
async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Resolve on the next animation frame, after frames requested before it.
async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_mount_builds_table() {
    let (_container, table) = fixture("mount-builds");
    let _scroller =
        SelectionScroller::with_config(".mount-builds", config("mount-builds", 12, 4)).unwrap();
    assert_eq!(table.query_selector_all("tr").unwrap().length(), 12);
    assert_eq!(table.query_selector_all("td").unwrap().length(), 48);
}

#[wasm_bindgen_test]
fn test_missing_container_fails_fast() {
    let err = SelectionScroller::new(".does-not-exist").err().unwrap();
    let msg = err.as_string().unwrap();
    assert!(msg.contains("Missing mount point"), "{msg}");
}

#[wasm_bindgen_test]
fn test_empty_selector_is_invalid_config() {
    let (_container, _table) = fixture("empty-selector");
    for selector in ["", "   "] {
        let msg = SelectionScroller::with_config(selector, config("empty-selector", 2, 2))
            .err()
            .unwrap()
            .as_string()
            .unwrap();
        assert!(msg.contains("Invalid config"), "{msg}");
        assert!(msg.contains("selector must not be empty"), "{msg}");
    }
}

#[wasm_bindgen_test]
fn test_missing_style_element_fails_fast() {
    let (_container, _table) = fixture("no-style");
    let cfg = serde_wasm_bindgen::to_value(&ScrollerConfig {
        style_element_id: "nope".to_string(),
        ..ScrollerConfig::default()
    })
    .unwrap();
    let msg = SelectionScroller::with_config(".no-style", cfg)
        .err()
        .unwrap()
        .as_string()
        .unwrap();
    assert!(msg.contains("#nope"), "{msg}");
}

#[wasm_bindgen_test]
fn test_drag_selects_range() {
    let (_container, table) = fixture("drag-range");
    let scroller =
        SelectionScroller::with_config(".drag-range", config("drag-range", 10, 8)).unwrap();

    fire(&cell(&table, 3, 5), "mousedown");
    assert!(scroller.is_dragging());

    fire(&cell(&table, 7, 2), "mousemove");
    let css = scroller.selection_css();
    assert!(css.contains("tr:nth-child(n+4):nth-child(-n+8)"), "{css}");
    assert!(css.contains("td:nth-child(n+6):nth-child(-n+3)"), "{css}");

    fire(&cell(&table, 9, 7), "mouseup");
    assert!(!scroller.is_dragging());
    assert_eq!(scroller.selection_css(), css);
}

#[wasm_bindgen_test]
fn test_mousedown_outside_table_keeps_start_unset() {
    let (container, _table) = fixture("outside");
    let scroller = SelectionScroller::with_config(".outside", config("outside", 2, 2)).unwrap();
    fire(&container, "mousedown");
    assert!(scroller.is_dragging());
    assert_eq!(scroller.selection_css(), "");
    assert_eq!(scroller.scroll_speed(), vec![0.0, 0.0]);
}

#[wasm_bindgen_test]
fn test_rebuild_table_replaces_content() {
    let (_container, table) = fixture("rebuild");
    let scroller = SelectionScroller::with_config(".rebuild", config("rebuild", 6, 3)).unwrap();
    table.set_inner_html("<tr><td>stray</td></tr>");

    scroller.rebuild_table();
    scroller.rebuild_table();
    assert_eq!(table.query_selector_all("tr").unwrap().length(), 6);
    assert_eq!(table.query_selector_all("td").unwrap().length(), 18);
    assert!(!table.inner_html().contains("stray"));
}

#[wasm_bindgen_test]
async fn test_style_block_updated_on_next_frame() {
    let (_container, table) = fixture("style-frame");
    let scroller =
        SelectionScroller::with_config(".style-frame", config("style-frame", 10, 8)).unwrap();

    fire(&cell(&table, 1, 1), "mousedown");
    fire(&cell(&table, 4, 3), "mousemove");
    // Deferred to the animation frame, not written synchronously.
    assert_eq!(style_text("style-frame"), "");

    next_frame().await;
    let css = style_text("style-frame");
    assert!(css.contains("tr:nth-child(n+2):nth-child(-n+5)"), "{css}");
    assert!(css.contains("td:nth-child(n+2):nth-child(-n+4)"), "{css}");
    assert_eq!(css, scroller.selection_css());

    fire(&cell(&table, 4, 3), "mouseup");
}

#[wasm_bindgen_test]
async fn test_drag_past_bottom_edge_scrolls_container() {
    let (container, table) = fixture("autoscroll");
    let scroller =
        SelectionScroller::with_config(".autoscroll", config("autoscroll", 200, 20)).unwrap();
    assert!(container.scroll_height() > container.client_height());
    assert_eq!(container.scroll_top(), 0);

    let rect = container.get_bounding_client_rect();
    let start = cell(&table, 0, 0);
    fire(&start, "mousedown");
    fire_at(&start, "mousemove", rect.left() + 100.0, rect.bottom() + 100.0);
    assert!(scroller.scroll_speed()[1] > 0.0);

    sleep(200).await;
    assert!(container.scroll_top() > 0, "scrollTop {}", container.scroll_top());
    assert_eq!(container.scroll_left(), 0);

    // Released: the ticker stops moving the container.
    fire(&start, "mouseup");
    let settled = container.scroll_top();
    sleep(100).await;
    assert_eq!(container.scroll_top(), settled);
}
