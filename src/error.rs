//! Structured error types for selection-scroller.

/// All errors that can occur while mounting or driving the widget.
#[derive(Debug, thiserror::Error)]
pub enum ScrollerError {
    /// A required element (container, table or style block) was not found.
    #[error("Missing mount point: {0}")]
    MissingMountPoint(String),

    /// No global `window` or `document` is available.
    #[error("No browser window/document available")]
    NoWindow,

    /// A DOM call raised an exception.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be read.
    #[error("Config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrollerError>;

#[cfg(target_arch = "wasm32")]
impl From<ScrollerError> for wasm_bindgen::JsValue {
    fn from(e: ScrollerError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl ScrollerError {
    /// Wrap a thrown JS value, keeping its string form when it has one.
    pub(crate) fn dom(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(format!("{context}: {detail}"))
    }
}
