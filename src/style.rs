//! Selection style-rule generation.
//!
//! The highlighted rectangle is expressed as one structural CSS rule using
//! 1-based `:nth-child(n+X):nth-child(-n+Y)` ranges on rows and cells, so no
//! per-cell class toggling is needed.

use std::fmt::Write;

use crate::types::{Selection, SelectionSpan};

/// How the span is derived from the selection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsMode {
    /// `start` is the lower bound and `end` the upper bound, unsorted.
    #[default]
    AsDragged,
    /// Bounds sorted per axis.
    Normalized,
}

impl BoundsMode {
    pub const fn from_normalize_flag(normalize: bool) -> Self {
        if normalize {
            Self::Normalized
        } else {
            Self::AsDragged
        }
    }

    pub fn span(self, selection: &Selection) -> Option<SelectionSpan> {
        match self {
            Self::AsDragged => selection.raw_span(),
            Self::Normalized => selection.normalized_span(),
        }
    }
}

/// Build the style rule for a selection.
///
/// Returns an empty string while either endpoint is unset.
pub fn selection_css(
    container_selector: &str,
    selection: &Selection,
    mode: BoundsMode,
    color: &str,
) -> String {
    let Some(span) = mode.span(selection) else {
        return String::new();
    };
    span_css(container_selector, &span, color)
}

/// Build the style rule for an explicit span.
pub fn span_css(container_selector: &str, span: &SelectionSpan, color: &str) -> String {
    let mut css = String::with_capacity(160);
    let _ = write!(
        css,
        "{container_selector} tr:nth-child(n+{}):nth-child(-n+{}) \
         td:nth-child(n+{}):nth-child(-n+{}) {{ background-color: {color}; }}",
        u64::from(span.first_row) + 1,
        u64::from(span.last_row) + 1,
        u64::from(span.first_col) + 1,
        u64::from(span.last_col) + 1,
    );
    css
}
