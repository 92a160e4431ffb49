//! Data types shared by the widget, its state machine and the CLI.

mod cell;
mod geometry;
mod selection;

pub use cell::*;
pub use geometry::*;
pub use selection::*;
