use serde::Serialize;

/// Pointer position in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerPosition {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Where the scroll container sits on screen and how large its client area is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerMetrics {
    /// Left edge of the bounding client rect
    pub left: f64,
    /// Top edge of the bounding client rect
    pub top: f64,
    /// `clientWidth` (excludes scrollbars)
    pub width: f64,
    /// `clientHeight` (excludes scrollbars)
    pub height: f64,
}

impl ContainerMetrics {
    /// Convert a client-space pointer to container-local `(x, y)`.
    pub fn local(&self, pointer: PointerPosition) -> (f64, f64) {
        (pointer.client_x - self.left, pointer.client_y - self.top)
    }
}

/// Auto-scroll velocity in pixels per tick, signed per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollVelocity {
    pub x: f64,
    pub y: f64,
}

impl ScrollVelocity {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}
