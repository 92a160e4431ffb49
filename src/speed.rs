//! Edge-proximity scroll-speed model.
//!
//! Each axis has a dead-zone band of `scroll_margin` pixels along both edges.
//! Inside the container, away from the band, the velocity is zero. Once the
//! pointer enters the band (or leaves the container) the distance past the
//! band's inner boundary, the *scrolloff*, drives a power-law ramp:
//!
//! ```text
//! speed = min(|scrolloff|^E / max_scrolloff^E * max_speed, max_speed)
//! ```
//!
//! The speed is divided by the tick period because it is applied once per
//! tick, so distance per second does not depend on how often the ticker runs.

use crate::config::ScrollerConfig;
use crate::types::{ContainerMetrics, PointerPosition, ScrollVelocity};

/// Signed distance past the dead-zone band along one axis.
///
/// Negative toward the near edge, positive toward the far edge, zero inside.
/// A position exactly on the band boundary yields zero.
pub fn axis_scrolloff(position: f64, size: f64, margin: f64) -> f64 {
    if position < margin {
        position - margin
    } else if position > size - margin {
        position - size + margin
    } else {
        0.0
    }
}

/// Scrolloff on both axes for a pointer in client coordinates.
pub fn pointer_scrolloff(
    pointer: PointerPosition,
    metrics: &ContainerMetrics,
    config: &ScrollerConfig,
) -> (f64, f64) {
    let (x, y) = metrics.local(pointer);
    (
        axis_scrolloff(x, metrics.width, config.scroll_margin),
        axis_scrolloff(y, metrics.height, config.scroll_margin),
    )
}

/// Per-tick scroll distance for a single axis scrolloff.
pub fn axis_speed(scrolloff: f64, config: &ScrollerConfig) -> f64 {
    if scrolloff == 0.0 || !scrolloff.is_finite() {
        return 0.0;
    }
    let exp_scrolloff = scrolloff.abs().powf(config.speed_exponent);
    let exp_max = config.max_scrolloff.powf(config.speed_exponent);
    let speed = (exp_scrolloff / exp_max * config.max_speed).min(config.max_speed);
    speed / config.tick_interval() * scrolloff.signum()
}

/// Velocity for the current pointer position.
pub fn velocity_for_pointer(
    pointer: PointerPosition,
    metrics: &ContainerMetrics,
    config: &ScrollerConfig,
) -> ScrollVelocity {
    let (off_x, off_y) = pointer_scrolloff(pointer, metrics, config);
    ScrollVelocity {
        x: axis_speed(off_x, config),
        y: axis_speed(off_y, config),
    }
}
