//! Edge-proximity speed model tests
//!
//! Covers the dead zone, the power-law ramp, saturation and the per-tick
//! rescaling, on both axes and both edges.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use selection_scroller::speed::{axis_scrolloff, axis_speed, velocity_for_pointer};
use selection_scroller::{ContainerMetrics, PointerPosition, ScrollerConfig};
use test_case::test_case;

const EPS: f64 = 1e-9;

fn container(width: f64, height: f64) -> ContainerMetrics {
    ContainerMetrics {
        left: 0.0,
        top: 0.0,
        width,
        height,
    }
}

// =============================================================================
// SCROLLOFF
// =============================================================================

#[test_case(10.0, -40.0 ; "inside near band")]
#[test_case(0.0, -50.0 ; "on near edge")]
#[test_case(-30.0, -80.0 ; "past near edge")]
#[test_case(50.0, 0.0 ; "on near band boundary")]
#[test_case(500.0, 0.0 ; "middle")]
#[test_case(950.0, 0.0 ; "on far band boundary")]
#[test_case(960.0, 10.0 ; "inside far band")]
#[test_case(1100.0, 150.0 ; "past far edge")]
fn scrolloff_for_position(position: f64, expected: f64) {
    assert_eq!(axis_scrolloff(position, 1000.0, 50.0), expected);
}

// =============================================================================
// SPEED
// =============================================================================

#[test]
fn test_zero_scrolloff_is_zero_velocity() {
    let config = ScrollerConfig::default();
    assert_eq!(axis_speed(0.0, &config), 0.0);
    let v = velocity_for_pointer(
        PointerPosition::new(500.0, 300.0),
        &container(1000.0, 600.0),
        &config,
    );
    assert_eq!(v.x, 0.0);
    assert_eq!(v.y, 0.0);
}

#[test_case(150.0, 30.0 ; "at max scrolloff")]
#[test_case(151.0, 30.0 ; "just past max")]
#[test_case(10_000.0, 30.0 ; "far past max")]
#[test_case(-150.0, -30.0 ; "negative at max")]
#[test_case(-2_000.0, -30.0 ; "negative far past max")]
fn speed_saturates(scrolloff: f64, expected: f64) {
    let config = ScrollerConfig::default();
    assert!((axis_speed(scrolloff, &config) - expected).abs() < EPS);
}

#[test]
fn test_speed_monotonic_up_to_max_scrolloff() {
    let config = ScrollerConfig::default();
    let mut previous = 0.0;
    for step in 0..=1500 {
        let scrolloff = f64::from(step) / 10.0;
        let positive = axis_speed(scrolloff, &config);
        let negative = axis_speed(-scrolloff, &config);
        assert!(positive >= previous, "dropped at {scrolloff}");
        assert!((positive + negative).abs() < EPS, "asymmetric at {scrolloff}");
        previous = positive;
    }
}

#[test]
fn test_left_edge_scenario() {
    // Container 1000 wide, pointer 10 px in from the left edge.
    let config = ScrollerConfig::default();
    let v = velocity_for_pointer(
        PointerPosition::new(210.0, 300.0),
        &ContainerMetrics {
            left: 200.0,
            top: 0.0,
            width: 1000.0,
            height: 600.0,
        },
        &config,
    );
    assert!((v.x - (-2.133_333_333_333_333)).abs() < 1e-6, "{}", v.x);
    assert_eq!(v.y, 0.0);
}

#[test]
fn test_linear_exponent() {
    let config = ScrollerConfig {
        speed_exponent: 1.0,
        ..ScrollerConfig::default()
    };
    // 75 / 150 * 300 / 10
    assert!((axis_speed(75.0, &config) - 15.0).abs() < EPS);
}

#[test]
fn test_distance_per_second_independent_of_tick() {
    let fast = ScrollerConfig {
        tick_interval_ms: 5,
        ..ScrollerConfig::default()
    };
    let slow = ScrollerConfig {
        tick_interval_ms: 20,
        ..ScrollerConfig::default()
    };
    let per_second = |c: &ScrollerConfig| axis_speed(90.0, c) * (1000.0 / c.tick_interval());
    assert!((per_second(&fast) - per_second(&slow)).abs() < 1e-6);
}

#[test]
fn test_corner_scrolls_both_axes() {
    let config = ScrollerConfig::default();
    let v = velocity_for_pointer(
        PointerPosition::new(1200.0, 700.0),
        &container(1000.0, 600.0),
        &config,
    );
    assert!((v.x - 30.0).abs() < EPS);
    assert!((v.y - 30.0).abs() < EPS);
}
