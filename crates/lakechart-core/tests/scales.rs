// File: crates/lakechart-core/tests/scales.rs
// Purpose: Validate scale range endpoints and the fixed vertical domain.

use lakechart_core::axis::{self, Axis, TickFormat};
use lakechart_core::scale;

#[test]
fn x_scale_maps_year_extent_to_range_endpoints() {
    let x = scale::x_scale((1985, 2020), 924.0);
    assert_eq!(x.range(), (0.0, 924.0));
    assert!((x.scale(1985.0) - 0.0).abs() < 1e-9);
    assert!((x.scale(2020.0) - 924.0).abs() < 1e-9);
}

#[test]
fn y_scale_has_fixed_domain_regardless_of_data() {
    // No data feeds this scale at all; 0 maps to the bottom, 100 to the top.
    let y = scale::y_scale(540.0);
    assert!((y.scale(0.0) - 540.0).abs() < 1e-9);
    assert!((y.scale(100.0) - 0.0).abs() < 1e-9);
    assert_eq!(y.domain(), (0.0, 100.0));
}

#[test]
fn degenerate_x_domain_does_not_divide_by_zero() {
    let x = scale::x_scale((2000, 2000), 924.0);
    assert!(x.scale(2000.0).is_finite());
}

#[test]
fn nice_ticks_cover_percent_domain() {
    let t = axis::ticks(0.0, 100.0, 6);
    assert_eq!(t, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn year_ticks_format_as_plain_integers() {
    let ax = Axis::new("", TickFormat::Integer);
    assert_eq!(ax.format_tick(1985.0), "1985");
    // no thousands separators
    assert_eq!(ax.format_tick(2020.0), "2020");
}

#[test]
fn ticks_stay_inside_the_domain() {
    for t in axis::ticks(1985.0, 2020.0, 6) {
        assert!(t >= 1985.0 - 1e-9 && t <= 2020.0 + 1e-9, "tick {t} out of domain");
    }
}
