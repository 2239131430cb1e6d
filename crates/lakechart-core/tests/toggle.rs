// File: crates/lakechart-core/tests/toggle.rs
// Purpose: Validate the visibility state machine and its timed transitions.

use lakechart_core::toggle::{SHOW_RADIUS, SHOW_STROKE_WIDTH, TRANSITION_MS};
use lakechart_core::{
    Chart, DataRecord, RenderOptions, Scene, Series, ToggleControl, Visibility,
    VisibilityController,
};

const ID: &str = "glacier_712529";

fn scene() -> Scene {
    let mut chart = Chart::new("Glacier Lake Area (1985-2020)");
    chart.add_series(Series::new(
        ID,
        vec![
            DataRecord::new(1985, Some(40.12)),
            DataRecord::new(1990, Some(35.5)),
        ],
    ));
    chart.build_scene(&RenderOptions::default()).expect("scene")
}

fn attrs(scene: &Scene) -> (f64, Vec<f64>) {
    let sw = scene.paths().next().expect("path").stroke_width;
    let radii = scene.circles().map(|c| c.r).collect();
    (sw, radii)
}

#[test]
fn uncheck_hides_all_marks_of_the_series() {
    let mut scene = scene();
    let mut ctl = VisibilityController::new();

    let matched = ctl.click(&scene, &ToggleControl::new(ID, false));
    assert_eq!(matched, 3, "one path and two circles");
    assert_eq!(ctl.state(ID), Visibility::Hidden);

    ctl.advance(&mut scene, TRANSITION_MS);
    let (sw, radii) = attrs(&scene);
    assert_eq!(sw, 0.0);
    assert!(radii.iter().all(|&r| r == 0.0));
    assert_eq!(ctl.in_flight(), 0);
}

#[test]
fn recheck_restores_visible_targets() {
    let mut scene = scene();
    let mut ctl = VisibilityController::new();

    ctl.click(&scene, &ToggleControl::new(ID, false));
    ctl.finish(&mut scene);
    ctl.click(&scene, &ToggleControl::new(ID, true));
    ctl.finish(&mut scene);

    let (sw, radii) = attrs(&scene);
    assert_eq!(sw, SHOW_STROKE_WIDTH);
    assert!(radii.iter().all(|&r| r == SHOW_RADIUS));
    assert_eq!(ctl.state(ID), Visibility::Visible);
}

#[test]
fn toggling_twice_in_the_same_state_is_idempotent() {
    let mut scene = scene();
    let mut ctl = VisibilityController::new();

    ctl.click(&scene, &ToggleControl::new(ID, false));
    ctl.finish(&mut scene);
    let after_once = attrs(&scene);

    ctl.click(&scene, &ToggleControl::new(ID, false));
    ctl.finish(&mut scene);
    assert_eq!(attrs(&scene), after_once);
}

#[test]
fn mismatched_id_selects_zero_marks_without_error() {
    let mut scene = scene();
    let mut ctl = VisibilityController::new();

    let before = attrs(&scene);
    let matched = ctl.click(&scene, &ToggleControl::new("glacier_999999", false));
    assert_eq!(matched, 0);
    ctl.finish(&mut scene);
    assert_eq!(attrs(&scene), before, "no visible effect");
}

#[test]
fn midpoint_of_hide_is_half_way_with_cubic_easing() {
    let mut scene = scene();
    let mut ctl = VisibilityController::new();

    ctl.click(&scene, &ToggleControl::new(ID, false));
    ctl.advance(&mut scene, TRANSITION_MS / 2.0);
    // cubic-in-out is exactly 0.5 at t = 0.5
    let (sw, radii) = attrs(&scene);
    assert!((sw - SHOW_STROKE_WIDTH / 2.0).abs() < 1e-9);
    assert!(radii.iter().all(|&r| (r - SHOW_RADIUS / 2.0).abs() < 1e-9));
    assert_eq!(ctl.in_flight(), 3);
}

#[test]
fn reclick_mid_flight_replaces_the_transition_last_wins() {
    let mut scene = scene();
    let mut ctl = VisibilityController::new();

    ctl.click(&scene, &ToggleControl::new(ID, false));
    ctl.advance(&mut scene, TRANSITION_MS / 2.0);

    // Rapid double-toggle back to visible: the new transition starts from
    // the interpolated value and runs a full duration to the new target.
    ctl.click(&scene, &ToggleControl::new(ID, true));
    ctl.advance(&mut scene, TRANSITION_MS / 2.0);
    let (sw_mid, _) = attrs(&scene);
    assert!(sw_mid > 0.0 && sw_mid < SHOW_STROKE_WIDTH);

    ctl.advance(&mut scene, TRANSITION_MS / 2.0);
    let (sw, radii) = attrs(&scene);
    assert_eq!(sw, SHOW_STROKE_WIDTH);
    assert!(radii.iter().all(|&r| r == SHOW_RADIUS));
}

#[test]
fn advancing_with_nothing_in_flight_is_a_no_op() {
    let mut scene = scene();
    let mut ctl = VisibilityController::new();
    let before = attrs(&scene);
    ctl.advance(&mut scene, TRANSITION_MS);
    assert_eq!(attrs(&scene), before);
}
