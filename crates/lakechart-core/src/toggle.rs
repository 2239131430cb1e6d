// File: crates/lakechart-core/src/toggle.rs
// Summary: Checkbox-driven visibility state machine with timed show/hide transitions.

use std::collections::HashMap;

use crate::mark::{Mark, Scene};

/// Fixed transition duration.
pub const TRANSITION_MS: f64 = 1000.0;
/// Visible target for a series line.
pub const SHOW_STROKE_WIDTH: f64 = 1.0;
/// Visible target for point markers.
pub const SHOW_RADIUS: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// External checkbox entity: identified by an id matching a series id,
/// observed via clicks, never written back.
#[derive(Clone, Debug)]
pub struct ToggleControl {
    pub id: String,
    pub checked: bool,
}

impl ToggleControl {
    pub fn new(id: impl Into<String>, checked: bool) -> Self {
        Self { id: id.into(), checked }
    }
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    from: f64,
    to: f64,
    elapsed_ms: f64,
}

/// Drives mark visibility from toggle clicks, one independent state machine
/// per series id. Transitions are keyed per mark, so a re-click replaces an
/// in-flight transition and restarts from the current interpolated value:
/// the last transition wins.
#[derive(Debug, Default)]
pub struct VisibilityController {
    states: HashMap<String, Visibility>,
    transitions: HashMap<usize, Transition>,
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a toggle id. Marks start at their visible targets
    /// regardless of a control's initial checked state, so the default here
    /// is Visible.
    pub fn state(&self, id: &str) -> Visibility {
        self.states.get(id).copied().unwrap_or(Visibility::Visible)
    }

    /// Number of transitions still in flight.
    pub fn in_flight(&self) -> usize {
        self.transitions.len()
    }

    /// Handle a click that left `control` in its current checked state.
    ///
    /// Retargets every mark whose class equals the control's id: path
    /// stroke-width and circle radius animate to their visible targets when
    /// checked, to 0 when unchecked. Returns how many marks matched; 0
    /// signals an id/class mismatch and is not an error.
    pub fn click(&mut self, scene: &Scene, control: &ToggleControl) -> usize {
        let vis = if control.checked { Visibility::Visible } else { Visibility::Hidden };
        self.states.insert(control.id.clone(), vis);

        let mut matched = 0usize;
        for (idx, mark) in scene.marks.iter().enumerate() {
            let (from, to) = match mark {
                Mark::Path(p) if p.class == control.id => {
                    (p.stroke_width, if control.checked { SHOW_STROKE_WIDTH } else { 0.0 })
                }
                Mark::Circle(c) if c.class == control.id => {
                    (c.r, if control.checked { SHOW_RADIUS } else { 0.0 })
                }
                _ => continue,
            };
            matched += 1;
            self.transitions.insert(idx, Transition { from, to, elapsed_ms: 0.0 });
        }
        matched
    }

    /// Advance all in-flight transitions by `dt_ms`, writing interpolated
    /// attribute values into the scene. Finished transitions are dropped at
    /// their exact terminal value.
    pub fn advance(&mut self, scene: &mut Scene, dt_ms: f64) {
        let mut done = Vec::new();
        for (&idx, tr) in self.transitions.iter_mut() {
            tr.elapsed_ms = (tr.elapsed_ms + dt_ms).min(TRANSITION_MS);
            let t = tr.elapsed_ms / TRANSITION_MS;
            let v = tr.from + (tr.to - tr.from) * ease_cubic_in_out(t);
            match scene.marks.get_mut(idx) {
                Some(Mark::Path(p)) => p.stroke_width = v,
                Some(Mark::Circle(c)) => c.r = v,
                _ => {}
            }
            if tr.elapsed_ms >= TRANSITION_MS {
                done.push(idx);
            }
        }
        for idx in done {
            self.transitions.remove(&idx);
        }
    }

    /// Run every in-flight transition to its terminal value immediately.
    pub fn finish(&mut self, scene: &mut Scene) {
        self.advance(scene, TRANSITION_MS);
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
