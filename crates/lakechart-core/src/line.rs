// File: crates/lakechart-core/src/line.rs
// Summary: Path generation: polyline segments with gap skipping over missing values.

use crate::record::DataRecord;
use crate::scale::LinearScale;

/// Convert records into drawable polyline segments.
///
/// Consecutive records with a defined `surface_area` join one segment; a
/// missing value ends the current segment, so gaps break the line into
/// disjoint pieces instead of erroring. A lone defined record between gaps
/// yields a one-point segment (nothing visible, but nothing lost either).
pub fn segments(records: &[DataRecord], x: &LinearScale, y: &LinearScale) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut cur: Vec<(f64, f64)> = Vec::new();
    for r in records {
        match r.surface_area {
            Some(v) => cur.push((x.scale(r.year as f64), y.scale(v))),
            None => {
                if !cur.is_empty() {
                    out.push(std::mem::take(&mut cur));
                }
            }
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}
