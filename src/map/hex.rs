//! Axial hex-grid primitives.

use serde_json::Value;

/// Hex distance from the map center for axial coordinates `(x, y)`.
///
/// `max(|x|, |y|, |x - y|)` is the cube-coordinate distance specialized to
/// the center; it decides which ring a tile belongs to, so no other metric
/// may be substituted.
pub fn distance(x: i64, y: i64) -> i64 {
    x.abs().max(y.abs()).max((x - y).abs())
}

/// Hex distance from the center for a position stored in the document.
///
/// A position is a mapping with numeric `x`/`y` fields; a missing or
/// non-numeric coordinate counts as 0, and anything that is not a mapping
/// sits at the center.
pub fn position_distance(pos: &Value) -> i64 {
    match pos {
        Value::Object(map) => distance(coord(map.get("x")), coord(map.get("y"))),
        _ => 0,
    }
}

fn coord(field: Option<&Value>) -> i64 {
    let Some(v) = field else { return 0 };
    v.as_i64()
        .or_else(|| v.as_f64().map(|f| f as i64))
        .unwrap_or(0)
}

/// Number of tiles in a full spiral tile list of the given radius.
///
/// The list is ring-major, so the radius-`r` list is a strict prefix of any
/// larger one.
pub fn tile_count(radius: i64) -> usize {
    if radius <= 0 {
        return 1;
    }
    (1 + 3 * radius * (radius - 1)) as usize
}
