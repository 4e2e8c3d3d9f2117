//! Rotation/index mapping
//!
//! Maps a fixed anchor point on the dial's circumference to the slice
//! currently aligned with it, given the accumulated rotation, and back.
//! Rotation is unbounded real degrees (multi-turn, either sign); the
//! mapping reduces everything into the 114-slice ring.

use crate::slices::{self, Slice, TOTAL_SLICES};

/// Angular width of one slice in degrees
pub const SLICE_ANGLE: f64 = 360.0 / TOTAL_SLICES as f64;

/// Round half-up: `floor(x + 0.5)`.
///
/// Rust's `f64::round` rounds halves away from zero, which differs for
/// negative inputs (-0.5 rounds to -1 instead of 0). The dial mapping
/// depends on half-up behavior so both directions of rotation land on the
/// same slice boundary.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Zero-based index of the slice aligned with `point_value` at `rotation`.
///
/// `point_value` is the fixed 1-based anchor position on the circumference
/// (caller contract: 1..=114, not validated). A positive rotation moves the
/// slices clockwise, so the anchor aligns with an earlier slice index and
/// the offset is subtracted.
pub fn index_at_point(point_value: u32, rotation: f64) -> usize {
    let offset = rotation / 360.0 * TOTAL_SLICES as f64;
    let effective = (point_value as f64 - 1.0) - offset;
    round_half_up(effective).rem_euclid(TOTAL_SLICES as i64) as usize
}

/// Slice aligned with `point_value` at `rotation`
pub fn slice_at_point(point_value: u32, rotation: f64) -> &'static Slice {
    &slices::all()[index_at_point(point_value, rotation)]
}

/// Chapter number aligned with `point_value` at `rotation`
pub fn slice_id_at_point(point_value: u32, rotation: f64) -> u32 {
    slice_at_point(point_value, rotation).id
}

/// Rotation that aligns `slice_id` with anchor point 1
pub fn target_rotation(slice_id: u32) -> f64 {
    -((slice_id as f64 - 1.0) * SLICE_ANGLE)
}

/// Shortest angular path from `from_deg` to `to_deg`, in `(-180, 180]`.
///
/// Used by animated transitions so the dial always travels the short way
/// around, regardless of how many turns either rotation has accumulated.
pub fn shortest_delta(from_deg: f64, to_deg: f64) -> f64 {
    let delta = (to_deg - from_deg).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Ring distance between two chapters, in slices
pub fn wrapped_distance(a_id: u32, b_id: u32) -> u32 {
    let d = a_id.abs_diff(b_id);
    d.min(TOTAL_SLICES - d)
}

/// Convert polar coordinates to Cartesian, with 0 degrees at 12 o'clock
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let angle_rad = (angle_deg - 90.0).to_radians();
    (cx + radius * angle_rad.cos(), cy + radius * angle_rad.sin())
}
