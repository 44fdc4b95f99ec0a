//! Saturating 16-bit brightness arithmetic.
//!
//! Every ramping or decaying effect mutates LED values through these
//! primitives so brightness can never wrap around the ends of the range.

/// Add with saturation at `u16::MAX`.
#[inline]
pub const fn sat_add(a: u16, b: u16) -> u16 {
    a.saturating_add(b)
}

/// Subtract with saturation at zero.
#[inline]
pub const fn sat_sub(a: u16, b: u16) -> u16 {
    a.saturating_sub(b)
}

/// Apply a signed offset with saturation at both ends.
///
/// The offset is `i32` so a full-range `target - current` difference can be
/// passed straight through.
#[inline]
pub const fn sat_offset(value: u16, delta: i32) -> u16 {
    if delta >= 0 {
        let step = if delta > 0xffff { 0xffff } else { delta as u16 };
        value.saturating_add(step)
    } else {
        let step = if delta < -0xffff { 0xffff } else { delta.unsigned_abs() as u16 };
        value.saturating_sub(step)
    }
}
