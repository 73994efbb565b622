//! Scale math shared by per-node stepping and per-slab reveal.
//!
//! Every function here is pure. A single progress scalar is partitioned into `n` sequential
//! sub-progress values: index `i` only starts moving once the whole value passes `i / n`.

use crate::foundation::core::Rgba8Premul;

/// Number of nodes in the chain.
pub const NODES: usize = 5;
/// Number of slabs drawn inside each triangle.
pub const SLABS: usize = 4;
/// Base scale increment applied per tick.
pub const SC_GAP: f64 = 0.05;
/// Threshold that switches [`mirror_value`] between its two divisors.
pub const SC_DIV: f64 = 0.51;
/// Node size as a fraction of the vertical gap between nodes.
pub const SIZE_FACTOR: f64 = 2.8;
/// Stroke width as a fraction of the shorter canvas side.
pub const STROKE_FACTOR: f64 = 90.0;
/// Foreground color (`#673AB7`).
pub const FORE_COLOR: Rgba8Premul = Rgba8Premul::opaque(0x67, 0x3A, 0xB7);
/// Background color (`#BDBDBD`).
pub const BACK_COLOR: Rgba8Premul = Rgba8Premul::opaque(0xBD, 0xBD, 0xBD);

/// `1 / n`.
pub fn inverse(n: f64) -> f64 {
    1.0 / n
}

/// Progress of `value` past the start of partition `i` out of `n`, floored at zero.
pub fn max_scale(value: f64, i: f64, n: f64) -> f64 {
    (value - i / n).max(0.0)
}

/// Progress of partition `i` out of `n`, normalized to `[0, 1]` for `value` in `[0, 1]`.
pub fn divide_scale(value: f64, i: f64, n: f64) -> f64 {
    inverse(n).min(max_scale(value, i, n)) * n
}

/// `floor(value / SC_DIV)`: 0 below the threshold, 1 just above it.
pub fn scale_factor(value: f64) -> f64 {
    (value / SC_DIV).floor()
}

/// Blend between `1/a` and `1/b` depending on which side of [`SC_DIV`] `value` sits.
pub fn mirror_value(value: f64, a: f64, b: f64) -> f64 {
    let k = scale_factor(value);
    (1.0 - k) / a + k / b
}

/// Signed per-tick increment for a scale currently at `value`.
pub fn update_value(value: f64, direction: f64, a: f64, b: f64) -> f64 {
    mirror_value(value, a, b) * direction * SC_GAP
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scale.rs"]
mod tests;
