//! One-shot load-in: every section starts hidden and shifted right, then
//! settles one after another.

use crate::constants::{STAGGER_START_SHIFT_PX, STAGGER_STEP_MS};
use crate::effects::Transform;

pub const SETTLE_TRANSITION: &str = "opacity 0.8s ease-out, transform 0.8s ease-out";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadInStyle {
    pub opacity: f64,
    pub transform: Transform,
}

pub const HIDDEN: LoadInStyle = LoadInStyle {
    opacity: 0.0,
    transform: Transform::TranslateX(STAGGER_START_SHIFT_PX),
};

pub const SETTLED: LoadInStyle = LoadInStyle {
    opacity: 1.0,
    transform: Transform::TranslateX(0.0),
};

#[inline]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
}

/// `(index, delay_ms)` for each of `count` sections.
pub fn schedule(count: usize) -> impl Iterator<Item = (usize, u32)> {
    (0..count).map(|i| (i, stagger_delay_ms(i)))
}
