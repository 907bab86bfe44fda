// Shared scroll/parallax tuning constants.

// Scroll motion
pub const EASING_FACTOR: f64 = 0.08; // fraction of the remaining gap closed per frame
pub const MOMENTUM_SCALE: f64 = -300.0; // release velocity (px/ms) -> offset kick
pub const WHEEL_MULTIPLIER: f64 = 2.0; // wheel delta -> offset delta

// Hero image parallax
pub const HERO_IMAGE_SHIFT: f64 = 40.0;
pub const HERO_IMAGE_SCALE: f64 = 0.03;

// Background image parallax
pub const BG_IMAGE_SHIFT: f64 = 35.0;
pub const BG_IMAGE_SCALE: f64 = 0.025;

// Whole-section parallax for text/white/final sections
pub const OVERLAY_SECTION_SHIFT: f64 = 80.0;
pub const OVERLAY_SECTION_SCALE: f64 = 0.02;

// Whole-section parallax for image-background sections
pub const IMAGE_SECTION_SHIFT: f64 = 20.0;

// Text parallax: shift = distance * (BASE + index * STEP)
pub const TEXT_SHIFT_BASE: f64 = 3.0;
pub const TEXT_SHIFT_STEP: f64 = 0.5;
pub const TEXT_FADE: f64 = 0.15;
pub const TEXT_MIN_OPACITY: f64 = 0.7; // keeps text readable at the edges

// Load-in stagger
pub const STAGGER_STEP_MS: u32 = 200;
pub const STAGGER_START_SHIFT_PX: f64 = 100.0;

// Keep the parallax CSS hint low on devices with few cores
pub const LOW_CORE_THRESHOLD: u32 = 2;
pub const LOW_CORE_INTENSITY: f64 = 0.5;
pub const FULL_INTENSITY: f64 = 1.0;
