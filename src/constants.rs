//! Compile-time defaults for [`crate::config::FieldConfig`].
//!
//! The values reproduce the look of the landing page: a sparse network of
//! small bulbs drifting slowly, linked within 150 px, with brighter lines
//! reaching out to the pointer.

// ── Store ────────────────────────────────────────────────────────────────────
pub const SHAPE_COUNT: usize = 60;
pub const SIZE_MIN: f64 = 2.0;
pub const SIZE_MAX: f64 = 4.0;
/// Per-axis spawn velocity range in px/frame.
pub const SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 1.5;
/// Share of the shapes drawn as rotated prisms rather than orbs.
pub const PRISM_SHARE: f64 = 0.3;

// ── Pulse / rotation ─────────────────────────────────────────────────────────
pub const PULSE_FACTOR: f64 = 0.25;
pub const PULSE_SPEED_MIN: f64 = 0.02;
pub const PULSE_SPEED_MAX: f64 = 0.05;
pub const ROTATION_SPEED: f64 = 0.02;

// ── Flicker ──────────────────────────────────────────────────────────────────
pub const FLICKER_CHANCE: f64 = 0.004;
pub const FLICKER_MIN: f64 = 0.25;
pub const FLICKER_MAX: f64 = 0.7;
/// Frames a flicker dip is held before the target returns to 1.
pub const FLICKER_HOLD_MIN: u32 = 3;
pub const FLICKER_HOLD_MAX: u32 = 12;
pub const FLICKER_EASE: f64 = 0.2;

// ── Pointer influence ────────────────────────────────────────────────────────
pub const POINTER_RADIUS: f64 = 120.0;
pub const POINTER_FORCE: f64 = 0.08;
pub const POINTER_SIZE_BOOST: f64 = 0.6;
pub const POINTER_GLOW_BOOST: f64 = 0.5;

// ── Lines ────────────────────────────────────────────────────────────────────
pub const CONNECTION_DISTANCE: f64 = 150.0;
pub const CONNECTION_OPACITY: f64 = 0.5;
pub const CONNECTION_WIDTH: f64 = 1.0;
pub const POINTER_LINE_RADIUS: f64 = 150.0;
pub const POINTER_LINE_OPACITY: f64 = 0.8;
pub const ELECTRIC_SEGMENTS: usize = 6;
pub const ELECTRIC_JITTER: f64 = 3.0;

// ── Page ─────────────────────────────────────────────────────────────────────
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const PRELOADER_TICK_MS: i32 = 100;
pub const PRELOADER_STEP_MAX: f64 = 20.0;
pub const PRELOADER_SETTLE_MS: i32 = 300;
pub const COUNT_UP_TICK_MS: i32 = 30;
pub const COUNT_UP_STEPS: f64 = 50.0;
pub const STAT_FALLBACK: i64 = 100;
