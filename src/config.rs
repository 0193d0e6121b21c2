//! Runtime configuration for the neon field, read from `config/field.toml`.
//!
//! The TOML file is embedded at compile time (there is no filesystem in the
//! browser). Missing keys fall back to the defaults in [`crate::constants`],
//! so the file only has to list the knobs it changes.

use crate::constants::*;
use crate::error::ConfigError;
use crate::palette::Neon;
use serde::Deserialize;

const EMBEDDED: &str = include_str!("../config/field.toml");

/// How shapes react when the pointer comes close.
///
/// Both behaviours shipped in different revisions of the page; `Repel` is the
/// default because it keeps bulbs from piling up under a resting cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    Attract,
    #[default]
    Repel,
}

impl PointerMode {
    /// Sign applied to the shape-to-pointer direction.
    pub fn sign(self) -> f64 {
        match self {
            PointerMode::Attract => 1.0,
            PointerMode::Repel => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Straight,
    /// Jittered polyline that crackles every frame.
    Electric,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Fixed seed for reproducible runs; a random one is drawn when unset.
    pub seed: Option<u64>,

    // ── Store ────────────────────────────────────────────────────────────────
    pub count: usize,
    pub size_min: f64,
    pub size_max: f64,
    pub speed: f64,
    pub max_speed: f64,
    pub prism_share: f64,

    // ── Pulse / rotation ─────────────────────────────────────────────────────
    pub pulse_factor: f64,
    pub pulse_speed_min: f64,
    pub pulse_speed_max: f64,
    pub rotation_speed: f64,

    // ── Flicker ──────────────────────────────────────────────────────────────
    pub flicker_chance: f64,
    pub flicker_min: f64,
    pub flicker_max: f64,
    pub flicker_hold_min: u32,
    pub flicker_hold_max: u32,
    pub flicker_ease: f64,

    // ── Pointer ──────────────────────────────────────────────────────────────
    pub pointer_mode: PointerMode,
    pub pointer_radius: f64,
    pub pointer_force: f64,
    pub pointer_size_boost: f64,
    pub pointer_glow_boost: f64,

    // ── Lines ────────────────────────────────────────────────────────────────
    pub line_style: LineStyle,
    pub connection_distance: f64,
    pub connection_opacity: f64,
    pub connection_width: f64,
    pub pointer_line_radius: f64,
    pub pointer_line_opacity: f64,
    pub pointer_line_color: Neon,
    pub electric_segments: usize,
    pub electric_jitter: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            count: SHAPE_COUNT,
            size_min: SIZE_MIN,
            size_max: SIZE_MAX,
            speed: SPEED,
            max_speed: MAX_SPEED,
            prism_share: PRISM_SHARE,
            pulse_factor: PULSE_FACTOR,
            pulse_speed_min: PULSE_SPEED_MIN,
            pulse_speed_max: PULSE_SPEED_MAX,
            rotation_speed: ROTATION_SPEED,
            flicker_chance: FLICKER_CHANCE,
            flicker_min: FLICKER_MIN,
            flicker_max: FLICKER_MAX,
            flicker_hold_min: FLICKER_HOLD_MIN,
            flicker_hold_max: FLICKER_HOLD_MAX,
            flicker_ease: FLICKER_EASE,
            pointer_mode: PointerMode::default(),
            pointer_radius: POINTER_RADIUS,
            pointer_force: POINTER_FORCE,
            pointer_size_boost: POINTER_SIZE_BOOST,
            pointer_glow_boost: POINTER_GLOW_BOOST,
            line_style: LineStyle::default(),
            connection_distance: CONNECTION_DISTANCE,
            connection_opacity: CONNECTION_OPACITY,
            connection_width: CONNECTION_WIDTH,
            pointer_line_radius: POINTER_LINE_RADIUS,
            pointer_line_opacity: POINTER_LINE_OPACITY,
            pointer_line_color: Neon::Magenta,
            electric_segments: ELECTRIC_SEGMENTS,
            electric_jitter: ELECTRIC_JITTER,
        }
    }
}

impl FieldConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Config baked into the binary, or the defaults if it does not parse.
    pub fn load() -> Self {
        match Self::from_toml_str(EMBEDDED) {
            Ok(config) => {
                log::debug!("field config loaded: {} shapes", config.count);
                config
            }
            Err(e) => {
                log::warn!("{e}; falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(out_of_range("count", 0.0, ">= 1"));
        }
        positive("size_min", self.size_min)?;
        ordered("size", self.size_min, self.size_max)?;
        non_negative("speed", self.speed)?;
        positive("max_speed", self.max_speed)?;
        unit("prism_share", self.prism_share)?;

        if !(0.0..1.0).contains(&self.pulse_factor) {
            return Err(out_of_range("pulse_factor", self.pulse_factor, "[0, 1)"));
        }
        non_negative("pulse_speed_min", self.pulse_speed_min)?;
        ordered("pulse_speed", self.pulse_speed_min, self.pulse_speed_max)?;
        non_negative("rotation_speed", self.rotation_speed)?;

        unit("flicker_chance", self.flicker_chance)?;
        positive("flicker_min", self.flicker_min)?;
        ordered("flicker", self.flicker_min, self.flicker_max)?;
        if self.flicker_max > 1.0 {
            return Err(out_of_range("flicker_max", self.flicker_max, "<= 1"));
        }
        ordered(
            "flicker_hold",
            f64::from(self.flicker_hold_min),
            f64::from(self.flicker_hold_max),
        )?;
        if !(self.flicker_ease > 0.0 && self.flicker_ease <= 1.0) {
            return Err(out_of_range("flicker_ease", self.flicker_ease, "(0, 1]"));
        }

        positive("pointer_radius", self.pointer_radius)?;
        non_negative("pointer_force", self.pointer_force)?;
        non_negative("pointer_size_boost", self.pointer_size_boost)?;
        non_negative("pointer_glow_boost", self.pointer_glow_boost)?;

        positive("connection_distance", self.connection_distance)?;
        unit("connection_opacity", self.connection_opacity)?;
        positive("connection_width", self.connection_width)?;
        positive("pointer_line_radius", self.pointer_line_radius)?;
        unit("pointer_line_opacity", self.pointer_line_opacity)?;
        if self.electric_segments == 0 {
            return Err(out_of_range("electric_segments", 0.0, ">= 1"));
        }
        non_negative("electric_jitter", self.electric_jitter)
    }
}

fn out_of_range(field: &'static str, value: f64, expected: &'static str) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        value,
        expected,
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(out_of_range(field, value, "> 0"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(out_of_range(field, value, ">= 0"))
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(field, value, "[0, 1]"))
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(out_of_range(field, value, "a finite number"))
    }
}

fn ordered(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    finite(field, min)?;
    finite(field, max)?;
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { field, min, max })
    }
}
