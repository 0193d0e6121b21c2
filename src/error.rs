//! Error types for configuration loading.
//!
//! The effect itself has no failure modes at runtime; the only things that can
//! go wrong are a malformed `field.toml` or a value outside the range the
//! simulation relies on (a pulse factor of 1 would let `size` reach zero, for
//! instance). Browser glue reports missing DOM anchors through `log::warn!`
//! instead of through these types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid field config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A single value outside its accepted range.
    #[error("`{field}` = {value} is out of range (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A `[min, max]` pair with `min > max`.
    #[error("`{field}` range is empty: min {min} > max {max}")]
    EmptyRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
