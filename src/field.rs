//! The neon field: every piece of animation state in one context object.

use crate::config::{FieldConfig, LineStyle};
use crate::draw::{self, Painter, Stroke};
use crate::error::ConfigError;
use crate::shape::{self, Extent, Shape};
use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Owns the shapes, the canvas extent, the pointer and the random sources.
///
/// `step` advances the simulation and `render` paints it. Simulation and
/// line jitter draw from separate generators, so whether or how often a
/// frame is painted never changes where the bulbs go.
pub struct Field {
    config: FieldConfig,
    extent: Extent,
    shapes: Vec<Shape>,
    pointer: Option<DVec2>,
    rng: ChaCha8Rng,
    jitter: ChaCha8Rng,
    frame: u64,
}

impl Field {
    /// Validate `config` and spawn the first set of shapes.
    pub fn new(config: FieldConfig, extent: Extent, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let jitter = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
        let shapes = shape::spawn(config.count, extent, &config, &mut rng);
        Ok(Self {
            config,
            extent,
            shapes,
            pointer: None,
            rng,
            jitter,
            frame: 0,
        })
    }

    /// Seed from `config.seed`, or a fresh random one when unset.
    pub fn from_config(config: FieldConfig, extent: Extent) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::debug!("field seed {seed:#x}");
        Self::new(config, extent, seed)
    }

    /// Throw away every shape and spawn a new set sized to `extent`.
    pub fn resize(&mut self, extent: Extent) {
        self.extent = extent;
        self.shapes = shape::spawn(self.config.count, extent, &self.config, &mut self.rng);
        log::debug!(
            "field resized to {}x{}, {} shapes",
            extent.width,
            extent.height,
            self.shapes.len()
        );
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some(DVec2::new(x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn step(&mut self) {
        for shape in &mut self.shapes {
            shape.step(&self.config, self.extent, self.pointer, &mut self.rng);
        }
        self.frame += 1;
    }

    pub fn render<P: Painter>(&mut self, painter: &mut P) -> Result<(), P::Error> {
        painter.clear(self.extent.width, self.extent.height)?;

        for shape in &self.shapes {
            draw::bulb(painter, shape, self.config.pointer_glow_boost)?;
        }

        let cfg = &self.config;
        for (i, a) in self.shapes.iter().enumerate() {
            for b in &self.shapes[i + 1..] {
                let alpha = draw::fade(
                    a.position.distance(b.position),
                    cfg.connection_distance,
                    cfg.connection_opacity,
                );
                if alpha <= 0.0 {
                    continue;
                }
                let stroke = Stroke {
                    color: draw::link(a, b),
                    alpha,
                    width: cfg.connection_width,
                };
                match cfg.line_style {
                    LineStyle::Straight => painter.polyline(&[a.position, b.position], stroke)?,
                    LineStyle::Electric => {
                        let path = draw::electric_path(
                            a.position,
                            b.position,
                            cfg.electric_segments,
                            cfg.electric_jitter,
                            &mut self.jitter,
                        );
                        painter.polyline(&path, stroke)?
                    }
                }
            }
        }

        if let Some(pointer) = self.pointer {
            for shape in &self.shapes {
                let alpha = draw::fade(
                    pointer.distance(shape.position),
                    cfg.pointer_line_radius,
                    cfg.pointer_line_opacity,
                );
                if alpha > 0.0 {
                    let stroke = Stroke {
                        color: cfg.pointer_line_color.main(),
                        alpha,
                        width: cfg.connection_width,
                    };
                    painter.polyline(&[pointer, shape.position], stroke)?;
                }
            }
        }
        Ok(())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Steps taken since creation; resizing does not reset it.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
