//! Bulbs and the store that spawns them.
//!
//! A [`Shape`] carries all of its own animation state; the only things it
//! needs from outside on every step are the config, the canvas extent, the
//! pointer position and a random source for flicker events.

use crate::config::FieldConfig;
use crate::palette::Neon;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Canvas size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Extent of a canvas bitmap sized from a fractional viewport. The
    /// bitmap only holds whole pixels, so the bounds are floored to match.
    pub fn whole_pixels(width: f64, height: f64) -> Self {
        Self::new(width.floor(), height.floor())
    }

    /// True when a disc of radius `size` centred on `p` lies inside.
    pub fn contains(&self, p: DVec2, size: f64) -> bool {
        p.x >= size && p.x <= self.width - size && p.y >= size && p.y <= self.height - size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Orb,
    /// Rotated hexagon; the only form whose `rotation` shows.
    Prism,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub position: DVec2,
    pub velocity: DVec2,
    pub base_size: f64,
    pub size: f64,
    pub color: Neon,
    pub form: Form,
    pub phase: f64,
    pub pulse_speed: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub flicker: f64,
    pub flicker_target: f64,
    /// Frames left before `flicker_target` snaps back to 1.
    pub flicker_hold: u32,
    /// Pointer influence from the latest step, `0` when out of reach.
    pub influence: f64,
}

/// Create `count` independently randomized shapes inside `extent`.
pub fn spawn<R: Rng + ?Sized>(
    count: usize,
    extent: Extent,
    config: &FieldConfig,
    rng: &mut R,
) -> Vec<Shape> {
    (0..count).map(|_| Shape::random(extent, config, rng)).collect()
}

impl Shape {
    pub fn random<R: Rng + ?Sized>(extent: Extent, config: &FieldConfig, rng: &mut R) -> Self {
        let base_size = rng.gen_range(config.size_min..=config.size_max);
        let phase = rng.gen_range(0.0..TAU);
        let size = pulsed(base_size, phase, config.pulse_factor);
        let position = DVec2::new(
            uniform_within(rng, size, extent.width),
            uniform_within(rng, size, extent.height),
        );
        let velocity = DVec2::new(
            rng.gen_range(-config.speed..=config.speed),
            rng.gen_range(-config.speed..=config.speed),
        )
        .clamp_length_max(config.max_speed);
        let form = if rng.gen_bool(config.prism_share) {
            Form::Prism
        } else {
            Form::Orb
        };

        Self {
            position,
            velocity,
            base_size,
            size,
            color: Neon::random(rng),
            form,
            phase,
            pulse_speed: rng.gen_range(config.pulse_speed_min..=config.pulse_speed_max),
            rotation: rng.gen_range(0.0..TAU),
            rotation_speed: rng.gen_range(-config.rotation_speed..=config.rotation_speed),
            flicker: 1.0,
            flicker_target: 1.0,
            flicker_hold: 0,
            influence: 0.0,
        }
    }

    /// Advance one frame: motion, pulse, flicker, pointer, then bounds.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        config: &FieldConfig,
        extent: Extent,
        pointer: Option<DVec2>,
        rng: &mut R,
    ) {
        self.position += self.velocity;

        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(TAU);
        self.phase += self.pulse_speed;
        self.size = pulsed(self.base_size, self.phase, config.pulse_factor);

        self.step_flicker(config, rng);

        self.influence = 0.0;
        if let Some(pointer) = pointer {
            self.feel_pointer(pointer, config);
        }

        keep_inside(&mut self.position.x, &mut self.velocity.x, self.size, extent.width);
        keep_inside(&mut self.position.y, &mut self.velocity.y, self.size, extent.height);
    }

    fn step_flicker<R: Rng + ?Sized>(&mut self, config: &FieldConfig, rng: &mut R) {
        if self.flicker_hold > 0 {
            self.flicker_hold -= 1;
            if self.flicker_hold == 0 {
                self.flicker_target = 1.0;
            }
        } else if rng.gen_bool(config.flicker_chance) {
            self.flicker_target = rng.gen_range(config.flicker_min..=config.flicker_max);
            self.flicker_hold = rng
                .gen_range(config.flicker_hold_min..=config.flicker_hold_max)
                .max(1);
        }
        self.flicker += (self.flicker_target - self.flicker) * config.flicker_ease;
    }

    fn feel_pointer(&mut self, pointer: DVec2, config: &FieldConfig) {
        let offset = pointer - self.position;
        let distance = offset.length();
        if distance >= config.pointer_radius {
            return;
        }
        let force = (config.pointer_radius - distance) / config.pointer_radius;
        self.influence = force;

        let push =
            offset.normalize_or_zero() * config.pointer_mode.sign() * force * config.pointer_force;
        self.velocity = (self.velocity + push).clamp_length_max(config.max_speed);
        self.size *= 1.0 + force * config.pointer_size_boost;
    }

    /// Opacity multiplier for drawing. Dips with flicker, rises near the
    /// pointer; layer alphas are clamped when rendered.
    pub fn brightness(&self, glow_boost: f64) -> f64 {
        self.flicker * (1.0 + self.influence * glow_boost)
    }
}

fn pulsed(base: f64, phase: f64, factor: f64) -> f64 {
    base * (1.0 + phase.sin() * factor)
}

fn uniform_within<R: Rng + ?Sized>(rng: &mut R, margin: f64, span: f64) -> f64 {
    let (lo, hi) = (margin, span - margin);
    if lo < hi {
        rng.gen_range(lo..=hi)
    } else {
        span / 2.0
    }
}

/// Clamp one axis into `[size, span - size]`, pointing the velocity back
/// inward when it had escaped. A span narrower than the shape pins it to
/// the centre.
fn keep_inside(pos: &mut f64, vel: &mut f64, size: f64, span: f64) {
    let (lo, hi) = (size, span - size);
    if lo > hi {
        *pos = span / 2.0;
    } else if *pos < lo {
        *pos = lo;
        *vel = vel.abs();
    } else if *pos > hi {
        *pos = hi;
        *vel = -vel.abs();
    }
}
