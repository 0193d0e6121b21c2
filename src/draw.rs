//! Drawing primitives and the layered neon look.
//!
//! Rendering goes through the [`Painter`] trait so the same frame can be
//! painted onto a browser `CanvasRenderingContext2d` or recorded by
//! [`CommandLog`] for headless inspection.

use crate::palette::Rgb;
use crate::shape::{Form, Shape};
use glam::DVec2;
use rand::Rng;
use std::convert::Infallible;
use std::f64::consts::TAU;

/// One colour stop of a gradient, offset in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub offset: f64,
    pub color: Rgb,
    pub alpha: f64,
}

impl Stop {
    pub fn new(offset: f64, color: Rgb, alpha: f64) -> Self {
        Self {
            offset,
            color,
            alpha,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub alpha: f64,
    pub width: f64,
}

/// Minimal 2D surface the field renders onto.
pub trait Painter {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Fill a disc with a radial gradient running from its centre outward.
    fn radial(&mut self, center: DVec2, radius: f64, stops: &[Stop]) -> Result<(), Self::Error>;

    /// Fill a closed polygon with a linear gradient from `from` to `to`, then
    /// outline it.
    fn polygon(
        &mut self,
        points: &[DVec2],
        from: DVec2,
        to: DVec2,
        stops: &[Stop],
        outline: Stroke,
    ) -> Result<(), Self::Error>;

    /// Stroke an open polyline.
    fn polyline(&mut self, points: &[DVec2], stroke: Stroke) -> Result<(), Self::Error>;
}

/// A recorded painter call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear { width: f64, height: f64 },
    Radial { center: DVec2, radius: f64, stops: Vec<Stop> },
    Polygon { points: Vec<DVec2>, stops: Vec<Stop>, outline: Stroke },
    Polyline { points: Vec<DVec2>, stroke: Stroke },
}

/// Painter that records every call instead of rasterizing.
#[derive(Debug, Default)]
pub struct CommandLog {
    pub commands: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[DVec2], &Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            Command::Polyline { points, stroke } => Some((points.as_slice(), stroke)),
            _ => None,
        })
    }
}

impl Painter for CommandLog {
    type Error = Infallible;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Infallible> {
        self.commands.push(Command::Clear { width, height });
        Ok(())
    }

    fn radial(&mut self, center: DVec2, radius: f64, stops: &[Stop]) -> Result<(), Infallible> {
        self.commands.push(Command::Radial {
            center,
            radius,
            stops: stops.to_vec(),
        });
        Ok(())
    }

    fn polygon(
        &mut self,
        points: &[DVec2],
        _from: DVec2,
        _to: DVec2,
        stops: &[Stop],
        outline: Stroke,
    ) -> Result<(), Infallible> {
        self.commands.push(Command::Polygon {
            points: points.to_vec(),
            stops: stops.to_vec(),
            outline,
        });
        Ok(())
    }

    fn polyline(&mut self, points: &[DVec2], stroke: Stroke) -> Result<(), Infallible> {
        self.commands.push(Command::Polyline {
            points: points.to_vec(),
            stroke,
        });
        Ok(())
    }
}

/// Opacity of a line of length `distance` that fades out at `reach`.
///
/// Peaks at `peak` for zero length and falls linearly to `0` at `reach`.
pub fn fade(distance: f64, reach: f64, peak: f64) -> f64 {
    if distance >= reach {
        0.0
    } else {
        (1.0 - distance / reach) * peak
    }
}

/// Paint one bulb: outer glow, mid glow, body, core highlight.
pub fn bulb<P: Painter>(painter: &mut P, shape: &Shape, glow_boost: f64) -> Result<(), P::Error> {
    let light = shape.brightness(glow_boost);
    let (main, glow) = (shape.color.main(), shape.color.glow());
    let at = shape.position;
    let size = shape.size;

    painter.radial(
        at,
        size * 4.0,
        &[Stop::new(0.0, glow, 0.35 * light), Stop::new(1.0, glow, 0.0)],
    )?;
    painter.radial(
        at,
        size * 2.0,
        &[Stop::new(0.0, main, 0.6 * light), Stop::new(1.0, main, 0.0)],
    )?;

    match shape.form {
        Form::Orb => painter.radial(
            at,
            size,
            &[
                Stop::new(0.0, main, 0.95 * light),
                Stop::new(0.7, main, 0.85 * light),
                Stop::new(1.0, glow, 0.5 * light),
            ],
        )?,
        Form::Prism => {
            let radius = size * 1.3;
            let axis = DVec2::from_angle(shape.rotation) * radius;
            painter.polygon(
                &hexagon(at, radius, shape.rotation),
                at - axis,
                at + axis,
                &[Stop::new(0.0, glow, 0.8 * light), Stop::new(1.0, main, 0.95 * light)],
                Stroke {
                    color: main,
                    alpha: light,
                    width: 1.0,
                },
            )?
        }
    }

    painter.radial(
        at,
        size * 0.45,
        &[Stop::new(0.0, Rgb::WHITE, 0.9 * light), Stop::new(1.0, Rgb::WHITE, 0.0)],
    )
}

fn hexagon(center: DVec2, radius: f64, rotation: f64) -> Vec<DVec2> {
    (0..6)
        .map(|i| center + DVec2::from_angle(rotation + TAU * f64::from(i) / 6.0) * radius)
        .collect()
}

/// Line between two bulbs, tinted halfway between their hues.
pub fn link(a: &Shape, b: &Shape) -> Rgb {
    a.color.main().mix(b.color.main(), 0.5)
}

/// Points of a lightning-style polyline from `a` to `b`.
///
/// Endpoints stay fixed; interior points are displaced perpendicular to the
/// segment by up to `jitter` pixels.
pub fn electric_path<R: Rng + ?Sized>(
    a: DVec2,
    b: DVec2,
    segments: usize,
    jitter: f64,
    rng: &mut R,
) -> Vec<DVec2> {
    let segments = segments.max(1);
    let normal = (b - a).perp().normalize_or_zero();
    let mut points = Vec::with_capacity(segments + 1);
    points.push(a);
    for i in 1..segments {
        let t = i as f64 / segments as f64;
        let offset = if jitter > 0.0 {
            rng.gen_range(-jitter..=jitter)
        } else {
            0.0
        };
        points.push(a.lerp(b, t) + normal * offset);
    }
    points.push(b);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fade_is_zero_at_reach_and_beyond() {
        assert_eq!(fade(150.0, 150.0, 0.5), 0.0);
        assert_eq!(fade(400.0, 150.0, 0.5), 0.0);
        assert_eq!(fade(0.0, 150.0, 0.5), 0.5);
    }

    #[test]
    fn fade_strictly_decreases() {
        let mut last = f64::INFINITY;
        for step in 0..150 {
            let alpha = fade(f64::from(step), 150.0, 0.5);
            assert!(alpha < last, "not decreasing at {step}");
            last = alpha;
        }
    }

    #[test]
    fn electric_path_keeps_endpoints() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(100.0, 0.0);
        let path = electric_path(a, b, 5, 4.0, &mut rng);
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], a);
        assert_eq!(path[5], b);
        for p in &path[1..5] {
            assert!(p.y.abs() <= 4.0);
        }
        assert!((path[2].x - 40.0).abs() < 1e-9);
    }

    #[test]
    fn hexagon_vertices_on_circle() {
        let c = DVec2::new(10.0, 10.0);
        for p in hexagon(c, 5.0, 0.3) {
            assert!((p.distance(c) - 5.0).abs() < 1e-9);
        }
    }
}
