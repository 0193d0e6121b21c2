use glam::DVec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use crate::draw::{Painter, Stop, Stroke};

/// [`Painter`] backed by a 2D canvas context. Glow layers are composited
/// additively so overlapping bulbs brighten each other.
pub struct CanvasPainter<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn trace(&self, points: &[DVec2]) {
        self.ctx.begin_path();
        if let Some((first, rest)) = points.split_first() {
            self.ctx.move_to(first.x, first.y);
            for p in rest {
                self.ctx.line_to(p.x, p.y);
            }
        }
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[Stop]) -> Result<(), JsValue> {
    for stop in stops {
        gradient.add_color_stop(stop.offset as f32, &stop.color.css(stop.alpha))?;
    }
    Ok(())
}

impl Painter for CanvasPainter<'_> {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.set_global_composite_operation("source-over")?;
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_global_composite_operation("lighter")
    }

    fn radial(&mut self, center: DVec2, radius: f64, stops: &[Stop]) -> Result<(), JsValue> {
        if radius <= 0.0 {
            return Ok(());
        }
        let gradient = self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)?;
        add_stops(&gradient, stops)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn polygon(
        &mut self,
        points: &[DVec2],
        from: DVec2,
        to: DVec2,
        stops: &[Stop],
        outline: Stroke,
    ) -> Result<(), JsValue> {
        let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
        add_stops(&gradient, stops)?;
        self.trace(points);
        self.ctx.close_path();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(&outline.color.css(outline.alpha));
        self.ctx.set_line_width(outline.width);
        self.ctx.stroke();
        Ok(())
    }

    fn polyline(&mut self, points: &[DVec2], stroke: Stroke) -> Result<(), JsValue> {
        self.trace(points);
        self.ctx.set_stroke_style_str(&stroke.color.css(stroke.alpha));
        self.ctx.set_line_width(stroke.width);
        self.ctx.stroke();
        Ok(())
    }
}
