use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::canvas::CanvasPainter;
use crate::config::FieldConfig;
use crate::field::Field;
use crate::schedule::{Control, FrameLoop, StopHandle};
use crate::shape::Extent;

fn viewport(window: &Window) -> Result<Extent, JsValue> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Extent::whole_pixels(w, h))
}

/// Start the neon field on `canvas`. Returns `None` when the canvas has no
/// 2D context or the config is rejected, leaving the rest of the page
/// untouched.
pub fn start(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Option<StopHandle>, JsValue> {
    let win = window().ok_or("no window")?;
    let ctx: CanvasRenderingContext2d = match canvas.get_context("2d")? {
        Some(ctx) => ctx.dyn_into()?,
        None => {
            log::warn!("2d canvas context unavailable, neon field disabled");
            return Ok(None);
        }
    };

    let extent = viewport(&win)?;
    canvas.set_width(extent.width as u32);
    canvas.set_height(extent.height as u32);

    let field = match Field::from_config(config, extent) {
        Ok(field) => field,
        Err(e) => {
            log::warn!("{e}; neon field disabled");
            return Ok(None);
        }
    };
    let frames = Rc::new(RefCell::new(FrameLoop::new(field)));
    let handle = frames.borrow().handle();

    // Resize canvas to fit window; the field respawns at the new size.
    let resize_closure = {
        let canvas = canvas.clone();
        let frames = frames.clone();
        Closure::<dyn FnMut()>::new(move || {
            let Some(extent) = window().and_then(|w| viewport(&w).ok()) else {
                return;
            };
            canvas.set_width(extent.width as u32);
            canvas.set_height(extent.height as u32);
            frames.borrow_mut().field_mut().resize(extent);
        })
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let move_closure = {
        let frames = frames.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            frames
                .borrow_mut()
                .field_mut()
                .set_pointer(f64::from(e.client_x()), f64::from(e.client_y()));
        })
    };
    win.add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref())?;
    move_closure.forget();

    // `mouseout` with no related target means the pointer left the window.
    let leave_closure = {
        let frames = frames.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            if e.related_target().is_none() {
                frames.borrow_mut().field_mut().clear_pointer();
            }
        })
    };
    win.add_event_listener_with_callback("mouseout", leave_closure.as_ref().unchecked_ref())?;
    leave_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself. Once stopped the closure is released instead of
    // being rescheduled.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        let mut painter = CanvasPainter::new(&ctx);
        let control = match frames.borrow_mut().frame(&mut painter) {
            Ok(control) => control,
            Err(e) => {
                log::error!("frame failed: {e:?}");
                Control::Stop
            }
        };
        if control == Control::Stop {
            log::info!("neon field stopped");
            let _ = f.borrow_mut().take();
            return;
        }

        // schedule next
        let scheduled = match (window(), f.borrow().as_ref()) {
            (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
            _ => false,
        };
        if !scheduled {
            log::warn!("requestAnimationFrame unavailable, neon field halted");
        }
    }));

    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    Ok(Some(handle))
}
