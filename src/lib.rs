#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Neon particle field and page glue for the VOLTAGE landing page.
//!
//! The simulation and drawing logic is plain Rust and runs on the host; only
//! the browser wiring under `wasm` is compiled for wasm32.

pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod field;
pub mod page;
pub mod palette;
pub mod schedule;
pub mod shape;

pub use config::{FieldConfig, LineStyle, PointerMode};
pub use error::ConfigError;
pub use field::Field;
pub use schedule::{Control, FrameLoop, StopHandle};
pub use shape::Extent;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    use crate::schedule::StopHandle;

    mod canvas;
    mod page;
    mod render;

    thread_local! {
        static RUNNING: RefCell<Option<StopHandle>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if let Err(e) = page::init(&window, &document) {
            log::warn!("page glue incomplete: {e:?}");
        }

        match document.get_element_by_id("particleCanvas") {
            Some(el) => {
                let canvas = el.dyn_into::<web_sys::HtmlCanvasElement>()?;
                if let Some(handle) = render::start(canvas, crate::FieldConfig::load())? {
                    RUNNING.with(|r| *r.borrow_mut() = Some(handle));
                }
            }
            None => log::warn!("#particleCanvas not found, neon field disabled"),
        }

        log::info!("VOLTAGE field loaded");
        Ok(())
    }

    /// Stop the running field, leaving the last frame on the canvas.
    #[wasm_bindgen]
    pub fn stop_field() {
        RUNNING.with(|r| {
            if let Some(handle) = r.borrow_mut().take() {
                handle.stop();
            }
        });
    }
}
