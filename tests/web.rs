#![cfg(target_arch = "wasm32")]

use voltage_wasm::draw::CommandLog;
use voltage_wasm::{Control, Extent, Field, FieldConfig, FrameLoop};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn embedded_config_loads() {
    let config = FieldConfig::load();
    assert!(config.count > 0);
}

#[wasm_bindgen_test]
fn field_runs_at_viewport_size() {
    let window = web_sys::window().unwrap();
    let w = window.inner_width().unwrap().as_f64().unwrap();
    let h = window.inner_height().unwrap().as_f64().unwrap();

    let mut frames = FrameLoop::new(Field::from_config(FieldConfig::default(), Extent::new(w, h)).unwrap());
    let mut log = CommandLog::new();
    for _ in 0..10 {
        assert_eq!(frames.frame(&mut log).unwrap(), Control::Continue);
    }
    frames.handle().stop();
    assert_eq!(frames.frame(&mut log).unwrap(), Control::Stop);
}

#[wasm_bindgen_test]
fn canvas_accepts_2d_context() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    assert!(canvas.get_context("2d").unwrap().is_some());
}
