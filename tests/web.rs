#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use bubbles_engine::Scene;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas_context(width: u32, height: u32) -> CanvasRenderingContext2d {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn configure_rejects_unknown_kind() {
    let mut scene = Scene::with_seed(800.0, 600.0, 1);
    let err = scene
        .configure(3, 10.0, "#ffffff".to_string(), 1.0, "Triangle".to_string())
        .unwrap_err();
    assert!(err.as_string().unwrap().contains("Triangle"));
    assert_eq!(scene.shape_count(), 10);
}

#[wasm_bindgen_test]
fn render_to_canvas_tracks_stroke_weight() {
    let ctx = canvas_context(800, 600);
    let mut scene = Scene::with_seed(800.0, 600.0, 1);

    scene.configure(4, 10.0, "#ff0000".to_string(), 3.0, "Bubble".to_string()).unwrap();
    scene.render_to_canvas(&ctx);
    assert_eq!(ctx.line_width(), 3.0);

    // Zero weight drops the outline without touching the line width.
    scene.configure(4, 10.0, "#ff0000".to_string(), 0.0, "Square".to_string()).unwrap();
    scene.render_to_canvas(&ctx);
    assert_eq!(ctx.line_width(), 3.0);

    // Negative size still draws; the outline comes back with a positive weight.
    scene.configure(4, -6.0, "#00ff00".to_string(), 5.0, "Bubble".to_string()).unwrap();
    scene.render_to_canvas(&ctx);
    scene.configure(4, -6.0, "#00ff00".to_string(), 5.0, "Square".to_string()).unwrap();
    scene.render_to_canvas(&ctx);

    assert_eq!(ctx.line_width(), 5.0);
    assert_eq!(scene.frame_count(), 4);
}

#[wasm_bindgen_test]
fn shape_kinds_lists_variants() {
    let kinds = bubbles_engine::simulation::shape_kinds();
    assert_eq!(kinds.length(), 2);
    assert_eq!(kinds.get(0).as_string().as_deref(), Some("Bubble"));
}

#[wasm_bindgen_test]
fn version_is_crate_version() {
    assert_eq!(bubbles_engine::version(), env!("CARGO_PKG_VERSION"));
}
