#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Reflect, JSON};
use serde_wasm_bindgen as swb;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use hyperbolic_core::{DrawCommand, DrawList, FrameStats};
use hyperbolic_wasm::{abi_version, default_config, init_logging, render_commands, HyperbolicCanvas};

const COMPACT: &str = include_str!("../../../../fixtures/configs/compact.json");

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

fn json(text: &str) -> JsValue {
    JSON::parse(text).unwrap()
}

fn compact_config() -> JsValue {
    json(COMPACT)
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

/// it should construct with the default config and size the canvas
#[wasm_bindgen_test]
fn construct_with_defaults() {
    let el = canvas();
    let scene = HyperbolicCanvas::new(el.clone(), 640.0, 480.0, JsValue::UNDEFINED).unwrap();
    assert_eq!(scene.frame(), 0.0);
    assert!(!scene.running());
    assert_eq!((el.width(), el.height()), (640, 480));
}

/// it should reject an invalid config
#[wasm_bindgen_test]
fn rejects_bad_config() {
    let bad = json(r#"{ "period": 0 }"#);
    assert!(HyperbolicCanvas::new(canvas(), 640.0, 480.0, bad).is_err());
    let bad = json(r#"{ "line_count": 0 }"#);
    assert!(render_commands(bad, 640.0, 480.0, 0.0).is_err());
    let bad = json(r#"{ "period": "fast" }"#);
    assert!(render_commands(bad, 640.0, 480.0, 0.0).is_err());
}

/// it should advance one frame per tick and report stats
#[wasm_bindgen_test]
fn tick_reports_stats() {
    let mut scene = HyperbolicCanvas::new(canvas(), 800.0, 600.0, compact_config()).unwrap();
    let stats: FrameStats = swb::from_value(scene.tick().unwrap()).unwrap();
    assert_eq!(stats.frame, 0);
    assert_eq!(stats.arcs + stats.straight_lines + stats.skipped_lines, 20);
    assert_eq!(scene.frame(), 1.0);
}

/// it should keep the frame number across resizes
#[wasm_bindgen_test]
fn resize_keeps_frame() {
    let el = canvas();
    let mut scene = HyperbolicCanvas::new(el.clone(), 800.0, 600.0, JsValue::NULL).unwrap();
    scene.tick().unwrap();
    scene.tick().unwrap();
    scene.resize(1024.0, 768.0).unwrap();
    assert_eq!(scene.frame(), 2.0);
    assert_eq!((el.width(), el.height()), (1024, 768));
    assert!(scene.resize(f64::NAN, 10.0).is_err());
    assert_eq!((el.width(), el.height()), (1024, 768));
}

/// it should start and stop the animation timer
#[wasm_bindgen_test]
fn start_and_stop() {
    let mut scene = HyperbolicCanvas::new(canvas(), 320.0, 240.0, JsValue::UNDEFINED).unwrap();
    scene.start().unwrap();
    assert!(scene.running());
    scene.start().unwrap();
    scene.stop();
    assert!(!scene.running());
}

/// it should match the canvas draw list with a headless recording
#[wasm_bindgen_test]
fn draw_list_matches_render_commands() {
    let mut scene = HyperbolicCanvas::new(canvas(), 800.0, 600.0, compact_config()).unwrap();
    for _ in 0..5 {
        scene.tick().unwrap();
    }
    let live: DrawList = swb::from_value(scene.draw_list().unwrap()).unwrap();
    let headless: DrawList =
        swb::from_value(render_commands(compact_config(), 800.0, 600.0, 5.0).unwrap()).unwrap();
    assert_eq!(live, headless);
    assert!(matches!(
        live.commands.first(),
        Some(DrawCommand::SetFillStyle { .. })
    ));
}

/// it should serialize commands as plain objects tagged by `op`
#[wasm_bindgen_test]
fn render_commands_shape() {
    let list = render_commands(JsValue::UNDEFINED, 400.0, 300.0, 0.0).unwrap();
    let commands = Reflect::get(&list, &JsValue::from_str("commands")).unwrap();
    let arr = Array::from(&commands);
    assert!(arr.length() > 0);
    let op = Reflect::get(&arr.get(1), &JsValue::from_str("op"))
        .unwrap()
        .as_string()
        .unwrap();
    assert_eq!(op, "fill_rect");
    assert!(render_commands(JsValue::UNDEFINED, 400.0, 300.0, -1.0).is_err());
}

/// it should record a frame hours into the animation without replaying it
#[wasm_bindgen_test]
fn render_commands_far_frame() {
    let far: DrawList =
        swb::from_value(render_commands(JsValue::UNDEFINED, 400.0, 300.0, 216_000.0).unwrap())
            .unwrap();
    // 216000 = 144 * 1500, so the picture matches frame 0.
    let start: DrawList =
        swb::from_value(render_commands(JsValue::UNDEFINED, 400.0, 300.0, 0.0).unwrap()).unwrap();
    assert_eq!(far, start);

    assert!(render_commands(JsValue::UNDEFINED, 400.0, 300.0, 1e16).is_err());
    let fractional = json(r#"{ "period": 749.5 }"#);
    assert!(render_commands(fractional, 400.0, 300.0, 5e6).is_err());
}

#[wasm_bindgen_test]
fn default_config_round_trips() {
    let cfg = default_config().unwrap();
    let period = Reflect::get(&cfg, &JsValue::from_str("period"))
        .unwrap()
        .as_f64();
    assert_eq!(period, Some(750.0));
    assert!(HyperbolicCanvas::new(canvas(), 100.0, 100.0, cfg).is_ok());
}

#[wasm_bindgen_test]
fn logging_levels() {
    assert!(init_logging("debug").is_ok());
    assert!(init_logging("off").is_ok());
    assert!(init_logging("loud").is_err());
}
