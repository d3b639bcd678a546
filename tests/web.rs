#![cfg(target_arch = "wasm32")]

use shape_patterns::{draw_scene, draw_scene_json, SceneDescription};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn json_scene_returns_lines() {
    let json = SceneDescription::reference().to_json().unwrap();
    let lines: Vec<String> =
        serde_wasm_bindgen::from_value(draw_scene_json(&json).unwrap()).unwrap();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[1], "Filling shape with color red");
}

#[wasm_bindgen_test]
fn js_object_scene_returns_lines() {
    let scene = serde_wasm_bindgen::to_value(&SceneDescription::reference()).unwrap();
    let lines: Vec<String> = serde_wasm_bindgen::from_value(draw_scene(scene).unwrap()).unwrap();
    assert_eq!(lines[0], "Drawing circle with API1 at (10, 10) with radius 5");
}

#[wasm_bindgen_test]
fn bad_scene_is_an_error() {
    assert!(draw_scene_json("{\"shapes\": [{\"type\": \"hexagon\"}]}").is_err());
}
