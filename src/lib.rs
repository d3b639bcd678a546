pub mod adapter;
pub mod canvas;
pub mod container;
pub mod decorator;
pub mod demo;
pub mod element;
pub mod error;
pub mod renderer;
pub mod scene;
pub mod sink;

pub use adapter::ShapeToDrawableAdapter;
pub use canvas::{Canvas, CanvasOptions};
pub use container::{CompositeShape, ShapeContainer};
pub use decorator::{FilledShapeDecorator, ShapeDecorator};
pub use element::{CircleOptions, Drawable, DrawableCircle, DrawableSquare, ObjectId, SquareOptions};
pub use error::{Result, ShapeError};
pub use renderer::{DrawingApi, DrawingApi1, DrawingApi2, RendererKind};
pub use scene::{SceneDescription, ShapeSpec};
pub use sink::{ConsoleSink, DrawContext, MemorySink, Sink, StdoutSink};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    demo::reference_canvas().draw_all(&mut ConsoleSink);
}

/// Draws a scene passed as a JS object and returns the emitted lines.
#[wasm_bindgen]
pub fn draw_scene(scene: JsValue) -> std::result::Result<JsValue, JsValue> {
    let description: SceneDescription = serde_wasm_bindgen::from_value(scene)?;
    let lines = description.build()?.render_lines();
    Ok(serde_wasm_bindgen::to_value(&lines)?)
}

#[wasm_bindgen]
pub fn draw_scene_json(json: &str) -> std::result::Result<JsValue, JsValue> {
    let description = SceneDescription::from_json(json)?;
    let lines = description.build()?.render_lines();
    Ok(serde_wasm_bindgen::to_value(&lines)?)
}
