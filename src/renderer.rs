mod drawing_api1;
mod drawing_api2;

use std::fmt::Debug;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::sink::DrawContext;

pub use drawing_api1::DrawingApi1;
pub use drawing_api2::DrawingApi2;

/// Low-level drawing backend. Shapes hold one of these and hand it their
/// geometry; the backend decides what a primitive looks like on output.
pub trait DrawingApi: Debug {
    /// Name reported in every line this backend emits.
    fn tag(&self) -> &'static str;

    fn draw_circle(&self, ctx: &mut DrawContext<'_>, x: f64, y: f64, radius: f64) {
        ctx.emit(&format!(
            "Drawing circle with {} at ({}, {}) with radius {}",
            self.tag(),
            x,
            y,
            radius
        ));
    }

    fn draw_square(&self, ctx: &mut DrawContext<'_>, x: f64, y: f64, side: f64) {
        ctx.emit(&format!(
            "Drawing square with {} at ({}, {}) with side {}",
            self.tag(),
            x,
            y,
            side
        ));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    Api1,
    Api2,
}

impl RendererKind {
    pub fn into_api(self) -> Rc<dyn DrawingApi> {
        match self {
            RendererKind::Api1 => DrawingApi1::create_renderer(),
            RendererKind::Api2 => DrawingApi2::create_renderer(),
        }
    }
}

impl From<RendererKind> for &'static str {
    fn from(kind: RendererKind) -> Self {
        match kind {
            RendererKind::Api1 => "API1",
            RendererKind::Api2 => "API2",
        }
    }
}
