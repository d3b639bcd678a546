use std::rc::Rc;

use super::DrawingApi;

#[derive(Clone, Copy, Default)]
pub struct DrawingApi2;

impl std::fmt::Debug for DrawingApi2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DrawingApi2")
    }
}

impl DrawingApi2 {
    pub fn new() -> Self {
        DrawingApi2
    }

    pub fn create_renderer() -> Rc<dyn DrawingApi> {
        Rc::new(DrawingApi2::new())
    }
}

impl DrawingApi for DrawingApi2 {
    fn tag(&self) -> &'static str {
        "API2"
    }
}
