use std::rc::Rc;

use super::DrawingApi;

#[derive(Clone, Copy, Default)]
pub struct DrawingApi1;

impl std::fmt::Debug for DrawingApi1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DrawingApi1")
    }
}

impl DrawingApi1 {
    pub fn new() -> Self {
        DrawingApi1
    }

    pub fn create_renderer() -> Rc<dyn DrawingApi> {
        Rc::new(DrawingApi1::new())
    }
}

impl DrawingApi for DrawingApi1 {
    fn tag(&self) -> &'static str {
        "API1"
    }
}
