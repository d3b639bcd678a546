use crate::element::Drawable;
use crate::sink::DrawContext;

/// Presents any drawable family (bare shape, composite, decorator) as the one
/// concrete type the canvas stores. Drawing is forwarded unchanged.
#[derive(Debug)]
pub struct ShapeToDrawableAdapter {
    shape: Box<dyn Drawable>,
}

impl ShapeToDrawableAdapter {
    pub fn new(shape: impl Drawable + 'static) -> Self {
        Self {
            shape: Box::new(shape),
        }
    }

    pub fn into_inner(self) -> Box<dyn Drawable> {
        self.shape
    }
}

impl Drawable for ShapeToDrawableAdapter {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.shape.draw(ctx);
    }
}
