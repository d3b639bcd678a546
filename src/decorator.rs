use crate::element::Drawable;
use crate::sink::DrawContext;

/// Wraps one drawable and forwards to it untouched. Concrete decorators build
/// on top of this and add their own output around the inner drawing.
#[derive(Debug)]
pub struct ShapeDecorator {
    inner: Box<dyn Drawable>,
}

impl ShapeDecorator {
    pub fn new(shape: impl Drawable + 'static) -> Self {
        Self {
            inner: Box::new(shape),
        }
    }

    pub fn inner(&self) -> &dyn Drawable {
        self.inner.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn Drawable> {
        self.inner
    }
}

impl Drawable for ShapeDecorator {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.inner.draw(ctx);
    }
}

#[derive(Debug)]
pub struct FilledShapeDecorator {
    base: ShapeDecorator,
    color: String,
}

impl FilledShapeDecorator {
    pub fn new(shape: impl Drawable + 'static, color: impl Into<String>) -> Self {
        Self {
            base: ShapeDecorator::new(shape),
            color: color.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn inner(&self) -> &dyn Drawable {
        self.base.inner()
    }
}

impl Drawable for FilledShapeDecorator {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.base.draw(ctx);
        ctx.emit(&format!("Filling shape with color {}", self.color));
    }
}
