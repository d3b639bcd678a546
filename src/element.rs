mod circle;
mod square;

pub use circle::{CircleOptions, DrawableCircle};
pub use square::{DrawableSquare, SquareOptions};

use std::fmt::{self, Debug, Display};

use crate::error::{Result, ShapeError};
use crate::sink::DrawContext;

/// Handle for an entry inside a container. Ids are handed out per container,
/// so two containers built the same way hand out the same ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything that can be drawn: bare shapes, composites, decorators, adapters.
pub trait Drawable: Debug {
    fn draw(&self, ctx: &mut DrawContext<'_>);
}

impl<T: Drawable + ?Sized> Drawable for Box<T> {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        (**self).draw(ctx)
    }
}

pub(crate) fn check_coordinate(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::InvalidGeometry { field, value })
    }
}

// 尺寸允许为 0，但不能为负（包括 -0.0）
pub(crate) fn check_size(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && !value.is_sign_negative() {
        Ok(())
    } else {
        Err(ShapeError::InvalidGeometry { field, value })
    }
}
