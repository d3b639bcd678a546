use std::rc::Rc;

use nalgebra as na;

use super::{check_coordinate, check_size, Drawable};
use crate::error::Result;
use crate::renderer::{DrawingApi, DrawingApi1};
use crate::sink::DrawContext;

pub struct SquareOptions {
    pub x: f64,
    pub y: f64,
    pub side: f64,
    pub api: Rc<dyn DrawingApi>,
}

impl Default for SquareOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            side: 1.0,
            api: DrawingApi1::create_renderer(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DrawableSquare {
    origin: na::Point2<f64>,
    side: f64,
    api: Rc<dyn DrawingApi>,
}

impl DrawableSquare {
    pub fn new(x: f64, y: f64, side: f64, api: Rc<dyn DrawingApi>) -> Self {
        DrawableSquare::from_options(SquareOptions { x, y, side, api })
    }

    pub fn try_new(x: f64, y: f64, side: f64, api: Rc<dyn DrawingApi>) -> Result<Self> {
        check_coordinate("x", x)?;
        check_coordinate("y", y)?;
        check_size("side", side)?;
        Ok(DrawableSquare::new(x, y, side, api))
    }

    pub fn from_options(options: SquareOptions) -> Self {
        DrawableSquare {
            origin: na::Point2::new(options.x, options.y),
            side: options.side,
            api: options.api,
        }
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.origin.x, self.origin.y)
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Drawable for DrawableSquare {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.api
            .draw_square(ctx, self.origin.x, self.origin.y, self.side);
    }
}
