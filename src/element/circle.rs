use std::rc::Rc;

use nalgebra as na;

use super::{check_coordinate, check_size, Drawable};
use crate::error::Result;
use crate::renderer::{DrawingApi, DrawingApi1};
use crate::sink::DrawContext;

pub struct CircleOptions {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub api: Rc<dyn DrawingApi>,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            api: DrawingApi1::create_renderer(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DrawableCircle {
    center: na::Point2<f64>,
    radius: f64,
    api: Rc<dyn DrawingApi>,
}

impl DrawableCircle {
    pub fn new(x: f64, y: f64, radius: f64, api: Rc<dyn DrawingApi>) -> Self {
        DrawableCircle::from_options(CircleOptions { x, y, radius, api })
    }

    pub fn try_new(x: f64, y: f64, radius: f64, api: Rc<dyn DrawingApi>) -> Result<Self> {
        check_coordinate("x", x)?;
        check_coordinate("y", y)?;
        check_size("radius", radius)?;
        Ok(DrawableCircle::new(x, y, radius, api))
    }

    pub fn from_options(options: CircleOptions) -> Self {
        DrawableCircle {
            center: na::Point2::new(options.x, options.y),
            radius: options.radius,
            api: options.api,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center.x, self.center.y)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Drawable for DrawableCircle {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        self.api
            .draw_circle(ctx, self.center.x, self.center.y, self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use crate::renderer::DrawingApi2;
    use crate::sink::MemorySink;

    #[test]
    fn draws_through_bound_api() {
        let circle = DrawableCircle::new(20.0, 20.0, 10.0, DrawingApi2::create_renderer());
        let mut sink = MemorySink::new();
        circle.draw(&mut DrawContext::new(&mut sink));
        assert_eq!(
            sink.lines(),
            ["Drawing circle with API2 at (20, 20) with radius 10"]
        );
    }

    #[test]
    fn default_options() {
        let circle = DrawableCircle::from_options(CircleOptions::default());
        assert_eq!(circle.center(), (0.0, 0.0));
        assert_eq!(circle.radius(), 1.0);

        let mut sink = MemorySink::new();
        circle.draw(&mut DrawContext::new(&mut sink));
        assert_eq!(
            sink.lines(),
            ["Drawing circle with API1 at (0, 0) with radius 1"]
        );
    }

    #[test]
    fn new_accepts_negative_radius() {
        let circle = DrawableCircle::new(0.0, 0.0, -5.0, DrawingApi1::create_renderer());
        assert_eq!(circle.radius(), -5.0);
    }

    #[test]
    fn try_new_rejects_negative_radius() {
        let err = DrawableCircle::try_new(0.0, 0.0, -5.0, DrawingApi1::create_renderer())
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidGeometry {
                field: "radius",
                value: -5.0
            }
        );
    }
}
