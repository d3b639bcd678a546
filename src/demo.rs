use crate::adapter::ShapeToDrawableAdapter;
use crate::canvas::{Canvas, CanvasOptions};
use crate::container::CompositeShape;
use crate::decorator::FilledShapeDecorator;
use crate::element::{DrawableCircle, DrawableSquare};
use crate::renderer::{DrawingApi1, DrawingApi2};

/// Two filled shapes and a group of three, each bridged to one of the two
/// drawing APIs.
pub fn reference_canvas() -> Canvas {
    let api1 = DrawingApi1::create_renderer();
    let api2 = DrawingApi2::create_renderer();

    let circle1 = DrawableCircle::new(10.0, 10.0, 5.0, api1.clone());
    let circle2 = DrawableCircle::new(20.0, 20.0, 10.0, api2);
    let square1 = DrawableSquare::new(30.0, 30.0, 15.0, api1);

    let mut composite = CompositeShape::new();
    composite.add_shape(circle1.clone());
    composite.add_shape(circle2);
    composite.add_shape(square1.clone());

    let filled_circle = FilledShapeDecorator::new(circle1, "red");
    let filled_square = FilledShapeDecorator::new(square1, "blue");

    let mut canvas = Canvas::new(CanvasOptions {
        name: "reference".to_string(),
    });
    canvas.add_shape(ShapeToDrawableAdapter::new(filled_circle));
    canvas.add_shape(ShapeToDrawableAdapter::new(filled_square));
    canvas.add_shape(ShapeToDrawableAdapter::new(composite));
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_output() {
        assert_eq!(
            reference_canvas().render_lines(),
            vec![
                "Drawing circle with API1 at (10, 10) with radius 5",
                "Filling shape with color red",
                "Drawing square with API1 at (30, 30) with side 15",
                "Filling shape with color blue",
                "Drawing circle with API1 at (10, 10) with radius 5",
                "Drawing circle with API2 at (20, 20) with radius 10",
                "Drawing square with API1 at (30, 30) with side 15",
            ]
        );
    }
}
