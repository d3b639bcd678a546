use crate::adapter::ShapeToDrawableAdapter;
use crate::container::{Entries, ShapeContainer};
use crate::element::{Drawable, ObjectId};
use crate::error::Result;
use crate::sink::{DrawContext, MemorySink, Sink};

pub struct CanvasOptions {
    pub name: String,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            name: "canvas".to_string(),
        }
    }
}

/// Top-level surface. Holds adapted shapes and draws them front to back on
/// request.
#[derive(Debug)]
pub struct Canvas {
    name: String,
    shapes: Entries<ShapeToDrawableAdapter>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasOptions::default())
    }
}

impl Canvas {
    pub fn new(options: CanvasOptions) -> Self {
        Self {
            name: options.name,
            shapes: Entries::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_shape(&mut self, shape: ShapeToDrawableAdapter) -> ObjectId {
        self.add(shape)
    }

    pub fn remove_shape(&mut self, id: &ObjectId) -> Result<ShapeToDrawableAdapter> {
        self.remove(id)
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl Canvas {
    pub fn draw_all(&self, sink: &mut dyn Sink) {
        let mut ctx = DrawContext::new(sink);
        for shape in self.shapes.iter() {
            shape.draw(&mut ctx);
        }
        log::debug!(
            "{}: drew {} shapes, {} lines",
            self.name,
            self.shapes.len(),
            ctx.emitted()
        );
    }

    pub fn render_lines(&self) -> Vec<String> {
        let mut sink = MemorySink::new();
        self.draw_all(&mut sink);
        sink.into_lines()
    }
}

impl ShapeContainer for Canvas {
    type Item = ShapeToDrawableAdapter;

    fn add(&mut self, item: Self::Item) -> ObjectId {
        let id = self.shapes.push(item);
        log::debug!("{}: added shape {}", self.name, id);
        id
    }

    fn remove(&mut self, id: &ObjectId) -> Result<Self::Item> {
        let shape = self.shapes.remove(id)?;
        log::debug!("{}: removed shape {}", self.name, id);
        Ok(shape)
    }

    fn get(&self, id: &ObjectId) -> Option<&Self::Item> {
        self.shapes.get(id)
    }

    fn ids(&self) -> Vec<ObjectId> {
        self.shapes.ids()
    }

    fn len(&self) -> usize {
        self.shapes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::FilledShapeDecorator;
    use crate::element::{DrawableCircle, DrawableSquare};
    use crate::error::ShapeError;
    use crate::renderer::{DrawingApi1, DrawingApi2};

    #[test]
    fn empty_canvas_draws_nothing() {
        let canvas = Canvas::default();
        assert_eq!(canvas.name(), "canvas");
        assert!(canvas.is_empty());
        assert!(canvas.render_lines().is_empty());
    }

    #[test]
    fn filled_circle_scenario() {
        let circle = DrawableCircle::new(10.0, 10.0, 5.0, DrawingApi1::create_renderer());
        let mut canvas = Canvas::default();
        canvas.add_shape(ShapeToDrawableAdapter::new(FilledShapeDecorator::new(
            circle, "red",
        )));
        assert_eq!(
            canvas.render_lines(),
            vec![
                "Drawing circle with API1 at (10, 10) with radius 5",
                "Filling shape with color red",
            ]
        );
    }

    #[test]
    fn top_level_order_is_insertion_order() {
        let api1 = DrawingApi1::create_renderer();
        let api2 = DrawingApi2::create_renderer();
        let mut canvas = Canvas::new(CanvasOptions {
            name: "ordering".to_string(),
        });
        canvas.add_shape(ShapeToDrawableAdapter::new(DrawableSquare::new(
            3.0,
            3.0,
            3.0,
            api2.clone(),
        )));
        canvas.add_shape(ShapeToDrawableAdapter::new(DrawableCircle::new(
            1.0, 1.0, 1.0, api1,
        )));
        canvas.add_shape(ShapeToDrawableAdapter::new(DrawableCircle::new(
            2.0, 2.0, 2.0, api2,
        )));
        assert_eq!(
            canvas.render_lines(),
            vec![
                "Drawing square with API2 at (3, 3) with side 3",
                "Drawing circle with API1 at (1, 1) with radius 1",
                "Drawing circle with API2 at (2, 2) with radius 2",
            ]
        );
    }

    #[test]
    fn remove_and_clear() {
        let api = DrawingApi1::create_renderer();
        let mut canvas = Canvas::default();
        let first = canvas.add_shape(ShapeToDrawableAdapter::new(DrawableCircle::new(
            1.0,
            1.0,
            1.0,
            api.clone(),
        )));
        let second = canvas.add_shape(ShapeToDrawableAdapter::new(DrawableSquare::new(
            2.0, 2.0, 2.0, api,
        )));

        canvas.remove_shape(&first).unwrap();
        assert!(canvas.contains(&second));
        assert_eq!(
            canvas.render_lines(),
            vec!["Drawing square with API1 at (2, 2) with side 2"]
        );
        assert_eq!(
            canvas.remove_shape(&first).unwrap_err(),
            ShapeError::ElementNotFound { id: first }
        );

        canvas.clear();
        assert_eq!(canvas.len(), 0);
        assert!(canvas.render_lines().is_empty());
    }

    #[test]
    fn drawing_twice_repeats_output() {
        let mut canvas = Canvas::default();
        canvas.add_shape(ShapeToDrawableAdapter::new(DrawableCircle::new(
            0.0,
            0.0,
            1.0,
            DrawingApi2::create_renderer(),
        )));
        let mut sink = MemorySink::new();
        canvas.draw_all(&mut sink);
        canvas.draw_all(&mut sink);
        assert_eq!(sink.lines().len(), 2);
        assert_eq!(sink.lines()[0], sink.lines()[1]);
    }
}
