use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::adapter::ShapeToDrawableAdapter;
use crate::canvas::{Canvas, CanvasOptions};
use crate::container::{CompositeShape, ShapeContainer};
use crate::decorator::{FilledShapeDecorator, ShapeDecorator};
use crate::element::{Drawable, DrawableCircle, DrawableSquare};
use crate::error::Result;
use crate::renderer::{DrawingApi, RendererKind};

/// Data form of a drawable tree, one variant per drawable family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ShapeSpec {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        renderer: RendererKind,
    },
    Square {
        x: f64,
        y: f64,
        side: f64,
        renderer: RendererKind,
    },
    Composite {
        #[serde(default)]
        shapes: Vec<ShapeSpec>,
    },
    Filled {
        shape: Box<ShapeSpec>,
        color: String,
    },
    Decorated {
        shape: Box<ShapeSpec>,
    },
    Adapted {
        shape: Box<ShapeSpec>,
    },
}

/// Hands out one renderer per kind so every shape bound to `api1` in a scene
/// shares the same instance.
#[derive(Default)]
struct Renderers {
    apis: HashMap<RendererKind, Rc<dyn DrawingApi>>,
}

impl Renderers {
    fn get(&mut self, kind: RendererKind) -> Rc<dyn DrawingApi> {
        self.apis
            .entry(kind)
            .or_insert_with(|| {
                let tag: &'static str = kind.into();
                log::trace!("scene: created {} renderer", tag);
                kind.into_api()
            })
            .clone()
    }
}

impl ShapeSpec {
    fn build(&self, renderers: &mut Renderers) -> Result<Box<dyn Drawable>> {
        let drawable: Box<dyn Drawable> = match self {
            ShapeSpec::Circle {
                x,
                y,
                radius,
                renderer,
            } => Box::new(DrawableCircle::try_new(
                *x,
                *y,
                *radius,
                renderers.get(*renderer),
            )?),
            ShapeSpec::Square {
                x,
                y,
                side,
                renderer,
            } => Box::new(DrawableSquare::try_new(
                *x,
                *y,
                *side,
                renderers.get(*renderer),
            )?),
            ShapeSpec::Composite { shapes } => {
                let mut composite = CompositeShape::new();
                for shape in shapes {
                    composite.add(shape.build(renderers)?);
                }
                Box::new(composite)
            }
            ShapeSpec::Filled { shape, color } => Box::new(FilledShapeDecorator::new(
                shape.build(renderers)?,
                color.clone(),
            )),
            ShapeSpec::Decorated { shape } => {
                Box::new(ShapeDecorator::new(shape.build(renderers)?))
            }
            ShapeSpec::Adapted { shape } => {
                Box::new(ShapeToDrawableAdapter::new(shape.build(renderers)?))
            }
        };
        Ok(drawable)
    }

    /// Builds a standalone drawable with its own renderer instances.
    pub fn into_drawable(&self) -> Result<Box<dyn Drawable>> {
        self.build(&mut Renderers::default())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Result<Canvas> {
        let mut options = CanvasOptions::default();
        if let Some(name) = &self.name {
            options.name = name.clone();
        }
        let mut canvas = Canvas::new(options);
        let mut renderers = Renderers::default();
        for shape in &self.shapes {
            canvas.add_shape(ShapeToDrawableAdapter::new(shape.build(&mut renderers)?));
        }
        log::debug!(
            "scene {}: built {} top-level shapes",
            canvas.name(),
            canvas.len()
        );
        Ok(canvas)
    }

    /// The demo wiring expressed as data.
    pub fn reference() -> Self {
        let circle1 = ShapeSpec::Circle {
            x: 10.0,
            y: 10.0,
            radius: 5.0,
            renderer: RendererKind::Api1,
        };
        let circle2 = ShapeSpec::Circle {
            x: 20.0,
            y: 20.0,
            radius: 10.0,
            renderer: RendererKind::Api2,
        };
        let square1 = ShapeSpec::Square {
            x: 30.0,
            y: 30.0,
            side: 15.0,
            renderer: RendererKind::Api1,
        };

        SceneDescription {
            name: Some("reference".to_string()),
            shapes: vec![
                ShapeSpec::Filled {
                    shape: Box::new(circle1.clone()),
                    color: "red".to_string(),
                },
                ShapeSpec::Filled {
                    shape: Box::new(square1.clone()),
                    color: "blue".to_string(),
                },
                ShapeSpec::Composite {
                    shapes: vec![circle1, circle2, square1],
                },
            ],
        }
    }
}
