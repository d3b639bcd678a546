use std::fmt::Debug;

use crate::element::{Drawable, ObjectId};
use crate::error::{Result, ShapeError};
use crate::sink::DrawContext;

// 容器 trait
pub trait ShapeContainer: Debug {
    type Item: Drawable;

    fn add(&mut self, item: Self::Item) -> ObjectId;
    fn remove(&mut self, id: &ObjectId) -> Result<Self::Item>;
    fn get(&self, id: &ObjectId) -> Option<&Self::Item>;
    fn ids(&self) -> Vec<ObjectId>;
    fn len(&self) -> usize;

    fn contains(&self, id: &ObjectId) -> bool {
        self.get(id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered entries keyed by locally issued ids. Shared by the
/// composite and the canvas.
#[derive(Debug)]
pub(crate) struct Entries<T> {
    next_id: u64,
    items: Vec<(ObjectId, T)>,
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Entries<T> {
    pub(crate) fn push(&mut self, item: T) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        self.items.push((id, item));
        id
    }

    pub(crate) fn remove(&mut self, id: &ObjectId) -> Result<T> {
        let position = self
            .items
            .iter()
            .position(|(entry_id, _)| entry_id == id)
            .ok_or(ShapeError::ElementNotFound { id: *id })?;
        Ok(self.items.remove(position).1)
    }

    pub(crate) fn get(&self, id: &ObjectId) -> Option<&T> {
        self.items
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, item)| item)
    }

    pub(crate) fn ids(&self) -> Vec<ObjectId> {
        self.items.iter().map(|(id, _)| *id).collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|(_, item)| item)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

/// A group of drawables drawn together, children first to last.
#[derive(Debug, Default)]
pub struct CompositeShape {
    children: Entries<Box<dyn Drawable>>,
}

impl CompositeShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `add` that boxes the child.
    pub fn add_shape(&mut self, shape: impl Drawable + 'static) -> ObjectId {
        self.add(Box::new(shape))
    }

    pub fn remove_shape(&mut self, id: &ObjectId) -> Result<Box<dyn Drawable>> {
        self.remove(id)
    }
}

impl ShapeContainer for CompositeShape {
    type Item = Box<dyn Drawable>;

    fn add(&mut self, item: Self::Item) -> ObjectId {
        let id = self.children.push(item);
        log::debug!("composite: added child {} ({} total)", id, self.children.len());
        id
    }

    fn remove(&mut self, id: &ObjectId) -> Result<Self::Item> {
        match self.children.remove(id) {
            Ok(child) => {
                log::debug!("composite: removed child {}", id);
                Ok(child)
            }
            Err(err) => {
                log::debug!("composite: {}", err);
                Err(err)
            }
        }
    }

    fn get(&self, id: &ObjectId) -> Option<&Self::Item> {
        self.children.get(id)
    }

    fn ids(&self) -> Vec<ObjectId> {
        self.children.ids()
    }

    fn len(&self) -> usize {
        self.children.len()
    }
}

impl Drawable for CompositeShape {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        for child in self.children.iter() {
            child.draw(ctx);
        }
    }
}
