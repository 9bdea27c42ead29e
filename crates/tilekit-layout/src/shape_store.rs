//! Ordered storage for committed shapes.
//!
//! Insertion order is both the paint order (later shapes on top) and the
//! 1-based index shown in the summary list.

use crate::model::Shape;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Appends a committed shape on top of the existing ones.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Swaps in a whole new sequence. Nothing from the old one survives.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}

impl<'a> IntoIterator for &'a ShapeStore {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
