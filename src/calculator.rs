use tracing::debug;

use crate::shape::Shape;

/// Sums the areas of a borrowed, ordered collection of shapes.
///
/// The calculator holds a reference to the caller's slice rather than a copy,
/// so it sees exactly what the caller owns for as long as it lives.
#[derive(Clone, Copy)]
pub struct AreaCalculator<'a> {
    shapes: &'a [Box<dyn Shape>],
}

impl<'a> AreaCalculator<'a> {
    pub fn new(shapes: &'a [Box<dyn Shape>]) -> Self {
        AreaCalculator { shapes }
    }

    /// Total area, visiting shapes in slice order. An empty slice sums to 0.
    pub fn sum(&self) -> f64 {
        let mut total = 0.0;
        for (index, shape) in self.shapes.iter().enumerate() {
            let area = shape.area();
            debug!(index, shape = shape.name(), area, "adding shape area");
            total += area;
        }
        debug!(count = self.shapes.len(), total, "summed shape areas");
        total
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
