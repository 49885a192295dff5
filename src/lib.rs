//! A shape-area calculator laid out along the SOLID principles.
//!
//! - [`Shape`] is the one capability every shape offers (interface segregation).
//! - [`Rectangle`], [`Circle`] and [`Triangle`] honour that contract and can
//!   stand in for each other anywhere a `Shape` is expected (Liskov).
//! - [`AreaCalculator`] only sums, [`AreaPrinter`] only reports (single
//!   responsibility).
//! - Both depend on the trait, never on concrete shapes, so adding a shape
//!   touches neither (open-closed, dependency inversion).
//!
//! ```
//! use solid_shapes::{AreaCalculator, AreaPrinter, Circle, Rectangle, Shape};
//!
//! let shapes: Vec<Box<dyn Shape>> = vec![
//!     Box::new(Rectangle::new(4.0, 5.0)),
//!     Box::new(Circle::new(3.0)),
//! ];
//! let calculator = AreaCalculator::new(&shapes);
//! let printer = AreaPrinter::new(&calculator);
//! assert_eq!(printer.report(), "Sum of the areas: 48.27433388230814");
//! ```

pub mod calculator;
pub mod error;
pub mod printer;
pub mod scene;
pub mod shape;

pub use calculator::AreaCalculator;
pub use error::{Result, ShapeError};
pub use printer::AreaPrinter;
pub use scene::{Scene, ShapeSpec};
pub use shape::{Circle, Rectangle, Shape, Triangle};
