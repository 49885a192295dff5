//! The shape capability and its built-in implementers.
//!
//! Each shape only knows how to compute its own area. Nothing that sums or
//! reports areas depends on these concrete types, only on [`Shape`].

use std::f64::consts::PI;

// =============================================================================
// Shape capability
// =============================================================================

/// Anything with a two-dimensional area.
///
/// `area` must be pure: it reads only the value's own state and has no side
/// effects. Inputs are not validated, so negative dimensions give whatever the
/// formula gives.
pub trait Shape {
    fn area(&self) -> f64;

    /// Label used in diagnostics. Never part of the report.
    fn name(&self) -> &str {
        "shape"
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// =============================================================================
// Implementers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn name(&self) -> &str {
        "rectangle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * (self.radius * self.radius)
    }

    fn name(&self) -> &str {
        "circle"
    }
}

/// Added after the calculator and printer were written; neither needed a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Triangle { base, height }
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn name(&self) -> &str {
        "triangle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rectangle_area() {
        assert_eq!(Rectangle::new(4.0, 5.0).area(), 20.0);
    }

    #[test]
    fn test_rectangle_zero_side() {
        assert_eq!(Rectangle::new(0.0, 7.5).area(), 0.0);
        assert_eq!(Rectangle::new(3.0, 0.0).area(), 0.0);
    }

    #[test]
    fn test_rectangle_negative_side_is_not_rejected() {
        assert_eq!(Rectangle::new(-2.0, 3.0).area(), -6.0);
    }

    #[test]
    fn test_circle_area() {
        assert_eq!(Circle::new(3.0).area(), PI * 9.0);
        assert_eq!(Circle::new(3.0).area().to_string(), "28.274333882308138");
    }

    #[test]
    fn test_circle_squares_radius_before_scaling() {
        // (PI * r) * r rounds differently for this radius.
        assert_eq!(Circle::new(0.7).area().to_string(), "1.5393804002589984");
        assert_eq!(Circle::new(0.7).area(), PI * (0.7 * 0.7));
    }

    #[test]
    fn test_accessors_return_constructor_arguments() {
        let rect = Rectangle::new(4.0, 5.0);
        assert_eq!((rect.width(), rect.height()), (4.0, 5.0));
        assert_eq!(Circle::new(3.0).radius(), 3.0);
    }

    #[test]
    fn test_circle_negative_radius_squares_away() {
        assert_eq!(Circle::new(-3.0).area(), Circle::new(3.0).area());
    }

    #[test]
    fn test_triangle_area() {
        assert_eq!(Triangle::new(8.0, 6.0).area(), 24.0);
    }

    #[test]
    fn test_trait_objects_and_references() {
        let boxed: Box<dyn Shape> = Box::new(Rectangle::new(2.0, 3.0));
        assert_eq!(boxed.area(), 6.0);
        assert_eq!(boxed.name(), "rectangle");

        let circle = Circle::new(1.0);
        let by_ref: &dyn Shape = &circle;
        assert_eq!((&by_ref).area(), PI);
    }

    #[test]
    fn test_default_name() {
        struct Unit;
        impl Shape for Unit {
            fn area(&self) -> f64 {
                1.0
            }
        }
        assert_eq!(Unit.name(), "shape");
    }

    #[test]
    fn test_area_is_repeatable() {
        let circle = Circle::new(2.5);
        assert_eq!(circle.area(), circle.area());
    }

    proptest! {
        #[test]
        fn rectangle_area_is_product(w in -1e6f64..1e6, h in -1e6f64..1e6) {
            prop_assert_eq!(Rectangle::new(w, h).area(), w * h);
        }

        #[test]
        fn circle_area_matches_formula(r in -1e6f64..1e6) {
            prop_assert_eq!(Circle::new(r).area(), PI * (r * r));
            prop_assert!(Circle::new(r).area() >= 0.0);
        }
    }
}
