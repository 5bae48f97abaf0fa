//! Scene graph building blocks shared by axes and their children.

mod axis;
mod legend;
pub mod text;

pub use axis::{AxisConfig, AxisLine};
pub use legend::Legend;
pub use text::Text;

/// Data-space bounding box `(x_min, x_max, y_min, y_max)`.
///
/// The empty box has inverted infinite extents, so it is the identity of
/// [`Bounds::include_bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Create a new bounds with the given values.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounds containing no point at all.
    pub fn empty() -> Self {
        Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// Bounds of a single point.
    pub fn point(x: f64, y: f64) -> Self {
        Bounds::new(x, x, y, y)
    }

    /// True if no point has been included yet.
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// The four limits in `(x_min, x_max, y_min, y_max)` order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::empty()
    }
}

impl From<[f64; 4]> for Bounds {
    fn from(limits: [f64; 4]) -> Self {
        Bounds::new(limits[0], limits[1], limits[2], limits[3])
    }
}

/// Anything that can be placed inside an axis.
pub trait Renderable {
    /// pgfplots markup for this child, without indentation.
    fn render(&self) -> String;

    /// Data bounds of this child; [`Bounds::empty`] when it has no data.
    fn limits(&self) -> Bounds;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        let mut bounds = Bounds::empty();
        assert!(bounds.is_empty());
        bounds.include_bounds(&Bounds::new(0.0, 1.0, 0.0, 2.0));
        bounds.include_bounds(&Bounds::new(-1.0, 3.0, 0.0, 1.0));
        assert_eq!(bounds, Bounds::new(-1.0, 3.0, 0.0, 2.0));
        assert!(!bounds.is_empty());
    }

    #[test]
    fn test_empty_is_union_identity() {
        let mut bounds = Bounds::point(2.0, 5.0);
        bounds.include_bounds(&Bounds::empty());
        assert_eq!(bounds.to_array(), [2.0, 2.0, 5.0, 5.0]);
    }
}
