use serde::{Deserialize, Serialize};

/// A 2D point in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component-wise offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Point2D {
        Point2D {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between two points.
    pub fn midpoint(&self, other: &Point2D) -> Point2D {
        Point2D {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Lift into 3D with `z = 0`, for renderers that address points as triples.
    pub fn to_3d(&self) -> [f64; 3] {
        [self.x, self.y, 0.0]
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::zero()
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

impl Size2D {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// True when either extent is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_midpoint() {
        let a = Point2D::new(-2.0, 0.0);
        let b = Point2D::new(2.0, 4.0);
        assert_eq!(a.midpoint(&b), Point2D::new(0.0, 2.0));
    }

    #[test]
    fn test_point_to_3d() {
        assert_eq!(Point2D::new(1.5, -2.0).to_3d(), [1.5, -2.0, 0.0]);
    }

    #[test]
    fn test_size_empty() {
        assert!(Size2D::zero().is_empty());
        assert!(Size2D::new(1.0, 0.0).is_empty());
        assert!(!Size2D::new(1.0, 2.0).is_empty());
    }
}
