//! Boundary point in the y-z plane

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point in the section plane, with y horizontal and z vertical
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// y-coordinate
    pub y: f64,
    /// z-coordinate
    pub z: f64,
}

impl Point {
    /// Create a new point
    pub fn new(y: f64, z: f64) -> Self {
        Self { y, z }
    }

    /// Distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    /// Direction vector from this point to another
    pub fn vector_to(&self, other: &Point) -> Vector2<f64> {
        Vector2::new(other.y - self.y, other.z - self.z)
    }

    /// Coordinates as a nalgebra vector (y maps to x, z maps to y)
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.y, self.z)
    }

    /// Point from a nalgebra vector
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self { y: v.x, z: v.y }
    }
}
