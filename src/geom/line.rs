//! Straight boundary segment

use serde::{Deserialize, Serialize};

use crate::properties::RawMoments;

use super::Point;

/// A straight boundary segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point
    pub pnt_a: Point,
    /// End point
    pub pnt_b: Point,
}

impl Line {
    /// Create a line from start to end
    pub fn new(pnt_a: Point, pnt_b: Point) -> Self {
        Self { pnt_a, pnt_b }
    }

    /// Start point
    pub fn start(&self) -> Point {
        self.pnt_a
    }

    /// End point
    pub fn end(&self) -> Point {
        self.pnt_b
    }

    /// Segment length
    pub fn length(&self) -> f64 {
        self.pnt_a.distance_to(&self.pnt_b)
    }

    /// Origin-referenced area and moment contributions.
    ///
    /// Exact Green's-theorem integrals over the directed segment; each value
    /// equals the corresponding moment of the triangle spanned by the origin
    /// and the two endpoints, so summing over a closed positively wound
    /// boundary yields the section totals.
    pub fn moments(&self) -> RawMoments {
        let (ya, za) = (self.pnt_a.y, self.pnt_a.z);
        let (yb, zb) = (self.pnt_b.y, self.pnt_b.z);
        let w = ya * zb - yb * za;
        RawMoments {
            a: w / 2.0,
            ay: w * (ya + yb) / 6.0,
            az: w * (za + zb) / 6.0,
            ayy: w * (ya * ya + ya * yb + yb * yb) / 12.0,
            azz: w * (za * za + za * zb + zb * zb) / 12.0,
            ayz: w * (ya * zb + 2.0 * ya * za + 2.0 * yb * zb + yb * za) / 24.0,
        }
    }
}
