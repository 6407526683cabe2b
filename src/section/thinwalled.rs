//! Thin-walled section - a centerline polyline with per-segment wall thickness

use std::cell::Cell;

use nalgebra::{Point2, Rotation2};
use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::geom::Point;
use crate::properties::{RawMoments, SectionProperties};

/// One trapezoidal wall panel between two centerline points.
///
/// The wall is modeled as a line of material of the given thickness along the
/// centerline, so the moment contributions are the thin-wall approximations,
/// not true trapezoid-area integrals. The free-end flags mark centerline ends
/// not connected to another panel; downstream shear and torsion analyses key
/// off them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pnt_a: Point,
    pnt_b: Point,
    thickness: f64,
    free_a: bool,
    free_b: bool,
}

impl WallSegment {
    /// Create a wall panel between two centerline points
    pub fn new(pnt_a: Point, pnt_b: Point, thickness: f64) -> Self {
        Self {
            pnt_a,
            pnt_b,
            thickness,
            free_a: false,
            free_b: false,
        }
    }

    /// Centerline start point
    pub fn start(&self) -> Point {
        self.pnt_a
    }

    /// Centerline end point
    pub fn end(&self) -> Point {
        self.pnt_b
    }

    /// Wall thickness
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Centerline length
    pub fn length(&self) -> f64 {
        self.pnt_a.distance_to(&self.pnt_b)
    }

    /// Centerline orientation in radians, measured from the y-axis
    pub fn angle(&self) -> f64 {
        (self.pnt_b.z - self.pnt_a.z).atan2(self.pnt_b.y - self.pnt_a.y)
    }

    /// Whether the start end is unconnected
    pub fn free_at_start(&self) -> bool {
        self.free_a
    }

    /// Whether the end is unconnected
    pub fn free_at_end(&self) -> bool {
        self.free_b
    }

    /// One-edge-free: exactly one end unconnected
    pub fn is_oef(&self) -> bool {
        self.free_a != self.free_b
    }

    /// No-edge-free: both ends connected
    pub fn is_nef(&self) -> bool {
        !self.free_a && !self.free_b
    }

    /// Thin-wall area and moment contributions
    pub fn moments(&self) -> RawMoments {
        let (ya, za) = (self.pnt_a.y, self.pnt_a.z);
        let (yb, zb) = (self.pnt_b.y, self.pnt_b.z);
        let a = self.thickness * self.length();
        RawMoments {
            a,
            ay: a * (yb + ya) / 2.0,
            az: a * (zb + za) / 2.0,
            ayy: a * (yb * yb + yb * ya + ya * ya) / 3.0,
            azz: a * (zb * zb + zb * za + za * za) / 3.0,
            ayz: a * (zb * yb + za * ya + (zb * ya + za * yb) / 2.0) / 3.0,
        }
    }
}

/// A cross-section approximated as a centerline polyline with per-segment
/// wall thickness.
///
/// A thickness list one shorter than the point list describes an open
/// section; equal lengths describe a closed loop with an explicit wrap-around
/// wall from the last point back to the first. This list-length rule is kept
/// for compatibility with established section libraries rather than inferring
/// closure from coincident endpoints.
#[derive(Debug, Clone)]
pub struct ThinWalledSection {
    y: Vec<f64>,
    z: Vec<f64>,
    t: Vec<f64>,
    label: Option<String>,
    segments: Vec<WallSegment>,
    cache: Cell<Option<SectionProperties>>,
}

impl ThinWalledSection {
    /// Build a thin-walled section from centerline coordinates and wall
    /// thicknesses.
    pub fn new(y: Vec<f64>, z: Vec<f64>, t: Vec<f64>) -> SectionResult<Self> {
        if y.len() != z.len() {
            return Err(SectionError::CoordinateLengthMismatch {
                y_len: y.len(),
                z_len: z.len(),
            });
        }
        if y.len() < 2 {
            return Err(SectionError::TooFewPoints {
                needed: 2,
                got: y.len(),
            });
        }
        if t.len() != y.len() && t.len() != y.len() - 1 {
            return Err(SectionError::ThicknessLengthMismatch {
                t_len: t.len(),
                point_len: y.len(),
            });
        }
        let mut section = Self {
            y,
            z,
            t,
            label: None,
            segments: Vec::new(),
            cache: Cell::new(None),
        };
        section.rebuild();
        Ok(section)
    }

    /// Attach a label used by report and plot consumers
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Section label, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Centerline y-coordinates
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Centerline z-coordinates
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Wall thicknesses
    pub fn thicknesses(&self) -> &[f64] {
        &self.t
    }

    /// Whether the section is open (no wrap-around wall)
    pub fn is_open(&self) -> bool {
        self.t.len() != self.y.len()
    }

    /// The built wall panels
    pub fn segments(&self) -> &[WallSegment] {
        &self.segments
    }

    /// The full derived property bundle, computed on first read after any
    /// mutation and memoized until the next one.
    pub fn properties(&self) -> SectionResult<SectionProperties> {
        if let Some(props) = self.cache.get() {
            return Ok(props);
        }
        let props = SectionProperties::from_moments(self.raw_moments())?;
        self.cache.set(Some(props));
        Ok(props)
    }

    /// Section area
    pub fn area(&self) -> SectionResult<f64> {
        Ok(self.properties()?.a)
    }

    /// Centroid as (cy, cz)
    pub fn centroid(&self) -> SectionResult<(f64, f64)> {
        let props = self.properties()?;
        Ok((props.cy, props.cz))
    }

    /// Mirror about the y-axis (negate z)
    pub fn mirror_y(&mut self) {
        for zi in &mut self.z {
            *zi = -*zi;
        }
        self.rebuild();
    }

    /// Mirror about the z-axis (negate y)
    pub fn mirror_z(&mut self) {
        for yi in &mut self.y {
            *yi = -*yi;
        }
        self.rebuild();
    }

    /// Translate by (dy, dz)
    pub fn translate(&mut self, dy: f64, dz: f64) {
        for yi in &mut self.y {
            *yi += dy;
        }
        for zi in &mut self.z {
            *zi += dz;
        }
        self.rebuild();
    }

    /// Rotate about the origin by an angle in degrees
    pub fn rotate(&mut self, degrees: f64) {
        let rotation = Rotation2::new(degrees.to_radians());
        for i in 0..self.y.len() {
            let p = rotation * Point2::new(self.y[i], self.z[i]);
            self.y[i] = p.x;
            self.z[i] = p.y;
        }
        self.rebuild();
    }

    fn raw_moments(&self) -> RawMoments {
        self.segments.iter().map(WallSegment::moments).sum()
    }

    /// Rebuild the wall panels from the stored lists, normalize the winding,
    /// and clear the property cache.
    fn rebuild(&mut self) {
        self.segments = build_segments(&self.y, &self.z, &self.t);
        if self.raw_moments().a < 0.0 {
            log::debug!("reversing centerline orientation, accumulated area was negative");
            self.y.reverse();
            self.z.reverse();
            self.t.reverse();
            self.segments = build_segments(&self.y, &self.z, &self.t);
        }
        self.cache.set(None);
    }
}

/// Build one wall panel per consecutive centerline pair.
///
/// With as many thicknesses as points the final panel is the explicit
/// wrap-around wall (last, first) using the last thickness; one fewer
/// thickness leaves the section open, flagging the outer ends free.
fn build_segments(y: &[f64], z: &[f64], t: &[f64]) -> Vec<WallSegment> {
    let num_t = t.len();
    let num_p = y.len();
    let pnt = |i: usize| Point::new(y[i], z[i]);
    let mut segments = Vec::with_capacity(num_t);
    for i in 0..num_t - 1 {
        segments.push(WallSegment::new(pnt(i), pnt(i + 1), t[i]));
    }
    let last = if num_p > num_t {
        WallSegment::new(pnt(num_p - 2), pnt(num_p - 1), t[num_t - 1])
    } else {
        WallSegment::new(pnt(num_p - 1), pnt(0), t[num_t - 1])
    };
    segments.push(last);
    if num_p != num_t {
        segments[0].free_a = true;
        segments[num_t - 1].free_b = true;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wall_segment_contributions() {
        // Vertical wall from (1, 0) to (1, 2), thickness 0.1
        let seg = WallSegment::new(Point::new(1.0, 0.0), Point::new(1.0, 2.0), 0.1);
        let m = seg.moments();
        assert_relative_eq!(m.a, 0.2, epsilon = 1e-14);
        assert_relative_eq!(m.ay, 0.2, epsilon = 1e-14);
        assert_relative_eq!(m.az, 0.2, epsilon = 1e-14);
        assert_relative_eq!(m.ayy, 0.2, epsilon = 1e-14);
        assert_relative_eq!(m.azz, 0.2 * 4.0 / 3.0, epsilon = 1e-14);
        assert_relative_eq!(m.ayz, 0.2, epsilon = 1e-14);
    }

    #[test]
    fn open_section_flags_outer_ends() {
        let section = ThinWalledSection::new(
            vec![0.0, 0.0, 1.0],
            vec![0.0, 1.0, 1.0],
            vec![0.1, 0.1],
        )
        .unwrap();
        assert!(section.is_open());
        let segs = section.segments();
        assert_eq!(segs.len(), 2);
        assert!(segs[0].free_at_start());
        assert!(!segs[0].free_at_end());
        assert!(!segs[1].free_at_start());
        assert!(segs[1].free_at_end());
        assert!(segs[0].is_oef());
        assert!(segs[1].is_oef());
        assert!(!segs[0].is_nef());
    }

    #[test]
    fn closed_section_wraps_with_last_thickness() {
        let section = ThinWalledSection::new(
            vec![0.0, 1.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.1, 0.2, 0.1, 0.3],
        )
        .unwrap();
        assert!(!section.is_open());
        let segs = section.segments();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3].start(), Point::new(0.0, 1.0));
        assert_eq!(segs[3].end(), Point::new(0.0, 0.0));
        assert_relative_eq!(segs[3].thickness(), 0.3);
        assert!(segs.iter().all(WallSegment::is_nef));
    }

    #[test]
    fn middle_segments_of_open_sections_are_nef() {
        let section = ThinWalledSection::new(
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0, 0.0],
            vec![0.1, 0.1, 0.1],
        )
        .unwrap();
        let segs = section.segments();
        assert_eq!(segs.len(), 3);
        assert!(segs[0].is_oef());
        assert!(segs[1].is_nef());
        assert!(segs[2].is_oef());
    }

    #[test]
    fn thickness_count_mismatch_fails_fast() {
        let result = ThinWalledSection::new(
            vec![0.0, 0.0, 1.0],
            vec![0.0, 1.0, 1.0],
            vec![0.1],
        );
        assert!(matches!(
            result,
            Err(SectionError::ThicknessLengthMismatch {
                t_len: 1,
                point_len: 3
            })
        ));
    }

    #[test]
    fn coordinate_mismatch_fails_fast() {
        let result = ThinWalledSection::new(vec![0.0, 1.0], vec![0.0], vec![0.1]);
        assert!(matches!(
            result,
            Err(SectionError::CoordinateLengthMismatch { .. })
        ));
    }

    #[test]
    fn zero_thickness_surfaces_as_zero_area() {
        let section = ThinWalledSection::new(
            vec![0.0, 1.0],
            vec![0.0, 0.0],
            vec![0.0],
        )
        .unwrap();
        assert!(matches!(
            section.properties(),
            Err(SectionError::ZeroArea)
        ));
    }

    #[test]
    fn segment_angle_and_length() {
        let seg = WallSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 0.05);
        assert_relative_eq!(seg.length(), std::f64::consts::SQRT_2, epsilon = 1e-14);
        assert_relative_eq!(seg.angle(), std::f64::consts::FRAC_PI_4, epsilon = 1e-14);
    }
}
