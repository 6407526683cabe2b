//! General section - a closed boundary of vertices with optional corner fillets

use std::cell::Cell;

use nalgebra::{Point2, Rotation2};

use crate::error::{SectionError, SectionResult};
use crate::geom::{Arc, Line, Point, Segment, LEN_TOL};
use crate::properties::{RawMoments, SectionProperties};

/// A closed cross-section boundary defined by vertices and per-vertex fillet
/// radii.
///
/// Construction expands the vertex list into a cyclic path of straight lines
/// and tangent fillet arcs, then normalizes the winding so the enclosed area
/// is positive. Every geometric mutation rebuilds the path wholesale and
/// clears the cached property bundle, so a partially stale cache is never
/// observable.
#[derive(Debug, Clone)]
pub struct GeneralSection {
    y: Vec<f64>,
    z: Vec<f64>,
    r: Vec<f64>,
    label: Option<String>,
    path: Vec<Segment>,
    cache: Cell<Option<SectionProperties>>,
}

impl GeneralSection {
    /// Build a section from vertex coordinates and matching fillet radii.
    ///
    /// Consecutive duplicate vertices are removed (wrap-around inclusive)
    /// before path construction; each removal is logged, not an error. A
    /// radius of zero leaves that corner sharp.
    pub fn new(y: Vec<f64>, z: Vec<f64>, r: Vec<f64>) -> SectionResult<Self> {
        if y.len() != z.len() {
            return Err(SectionError::CoordinateLengthMismatch {
                y_len: y.len(),
                z_len: z.len(),
            });
        }
        if r.len() != y.len() {
            return Err(SectionError::RadiusLengthMismatch {
                r_len: r.len(),
                point_len: y.len(),
            });
        }
        let (y, z, r) = cleanup_points(y, z, r);
        if y.len() < 3 {
            return Err(SectionError::TooFewPoints {
                needed: 3,
                got: y.len(),
            });
        }
        let mut section = Self {
            y,
            z,
            r,
            label: None,
            path: Vec::new(),
            cache: Cell::new(None),
        };
        section.rebuild()?;
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

    /// Vertex y-coordinates after cleanup and orientation normalization
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Vertex z-coordinates after cleanup and orientation normalization
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Fillet radii, one per vertex
    pub fn radii(&self) -> &[f64] {
        &self.r
    }

    /// The built boundary path
    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    /// Start points of each path segment, in order
    pub fn boundary_points(&self) -> Vec<Point> {
        self.path.iter().map(Segment::start).collect()
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
    pub fn mirror_y(&mut self) -> SectionResult<()> {
        for zi in &mut self.z {
            *zi = -*zi;
        }
        self.rebuild()
    }

    /// Mirror about the z-axis (negate y)
    pub fn mirror_z(&mut self) -> SectionResult<()> {
        for yi in &mut self.y {
            *yi = -*yi;
        }
        self.rebuild()
    }

    /// Translate by (dy, dz)
    pub fn translate(&mut self, dy: f64, dz: f64) -> SectionResult<()> {
        for yi in &mut self.y {
            *yi += dy;
        }
        for zi in &mut self.z {
            *zi += dz;
        }
        self.rebuild()
    }

    /// Rotate about the origin by an angle in degrees
    pub fn rotate(&mut self, degrees: f64) -> SectionResult<()> {
        let rotation = Rotation2::new(degrees.to_radians());
        for i in 0..self.y.len() {
            let p = rotation * Point2::new(self.y[i], self.z[i]);
            self.y[i] = p.x;
            self.z[i] = p.y;
        }
        self.rebuild()
    }

    fn raw_moments(&self) -> RawMoments {
        self.path.iter().map(Segment::moments).sum()
    }

    /// Rebuild the path from the stored lists, normalize the winding to a
    /// positive enclosed area, and clear the property cache.
    fn rebuild(&mut self) -> SectionResult<()> {
        self.path = build_path(&self.y, &self.z, &self.r)?;
        if self.raw_moments().a < 0.0 {
            log::debug!("reversing boundary orientation, enclosed area was negative");
            self.y.reverse();
            self.z.reverse();
            self.r.reverse();
            self.path = build_path(&self.y, &self.z, &self.r)?;
        }
        self.cache.set(None);
        Ok(())
    }
}

/// Drop vertices coordinate-identical to their cyclic predecessor.
///
/// Comparison is against the predecessor in the input list, wrap-around
/// inclusive, so the path builder never sees a zero-length edge.
fn cleanup_points(y: Vec<f64>, z: Vec<f64>, r: Vec<f64>) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let num = y.len();
    let mut newy = Vec::with_capacity(num);
    let mut newz = Vec::with_capacity(num);
    let mut newr = Vec::with_capacity(num);
    for i in 0..num {
        let prev = if i == 0 { num - 1 } else { i - 1 };
        if y[i] == y[prev] && z[i] == z[prev] {
            log::debug!("removed duplicate point ({}, {})", y[i], z[i]);
        } else {
            newy.push(y[i]);
            newz.push(z[i]);
            newr.push(r[i]);
        }
    }
    (newy, newz, newr)
}

/// Expand vertex and radius lists into the closed boundary path.
///
/// Fits a fillet arc at every vertex with nonzero radius, then walks the
/// cyclic line sequence trimming each line between the tangent points of its
/// neighboring arcs. Lines the trimming collapsed below the length tolerance
/// are dropped.
fn build_path(y: &[f64], z: &[f64], r: &[f64]) -> SectionResult<Vec<Segment>> {
    let num = y.len();
    let pnts: Vec<Point> = (0..num).map(|i| Point::new(y[i], z[i])).collect();
    let lines: Vec<Line> = (0..num)
        .map(|i| Line::new(pnts[i], pnts[(i + 1) % num]))
        .collect();
    let mut arcs: Vec<Option<Arc>> = Vec::with_capacity(num);
    for i in 0..num {
        if r[i] == 0.0 {
            arcs.push(None);
            continue;
        }
        if r[i] < 0.0 {
            return Err(SectionError::InvalidGeometry(format!(
                "negative fillet radius {} at vertex ({}, {})",
                r[i], y[i], z[i]
            )));
        }
        let prev = if i == 0 { num - 1 } else { i - 1 };
        let arc = Arc::fillet(pnts[prev], pnts[i], pnts[(i + 1) % num], r[i])?;
        arcs.push(Some(arc));
    }
    let mut path = Vec::with_capacity(2 * num);
    for i in 0..num {
        let next = (i + 1) % num;
        let start = match &arcs[i] {
            Some(arc) => {
                path.push(Segment::Arc(*arc));
                arc.end()
            }
            None => lines[i].start(),
        };
        let end = match &arcs[next] {
            Some(arc) => arc.start(),
            None => lines[i].end(),
        };
        let line = Line::new(start, end);
        if line.length() > LEN_TOL {
            path.push(Segment::Line(line));
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> GeneralSection {
        GeneralSection::new(
            vec![0.0, 1.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0; 4],
        )
        .unwrap()
    }

    #[test]
    fn path_is_closed() {
        let section = GeneralSection::new(
            vec![0.0, 2.0, 2.0, 0.0],
            vec![0.0, 0.0, 2.0, 2.0],
            vec![0.0, 0.5, 0.5, 0.0],
        )
        .unwrap();
        let path = section.path();
        assert!(!path.is_empty());
        for i in 0..path.len() {
            let end = path[i].end();
            let start = path[(i + 1) % path.len()].start();
            assert!(end.distance_to(&start) < 1e-9, "gap after segment {i}");
        }
    }

    #[test]
    fn filleted_corners_emit_arcs_and_trimmed_lines() {
        let section = GeneralSection::new(
            vec![0.0, 2.0, 2.0, 0.0],
            vec![0.0, 0.0, 2.0, 2.0],
            vec![0.5; 4],
        )
        .unwrap();
        let arcs = section.path().iter().filter(|s| s.as_arc().is_some()).count();
        assert_eq!(arcs, 4);
        assert_eq!(section.path().len(), 8);
    }

    #[test]
    fn fully_collapsed_lines_are_dropped() {
        // Fillet consuming the whole of both adjoining half-edges: the
        // trimmed line between the two arcs has zero length.
        let section = GeneralSection::new(
            vec![0.0, 2.0, 2.0, 0.0],
            vec![0.0, 0.0, 2.0, 2.0],
            vec![0.0, 1.0, 1.0, 0.0],
        )
        .unwrap();
        // Right edge collapses entirely between the two radius-1 fillets
        let lines = section
            .path()
            .iter()
            .filter(|s| s.as_arc().is_none())
            .count();
        assert_eq!(lines, 3);
    }

    #[test]
    fn clockwise_input_is_reversed() {
        let section = GeneralSection::new(
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0, 0.0],
            vec![0.0; 4],
        )
        .unwrap();
        let props = section.properties().unwrap();
        assert_relative_eq!(props.a, 1.0, epsilon = 1e-12);
        // Normalization is idempotent: a second read sees the same geometry
        let again = section.properties().unwrap();
        assert_relative_eq!(again.a, props.a);
    }

    #[test]
    fn duplicate_points_are_dropped() {
        let section = GeneralSection::new(
            vec![0.0, 1.0, 1.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0, 1.0],
            vec![0.0; 5],
        )
        .unwrap();
        assert_eq!(section.y().len(), 4);
        assert_relative_eq!(section.area().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn wraparound_duplicate_is_dropped() {
        let section = GeneralSection::new(
            vec![0.0, 1.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 1.0, 0.0],
            vec![0.0; 5],
        )
        .unwrap();
        assert_eq!(section.y().len(), 4);
    }

    #[test]
    fn too_few_points_fails_fast() {
        let result = GeneralSection::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 0.0]);
        assert!(matches!(
            result,
            Err(SectionError::TooFewPoints { needed: 3, got: 2 })
        ));
    }

    #[test]
    fn mismatched_lists_fail_fast() {
        assert!(matches!(
            GeneralSection::new(vec![0.0, 1.0, 1.0], vec![0.0, 0.0], vec![0.0; 3]),
            Err(SectionError::CoordinateLengthMismatch { .. })
        ));
        assert!(matches!(
            GeneralSection::new(vec![0.0, 1.0, 1.0], vec![0.0, 0.0, 1.0], vec![0.0; 2]),
            Err(SectionError::RadiusLengthMismatch { .. })
        ));
    }

    #[test]
    fn negative_radius_fails_fast() {
        let result = GeneralSection::new(
            vec![0.0, 1.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, -0.1, 0.0, 0.0],
        );
        assert!(matches!(result, Err(SectionError::InvalidGeometry(_))));
    }

    #[test]
    fn zero_area_surfaces_at_first_property_read() {
        let section = GeneralSection::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0; 3],
        )
        .unwrap();
        assert!(matches!(
            section.properties(),
            Err(SectionError::ZeroArea)
        ));
    }

    #[test]
    fn cache_is_cleared_by_mutation() {
        let mut section = unit_square();
        let before = section.properties().unwrap();
        section.translate(10.0, 0.0).unwrap();
        let after = section.properties().unwrap();
        assert_relative_eq!(after.cy, before.cy + 10.0, epsilon = 1e-12);
        assert_relative_eq!(after.a, before.a, epsilon = 1e-12);
    }

    #[test]
    fn label_is_preserved() {
        let section = unit_square().with_label("plate");
        assert_eq!(section.label(), Some("plate"));
    }
}
