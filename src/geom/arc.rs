//! Circular-arc boundary segment and corner fillet fitting

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::properties::RawMoments;

use super::{Point, LEN_TOL};

/// A circular-arc boundary segment.
///
/// The arc runs from its start tangent point through `sweep` radians about
/// the center; a negative sweep turns clockwise. Arcs produced by
/// [`Arc::fillet`] also remember the sharp corner vertex they replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    center: Point,
    radius: f64,
    theta_a: f64,
    sweep: f64,
    pnt_a: Point,
    pnt_b: Point,
    corner: Option<Point>,
}

impl Arc {
    /// Fit the fillet arc replacing the sharp corner at `corner`.
    ///
    /// `pnt_a` is the start of the incoming edge and `pnt_c` the end of the
    /// outgoing edge. The fitted arc is tangent to both edges, with its
    /// center on the interior side of the corner, so the winding of the
    /// surrounding path carries over to the sweep direction.
    pub fn fillet(pnt_a: Point, corner: Point, pnt_c: Point, radius: f64) -> SectionResult<Self> {
        if radius <= 0.0 {
            return Err(SectionError::InvalidGeometry(format!(
                "fillet radius must be positive, got {radius}"
            )));
        }
        let ab = pnt_a.vector_to(&corner);
        let bc = corner.vector_to(&pnt_c);
        let len_in = ab.norm();
        let len_out = bc.norm();
        if len_in < LEN_TOL || len_out < LEN_TOL {
            return Err(SectionError::InvalidGeometry(format!(
                "zero-length edge at fillet corner ({}, {})",
                corner.y, corner.z
            )));
        }
        let u = ab / len_in;
        let v = bc / len_out;
        let turn = u.perp(&v);
        if turn.abs() < LEN_TOL {
            return Err(SectionError::InvalidGeometry(format!(
                "cannot fillet the collinear corner at ({}, {})",
                corner.y, corner.z
            )));
        }
        // Interior angle between the two edge rays leaving the corner
        let phi = (-u.dot(&v)).clamp(-1.0, 1.0).acos();
        let half = phi / 2.0;
        let trim = radius / half.tan();
        if trim > len_in + LEN_TOL || trim > len_out + LEN_TOL {
            return Err(SectionError::InfeasibleFillet {
                radius,
                max_radius: len_in.min(len_out) * half.tan(),
                y: corner.y,
                z: corner.z,
            });
        }
        let bisector = (v - u).normalize();
        let center = Point::from_vector(corner.to_vector() + bisector * (radius / half.sin()));
        let tan_a = Point::from_vector(corner.to_vector() - u * trim);
        let tan_b = Point::from_vector(corner.to_vector() + v * trim);
        let theta_a = (tan_a.z - center.z).atan2(tan_a.y - center.y);
        let theta_b = (tan_b.z - center.z).atan2(tan_b.y - center.y);
        // The fillet sweep magnitude is pi - phi < pi, so wrapping the raw
        // angle difference into (-pi, pi] recovers the signed sweep.
        let sweep = wrap_to_pi(theta_b - theta_a);
        Ok(Self {
            center,
            radius,
            theta_a,
            sweep,
            pnt_a: tan_a,
            pnt_b: tan_b,
            corner: Some(corner),
        })
    }

    /// Construct an arc directly from its center, radius, start angle and
    /// signed sweep.
    pub fn from_center(center: Point, radius: f64, theta_a: f64, sweep: f64) -> Self {
        let at = |theta: f64| {
            Point::new(
                center.y + radius * theta.cos(),
                center.z + radius * theta.sin(),
            )
        };
        Self {
            center,
            radius,
            theta_a,
            sweep,
            pnt_a: at(theta_a),
            pnt_b: at(theta_a + sweep),
            corner: None,
        }
    }

    /// Start tangent point
    pub fn start(&self) -> Point {
        self.pnt_a
    }

    /// End tangent point
    pub fn end(&self) -> Point {
        self.pnt_b
    }

    /// Arc center
    pub fn center(&self) -> Point {
        self.center
    }

    /// Arc radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Start angle in radians, measured at the center
    pub fn start_angle(&self) -> f64 {
        self.theta_a
    }

    /// Signed sweep in radians; negative turns clockwise
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// The sharp corner vertex this arc replaced, if it was fitted as a fillet
    pub fn corner(&self) -> Option<Point> {
        self.corner
    }

    /// Midpoint of the chord between the tangent points, for plotting
    pub fn chord_midpoint(&self) -> Point {
        Point::new(
            (self.pnt_a.y + self.pnt_b.y) / 2.0,
            (self.pnt_a.z + self.pnt_b.z) / 2.0,
        )
    }

    /// Point on the arc halfway through the sweep, for plotting
    pub fn arc_midpoint(&self) -> Point {
        let theta = self.theta_a + self.sweep / 2.0;
        Point::new(
            self.center.y + self.radius * theta.cos(),
            self.center.z + self.radius * theta.sin(),
        )
    }

    /// Arc length
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Origin-referenced area and moment contributions.
    ///
    /// Exact integrals of the same Green's-theorem forms the straight
    /// segments use, evaluated along the arc, so arcs and lines combine into
    /// consistent section totals.
    pub fn moments(&self) -> RawMoments {
        let (yc, zc) = (self.center.y, self.center.z);
        let r = self.radius;
        let t1 = self.theta_a;
        let t2 = self.theta_a + self.sweep;
        let (s1, c1) = t1.sin_cos();
        let (s2, c2) = t2.sin_cos();

        // Trigonometric power integrals over the sweep
        let j0 = self.sweep;
        let jc = s2 - s1;
        let js = c1 - c2;
        let jcc = (j0 + s2 * c2 - s1 * c1) / 2.0;
        let jss = (j0 - s2 * c2 + s1 * c1) / 2.0;
        let jsc = (s2 * s2 - s1 * s1) / 2.0;
        let jccc = (s2 - s2.powi(3) / 3.0) - (s1 - s1.powi(3) / 3.0);
        let jsss = (c1 - c1.powi(3) / 3.0) - (c2 - c2.powi(3) / 3.0);
        let jscc = (c1.powi(3) - c2.powi(3)) / 3.0;
        let jssc = (s2.powi(3) - s1.powi(3)) / 3.0;

        let r2 = r * r;
        let r3 = r2 * r;

        let a = (r2 * j0 + r * (yc * jc + zc * js)) / 2.0;
        let ay = r / 3.0
            * (yc * yc * jc
                + yc * zc * js
                + yc * r * (j0 + jcc)
                + zc * r * jsc
                + r2 * jc);
        let az = r / 3.0
            * (yc * zc * jc
                + zc * zc * js
                + yc * r * jsc
                + zc * r * (j0 + jss)
                + r2 * js);
        let ayy = r / 4.0
            * (yc.powi(3) * jc
                + yc * yc * zc * js
                + yc * yc * r * (j0 + 2.0 * jcc)
                + 2.0 * yc * zc * r * jsc
                + yc * r2 * (2.0 * jc + jccc)
                + zc * r2 * jscc
                + r3 * jcc);
        let azz = r / 4.0
            * (yc * zc * zc * jc
                + zc.powi(3) * js
                + 2.0 * yc * zc * r * jsc
                + zc * zc * r * (j0 + 2.0 * jss)
                + yc * r2 * jssc
                + zc * r2 * (2.0 * js + jsss)
                + r3 * jss);
        let ayz = r / 4.0
            * (yc * yc * zc * jc
                + yc * zc * zc * js
                + (yc * yc + zc * zc) * r * jsc
                + 2.0 * yc * zc * r * j0
                + yc * r2 * (js + jscc)
                + zc * r2 * (jc + jssc)
                + r3 * jsc);

        RawMoments {
            a,
            ay,
            az,
            ayy,
            azz,
            ayz,
        }
    }
}

/// Wrap an angle into (-pi, pi]
fn wrap_to_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
