//! Raw moment accumulation and derived section properties

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// Tolerance below which moment differences are treated as zero when
/// resolving the principal axis orientation.
pub(crate) const MOMENT_TOL: f64 = 1e-12;

/// Area and moment integrals referenced to the coordinate origin.
///
/// Every boundary segment (line, arc, wall panel) contributes one of these;
/// the totals for a section are the plain sum over its segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMoments {
    /// Enclosed area
    pub a: f64,
    /// First moment of area about the z-axis
    pub ay: f64,
    /// First moment of area about the y-axis
    pub az: f64,
    /// Second moment of area about the z-axis
    pub ayy: f64,
    /// Second moment of area about the y-axis
    pub azz: f64,
    /// Product moment of area
    pub ayz: f64,
}

impl Add for RawMoments {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            a: self.a + rhs.a,
            ay: self.ay + rhs.ay,
            az: self.az + rhs.az,
            ayy: self.ayy + rhs.ayy,
            azz: self.azz + rhs.azz,
            ayz: self.ayz + rhs.ayz,
        }
    }
}

impl AddAssign for RawMoments {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for RawMoments {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// The full derived property bundle for a section.
///
/// Computed atomically from accumulated [`RawMoments`]: either every field is
/// populated from the same geometry, or the computation fails as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Area
    pub a: f64,
    /// First moment of area about the z-axis
    pub ay: f64,
    /// First moment of area about the y-axis
    pub az: f64,
    /// Centroid y-coordinate
    pub cy: f64,
    /// Centroid z-coordinate
    pub cz: f64,
    /// Second moment of area about the z-axis, origin-referenced
    pub ayy: f64,
    /// Second moment of area about the y-axis, origin-referenced
    pub azz: f64,
    /// Product moment of area, origin-referenced
    pub ayz: f64,
    /// Second moment of area about the centroidal y-axis
    pub iyy: f64,
    /// Second moment of area about the centroidal z-axis
    pub izz: f64,
    /// Centroidal product moment of area
    pub iyz: f64,
    /// Principal axis rotation angle in radians
    pub theta_p: f64,
    /// Principal moment of area about the rotated y-axis
    pub iyp: f64,
    /// Principal moment of area about the rotated z-axis
    pub izp: f64,
}

impl SectionProperties {
    /// Derive the full property bundle from origin-referenced raw moments.
    ///
    /// Fails with [`SectionError::ZeroArea`] when the accumulated area is
    /// zero, since the centroid is undefined there.
    pub fn from_moments(m: RawMoments) -> SectionResult<Self> {
        if m.a == 0.0 {
            return Err(SectionError::ZeroArea);
        }
        let cy = m.ay / m.a;
        let cz = m.az / m.a;
        let iyy = m.azz - m.a * cz * cz;
        let izz = m.ayy - m.a * cy * cy;
        let iyz = m.ayz - m.a * cy * cz;
        let theta_p = principal_angle(iyy, izz, iyz);
        let (c, s) = (theta_p.cos(), theta_p.sin());
        let iyp = iyy * c * c + izz * s * s - 2.0 * iyz * c * s;
        let izp = iyy * s * s + izz * c * c + 2.0 * iyz * c * s;
        Ok(Self {
            a: m.a,
            ay: m.ay,
            az: m.az,
            cy,
            cz,
            ayy: m.ayy,
            azz: m.azz,
            ayz: m.ayz,
            iyy,
            izz,
            iyz,
            theta_p,
            iyp,
            izp,
        })
    }

    /// Principal angle in degrees
    pub fn theta_p_degrees(&self) -> f64 {
        self.theta_p.to_degrees()
    }

    /// Raw moments this bundle was derived from
    pub fn raw(&self) -> RawMoments {
        RawMoments {
            a: self.a,
            ay: self.ay,
            az: self.az,
            ayy: self.ayy,
            azz: self.azz,
            ayz: self.ayz,
        }
    }
}

/// Principal axis rotation angle from centroidal moments.
///
/// The special cases are resolved before the general expression so the
/// division never sees a near-zero denominator: a vanishing product moment
/// means the axes are already principal, and equal moments with a nonzero
/// product moment put the principal axes at 45 degrees.
fn principal_angle(iyy: f64, izz: f64, iyz: f64) -> f64 {
    if (2.0 * iyz).abs() < MOMENT_TOL {
        0.0
    } else if (izz - iyy).abs() < MOMENT_TOL {
        std::f64::consts::FRAC_PI_4
    } else {
        (2.0 * iyz / (izz - iyy)).atan() / 2.0
    }
}
