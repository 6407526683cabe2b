//! Standard profile constructors
//!
//! Each builds a labelled [`GeneralSection`] from overall dimensions, with
//! root fillets where rolled profiles have them. Profiles with an axis of
//! symmetry are centered on it; open profiles sit on their bounding corner.

use crate::error::{SectionError, SectionResult};
use crate::section::GeneralSection;

fn check_positive(name: &str, value: f64) -> SectionResult<()> {
    if value <= 0.0 {
        return Err(SectionError::InvalidGeometry(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Solid rectangle of width `b` (y-direction) and height `h` (z-direction),
/// centered on the origin
pub fn rectangle(b: f64, h: f64) -> SectionResult<GeneralSection> {
    check_positive("width", b)?;
    check_positive("height", h)?;
    let (hb, hh) = (b / 2.0, h / 2.0);
    let section = GeneralSection::new(
        vec![-hb, hb, hb, -hb],
        vec![-hh, -hh, hh, hh],
        vec![0.0; 4],
    )?;
    Ok(section.with_label("Rectangle"))
}

/// Rectangle with all four corners rounded at radius `rc`
pub fn rounded_rectangle(b: f64, h: f64, rc: f64) -> SectionResult<GeneralSection> {
    check_positive("width", b)?;
    check_positive("height", h)?;
    check_positive("corner radius", rc)?;
    let (hb, hh) = (b / 2.0, h / 2.0);
    let section = GeneralSection::new(
        vec![-hb, hb, hb, -hb],
        vec![-hh, -hh, hh, hh],
        vec![rc; 4],
    )?;
    Ok(section.with_label("Rounded Rectangle"))
}

/// Doubly symmetric I-section, centered on the origin.
///
/// `d` overall depth, `bf` flange width, `tf` flange thickness, `tw` web
/// thickness, `rr` root radius at the four web-flange junctions (0 for
/// sharp roots).
pub fn i_section(d: f64, bf: f64, tf: f64, tw: f64, rr: f64) -> SectionResult<GeneralSection> {
    check_positive("depth", d)?;
    check_positive("flange width", bf)?;
    check_positive("flange thickness", tf)?;
    check_positive("web thickness", tw)?;
    if 2.0 * tf >= d || tw >= bf {
        return Err(SectionError::InvalidGeometry(format!(
            "I-section dimensions are inconsistent: d={d}, bf={bf}, tf={tf}, tw={tw}"
        )));
    }
    let (hb, hd, hw) = (bf / 2.0, d / 2.0, tw / 2.0);
    let zf = hd - tf;
    let section = GeneralSection::new(
        vec![-hb, hb, hb, hw, hw, hb, hb, -hb, -hb, -hw, -hw, -hb],
        vec![-hd, -hd, -zf, -zf, zf, zf, hd, hd, zf, zf, -zf, -zf],
        vec![0.0, 0.0, 0.0, rr, rr, 0.0, 0.0, 0.0, 0.0, rr, rr, 0.0],
    )?;
    Ok(section.with_label("I-Section"))
}

/// Channel with its web on the z-axis, opening toward positive y, sitting on
/// z = 0.
///
/// `d` overall depth, `bf` flange width, `tf` flange thickness, `tw` web
/// thickness, `rr` root radius at the two web-flange junctions.
pub fn c_section(d: f64, bf: f64, tf: f64, tw: f64, rr: f64) -> SectionResult<GeneralSection> {
    check_positive("depth", d)?;
    check_positive("flange width", bf)?;
    check_positive("flange thickness", tf)?;
    check_positive("web thickness", tw)?;
    if 2.0 * tf >= d || tw >= bf {
        return Err(SectionError::InvalidGeometry(format!(
            "channel dimensions are inconsistent: d={d}, bf={bf}, tf={tf}, tw={tw}"
        )));
    }
    let section = GeneralSection::new(
        vec![0.0, bf, bf, tw, tw, bf, bf, 0.0],
        vec![0.0, 0.0, tf, tf, d - tf, d - tf, d, d],
        vec![0.0, 0.0, 0.0, rr, rr, 0.0, 0.0, 0.0],
    )?;
    Ok(section.with_label("C-Section"))
}

/// Equal or unequal angle with legs along the positive y and z axes.
///
/// `leg_y`/`leg_z` leg lengths, `t` thickness, `rr` root radius at the
/// inside corner.
pub fn l_section(leg_y: f64, leg_z: f64, t: f64, rr: f64) -> SectionResult<GeneralSection> {
    check_positive("y leg", leg_y)?;
    check_positive("z leg", leg_z)?;
    check_positive("thickness", t)?;
    if t >= leg_y || t >= leg_z {
        return Err(SectionError::InvalidGeometry(format!(
            "angle thickness {t} is not smaller than its legs {leg_y} x {leg_z}"
        )));
    }
    let section = GeneralSection::new(
        vec![0.0, leg_y, leg_y, t, t, 0.0],
        vec![0.0, 0.0, t, t, leg_z, leg_z],
        vec![0.0, 0.0, 0.0, rr, 0.0, 0.0],
    )?;
    Ok(section.with_label("L-Section"))
}

/// Tee with the flange on top and the stem resting on z = 0, symmetric about
/// the z-axis.
///
/// `d` overall depth, `bf` flange width, `tf` flange thickness, `tw` stem
/// thickness, `rr` root radius at the two stem-flange junctions.
pub fn t_section(d: f64, bf: f64, tf: f64, tw: f64, rr: f64) -> SectionResult<GeneralSection> {
    check_positive("depth", d)?;
    check_positive("flange width", bf)?;
    check_positive("flange thickness", tf)?;
    check_positive("stem thickness", tw)?;
    if tf >= d || tw >= bf {
        return Err(SectionError::InvalidGeometry(format!(
            "tee dimensions are inconsistent: d={d}, bf={bf}, tf={tf}, tw={tw}"
        )));
    }
    let (hb, hw) = (bf / 2.0, tw / 2.0);
    let zf = d - tf;
    let section = GeneralSection::new(
        vec![-hw, hw, hw, hb, hb, -hb, -hb, -hw],
        vec![0.0, 0.0, zf, zf, d, d, zf, zf],
        vec![0.0, 0.0, rr, 0.0, 0.0, 0.0, 0.0, rr],
    )?;
    Ok(section.with_label("T-Section"))
}
