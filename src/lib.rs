//! sectprop - cross-section geometric properties
//!
//! This library computes area, centroid, second moments of area and principal
//! moments for structural cross-sections, inspired by pysectprop. Two
//! representations are supported:
//!
//! - [`GeneralSection`](section::GeneralSection): a closed boundary defined
//!   by vertices with optional per-vertex fillet radii, expanded into a path
//!   of straight lines and tangent arcs with exact moment integrals.
//! - [`ThinWalledSection`](section::ThinWalledSection): an open or closed
//!   centerline polyline with per-segment wall thickness.
//!
//! ## Example
//! ```rust
//! use sectprop::prelude::*;
//!
//! // 100 x 50 plate with two 10 mm rounded corners
//! let section = GeneralSection::new(
//!     vec![0.0, 100.0, 100.0, 0.0],
//!     vec![0.0, 0.0, 50.0, 50.0],
//!     vec![0.0, 0.0, 10.0, 10.0],
//! )
//! .unwrap();
//!
//! let props = section.properties().unwrap();
//! assert!(props.a > 0.0);
//! assert!((props.iyy + props.izz - (props.iyp + props.izp)).abs() < 1e-6);
//! ```

pub mod error;
pub mod geom;
pub mod json;
pub mod properties;
pub mod section;
pub mod shapes;

// Re-export common types
pub mod prelude {
    pub use crate::error::{SectionError, SectionResult};
    pub use crate::geom::{Arc, Line, Point, Segment};
    pub use crate::json::{section_from_file, section_from_json, SectionKind};
    pub use crate::properties::{RawMoments, SectionProperties};
    pub use crate::section::{GeneralSection, ThinWalledSection, WallSegment};
}
