//! Error types for section construction and property evaluation

use thiserror::Error;

/// Main error type for section operations
#[derive(Error, Debug)]
pub enum SectionError {
    #[error("coordinate list lengths differ: {y_len} y-values vs {z_len} z-values")]
    CoordinateLengthMismatch { y_len: usize, z_len: usize },

    #[error("radius list length {r_len} does not match {point_len} boundary points")]
    RadiusLengthMismatch { r_len: usize, point_len: usize },

    #[error(
        "thickness list length {t_len} is not consistent with {point_len} centerline points \
         (expected {point_len} for a closed section or one less for an open section)"
    )]
    ThicknessLengthMismatch { t_len: usize, point_len: usize },

    #[error("section needs at least {needed} distinct points, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error(
        "fillet radius {radius} at corner ({y}, {z}) exceeds the feasible radius {max_radius}"
    )]
    InfeasibleFillet {
        radius: f64,
        max_radius: f64,
        y: f64,
        z: f64,
    },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("section area is zero - centroid and centroidal moments are undefined")]
    ZeroArea,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for section operations
pub type SectionResult<T> = Result<T, SectionError>;
