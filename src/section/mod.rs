//! Section representations

mod general;
mod thinwalled;

pub use general::GeneralSection;
pub use thinwalled::{ThinWalledSection, WallSegment};
