//! Boundary segment sum type

use serde::{Deserialize, Serialize};

use crate::properties::RawMoments;

use super::{Arc, Line, Point};

/// One piece of a section boundary path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Straight segment
    Line(Line),
    /// Circular-arc segment
    Arc(Arc),
}

impl Segment {
    /// Start point
    pub fn start(&self) -> Point {
        match self {
            Segment::Line(line) => line.start(),
            Segment::Arc(arc) => arc.start(),
        }
    }

    /// End point
    pub fn end(&self) -> Point {
        match self {
            Segment::Line(line) => line.end(),
            Segment::Arc(arc) => arc.end(),
        }
    }

    /// Segment length
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line(line) => line.length(),
            Segment::Arc(arc) => arc.length(),
        }
    }

    /// Origin-referenced area and moment contributions
    pub fn moments(&self) -> RawMoments {
        match self {
            Segment::Line(line) => line.moments(),
            Segment::Arc(arc) => arc.moments(),
        }
    }

    /// The arc, if this segment is one
    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Segment::Arc(arc) => Some(arc),
            Segment::Line(_) => None,
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Segment::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Segment::Arc(arc)
    }
}
