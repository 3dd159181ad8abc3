use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point;

/// Identifies one of the two endpoints of the equality segment.
///
/// Endpoints are always listed `A` first, then `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Corner {
    /// The intercept on the `x2` axis, where `x1 = 0`.
    A,

    /// The intercept on the `x1` axis, where `x2 = 0`.
    B,
}

impl Corner {
    /// Both corners in listing order.
    pub const ALL: [Corner; 2] = [Corner::A, Corner::B];

    /// Returns the display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A labeled endpoint of the equality segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CornerPoint {
    pub corner: Corner,
    pub point: Point,
}

impl CornerPoint {
    /// Creates a corner point.
    #[must_use]
    pub const fn new(corner: Corner, point: Point) -> Self {
        Self { corner, point }
    }

    /// Returns the display label of the corner.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.corner.label()
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        self.point.x1
    }

    #[must_use]
    pub fn x2(&self) -> f64 {
        self.point.x2
    }
}

/// Formats as `A(0, 5)`.
impl fmt::Display for CornerPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.corner, self.point.x1, self.point.x2)
    }
}
