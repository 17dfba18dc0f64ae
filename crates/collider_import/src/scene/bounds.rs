//! Axis-aligned bounds expressed as center and extents

use crate::foundation::math::Vec3;

/// Axis-aligned bounding box stored as center and half-size
///
/// Extents are not clamped: a box derived from a rotation may carry
/// negative components, and callers decide how to treat them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Center of the box
    pub center: Vec3,
    /// Half-size of the box along each axis
    pub extents: Vec3,
}

impl Bounds {
    /// Create bounds from a center and extents
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self { center, extents }
    }

    /// Create bounds from minimum and maximum corners
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    /// Smallest bounds enclosing every point; zero bounds for no points
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::default();
        };

        let (min, max) = points.fold((*first, *first), |(min, max), p| (min.inf(p), max.sup(p)));
        Self::from_min_max(min, max)
    }

    /// Full size of the box (twice the extents)
    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }
}
