//! Building rectangles and the building-type table.

use nightward_core::{BuildingId, Point, Rect};

/// Metadata for one nonzero matrix value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingType {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color_hint: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walkable: bool,
}

/// An axis-aligned building rectangle produced by `Map::compile`.
///
/// Buildings are AABB-only: a non-rectangular connected component of cells
/// is represented by its bounding box, never a concave polygon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub id: BuildingId,
    pub bounds: Rect,
    pub type_key: i32,
    /// Grid cells (row, col) this building spans, kept for debugging/rendering.
    pub cells: Vec<(usize, usize)>,
}

impl Building {
    #[inline]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }
}
