//! 2D Cartesian geometry: `Point` and axis-aligned `Rect`.
//!
//! Positions use single-precision floats, matching the world-unit scale of
//! the map (tens to thousands of units, not geographic coordinates).

/// A 2D point in world units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scale(self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        self.sub(other).length()
    }

    #[inline]
    pub fn distance_sq(self, other: Point) -> f32 {
        let d = self.sub(other);
        d.x * d.x + d.y * d.y
    }

    /// Unit vector in the direction of `self`, or `Point::ZERO` if `self`
    /// has (near) zero length.
    #[inline]
    pub fn normalized(self) -> Point {
        let len = self.length();
        if len < 1e-6 {
            Point::ZERO
        } else {
            self.scale(1.0 / len)
        }
    }

    /// Perpendicular vector, rotated 90° counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Linear interpolation from `self` to `other` at `t ∈ [0, 1]`.
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        self.add(other.sub(self).scale(t))
    }
}

/// An axis-aligned bounding rectangle.
///
/// Stored as edges rather than origin + size so overlap tests are branch-free
/// comparisons.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Build a rectangle centered at `center` with total width `w` and
    /// height `h`.
    #[inline]
    pub fn from_center(center: Point, w: f32, h: f32) -> Self {
        let hw = w * 0.5;
        let hh = h * 0.5;
        Self {
            left: center.x - hw,
            right: center.x + hw,
            top: center.y - hh,
            bottom: center.y + hh,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Whether `p` lies within this rectangle, edges inclusive.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Whether `other` overlaps this rectangle in any way. Shared edges count
    /// as overlapping.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }

    /// Whether `other` is fully contained within this rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Grow (or shrink, with a negative margin) every edge by `margin`.
    #[inline]
    pub fn expanded(&self, margin: f32) -> Rect {
        Rect {
            left: self.left - margin,
            right: self.right + margin,
            top: self.top - margin,
            bottom: self.bottom + margin,
        }
    }

    /// Split into four equal quadrants: NW, NE, SW, SE.
    pub fn quadrants(&self) -> [Rect; 4] {
        let cx = (self.left + self.right) * 0.5;
        let cy = (self.top + self.bottom) * 0.5;
        [
            Rect::new(self.left, self.top, cx, cy),       // NW
            Rect::new(cx, self.top, self.right, cy),      // NE
            Rect::new(self.left, cy, cx, self.bottom),    // SW
            Rect::new(cx, cy, self.right, self.bottom),   // SE
        ]
    }
}
