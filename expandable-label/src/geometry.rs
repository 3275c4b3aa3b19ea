//! Points, sizes, rectangles and edge insets in [`Dp`] space.
//!
//! All geometry handed to and returned from the label is expressed in the
//! label's local coordinate space: the origin is the label's top-left corner,
//! x grows to the right and y grows downwards.

use crate::Dp;

/// A 2D position in dp space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpPosition {
    /// The x-coordinate
    pub x: Dp,
    /// The y-coordinate
    pub y: Dp,
}

impl DpPosition {
    /// The origin (0, 0).
    pub const ZERO: Self = Self {
        x: Dp::ZERO,
        y: Dp::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Dp, y: Dp) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by `dx` and `dy`.
    pub fn offset(self, dx: Dp, dy: Dp) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A 2D size in dp space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpSize {
    /// The width
    pub width: Dp,
    /// The height
    pub height: Dp,
}

impl DpSize {
    /// A zero size.
    pub const ZERO: Self = Self {
        width: Dp::ZERO,
        height: Dp::ZERO,
    };

    /// Creates a new size.
    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }

    /// Returns `true` if both dimensions are exactly zero.
    pub fn is_zero(self) -> bool {
        self.width.is_zero() && self.height.is_zero()
    }
}

/// Per-edge inset amounts.
///
/// Applied with [`DpRect::inset_by`], positive values move an edge towards the
/// rectangle's center and negative values move it outwards.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    /// Inset of the top edge
    pub top: Dp,
    /// Inset of the left edge
    pub left: Dp,
    /// Inset of the bottom edge
    pub bottom: Dp,
    /// Inset of the right edge
    pub right: Dp,
}

impl EdgeInsets {
    /// No inset on any edge.
    pub const ZERO: Self = Self {
        top: Dp::ZERO,
        left: Dp::ZERO,
        bottom: Dp::ZERO,
        right: Dp::ZERO,
    };

    /// Creates insets from the four edge values.
    pub const fn new(top: Dp, left: Dp, bottom: Dp, right: Dp) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates insets with the same value on every edge.
    pub const fn uniform(value: Dp) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the insets with every edge negated, turning an inset into an
    /// outset.
    ///
    /// ```
    /// use expandable_label::{Dp, EdgeInsets};
    ///
    /// let insets = EdgeInsets::new(Dp(1.0), Dp(2.0), Dp(3.0), Dp(4.0));
    /// assert_eq!(
    ///     insets.inverted(),
    ///     EdgeInsets::new(Dp(-1.0), Dp(-2.0), Dp(-3.0), Dp(-4.0))
    /// );
    /// ```
    pub fn inverted(self) -> Self {
        Self {
            top: -self.top,
            left: -self.left,
            bottom: -self.bottom,
            right: -self.right,
        }
    }
}

/// A rectangle in dp space, described by its top-left corner and size.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpRect {
    /// The x-coordinate of the top-left corner
    pub x: Dp,
    /// The y-coordinate of the top-left corner
    pub y: Dp,
    /// The width of the rectangle
    pub width: Dp,
    /// The height of the rectangle
    pub height: Dp,
}

impl DpRect {
    /// A zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Dp::ZERO,
        y: Dp::ZERO,
        width: Dp::ZERO,
        height: Dp::ZERO,
    };

    /// Creates a new rectangle.
    pub const fn new(x: Dp, y: Dp, width: Dp, height: Dp) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a position and a size.
    pub fn from_position_size(position: DpPosition, size: DpSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// The top-left corner.
    pub fn origin(&self) -> DpPosition {
        DpPosition::new(self.x, self.y)
    }

    /// The size of the rectangle.
    pub fn size(&self) -> DpSize {
        DpSize::new(self.width, self.height)
    }

    /// The x-coordinate of the right edge.
    pub fn max_x(&self) -> Dp {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge.
    pub fn max_y(&self) -> Dp {
        self.y + self.height
    }

    /// Returns the rectangle with each edge moved by the matching inset.
    ///
    /// Positive insets shrink the rectangle, negative insets grow it.
    ///
    /// ```
    /// use expandable_label::{Dp, DpRect, EdgeInsets};
    ///
    /// let rect = DpRect::new(Dp(10.0), Dp(10.0), Dp(20.0), Dp(20.0));
    /// let grown = rect.inset_by(EdgeInsets::uniform(Dp(-2.5)));
    /// assert_eq!(grown, DpRect::new(Dp(7.5), Dp(7.5), Dp(25.0), Dp(25.0)));
    /// ```
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.left - insets.right,
            height: self.height - insets.top - insets.bottom,
        }
    }

    /// Check if a point is inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive.
    pub fn contains(&self, point: DpPosition) -> bool {
        point.x >= self.x && point.x < self.max_x() && point.y >= self.y && point.y < self.max_y()
    }
}
