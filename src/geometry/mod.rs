//! Geometric primitives for absolutely positioned layout.
//!
//! Figma reports `absoluteBoundingBox` for most nodes, but any of its fields may
//! be missing (or the box itself may be absent). [`BoundingBox`] keeps the raw,
//! possibly incomplete values; [`Rect`] is the resolved form where every missing
//! field has defaulted to zero.

use serde::{Deserialize, Serialize};

/// A rectangle in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f64,
    /// Y coordinate of top-left corner
    pub y: f64,
    /// Width of rectangle
    pub width: f64,
    /// Height of rectangle
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The all-zero rectangle used when a node carries no geometry.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Raw bounding box as found on a design node.
///
/// Each field is optional because the source document does not guarantee them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// X coordinate, if present
    pub x: Option<f64>,
    /// Y coordinate, if present
    pub y: Option<f64>,
    /// Width, if present
    pub width: Option<f64>,
    /// Height, if present
    pub height: Option<f64>,
}

impl BoundingBox {
    /// Create a bounding box with every field present.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Resolve to a [`Rect`], defaulting each missing field to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_oxide::geometry::{BoundingBox, Rect};
    ///
    /// let partial = BoundingBox { x: Some(4.0), ..Default::default() };
    /// assert_eq!(partial.resolve(), Rect::new(4.0, 0.0, 0.0, 0.0));
    /// ```
    pub fn resolve(&self) -> Rect {
        Rect::new(
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.width.unwrap_or(0.0),
            self.height.unwrap_or(0.0),
        )
    }
}

/// Resolve an optional bounding box, treating an absent box as all zeros.
pub fn resolve_bounds(bbox: Option<&BoundingBox>) -> Rect {
    bbox.map(BoundingBox::resolve).unwrap_or_else(Rect::zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_new() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn test_full_bounding_box_resolves_unchanged() {
        let bbox = BoundingBox::new(1.5, 2.5, 30.0, 40.0);
        assert_eq!(bbox.resolve(), Rect::new(1.5, 2.5, 30.0, 40.0));
    }

    #[test]
    fn test_partial_bounding_box_defaults_to_zero() {
        let bbox = BoundingBox {
            width: Some(12.0),
            ..Default::default()
        };
        assert_eq!(bbox.resolve(), Rect::new(0.0, 0.0, 12.0, 0.0));
    }

    #[test]
    fn test_absent_bounding_box() {
        assert_eq!(resolve_bounds(None), Rect::zero());
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(resolve_bounds(Some(&bbox)), Rect::new(1.0, 2.0, 3.0, 4.0));
    }
}
