//! Types for compiled structure trees.

use crate::color::Rgb;
use crate::geometry::Rect;
use serde::{Serialize, Serializer};
use std::fmt;

/// Kind of a compiled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Generic positioned box (frames, groups, rectangles)
    Box,
    /// Positioned text leaf
    TextLeaf,
}

/// CSS positioning scheme. Compiled nodes are always absolutely positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// `position: absolute`
    #[default]
    Absolute,
}

impl Position {
    /// CSS keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
        }
    }
}

/// Background color of a compiled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundColor {
    /// Color taken from the node's extracted solid fill
    Rgb(Rgb),
    /// No color entry for the node
    #[default]
    Transparent,
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(rgb) => write!(f, "{}", rgb),
            Self::Transparent => f.write_str("transparent"),
        }
    }
}

impl Serialize for BackgroundColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Computed style of a compiled node, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Positioning scheme
    pub position: Position,
    /// Left offset
    pub left: f64,
    /// Top offset
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
    /// Background color
    pub background_color: BackgroundColor,
}

impl Style {
    /// Absolutely positioned style covering `rect`.
    pub fn absolute(rect: Rect, background_color: BackgroundColor) -> Self {
        Self {
            position: Position::Absolute,
            left: rect.x,
            top: rect.y,
            width: rect.width,
            height: rect.height,
            background_color,
        }
    }
}

/// One compiled visual element.
///
/// Carries no rendering syntax; see [`crate::converters`] for serializers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureNode {
    /// Node kind
    pub kind: NodeKind,
    /// Computed style
    pub style: Style,
    /// Text content (text leaves only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Compiled children in source order
    pub children: Vec<StructureNode>,
}

impl StructureNode {
    /// A box with the given children.
    pub fn container(style: Style, children: Vec<StructureNode>) -> Self {
        Self {
            kind: NodeKind::Box,
            style,
            content: None,
            children,
        }
    }

    /// A childless box.
    pub fn leaf_box(style: Style) -> Self {
        Self::container(style, Vec::new())
    }

    /// A text leaf.
    pub fn text(style: Style, content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::TextLeaf,
            style,
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(StructureNode::node_count).sum::<usize>()
    }
}
