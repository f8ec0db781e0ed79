//! Types for Figma design document trees.

use crate::color::Rgb;
use crate::geometry::BoundingBox;

/// Node types the compiler knows how to lay out.
///
/// Anything else (vectors, components, canvases, the document root, ...) is kept
/// as [`NodeType::Other`] with its raw type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// Frame (container with its own geometry)
    Frame,
    /// Group of nodes
    Group,
    /// Plain rectangle
    Rectangle,
    /// Text layer
    Text,
    /// Any other Figma node type
    Other(String),
}

impl NodeType {
    /// Parse a Figma `type` string (e.g. `"FRAME"` -> `NodeType::Frame`).
    pub fn from_str(s: &str) -> Self {
        match s {
            "FRAME" => Self::Frame,
            "GROUP" => Self::Group,
            "RECTANGLE" => Self::Rectangle,
            "TEXT" => Self::Text,
            _ => Self::Other(s.to_string()),
        }
    }

    /// The Figma `type` string for this node type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Rectangle => "RECTANGLE",
            Self::Text => "TEXT",
            Self::Other(name) => name,
        }
    }

    /// Check if this type is one of the recognized layout types.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Kind of a fill descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillKind {
    /// Flat color
    Solid,
    /// Image fill (references an uploaded image)
    Image,
    /// Gradients, video and anything else
    Other(String),
}

impl FillKind {
    /// Parse a Figma paint `type` string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "SOLID" => Self::Solid,
            "IMAGE" => Self::Image,
            _ => Self::Other(s.to_string()),
        }
    }
}

/// Fill color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillColor {
    /// Red channel (0.0 - 1.0)
    pub r: f64,
    /// Green channel (0.0 - 1.0)
    pub g: f64,
    /// Blue channel (0.0 - 1.0)
    pub b: f64,
}

impl FillColor {
    /// Create a new fill color.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to 8-bit channels.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(self.r, self.g, self.b)
    }
}

/// One entry of a node's `fills` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    /// Paint kind
    pub kind: FillKind,
    /// Color, for solid fills
    pub color: Option<FillColor>,
    /// Image hash, for image fills
    pub image_ref: Option<String>,
}

impl Fill {
    /// A solid fill of the given color.
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self {
            kind: FillKind::Solid,
            color: Some(FillColor::new(r, g, b)),
            image_ref: None,
        }
    }

    /// An image fill referencing the given image hash.
    pub fn image(image_ref: impl Into<String>) -> Self {
        Self {
            kind: FillKind::Image,
            color: None,
            image_ref: Some(image_ref.into()),
        }
    }
}

/// A node in the design document tree.
///
/// The tree is owned by whoever parsed the document; extraction and compilation
/// only ever borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignNode {
    /// Node id, unique within a document and stable across fetches (e.g. `"1:23"`)
    pub id: String,
    /// Display name (not unique)
    pub name: String,
    /// Node type
    pub node_type: NodeType,
    /// Absolute bounding box, if reported
    pub bounding_box: Option<BoundingBox>,
    /// Fill list, if the node has one
    pub fills: Option<Vec<Fill>>,
    /// Raw text content (text nodes only)
    pub characters: Option<String>,
    /// Child nodes in document order
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    /// Create a node with no geometry, fills, text or children.
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            node_type,
            bounding_box: None,
            fills: None,
            characters: None,
            children: Vec::new(),
        }
    }

    /// Set the display name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the bounding box (builder pattern).
    pub fn with_bounds(mut self, bbox: BoundingBox) -> Self {
        self.bounding_box = Some(bbox);
        self
    }

    /// Append a fill (builder pattern).
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fills.get_or_insert_with(Vec::new).push(fill);
        self
    }

    /// Set the text content (builder pattern).
    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = Some(characters.into());
        self
    }

    /// Append a child (builder pattern).
    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Find a node by id in this subtree (pre-order).
    pub fn find(&self, id: &str) -> Option<&DesignNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DesignNode::node_count).sum::<usize>()
    }
}

/// A fetched Figma file: metadata plus the document tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignFile {
    /// File name, if present
    pub name: Option<String>,
    /// Document root (`None` when the file carried no usable document)
    pub document: Option<DesignNode>,
}

impl DesignFile {
    /// Wrap a document root.
    pub fn new(document: DesignNode) -> Self {
        Self {
            name: None,
            document: Some(document),
        }
    }

    /// Borrow the document root.
    pub fn root(&self) -> Option<&DesignNode> {
        self.document.as_ref()
    }

    /// Borrow the node with the given id, searching the whole document.
    pub fn find(&self, id: &str) -> Option<&DesignNode> {
        self.document.as_ref().and_then(|root| root.find(id))
    }
}
