//! Compiler from design trees to structure trees.
//!
//! Walks the design tree a second time (after extraction) and emits one
//! [`StructureNode`] per recognized node, resolving background colors and text
//! content through a [`CrossReference`] over the extraction snapshot.
//!
//! ## Dispatch
//!
//! | Node type            | Output                                   |
//! |----------------------|------------------------------------------|
//! | `FRAME`, `GROUP`     | Box with compiled children, in order     |
//! | `RECTANGLE`          | Childless box (children are ignored)     |
//! | `TEXT`               | Text leaf                                |
//! | anything else        | Nothing; the whole subtree is pruned     |

use super::types::{BackgroundColor, Style, StructureNode};
use crate::document::{DesignNode, NodeType};
use crate::geometry::resolve_bounds;
use crate::lookup::CrossReference;

/// Source of a compiled node's height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HeightMode {
    /// Reproduce the legacy generator, which took the height from the
    /// bounding box's `y` coordinate
    #[default]
    Faithful,
    /// Use the bounding box's real `height`
    Corrected,
}

/// Compiler configuration.
#[derive(Debug, Clone, Default)]
pub struct CompilerConfig {
    /// How heights are derived
    pub height_mode: HeightMode,
}

impl CompilerConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the height mode (builder pattern).
    pub fn with_height_mode(mut self, mode: HeightMode) -> Self {
        self.height_mode = mode;
        self
    }
}

/// Compiles design nodes into structure nodes.
pub struct StructureCompiler<'a> {
    lookup: &'a CrossReference<'a>,
    config: CompilerConfig,
}

impl<'a> StructureCompiler<'a> {
    /// Create a compiler with default configuration.
    pub fn new(lookup: &'a CrossReference<'a>) -> Self {
        Self::with_config(lookup, CompilerConfig::default())
    }

    /// Create a compiler with custom configuration.
    pub fn with_config(lookup: &'a CrossReference<'a>, config: CompilerConfig) -> Self {
        Self { lookup, config }
    }

    /// Compile a design tree.
    ///
    /// # Returns
    /// * `Some(StructureNode)` - The compiled tree
    /// * `None` - If the root is absent or of an unrecognized type
    pub fn compile(&self, root: Option<&DesignNode>) -> Option<StructureNode> {
        let compiled = root.and_then(|node| self.compile_node(node));

        match &compiled {
            Some(tree) => log::debug!("Compiled {} structure nodes", tree.node_count()),
            None => log::debug!("Nothing to compile"),
        }

        compiled
    }

    fn compile_node(&self, node: &DesignNode) -> Option<StructureNode> {
        if !node.node_type.is_recognized() {
            log::trace!("Pruning node '{}' of type '{}'", node.id, node.node_type.as_str());
            return None;
        }

        let style = self.style_for(node);

        let compiled = match node.node_type {
            NodeType::Frame | NodeType::Group => {
                let children = node
                    .children
                    .iter()
                    .filter_map(|child| self.compile_node(child))
                    .collect();
                StructureNode::container(style, children)
            },
            NodeType::Rectangle => StructureNode::leaf_box(style),
            NodeType::Text => StructureNode::text(style, self.text_content(node)),
            NodeType::Other(_) => return None,
        };

        Some(compiled)
    }

    /// Absolute position and background color for a node.
    fn style_for(&self, node: &DesignNode) -> Style {
        let mut rect = resolve_bounds(node.bounding_box.as_ref());
        if self.config.height_mode == HeightMode::Faithful {
            rect.height = rect.y;
        }

        let background = match self.lookup.lookup_color(&node.id) {
            Some(entry) => BackgroundColor::Rgb(entry.color),
            None => BackgroundColor::Transparent,
        };

        Style::absolute(rect, background)
    }

    /// Extracted content, then the node's own characters, then empty.
    ///
    /// An empty extracted string counts as missing.
    fn text_content(&self, node: &DesignNode) -> String {
        self.lookup
            .lookup_text(&node.id)
            .map(|entry| entry.content.as_str())
            .filter(|content| !content.is_empty())
            .or(node.characters.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Compile a design tree in one call.
///
/// # Examples
///
/// ```
/// use figma_oxide::document::{DesignNode, NodeType};
/// use figma_oxide::extractors::extract;
/// use figma_oxide::lookup::CrossReference;
/// use figma_oxide::structure::{compile, CompilerConfig, NodeKind};
///
/// let root = DesignNode::new("1", NodeType::Frame)
///     .with_child(DesignNode::new("2", NodeType::Text).with_characters("hi"));
/// let extraction = extract(Some(&root));
/// let lookup = CrossReference::from_extraction(&extraction);
///
/// let tree = compile(Some(&root), &lookup, CompilerConfig::default()).unwrap();
/// assert_eq!(tree.children[0].kind, NodeKind::TextLeaf);
/// ```
pub fn compile(
    root: Option<&DesignNode>,
    lookup: &CrossReference<'_>,
    config: CompilerConfig,
) -> Option<StructureNode> {
    StructureCompiler::with_config(lookup, config).compile(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::document::Fill;
    use crate::extractors::{extract, ExtractedText};
    use crate::geometry::BoundingBox;
    use crate::structure::types::NodeKind;

    fn compile_with_own_extraction(
        root: &DesignNode,
        config: CompilerConfig,
    ) -> Option<StructureNode> {
        let extraction = extract(Some(root));
        let lookup = CrossReference::from_extraction(&extraction);
        compile(Some(root), &lookup, config)
    }

    #[test]
    fn test_absent_root() {
        let lookup = CrossReference::new(&[], &[]);
        assert!(compile(None, &lookup, CompilerConfig::default()).is_none());
    }

    #[test]
    fn test_unrecognized_root_is_pruned() {
        let root = DesignNode::new("0:0", NodeType::Other("DOCUMENT".to_string()))
            .with_child(DesignNode::new("1", NodeType::Frame));
        assert!(compile_with_own_extraction(&root, CompilerConfig::default()).is_none());
    }

    #[test]
    fn test_pruning_drops_whole_subtree() {
        let root = DesignNode::new("1", NodeType::Frame).with_child(
            DesignNode::new("2", NodeType::Other("VECTOR".to_string()))
                .with_child(DesignNode::new("3", NodeType::Text).with_characters("hi")),
        );

        let extraction = extract(Some(&root));
        assert_eq!(extraction.texts.len(), 1);

        let lookup = CrossReference::from_extraction(&extraction);
        let tree = compile(Some(&root), &lookup, CompilerConfig::default()).unwrap();
        assert_eq!(tree.kind, NodeKind::Box);
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_children_keep_source_order() {
        let root = DesignNode::new("g", NodeType::Group)
            .with_child(DesignNode::new("a", NodeType::Text).with_characters("first"))
            .with_child(DesignNode::new("b", NodeType::Rectangle))
            .with_child(DesignNode::new("c", NodeType::Text).with_characters("third"));

        let tree = compile_with_own_extraction(&root, CompilerConfig::default()).unwrap();
        let kinds: Vec<_> = tree.children.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![NodeKind::TextLeaf, NodeKind::Box, NodeKind::TextLeaf]);
        assert_eq!(tree.children[0].content.as_deref(), Some("first"));
        assert_eq!(tree.children[2].content.as_deref(), Some("third"));
    }

    #[test]
    fn test_rectangle_ignores_children() {
        let root = DesignNode::new("r", NodeType::Rectangle)
            .with_child(DesignNode::new("t", NodeType::Text).with_characters("hidden"));

        let tree = compile_with_own_extraction(&root, CompilerConfig::default()).unwrap();
        assert_eq!(tree.kind, NodeKind::Box);
        assert!(tree.children.is_empty());
        assert!(tree.content.is_none());
    }

    #[test]
    fn test_text_fallback_to_own_characters() {
        let node = DesignNode::new("5", NodeType::Text).with_characters("source");
        let lookup = CrossReference::new(&[], &[]);

        let tree = compile(Some(&node), &lookup, CompilerConfig::default()).unwrap();
        assert_eq!(tree.content.as_deref(), Some("source"));
    }

    #[test]
    fn test_text_override_from_extraction() {
        let node = DesignNode::new("5", NodeType::Text).with_characters("source");
        let texts = vec![ExtractedText {
            id: "5".to_string(),
            name: String::new(),
            content: "override".to_string(),
        }];
        let lookup = CrossReference::new(&texts, &[]);

        let tree = compile(Some(&node), &lookup, CompilerConfig::default()).unwrap();
        assert_eq!(tree.content.as_deref(), Some("override"));
    }

    #[test]
    fn test_text_without_any_content() {
        let node = DesignNode::new("5", NodeType::Text);
        let lookup = CrossReference::new(&[], &[]);

        let tree = compile(Some(&node), &lookup, CompilerConfig::default()).unwrap();
        assert_eq!(tree.content.as_deref(), Some(""));
    }

    #[test]
    fn test_transparent_default() {
        let node = DesignNode::new("r", NodeType::Rectangle);
        let lookup = CrossReference::new(&[], &[]);

        let tree = compile(Some(&node), &lookup, CompilerConfig::default()).unwrap();
        assert_eq!(tree.style.background_color, BackgroundColor::Transparent);
    }

    #[test]
    fn test_background_from_first_solid_fill() {
        let node = DesignNode::new("r", NodeType::Rectangle)
            .with_fill(Fill::solid(0.2, 0.5, 0.8))
            .with_fill(Fill::solid(1.0, 1.0, 1.0));

        let tree = compile_with_own_extraction(&node, CompilerConfig::default()).unwrap();
        assert_eq!(tree.style.background_color, BackgroundColor::Rgb(Rgb::new(51, 128, 204)));
    }

    #[test]
    fn test_missing_geometry_defaults_to_zero() {
        let node = DesignNode::new("f", NodeType::Frame);
        let tree = compile_with_own_extraction(&node, CompilerConfig::default()).unwrap();
        assert_eq!(tree.style.left, 0.0);
        assert_eq!(tree.style.top, 0.0);
        assert_eq!(tree.style.width, 0.0);
        assert_eq!(tree.style.height, 0.0);
    }

    #[test]
    fn test_faithful_height_uses_y() {
        let node = DesignNode::new("f", NodeType::Frame)
            .with_bounds(BoundingBox::new(10.0, 20.0, 300.0, 150.0));

        let tree = compile_with_own_extraction(&node, CompilerConfig::default()).unwrap();
        assert_eq!(tree.style.left, 10.0);
        assert_eq!(tree.style.top, 20.0);
        assert_eq!(tree.style.width, 300.0);
        assert_eq!(tree.style.height, 20.0);
    }

    #[test]
    fn test_corrected_height_uses_height() {
        let node = DesignNode::new("f", NodeType::Frame)
            .with_bounds(BoundingBox::new(10.0, 20.0, 300.0, 150.0));
        let config = CompilerConfig::new().with_height_mode(HeightMode::Corrected);

        let tree = compile_with_own_extraction(&node, config).unwrap();
        assert_eq!(tree.style.top, 20.0);
        assert_eq!(tree.style.height, 150.0);
    }

    #[test]
    fn test_height_mode_names() {
        use clap::ValueEnum;

        assert_eq!(HeightMode::from_str("faithful", true), Ok(HeightMode::Faithful));
        assert_eq!(HeightMode::from_str("Corrected", true), Ok(HeightMode::Corrected));
        assert!(HeightMode::from_str("real", true).is_err());
    }
}
