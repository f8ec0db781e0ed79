//! Flat extraction of texts, solid colors and image nodes.
//!
//! Performs one pre-order walk over the design tree. Classification does not
//! depend on the node type except for text, and no node type stops the walk:
//! every node's children are always visited.

use super::types::{ExtractedColor, ExtractedText, Extraction};
use crate::document::{DesignNode, FillKind, NodeType};

/// Extract texts, colors and image node ids from a design tree.
///
/// An absent root yields an empty [`Extraction`].
///
/// # Examples
///
/// ```
/// use figma_oxide::document::{DesignNode, Fill, NodeType};
/// use figma_oxide::extractors::extract;
///
/// let root = DesignNode::new("1", NodeType::Frame)
///     .with_fill(Fill::solid(0.2, 0.5, 0.8))
///     .with_child(DesignNode::new("2", NodeType::Text).with_characters("hi"));
///
/// let extraction = extract(Some(&root));
/// assert_eq!(extraction.texts[0].content, "hi");
/// assert_eq!(extraction.colors[0].color.g, 128);
/// ```
pub fn extract(root: Option<&DesignNode>) -> Extraction {
    let mut extraction = Extraction::default();

    if let Some(root) = root {
        visit(root, &mut extraction);
    }

    log::debug!(
        "Extracted {} texts, {} colors, {} image nodes",
        extraction.texts.len(),
        extraction.colors.len(),
        extraction.image_node_ids.len()
    );

    extraction
}

/// Visit a node, then its children in order.
fn visit(node: &DesignNode, out: &mut Extraction) {
    classify(node, out);

    for child in &node.children {
        visit(child, out);
    }
}

fn classify(node: &DesignNode, out: &mut Extraction) {
    if node.node_type == NodeType::Text {
        out.texts.push(ExtractedText {
            id: node.id.clone(),
            name: node.name.clone(),
            content: node.characters.clone().unwrap_or_default(),
        });
    }

    let Some(fills) = &node.fills else {
        return;
    };

    for fill in fills {
        match fill.kind {
            FillKind::Solid => match fill.color {
                Some(color) => out.colors.push(ExtractedColor {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    color: color.to_rgb(),
                }),
                None => log::trace!("Solid fill without color on node '{}'", node.id),
            },
            FillKind::Image => {
                if fill.image_ref.is_some() {
                    out.image_node_ids.insert(node.id.clone());
                } else {
                    log::trace!("Image fill without imageRef on node '{}'", node.id);
                }
            },
            FillKind::Other(_) => {},
        }
    }
}
