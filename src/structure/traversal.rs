//! Structure tree traversal.
//!
//! Implements pre-order traversal of compiled structure trees, which is also
//! paint order: a parent is drawn before its children, earlier siblings before
//! later ones.

use super::types::{NodeKind, Style, StructureNode};

/// A structure node visited during traversal, without its children.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatNode<'a> {
    /// Nesting depth (root is 0)
    pub depth: usize,
    /// Node kind
    pub kind: NodeKind,
    /// Computed style
    pub style: &'a Style,
    /// Text content (text leaves only)
    pub content: Option<&'a str>,
}

/// Flatten a structure tree in pre-order.
///
/// # Arguments
/// * `root` - The compiled tree, if any
///
/// # Returns
/// * Vector of visited nodes in paint order (empty for an absent root)
pub fn flatten_structure(root: Option<&StructureNode>) -> Vec<FlatNode<'_>> {
    let mut result = Vec::new();

    if let Some(root) = root {
        traverse_node(root, 0, &mut result);
    }

    result
}

/// Recursively traverse a structure node.
///
/// 1. Record the node itself
/// 2. Recursively process children in order
fn traverse_node<'a>(node: &'a StructureNode, depth: usize, result: &mut Vec<FlatNode<'a>>) {
    result.push(FlatNode {
        depth,
        kind: node.kind,
        style: &node.style,
        content: node.content.as_deref(),
    });

    for child in &node.children {
        traverse_node(child, depth + 1, result);
    }
}
