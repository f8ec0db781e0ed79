//! Compiled structure trees.
//!
//! This module turns a design tree into a nested, absolutely positioned
//! structure of generic boxes and text leaves that a renderer can consume.
//!
//! ## Overview
//!
//! Compilation needs two inputs, passed explicitly:
//! - the raw [`DesignNode`](crate::document::DesignNode) tree, for nesting and
//!   geometry
//! - a [`CrossReference`](crate::lookup::CrossReference) over an extraction
//!   snapshot, for background colors and text content
//!
//! The output is pure data. Turning it into JSX or HTML is the job of
//! [`crate::converters`].
//!
//! ## Example
//!
//! ```
//! use figma_oxide::document::{DesignNode, Fill, NodeType};
//! use figma_oxide::extractors::extract;
//! use figma_oxide::lookup::CrossReference;
//! use figma_oxide::structure::StructureCompiler;
//!
//! let root = DesignNode::new("1", NodeType::Rectangle).with_fill(Fill::solid(1.0, 0.0, 0.0));
//! let extraction = extract(Some(&root));
//! let lookup = CrossReference::from_extraction(&extraction);
//!
//! let tree = StructureCompiler::new(&lookup).compile(Some(&root)).unwrap();
//! assert_eq!(tree.style.background_color.to_string(), "rgb(255, 0, 0)");
//! ```

mod compiler;
pub mod traversal;
mod types;

pub use compiler::{compile, CompilerConfig, HeightMode, StructureCompiler};
pub use traversal::{flatten_structure, FlatNode};
pub use types::{BackgroundColor, NodeKind, Position, Style, StructureNode};
