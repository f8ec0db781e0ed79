//! Figma design documents.
//!
//! This module holds the input side of the toolkit: the [`DesignNode`] tree and
//! a lenient parser from the Figma REST API's file JSON.
//!
//! ## Tree Shape
//!
//! A Figma file has a single `DOCUMENT` root whose children are `CANVAS` pages,
//! which in turn contain frames, groups, shapes and text layers nested to
//! arbitrary depth. Only the fields the extractor and compiler read are kept:
//! id, name, type, absolute bounding box, fills, characters and children.
//!
//! ## Example
//!
//! ```
//! use figma_oxide::document::{parse_design_file, NodeType};
//!
//! let file = parse_design_file(r#"{"document": {"id": "0:0", "type": "DOCUMENT",
//!     "children": [{"id": "1:1", "type": "TEXT", "characters": "Hello"}]}}"#)?;
//! let text = file.find("1:1").unwrap();
//! assert_eq!(text.node_type, NodeType::Text);
//! # Ok::<(), figma_oxide::Error>(())
//! ```

mod parser;
mod types;

pub use parser::{design_file_from_value, parse_design_file, parse_node};
pub use types::{DesignFile, DesignNode, Fill, FillColor, FillKind, NodeType};
