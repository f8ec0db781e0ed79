// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::should_implement_trait)]
#![allow(clippy::enum_variant_names)]
#![allow(clippy::doc_overindented_list_items)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Figma Oxide
//!
//! Turns Figma design files into flat design data and layout-preserving
//! component code.
//!
//! ## Core Features
//!
//! ### Extraction
//! - **Texts**: one record per `TEXT` layer (id, name, characters)
//! - **Colors**: one record per solid fill, in 8-bit channels
//! - **Images**: deduplicated ids of nodes with image fills, resolved to
//!   rendered PNGs through the Figma images endpoint
//!
//! ### Compilation
//! - **Structure Trees**: frames, groups and rectangles become absolutely
//!   positioned boxes, text layers become text leaves, everything else is pruned
//! - **Cross-Referencing**: background colors and text content are resolved
//!   through an id-keyed index over a (possibly separately produced) extraction
//! - **Output**: React component (JSX), standalone HTML, or JSON
//!
//! ## Architecture
//! - **Pure Core**: extraction and compilation never fail and never touch I/O
//! - **Collaborators**: blocking Figma REST client, artifact store on disk, CLI
//! - **Pluggable Converters**: trait-based output formats
//!
//! ## Quick Start
//!
//! ```
//! use figma_oxide::document::parse_design_file;
//! use figma_oxide::extractors::{ExtractedData, ImageMap};
//! use figma_oxide::pipeline::{Pipeline, PipelineConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = parse_design_file(r#"{"document": {"id": "0:0", "type": "DOCUMENT", "children": [
//!     {"id": "1:1", "type": "FRAME",
//!      "absoluteBoundingBox": {"x": 0, "y": 0, "width": 320, "height": 200},
//!      "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}],
//!      "children": [{"id": "1:2", "type": "TEXT", "characters": "Hello"}]}
//! ]}}"#)?;
//!
//! let pipeline = Pipeline::with_config(PipelineConfig::new().with_root_id("1:1"));
//! let data = ExtractedData::from_extraction(pipeline.extract(&file), ImageMap::new());
//! let jsx = pipeline.generate(&file, &data)?;
//!
//! assert!(jsx.contains("backgroundColor: \"rgb(255, 255, 255)\""));
//! assert!(jsx.contains(">Hello</p>"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Primitives
pub mod color;
pub mod geometry;

// Design documents
pub mod document;

// Extraction and cross-referencing
pub mod extractors;
pub mod lookup;

// Compilation
pub mod structure;

// Format converters
pub mod converters;

// Figma REST API
pub mod fetch;

// Artifacts on disk
pub mod storage;

// Pipeline architecture
pub mod pipeline;

// Re-exports
pub use document::{DesignFile, DesignNode};
pub use error::{Error, Result};
pub use extractors::{ExtractedData, Extraction};
pub use structure::StructureNode;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
