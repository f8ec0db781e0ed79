//! Flat extraction from design documents.
//!
//! Walks a [`DesignNode`](crate::document::DesignNode) tree once and collects:
//! - **Texts**: one entry per `TEXT` node
//! - **Colors**: one entry per solid fill (8-bit channels)
//! - **Image nodes**: ids of nodes with image fills, used to request renders

mod design;
mod types;

pub use design::extract;
pub use types::{ExtractedColor, ExtractedData, ExtractedText, Extraction, ImageMap};
