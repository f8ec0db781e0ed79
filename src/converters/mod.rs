//! Output converters for compiled structure trees.
//!
//! This module turns a [`StructureNode`] tree into text for a presentation layer:
//! - **JSX**: a React component with inline absolute styles
//! - **HTML**: a standalone layout-preserved page
//! - **JSON**: the structure tree itself
//!
//! plus [`render_swatch_sheet`], an HTML gallery of an extraction artifact.
//!
//! # Examples
//!
//! ```
//! use figma_oxide::converters::{ConversionOptions, JsxConverter, OutputConverter};
//! use figma_oxide::structure::{StructureNode, Style};
//!
//! let tree = StructureNode::text(Style::default(), "Hello");
//! let jsx = JsxConverter::new().convert(Some(&tree), &ConversionOptions::default())?;
//! assert!(jsx.contains("<p style={{"));
//! # Ok::<(), figma_oxide::Error>(())
//! ```

pub mod html;
pub mod jsx;
pub mod swatch;

pub use html::{escape_html, HtmlConverter};
pub use jsx::{escape_jsx_text, JsxConverter};
pub use swatch::render_swatch_sheet;

use crate::error::Result;
use crate::structure::StructureNode;

/// Options for converting structure trees to text.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    /// Name of the generated component (JSX) or page title (HTML).
    pub component_name: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            component_name: "FigmaComponent".to_string(),
        }
    }
}

impl ConversionOptions {
    /// Set the component name (builder pattern).
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }
}

/// Trait for serializing a compiled structure tree.
///
/// An absent tree (nothing compiled) still produces a valid, empty document.
pub trait OutputConverter {
    /// Convert a structure tree to text.
    fn convert(&self, root: Option<&StructureNode>, options: &ConversionOptions) -> Result<String>;

    /// Return the name of this converter for debugging.
    fn name(&self) -> &'static str;

    /// File extension for the converter's output.
    fn extension(&self) -> &'static str;
}

/// Converter that emits the structure tree as pretty-printed JSON.
#[derive(Debug, Default)]
pub struct JsonConverter;

impl OutputConverter for JsonConverter {
    fn convert(
        &self,
        root: Option<&StructureNode>,
        _options: &ConversionOptions,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(&root)?)
    }

    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Format a length as CSS pixels, e.g. `10px` or `12.5px`.
///
/// Negative zero is written as `0px`.
pub fn format_px(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}px", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Style;

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(10.0), "10px");
        assert_eq!(format_px(12.5), "12.5px");
        assert_eq!(format_px(-3.0), "-3px");
        assert_eq!(format_px(0.0), "0px");
        assert_eq!(format_px(-0.0), "0px");
    }

    #[test]
    fn test_json_converter() {
        let tree = StructureNode::leaf_box(Style::default());
        let json = JsonConverter
            .convert(Some(&tree), &ConversionOptions::default())
            .unwrap();
        assert!(json.contains("\"kind\": \"box\""));
        assert!(json.contains("\"backgroundColor\": \"transparent\""));

        let empty = JsonConverter.convert(None, &ConversionOptions::default()).unwrap();
        assert_eq!(empty, "null");
    }

    #[test]
    fn test_default_options() {
        let options = ConversionOptions::default();
        assert_eq!(options.component_name, "FigmaComponent");
        let options = options.with_component_name("Landing");
        assert_eq!(options.component_name, "Landing");
    }
}
