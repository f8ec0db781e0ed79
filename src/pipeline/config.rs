//! Unified configuration for the fetch/extract/generate pipeline.
//!
//! This module consolidates the settings of the individual stages:
//! - CompilerConfig (height derivation)
//! - ConversionOptions (component name)
//! - output format and subtree root selection

use crate::converters::{
    ConversionOptions, HtmlConverter, JsonConverter, JsxConverter, OutputConverter,
};
use crate::structure::{CompilerConfig, HeightMode};

/// Output format of the generate stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// React component source
    #[default]
    Jsx,
    /// Standalone HTML page
    Html,
    /// Structure tree as JSON
    Json,
}

impl OutputFormat {
    /// Converter producing this format.
    pub fn converter(&self) -> Box<dyn OutputConverter> {
        match self {
            Self::Jsx => Box::new(JsxConverter::new()),
            Self::Html => Box::new(HtmlConverter::new()),
            Self::Json => Box::new(JsonConverter),
        }
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Compiler settings
    pub compiler: CompilerConfig,
    /// Converter settings
    pub conversion: ConversionOptions,
    /// Output format
    pub format: OutputFormat,
    /// Id of the node to compile instead of the document root
    pub root_id: Option<String>,
}

impl PipelineConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the height mode (builder pattern).
    pub fn with_height_mode(mut self, mode: HeightMode) -> Self {
        self.compiler = self.compiler.with_height_mode(mode);
        self
    }

    /// Set the output format (builder pattern).
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the generated component name (builder pattern).
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.conversion = self.conversion.with_component_name(name);
        self
    }

    /// Compile the subtree rooted at `id` (builder pattern).
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_names() {
        use clap::ValueEnum;

        assert_eq!(OutputFormat::from_str("jsx", true), Ok(OutputFormat::Jsx));
        assert_eq!(OutputFormat::from_str("HTML", true), Ok(OutputFormat::Html));
        assert_eq!(OutputFormat::from_str("json", false), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("svg", true).is_err());
    }

    #[test]
    fn test_converter_per_format() {
        assert_eq!(OutputFormat::Jsx.converter().extension(), "jsx");
        assert_eq!(OutputFormat::Html.converter().extension(), "html");
        assert_eq!(OutputFormat::Json.converter().name(), "json");
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_height_mode(HeightMode::Corrected)
            .with_format(OutputFormat::Html)
            .with_component_name("Landing")
            .with_root_id("1:2");

        assert_eq!(config.compiler.height_mode, HeightMode::Corrected);
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.conversion.component_name, "Landing");
        assert_eq!(config.root_id.as_deref(), Some("1:2"));
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.compiler.height_mode, HeightMode::Faithful);
        assert_eq!(config.format, OutputFormat::Jsx);
        assert_eq!(config.conversion.component_name, "FigmaComponent");
        assert!(config.root_id.is_none());
    }
}
