//! Flat extraction records.
//!
//! These are the shapes written to `figmaExtracted.json` and read back by the
//! compiler's cross-referencer, so field names follow the JSON artifact.

use crate::color::Rgb;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Text content of one `TEXT` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Node id
    pub id: String,
    /// Node display name
    #[serde(default)]
    pub name: String,
    /// Raw characters, empty when the node had none
    #[serde(default)]
    pub content: String,
}

/// One solid fill of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedColor {
    /// Node id (repeated for every solid fill of the node)
    pub id: String,
    /// Node display name
    #[serde(default)]
    pub name: String,
    /// Fill color in 8-bit channels
    pub color: Rgb,
}

/// Node id to rendered image URL, as answered by the images endpoint.
///
/// `None` marks nodes the service failed to render.
pub type ImageMap = IndexMap<String, Option<String>>;

/// Result of one extraction pass over a document tree.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Text entries in document order
    pub texts: Vec<ExtractedText>,
    /// Solid color entries in document order
    pub colors: Vec<ExtractedColor>,
    /// Ids of nodes with at least one image fill (deduplicated)
    pub image_node_ids: IndexSet<String>,
}

impl Extraction {
    /// Check whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.colors.is_empty() && self.image_node_ids.is_empty()
    }

    /// Image node ids as a plain list, e.g. for the images endpoint.
    pub fn image_node_id_list(&self) -> Vec<String> {
        self.image_node_ids.iter().cloned().collect()
    }
}

/// The extraction artifact consumed by renderers: texts, colors and image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedData {
    /// Text entries in document order
    #[serde(default)]
    pub texts: Vec<ExtractedText>,
    /// Solid color entries in document order
    #[serde(default)]
    pub colors: Vec<ExtractedColor>,
    /// Resolved image URLs (or local paths) by node id
    #[serde(default)]
    pub images: ImageMap,
}

impl ExtractedData {
    /// Combine an extraction with the image URLs resolved for its image nodes.
    pub fn from_extraction(extraction: Extraction, images: ImageMap) -> Self {
        Self {
            texts: extraction.texts,
            colors: extraction.colors,
            images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_data_json_shape() {
        let mut images = ImageMap::new();
        images.insert("3:1".to_string(), Some("https://img/3-1.png".to_string()));
        images.insert("3:2".to_string(), None);

        let data = ExtractedData {
            texts: vec![ExtractedText {
                id: "1:1".to_string(),
                name: "Title".to_string(),
                content: "Hello".to_string(),
            }],
            colors: vec![ExtractedColor {
                id: "2:1".to_string(),
                name: "Bg".to_string(),
                color: Rgb::new(51, 128, 204),
            }],
            images,
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["texts"][0]["content"], "Hello");
        assert_eq!(value["colors"][0]["color"]["g"], 128);
        assert_eq!(value["images"]["3:1"], "https://img/3-1.png");
        assert!(value["images"]["3:2"].is_null());
    }

    #[test]
    fn test_extracted_data_tolerates_missing_sections() {
        let data: ExtractedData = serde_json::from_str(r#"{"texts": []}"#).unwrap();
        assert!(data.colors.is_empty());
        assert!(data.images.is_empty());
    }

    #[test]
    fn test_from_extraction_drops_id_set() {
        let mut extraction = Extraction::default();
        extraction.image_node_ids.insert("9".to_string());
        assert!(!extraction.is_empty());
        assert_eq!(extraction.image_node_id_list(), vec!["9".to_string()]);

        let data = ExtractedData::from_extraction(extraction, ImageMap::new());
        assert!(data.texts.is_empty());
        assert!(data.images.is_empty());
    }
}
