//! On-disk artifacts of a fetch/extract/generate run.
//!
//! All artifacts live under one output directory:
//!
//! ```text
//! <root>/
//!     figmaFile.json          raw file JSON as returned by the API
//!     figmaExtracted.json     texts, colors and image URLs
//!     figmaImages/<id>.png    downloaded image renders
//!     FigmaComponent.jsx      generated component
//! ```

use crate::document::{design_file_from_value, DesignFile};
use crate::error::Result;
use crate::extractors::ExtractedData;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File names used inside an artifact directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    /// Raw file JSON
    pub document_file: String,
    /// Extraction artifact
    pub extracted_file: String,
    /// Directory for downloaded images
    pub images_dir: String,
    /// Generated component
    pub component_file: String,
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self {
            document_file: "figmaFile.json".to_string(),
            extracted_file: "figmaExtracted.json".to_string(),
            images_dir: "figmaImages".to_string(),
            component_file: "FigmaComponent.jsx".to_string(),
        }
    }
}

impl StoreLayout {
    /// Set the component file name (builder pattern).
    pub fn with_component_file(mut self, name: impl Into<String>) -> Self {
        self.component_file = name.into();
        self
    }
}

/// Reads and writes run artifacts under a root directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
    layout: StoreLayout,
}

impl ArtifactStore {
    /// Create a store rooted at `root` with the default layout.
    ///
    /// Nothing is created on disk until the first save.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_layout(root, StoreLayout::default())
    }

    /// Create a store with a custom layout.
    pub fn with_layout(root: impl AsRef<Path>, layout: StoreLayout) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            layout,
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File layout.
    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Path of the raw file JSON.
    pub fn document_path(&self) -> PathBuf {
        self.root.join(&self.layout.document_file)
    }

    /// Path of the extraction artifact.
    pub fn extracted_path(&self) -> PathBuf {
        self.root.join(&self.layout.extracted_file)
    }

    /// Directory holding downloaded images.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(&self.layout.images_dir)
    }

    /// Path of the generated component.
    pub fn component_path(&self) -> PathBuf {
        self.root.join(&self.layout.component_file)
    }

    /// Save the raw file JSON.
    pub fn save_document(&self, document: &Value) -> Result<PathBuf> {
        let path = self.document_path();
        self.write_json(&path, document)?;
        Ok(path)
    }

    /// Load and parse the raw file JSON.
    pub fn load_document(&self) -> Result<DesignFile> {
        let path = self.document_path();
        log::debug!("Loading document from {}", path.display());
        let value: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        Ok(design_file_from_value(&value))
    }

    /// Save the extraction artifact.
    pub fn save_extracted(&self, data: &ExtractedData) -> Result<PathBuf> {
        let path = self.extracted_path();
        self.write_json(&path, data)?;
        log::info!(
            "Saved {} texts, {} colors, {} images to {}",
            data.texts.len(),
            data.colors.len(),
            data.images.len(),
            path.display()
        );
        Ok(path)
    }

    /// Load the extraction artifact.
    pub fn load_extracted(&self) -> Result<ExtractedData> {
        let path = self.extracted_path();
        log::debug!("Loading extraction from {}", path.display());
        Ok(serde_json::from_str(&fs::read_to_string(&path)?)?)
    }

    /// Save a downloaded image render as `<images_dir>/<id>.png`.
    pub fn save_image(&self, node_id: &str, bytes: &[u8]) -> Result<PathBuf> {
        let dir = self.images_dir();
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.png", sanitize_file_stem(node_id)));
        fs::write(&path, bytes)?;
        log::debug!("Saved image {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Save generated component source.
    pub fn save_component(&self, source: &str) -> Result<PathBuf> {
        self.save_output(&self.layout.component_file, source)
    }

    /// Save any generated text output under the root directory.
    pub fn save_output(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(file_name);
        fs::write(&path, contents)?;
        log::info!("Wrote {}", path.display());
        Ok(path)
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}

/// Make a node id usable as a file name.
///
/// Figma ids look like `12:34` (or `I12:34;56:78` for instances); path
/// separators and colons are replaced with `-`.
pub fn sanitize_file_stem(node_id: &str) -> String {
    node_id
        .chars()
        .map(|c| match c {
            ':' | '/' | '\\' => '-',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::extractors::{ExtractedColor, ExtractedText};
    use tempfile::tempdir;

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("12:34"), "12-34");
        assert_eq!(sanitize_file_stem("a/b\\c"), "a-b-c");
        assert_eq!(sanitize_file_stem("I1:2;3:4"), "I1-2;3-4");
    }

    #[test]
    fn test_default_layout_paths() {
        let store = ArtifactStore::new("/tmp/out");
        assert_eq!(store.document_path(), PathBuf::from("/tmp/out/figmaFile.json"));
        assert_eq!(store.extracted_path(), PathBuf::from("/tmp/out/figmaExtracted.json"));
        assert_eq!(store.images_dir(), PathBuf::from("/tmp/out/figmaImages"));
        assert_eq!(store.component_path(), PathBuf::from("/tmp/out/FigmaComponent.jsx"));
    }

    #[test]
    fn test_extracted_round_trip_preserves_unicode() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("nested"));

        let data = ExtractedData {
            texts: vec![ExtractedText {
                id: "1:1".to_string(),
                name: "Título".to_string(),
                content: "こんにちは".to_string(),
            }],
            colors: vec![ExtractedColor {
                id: "1:2".to_string(),
                name: "Accent".to_string(),
                color: Rgb::new(255, 0, 128),
            }],
            images: Default::default(),
        };

        let path = store.save_extracted(&data).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("こんにちは"));
        assert!(raw.contains("\n  \"texts\""));

        assert_eq!(store.load_extracted().unwrap(), data);
    }

    #[test]
    fn test_document_round_trip() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let raw = serde_json::json!({
            "name": "Landing",
            "document": {"id": "0:0", "type": "DOCUMENT", "children": []}
        });
        store.save_document(&raw).unwrap();

        let file = store.load_document().unwrap();
        assert_eq!(file.name.as_deref(), Some("Landing"));
        assert_eq!(file.root().map(|n| n.id.as_str()), Some("0:0"));
    }

    #[test]
    fn test_save_image_creates_directory() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let path = store.save_image("3:7", &[0x89, b'P', b'N', b'G']).unwrap();
        assert_eq!(path, dir.path().join("figmaImages").join("3-7.png"));
        assert_eq!(fs::read(&path).unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_save_component_custom_layout() {
        let dir = tempdir().unwrap();
        let layout = StoreLayout::default().with_component_file("Landing.jsx");
        let store = ArtifactStore::with_layout(dir.path(), layout);

        let path = store.save_component("export default Landing;\n").unwrap();
        assert_eq!(path, dir.path().join("Landing.jsx"));
        assert_eq!(fs::read_to_string(path).unwrap(), "export default Landing;\n");
    }

    #[test]
    fn test_missing_artifacts_are_io_errors() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        assert!(matches!(store.load_extracted(), Err(crate::Error::Io(_))));
        assert!(matches!(store.load_document(), Err(crate::Error::Io(_))));
    }
}
