//! Fetch/extract/generate pipeline.
//!
//! ```text
//! Figma API ──fetch──> figmaFile.json
//!     ↓
//! [extract] (DesignNode tree → texts, colors, image node ids)
//!     ↓
//! Figma API ──images──> figmaExtracted.json, figmaImages/
//!     ↓
//! [compile] (DesignNode tree + CrossReference over the saved extraction)
//!     ↓
//! StructureNode tree
//!     ↓
//! [OutputConverter] (JSX/HTML/JSON)
//!     ↓
//! FigmaComponent.jsx
//! ```
//!
//! The stages communicate only through explicit values, so the generate stage
//! can run against artifacts saved by an earlier fetch.

pub mod config;

pub use config::{OutputFormat, PipelineConfig};

use crate::document::{design_file_from_value, DesignFile, DesignNode};
use crate::error::{Error, Result};
use crate::extractors::{extract, ExtractedData, Extraction, ImageMap};
use crate::fetch::FigmaClient;
use crate::lookup::CrossReference;
use crate::storage::ArtifactStore;
use crate::structure::{compile, StructureNode};
use std::io;

/// Counts reported by a fetch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchSummary {
    /// Extracted text entries
    pub texts: usize,
    /// Extracted color entries
    pub colors: usize,
    /// Image nodes found in the document
    pub image_nodes: usize,
    /// Images written to disk
    pub images_downloaded: usize,
}

/// Orchestrates the pipeline stages with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Extract texts, colors and image node ids from the whole document.
    pub fn extract(&self, file: &DesignFile) -> Extraction {
        let extraction = extract(file.root());
        log::info!(
            "Extracted {} texts, {} colors, {} image nodes from {} nodes",
            extraction.texts.len(),
            extraction.colors.len(),
            extraction.image_node_ids.len(),
            file.root().map_or(0, DesignNode::node_count)
        );
        extraction
    }

    /// Select the compilation root: the configured root id, or the document root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if a root id is configured but absent.
    pub fn select_root<'f>(&self, file: &'f DesignFile) -> Result<Option<&'f DesignNode>> {
        match &self.config.root_id {
            Some(id) => file
                .find(id)
                .map(Some)
                .ok_or_else(|| Error::NodeNotFound(id.clone())),
            None => Ok(file.root()),
        }
    }

    /// Compile the document against a previously produced extraction.
    ///
    /// `data` may come from a different run than `file`; node ids missing from
    /// it compile with transparent backgrounds and the nodes' own characters.
    pub fn compile(
        &self,
        file: &DesignFile,
        data: &ExtractedData,
    ) -> Result<Option<StructureNode>> {
        let root = self.select_root(file)?;
        let lookup = CrossReference::from_data(data);
        let tree = compile(root, &lookup, self.config.compiler.clone());

        match &tree {
            Some(tree) => log::info!("Compiled {} structure nodes", tree.node_count()),
            None => log::warn!("Nothing to compile: root is missing or of an unrecognized type"),
        }
        Ok(tree)
    }

    /// Compile and convert to the configured output format.
    pub fn generate(&self, file: &DesignFile, data: &ExtractedData) -> Result<String> {
        let tree = self.compile(file, data)?;
        self.config
            .format
            .converter()
            .convert(tree.as_ref(), &self.config.conversion)
    }

    /// File name of the generated output, e.g. `FigmaComponent.jsx`.
    pub fn output_file_name(&self) -> String {
        format!(
            "{}.{}",
            self.config.conversion.component_name,
            self.config.format.converter().extension()
        )
    }

    /// Fetch a file, extract it and save all artifacts to `store`.
    ///
    /// Steps run in order and the first failure aborts the run. The raw file is
    /// saved before extraction and the extraction before any image download.
    pub fn fetch(
        &self,
        client: &FigmaClient,
        file_key: &str,
        store: &ArtifactStore,
        download_images: bool,
    ) -> Result<FetchSummary> {
        let raw = client.fetch_file(file_key)?;
        store.save_document(&raw)?;

        let file = design_file_from_value(&raw);
        let extraction = self.extract(&file);
        let image_nodes = extraction.image_node_ids.len();

        let images = if download_images {
            client.fetch_image_urls(file_key, &extraction.image_node_id_list())?
        } else {
            ImageMap::new()
        };

        let data = ExtractedData::from_extraction(extraction, images);
        store.save_extracted(&data)?;

        let mut images_downloaded = 0;
        for (node_id, url) in &data.images {
            let Some(url) = url else {
                log::warn!("No image URL for node {}", node_id);
                continue;
            };
            let bytes = client.download_image(url)?;
            store.save_image(node_id, &bytes)?;
            images_downloaded += 1;
        }

        Ok(FetchSummary {
            texts: data.texts.len(),
            colors: data.colors.len(),
            image_nodes,
            images_downloaded,
        })
    }

    /// Re-run extraction from the raw file saved in `store`, keeping image URLs
    /// already recorded there.
    pub fn reextract(&self, store: &ArtifactStore) -> Result<ExtractedData> {
        let file = store.load_document()?;
        let extraction = self.extract(&file);

        // Only a missing artifact starts from an empty map; an unreadable one
        // must not be overwritten
        let images = match store.load_extracted() {
            Ok(previous) => previous.images,
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => ImageMap::new(),
            Err(e) => return Err(e),
        };

        let data = ExtractedData::from_extraction(extraction, images);
        store.save_extracted(&data)?;
        Ok(data)
    }
}
