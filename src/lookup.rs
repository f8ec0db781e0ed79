//! Id-keyed view over an extraction snapshot.
//!
//! The compiler resolves a node's text content and background color through
//! this view instead of reading the node alone. The snapshot may come from the
//! same run or from a previously saved `figmaExtracted.json`.
//!
//! When several entries share a node id (a node with more than one solid fill
//! produces one color entry per fill), the first entry in collection order wins.

use crate::extractors::{ExtractedColor, ExtractedData, ExtractedText, Extraction};
use std::collections::HashMap;

/// Read-only lookup of extracted texts and colors by node id.
#[derive(Debug, Clone)]
pub struct CrossReference<'a> {
    texts: HashMap<&'a str, &'a ExtractedText>,
    colors: HashMap<&'a str, &'a ExtractedColor>,
}

impl<'a> CrossReference<'a> {
    /// Index the given text and color collections.
    pub fn new(texts: &'a [ExtractedText], colors: &'a [ExtractedColor]) -> Self {
        Self {
            texts: index_first(texts.iter().map(|t| (t.id.as_str(), t))),
            colors: index_first(colors.iter().map(|c| (c.id.as_str(), c))),
        }
    }

    /// Index an in-memory extraction.
    pub fn from_extraction(extraction: &'a Extraction) -> Self {
        Self::new(&extraction.texts, &extraction.colors)
    }

    /// Index a loaded extraction artifact.
    pub fn from_data(data: &'a ExtractedData) -> Self {
        Self::new(&data.texts, &data.colors)
    }

    /// Text entry for a node id.
    pub fn lookup_text(&self, id: &str) -> Option<&'a ExtractedText> {
        self.texts.get(id).copied()
    }

    /// Color entry for a node id.
    pub fn lookup_color(&self, id: &str) -> Option<&'a ExtractedColor> {
        self.colors.get(id).copied()
    }
}

/// Build a map keeping the first value seen for each key.
fn index_first<'a, T>(entries: impl Iterator<Item = (&'a str, &'a T)>) -> HashMap<&'a str, &'a T> {
    let mut map = HashMap::new();
    for (id, entry) in entries {
        map.entry(id).or_insert(entry);
    }
    map
}
