//! Lenient parser for Figma file JSON.
//!
//! Parses the response of `GET /v1/files/:key` (or the saved `figmaFile.json`)
//! into [`DesignFile`] / [`DesignNode`] trees. The source schema is not
//! validated: a property with an unexpected shape is dropped for that node only,
//! and parsing continues with the remaining properties and the children.

use super::types::{DesignFile, DesignNode, Fill, FillColor, FillKind, NodeType};
use crate::error::Result;
use crate::geometry::BoundingBox;
use serde_json::{Map, Value};

/// Parse a Figma file from JSON text.
///
/// # Returns
/// * `Ok(DesignFile)` - The parsed file; `document` is `None` when the JSON has
///   no object under `"document"`
/// * `Err(Error::Json)` - If the text is not valid JSON or nests deeper than
///   serde_json's recursion limit
pub fn parse_design_file(json: &str) -> Result<DesignFile> {
    let value: Value = serde_json::from_str(json)?;
    Ok(design_file_from_value(&value))
}

/// Build a [`DesignFile`] from an already decoded JSON value.
pub fn design_file_from_value(value: &Value) -> DesignFile {
    let name = value.get("name").and_then(Value::as_str).map(str::to_string);
    let document = value.get("document").and_then(parse_node);

    if document.is_none() {
        log::warn!("Figma file has no document object");
    }

    DesignFile { name, document }
}

/// Parse a single node (and its subtree) from a JSON value.
///
/// # Returns
/// * `Some(DesignNode)` - If the value is an object
/// * `None` - If the value is not an object (the node is skipped by callers)
pub fn parse_node(value: &Value) -> Option<DesignNode> {
    let obj = value.as_object()?;

    let id = string_field(obj, "id").unwrap_or_default();
    let node_type = string_field(obj, "type")
        .map(|t| NodeType::from_str(&t))
        .unwrap_or_else(|| NodeType::Other(String::new()));

    let children = match obj.get("children") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let child = parse_node(item);
                if child.is_none() {
                    log::warn!("Skipping non-object child of node '{}'", id);
                }
                child
            })
            .collect(),
        _ => Vec::new(),
    };

    Some(DesignNode {
        name: string_field(obj, "name").unwrap_or_default(),
        bounding_box: obj.get("absoluteBoundingBox").and_then(parse_bounding_box),
        fills: obj.get("fills").and_then(parse_fills),
        characters: string_field(obj, "characters"),
        id,
        node_type,
        children,
    })
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn parse_bounding_box(value: &Value) -> Option<BoundingBox> {
    let obj = value.as_object()?;
    Some(BoundingBox {
        x: obj.get("x").and_then(Value::as_f64),
        y: obj.get("y").and_then(Value::as_f64),
        width: obj.get("width").and_then(Value::as_f64),
        height: obj.get("height").and_then(Value::as_f64),
    })
}

fn parse_fills(value: &Value) -> Option<Vec<Fill>> {
    let items = value.as_array()?;
    Some(items.iter().filter_map(parse_fill).collect())
}

fn parse_fill(value: &Value) -> Option<Fill> {
    let obj = value.as_object()?;

    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .map(FillKind::from_str)
        .unwrap_or_else(|| FillKind::Other(String::new()));

    let color = obj.get("color").and_then(|c| {
        let c = c.as_object()?;
        Some(FillColor::new(
            c.get("r").and_then(Value::as_f64)?,
            c.get("g").and_then(Value::as_f64)?,
            c.get("b").and_then(Value::as_f64)?,
        ))
    });

    // An empty hash is as good as no hash
    let image_ref = obj
        .get("imageRef")
        .and_then(Value::as_str)
        .filter(|r| !r.is_empty())
        .map(str::to_string);

    Some(Fill {
        kind,
        color,
        image_ref,
    })
}
