//! JSX converter for structure trees.
//!
//! Emits a React function component whose body mirrors the structure tree:
//! boxes become `<div>` elements, text leaves become `<p>` elements, and every
//! element carries its absolute position as an inline style object.

use super::{format_px, ConversionOptions, OutputConverter};
use crate::error::Result;
use crate::structure::{NodeKind, Style, StructureNode};

/// Indentation of the compiled tree inside the component's root container.
const BASE_INDENT: &str = "    ";

/// Converter from structure trees to a React component.
#[derive(Debug, Default)]
pub struct JsxConverter;

impl JsxConverter {
    /// Create a new JSX converter.
    pub fn new() -> Self {
        Self
    }

    /// Render one node (and its subtree) at the given indentation.
    fn write_node(&self, node: &StructureNode, indent: &str, out: &mut String) {
        let style = style_object(&node.style, indent);

        match node.kind {
            NodeKind::TextLeaf => {
                let content = escape_jsx_text(node.content.as_deref().unwrap_or_default());
                out.push_str(&format!("{}<p style={{{}}}>{}</p>\n", indent, style, content));
            },
            NodeKind::Box if node.children.is_empty() => {
                out.push_str(&format!("{}<div style={{{}}} />\n", indent, style));
            },
            NodeKind::Box => {
                out.push_str(&format!("{}<div style={{{}}}>\n", indent, style));
                let child_indent = format!("{}  ", indent);
                for child in &node.children {
                    self.write_node(child, &child_indent, out);
                }
                out.push_str(&format!("{}</div>\n", indent));
            },
        }
    }
}

impl OutputConverter for JsxConverter {
    fn convert(&self, root: Option<&StructureNode>, options: &ConversionOptions) -> Result<String> {
        let name = &options.component_name;
        let mut jsx = String::new();

        jsx.push_str("import React from 'react';\n\n");
        jsx.push_str(&format!("const {} = () => (\n", name));
        jsx.push_str("  <div style={{ position: 'relative', width: '100vw', height: '100vh' }}>\n");
        if let Some(root) = root {
            self.write_node(root, BASE_INDENT, &mut jsx);
        }
        jsx.push_str("  </div>\n");
        jsx.push_str(");\n\n");
        jsx.push_str(&format!("export default {};\n", name));

        Ok(jsx)
    }

    fn name(&self) -> &'static str {
        "jsx"
    }

    fn extension(&self) -> &'static str {
        "jsx"
    }
}

/// Format a style as a multi-line JS object literal.
///
/// Keys are unquoted, values are double-quoted strings, and continuation lines
/// are prefixed with `indent` so the object lines up with its element.
fn style_object(style: &Style, indent: &str) -> String {
    let entries = [
        ("position", style.position.as_css().to_string()),
        ("left", format_px(style.left)),
        ("top", format_px(style.top)),
        ("width", format_px(style.width)),
        ("height", format_px(style.height)),
        ("backgroundColor", style.background_color.to_string()),
    ];

    let body: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{}  {}: \"{}\"", indent, key, value))
        .collect();

    format!("{{\n{}\n{}}}", body.join(",\n"), indent)
}

/// Escape text for use as a JSX child.
///
/// Braces would start expressions and angle brackets would start tags; `&` is
/// escaped so entity-looking text survives.
///
/// # Examples
///
/// ```
/// # use figma_oxide::converters::jsx::escape_jsx_text;
/// assert_eq!(escape_jsx_text("a < b {c}"), "a &lt; b {'{'}c{'}'}");
/// ```
pub fn escape_jsx_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '{' => escaped.push_str("{'{'}"),
            '}' => escaped.push_str("{'}'}"),
            _ => escaped.push(c),
        }
    }
    escaped
}
