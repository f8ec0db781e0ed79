//! HTML converter for structure trees.
//!
//! Produces a standalone layout-preserved page: every compiled node becomes a
//! `div` (or `p` for text) absolutely positioned inside a single relative page
//! container.
//!
//! Figma bounding boxes are absolute to the canvas, so the page is written flat
//! in paint order instead of nesting elements, which would offset each child by
//! its parent's position a second time.

use super::{format_px, ConversionOptions, OutputConverter};
use crate::error::Result;
use crate::structure::{flatten_structure, NodeKind, Style, StructureNode};

/// Converter from structure trees to layout-preserved HTML.
///
/// # Examples
///
/// ```
/// use figma_oxide::converters::{ConversionOptions, HtmlConverter, OutputConverter};
/// use figma_oxide::structure::{StructureNode, Style};
///
/// let tree = StructureNode::text(Style::default(), "Hi & bye");
/// let html = HtmlConverter::new().convert(Some(&tree), &ConversionOptions::default())?;
/// assert!(html.contains("Hi &amp; bye"));
/// # Ok::<(), figma_oxide::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct HtmlConverter;

impl HtmlConverter {
    /// Create a new HTML converter.
    pub fn new() -> Self {
        Self
    }
}

impl OutputConverter for HtmlConverter {
    fn convert(&self, root: Option<&StructureNode>, options: &ConversionOptions) -> Result<String> {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&options.component_name)));

        // Add CSS styles
        html.push_str("<style>\n");
        html.push_str(".page {\n");
        html.push_str("  position: relative;\n");
        html.push_str("  width: 100vw;\n");
        html.push_str("  height: 100vh;\n");
        html.push_str("}\n");
        html.push_str(".text {\n");
        html.push_str("  margin: 0;\n");
        html.push_str("  white-space: pre-wrap;\n");
        html.push_str("}\n");
        html.push_str("</style>\n");
        html.push_str("</head>\n<body>\n");

        // Add page container
        html.push_str("<div class=\"page\">\n");

        for node in flatten_structure(root) {
            let style = inline_style(node.style);
            match node.kind {
                NodeKind::TextLeaf => {
                    let text = escape_html(node.content.unwrap_or_default());
                    html.push_str(&format!(
                        "  <p class=\"text\" style=\"{}\">{}</p>\n",
                        style, text
                    ));
                },
                NodeKind::Box => {
                    html.push_str(&format!("  <div style=\"{}\"></div>\n", style));
                },
            }
        }

        html.push_str("</div>\n");
        html.push_str("</body>\n</html>\n");

        Ok(html)
    }

    fn name(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

/// Format a style as a CSS declaration list.
fn inline_style(style: &Style) -> String {
    format!(
        "position: {}; left: {}; top: {}; width: {}; height: {}; background-color: {};",
        style.position.as_css(),
        format_px(style.left),
        format_px(style.top),
        format_px(style.width),
        format_px(style.height),
        style.background_color
    )
}

/// Escape HTML special characters.
///
/// Replaces &, <, >, ", and ' with their HTML entity equivalents.
///
/// # Examples
///
/// ```
/// # use figma_oxide::converters::html::escape_html;
/// let text = "AT&T <Company>";
/// let escaped = escape_html(text);
/// assert_eq!(escaped, "AT&amp;T &lt;Company&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::geometry::Rect;
    use crate::structure::BackgroundColor;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Hello"), "Hello");
        assert_eq!(escape_html("AT&T"), "AT&amp;T");
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("'apostrophe'"), "&#x27;apostrophe&#x27;");
    }

    #[test]
    fn test_convert_empty() {
        let html = HtmlConverter::new()
            .convert(None, &ConversionOptions::default())
            .unwrap();
        assert!(html.contains("<div class=\"page\">\n</div>"));
        assert!(html.contains("<title>FigmaComponent</title>"));
    }

    #[test]
    fn test_inline_style() {
        let style = Style::absolute(
            Rect::new(5.0, 6.0, 7.5, 8.0),
            BackgroundColor::Rgb(Rgb::new(0, 0, 0)),
        );
        assert_eq!(
            inline_style(&style),
            "position: absolute; left: 5px; top: 6px; width: 7.5px; height: 8px; \
             background-color: rgb(0, 0, 0);"
        );
    }

    #[test]
    fn test_layout_is_flat_in_paint_order() {
        let tree = StructureNode::container(
            Style::default(),
            vec![
                StructureNode::container(
                    Style::default(),
                    vec![StructureNode::text(Style::default(), "inner")],
                ),
                StructureNode::text(Style::default(), "outer"),
            ],
        );

        let html = HtmlConverter::new()
            .convert(Some(&tree), &ConversionOptions::default())
            .unwrap();

        assert_eq!(html.matches("<div style=").count(), 2);
        let inner = html.find("inner").unwrap();
        let outer = html.find("outer").unwrap();
        assert!(inner < outer);
        assert!(!html.contains("</div>\n  </div>"));
    }
}
