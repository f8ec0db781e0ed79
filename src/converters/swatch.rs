//! HTML gallery of an extraction artifact.
//!
//! Lists every extracted text (name, content and node id) and renders every
//! extracted color as a swatch labelled with its name and `rgb(...)` value. The
//! label color follows [`contrast_label`] so it stays readable on the swatch.

use super::html::escape_html;
use crate::color::contrast_label;
use crate::extractors::ExtractedData;

/// Render the texts and colors of an extraction as an HTML page.
pub fn render_swatch_sheet(data: &ExtractedData) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Extracted design data</title>\n");
    html.push_str("<style>\n");
    html.push_str("body { font-family: sans-serif; background: #f3f4f6; padding: 24px; }\n");
    html.push_str(
        ".grid { display: grid; \
         grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 16px; }\n",
    );
    html.push_str(
        ".card { background: white; border-radius: 12px; padding: 16px; \
         border: 1px solid #e5e7eb; }\n",
    );
    html.push_str(".swatch { border-radius: 12px; padding: 16px; text-align: center; }\n");
    html.push_str(".id { color: #9ca3af; font-size: 12px; }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Texts
    html.push_str("<section>\n<h2>Texts</h2>\n<div class=\"grid\">\n");
    for text in &data.texts {
        html.push_str(&format!(
            "  <div class=\"card\"><h3>{}</h3><p>{}</p><p class=\"id\">ID: {}</p></div>\n",
            escape_html(&text.name),
            escape_html(&text.content),
            escape_html(&text.id)
        ));
    }
    html.push_str("</div>\n</section>\n");

    // Colors
    html.push_str("<section>\n<h2>Colors</h2>\n<div class=\"grid\">\n");
    for entry in &data.colors {
        let rgb = entry.color;
        let label = contrast_label(rgb.r, rgb.g, rgb.b).as_css();
        html.push_str(&format!(
            "  <div class=\"swatch\" style=\"background-color: {rgb}; color: {label};\">\
             <strong>{}</strong><br><small>{rgb}</small></div>\n",
            escape_html(&entry.name),
        ));
    }
    html.push_str("</div>\n</section>\n");

    html.push_str("</body>\n</html>\n");
    html
}
