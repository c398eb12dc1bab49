//! HTML rendering for extracted documents.
//!
//! Produces a self-contained page with a small embedded stylesheet. Headings
//! are emitted first, then paragraphs, then tables; every piece of document
//! text is entity-escaped.

use crate::model::{Heading, Paragraph, ParseResult, Table};

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
body { font-family: Arial, sans-serif; line-height: 1.6; padding: 20px; max-width: 800px; margin: 0 auto; }
h1, h2, h3, h4, h5, h6 { color: #333; margin-top: 1.5em; }
table { border-collapse: collapse; width: 100%; margin: 1em 0; }
td, th { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }
.bold { font-weight: bold; }
.italic { font-style: italic; }
</style>
</head>
<body>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Convert a document to an HTML page.
pub fn to_html(result: &ParseResult) -> String {
    let mut output = String::from(HEAD);

    for heading in &result.headings {
        render_heading(&mut output, heading);
    }

    for para in &result.paragraphs {
        render_paragraph(&mut output, para);
    }

    for table in &result.tables {
        render_table(&mut output, table);
    }

    output.push_str(TAIL);
    output
}

/// The level goes into the tag name as-is, so out-of-range levels produce
/// non-standard tags such as `<h0>` or `<h9>`.
fn render_heading(output: &mut String, heading: &Heading) {
    output.push_str(&format!(
        "<h{level}>{}</h{level}>\n",
        escape_html(&heading.text),
        level = heading.level
    ));
}

fn render_paragraph(output: &mut String, para: &Paragraph) {
    let text = escape_html(&para.text);
    match paragraph_class(para) {
        Some(class) => output.push_str(&format!("<p class=\"{}\">{}</p>\n", class, text)),
        None => output.push_str(&format!("<p>{}</p>\n", text)),
    }
}

/// CSS class for paragraph emphasis; bold always comes first.
fn paragraph_class(para: &Paragraph) -> Option<&'static str> {
    match (para.is_bold, para.is_italic) {
        (true, true) => Some("bold italic"),
        (true, false) => Some("bold"),
        (false, true) => Some("italic"),
        (false, false) => None,
    }
}

fn render_table(output: &mut String, table: &Table) {
    output.push_str("<table>\n");

    for (i, row) in table.rows.iter().enumerate() {
        let tag = if i == 0 { "th" } else { "td" };
        output.push_str("<tr>\n");
        for cell in row {
            output.push_str(&format!("<{tag}>{}</{tag}>\n", escape_html(cell), tag = tag));
        }
        output.push_str("</tr>\n");
    }

    output.push_str("</table>\n");
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("날짜 ok"), "날짜 ok");
    }

    #[test]
    fn test_document_shell() {
        let html = to_html(&ParseResult::new());
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains(".bold { font-weight: bold; }"));
        assert!(html.contains(".italic { font-style: italic; }"));
        assert!(html.contains("th { background-color: #f2f2f2; }"));
        assert!(html.ends_with("<body>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_paragraph_class() {
        assert_eq!(paragraph_class(&Paragraph::with_text("x")), None);
        assert_eq!(paragraph_class(&Paragraph::bold("x")), Some("bold"));
        assert_eq!(paragraph_class(&Paragraph::italic("x")), Some("italic"));
        assert_eq!(
            paragraph_class(&Paragraph::new("x", true, true)),
            Some("bold italic")
        );
    }

    #[test]
    fn test_unclamped_heading_levels() {
        let mut result = ParseResult::new();
        result.add_heading(Heading::new(0, "Zero"));
        result.add_heading(Heading::new(9, "Nine"));
        result.add_heading(Heading::new(-1, "Negative"));

        let html = to_html(&result);
        assert!(html.contains("<h0>Zero</h0>"));
        assert!(html.contains("<h9>Nine</h9>"));
        assert!(html.contains("<h-1>Negative</h-1>"));
    }

    #[test]
    fn test_fixed_section_order() {
        let mut result = ParseResult::new();
        result.add_paragraph(Paragraph::with_text("Body"));
        result.add_table(Table::from_rows([["Cell"]]));
        result.add_heading(Heading::new(1, "Title"));

        let html = to_html(&result);
        let heading = html.find("<h1>Title</h1>").unwrap();
        let para = html.find("<p>Body</p>").unwrap();
        let table = html.find("<table>").unwrap();
        assert!(heading < para);
        assert!(para < table);
    }

    #[test]
    fn test_empty_table_shell() {
        let mut result = ParseResult::new();
        result.add_table(Table::new());

        let html = to_html(&result);
        assert!(html.contains("<table>\n</table>\n"));
        assert!(!html.contains("<tr>"));
    }

    #[test]
    fn test_table_cells_are_escaped() {
        let mut result = ParseResult::new();
        result.add_table(Table::from_rows([["a<b"], ["c&d"]]));

        let html = to_html(&result);
        assert!(html.contains("<th>a&lt;b</th>"));
        assert!(html.contains("<td>c&amp;d</td>"));
    }
}
