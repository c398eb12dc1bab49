//! Markdown rendering for extracted documents.

use crate::model::{Heading, Paragraph, ParseResult, Table};

/// Convert a document to Markdown.
///
/// Headings come first, then paragraphs, then tables. Document text is
/// inserted as-is; Markdown syntax characters in the source are not escaped.
pub fn to_markdown(result: &ParseResult) -> String {
    let mut output = String::new();

    for heading in &result.headings {
        render_heading(&mut output, heading);
    }

    for para in &result.paragraphs {
        render_paragraph(&mut output, para);
    }

    for table in &result.tables {
        render_table(&mut output, table);
    }

    output.truncate(output.trim_end().len());
    output
}

fn render_heading(output: &mut String, heading: &Heading) {
    let prefix = "#".repeat(usize::try_from(heading.level).unwrap_or(0));
    output.push_str(&prefix);
    output.push(' ');
    output.push_str(&heading.text);
    output.push_str("\n\n");
}

fn render_paragraph(output: &mut String, para: &Paragraph) {
    let marker = match (para.is_bold, para.is_italic) {
        (true, true) => "***",
        (true, false) => "**",
        (false, true) => "*",
        (false, false) => "",
    };
    output.push_str(marker);
    output.push_str(&para.text);
    output.push_str(marker);
    output.push_str("\n\n");
}

fn render_table(output: &mut String, table: &Table) {
    let Some((header, body)) = table.rows.split_first() else {
        return;
    };

    render_row(output, header);
    render_row(output, &vec!["---".to_string(); header.len()]);

    for row in body {
        render_row(output, row);
    }

    output.push('\n');
}

fn render_row(output: &mut String, row: &[String]) {
    output.push_str("| ");
    output.push_str(&row.join(" | "));
    output.push_str(" |\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading() {
        let mut result = ParseResult::new();
        result.add_heading(Heading::new(1, "Chapter 1"));
        result.add_heading(Heading::new(3, "Section"));

        assert_eq!(to_markdown(&result), "# Chapter 1\n\n### Section");
    }

    #[test]
    fn test_non_positive_heading_level() {
        let mut result = ParseResult::new();
        result.add_heading(Heading::new(0, "Zero"));
        result.add_heading(Heading::new(-2, "Negative"));

        assert_eq!(to_markdown(&result), " Zero\n\n Negative");
    }

    #[test]
    fn test_paragraph_emphasis() {
        let mut result = ParseResult::new();
        result.add_paragraph(Paragraph::new("both", true, true));
        result.add_paragraph(Paragraph::bold("bold"));
        result.add_paragraph(Paragraph::italic("italic"));
        result.add_paragraph(Paragraph::with_text("plain"));

        assert_eq!(
            to_markdown(&result),
            "***both***\n\n**bold**\n\n*italic*\n\nplain"
        );
    }

    #[test]
    fn test_text_is_not_escaped() {
        let mut result = ParseResult::new();
        result.add_paragraph(Paragraph::with_text("a_b *c* [d] | e"));

        assert_eq!(to_markdown(&result), "a_b *c* [d] | e");
    }

    #[test]
    fn test_render_table() {
        let mut result = ParseResult::new();
        result.add_table(Table::from_rows([
            ["Header 1", "Header 2"],
            ["Cell 1", "Cell 2"],
        ]));

        assert_eq!(
            to_markdown(&result),
            "| Header 1 | Header 2 |\n| --- | --- |\n| Cell 1 | Cell 2 |"
        );
    }

    #[test]
    fn test_header_only_table() {
        let mut result = ParseResult::new();
        result.add_table(Table::from_rows([["Only"]]));

        assert_eq!(to_markdown(&result), "| Only |\n| --- |");
    }

    #[test]
    fn test_empty_table_is_skipped() {
        let mut result = ParseResult::new();
        result.add_paragraph(Paragraph::with_text("Before"));
        result.add_table(Table::new());
        result.add_table(Table::from_rows([["X"]]));

        assert_eq!(to_markdown(&result), "Before\n\n| X |\n| --- |");
    }

    #[test]
    fn test_sections_separated_by_blank_lines() {
        let mut result = ParseResult::new();
        result.add_heading(Heading::new(2, "Title"));
        result.add_paragraph(Paragraph::with_text("Body"));
        result.add_table(Table::from_rows([["A", "B"], ["1", "2"]]));

        assert_eq!(
            to_markdown(&result),
            "## Title\n\nBody\n\n| A | B |\n| --- | --- |\n| 1 | 2 |"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_markdown(&ParseResult::new()), "");
    }
}
