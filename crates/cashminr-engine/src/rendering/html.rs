//! Minimal HTML serialization of a block sequence.
//!
//! Structure only: headings, paragraphs, and lists with all text escaped.
//! Styling and layout stay with the consuming page.

use std::fmt::Write;

use super::blocks::ContentBlock;

/// Serialize blocks to HTML, one element per line.
pub fn to_html(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            ContentBlock::Heading { level, text } => {
                let _ = writeln!(
                    out,
                    "<h{level}>{}</h{level}>",
                    html_escape::encode_text(text)
                );
            }
            ContentBlock::Paragraph { text } => {
                let _ = writeln!(out, "<p>{}</p>", html_escape::encode_text(text));
            }
            ContentBlock::OrderedList { items } => write_list(&mut out, "ol", items),
            ContentBlock::UnorderedList { items } => write_list(&mut out, "ul", items),
        }
    }
    out
}

fn write_list(out: &mut String, tag: &str, items: &[String]) {
    let _ = writeln!(out, "<{tag}>");
    for item in items {
        let _ = writeln!(out, "  <li>{}</li>", html_escape::encode_text(item));
    }
    let _ = writeln!(out, "</{tag}>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_each_variant_to_its_element() {
        let blocks = render("## Fees\n\nNo annual fee.\n\n- a\n- b\n\n1. x");
        assert_eq!(
            to_html(&blocks),
            "<h2>Fees</h2>\n\
             <p>No annual fee.</p>\n\
             <ul>\n  <li>a</li>\n  <li>b</li>\n</ul>\n\
             <ol>\n  <li>x</li>\n</ol>\n"
        );
    }

    #[test]
    fn escapes_markup_in_text() {
        let blocks = render("APYs <above> 5% & falling");
        assert_eq!(to_html(&blocks), "<p>APYs &lt;above&gt; 5% &amp; falling</p>\n");
    }

    #[test]
    fn empty_block_sequence_yields_empty_string() {
        assert_eq!(to_html(&[]), "");
    }
}
