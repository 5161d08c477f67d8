//! Article body rendering.
//!
//! Article bodies arrive as loosely markdown-like text: `#`/`##`/`###`
//! headers, blank-line-delimited paragraphs, `-`/`*`/digit-dot list
//! markers. This module decomposes one body into an ordered sequence of
//! typed [`ContentBlock`]s for the presentation layer.
//!
//! Rendering is a pure function of the input text. It never fails: input
//! with no recognizable structure degrades to a single paragraph block,
//! and empty input yields an empty sequence.

pub mod blocks;
pub mod html;
mod paragraph;
mod section;

pub use blocks::ContentBlock;
pub use paragraph::ParagraphBreak;

/// Options controlling how an article body is decomposed into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// How paragraph-unit boundaries are detected within a section body.
    pub paragraph_break: ParagraphBreak,
}

/// Render an article body with default options.
pub fn render(source: &str) -> Vec<ContentBlock> {
    render_with(source, RenderOptions::default())
}

/// Render an article body into its display block sequence.
///
/// Blocks are emitted in document order: per section, the heading block
/// (levels 2 and 3 only), then that section's body blocks.
pub fn render_with(source: &str, options: RenderOptions) -> Vec<ContentBlock> {
    let mut out = Vec::new();

    for section in section::split_sections(source) {
        match section.level {
            // The page layer shows the article title itself, so a level-1
            // heading is suppressed here; its body still renders.
            0 | 1 => {}
            level => out.push(ContentBlock::Heading {
                level,
                text: section.heading.to_string(),
            }),
        }

        for unit in paragraph::split_units(section.body, options.paragraph_break) {
            out.push(paragraph::classify_unit(unit));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn heading(level: u8, text: &str) -> ContentBlock {
        ContentBlock::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn paragraph(text: &str) -> ContentBlock {
        ContentBlock::Paragraph {
            text: text.to_string(),
        }
    }

    fn ordered(items: &[&str]) -> ContentBlock {
        ContentBlock::OrderedList {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn unordered(items: &[&str]) -> ContentBlock {
        ContentBlock::UnorderedList {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\n\n")]
    #[case(" \t \n  \n")]
    fn empty_and_whitespace_input_yields_no_blocks(#[case] source: &str) {
        assert_eq!(render(source), vec![]);
    }

    #[test]
    fn level_1_heading_is_suppressed_but_body_survives() {
        assert_eq!(render("# Title\nBody text"), vec![paragraph("Body text")]);
    }

    #[test]
    fn orphan_level_1_heading_produces_no_blocks() {
        assert_eq!(render("# Title"), vec![]);
        assert_eq!(render("# Title\n\n"), vec![]);
    }

    #[test]
    fn level_2_heading_renders_with_body() {
        assert_eq!(
            render("## Section\nHello world"),
            vec![heading(2, "Section"), paragraph("Hello world")]
        );
    }

    #[test]
    fn level_3_heading_renders_with_body() {
        assert_eq!(
            render("### Detail\nFine print"),
            vec![heading(3, "Detail"), paragraph("Fine print")]
        );
    }

    #[test]
    fn dash_list_becomes_unordered_block() {
        assert_eq!(render("- a\n- b\n- c"), vec![unordered(&["a", "b", "c"])]);
    }

    #[test]
    fn asterisk_list_becomes_unordered_block() {
        assert_eq!(render("* a\n* b"), vec![unordered(&["a", "b"])]);
    }

    #[test]
    fn numbered_list_becomes_ordered_block() {
        assert_eq!(
            render("1. first\n2. second"),
            vec![ordered(&["first", "second"])]
        );
    }

    #[test]
    fn blank_line_is_the_paragraph_separator() {
        assert_eq!(
            render("Para one.\n\nPara two."),
            vec![paragraph("Para one."), paragraph("Para two.")]
        );
    }

    #[test]
    fn single_newline_stays_inside_one_paragraph() {
        assert_eq!(
            render("line one\nline two"),
            vec![paragraph("line one\nline two")]
        );
    }

    #[test]
    fn unstructured_text_degrades_to_one_paragraph() {
        assert_eq!(render("just words"), vec![paragraph("just words")]);
    }

    #[test]
    fn render_is_deterministic() {
        let source = "# T\n\nIntro\n\n## A\n\n- x\n- y\n\n1. one";
        assert_eq!(render(source), render(source));
    }

    #[test]
    fn full_article_body_in_document_order() {
        let source = "\
# A Beginner's Guide to CD Laddering

CD laddering spreads one deposit across several maturities.

## Building the Ladder

Pick a total amount and a rung count.

1. Open one CD per rung
2. Reinvest each CD as it matures

### What to Watch

- Early withdrawal penalties
- Minimum deposit requirements";

        assert_eq!(
            render(source),
            vec![
                paragraph("CD laddering spreads one deposit across several maturities."),
                heading(2, "Building the Ladder"),
                paragraph("Pick a total amount and a rung count."),
                ordered(&["Open one CD per rung", "Reinvest each CD as it matures"]),
                heading(3, "What to Watch"),
                unordered(&["Early withdrawal penalties", "Minimum deposit requirements"]),
            ]
        );
    }

    #[test]
    fn leading_text_before_first_header_is_its_own_section() {
        assert_eq!(
            render("Preamble text.\n\n## Later\nBody"),
            vec![paragraph("Preamble text."), heading(2, "Later"), paragraph("Body")]
        );
    }

    #[test]
    fn four_hash_line_is_not_a_header() {
        assert_eq!(
            render("#### Deep\nstill the same paragraph"),
            vec![paragraph("#### Deep\nstill the same paragraph")]
        );
    }

    #[test]
    fn hash_without_space_is_not_a_header() {
        assert_eq!(render("##Tight"), vec![paragraph("##Tight")]);
    }

    #[test]
    fn mid_line_markers_are_left_untouched() {
        assert_eq!(
            render("rates rose - again - today"),
            vec![paragraph("rates rose - again - today")]
        );
    }

    #[test]
    fn mixed_markers_keep_the_first_classification() {
        // Classification is decided once per unit, from its first line;
        // the unordered strip leaves the foreign marker alone.
        assert_eq!(
            render("- a\n1. b"),
            vec![unordered(&["a", "1. b"])]
        );
    }

    #[test]
    fn blank_lines_inside_a_list_unit_are_discarded() {
        assert_eq!(
            render_with(
                "1. one\n \n2. two",
                RenderOptions {
                    paragraph_break: ParagraphBreak::EmptyLine,
                },
            ),
            vec![ordered(&["one", "two"])]
        );
    }

    #[rstest]
    #[case(ParagraphBreak::BlankRun, vec!["a", "b"])]
    #[case(ParagraphBreak::EmptyLine, vec!["a\n \nb"])]
    fn paragraph_break_variants_disagree_on_whitespace_only_lines(
        #[case] mode: ParagraphBreak,
        #[case] expected: Vec<&str>,
    ) {
        let options = RenderOptions {
            paragraph_break: mode,
        };
        let expected: Vec<ContentBlock> = expected.into_iter().map(paragraph).collect();
        assert_eq!(render_with("a\n \nb", options), expected);
    }

    #[test]
    fn runs_of_blank_lines_collapse_to_one_separator() {
        assert_eq!(
            render("a\n\n\n\nb"),
            vec![paragraph("a"), paragraph("b")]
        );
    }
}
