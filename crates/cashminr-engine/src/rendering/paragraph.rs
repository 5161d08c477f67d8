use std::sync::OnceLock;

use regex::Regex;

use super::blocks::ContentBlock;

/// How paragraph-unit boundaries are detected within a section body.
///
/// The two article surfaces historically disagreed on this; both
/// behaviors are kept selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphBreak {
    /// A run of empty or whitespace-only lines separates units.
    #[default]
    BlankRun,
    /// Only a literal empty line (`\n\n`) separates units.
    EmptyLine,
}

fn blank_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("invalid blank run regex"))
}

fn ordered_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s").expect("invalid ordered marker regex"))
}

fn ordered_strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("invalid ordered strip regex"))
}

fn unordered_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-*]\s").expect("invalid unordered marker regex"))
}

fn unordered_strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-*]\s*").expect("invalid unordered strip regex"))
}

/// Split a section body into trimmed, non-empty paragraph-units.
pub(crate) fn split_units(body: &str, mode: ParagraphBreak) -> Vec<&str> {
    let raw: Vec<&str> = match mode {
        ParagraphBreak::BlankRun => blank_run_re().split(body).collect(),
        ParagraphBreak::EmptyLine => body.split("\n\n").collect(),
    };
    raw.into_iter()
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .collect()
}

/// Classify one paragraph-unit into its final block.
///
/// The decision is made once, from the unit's first line; later lines that
/// begin a different marker style do not re-classify the unit. Marker
/// regexes anchor to line start, so marker characters mid-line are left
/// untouched.
pub(crate) fn classify_unit(unit: &str) -> ContentBlock {
    if ordered_marker_re().is_match(unit) {
        ContentBlock::OrderedList {
            items: list_items(unit, ordered_strip_re()),
        }
    } else if unordered_marker_re().is_match(unit) {
        ContentBlock::UnorderedList {
            items: list_items(unit, unordered_strip_re()),
        }
    } else {
        ContentBlock::Paragraph {
            text: unit.to_string(),
        }
    }
}

/// One item per non-blank line, marker prefix stripped, source order kept.
fn list_items(unit: &str, strip: &Regex) -> Vec<String> {
    unit.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip.replace(line, "").into_owned())
        .collect()
}
