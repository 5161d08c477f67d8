use std::sync::OnceLock;

use regex::Regex;

/// A contiguous slice of source text starting at a header line, or the
/// leading text before the first header.
///
/// This is phase 1 of rendering: the source is partitioned at every line
/// start that opens a header, without looking inside section bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section<'a> {
    /// Header level 1-3, or 0 when the slice has no header line.
    pub level: u8,
    /// Header text with the marker stripped and surrounding whitespace
    /// trimmed. Empty for level-0 sections.
    pub heading: &'a str,
    /// The section body. For level-0 sections this is the entire slice,
    /// first line included.
    pub body: &'a str,
}

fn header_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#{1,3}\s").expect("invalid header start regex"))
}

fn header_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,3})\s+(.*)$").expect("invalid header line regex"))
}

/// Partition `source` into sections at every header line.
///
/// Empty or whitespace-only slices are dropped, so blank input produces
/// no sections at all.
pub(crate) fn split_sections(source: &str) -> Vec<Section<'_>> {
    let mut starts: Vec<usize> = header_start_re()
        .find_iter(source)
        .map(|m| m.start())
        .collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    let mut sections = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(source.len());
        let slice = &source[start..end];
        if slice.trim().is_empty() {
            continue;
        }
        sections.push(classify(slice));
    }
    sections
}

/// Inspect a section's first line and split off its body.
///
/// A first line that opened a split point but does not form a complete
/// header (e.g. a bare `##` with nothing after it) falls back to level 0,
/// leaving the whole slice as body.
fn classify(slice: &str) -> Section<'_> {
    let (first_line, rest) = match slice.split_once('\n') {
        Some((line, rest)) => (line, rest),
        None => (slice, ""),
    };

    match header_line_re().captures(first_line) {
        Some(caps) => Section {
            level: caps.get(1).map_or(0, |m| m.as_str().len()) as u8,
            heading: caps.get(2).map_or("", |m| m.as_str()).trim(),
            body: rest,
        },
        None => Section {
            level: 0,
            heading: "",
            body: slice,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_at_every_header_level() {
        let sections = split_sections("# One\na\n## Two\nb\n### Three\nc");
        assert_eq!(
            sections,
            vec![
                Section {
                    level: 1,
                    heading: "One",
                    body: "a\n",
                },
                Section {
                    level: 2,
                    heading: "Two",
                    body: "b\n",
                },
                Section {
                    level: 3,
                    heading: "Three",
                    body: "c",
                },
            ]
        );
    }

    #[test]
    fn leading_text_becomes_a_level_0_section() {
        let sections = split_sections("intro line\n## Next\nbody");
        assert_eq!(sections[0].level, 0);
        assert_eq!(sections[0].body, "intro line\n");
    }

    #[test]
    fn headerless_source_is_one_section_with_full_body() {
        let sections = split_sections("first line\nsecond line");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "first line\nsecond line");
    }

    #[test]
    fn heading_text_is_trimmed() {
        let sections = split_sections("##   Spaced Out   \nbody");
        assert_eq!(sections[0].heading, "Spaced Out");
    }

    #[test]
    fn whitespace_only_slices_are_dropped() {
        assert_eq!(split_sections(""), vec![]);
        assert_eq!(split_sections("  \n \t\n"), vec![]);
    }

    #[test]
    fn header_markers_mid_line_do_not_split() {
        let sections = split_sections("a line with ## inside");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].level, 0);
    }
}
