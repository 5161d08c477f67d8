use serde::Serialize;

/// One renderable unit of article content.
///
/// The presentation layer maps each variant to a visual element; the
/// engine never holds onto blocks between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Section heading. Only levels 2 and 3 appear in rendered output;
    /// level-1 headings are suppressed because the page layer displays
    /// the article title itself.
    Heading { level: u8, text: String },
    /// Plain paragraph text. Internal newlines are preserved as-is.
    Paragraph { text: String },
    /// Numbered list, items in source line order with markers stripped.
    OrderedList { items: Vec<String> },
    /// Bulleted list, items in source line order with markers stripped.
    UnorderedList { items: Vec<String> },
}
