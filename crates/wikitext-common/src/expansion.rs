//! Automatic newline before expanded text.
//!
//! Lists, definition lists, `#` items and tables only take effect at the start
//! of a line. When a template or parser function expands to text beginning
//! with one of those markers, a newline is put in front of it so the marker
//! does not end up glued to whatever precedes the call site.
//! See <https://meta.wikimedia.org/wiki/Help:Newlines_and_spaces#Automatic_newline>.

/// Leading sequences that only mean something at the start of a line.
pub const BLOCK_START_MARKERS: [&str; 5] = ["*", ";", ":", "#", "{|"];

/// Returns true if `text` begins with a block-start marker.
pub fn starts_block(text: &str) -> bool {
    BLOCK_START_MARKERS
        .iter()
        .any(|marker| text.starts_with(marker))
}

/// Prepends a single `\n` when `text` starts with a block-start marker.
///
/// Running this twice does not add a second newline, but only because the
/// result starts with `\n` rather than the marker.
pub fn add_newline_to_expansion(text: String) -> String {
    if starts_block(&text) {
        let mut out = String::with_capacity(text.len() + 1);
        out.push('\n');
        out.push_str(&text);
        out
    } else {
        text
    }
}

/// Result of expanding one fragment: text, or a value the expander passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion<T> {
    Text(String),
    Other(T),
}

impl<T> Expansion<T> {
    /// Applies [`add_newline_to_expansion`] to text; other values pass through.
    pub fn normalize_newline(self) -> Self {
        match self {
            Self::Text(text) => Self::Text(add_newline_to_expansion(text)),
            other @ Self::Other(_) => other,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other(_) => None,
        }
    }
}

impl<T> From<String> for Expansion<T> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("* item", "\n* item")]
    #[case("# numbered", "\n# numbered")]
    #[case("; term", "\n; term")]
    #[case(": indent", "\n: indent")]
    #[case("{| class=x", "\n{| class=x")]
    #[case("plain text", "plain text")]
    #[case("{{not a table}}", "{{not a table}}")]
    #[case(" * indented", " * indented")]
    #[case("", "")]
    #[case("\n* already", "\n* already")]
    fn prepends_newline_for_block_markers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(add_newline_to_expansion(input.to_string()), expected);
    }

    #[test]
    fn second_application_adds_nothing() {
        let once = add_newline_to_expansion("* x".to_string());
        let twice = add_newline_to_expansion(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn other_values_pass_through() {
        let value: Expansion<i64> = Expansion::Other(42);
        assert_eq!(value.normalize_newline(), Expansion::Other(42));
    }

    #[test]
    fn text_values_are_normalized() {
        let value: Expansion<i64> = Expansion::from("{| x".to_string());
        let normalized = value.normalize_newline();
        assert_eq!(normalized.as_text(), Some("\n{| x"));
    }
}
