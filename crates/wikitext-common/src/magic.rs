//! # Magic codepoints
//!
//! A block of codepoints at the top of supplementary private-use plane B
//! (U+100000..U+10FFFD) is reserved for marking text that has been taken out
//! of the stream while the surrounding markup is parsed. The pipeline assumes
//! these characters never occur on real wiki pages, so any occurrence seen
//! in a later pass is a marker and never literal content.
//!
//! ```text
//! MAGIC_NUMBER                                                   MAGIC_LAST
//! │ NOWIKI │ SINGLE_QUOTE │ LEFT_SBRACKET │ RIGHT_SBRACKET │ FIRST ..... │
//! └──────────────── named, one role each ────────────────┘└─ general ──┘
//! ```
//!
//! Named codepoints are handed out one after the other from `MAGIC_NUMBER`.
//! The general range starts right after the last named one and ends at a
//! fixed upper bound. Adding a new named codepoint means inserting it before
//! [`MAGIC_FIRST`] and bumping `MAGIC_FIRST` to follow it.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Base of the reserved interval. Every value in `[MAGIC_NUMBER, MAGIC_LAST]`
/// is off-limits for page text.
pub const MAGIC_NUMBER: u32 = 0x0010_203D;

/// Marks a consumed `<nowiki />` directive.
pub const MAGIC_NOWIKI: u32 = MAGIC_NUMBER;
pub const MAGIC_NOWIKI_CHAR: char = magic_char(MAGIC_NOWIKI);
pub const MAGIC_NOWIKI_STR: &str = "\u{10203D}";

/// Stands in for `'` inside double-quoted HTML attribute values, where a
/// literal quote would otherwise be read as bold/italic markup.
pub const MAGIC_SINGLE_QUOTE: u32 = MAGIC_NOWIKI + 1;
pub const MAGIC_SQUOTE_CHAR: char = magic_char(MAGIC_SINGLE_QUOTE);
pub const MAGIC_SQUOTE_STR: &str = "\u{10203E}";

/// Stands in for a `[` that must not open an external link.
pub const MAGIC_LEFT_SBRACKET: u32 = MAGIC_SINGLE_QUOTE + 1;
pub const MAGIC_LBRACKET_CHAR: char = magic_char(MAGIC_LEFT_SBRACKET);
pub const MAGIC_LBRACKET_STR: &str = "\u{10203F}";

/// Stands in for a `]` that must not close an external link.
pub const MAGIC_RIGHT_SBRACKET: u32 = MAGIC_LEFT_SBRACKET + 1;
pub const MAGIC_RBRACKET_CHAR: char = magic_char(MAGIC_RIGHT_SBRACKET);
pub const MAGIC_RBRACKET_STR: &str = "\u{102040}";

/// First codepoint of the general placeholder range.
pub const MAGIC_FIRST: u32 = MAGIC_RIGHT_SBRACKET + 1;

/// Last codepoint of the general placeholder range (inclusive).
pub const MAGIC_LAST: u32 = 0x0010_FFF0;

/// Number of placeholders that can be in flight at once.
pub const MAX_MAGICS: u32 = MAGIC_LAST - MAGIC_FIRST + 1;

pub const MAGIC_FIRST_CHAR: char = magic_char(MAGIC_FIRST);
pub const MAGIC_LAST_CHAR: char = magic_char(MAGIC_LAST);

const PRIVATE_USE_PLANE_B: (u32, u32) = (0x0010_0000, 0x0010_FFFD);

const _: () = assert!(MAGIC_NUMBER >= PRIVATE_USE_PLANE_B.0);
const _: () = assert!(MAGIC_LAST <= PRIVATE_USE_PLANE_B.1);
const _: () = assert!(MAGIC_RIGHT_SBRACKET < MAGIC_FIRST);
const _: () = assert!(MAGIC_FIRST <= MAGIC_LAST);

const fn magic_char(cp: u32) -> char {
    match char::from_u32(cp) {
        Some(c) => c,
        None => panic!("magic codepoint is not a Unicode scalar value"),
    }
}

/// Matches any single codepoint of the general placeholder range.
pub static MAGIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{MAGIC_FIRST_CHAR}-{MAGIC_LAST_CHAR}]"))
        .expect("placeholder character class is a valid regex")
});

/// Matches any codepoint of the whole reserved interval, named ones included.
pub static RESERVED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{MAGIC_NOWIKI_CHAR}-{MAGIC_LAST_CHAR}]"))
        .expect("reserved character class is a valid regex")
});

/// Returns true if `c` lies in the general placeholder range.
pub fn is_magic(c: char) -> bool {
    (MAGIC_FIRST..=MAGIC_LAST).contains(&u32::from(c))
}

/// Returns true if `c` lies anywhere in the reserved interval.
pub fn is_reserved(c: char) -> bool {
    (MAGIC_NUMBER..=MAGIC_LAST).contains(&u32::from(c))
}

/// Returns true if `text` still holds an unresolved placeholder.
pub fn contains_magic(text: &str) -> bool {
    MAGIC_RE.is_match(text)
}

/// Yields every placeholder character of `text` in order of appearance.
pub fn magic_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    MAGIC_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().chars().next())
}

/// Codepoint for the `index`th slot of the general range.
pub fn placeholder_char(index: u32) -> Option<char> {
    if index >= MAX_MAGICS {
        return None;
    }
    char::from_u32(MAGIC_FIRST + index)
}

/// Inverse of [`placeholder_char`].
pub fn placeholder_index(c: char) -> Option<u32> {
    is_magic(c).then(|| u32::from(c) - MAGIC_FIRST)
}

/// The role a reserved codepoint plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magic {
    Nowiki,
    SingleQuote,
    LeftBracket,
    RightBracket,
    /// Slot index into the general range.
    Placeholder(u32),
}

impl Magic {
    pub fn classify(c: char) -> Option<Self> {
        match u32::from(c) {
            MAGIC_NOWIKI => Some(Self::Nowiki),
            MAGIC_SINGLE_QUOTE => Some(Self::SingleQuote),
            MAGIC_LEFT_SBRACKET => Some(Self::LeftBracket),
            MAGIC_RIGHT_SBRACKET => Some(Self::RightBracket),
            _ => placeholder_index(c).map(Self::Placeholder),
        }
    }

    /// Returns `None` only for a placeholder index outside the general range.
    pub fn to_char(self) -> Option<char> {
        match self {
            Self::Nowiki => Some(MAGIC_NOWIKI_CHAR),
            Self::SingleQuote => Some(MAGIC_SQUOTE_CHAR),
            Self::LeftBracket => Some(MAGIC_LBRACKET_CHAR),
            Self::RightBracket => Some(MAGIC_RBRACKET_CHAR),
            Self::Placeholder(index) => placeholder_char(index),
        }
    }
}

/// Serializable description of the reserved interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MagicLayout {
    pub base: u32,
    pub nowiki: u32,
    pub single_quote: u32,
    pub left_bracket: u32,
    pub right_bracket: u32,
    pub first: u32,
    pub last: u32,
    pub capacity: u32,
}

pub const LAYOUT: MagicLayout = MagicLayout {
    base: MAGIC_NUMBER,
    nowiki: MAGIC_NOWIKI,
    single_quote: MAGIC_SINGLE_QUOTE,
    left_bracket: MAGIC_LEFT_SBRACKET,
    right_bracket: MAGIC_RIGHT_SBRACKET,
    first: MAGIC_FIRST,
    last: MAGIC_LAST,
    capacity: MAX_MAGICS,
};

impl MagicLayout {
    /// Named codepoints in allocation order.
    pub fn named(&self) -> [u32; 4] {
        [
            self.nowiki,
            self.single_quote,
            self.left_bracket,
            self.right_bracket,
        ]
    }
}
