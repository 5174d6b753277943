//! # wikitext-common
//!
//! Low-level pieces shared by the wikitext parser and the template expander.
//!
//! ## What lives here
//!
//! - [`magic`]: the reserved private-use codepoints. A handful are named and
//!   each has one fixed job (a consumed `<nowiki />`, an escaped `'`, escaped
//!   `[` and `]`). The rest form the general placeholder range that the
//!   expander mints from, plus a compiled matcher for finding them again.
//! - [`nowiki`]: escaping of literal text inside `<nowiki>` so later passes
//!   cannot mistake it for markup.
//! - [`url`]: the ordered list of prefixes that start an external link.
//! - [`expansion`]: the automatic newline put in front of expanded text that
//!   begins with list, heading or table syntax.
//! - [`placeholder`]: a table that mints placeholder codepoints for fragments
//!   set aside during expansion and swaps them back afterwards.
//!
//! ## Round trip
//!
//! ```
//! use wikitext_common::{PlaceholderTable, contains_magic, escape_nowiki_text};
//!
//! let mut table = PlaceholderTable::new();
//! let marker = table.insert("{{lang|fr|oui}}").unwrap();
//! let text = format!("Say {marker} and <nowiki>''{}''</nowiki>", escape_nowiki_text("[[no]]"));
//! assert!(contains_magic(&text));
//!
//! let restored = table.substitute(&text, |call| call.to_uppercase()).unwrap();
//! assert_eq!(
//!     restored,
//!     "Say {{LANG|FR|OUI}} and <nowiki>''&lsqb;&lsqb;no&rsqb;&rsqb;''</nowiki>"
//! );
//! assert!(!contains_magic(&restored));
//! ```
//!
//! ## Contract with callers
//!
//! Page text handed to the pipeline must not contain any codepoint in
//! `MAGIC_NUMBER..=MAGIC_LAST`. Nothing here checks that; [`is_reserved`]
//! and [`RESERVED_RE`] exist for callers that want to.
//!
//! All tables are immutable statics and every function is pure, so any of it
//! can be used from any number of threads at once.

pub mod expansion;
pub mod magic;
pub mod nowiki;
pub mod placeholder;
pub mod url;

pub use expansion::{BLOCK_START_MARKERS, Expansion, add_newline_to_expansion, starts_block};
pub use magic::*;
pub use nowiki::{NOWIKI_MAP, escape_nowiki_text, nowiki_entity, nowiki_quote};
pub use placeholder::{PlaceholderError, PlaceholderTable};
pub use url::{PROTOCOL_RELATIVE, URL_STARTS, is_url_start, url_start};
