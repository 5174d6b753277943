//! Escaping for text inside `<nowiki>...</nowiki>`.
//!
//! Every character that could start live markup is swapped for a named
//! character reference. The substitution is done in one forward pass and the
//! replacement text is never rescanned, so nothing is escaped twice.

/// Character references used inside nowiki regions, in table order.
///
/// `&` and `;` are deliberately absent: the references themselves are built
/// from them and must survive later passes untouched.
pub const NOWIKI_MAP: &[(char, &str)] = &[
    ('=', "&equals;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('*', "&ast;"),
    ('#', "&num;"),
    (':', "&colon;"),
    ('!', "&excl;"),
    ('|', "&vert;"),
    ('[', "&lsqb;"),
    (']', "&rsqb;"),
    ('{', "&lbrace;"),
    ('}', "&rbrace;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
    // `__TOC__` and friends
    ('_', "&lowbar;"),
];

/// Looks up the reference for `c`, if it is one of the escaped characters.
#[inline]
pub fn nowiki_entity(c: char) -> Option<&'static str> {
    let entity = match c {
        '=' => "&equals;",
        '<' => "&lt;",
        '>' => "&gt;",
        '*' => "&ast;",
        '#' => "&num;",
        ':' => "&colon;",
        '!' => "&excl;",
        '|' => "&vert;",
        '[' => "&lsqb;",
        ']' => "&rsqb;",
        '{' => "&lbrace;",
        '}' => "&rbrace;",
        '"' => "&quot;",
        '\'' => "&apos;",
        '_' => "&lowbar;",
        _ => return None,
    };
    Some(entity)
}

/// Escapes `text` so no later parsing pass reads it as markup.
///
/// Characters outside [`NOWIKI_MAP`] (all non-ASCII included) are copied
/// through unchanged.
pub fn escape_nowiki_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match nowiki_entity(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Alias of [`escape_nowiki_text`].
pub fn nowiki_quote(text: &str) -> String {
    escape_nowiki_text(text)
}
