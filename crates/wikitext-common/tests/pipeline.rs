//! Exercises the primitives the way the parser and expander combine them.

use pretty_assertions::assert_eq;
use wikitext_common::{
    Expansion, MAGIC_LBRACKET_CHAR, MAGIC_NOWIKI_CHAR, MAGIC_RBRACKET_CHAR, Magic,
    PlaceholderTable, add_newline_to_expansion, contains_magic, escape_nowiki_text, magic_chars,
    url_start,
};

/// Expansions set aside by the expander, resolved after the page is parsed.
#[derive(Debug)]
enum Fragment {
    Template(&'static str),
    Number(i64),
}

fn expand(fragment: &Fragment) -> Expansion<i64> {
    match fragment {
        Fragment::Template("list") => Expansion::Text("* one\n* two".to_string()),
        Fragment::Template(name) => Expansion::Text(format!("[{name}]")),
        Fragment::Number(n) => Expansion::Other(*n),
    }
}

fn render(fragment: &Fragment) -> String {
    match expand(fragment).normalize_newline() {
        Expansion::Text(text) => text,
        Expansion::Other(n) => n.to_string(),
    }
}

#[test]
fn placeholders_are_substituted_with_normalized_expansions() {
    let mut table = PlaceholderTable::new();
    let list = table.insert(Fragment::Template("list")).unwrap();
    let name = table.insert(Fragment::Template("x")).unwrap();
    let count = table.insert(Fragment::Number(3)).unwrap();

    let page = format!("Items:{list}\nSee {name} ({count})");
    assert_eq!(magic_chars(&page).collect::<Vec<_>>(), vec![list, name, count]);

    let out = table.substitute(&page, render).unwrap();
    assert_eq!(out, "Items:\n* one\n* two\nSee [x] (3)");
    assert!(!contains_magic(&out));
}

#[test]
fn named_codepoints_survive_substitution_and_classify() {
    let mut table = PlaceholderTable::new();
    let t = table.insert("t").unwrap();
    let page = format!("{MAGIC_LBRACKET_CHAR}{t}{MAGIC_RBRACKET_CHAR}{MAGIC_NOWIKI_CHAR}");

    let out = table.substitute(&page, |v| *v).unwrap();
    let roles: Vec<_> = out.chars().map(Magic::classify).collect();
    assert_eq!(
        roles,
        vec![
            Some(Magic::LeftBracket),
            None,
            Some(Magic::RightBracket),
            Some(Magic::Nowiki),
        ]
    );
}

#[test]
fn escaped_nowiki_text_hides_markup_from_later_scans() {
    let escaped = escape_nowiki_text("{{tmpl}} [https://example.org x] * item");

    assert!(!escaped.contains("{{"));
    assert!(!escaped.contains('['));
    assert_eq!(add_newline_to_expansion(escaped.clone()), escaped);
    // the escaped colon keeps the link scanner from seeing a URL
    let url = escaped.split("&lsqb;").nth(1).unwrap();
    assert!(url.starts_with("https&colon;//"));
    assert_eq!(url_start(url), None);
    assert_eq!(url_start("https://example.org"), Some("https://"));
}
