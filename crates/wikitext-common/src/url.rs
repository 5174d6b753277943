/// Prefixes that make a token a candidate for an external link or autolink.
///
/// Order is kept as-is for consumers that iterate it. Entries overlap on
/// purpose; nothing here is deduplicated against a shorter prefix.
pub const URL_STARTS: &[&str] = &[
    "http://",
    "https://",
    "ssh://",
    "gopher://",
    "irc://",
    "ircs://",
    "ftp://",
    "ftps://",
    "sftp://",
    "news://",
    "nntp://",
    "worldwind://",
    "telnet://",
    "svn://",
    "git://",
    "mms://",
    "mailto:",
    // Internal only. Wikitext `//host/path` means "same scheme as this page";
    // the parser resolves it later against page context. Accepting it here
    // keeps URLs re-emitted by an earlier expansion from being rejected.
    PROTOCOL_RELATIVE,
];

pub const PROTOCOL_RELATIVE: &str = "//";

/// Returns the first entry of [`URL_STARTS`] that `text` starts with.
pub fn url_start(text: &str) -> Option<&'static str> {
    URL_STARTS
        .iter()
        .copied()
        .find(|prefix| text.starts_with(prefix))
}

pub fn is_url_start(text: &str) -> bool {
    url_start(text).is_some()
}
