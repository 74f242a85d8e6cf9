//! Default escaping for attribute values and link targets.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

/// URL schemes allowed in emitted `href` values.
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "ircs", "gopher", "nntp", "feed",
    "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// A complete character reference at the start of the input.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static ENTITY_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{0,31});")
        .expect("valid regex literal")
});

/// Characters that never belong in a URL attribute.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static URL_STRIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9\-~+_.?#=!&;,/:%@$|*'()\[\]\x{80}-\x{10FFFF}]")
        .expect("valid regex literal")
});

/// Escape a value for use inside a double-quoted attribute.
///
/// Existing character references are left alone so titles stored with
/// `&amp;` do not come out as `&amp;amp;`.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (i, ch) in value.char_indices() {
        match ch {
            '&' if ENTITY_REF.is_match(&value[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Clean a link target for use in an `href` attribute.
///
/// Returns an empty string when nothing usable is left or the scheme is not
/// in [`ALLOWED_PROTOCOLS`]. Relative URLs pass through.
pub fn escape_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let spaced = trimmed.replace(' ', "%20");
    let cleaned = URL_STRIP.replace_all(&spaced, "");
    if cleaned.is_empty() {
        return String::new();
    }

    if !has_allowed_protocol(&cleaned) {
        debug!(url = %cleaned, "dropping url with disallowed protocol");
        return String::new();
    }

    cleaned
        .replace("&amp;", "&")
        .replace('&', "&#038;")
        .replace('\'', "&#039;")
}

fn has_allowed_protocol(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => ALLOWED_PROTOCOLS.contains(&parsed.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
