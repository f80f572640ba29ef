// src/core/html.rs
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;

static BODY_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<body[^>]*>").unwrap());
static HEAD_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<head[^>]*>").unwrap());
static ROBOTS_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+name=["']robots["']\s+content=["'][^"']*["']\s*/?>"#).unwrap()
});

pub const NOINDEX_META: &str = r#"<meta name="robots" content="noindex, nofollow"/>"#;

/// Byte offset just past the first `<body ...>` tag, any case.
pub fn body_open_end(doc: &str) -> Option<usize> {
    BODY_OPEN.find(doc).map(|m| m.end())
}

/// Insert `fragment` right after the first `<body ...>`. `None` if there is no body tag.
pub fn insert_after_body_open(doc: &str, fragment: &str) -> Option<String> {
    let at = body_open_end(doc)?;
    let mut out = String::with_capacity(doc.len() + fragment.len());
    out.push_str(&doc[..at]);
    out.push_str(fragment);
    out.push_str(&doc[at..]);
    Some(out)
}

/// Keep a page out of search engines: rewrite an existing robots meta, or add
/// one after `<head>`. Documents without either come back unchanged.
pub fn with_noindex(doc: &str) -> String {
    if ROBOTS_META.is_match(doc) {
        return ROBOTS_META.replace_all(doc, NOINDEX_META).into_owned();
    }
    match HEAD_OPEN.find(doc) {
        Some(m) => join!(&doc[..m.end()], "\n  ", NOINDEX_META, &doc[m.end()..]),
        None => s!(doc),
    }
}

/// Serialize for embedding inside a `<script>` element. `</` and `<!--` only
/// occur inside JSON strings, where the escaped forms decode to the same text.
pub fn script_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json.replace("</", "<\\/").replace("<!--", "<\\u0021--"))
}
