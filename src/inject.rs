// src/inject.rs
//
// Back-to-index link for pages that were generated without one. A marker
// comment makes the pass idempotent.

use std::path::Path;

use crate::config::consts::{INDEX_FILE, NAV_MARKER};
use crate::config::options::NavOptions;
use crate::core::html::insert_after_body_open;
use crate::error::Result;
use crate::file::{list_day_pages, read_text_lossy, write_text};

pub fn nav_snippet(nav: &NavOptions) -> String {
    format!(
        "\n{NAV_MARKER}\n<a href=\"{INDEX_FILE}\" style=\"{}\">← {}</a>\n",
        nav.style, nav.label
    )
}

/// `Some(patched)` when the page has a body tag and no marker yet.
pub fn inject_nav(doc: &str, nav: &NavOptions) -> Option<String> {
    if doc.contains(NAV_MARKER) {
        return None;
    }
    insert_after_body_open(doc, &nav_snippet(nav))
}

/// Patch every day page in `dir`. Returns how many files changed.
pub fn patch_folder(dir: &Path, nav: &NavOptions) -> Result<usize> {
    let mut count = 0;
    for path in list_day_pages(dir)? {
        let text = read_text_lossy(&path)?;
        match inject_nav(&text, nav) {
            Some(patched) => {
                write_text(&path, &patched)?;
                logd!(path = %path.display(), "injected nav");
                count += 1;
            }
            None => logd!(path = %path.display(), "nav already present or no body"),
        }
    }
    Ok(count)
}
