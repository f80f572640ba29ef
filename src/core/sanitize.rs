// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static DASHED_CHECKBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- \[([ xX])\]").unwrap());

/// `- [ ] task` → `[ ] task` at line starts, so the preview shows bare boxes.
pub fn normalize_checklist(markdown: &str) -> String {
    DASHED_CHECKBOX.replace_all(markdown, "[$1]").into_owned()
}

/// Make a title safe to use inside a file name. Only path separators are
/// touched; the full-width slash keeps the title readable.
pub fn sanitize_note_title(title: &str) -> String {
    let out: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' => '／',
            '\\' => '＼',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect();
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_before_checkboxes_are_dropped() {
        let md = "- [ ] one\n- [x] two\n- [X] three\n- plain\n  - [ ] nested";
        assert_eq!(normalize_checklist(md), "[ ] one\n[x] two\n[X] three\n- plain\n  - [ ] nested");
    }

    #[test]
    fn note_titles_lose_separators() {
        assert_eq!(sanitize_note_title(" a/b\\c "), "a／b＼c");
        assert_eq!(sanitize_note_title("tab\there"), "tab here");
    }
}
