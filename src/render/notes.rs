// src/render/notes.rs
use crate::config::consts::NOTE_ROUTINE_LABEL;
use crate::core::sanitize::sanitize_note_title;
use crate::day::Day;

/// `Day 07 — Hooks.md`. Uses the plain title column, not the Velog one.
pub fn note_file_name(day: &Day) -> String {
    let title = match &day.title {
        Some(t) => sanitize_note_title(t),
        None => format!("Day {}", day.number),
    };
    format!("Day {:02} — {}.md", day.number, title)
}

/// Markdown note: heading, a quote block with date, routine and Notion link,
/// then the body.
pub fn render_note(day: &Day) -> String {
    format!(
        "# {}\n\n> 날짜: **{}**  \n> 루틴: {}  \n> 노션: {}\n\n---\n\n{}\n",
        day.page_title(),
        day.date,
        NOTE_ROUTINE_LABEL,
        day.notion_link,
        day.body.trim_end(),
    )
}
