// src/render/page.rs
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::consts::{INDEX_FILE, MARKED_JS_URL, ROUTINE_NAME, VELOG_WRITE_URL};
use crate::core::html::script_json;
use crate::core::sanitize::normalize_checklist;
use crate::day::{Day, page_file_name};
use crate::error::Result;

const CSS: &str = include_str!("assets/day.css");
const SCRIPT: &str = include_str!("assets/day.js");

/// Full HTML document for one day: header with navigation, markdown source
/// on the left, browser-rendered preview on the right.
pub fn render_day_page(day: &Day, total_days: u32) -> Result<String> {
    let title = day.page_title();
    let description = format!("{title} | {ROUTINE_NAME} | 학습 기간 {}", day.date);
    // Shipped as a JSON string so the editor gets the exact text back.
    let source = script_json(&normalize_checklist(&day.body), false)?;

    let page = html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                script src=(MARKED_JS_URL) {}
                style { (PreEscaped(CSS)) }
            }
            body {
                div.header {
                    div.header-content {
                        a.back-button href=(INDEX_FILE) { "← 목록으로 돌아가기" }
                        h1 { (title) }
                        div.meta { "📅 학습 기간: " b { (day.date) } }
                        (nav_buttons(day.number, total_days))
                    }
                }
                div.split-container {
                    div.panel.panel-left {
                        div.panel-title { "📝 마크다운 소스" }
                        textarea id="markdown-editor" spellcheck="false" {}
                        button.copy-button id="copy-button" type="button" { "📋 소스 복사" }
                        button.velog-button id="velog-button" type="button" data-url=(VELOG_WRITE_URL) {
                            "✍️ Velog에 작성하기"
                        }
                    }
                    div.panel.panel-right {
                        div.panel-title { "👀 렌더링 미리보기" }
                        div id="content" {}
                    }
                }
                script id="markdown-source" type="application/json" { (PreEscaped(source)) }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    };

    Ok(page.into_string())
}

fn nav_buttons(number: u32, total_days: u32) -> Markup {
    let next = number.checked_add(1).filter(|_| number < total_days);
    html! {
        div.nav-buttons {
            a.nav-btn.disabled[number <= 1] href=(page_file_name(number.saturating_sub(1))) {
                span { "←" }
                span { "이전 Day" }
            }
            a.nav-btn.disabled[next.is_none()] href=(page_file_name(next.unwrap_or(number))) {
                span { "다음 Day" }
                span { "→" }
            }
            div.day-selector {
                label for="day-select" { "📅 이동:" }
                select id="day-select" onchange="location.href = this.value" {
                    @for d in 1..=total_days {
                        option value=(page_file_name(d)) selected[d == number] { "Day " (d) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::{ParseOptions, parse_records};
    use crate::day::days_from_records;

    fn day(text: &str) -> Day {
        let recs = parse_records(text, ParseOptions::default()).unwrap();
        days_from_records(&recs).remove(0)
    }

    #[test]
    fn title_and_date_are_escaped() {
        let d = day("이름,Title,Date\nDay 3,<b>Props & State</b>,2024\n");
        let html = render_day_page(&d, 84).unwrap();
        assert!(html.contains("<title>&lt;b&gt;Props &amp; State&lt;/b&gt;</title>"));
        assert!(!html.contains("<b>Props"));
    }

    #[test]
    fn body_is_embedded_as_json() {
        let d = day("이름,VelogBody\nDay 1,\"- [ ] read </script>\n<em>x</em> \"\"q\"\"\"\n");
        let html = render_day_page(&d, 84).unwrap();
        let start = html.find(r#"<script id="markdown-source" type="application/json">"#).unwrap();
        let rest = &html[start..];
        let json = &rest[rest.find('>').unwrap() + 1..rest.find("</script>").unwrap()];
        let back: String = serde_json::from_str(json).unwrap();
        assert_eq!(back, "[ ] read </script>\n<em>x</em> \"q\"");
    }

    #[test]
    fn first_and_last_days_disable_navigation() {
        let first = render_day_page(&day("이름\nDay 1\n"), 84).unwrap();
        assert!(first.contains(r#"class="nav-btn disabled" href="day-00.html""#));
        assert!(first.contains(r#"class="nav-btn" href="day-02.html""#));

        let last = render_day_page(&day("이름\nDay 84\n"), 84).unwrap();
        assert!(last.contains(r#"class="nav-btn" href="day-83.html""#));
        assert!(last.contains(r#"class="nav-btn disabled" href="day-84.html""#));
    }

    #[test]
    fn days_past_the_total_link_nowhere_forward() {
        let html = render_day_page(&day("이름\nDay 4294967295\n"), 84).unwrap();
        assert!(html.contains(r#"class="nav-btn disabled" href="day-4294967295.html""#));
        assert!(html.contains(r#"class="nav-btn" href="day-4294967294.html""#));
        assert_eq!(html.matches("<option ").count(), 84);
        assert!(!html.contains(" selected>"));

        let past = render_day_page(&day("이름\nDay 90\n"), 84).unwrap();
        assert!(past.contains(r#"class="nav-btn disabled" href="day-90.html""#));
    }

    #[test]
    fn selector_lists_every_day_and_marks_current() {
        let html = render_day_page(&day("이름\nDay 5\n"), 10).unwrap();
        assert_eq!(html.matches("<option ").count(), 10);
        assert!(html.contains(r#"<option value="day-05.html" selected>Day 5</option>"#));
    }
}
