// src/render/index.rs
use std::collections::BTreeSet;

use maud::{DOCTYPE, PreEscaped, html};

use crate::config::consts::{PROGRESS_STORAGE_KEY, ROUTINE_NAME};
use crate::core::html::script_json;
use crate::dashboard::{Stats, week_count};
use crate::day::{Day, DaySummary};
use crate::error::Result;

const CSS: &str = include_str!("assets/index.css");
const SCRIPT: &str = include_str!("assets/index.js");

/// Dashboard page. Cards, filters and progress live in the page script;
/// the markup carries the data and the starting numbers.
pub fn render_index(days: &[Day], total_days: u32) -> Result<String> {
    let summaries: Vec<DaySummary> = days.iter().map(Day::summary).collect();
    let data = script_json(&summaries, true)?;
    let stats = Stats::compute(&BTreeSet::new(), total_days);

    let page = html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ROUTINE_NAME) }
                meta name="description" content={ (ROUTINE_NAME) " - 기초부터 실전까지" };
                style { (PreEscaped(CSS)) }
            }
            body {
                div.container id="dashboard" data-total-days=(total_days) data-storage-key=(PROGRESS_STORAGE_KEY) {
                    div.header {
                        h1 { "🚀 " (ROUTINE_NAME) }
                        p { "기초부터 실전까지, 체계적인 학습 여정" }
                    }

                    div.progress-section {
                        div.progress-title { span { "📊 전체 진행률" } }
                        div.progress-bar-container {
                            div.progress-bar id="progress-bar" style={ "width: " (stats.percentage) "%" } {
                                (stats.percentage) "%"
                            }
                        }
                        div.stats {
                            (stat_card("stat-completed", stats.completed.to_string(), "완료한 Day"))
                            (stat_card("stat-remaining", stats.remaining.to_string(), "남은 Day"))
                            (stat_card("stat-percentage", format!("{}%", stats.percentage), "진행률"))
                            (stat_card("stat-week", stats.current_week.to_string(), "현재 주차"))
                        }
                    }

                    div.controls {
                        input.search-box id="search-input" type="text" placeholder="🔍 제목으로 검색...";
                        div.filters {
                            div.filter-group {
                                button.filter-btn.active type="button" data-filter="all" { "전체" }
                                button.filter-btn type="button" data-filter="todo" { "미완료" }
                                button.filter-btn type="button" data-filter="done" { "완료" }
                            }
                            div.filter-group id="week-filters" {
                                button.filter-btn.active type="button" data-week="all" { "전체 주차" }
                                @for week in 1..=week_count(total_days) {
                                    button.filter-btn type="button" data-week=(week) { "Week " (week) }
                                }
                            }
                        }
                    }

                    div.cards-grid id="cards-grid" {}
                    div.no-results id="no-results" style="display: none;" { "검색 결과가 없습니다 😢" }
                }

                script id="days-data" type="application/json" { (PreEscaped(data)) }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    };

    Ok(page.into_string())
}

fn stat_card(id: &str, value: String, label: &str) -> maud::Markup {
    html! {
        div.stat-card {
            div.stat-number id=(id) { (value) }
            div.stat-label { (label) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::{ParseOptions, parse_records};
    use crate::day::days_from_records;

    fn days(text: &str) -> Vec<Day> {
        days_from_records(&parse_records(text, ParseOptions::default()).unwrap())
    }

    fn embedded_json(html: &str) -> serde_json::Value {
        let start = html.find(r#"<script id="days-data" type="application/json">"#).unwrap();
        let rest = &html[start..];
        let json = &rest[rest.find('>').unwrap() + 1..rest.find("</script>").unwrap()];
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn embeds_one_summary_per_day() {
        let d = days("이름,Title,Date,Checklist,Status\nDay 1,Setup,2024-01-01,\"[ ] a\n[ ] b\",Done\nDay 2,</script>,,,\n");
        let html = render_index(&d, 84).unwrap();
        let data = embedded_json(&html);
        assert_eq!(data.as_array().unwrap().len(), 2);
        assert_eq!(data[0]["day"], 1);
        assert_eq!(data[0]["checklistCount"], 2);
        assert_eq!(data[0]["status"], "Done");
        assert_eq!(data[1]["title"], "</script>");
        assert_eq!(data[1]["status"], "Not Started");
    }

    #[test]
    fn initial_stats_and_week_filters() {
        let html = render_index(&[], 84).unwrap();
        assert!(html.contains(r#"<div class="stat-number" id="stat-remaining">84</div>"#));
        assert!(html.contains(r#"<div class="stat-number" id="stat-week">1</div>"#));
        assert!(html.contains(r#"data-week="12""#));
        assert!(!html.contains(r#"data-week="13""#));
        assert!(html.contains(r#"data-storage-key="completed-days""#));
    }
}
