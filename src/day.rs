// src/day.rs
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::*;
use crate::csv::Record;

static DAY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Day ([0-9]+)$").unwrap());

static UNCHECKED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[ \]").unwrap());

/// `Day 7`, `Day 07`: yes. `Day seven`, `Intro`, ` Day 7`: no.
pub fn is_day_name(name: &str) -> bool {
    DAY_NAME.is_match(name)
}

pub fn day_number(name: &str) -> Option<u32> {
    DAY_NAME.captures(name)?.get(1)?.as_str().parse().ok()
}

/// Typed view over one retained record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Day {
    pub number: u32,
    pub velog_title: Option<String>,
    pub title: Option<String>,
    pub date: String,
    pub body: String,
    pub status: String,
    pub checklist_count: usize,
    pub notion_link: String,
}

impl Day {
    /// `None` when the name column is missing or the number does not fit.
    pub fn from_record(record: &Record) -> Option<Self> {
        let number = day_number(record.get(COL_NAME)?)?;
        let owned = |key: &str| record.non_empty(key).map(str::to_string);

        Some(Self {
            number,
            velog_title: owned(COL_VELOG_TITLE),
            title: owned(COL_TITLE),
            date: owned(COL_DATE).unwrap_or_default(),
            body: owned(COL_BODY).unwrap_or_default(),
            status: owned(COL_STATUS).unwrap_or_else(|| s!(DEFAULT_STATUS)),
            checklist_count: record
                .get(COL_CHECKLIST)
                .map_or(0, |c| UNCHECKED_ITEM.find_iter(c).count()),
            notion_link: owned(COL_NOTION_LINK).unwrap_or_default(),
        })
    }

    /// Heading for the day's own page; falls back to `Day N`.
    pub fn page_title(&self) -> String {
        self.velog_title
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| format!("Day {}", self.number))
    }

    /// Title shown on index cards; empty when neither title column is set.
    pub fn card_title(&self) -> &str {
        self.velog_title
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }

    pub fn file_name(&self) -> String {
        page_file_name(self.number)
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            day: self.number,
            title: s!(self.card_title()),
            date: self.date.clone(),
            checklist_count: self.checklist_count,
            status: self.status.clone(),
        }
    }
}

/// `day-07.html`. Numbers past 99 simply grow wider.
pub fn page_file_name(number: u32) -> String {
    format!("day-{number:02}.html")
}

/// Entry of the JSON array embedded in the index page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub day: u32,
    pub title: String,
    pub date: String,
    pub checklist_count: usize,
    pub status: String,
}

/// Map retained records to days, dropping any whose number overflows.
pub fn days_from_records(records: &[Record]) -> Vec<Day> {
    records
        .iter()
        .filter_map(|r| {
            let day = Day::from_record(r);
            if day.is_none() {
                logw!(name = r.get(COL_NAME).unwrap_or(""), "skipping record without a usable day number");
            }
            day
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::{ParseOptions, parse_records};

    fn days(text: &str) -> Vec<Day> {
        days_from_records(&parse_records(text, ParseOptions::default()).unwrap())
    }

    #[test]
    fn day_names() {
        assert!(is_day_name("Day 7"));
        assert!(is_day_name("Day 07"));
        assert!(is_day_name("Day 123"));
        assert!(!is_day_name("Day seven"));
        assert!(!is_day_name("Intro"));
        assert!(!is_day_name("Day 7 "));
        assert!(!is_day_name("Day"));
        assert_eq!(day_number("Day 07"), Some(7));
    }

    #[test]
    fn titles_fall_back_in_order() {
        let d = days("이름,VelogTitle,Title\nDay 1,Velog,Plain\nDay 2,,Plain\nDay 3,,\n");
        assert_eq!(d[0].page_title(), "Velog");
        assert_eq!(d[1].page_title(), "Plain");
        assert_eq!(d[2].page_title(), "Day 3");
        assert_eq!(d[2].card_title(), "");
    }

    #[test]
    fn checklist_counts_unchecked_boxes_only() {
        let d = days("이름,Checklist\nDay 1,\"[ ] a\n[x] b\n[ ] c\"\n");
        assert_eq!(d[0].checklist_count, 2);
    }

    #[test]
    fn status_defaults_to_not_started() {
        let d = days("이름,Status\nDay 1,\nDay 2,Done\n");
        assert_eq!(d[0].status, "Not Started");
        assert_eq!(d[1].status, "Done");
    }

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(page_file_name(7), "day-07.html");
        assert_eq!(page_file_name(84), "day-84.html");
        assert_eq!(page_file_name(100), "day-100.html");
    }

    #[test]
    fn overflowing_numbers_are_dropped() {
        let d = days("이름\nDay 99999999999\nDay 2\n");
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].number, 2);
    }

    #[test]
    fn summary_uses_camel_case_keys() {
        let d = days("이름,Title,Date,Checklist\nDay 4,Hooks,2024-01-04,[ ]\n");
        let json = serde_json::to_string(&d[0].summary()).unwrap();
        assert_eq!(
            json,
            r#"{"day":4,"title":"Hooks","date":"2024-01-04","checklistCount":1,"status":"Not Started"}"#
        );
    }
}
