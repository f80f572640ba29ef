// src/dashboard.rs
//
// Progress model behind the index page. The page script keeps the same
// shape: an explicit view state handed to `render`, completion loaded from
// an injected store. The Rust side computes the values the page starts with.

use std::collections::BTreeSet;

use crate::config::consts::DAYS_PER_WEEK;
use crate::day::DaySummary;

/// 1-based week a day falls in.
pub fn week_of(day: u32) -> u32 {
    day.div_ceil(DAYS_PER_WEEK)
}

pub fn week_count(total_days: u32) -> u32 {
    total_days.div_ceil(DAYS_PER_WEEK)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub completed: u32,
    pub remaining: u32,
    pub percentage: u32,
    pub current_week: u32,
}

impl Stats {
    pub fn compute(completed: &BTreeSet<u32>, total_days: u32) -> Self {
        let done = (completed.len() as u32).min(total_days);
        let percentage = if total_days == 0 {
            0
        } else {
            ((done as f64 / total_days as f64) * 100.0).round() as u32
        };
        Self {
            completed: done,
            remaining: total_days - done,
            percentage,
            current_week: week_of(done + 1),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    Done,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub completed: BTreeSet<u32>,
    pub status: StatusFilter,
    pub week: Option<u32>,
    pub query: String,
}

impl ViewState {
    /// Card filter: completion status, week, then case-insensitive title match.
    pub fn shows(&self, day: &DaySummary) -> bool {
        let done = self.completed.contains(&day.day);
        match self.status {
            StatusFilter::Done if !done => return false,
            StatusFilter::Todo if done => return false,
            _ => {}
        }
        if let Some(week) = self.week {
            if week_of(day.day) != week {
                return false;
            }
        }
        if !self.query.is_empty() {
            return day.title.to_lowercase().contains(&self.query.to_lowercase());
        }
        true
    }

    pub fn visible<'a>(&self, days: &'a [DaySummary]) -> Vec<&'a DaySummary> {
        days.iter().filter(|d| self.shows(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(day: u32, title: &str) -> DaySummary {
        DaySummary {
            day,
            title: s!(title),
            date: s!(),
            checklist_count: 0,
            status: s!("Not Started"),
        }
    }

    #[test]
    fn fresh_start_stats() {
        let s = Stats::compute(&BTreeSet::new(), 84);
        assert_eq!(s, Stats { completed: 0, remaining: 84, percentage: 0, current_week: 1 });
    }

    #[test]
    fn stats_round_and_advance_week() {
        let done: BTreeSet<u32> = (1..=7).collect();
        let s = Stats::compute(&done, 84);
        assert_eq!(s.percentage, 8); // 8.33
        assert_eq!(s.current_week, 2);
        assert_eq!(s.remaining, 77);
    }

    #[test]
    fn weeks() {
        assert_eq!(week_of(1), 1);
        assert_eq!(week_of(7), 1);
        assert_eq!(week_of(8), 2);
        assert_eq!(week_count(84), 12);
        assert_eq!(week_count(85), 13);
    }

    #[test]
    fn filters_combine() {
        let days = vec![summary(1, "Intro to TSX"), summary(2, "Hooks"), summary(9, "Query basics")];
        let mut view = ViewState::default();
        assert_eq!(view.visible(&days).len(), 3);

        view.completed.insert(2);
        view.status = StatusFilter::Done;
        assert_eq!(view.visible(&days), vec![&days[1]]);

        view.status = StatusFilter::Todo;
        view.week = Some(2);
        assert_eq!(view.visible(&days), vec![&days[2]]);

        view.week = None;
        view.query = s!("tsx");
        assert_eq!(view.visible(&days), vec![&days[0]]);
    }
}
