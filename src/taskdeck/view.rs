//! # View Filter Engine
//!
//! Turns a full task list into the subset shown for a view mode and an optional
//! search query. Mode filtering runs first, search second.
//!
//! The engine is pure: the caller supplies "today", nothing is cached, and the
//! same inputs always give the same output. It never fails; an unrecognized mode
//! leaves the list unfiltered and is only logged.

use crate::model::Task;
use chrono::{Days, Months, NaiveDate};
use log::info;
use std::fmt;

/// Days after today covered by the week view (today plus seven more).
const WEEK_SPAN_DAYS: u64 = 7;

const KNOWN_MODES: &[ViewMode] = &[
    ViewMode::Overview,
    ViewMode::Upcoming,
    ViewMode::Day,
    ViewMode::Week,
    ViewMode::Month,
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Overview,
    Upcoming,
    Day,
    Week,
    Month,
    Unrecognized(String),
}

impl ViewMode {
    pub fn known() -> &'static [ViewMode] {
        KNOWN_MODES
    }

    /// Lenient parse: unknown names become [`ViewMode::Unrecognized`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "overview" | "all" => ViewMode::Overview,
            "upcoming" => ViewMode::Upcoming,
            "day" | "today" => ViewMode::Day,
            "week" => ViewMode::Week,
            "month" => ViewMode::Month,
            _ => ViewMode::Unrecognized(name.trim().to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ViewMode::Overview => "overview",
            ViewMode::Upcoming => "upcoming",
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Produces the tasks to display for `mode` and `query`, relative to `today`.
pub fn filter(
    tasks: &[Task],
    mode: &ViewMode,
    query: Option<&str>,
    today: NaiveDate,
) -> Vec<Task> {
    let mut shown: Vec<Task> = match mode {
        ViewMode::Overview => tasks.to_vec(),
        ViewMode::Upcoming => {
            let mut sorted = tasks.to_vec();
            sorted.sort_by_key(|t| t.end_time);
            sorted
        }
        ViewMode::Day => within(tasks, today, today),
        ViewMode::Week => {
            let end = today
                .checked_add_days(Days::new(WEEK_SPAN_DAYS))
                .unwrap_or(NaiveDate::MAX);
            within(tasks, today, end)
        }
        ViewMode::Month => {
            let end = today
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX);
            within(tasks, today, end)
        }
        ViewMode::Unrecognized(name) => {
            info!("The view mode {} has not been implemented yet.", name);
            tasks.to_vec()
        }
    };

    if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
        let needle = query.to_lowercase();
        shown.retain(|t| matches_query(t, &needle));
    }

    shown
}

/// Tasks touching the inclusive window `from..=to`.
fn within(tasks: &[Task], from: NaiveDate, to: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.overlaps_dates(from, to))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
fn matches_query(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
        || task
            .category
            .as_ref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use chrono::Duration;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(title: &str, start: NaiveDate, end: NaiveDate) -> Task {
        Task::new(
            title,
            "",
            start.and_hms_opt(8, 0, 0).unwrap(),
            end.and_hms_opt(18, 0, 0).unwrap(),
            Priority::Medium,
        )
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    fn today() -> NaiveDate {
        day("2024-06-02")
    }

    #[test]
    fn overview_keeps_everything_in_order() {
        let t = today();
        let tasks = vec![
            task("c", t + Duration::days(40), t + Duration::days(41)),
            task("a", t, t),
            task("b", t - Duration::days(3), t - Duration::days(2)),
        ];
        let shown = filter(&tasks, &ViewMode::Overview, None, t);
        assert_eq!(shown, tasks);
    }

    #[test]
    fn upcoming_sorts_by_end_time() {
        let t = today();
        let tasks = vec![
            task("late", t, t + Duration::days(9)),
            task("early", t, t + Duration::days(1)),
            task("middle", t, t + Duration::days(4)),
        ];
        let shown = filter(&tasks, &ViewMode::Upcoming, None, t);
        assert_eq!(titles(&shown), vec!["early", "middle", "late"]);
        assert!(shown.windows(2).all(|w| w[0].end_time <= w[1].end_time));
    }

    #[test]
    fn upcoming_keeps_collection_order_for_equal_end_times() {
        let t = today();
        let tasks = vec![
            task("second", t, t + Duration::days(2)),
            task("first", t, t + Duration::days(1)),
            task("third", t - Duration::days(1), t + Duration::days(2)),
            task("fourth", t + Duration::days(1), t + Duration::days(2)),
        ];
        let shown = filter(&tasks, &ViewMode::Upcoming, None, t);
        assert_eq!(titles(&shown), vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn windows_clamp_near_the_last_representable_date() {
        let t = NaiveDate::MAX.checked_sub_days(Days::new(3)).unwrap();
        let tasks = vec![task("last", NaiveDate::MAX, NaiveDate::MAX), task("now", t, t)];
        assert_eq!(
            titles(&filter(&tasks, &ViewMode::Week, None, t)),
            vec!["last", "now"]
        );
        assert_eq!(
            titles(&filter(&tasks, &ViewMode::Month, None, t)),
            vec!["last", "now"]
        );
    }

    #[test]
    fn day_includes_tasks_spanning_today() {
        let tasks = vec![task("span", day("2024-06-01"), day("2024-06-03"))];
        assert_eq!(
            filter(&tasks, &ViewMode::Day, None, day("2024-06-02")).len(),
            1
        );
        assert!(filter(&tasks, &ViewMode::Day, None, day("2024-06-05")).is_empty());
    }

    #[test]
    fn day_includes_boundary_dates() {
        let tasks = vec![task("span", day("2024-06-01"), day("2024-06-03"))];
        assert_eq!(
            filter(&tasks, &ViewMode::Day, None, day("2024-06-01")).len(),
            1
        );
        assert_eq!(
            filter(&tasks, &ViewMode::Day, None, day("2024-06-03")).len(),
            1
        );
    }

    #[test]
    fn week_covers_eight_days() {
        let t = today();
        let tasks = vec![
            task("far", t + Duration::days(9), t + Duration::days(10)),
            task("soon", t + Duration::days(6), t + Duration::days(12)),
            task("edge", t + Duration::days(7), t + Duration::days(7)),
            task("past", t - Duration::days(5), t - Duration::days(1)),
            task("ongoing", t - Duration::days(5), t + Duration::days(20)),
        ];
        let shown = filter(&tasks, &ViewMode::Week, None, t);
        assert_eq!(titles(&shown), vec!["soon", "edge", "ongoing"]);
    }

    #[test]
    fn month_covers_one_calendar_month() {
        let t = day("2024-01-31");
        let tasks = vec![
            // 2024-01-31 plus one month clamps to 2024-02-29
            task("leap", day("2024-02-29"), day("2024-02-29")),
            task("march", day("2024-03-01"), day("2024-03-02")),
            task("now", t, t),
        ];
        let shown = filter(&tasks, &ViewMode::Month, None, t);
        assert_eq!(titles(&shown), vec!["leap", "now"]);
    }

    #[test]
    fn inverted_range_never_matches_date_views() {
        let t = today();
        let tasks = vec![task("broken", t + Duration::days(1), t - Duration::days(1))];
        assert!(filter(&tasks, &ViewMode::Day, None, t).is_empty());
        assert!(filter(&tasks, &ViewMode::Week, None, t).is_empty());
    }

    #[test]
    fn unrecognized_mode_is_unfiltered() {
        let t = today();
        let tasks = vec![
            task("a", t + Duration::days(100), t + Duration::days(100)),
            task("b", t, t),
        ];
        let mode = ViewMode::from_name("fortnight");
        assert_eq!(mode, ViewMode::Unrecognized("fortnight".into()));
        assert_eq!(filter(&tasks, &mode, None, t), tasks);
    }

    #[test]
    fn search_matches_title_description_and_category() {
        let t = today();
        let mut by_desc = task("Errands", t, t);
        by_desc.description = "pick up groceries on the way".into();
        let tasks = vec![
            task("Buy groceries", t, t),
            by_desc,
            task("Weekly shop", t, t).with_category("Groceries"),
            task("Unrelated", t, t),
        ];

        let shown = filter(&tasks, &ViewMode::Overview, Some("groceries"), t);
        assert_eq!(titles(&shown), vec!["Buy groceries", "Errands", "Weekly shop"]);

        let upper = filter(&tasks, &ViewMode::Overview, Some("GROCERIES"), t);
        assert_eq!(upper, shown);
    }

    #[test]
    fn search_skips_category_check_for_uncategorized_tasks() {
        let t = today();
        let tasks = vec![task("Plain", t, t)];
        assert!(filter(&tasks, &ViewMode::Overview, Some("home"), t).is_empty());
    }

    #[test]
    fn blank_query_is_ignored() {
        let t = today();
        let tasks = vec![task("a", t, t), task("b", t, t)];
        assert_eq!(filter(&tasks, &ViewMode::Overview, Some("   "), t).len(), 2);
    }

    #[test]
    fn search_applies_after_mode() {
        let t = today();
        let tasks = vec![
            task("groceries later", t + Duration::days(30), t + Duration::days(30)),
            task("groceries today", t, t),
        ];
        let shown = filter(&tasks, &ViewMode::Day, Some("groceries"), t);
        assert_eq!(titles(&shown), vec!["groceries today"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let t = today();
        let tasks = vec![
            task("x", t, t + Duration::days(2)),
            task("y", t - Duration::days(1), t),
        ];
        for mode in ViewMode::known() {
            let first = filter(&tasks, mode, Some("x"), t);
            let second = filter(&tasks, mode, Some("x"), t);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn mode_names_parse_case_insensitively() {
        assert_eq!(ViewMode::from_name("WEEK"), ViewMode::Week);
        assert_eq!(ViewMode::from_name("Upcoming"), ViewMode::Upcoming);
        for mode in ViewMode::known() {
            assert_eq!(&ViewMode::from_name(mode.name()), mode);
        }
    }
}
