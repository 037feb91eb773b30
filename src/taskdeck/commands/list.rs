use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskCollection;
use crate::view::{self, ViewMode};
use chrono::NaiveDate;

use super::helpers::indexed_tasks;

pub fn run(
    collection: &TaskCollection,
    mode: &ViewMode,
    query: Option<&str>,
    today: NaiveDate,
) -> Result<CmdResult> {
    let shown = view::filter(collection.tasks(), mode, query, today);
    let mut result = CmdResult::default().with_listed_tasks(indexed_tasks(collection, shown));

    if let ViewMode::Unrecognized(name) = mode {
        result.add_message(CmdMessage::info(format!(
            "View mode '{}' is not available yet, showing all tasks",
            name
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
    }

    #[test]
    fn listed_tasks_keep_collection_indexes() {
        let fixture = StoreFixture::new(today())
            .with_task("far", 30, 31)
            .with_task("today", 0, 0)
            .with_task("tomorrow", 1, 1);

        let result = run(&fixture.collection, &ViewMode::Day, None, today()).unwrap();
        assert_eq!(result.listed_tasks.len(), 1);
        assert_eq!(result.listed_tasks[0].index, 2);
        assert_eq!(result.listed_tasks[0].task.title, "today");
    }

    #[test]
    fn week_view_excludes_tasks_nine_days_out() {
        let fixture = StoreFixture::new(today())
            .with_task("nine", 9, 10)
            .with_task("six", 6, 6);

        let result = run(&fixture.collection, &ViewMode::Week, None, today()).unwrap();
        let titles: Vec<_> = result
            .listed_tasks
            .iter()
            .map(|dt| dt.task.title.as_str())
            .collect();
        assert_eq!(titles, vec!["six"]);
    }

    #[test]
    fn searches_category_titles() {
        let fixture = StoreFixture::new(today())
            .with_category("Groceries", "G")
            .with_categorized_task("Weekly shop", "Groceries")
            .with_task("Dentist", 0, 0);

        let result = run(
            &fixture.collection,
            &ViewMode::Overview,
            Some("GROCERIES"),
            today(),
        )
        .unwrap();
        assert_eq!(result.listed_tasks.len(), 1);
        assert_eq!(result.listed_tasks[0].task.title, "Weekly shop");
    }

    #[test]
    fn unrecognized_mode_notes_fallback() {
        let fixture = StoreFixture::new(today()).with_task("a", 50, 50);
        let mode = ViewMode::from_name("quarter");
        let result = run(&fixture.collection, &mode, None, today()).unwrap();
        assert_eq!(result.listed_tasks.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }
}
