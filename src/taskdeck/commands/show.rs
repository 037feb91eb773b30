use crate::commands::{CmdResult, DisplayTask};
use crate::error::Result;
use crate::model::TaskCollection;

use super::helpers::resolve_indexes;

pub fn run(collection: &TaskCollection, indexes: &[usize]) -> Result<CmdResult> {
    let resolved = resolve_indexes(collection, indexes)?;
    let listed: Vec<DisplayTask> = resolved
        .into_iter()
        .filter_map(|(index, id)| {
            collection
                .task(&id)
                .cloned()
                .map(|task| DisplayTask { index, task })
        })
        .collect();

    let mut categories = Vec::new();
    for dt in &listed {
        let category = dt
            .task
            .category
            .as_deref()
            .and_then(|c| collection.category(c));
        if let Some(category) = category {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
    }

    Ok(CmdResult::default()
        .with_listed_tasks(listed)
        .with_categories(categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::NaiveDate;

    fn fixture() -> StoreFixture {
        StoreFixture::new(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())
            .with_category("Home", "H")
            .with_task("plain", 0, 1)
            .with_categorized_task("dishes", "Home")
    }

    #[test]
    fn shows_requested_tasks_with_their_categories() {
        let fixture = fixture();
        let result = run(&fixture.collection, &[2]).unwrap();
        assert_eq!(result.listed_tasks[0].task.title, "dishes");
        assert_eq!(result.categories.len(), 1);
        assert_eq!(result.categories[0].icon, "H");
    }

    #[test]
    fn unknown_index_is_not_found() {
        let fixture = fixture();
        assert!(matches!(
            run(&fixture.collection, &[7]),
            Err(TaskError::TaskNotFound(7))
        ));
    }
}
