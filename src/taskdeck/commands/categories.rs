use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ValidationError};
use crate::model::{Category, TaskCollection};

pub fn add(collection: &mut TaskCollection, title: &str, icon: &str) -> Result<CmdResult> {
    let category = Category::new(title.trim(), icon.trim());
    let label = category.label();
    collection.add_category(category.clone())?;

    let mut result = CmdResult::default().with_categories(vec![category]);
    result.add_message(CmdMessage::success(format!("Category added: {}", label)));
    Ok(result)
}

pub fn remove(collection: &mut TaskCollection, title: &str) -> Result<CmdResult> {
    let (removed, detached) = collection
        .remove_category(title.trim())
        .ok_or_else(|| ValidationError::UnknownCategory(title.trim().to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Category removed: {}",
        removed.label()
    )));
    if detached > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} task(s) no longer have a category",
            detached
        )));
    }
    Ok(result.with_categories(vec![removed]))
}

/// All categories, ordered by their display label.
pub fn list(collection: &TaskCollection) -> Result<CmdResult> {
    let mut categories = collection.categories().to_vec();
    categories.sort_by_key(Category::label);
    Ok(CmdResult::default().with_categories(categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::model::Task;

    #[test]
    fn adds_and_lists_sorted() {
        let mut collection = TaskCollection::new();
        add(&mut collection, "Work", "💼").unwrap();
        add(&mut collection, " Home ", "🏠").unwrap();

        let listed = list(&collection).unwrap().categories;
        assert_eq!(listed.len(), 2);
        assert_eq!(
            listed.iter().map(Category::label).collect::<Vec<_>>(),
            collection.category_labels()
        );
        assert!(collection.category("Home").is_some());
    }

    #[test]
    fn rejects_duplicates() {
        let mut collection = TaskCollection::new();
        add(&mut collection, "Work", "W").unwrap();
        assert!(matches!(
            add(&mut collection, "Work", "X"),
            Err(TaskError::Validation(ValidationError::DuplicateCategory(_)))
        ));
        let err = add(&mut collection, "Work", "X").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: category already exists: Work"
        );
    }

    #[test]
    fn remove_reports_detached_tasks() {
        let mut collection = TaskCollection::new();
        add(&mut collection, "Work", "W").unwrap();
        collection.add_task(Task::now("Report").with_category("Work"));

        let result = remove(&mut collection, "Work").unwrap();
        assert_eq!(result.messages.len(), 2);
        assert!(collection.categories().is_empty());
        assert!(collection.tasks()[0].category.is_none());
    }

    #[test]
    fn removing_unknown_category_fails() {
        let mut collection = TaskCollection::new();
        let err = remove(&mut collection, "Nope").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: unknown category: Nope");
    }
}
