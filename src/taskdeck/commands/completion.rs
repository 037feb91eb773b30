use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskCollection;

use super::helpers::resolve_indexes;

pub fn complete(collection: &mut TaskCollection, indexes: &[usize]) -> Result<CmdResult> {
    set_completed(collection, indexes, true)
}

pub fn reopen(collection: &mut TaskCollection, indexes: &[usize]) -> Result<CmdResult> {
    set_completed(collection, indexes, false)
}

fn set_completed(
    collection: &mut TaskCollection,
    indexes: &[usize],
    completed: bool,
) -> Result<CmdResult> {
    let resolved = resolve_indexes(collection, indexes)?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        let Some(task) = collection.task_mut(&id) else {
            continue;
        };
        task.set_completed(completed);

        let verb = if completed { "completed" } else { "reopened" };
        result.add_message(CmdMessage::success(format!(
            "Task {} ({}): {}",
            verb, index, task.title
        )));
        result.affected_tasks.push(task.clone());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::NaiveDate;

    #[test]
    fn completes_and_reopens() {
        let mut collection = StoreFixture::new(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())
            .with_task("a", 0, 0)
            .with_task("b", 0, 0)
            .collection;

        complete(&mut collection, &[1, 2]).unwrap();
        assert!(collection.tasks().iter().all(|t| t.completed));

        let result = reopen(&mut collection, &[2]).unwrap();
        assert_eq!(result.affected_tasks.len(), 1);
        assert!(collection.task_at(1).unwrap().completed);
        assert!(!collection.task_at(2).unwrap().completed);
    }

    #[test]
    fn bad_index_changes_nothing() {
        let mut collection = StoreFixture::new(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())
            .with_task("a", 0, 0)
            .collection;
        assert!(complete(&mut collection, &[1, 5]).is_err());
        assert!(!collection.task_at(1).unwrap().completed);
    }
}
