use crate::commands::DisplayTask;
use crate::error::{Result, TaskError};
use crate::model::{Task, TaskCollection};
use uuid::Uuid;

/// Pairs each task with its display index in `collection`.
pub fn indexed_tasks(collection: &TaskCollection, tasks: Vec<Task>) -> Vec<DisplayTask> {
    tasks
        .into_iter()
        .filter_map(|task| {
            collection
                .index_of(&task.id)
                .map(|index| DisplayTask { index, task })
        })
        .collect()
}

/// Resolves display indexes to task ids, failing on the first unknown index.
pub fn resolve_indexes(
    collection: &TaskCollection,
    indexes: &[usize],
) -> Result<Vec<(usize, Uuid)>> {
    indexes
        .iter()
        .map(|&idx| {
            collection
                .task_at(idx)
                .map(|t| (idx, t.id))
                .ok_or(TaskError::TaskNotFound(idx))
        })
        .collect()
}
