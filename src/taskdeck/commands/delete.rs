use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskCollection;

use super::helpers::resolve_indexes;

pub fn run(collection: &mut TaskCollection, indexes: &[usize]) -> Result<CmdResult> {
    // Resolve up front: removing shifts the indexes of later tasks
    let resolved = resolve_indexes(collection, indexes)?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        if let Some(task) = collection.remove_task(&id) {
            result.add_message(CmdMessage::success(format!(
                "Task deleted ({}): {}",
                index, task.title
            )));
            result.affected_tasks.push(task);
        }
    }

    Ok(result)
}
