use crate::commands::{CmdMessage, CmdResult, NewTask};
use crate::error::{Result, ValidationError};
use crate::model::{Priority, Task, TaskCollection};
use chrono::NaiveDateTime;

pub fn run(
    collection: &mut TaskCollection,
    new_task: NewTask,
    default_priority: Priority,
    now: NaiveDateTime,
) -> Result<CmdResult> {
    let title = new_task.title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired.into());
    }

    let start_time = new_task.start_time.unwrap_or(now);
    let end_time = new_task.end_time.unwrap_or(start_time);
    if end_time < start_time {
        return Err(ValidationError::InvalidDateRange.into());
    }

    if let Some(category) = &new_task.category {
        if collection.category(category).is_none() {
            return Err(ValidationError::UnknownCategory(category.clone()).into());
        }
    }

    let mut task = Task::new(
        title,
        new_task.description,
        start_time,
        end_time,
        new_task.priority.unwrap_or(default_priority),
    );
    task.category = new_task.category;
    collection.add_task(task.clone());

    let index = collection.index_of(&task.id).unwrap_or_default();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task created ({}): {}",
        index, task.title
    )));
    Ok(result.with_affected_tasks(vec![task]))
}
