//! Task edits are validated against a working copy and committed in one step,
//! so a rejected edit leaves the stored task exactly as it was.

use crate::commands::{CmdMessage, CmdResult, TaskUpdate};
use crate::error::{Result, TaskError, ValidationError};
use crate::model::{Priority, Task, TaskCollection};
use log::warn;

use super::helpers::resolve_indexes;

pub fn run(collection: &mut TaskCollection, updates: &[TaskUpdate]) -> Result<CmdResult> {
    if updates.is_empty() {
        return Ok(CmdResult::default());
    }

    let indexes: Vec<_> = updates.iter().map(|u| u.index).collect();
    let resolved = resolve_indexes(collection, &indexes)?;

    // Updates land on a working copy in order, so repeated indexes build on
    // each other; the collection is replaced only once all of them pass.
    let mut working = collection.clone();
    let mut result = CmdResult::default();
    for ((index, id), update) in resolved.into_iter().zip(updates) {
        let current = working.task(&id).ok_or(TaskError::TaskNotFound(index))?;
        let (edited, notes) = apply(current, update, &working)?;
        for note in notes {
            result.add_message(CmdMessage::warning(note));
        }
        if let Some(slot) = working.task_mut(&id) {
            *slot = edited.clone();
        }
        result.add_message(CmdMessage::success(format!(
            "Task updated ({}): {}",
            index, edited.title
        )));
        result.affected_tasks.push(edited);
    }

    *collection = working;
    Ok(result)
}

/// Builds the edited task, or explains why the edit is invalid.
/// Also returns notes for lookups that fell back to the existing value.
fn apply(
    current: &Task,
    update: &TaskUpdate,
    collection: &TaskCollection,
) -> Result<(Task, Vec<String>)> {
    let mut edited = current.clone();
    let mut notes = Vec::new();

    if let Some(title) = &update.title {
        edited.title = title.trim().to_string();
    }
    if edited.title.is_empty() {
        return Err(ValidationError::TitleRequired.into());
    }

    if let Some(description) = &update.description {
        edited.description = description.clone();
    }

    if update.clear_category {
        edited.category = None;
    } else if let Some(name) = &update.category {
        match collection.category(name) {
            Some(category) => edited.category = Some(category.title.clone()),
            None => {
                warn!("No category named '{}', keeping the current one", name);
                notes.push(format!("Unknown category '{}', category unchanged", name));
            }
        }
    }

    if let Some(name) = &update.priority {
        match Priority::from_name(name) {
            Some(priority) => edited.priority = priority,
            None => {
                warn!("No priority named '{}', keeping {}", name, edited.priority);
                notes.push(format!("Unknown priority '{}', priority unchanged", name));
            }
        }
    }

    if update.touches_dates() {
        if let Some(start) = update.start_time {
            edited.start_time = start;
        }
        if let Some(end) = update.end_time {
            edited.end_time = end;
        }
        if edited.end_time < edited.start_time {
            return Err(ValidationError::InvalidDateRange.into());
        }
    }

    Ok((edited, notes))
}
