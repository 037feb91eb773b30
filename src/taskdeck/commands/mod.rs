use crate::config::TaskdeckConfig;
use crate::error::{Result, ValidationError};
use crate::model::{Category, Priority, Task};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub mod categories;
pub mod completion;
pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod show;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A task paired with its stable display index in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTask {
    pub index: usize,
    pub task: Task,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_tasks: Vec<Task>,
    pub listed_tasks: Vec<DisplayTask>,
    pub categories: Vec<Category>,
    pub config: Option<TaskdeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.affected_tasks = tasks;
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<DisplayTask>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: TaskdeckConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Input for creating a task. Unset dates default to the current time.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A requested change to one task. `None` leaves a field as it is.
///
/// Category and priority are given by display name, the way a picker
/// would hand them over.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub index: usize,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub clear_category: bool,
    pub priority: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl TaskUpdate {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn touches_dates(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }
}

/// Parses `YYYY-MM-DD` (midnight) or `YYYY-MM-DD HH:MM`.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(ValidationError::InvalidDate(input.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;

    #[test]
    fn parses_date_only_as_midnight() {
        let dt = parse_datetime("2024-06-01").unwrap();
        assert_eq!(dt.to_string(), "2024-06-01 00:00:00");
    }

    #[test]
    fn parses_date_and_time() {
        let dt = parse_datetime(" 2024-06-01 14:30 ").unwrap();
        assert_eq!(dt.to_string(), "2024-06-01 14:30:00");
    }

    #[test]
    fn rejects_garbage_dates() {
        let err = parse_datetime("next tuesday").unwrap_err();
        assert!(matches!(
            err,
            TaskError::Validation(ValidationError::InvalidDate(_))
        ));
    }
}
