use crate::error::{Result, ValidationError};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Hex color used when rendering the priority marker.
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Low => "#4caf50",
            Priority::Medium => "#ff9800",
            Priority::High => "#f44336",
        }
    }

    /// Looks up a priority by display name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub icon: String,
}

impl Category {
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub priority: Priority,
    // Title of a category in the owning collection
    pub category: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        priority: Priority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            start_time,
            end_time,
            priority,
            category: None,
            completed: false,
        }
    }

    /// A task spanning the current moment, with medium priority.
    pub fn now(title: impl Into<String>) -> Self {
        let now = Local::now().naive_local();
        Self::new(title, "", now, now, Priority::default())
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_time.date()
    }

    /// True when the inclusive calendar-date span of the task shares at least one
    /// day with `from..=to`. A task whose end precedes its start spans no days.
    pub fn overlaps_dates(&self, from: NaiveDate, to: NaiveDate) -> bool {
        let (start, end) = (self.start_date(), self.end_date());
        start <= end && start <= to && end >= from
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// Identity of the person owning a session. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// All tasks and categories owned by one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCollection {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    categories: Vec<Category>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove_task(&mut self, id: &Uuid) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| &t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    pub fn task(&self, id: &Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn task_mut(&mut self, id: &Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// 1-based position of a task, used as its display index.
    pub fn index_of(&self, id: &Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id).map(|i| i + 1)
    }

    pub fn task_at(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    pub fn category(&self, title: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.title == title)
    }

    pub fn add_category(&mut self, category: Category) -> Result<()> {
        if category.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired.into());
        }
        if self.category(&category.title).is_some() {
            return Err(ValidationError::DuplicateCategory(category.title).into());
        }
        self.categories.push(category);
        Ok(())
    }

    /// Removes a category and detaches it from every task that referenced it.
    /// Returns the removed category and the number of tasks detached.
    pub fn remove_category(&mut self, title: &str) -> Option<(Category, usize)> {
        let pos = self.categories.iter().position(|c| c.title == title)?;
        let removed = self.categories.remove(pos);

        let mut detached = 0;
        for task in self
            .tasks
            .iter_mut()
            .filter(|t| t.category.as_deref() == Some(title))
        {
            task.category = None;
            detached += 1;
        }
        Some((removed, detached))
    }

    /// Sorted `"icon title"` labels for every category.
    pub fn category_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.categories.iter().map(Category::label).collect();
        labels.sort();
        labels
    }
}
