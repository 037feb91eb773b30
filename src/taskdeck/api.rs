//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every taskdeck operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Persists** the session after every successful mutation
//! - **Supplies the clock**: view filtering is relative to the local date
//!
//! It does no printing and holds no business rules; those live in `commands/`
//! and `view.rs`.
//!
//! `TaskdeckApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TaskdeckApi<FileStore>`
//! - Testing: `TaskdeckApi<InMemoryStore>`

use crate::commands;
use crate::config::TaskdeckConfig;
use crate::error::Result;
use crate::model::User;
use crate::session::Session;
use crate::store::DataStore;
use crate::view::ViewMode;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// The main API facade for taskdeck operations.
pub struct TaskdeckApi<S: DataStore> {
    session: Session<S>,
    config: TaskdeckConfig,
    config_dir: PathBuf,
}

impl<S: DataStore> TaskdeckApi<S> {
    pub fn new(session: Session<S>, config: TaskdeckConfig, config_dir: PathBuf) -> Self {
        Self {
            session,
            config,
            config_dir,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn config(&self) -> &TaskdeckConfig {
        &self.config
    }

    pub fn whoami(&self) -> &User {
        self.session.user()
    }

    pub fn add_task(&mut self, new_task: commands::NewTask) -> Result<commands::CmdResult> {
        let now = Local::now().naive_local();
        let result = commands::create::run(
            self.session.collection_mut(),
            new_task,
            self.config.default_priority,
            now,
        )?;
        self.session.save()?;
        Ok(result)
    }

    /// Lists tasks for `mode` relative to the local date.
    pub fn list_tasks(
        &self,
        mode: &ViewMode,
        query: Option<&str>,
    ) -> Result<commands::CmdResult> {
        self.list_tasks_on(mode, query, Local::now().date_naive())
    }

    pub fn list_tasks_on(
        &self,
        mode: &ViewMode,
        query: Option<&str>,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::list::run(self.session.collection(), mode, query, today)
    }

    /// Lists tasks using the configured default view.
    pub fn list_default(&self, query: Option<&str>) -> Result<commands::CmdResult> {
        self.list_tasks(&self.config.view_mode(), query)
    }

    pub fn show_tasks(&self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::show::run(self.session.collection(), indexes)
    }

    pub fn edit_tasks(
        &mut self,
        updates: &[commands::TaskUpdate],
    ) -> Result<commands::CmdResult> {
        let result = commands::edit::run(self.session.collection_mut(), updates)?;
        self.session.save()?;
        Ok(result)
    }

    pub fn complete_tasks(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        let result = commands::completion::complete(self.session.collection_mut(), indexes)?;
        self.session.save()?;
        Ok(result)
    }

    pub fn reopen_tasks(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        let result = commands::completion::reopen(self.session.collection_mut(), indexes)?;
        self.session.save()?;
        Ok(result)
    }

    pub fn delete_tasks(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        let result = commands::delete::run(self.session.collection_mut(), indexes)?;
        self.session.save()?;
        Ok(result)
    }

    pub fn add_category(&mut self, title: &str, icon: &str) -> Result<commands::CmdResult> {
        let result = commands::categories::add(self.session.collection_mut(), title, icon)?;
        self.session.save()?;
        Ok(result)
    }

    pub fn remove_category(&mut self, title: &str) -> Result<commands::CmdResult> {
        let result = commands::categories::remove(self.session.collection_mut(), title)?;
        self.session.save()?;
        Ok(result)
    }

    pub fn list_categories(&self) -> Result<commands::CmdResult> {
        commands::categories::list(self.session.collection())
    }

    pub fn configure(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayTask, MessageLevel, NewTask, TaskUpdate};
