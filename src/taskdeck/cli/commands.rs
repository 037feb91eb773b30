//! # CLI Layer
//!
//! This module is **one possible UI client** for taskdeck. It is the only place in
//! the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the logger
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, session and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_categories, print_config, print_full_tasks, print_messages, print_task_list, print_user,
};
use super::setup::{
    CategoryCommands, Cli, Commands, CoreCommands, MiscCommands, TaskCommands, TaskFields,
};
use clap::Parser;
use directories::ProjectDirs;
use log::{debug, LevelFilter};
use std::path::PathBuf;
use taskdeck::api::{ConfigAction, NewTask, TaskUpdate, TaskdeckApi};
use taskdeck::commands::parse_datetime;
use taskdeck::config::TaskdeckConfig;
use taskdeck::error::{Result, TaskError, ValidationError};
use taskdeck::model::Priority;
use taskdeck::session::Session;
use taskdeck::store::fs::FileStore;
use taskdeck::view::ViewMode;

/// Overrides the data directory (used by tests and portable setups).
const HOME_ENV: &str = "TASKDECK_HOME";

struct AppContext {
    api: TaskdeckApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add { title, fields } => handle_add(&mut ctx, title.join(" "), fields),
            CoreCommands::List { view, search } => handle_list(&ctx, view, search),
        },
        Some(Commands::Task(cmd)) => match cmd {
            TaskCommands::Show { indexes } => handle_show(&ctx, indexes),
            TaskCommands::Edit {
                index,
                title,
                fields,
                no_category,
            } => handle_edit(&mut ctx, index, title, fields, no_category),
            TaskCommands::Done { indexes } => handle_done(&mut ctx, indexes),
            TaskCommands::Undone { indexes } => handle_undone(&mut ctx, indexes),
            TaskCommands::Delete { indexes } => handle_delete(&mut ctx, indexes),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Category(cat) => handle_category(&mut ctx, cat),
            MiscCommands::Whoami => handle_whoami(&ctx),
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
        },
        None => handle_list(&ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "taskdeck", "taskdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TaskError::Config("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!("Using data directory {}", data_dir.display());

    let config = TaskdeckConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let session = Session::open(store, config.user())?;
    let api = TaskdeckApi::new(session, config, data_dir);

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, title: String, fields: TaskFields) -> Result<()> {
    let mut new_task = NewTask::new(title);
    new_task.description = fields.description.unwrap_or_default();
    new_task.start_time = fields.start.as_deref().map(parse_datetime).transpose()?;
    new_task.end_time = fields.end.as_deref().map(parse_datetime).transpose()?;
    new_task.category = fields.category;
    new_task.priority = match fields.priority {
        Some(name) => Some(
            Priority::from_name(&name)
                .ok_or_else(|| ValidationError::UnknownPriority(name.clone()))?,
        ),
        None => None,
    };

    let result = ctx.api.add_task(new_task)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, view: Option<String>, search: Option<String>) -> Result<()> {
    let result = match view {
        Some(name) => ctx
            .api
            .list_tasks(&ViewMode::from_name(&name), search.as_deref())?,
        None => ctx.api.list_default(search.as_deref())?,
    };
    print_task_list(&result.listed_tasks);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.show_tasks(&indexes)?;
    print_full_tasks(&result.listed_tasks, &result.categories);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: usize,
    title: Option<String>,
    fields: TaskFields,
    no_category: bool,
) -> Result<()> {
    let update = TaskUpdate {
        index,
        title,
        description: fields.description,
        category: fields.category,
        clear_category: no_category,
        priority: fields.priority,
        start_time: fields.start.as_deref().map(parse_datetime).transpose()?,
        end_time: fields.end.as_deref().map(parse_datetime).transpose()?,
    };

    let result = ctx.api.edit_tasks(&[update])?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.complete_tasks(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_undone(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.reopen_tasks(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.delete_tasks(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_category(ctx: &mut AppContext, cmd: CategoryCommands) -> Result<()> {
    let result = match cmd {
        CategoryCommands::Add { title, icon } => ctx.api.add_category(&title, &icon)?,
        CategoryCommands::Remove { title } => ctx.api.remove_category(&title)?,
        CategoryCommands::List => {
            let result = ctx.api.list_categories()?;
            print_categories(&result.categories);
            result
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    print_user(ctx.api.whoami());
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.configure(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
