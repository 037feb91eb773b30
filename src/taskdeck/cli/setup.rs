use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taskdeck", bin_name = "taskdeck", version)]
#[command(about = "Personal to-do manager with day, week and month views", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Task(TaskCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a new task
    #[command(alias = "n", display_order = 1)]
    Add {
        /// Title words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        title: Vec<String>,

        #[command(flatten)]
        fields: TaskFields,
    },

    /// List tasks for a view (overview, upcoming, day, week, month)
    #[command(alias = "ls", display_order = 2)]
    List {
        /// View mode; defaults to the configured view
        #[arg(long)]
        view: Option<String>,

        /// Only tasks whose title, description or category contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Show tasks in detail
    #[command(alias = "v", display_order = 10)]
    Show {
        /// Indexes of the tasks (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Change fields of a task
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Index of the task
        index: usize,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: TaskFields,

        /// Remove the task's category
        #[arg(long, conflicts_with = "category")]
        no_category: bool,
    },

    /// Mark tasks as completed
    #[command(display_order = 12)]
    Done {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Mark tasks as not completed
    #[command(display_order = 13)]
    Undone {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Delete one or more tasks
    #[command(alias = "rm", display_order = 14)]
    Delete {
        /// Indexes of the tasks (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Manage categories
    #[command(subcommand, display_order = 20)]
    Category(CategoryCommands),

    /// Show the active user
    #[command(display_order = 21)]
    Whoami,

    /// Get or set configuration
    #[command(display_order = 22)]
    Config {
        /// Configuration key (e.g., default-view)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        title: String,

        /// Icon shown next to the title
        #[arg(long, default_value = "•")]
        icon: String,
    },

    /// Remove a category (tasks using it lose their category)
    #[command(alias = "rm")]
    Remove { title: String },

    /// List categories
    #[command(alias = "ls")]
    List,
}

/// Task fields shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct TaskFields {
    /// Description text
    #[arg(short, long)]
    pub description: Option<String>,

    /// Start date: YYYY-MM-DD or "YYYY-MM-DD HH:MM"
    #[arg(long)]
    pub start: Option<String>,

    /// End date: YYYY-MM-DD or "YYYY-MM-DD HH:MM"
    #[arg(long)]
    pub end: Option<String>,

    /// Priority (low, medium, high)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Category title
    #[arg(short, long)]
    pub category: Option<String>,
}
