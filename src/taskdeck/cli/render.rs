use colored::{ColoredString, Colorize};
use taskdeck::api::{CmdMessage, DisplayTask, MessageLevel};
use taskdeck::config::TaskdeckConfig;
use taskdeck::model::{Category, Priority, Task, User};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;
const CATEGORY_WIDTH: usize = 16;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const DONE_MARKER: &str = "✔";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_task_list(tasks: &[DisplayTask]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    for dt in tasks {
        println!("{}", render_task_line(dt));
    }
}

pub(super) fn render_task_line(dt: &DisplayTask) -> String {
    let task = &dt.task;
    let idx = format!("{:>3}.", dt.index);
    let marker = if task.completed { DONE_MARKER } else { " " };

    let title = pad_to_width(&truncate_to_width(&task.title, TITLE_WIDTH), TITLE_WIDTH);
    let title = if task.completed {
        title.dimmed().strikethrough()
    } else {
        title.normal()
    };

    let category = task.category.as_deref().unwrap_or("");
    let category = pad_to_width(
        &truncate_to_width(category, CATEGORY_WIDTH),
        CATEGORY_WIDTH,
    );

    format!(
        "{} {} {} {} {} {}",
        idx.yellow(),
        marker.green(),
        title,
        priority_label(task.priority),
        category.cyan(),
        task.end_time.format(DATE_FORMAT).to_string().dimmed()
    )
}

pub(super) fn print_full_tasks(tasks: &[DisplayTask], categories: &[Category]) {
    for (i, dt) in tasks.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        print_full_task(dt, categories);
    }
}

fn print_full_task(dt: &DisplayTask, categories: &[Category]) {
    let task: &Task = &dt.task;
    println!("{} {}", dt.index.to_string().yellow(), task.title.bold());
    println!("--------------------------------");

    let category = task
        .category
        .as_deref()
        .map(|title| {
            categories
                .iter()
                .find(|c| c.title == title)
                .map(Category::label)
                .unwrap_or_else(|| title.to_string())
        })
        .unwrap_or_else(|| "-".to_string());
    let status = if task.completed { "completed" } else { "open" };

    println!("{:<10} {}", "Priority:".dimmed(), priority_label(task.priority));
    println!("{:<10} {}", "Category:".dimmed(), category);
    println!(
        "{:<10} {}",
        "Start:".dimmed(),
        task.start_time.format(DATE_FORMAT)
    );
    println!("{:<10} {}", "End:".dimmed(), task.end_time.format(DATE_FORMAT));
    println!("{:<10} {}", "Status:".dimmed(), status);
    if !task.description.is_empty() {
        println!();
        println!("{}", task.description);
    }
}

pub(super) fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("No categories.");
        return;
    }
    for category in categories {
        println!("  {}", category.label());
    }
}

pub(super) fn print_user(user: &User) {
    println!("{}", user.username.bold());
    if !user.email.is_empty() {
        println!("{}", user.email.dimmed());
    }
}

pub(super) fn print_config(config: &TaskdeckConfig) {
    println!("default-view = {}", config.default_view);
    println!("default-priority = {}", config.default_priority);
    println!("username = {}", config.user().username);
    println!("email = {}", config.email.as_deref().unwrap_or(""));
}

/// Priority name colored with the priority's display color.
fn priority_label(priority: Priority) -> ColoredString {
    let (r, g, b) = hex_to_rgb(priority.color()).unwrap_or((255, 255, 255));
    format!("{:<6}", priority.name()).truecolor(r, g, b)
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
