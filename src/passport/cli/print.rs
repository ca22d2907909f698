use coffee_passport::commands::query::DisplayCoffee;
use coffee_passport::commands::stats::Progress;
use coffee_passport::config::PassportConfig;
use coffee_passport::model::{Badge, CoffeeEntry};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const CATEGORY_WIDTH: usize = 14;
const TASTED_MARKER: &str = "✓";
const FAVORITE_MARKER: &str = "★";
const PROGRESS_BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy)]
pub(super) enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub(super) struct CmdMessage {
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
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_coffees(coffees: &[DisplayCoffee]) {
    if coffees.is_empty() {
        println!("No coffees found.");
        return;
    }

    for dc in coffees {
        let entry = dc.entry;
        let idx_str = format!("{:>3}. ", dc.index);

        let tasted = if entry.tasted {
            TASTED_MARKER.green()
        } else {
            " ".normal()
        };
        let favorite = if entry.is_favorite {
            FAVORITE_MARKER.yellow()
        } else {
            " ".normal()
        };
        let markers_width = 4;

        let name_description = if entry.description.is_empty() {
            entry.name.clone()
        } else {
            format!("{} {}", entry.name, entry.description)
        };

        let fixed_width = idx_str.width() + markers_width + CATEGORY_WIDTH + 1;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = truncate_to_width(&name_description, available);
        let padding = available.saturating_sub(display.width());

        // Bold the name only, the description trails dimmed
        let display = match display.strip_prefix(entry.name.as_str()) {
            Some(rest) => format!("{}{}", entry.name.bold(), rest.dimmed()),
            None => display.bold().to_string(),
        };

        println!(
            "{}{} {} {}{} {}",
            idx_str,
            tasted,
            favorite,
            display,
            " ".repeat(padding),
            format!("{:>width$}", entry.category, width = CATEGORY_WIDTH).dimmed()
        );
    }
}

pub(super) fn print_full_coffee(index: usize, entry: &CoffeeEntry) {
    let mut flags = Vec::new();
    if entry.tasted {
        flags.push(format!("{} tasted", TASTED_MARKER).green().to_string());
    }
    if entry.is_favorite {
        flags.push(format!("{} favorite", FAVORITE_MARKER).yellow().to_string());
    }

    println!(
        "{} {}  {}",
        index.to_string().yellow(),
        entry.name.bold(),
        flags.join("  ")
    );
    println!("--------------------------------");
    println!("{}", entry.category.dimmed());
    if !entry.description.is_empty() {
        println!("{}", entry.description);
    }

    let attributes = [
        ("Origin", &entry.origin),
        ("Body", &entry.body),
        ("Acidity", &entry.acidity),
        ("Processing", &entry.processing),
        ("Pairs with", &entry.food_pairing),
    ];
    let present: Vec<_> = attributes
        .iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect();
    if !present.is_empty() {
        println!();
        for (label, value) in present {
            println!("{}: {}", format!("{:>12}", label).dimmed(), value);
        }
    }

    if let Some(details) = &entry.details {
        println!();
        println!("{}", details);
    }
    if let Some(image) = &entry.image_data {
        println!();
        println!("{}", format!("[photo, {} bytes]", image.len()).dimmed());
    }
}

pub(super) fn print_progress(progress: &Progress) {
    let filled = (progress.fraction() * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH.saturating_sub(filled))
    );
    println!("{}", "Coffee Check-In Progress".bold());
    println!("{}", bar.green());
    println!(
        "You've tasted {} of {} coffees.",
        progress.tasted, progress.total
    );
}

pub(super) fn print_badges(badges: &[Badge]) {
    if badges.is_empty() {
        println!("{}", "No badges earned yet.".dimmed());
        return;
    }
    println!("{}", "Badges Earned".bold());
    for badge in badges {
        println!("  {} {}", badge.icon(), badge.name().yellow());
    }
}

pub(super) fn print_values(values: &[String]) {
    if values.is_empty() {
        println!("{}", "No values recorded.".dimmed());
        return;
    }
    for value in values {
        println!("{}", value);
    }
}

pub(super) fn print_config(config: &PassportConfig) {
    println!("categories = {}", config.categories.join(", "));
    println!("reseed-when-empty = {}", config.reseed_when_empty);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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
