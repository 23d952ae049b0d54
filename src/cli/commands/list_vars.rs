//! List-vars command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::utils::strings::truncate_display;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Split the terminal width between the key and value columns
fn calculate_column_widths(term_width: usize, longest_key: usize) -> (usize, usize) {
    // "│ " + " " + " │"
    let fixed_overhead = 5;
    let available = term_width.saturating_sub(fixed_overhead);

    let key_width = longest_key.clamp(3, (available * 40 / 100).max(3));
    let value_width = available.saturating_sub(key_width).max(10);

    (key_width, value_width)
}

/// Execute the list-vars command
pub fn execute(ctx: &Context, profile_name: &str) -> Result<()> {
    let profile = ctx.profile(profile_name)?;

    for warning in ctx.store.codec().parse(&profile.content).warnings {
        ctx.print_warning(&format!(
            "{} line {}: {}",
            profile.name, warning.line_number, warning.message
        ));
    }

    if profile.variables.is_empty() {
        println!(
            "{}",
            format!("No exported variables in {}", profile.path.display()).dimmed()
        );
        return Ok(());
    }

    let longest_key = profile
        .variables
        .iter()
        .map(|v| v.key.chars().count())
        .max()
        .unwrap_or(0);
    let (key_w, value_w) = calculate_column_widths(get_terminal_width(), longest_key);

    let title = format!("{} ({})", profile.name, profile.variables.len());
    println!(
        "┌─ {} {}",
        title.bold(),
        "─".repeat((key_w + value_w + 1).saturating_sub(title.chars().count() + 1))
            .dimmed()
    );
    println!(
        "│ {:<key_w$} {:<value_w$} │",
        "KEY".bold().cyan(),
        "VALUE".bold().cyan(),
        key_w = key_w,
        value_w = value_w
    );
    println!("│ {} │", "─".repeat(key_w + 1 + value_w).dimmed());

    for var in &profile.variables {
        println!(
            "│ {:<key_w$} {:<value_w$} │",
            truncate_display(&var.key, key_w).yellow(),
            truncate_display(&var.value, value_w),
            key_w = key_w,
            value_w = value_w
        );
    }

    println!("└{}┘", "─".repeat(key_w + value_w + 3).dimmed());

    Ok(())
}
