//! Savings goal display formatting
//!
//! Formats goal cards for terminal output as a list and as a detail view.

use crate::models::color_name;
use crate::services::GoalProgress;
use crate::views::{GoalCard, SavingsGoalsView};

const BAR_WIDTH: usize = 20;

/// Format an amount with a currency symbol and thousands separators
pub fn format_amount(symbol: &str, amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, grouped, frac)
}

/// Whole percentage to print; only a reached goal shows 100
fn shown_percentage(progress: &GoalProgress) -> f64 {
    if progress.is_complete() {
        100.0
    } else {
        progress.percentage.floor().min(99.0)
    }
}

/// Render a percentage in `[0, 100]` as a fixed-width bar
///
/// Partial cells are not drawn, so the bar is only full at 100.
pub fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).floor() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Format every goal on the dashboard as a table
pub fn format_goal_list(view: &SavingsGoalsView<'_>) -> String {
    if view.is_empty() {
        return "No savings goals yet.\n\nUse 'goals new' to create one.".to_string();
    }

    let symbol = view.symbol();
    let cards = view.cards();

    let name_width = cards
        .iter()
        .map(|c| c.goal.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>14}  {:>14}  {:>6}  {:>14}  {}\n",
        "Goal",
        "Saved",
        "Target",
        "Done",
        "Left",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->14}  {:->14}  {:->6}  {:->14}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for card in &cards {
        output.push_str(&format!(
            "{:<width$}  {:>14}  {:>14}  {:>5.0}%  {:>14}  {}\n",
            card.goal.name,
            format_amount(symbol, card.progress.total_saved),
            format_amount(symbol, card.goal.target_amount),
            shown_percentage(&card.progress),
            format_amount(symbol, card.progress.remaining),
            card.goal.id,
            width = name_width
        ));
    }

    output
}

/// Format one goal card in detail
pub fn format_goal_details(card: &GoalCard<'_>, symbol: &str, date_format: &str) -> String {
    let goal = card.goal;
    let progress = &card.progress;
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.name));
    output.push_str(&format!("  ID:        {}\n", goal.id));

    let category = match &goal.sub_category {
        Some(sub) => format!("{} / {}", goal.category, sub),
        None => goal.category.clone(),
    };
    output.push_str(&format!("  Category:  {}\n", category));

    let color = match color_name(&goal.color) {
        Some(name) => format!("{} ({})", name, goal.color),
        None => goal.color.clone(),
    };
    output.push_str(&format!("  Color:     {}\n", color));

    if let Some(deadline) = goal.deadline {
        output.push_str(&format!("  Deadline:  {}\n", deadline.format(date_format)));
    }

    output.push('\n');
    output.push_str(&format!(
        "  {} of {}\n",
        format_amount(symbol, progress.total_saved),
        format_amount(symbol, goal.target_amount)
    ));
    output.push_str(&format!(
        "  {} {:.0}%\n",
        progress_bar(shown_percentage(progress)),
        shown_percentage(progress)
    ));

    if progress.is_complete() {
        output.push_str("  Goal reached!\n");
    } else {
        output.push_str(&format!(
            "  {} left\n",
            format_amount(symbol, progress.remaining)
        ));
    }

    output
}
