//! Savings goal CLI commands
//!
//! Bridges clap argument parsing with the goal dashboard and the goal form.
//! Nothing is written back to the snapshot: saves, deletes and fund requests
//! are printed as intents.

use clap::{Args, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::display::{format_amount, format_goal_details, format_goal_list};
use crate::error::{SavingsError, SavingsResult};
use crate::forms::GoalFormController;
use crate::intent::GoalIntent;
use crate::models::resolve_color;
use crate::snapshot::BudgetSnapshot;
use crate::views::SavingsGoalsView;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List all goals with their progress
    List,

    /// Show one goal in detail
    Show {
        /// Goal name or ID
        goal: String,
    },

    /// Create a new goal
    New {
        /// Goal name
        #[arg(short, long)]
        name: String,
        /// Target amount (e.g., "10000" or "2500.50")
        #[arg(short, long)]
        target: String,
        /// Starting balance
        #[arg(short, long, default_value = "0")]
        initial: String,
        /// Target deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// Savings category to link to
        #[arg(short, long)]
        category: String,
        /// Subcategory of the linked category
        #[arg(short, long)]
        sub_category: Option<String>,
        /// Color tag: a palette name (e.g., "Indigo") or any color string
        #[arg(long)]
        color: Option<String>,
    },

    /// Edit an existing goal
    Edit {
        /// Goal name or ID
        goal: String,
        #[command(flatten)]
        changes: GoalChanges,
    },

    /// Delete a goal
    Delete {
        /// Goal name or ID
        goal: String,
    },

    /// Request adding funds to a goal
    #[command(name = "add-funds")]
    AddFunds {
        /// Goal name or ID
        goal: String,
    },
}

/// Field overrides for `edit`
#[derive(Args, Default)]
pub struct GoalChanges {
    /// New name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New target amount
    #[arg(short, long)]
    pub target: Option<String>,
    /// New starting balance
    #[arg(short, long)]
    pub initial: Option<String>,
    /// New deadline (YYYY-MM-DD, empty string to clear)
    #[arg(short, long)]
    pub deadline: Option<String>,
    /// New savings category (clears the subcategory)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Subcategory to toggle
    #[arg(short, long)]
    pub sub_category: Option<String>,
    /// Drop the subcategory link
    #[arg(long, conflicts_with = "sub_category")]
    pub no_sub_category: bool,
    /// New color tag
    #[arg(long)]
    pub color: Option<String>,
}

/// How command results are written
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub symbol: String,
    pub date_format: String,
    pub json: bool,
    pub seed: Option<u64>,
}

/// Handle a goal command
pub fn handle_goal_command(
    snapshot: &BudgetSnapshot,
    options: &OutputOptions,
    cmd: GoalCommands,
) -> SavingsResult<()> {
    let view = SavingsGoalsView::new(&snapshot.goals, &snapshot.items, &options.symbol);

    match cmd {
        GoalCommands::List => {
            if options.json {
                print_json(&view.cards())?;
            } else {
                print!("{}", format_goal_list(&view));
            }
        }

        GoalCommands::Show { goal } => {
            let goal = view.lookup(&goal)?;
            let card = view.card(&goal.id)?;
            if options.json {
                print_json(&card)?;
            } else {
                print!(
                    "{}",
                    format_goal_details(&card, &options.symbol, &options.date_format)
                );
            }
        }

        GoalCommands::New {
            name,
            target,
            initial,
            deadline,
            category,
            sub_category,
            color,
        } => {
            let mut form = form_controller(snapshot, options);
            form.open_create();
            form.set_name(name)?;
            form.set_target_amount(target)?;
            form.set_initial_amount(initial)?;
            if let Some(deadline) = deadline {
                form.set_deadline(deadline)?;
            }
            form.select_category(&category)?;
            if let Some(sub) = sub_category {
                form.toggle_sub_category(&sub)?;
            }
            if let Some(color) = color {
                form.set_color(resolve_color(&color))?;
            }

            print_intent(&form.submit()?, options)?;
        }

        GoalCommands::Edit { goal, changes } => {
            let goal = view.lookup(&goal)?;
            let intent = view.edit_goal(&goal.id)?;
            let GoalIntent::EditGoal { goal } = intent else {
                return Err(SavingsError::Form("unexpected intent".into()));
            };

            let mut form = form_controller(snapshot, options);
            form.open_edit(goal);
            apply_changes(&mut form, changes)?;

            print_intent(&form.submit()?, options)?;
        }

        GoalCommands::Delete { goal } => {
            let goal = view.lookup(&goal)?;
            print_intent(&view.delete_goal(&goal.id)?, options)?;
        }

        GoalCommands::AddFunds { goal } => {
            let goal = view.lookup(&goal)?;
            print_intent(&view.add_funds(&goal.id)?, options)?;
        }
    }

    Ok(())
}

fn form_controller(
    snapshot: &BudgetSnapshot,
    options: &OutputOptions,
) -> GoalFormController<StdRng> {
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    GoalFormController::new(rng, snapshot.categories.clone())
}

fn apply_changes(
    form: &mut GoalFormController<StdRng>,
    changes: GoalChanges,
) -> SavingsResult<()> {
    if let Some(name) = changes.name {
        form.set_name(name)?;
    }
    if let Some(target) = changes.target {
        form.set_target_amount(target)?;
    }
    if let Some(initial) = changes.initial {
        form.set_initial_amount(initial)?;
    }
    if let Some(deadline) = changes.deadline {
        form.set_deadline(deadline)?;
    }
    if let Some(category) = changes.category {
        form.select_category(&category)?;
    }
    if changes.no_sub_category {
        form.clear_sub_category()?;
    }
    if let Some(sub) = changes.sub_category {
        form.toggle_sub_category(&sub)?;
    }
    if let Some(color) = changes.color {
        form.set_color(resolve_color(&color))?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> SavingsResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_intent(intent: &GoalIntent, options: &OutputOptions) -> SavingsResult<()> {
    if options.json {
        return print_json(intent);
    }

    let symbol = &options.symbol;
    match intent {
        GoalIntent::Save { id: None, goal } => {
            println!(
                "Create goal '{}': {} in '{}'",
                goal.name,
                format_amount(symbol, goal.target_amount),
                goal.category
            );
        }
        GoalIntent::Save { id: Some(id), goal } => {
            println!(
                "Update goal {} '{}': {} in '{}'",
                id,
                goal.name,
                format_amount(symbol, goal.target_amount),
                goal.category
            );
        }
        GoalIntent::DeleteGoal { id } => println!("Delete goal {}", id),
        GoalIntent::AddSavings { goal } => {
            let target = match &goal.sub_category {
                Some(sub) => format!("{} / {}", goal.category, sub),
                None => goal.category.clone(),
            };
            println!("Add funds to '{}' by recording a saving in '{}'", goal.name, target);
        }
        GoalIntent::AddGoal | GoalIntent::EditGoal { .. } => println!("{}", intent.name()),
    }

    Ok(())
}
