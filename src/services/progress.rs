//! Savings goal progress
//!
//! Derives how far a goal has come from its starting balance and the saving
//! items recorded under its category. Nothing here is cached: progress is
//! recomputed from the current goal and item list on every call.

use serde::Serialize;

use crate::models::{BudgetItem, SavingsGoal};

/// Derived progress of one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Starting balance plus every matching saving item
    pub total_saved: f64,
    /// Share of the target reached, in `[0, 100]`
    pub percentage: f64,
    /// Amount still missing, never negative
    pub remaining: f64,
}

impl GoalProgress {
    /// Whether the goal has been reached
    pub fn is_complete(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Whether `item` counts toward `goal`
///
/// The item must be a saving, filed under exactly the goal's category, and
/// under exactly the goal's subcategory when the goal has one.
pub fn counts_toward(goal: &SavingsGoal, item: &BudgetItem) -> bool {
    item.is_saving()
        && item.category == goal.category
        && goal
            .sub_category
            .as_ref()
            .map_or(true, |sub| item.sub_category.as_ref() == Some(sub))
}

/// Sum of the items that count toward `goal`
pub fn saved_from_items<'a, I>(goal: &SavingsGoal, items: I) -> f64
where
    I: IntoIterator<Item = &'a BudgetItem>,
{
    items
        .into_iter()
        .filter(|item| counts_toward(goal, item))
        .map(|item| item.actual_amount)
        .sum()
}

/// Compute progress for one goal against a list of items
pub fn calculate_progress<'a, I>(goal: &SavingsGoal, items: I) -> GoalProgress
where
    I: IntoIterator<Item = &'a BudgetItem>,
{
    let total_saved = goal.initial_amount + saved_from_items(goal, items);
    let remaining = (goal.target_amount - total_saved).max(0.0);

    // A non-positive target has nothing left to save toward.
    let percentage = if goal.target_amount > 0.0 {
        (total_saved / goal.target_amount * 100.0).clamp(0.0, 100.0)
    } else {
        100.0
    };

    GoalProgress {
        total_saved,
        percentage,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalDraft, TransactionType, GOAL_COLORS};

    fn goal(target: f64, initial: f64, category: &str, sub: Option<&str>) -> SavingsGoal {
        SavingsGoal::new(GoalDraft {
            name: "Goal".into(),
            target_amount: target,
            initial_amount: initial,
            deadline: None,
            category: category.into(),
            sub_category: sub.map(String::from),
            color: GOAL_COLORS[1].into(),
        })
    }

    #[test]
    fn test_vacation_scenario() {
        let goal = goal(1000.0, 200.0, "Vacation", None);
        let items = vec![
            BudgetItem::saving("Vacation", 300.0),
            BudgetItem::saving("Groceries", 50.0),
        ];

        let progress = calculate_progress(&goal, &items);
        assert_eq!(progress.total_saved, 500.0);
        assert_eq!(progress.percentage, 50.0);
        assert_eq!(progress.remaining, 500.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_overfunded_goal_is_capped() {
        let goal = goal(100.0, 150.0, "X", None);

        let progress = calculate_progress(&goal, &[]);
        assert_eq!(progress.total_saved, 150.0);
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_exactly_reached_is_one_hundred() {
        let goal = goal(400.0, 100.0, "Car", None);
        let items = vec![BudgetItem::saving("Car", 300.0)];

        let progress = calculate_progress(&goal, &items);
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
    }

    #[test]
    fn test_only_saving_items_count() {
        let goal = goal(1000.0, 0.0, "Vacation", None);
        let items = vec![
            BudgetItem::new(TransactionType::Expense, "Vacation", 80.0),
            BudgetItem::new(TransactionType::Income, "Vacation", 900.0),
            BudgetItem::saving("Vacation", 100.0),
        ];

        assert_eq!(calculate_progress(&goal, &items).total_saved, 100.0);
    }

    #[test]
    fn test_category_match_is_exact() {
        let goal = goal(1000.0, 0.0, "Vacation", None);
        let items = vec![
            BudgetItem::saving("vacation", 100.0),
            BudgetItem::saving("Vacation ", 100.0),
        ];

        assert_eq!(calculate_progress(&goal, &items).total_saved, 0.0);
    }

    #[test]
    fn test_subcategory_scoped_goal() {
        let goal = goal(1000.0, 0.0, "Vacation", Some("Flights"));
        let items = vec![
            BudgetItem::saving("Vacation", 100.0).with_sub_category("Flights"),
            BudgetItem::saving("Vacation", 40.0).with_sub_category("Hotels"),
            BudgetItem::saving("Vacation", 25.0),
        ];

        assert_eq!(calculate_progress(&goal, &items).total_saved, 100.0);
    }

    #[test]
    fn test_unscoped_goal_takes_every_subcategory() {
        let goal = goal(1000.0, 0.0, "Vacation", None);
        let items = vec![
            BudgetItem::saving("Vacation", 100.0).with_sub_category("Flights"),
            BudgetItem::saving("Vacation", 40.0).with_sub_category("Hotels"),
            BudgetItem::saving("Vacation", 25.0),
        ];

        assert_eq!(calculate_progress(&goal, &items).total_saved, 165.0);
    }

    #[test]
    fn test_order_independent() {
        let goal = goal(1000.0, 10.0, "Vacation", None);
        let mut items = vec![
            BudgetItem::saving("Vacation", 100.0),
            BudgetItem::saving("Groceries", 7.0),
            BudgetItem::saving("Vacation", 250.0),
        ];

        let forward = calculate_progress(&goal, &items);
        items.reverse();
        let backward = calculate_progress(&goal, &items);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_negative_total_is_floored() {
        let goal = goal(100.0, 0.0, "Vacation", None);
        let items = vec![BudgetItem::saving("Vacation", -50.0)];

        let progress = calculate_progress(&goal, &items);
        assert_eq!(progress.total_saved, -50.0);
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.remaining, 150.0);
    }

    #[test]
    fn test_non_positive_target_does_not_divide() {
        let goal = goal(0.0, 0.0, "Vacation", None);

        let progress = calculate_progress(&goal, &[]);
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(progress.percentage.is_finite());
    }
}
