//! Savings goals dashboard
//!
//! Pairs every goal with its current progress and turns dashboard actions
//! into [`GoalIntent`]s for the caller.

use serde::Serialize;

use crate::error::{SavingsError, SavingsResult};
use crate::intent::GoalIntent;
use crate::models::{BudgetItem, GoalId, SavingsGoal};
use crate::services::progress::{calculate_progress, GoalProgress};

/// One goal as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCard<'a> {
    pub goal: &'a SavingsGoal,
    pub progress: GoalProgress,
}

/// Read-only dashboard over the caller's goals and items
#[derive(Debug, Clone, Copy)]
pub struct SavingsGoalsView<'a> {
    goals: &'a [SavingsGoal],
    items: &'a [BudgetItem],
    symbol: &'a str,
}

impl<'a> SavingsGoalsView<'a> {
    pub fn new(goals: &'a [SavingsGoal], items: &'a [BudgetItem], symbol: &'a str) -> Self {
        Self {
            goals,
            items,
            symbol,
        }
    }

    /// Currency symbol amounts are shown with
    pub fn symbol(&self) -> &'a str {
        self.symbol
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// A card per goal, in the order the goals were given
    pub fn cards(&self) -> Vec<GoalCard<'a>> {
        self.goals.iter().map(|goal| self.card_for(goal)).collect()
    }

    /// Card for a single goal
    pub fn card(&self, id: &GoalId) -> SavingsResult<GoalCard<'a>> {
        self.find(id).map(|goal| self.card_for(goal))
    }

    fn card_for(&self, goal: &'a SavingsGoal) -> GoalCard<'a> {
        GoalCard {
            goal,
            progress: calculate_progress(goal, self.items),
        }
    }

    fn find(&self, id: &GoalId) -> SavingsResult<&'a SavingsGoal> {
        self.goals
            .iter()
            .find(|g| &g.id == id)
            .ok_or_else(|| SavingsError::goal_not_found(id.to_string()))
    }

    /// Look a goal up by full id, short id, or exact name
    pub fn lookup(&self, query: &str) -> SavingsResult<&'a SavingsGoal> {
        self.goals
            .iter()
            .find(|g| g.id.matches(query))
            .or_else(|| self.goals.iter().find(|g| g.name == query))
            .ok_or_else(|| SavingsError::goal_not_found(query))
    }

    /// "New Goal" pressed
    pub fn add_goal(&self) -> GoalIntent {
        tracing::debug!("dashboard: add goal");
        GoalIntent::AddGoal
    }

    /// Edit pressed on a goal card
    pub fn edit_goal(&self, id: &GoalId) -> SavingsResult<GoalIntent> {
        let goal = self.find(id)?;
        tracing::debug!(goal = %id, "dashboard: edit goal");
        Ok(GoalIntent::EditGoal { goal: goal.clone() })
    }

    /// Delete pressed on a goal card
    pub fn delete_goal(&self, id: &GoalId) -> SavingsResult<GoalIntent> {
        self.find(id)?;
        tracing::debug!(goal = %id, "dashboard: delete goal");
        Ok(GoalIntent::DeleteGoal { id: id.clone() })
    }

    /// "Add Funds" pressed on a goal card
    pub fn add_funds(&self, id: &GoalId) -> SavingsResult<GoalIntent> {
        let goal = self.find(id)?;
        tracing::debug!(goal = %id, "dashboard: add funds");
        Ok(GoalIntent::AddSavings { goal: goal.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalDraft, GOAL_COLORS};

    fn goal(name: &str, target: f64, initial: f64, category: &str) -> SavingsGoal {
        SavingsGoal::new(GoalDraft {
            name: name.into(),
            target_amount: target,
            initial_amount: initial,
            deadline: None,
            category: category.into(),
            sub_category: None,
            color: GOAL_COLORS[2].into(),
        })
    }

    fn fixture() -> (Vec<SavingsGoal>, Vec<BudgetItem>) {
        let goals = vec![
            goal("Trip", 1000.0, 200.0, "Vacation"),
            goal("Laptop", 100.0, 150.0, "X"),
        ];
        let items = vec![
            BudgetItem::saving("Vacation", 300.0),
            BudgetItem::saving("Groceries", 50.0),
        ];
        (goals, items)
    }

    #[test]
    fn test_cards_follow_goal_order() {
        let (goals, items) = fixture();
        let view = SavingsGoalsView::new(&goals, &items, "€");

        let cards = view.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].goal.name, "Trip");
        assert_eq!(cards[0].progress.total_saved, 500.0);
        assert_eq!(cards[0].progress.percentage, 50.0);
        assert_eq!(cards[1].goal.name, "Laptop");
        assert_eq!(cards[1].progress.percentage, 100.0);
        assert_eq!(view.symbol(), "€");
    }

    #[test]
    fn test_actions_produce_intents() {
        let (goals, items) = fixture();
        let view = SavingsGoalsView::new(&goals, &items, "$");
        let trip = &goals[0];

        assert_eq!(view.add_goal(), GoalIntent::AddGoal);
        assert_eq!(
            view.edit_goal(&trip.id).unwrap(),
            GoalIntent::EditGoal { goal: trip.clone() }
        );
        assert_eq!(
            view.delete_goal(&trip.id).unwrap(),
            GoalIntent::DeleteGoal { id: trip.id.clone() }
        );
        assert_eq!(
            view.add_funds(&trip.id).unwrap(),
            GoalIntent::AddSavings { goal: trip.clone() }
        );
    }

    #[test]
    fn test_unknown_goal_is_not_found() {
        let (goals, items) = fixture();
        let view = SavingsGoalsView::new(&goals, &items, "$");

        let err = view.delete_goal(&GoalId::new()).unwrap_err();
        assert!(err.is_not_found());
        assert!(view.card(&GoalId::new()).is_err());
    }

    #[test]
    fn test_add_funds_leaves_items_untouched() {
        let (goals, items) = fixture();
        let view = SavingsGoalsView::new(&goals, &items, "$");

        view.add_funds(&goals[0].id).unwrap();
        assert_eq!(view.card(&goals[0].id).unwrap().progress.total_saved, 500.0);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_lookup() {
        let (goals, items) = fixture();
        let view = SavingsGoalsView::new(&goals, &items, "$");

        assert_eq!(view.lookup("Laptop").unwrap().id, goals[1].id);
        assert_eq!(view.lookup(&goals[0].id.to_string()).unwrap().name, "Trip");
        assert!(view.lookup("laptop").is_err());
    }
}
