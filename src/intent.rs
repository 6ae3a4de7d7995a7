//! User intents forwarded to the caller
//!
//! The goal views never store, delete or fund goals themselves. Each user
//! action yields one intent and the caller decides what happens next.

use serde::Serialize;

use crate::models::{GoalDraft, GoalId, SavingsGoal};

/// A single user action on the savings goals screens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum GoalIntent {
    /// Open the goal form for a new goal
    AddGoal,

    /// Open the goal form for an existing goal
    EditGoal { goal: SavingsGoal },

    /// Remove a goal
    DeleteGoal { id: GoalId },

    /// Record money toward a goal; the caller picks how
    AddSavings { goal: SavingsGoal },

    /// Store a goal. `id` is set when an existing goal was edited.
    #[serde(rename_all = "camelCase")]
    Save {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<GoalId>,
        goal: GoalDraft,
    },
}

impl GoalIntent {
    /// Short name used in logs and text output
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddGoal => "add-goal",
            Self::EditGoal { .. } => "edit-goal",
            Self::DeleteGoal { .. } => "delete-goal",
            Self::AddSavings { .. } => "add-savings",
            Self::Save { .. } => "save",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_tagging() {
        let json = serde_json::to_value(GoalIntent::AddGoal).unwrap();
        assert_eq!(json["intent"], "addGoal");

        let id = GoalId::new();
        let json = serde_json::to_value(GoalIntent::DeleteGoal { id: id.clone() }).unwrap();
        assert_eq!(json["intent"], "deleteGoal");
        assert_eq!(json["id"], id.as_str());
    }
}
