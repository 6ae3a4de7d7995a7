//! Savings goal model
//!
//! A savings goal is a target amount linked to a savings category (and
//! optionally one of its subcategories). Progress toward the goal is derived
//! from the saving items recorded under that category; see
//! [`crate::services::progress`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;

/// The fixed palette offered for goal color tags
pub const GOAL_COLORS: [&str; 8] = [
    "#10B981", "#3B82F6", "#6366F1", "#8B5CF6", "#EC4899", "#F59E0B", "#EF4444", "#64748B",
];

const GOAL_COLOR_NAMES: [&str; 8] = [
    "Emerald", "Blue", "Indigo", "Violet", "Pink", "Amber", "Red", "Slate",
];

/// Human-readable name of a palette color, if `color` is one
pub fn color_name(color: &str) -> Option<&'static str> {
    GOAL_COLORS
        .iter()
        .position(|c| c.eq_ignore_ascii_case(color))
        .map(|i| GOAL_COLOR_NAMES[i])
}

/// Resolve a color given either as a palette name ("Indigo") or verbatim
pub fn resolve_color(input: &str) -> String {
    GOAL_COLOR_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(input.trim()))
        .map(|i| GOAL_COLORS[i].to_string())
        .unwrap_or_else(|| input.trim().to_string())
}

/// A savings goal without its identifier
///
/// This is the payload a goal form produces on save. Identifiers are assigned
/// by whoever stores goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub initial_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub color: String,
}

impl GoalDraft {
    /// Validate the draft
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_finite() || !self.initial_amount.is_finite() {
            return Err(GoalValidationError::NonFiniteAmount);
        }

        if self.target_amount <= 0.0 {
            return Err(GoalValidationError::NonPositiveTarget);
        }

        if self.initial_amount < 0.0 {
            return Err(GoalValidationError::NegativeInitialAmount);
        }

        if self.category.trim().is_empty() {
            return Err(GoalValidationError::EmptyCategory);
        }

        Ok(())
    }
}

/// A user-defined savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub initial_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub color: String,
}

impl SavingsGoal {
    /// Create a goal from a draft, assigning a fresh identifier
    pub fn new(draft: GoalDraft) -> Self {
        Self::from_draft(GoalId::new(), draft)
    }

    /// Create a goal from a draft with a known identifier
    pub fn from_draft(id: GoalId, draft: GoalDraft) -> Self {
        Self {
            id,
            name: draft.name,
            target_amount: draft.target_amount,
            initial_amount: draft.initial_amount,
            deadline: draft.deadline,
            category: draft.category,
            sub_category: draft.sub_category,
            color: draft.color,
        }
    }

    /// The goal's fields without its identifier
    pub fn to_draft(&self) -> GoalDraft {
        GoalDraft {
            name: self.name.clone(),
            target_amount: self.target_amount,
            initial_amount: self.initial_amount,
            deadline: self.deadline,
            category: self.category.clone(),
            sub_category: self.sub_category.clone(),
            color: self.color.clone(),
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        self.to_draft().validate()
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    EmptyCategory,
    NonPositiveTarget,
    NegativeInitialAmount,
    NonFiniteAmount,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::EmptyCategory => write!(f, "Goal must be linked to a category"),
            Self::NonPositiveTarget => write!(f, "Target amount must be greater than zero"),
            Self::NegativeInitialAmount => write!(f, "Starting balance cannot be negative"),
            Self::NonFiniteAmount => write!(f, "Amounts must be finite numbers"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> GoalDraft {
        GoalDraft {
            name: "Dream House".into(),
            target_amount: 10000.0,
            initial_amount: 0.0,
            deadline: None,
            category: "Housing".into(),
            sub_category: None,
            color: GOAL_COLORS[0].into(),
        }
    }

    #[test]
    fn test_palette_names() {
        assert_eq!(color_name("#6366F1"), Some("Indigo"));
        assert_eq!(color_name("#6366f1"), Some("Indigo"));
        assert_eq!(color_name("teal"), None);
        assert_eq!(resolve_color("slate"), "#64748B");
        assert_eq!(resolve_color("#123456"), "#123456");
    }

    #[test]
    fn test_from_draft_keeps_id() {
        let goal = SavingsGoal::new(draft());

        let mut edited = goal.to_draft();
        edited.name = "Beach House".into();
        let updated = SavingsGoal::from_draft(goal.id.clone(), edited);

        assert_eq!(updated.id, goal.id);
        assert_eq!(updated.name, "Beach House");
    }

    #[test]
    fn test_goal_with_plain_string_id() {
        let json = r##"{"id":"g1","name":"Car","targetAmount":5000,"category":"Auto","color":"#EF4444"}"##;
        let goal: SavingsGoal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.id.as_str(), "g1");
        assert!(goal.id.matches("g1"));
    }

    #[test]
    fn test_validation() {
        assert!(draft().validate().is_ok());

        let mut d = draft();
        d.target_amount = 0.0;
        assert_eq!(d.validate(), Err(GoalValidationError::NonPositiveTarget));

        let mut d = draft();
        d.initial_amount = -1.0;
        assert_eq!(d.validate(), Err(GoalValidationError::NegativeInitialAmount));

        let mut d = draft();
        d.target_amount = f64::NAN;
        assert_eq!(d.validate(), Err(GoalValidationError::NonFiniteAmount));
    }

    #[test]
    fn test_draft_omits_unset_optionals() {
        let json = serde_json::to_value(draft()).unwrap();
        assert!(json.get("deadline").is_none());
        assert!(json.get("subCategory").is_none());
        assert_eq!(json["targetAmount"], 10000.0);
    }

    #[test]
    fn test_goal_deserialize_defaults() {
        let json = r##"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Trip",
            "targetAmount": 1000,
            "deadline": "2027-06-01",
            "category": "Vacation",
            "color": "#10B981"
        }"##;
        let goal: SavingsGoal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.initial_amount, 0.0);
        assert_eq!(goal.deadline, NaiveDate::from_ymd_opt(2027, 6, 1));
        assert_eq!(goal.sub_category, None);
    }
}
