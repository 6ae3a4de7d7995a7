//! Budget snapshot input
//!
//! The command-line front end works over a caller-supplied JSON document
//! holding goals, budget items and categories. The document is only ever
//! read; goal changes are printed as intents for the caller to apply.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SavingsError;
use crate::models::{BudgetItem, Category, SavingsGoal};

/// Everything the goal views need, as one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl BudgetSnapshot {
    /// Read a snapshot, returning an error if the file doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SavingsError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SavingsError::Io(format!(
                "Snapshot not found: {}",
                path.display()
            )));
        }

        let file = File::open(path)
            .map_err(|e| SavingsError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

        let snapshot: Self = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            SavingsError::Json(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            goals = snapshot.goals.len(),
            items = snapshot.items.len(),
            categories = snapshot.categories.len(),
            "loaded snapshot from {}",
            path.display()
        );

        Ok(snapshot)
    }

    /// Check that every category and goal is well-formed
    ///
    /// A goal must also link to an existing savings category, and its
    /// subcategory, when set, must belong to that category.
    pub fn validate(&self) -> Result<(), SavingsError> {
        for category in &self.categories {
            category
                .validate()
                .map_err(|e| SavingsError::Validation(format!("{}: {}", category.name, e)))?;
        }

        for goal in &self.goals {
            goal.validate()
                .map_err(|e| SavingsError::Validation(format!("{}: {}", goal.name, e)))?;
            self.check_goal_category(goal)?;
        }

        Ok(())
    }

    fn check_goal_category(&self, goal: &SavingsGoal) -> Result<(), SavingsError> {
        let category = self
            .categories
            .iter()
            .find(|c| c.name == goal.category)
            .ok_or_else(|| SavingsError::category_not_found(&goal.category))?;

        if !category.is_savings() {
            return Err(SavingsError::Validation(format!(
                "{}: '{}' is not a savings category",
                goal.name, category.name
            )));
        }

        if let Some(sub) = &goal.sub_category {
            if !category.has_sub_category(sub) {
                return Err(SavingsError::Validation(format!(
                    "{}: '{}' is not a subcategory of '{}'",
                    goal.name, sub, category.name
                )));
            }
        }

        Ok(())
    }
}
