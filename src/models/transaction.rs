//! Budget item model
//!
//! A budget item is a recorded financial event: a type, a category (and
//! optionally a subcategory) and the amount that actually moved.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of financial event a budget item records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Saving,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Saving => write!(f, "Saving"),
        }
    }
}

/// A recorded transaction in the budget ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    /// Free-form label
    #[serde(default)]
    pub name: String,

    /// What kind of event this is
    #[serde(rename = "type")]
    pub item_type: TransactionType,

    /// Category name
    pub category: String,

    /// Subcategory name, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    /// The amount that actually moved
    pub actual_amount: f64,
}

impl BudgetItem {
    /// Create a new budget item
    pub fn new(item_type: TransactionType, category: impl Into<String>, actual_amount: f64) -> Self {
        Self {
            name: String::new(),
            item_type,
            category: category.into(),
            sub_category: None,
            actual_amount,
        }
    }

    /// Create a saving item for a category
    pub fn saving(category: impl Into<String>, actual_amount: f64) -> Self {
        Self::new(TransactionType::Saving, category, actual_amount)
    }

    /// Set the subcategory
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Whether this item records money put aside into savings
    pub fn is_saving(&self) -> bool {
        self.item_type == TransactionType::Saving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saving_item() {
        let item = BudgetItem::saving("Vacation", 300.0).with_sub_category("Flights");
        assert!(item.is_saving());
        assert_eq!(item.category, "Vacation");
        assert_eq!(item.sub_category.as_deref(), Some("Flights"));
    }

    #[test]
    fn test_type_serialization() {
        let json = serde_json::to_string(&TransactionType::Saving).unwrap();
        assert_eq!(json, "\"SAVING\"");
    }

    #[test]
    fn test_deserialize_contract_fields() {
        let json = r#"{"type":"SAVING","category":"Vacation","actualAmount":12.5}"#;
        let item: BudgetItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, TransactionType::Saving);
        assert_eq!(item.sub_category, None);
        assert_eq!(item.actual_amount, 12.5);
    }
}
