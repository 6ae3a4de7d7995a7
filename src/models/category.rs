//! Category model
//!
//! Categories group budget items by name. Each category declares which
//! transaction types it applies to and an ordered list of subcategories.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// A named grouping of budget items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    #[serde(default)]
    pub id: CategoryId,

    /// Category name, referenced by items and goals
    pub name: String,

    /// Transaction types this category applies to
    #[serde(default)]
    pub types: Vec<TransactionType>,

    /// Subcategory names, in display order
    #[serde(default)]
    pub sub_categories: Vec<String>,
}

impl Category {
    /// Create a new category applying to the given types
    pub fn new(name: impl Into<String>, types: Vec<TransactionType>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            types,
            sub_categories: Vec::new(),
        }
    }

    /// Create a savings category with the given subcategories
    pub fn savings<S: Into<String>>(
        name: impl Into<String>,
        sub_categories: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut category = Self::new(name, vec![TransactionType::Saving]);
        category.sub_categories = sub_categories.into_iter().map(Into::into).collect();
        category
    }

    /// Whether this category applies to the given transaction type
    pub fn accepts(&self, item_type: TransactionType) -> bool {
        self.types.contains(&item_type)
    }

    /// Whether this category can back a savings goal
    pub fn is_savings(&self) -> bool {
        self.accepts(TransactionType::Saving)
    }

    /// Whether `name` is one of this category's subcategories
    pub fn has_sub_category(&self, name: &str) -> bool {
        self.sub_categories.iter().any(|s| s == name)
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        for (i, sub) in self.sub_categories.iter().enumerate() {
            if self.sub_categories[..i].contains(sub) {
                return Err(CategoryValidationError::DuplicateSubCategory(sub.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Categories that can back a savings goal, in their given order
pub fn savings_categories(categories: &[Category]) -> Vec<&Category> {
    categories.iter().filter(|c| c.is_savings()).collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    DuplicateSubCategory(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::DuplicateSubCategory(name) => {
                write!(f, "Duplicate subcategory '{}'", name)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_category() {
        let category = Category::savings("Vacation", ["Flights", "Hotels"]);
        assert!(category.is_savings());
        assert!(!category.accepts(TransactionType::Expense));
        assert!(category.has_sub_category("Hotels"));
        assert!(!category.has_sub_category("hotels"));
    }

    #[test]
    fn test_savings_categories_filter() {
        let categories = vec![
            Category::new("Groceries", vec![TransactionType::Expense]),
            Category::savings("Vacation", Vec::<String>::new()),
            Category::new(
                "Emergency",
                vec![TransactionType::Expense, TransactionType::Saving],
            ),
        ];

        let names: Vec<_> = savings_categories(&categories)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Vacation", "Emergency"]);
    }

    #[test]
    fn test_validation() {
        let mut category = Category::savings("Vacation", ["Flights"]);
        assert!(category.validate().is_ok());

        category.sub_categories.push("Flights".into());
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::DuplicateSubCategory("Flights".into()))
        );

        category.name = "  ".into();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_deserialize_contract_fields() {
        let json = r#"{"name":"Vacation","types":["SAVING"],"subCategories":["Flights"]}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Vacation");
        assert_eq!(category.types, vec![TransactionType::Saving]);
        assert_eq!(category.sub_categories, vec!["Flights".to_string()]);
    }
}
