//! Savings goal form
//!
//! Holds the draft fields of a goal being created or edited and turns them
//! into a [`GoalDraft`] on submit. The controller is either closed or open
//! in create/edit mode; draft data lives only while it is open.

use chrono::NaiveDate;
use rand::rngs::ThreadRng;
use rand::Rng;
use thiserror::Error;

use crate::intent::GoalIntent;
use crate::models::{savings_categories, Category, GoalDraft, SavingsGoal, GOAL_COLORS};

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Why the form refused an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Goal form is not open")]
    NotOpen,

    #[error("Only an existing goal can be deleted")]
    NotEditing,

    #[error("Goal name is required")]
    MissingName,

    #[error("Target amount is required")]
    MissingTargetAmount,

    #[error("Category is required")]
    MissingCategory,

    #[error("Invalid target amount: {0}")]
    InvalidTargetAmount(String),

    #[error("Target amount must be greater than zero")]
    NonPositiveTarget,

    #[error("Starting balance cannot be negative")]
    NegativeInitialAmount,

    #[error("Invalid deadline (use YYYY-MM-DD): {0}")]
    InvalidDeadline(String),

    #[error("'{0}' is not a savings category")]
    UnknownCategory(String),

    #[error("'{0}' is not a subcategory of the selected category")]
    UnknownSubCategory(String),
}

/// What the open form is doing
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(SavingsGoal),
}

/// Draft field values of an open form
#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    pub mode: FormMode,
    pub name: String,
    pub target_amount: String,
    pub initial_amount: String,
    pub deadline: String,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub color: String,
    pub error: Option<FormError>,
}

impl GoalForm {
    fn blank(color: String) -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            target_amount: String::new(),
            initial_amount: "0".to_string(),
            deadline: String::new(),
            category: None,
            sub_category: None,
            color,
            error: None,
        }
    }

    fn from_goal(goal: SavingsGoal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount.to_string(),
            initial_amount: goal.initial_amount.to_string(),
            deadline: goal
                .deadline
                .map(|d| d.format(DEADLINE_FORMAT).to_string())
                .unwrap_or_default(),
            category: Some(goal.category.clone()),
            sub_category: goal.sub_category.clone(),
            color: goal.color.clone(),
            error: None,
            mode: FormMode::Edit(goal),
        }
    }

    /// Whether an existing goal is being edited
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Form heading
    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Savings Goal"
        } else {
            "New Savings Goal"
        }
    }

    /// Submit button label
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Save Changes"
        } else {
            "Create Goal"
        }
    }

    /// Check the draft and build the payload
    pub fn build_draft(&self) -> Result<GoalDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let target_input = self.target_amount.trim();
        if target_input.is_empty() {
            return Err(FormError::MissingTargetAmount);
        }

        let category = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(FormError::MissingCategory)?;

        let target_amount = parse_target_amount(target_input)?;
        let initial_amount = parse_initial_amount(&self.initial_amount);
        if initial_amount < 0.0 {
            return Err(FormError::NegativeInitialAmount);
        }

        let deadline = match self.deadline.trim() {
            "" => None,
            s => Some(
                NaiveDate::parse_from_str(s, DEADLINE_FORMAT)
                    .map_err(|_| FormError::InvalidDeadline(s.to_string()))?,
            ),
        };

        Ok(GoalDraft {
            name: self.name.clone(),
            target_amount,
            initial_amount,
            deadline,
            category: category.to_string(),
            sub_category: self.sub_category.clone(),
            color: self.color.clone(),
        })
    }
}

fn parse_target_amount(input: &str) -> Result<f64, FormError> {
    let amount: f64 = input
        .parse()
        .map_err(|_| FormError::InvalidTargetAmount(input.to_string()))?;

    if !amount.is_finite() {
        return Err(FormError::InvalidTargetAmount(input.to_string()));
    }
    if amount <= 0.0 {
        return Err(FormError::NonPositiveTarget);
    }

    Ok(amount)
}

/// Starting balance, falling back to 0 when empty or unparsable
fn parse_initial_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Form session state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open(GoalForm),
}

/// Drives one goal form session at a time
///
/// The randomness source picks the default color of new goals; seed it in
/// tests for deterministic output.
#[derive(Debug)]
pub struct GoalFormController<R: Rng = ThreadRng> {
    rng: R,
    categories: Vec<Category>,
    state: FormState,
}

impl GoalFormController<ThreadRng> {
    /// Create a controller backed by the thread-local generator
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self::new(rand::rng(), categories)
    }
}

impl<R: Rng> GoalFormController<R> {
    /// Create a closed controller offering the savings categories among
    /// `categories`
    pub fn new(rng: R, categories: Vec<Category>) -> Self {
        Self {
            rng,
            categories,
            state: FormState::Closed,
        }
    }

    /// Current form state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Check if a form session is in progress
    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open(_))
    }

    /// The open form, if any
    pub fn form(&self) -> Option<&GoalForm> {
        match &self.state {
            FormState::Open(form) => Some(form),
            FormState::Closed => None,
        }
    }

    fn form_mut(&mut self) -> Result<&mut GoalForm, FormError> {
        match &mut self.state {
            FormState::Open(form) => {
                form.error = None;
                Ok(form)
            }
            FormState::Closed => Err(FormError::NotOpen),
        }
    }

    /// Categories offered in the category picker
    pub fn category_options(&self) -> Vec<&Category> {
        savings_categories(&self.categories)
    }

    /// Subcategories offered for the selected category
    pub fn sub_category_options(&self) -> &[String] {
        self.selected_category()
            .map(|c| c.sub_categories.as_slice())
            .unwrap_or(&[])
    }

    fn selected_category(&self) -> Option<&Category> {
        let selected = self.form()?.category.as_deref()?;
        self.categories.iter().find(|c| c.name == selected)
    }

    /// Open a blank form with a random palette color
    pub fn open_create(&mut self) {
        let color = GOAL_COLORS[self.rng.random_range(0..GOAL_COLORS.len())].to_string();
        tracing::debug!(color = %color, "opening goal form for a new goal");
        self.state = FormState::Open(GoalForm::blank(color));
    }

    /// Open the form populated from an existing goal
    pub fn open_edit(&mut self, goal: SavingsGoal) {
        tracing::debug!(goal = %goal.id, "opening goal form for editing");
        self.state = FormState::Open(GoalForm::from_goal(goal));
    }

    /// Close the form, discarding the draft
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("goal form cancelled");
        }
        self.state = FormState::Closed;
    }

    /// Set the goal name; a blank name is rejected on submit
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), FormError> {
        self.form_mut()?.name = name.into();
        Ok(())
    }

    /// Set the raw target amount input
    ///
    /// Parsing happens on submit, so partial input is kept as typed.
    pub fn set_target_amount(&mut self, input: impl Into<String>) -> Result<(), FormError> {
        self.form_mut()?.target_amount = input.into();
        Ok(())
    }

    /// Set the raw starting balance input; blank or unparsable means 0
    pub fn set_initial_amount(&mut self, input: impl Into<String>) -> Result<(), FormError> {
        self.form_mut()?.initial_amount = input.into();
        Ok(())
    }

    /// Set the deadline input (`YYYY-MM-DD`, empty for none)
    pub fn set_deadline(&mut self, input: impl Into<String>) -> Result<(), FormError> {
        self.form_mut()?.deadline = input.into();
        Ok(())
    }

    /// Set the color tag; any string is accepted
    pub fn set_color(&mut self, color: impl Into<String>) -> Result<(), FormError> {
        self.form_mut()?.color = color.into();
        Ok(())
    }

    /// Pick the linked category. An empty name clears the selection.
    ///
    /// Any previously chosen subcategory is cleared.
    pub fn select_category(&mut self, name: &str) -> Result<(), FormError> {
        let category = if name.is_empty() {
            None
        } else if self.category_options().iter().any(|c| c.name == name) {
            Some(name.to_string())
        } else {
            return Err(FormError::UnknownCategory(name.to_string()));
        };

        let form = self.form_mut()?;
        form.category = category;
        form.sub_category = None;
        Ok(())
    }

    /// Toggle a subcategory: picking the selected one clears it, picking
    /// another replaces it
    pub fn toggle_sub_category(&mut self, name: &str) -> Result<(), FormError> {
        if !self.is_open() {
            return Err(FormError::NotOpen);
        }
        let offered = self
            .selected_category()
            .is_some_and(|c| c.has_sub_category(name));
        if !offered {
            return Err(FormError::UnknownSubCategory(name.to_string()));
        }

        let form = self.form_mut()?;
        form.sub_category = match form.sub_category.take() {
            Some(current) if current == name => None,
            _ => Some(name.to_string()),
        };
        Ok(())
    }

    /// Drop the subcategory link
    pub fn clear_sub_category(&mut self) -> Result<(), FormError> {
        self.form_mut()?.sub_category = None;
        Ok(())
    }

    /// Validate the draft and close the form
    ///
    /// A rejected submission leaves the form open with the reason recorded on
    /// it and produces no payload.
    pub fn submit(&mut self) -> Result<GoalIntent, FormError> {
        let form = match &mut self.state {
            FormState::Open(form) => form,
            FormState::Closed => return Err(FormError::NotOpen),
        };

        let goal = match form.build_draft() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(error = %err, "goal form submission rejected");
                form.error = Some(err.clone());
                return Err(err);
            }
        };

        let id = match &form.mode {
            FormMode::Edit(existing) => Some(existing.id.clone()),
            FormMode::Create => None,
        };

        tracing::debug!(name = %goal.name, editing = id.is_some(), "goal form submitted");
        self.state = FormState::Closed;
        Ok(GoalIntent::Save { id, goal })
    }

    /// Ask to delete the goal being edited and close the form
    ///
    /// The draft is not validated.
    pub fn delete(&mut self) -> Result<GoalIntent, FormError> {
        let id = match &self.state {
            FormState::Open(GoalForm {
                mode: FormMode::Edit(goal),
                ..
            }) => goal.id.clone(),
            FormState::Open(_) => return Err(FormError::NotEditing),
            FormState::Closed => return Err(FormError::NotOpen),
        };

        tracing::debug!(goal = %id, "goal form delete requested");
        self.state = FormState::Closed;
        Ok(GoalIntent::DeleteGoal { id })
    }
}
