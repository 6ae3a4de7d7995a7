//! Form state for goal authoring
//!
//! Forms hold raw text input while open and only produce typed models on a
//! successful submit.

pub mod goal;

pub use goal::{FormError, FormMode, FormState, GoalForm, GoalFormController};
