// Template selection: the classifier's label pair picks a layout variant,
// the first onboarding mood picks its colour theme.

pub mod catalog;
pub mod handlers;
pub mod mood;
