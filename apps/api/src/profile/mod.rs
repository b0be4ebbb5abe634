// Profile health: completeness scoring and sign-up form checks.
// Pure functions only; HTTP wiring lives in handlers.rs.

pub mod completeness;
pub mod handlers;
pub mod validation;
