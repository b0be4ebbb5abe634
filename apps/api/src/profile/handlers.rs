//! Axum route handlers for the Profile API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::lenient;
use crate::models::profile::ProfileData;
use crate::profile::completeness::{
    calculate_completeness, completion_level, has_minimum_profile, next_steps, progress_message,
    CompletenessReport, CompletionLevel, MissingField, DEFAULT_NEXT_STEPS,
};
use crate::profile::validation::{validate_signup, SignupValidation};

#[derive(Debug, Deserialize)]
pub struct CompletenessRequest {
    #[serde(default, deserialize_with = "lenient::object")]
    pub profile: Option<ProfileData>,
    /// Percentage shown before the latest edit, for milestone messages.
    #[serde(default)]
    pub previous_percentage: Option<u32>,
    #[serde(default)]
    pub next_steps_limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CompletenessResponse {
    pub report: CompletenessReport,
    pub level: CompletionLevel,
    pub next_steps: Vec<MissingField>,
    pub has_minimum_profile: bool,
    pub progress_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignupValidationRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// POST /api/v1/profile/completeness
pub async fn handle_completeness(
    Json(request): Json<CompletenessRequest>,
) -> Json<CompletenessResponse> {
    let profile = request.profile.as_ref();
    let report = calculate_completeness(profile);
    let level = completion_level(report.percentage);
    let steps = next_steps(profile, request.next_steps_limit.unwrap_or(DEFAULT_NEXT_STEPS));
    let progress = request
        .previous_percentage
        .and_then(|old| progress_message(old, report.percentage));

    debug!(
        "Profile completeness {}% ({} missing)",
        report.percentage,
        report.missing.len()
    );

    Json(CompletenessResponse {
        has_minimum_profile: has_minimum_profile(profile),
        report,
        level,
        next_steps: steps,
        progress_message: progress,
    })
}

/// POST /api/v1/validate/signup
pub async fn handle_validate_signup(
    Json(request): Json<SignupValidationRequest>,
) -> Json<SignupValidation> {
    Json(validate_signup(
        &request.email,
        &request.password,
        &request.name,
    ))
}
