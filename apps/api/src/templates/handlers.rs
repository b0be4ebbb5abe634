//! Axum route handlers for the Templates API.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::classifier::{classify, Classification, DEFAULT_CLASSIFICATION};
use crate::analysis::keywords::Profession;
use crate::errors::AppError;
use crate::models::answers::AnswersBundle;
use crate::models::lenient;
use crate::templates::catalog::{
    lookup, template_for_classification, templates_for, TemplateVariant,
};
use crate::templates::mood::{theme_for_moods, MoodTheme};

#[derive(Debug, Deserialize)]
pub struct SelectTemplateRequest {
    #[serde(default, deserialize_with = "lenient::object")]
    pub answers: Option<AnswersBundle>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub moods: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SelectTemplateResponse {
    /// `None` when no answers were supplied; the template then falls back
    /// to the default classification.
    pub recommendation: Option<Classification>,
    pub template: &'static TemplateVariant,
    pub theme: &'static MoodTheme,
}

/// Catalog entries of one profession, for the template picker.
#[derive(Debug, Serialize)]
pub struct TemplateGroup {
    pub profession: Profession,
    pub label: &'static str,
    pub templates: Vec<&'static TemplateVariant>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateGroup>> {
    Json(
        Profession::ALL
            .into_iter()
            .map(|profession| TemplateGroup {
                profession,
                label: profession.label(),
                templates: templates_for(profession).collect(),
            })
            .collect(),
    )
}

/// GET /api/v1/templates/:profession/:strength
pub async fn handle_get_template(
    Path((profession, strength)): Path<(String, String)>,
) -> Result<Json<&'static TemplateVariant>, AppError> {
    lookup(&profession, &strength).map(Json).ok_or_else(|| {
        AppError::NotFound(format!("No template for {profession}/{strength}"))
    })
}

/// POST /api/v1/templates/select
///
/// Classifies the onboarding answers and returns the matching template
/// variant together with the colour theme of the first selected mood.
pub async fn handle_select_template(
    Json(request): Json<SelectTemplateRequest>,
) -> Json<SelectTemplateResponse> {
    let recommendation = classify(request.answers.as_ref());
    let template =
        template_for_classification(recommendation.as_ref().unwrap_or(&DEFAULT_CLASSIFICATION));
    let theme = theme_for_moods(&request.moods);

    info!(
        "Selected template {} with mood {}",
        template.name, theme.mood
    );

    Json(SelectTemplateResponse {
        recommendation,
        template,
        theme,
    })
}
