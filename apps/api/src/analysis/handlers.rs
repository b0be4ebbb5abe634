//! Axum route handlers for the Analysis API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::classifier::{
    assemble_text, score_categories, select_best, CategoryScore, Classification,
};
use crate::analysis::project_ranker::{recommend_projects, ProjectRecommendation};
use crate::errors::AppError;
use crate::models::answers::{AnswersBundle, Project};
use crate::models::lenient;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default, deserialize_with = "lenient::object")]
    pub answers: Option<AnswersBundle>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub recommendation: Option<Classification>,
    pub scores: Vec<CategoryScore>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendProjectsRequest {
    #[serde(default)]
    pub projects: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_type: Option<String>,
}

/// POST /api/v1/analysis/classify
///
/// Suggests a profession and strength from onboarding answers.
/// `answers: null` yields `recommendation: null` rather than an error.
pub async fn handle_classify(Json(request): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    let Some(answers) = request.answers else {
        debug!("Classify called without answers");
        return Json(ClassifyResponse {
            recommendation: None,
            scores: Vec::new(),
        });
    };

    let scores = score_categories(&assemble_text(&answers));
    let recommendation = Some(select_best(&scores));

    info!("Classified answers as {:?}", recommendation);

    Json(ClassifyResponse {
        recommendation,
        scores,
    })
}

/// POST /api/v1/projects/recommend
///
/// Picks up to six projects to feature for the given job type.
pub async fn handle_recommend_projects(
    Json(request): Json<RecommendProjectsRequest>,
) -> Result<Json<ProjectRecommendation>, AppError> {
    let projects: Vec<Project> = match request.projects {
        Some(serde_json::Value::Array(items)) => lenient::parse_records(items),
        _ => {
            return Err(AppError::Validation(
                "projects array is required".to_string(),
            ))
        }
    };

    let job_type = match request.job_type {
        Some(j) if !j.is_empty() => j,
        _ => return Err(AppError::Validation("job_type is required".to_string())),
    };

    let recommendation = recommend_projects(&projects, &job_type);

    info!(
        "Recommended projects for {}: {:?}",
        job_type, recommendation.featured_project_ids
    );

    Ok(Json(recommendation))
}
