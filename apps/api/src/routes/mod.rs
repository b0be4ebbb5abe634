pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assistant::handlers as assistant;
use crate::profile::handlers as profile;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis/classify", post(analysis::handle_classify))
        .route(
            "/api/v1/projects/recommend",
            post(analysis::handle_recommend_projects),
        )
        // Profile API
        .route(
            "/api/v1/profile/completeness",
            post(profile::handle_completeness),
        )
        .route(
            "/api/v1/validate/signup",
            post(profile::handle_validate_signup),
        )
        // Templates API
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/templates/select",
            post(templates::handle_select_template),
        )
        .route(
            "/api/v1/templates/:profession/:strength",
            get(templates::handle_get_template),
        )
        // AI assistant
        .route(
            "/api/v1/ai/chat-answers",
            post(assistant::handle_chat_answers),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Map, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::classifier::Classification;
    use crate::assistant::drafter::{fill_required_answers, AnswerDrafter};
    use crate::config::Config;
    use crate::errors::AppError;

    /// Echoes the hint back instead of calling a provider.
    struct StubDrafter;

    #[async_trait]
    impl AnswerDrafter for StubDrafter {
        async fn draft(
            &self,
            portfolio_context: &str,
            hint: Option<Classification>,
        ) -> Result<Map<String, Value>, AppError> {
            let mut answers = Map::new();
            answers.insert("core_skills".to_string(), json!(portfolio_context));
            answers.insert("hint".to_string(), json!(hint));
            Ok(fill_required_answers(answers))
        }

        fn backend(&self) -> &str {
            "stub"
        }
    }

    fn test_config() -> Config {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            gemini_api_key: None,
            gemini_model: "test-model".to_string(),
            cors_permissive: true,
        }
    }

    fn app(with_drafter: bool) -> Router {
        let drafter: Option<Arc<dyn AnswerDrafter>> = if with_drafter {
            Some(Arc::new(StubDrafter))
        } else {
            None
        };
        build_router(AppState {
            config: test_config(),
            drafter,
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(false), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["ai"]["enabled"], false);
        assert_eq!(body["ai"]["model"], "test-model");
    }

    #[tokio::test]
    async fn test_classify_scenario() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/analysis/classify",
            Some(json!({
                "answers": {
                    "intro": "I fixed a critical bug and optimized deploy pipeline",
                    "projects": [{ "title": "API build" }]
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["recommendation"],
            json!({ "profession": "developer", "strength": "impl" })
        );
        let scores = body["scores"].as_array().unwrap();
        assert_eq!(scores.len(), 12);
        // the reported winner is the first pair holding the top score
        let top = scores.iter().map(|s| s["score"].as_u64().unwrap()).max().unwrap();
        let winner = scores
            .iter()
            .find(|s| s["score"].as_u64() == Some(top))
            .unwrap();
        assert_eq!(top, 3);
        assert_eq!(winner["profession"], body["recommendation"]["profession"]);
        assert_eq!(winner["strength"], body["recommendation"]["strength"]);
    }

    #[tokio::test]
    async fn test_classify_null_answers() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/analysis/classify",
            Some(json!({ "answers": null })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendation"], Value::Null);
        assert_eq!(body["scores"], json!([]));
    }

    #[tokio::test]
    async fn test_classify_tolerates_malformed_projects() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/analysis/classify",
            Some(json!({ "answers": { "projects": { "title": "logo" } } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["recommendation"],
            json!({ "profession": "developer", "strength": "impl" })
        );
    }

    #[tokio::test]
    async fn test_classify_non_object_answers_use_default() {
        for answers in [json!("react"), json!(5), json!(["logo"])] {
            let (status, body) = send(
                app(false),
                "POST",
                "/api/v1/analysis/classify",
                Some(json!({ "answers": answers })),
            )
            .await;
            assert_eq!(status, StatusCode::OK, "answers = {answers}");
            assert_eq!(
                body["recommendation"],
                json!({ "profession": "developer", "strength": "impl" }),
                "answers = {answers}"
            );
            assert!(body["scores"]
                .as_array()
                .unwrap()
                .iter()
                .all(|s| s["score"] == 0));
        }
    }

    #[tokio::test]
    async fn test_select_template_with_string_answers() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/templates/select",
            Some(json!({ "answers": "brand logo", "moods": ["#차분한"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["recommendation"],
            json!({ "profession": "developer", "strength": "impl" })
        );
        assert_eq!(body["template"]["name"], "Bento");
    }

    #[tokio::test]
    async fn test_completeness_with_non_object_profile() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/profile/completeness",
            Some(json!({ "profile": ["김하늘"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"]["percentage"], 0);
        assert_eq!(body["report"]["missing"].as_array().unwrap().len(), 13);
    }

    #[tokio::test]
    async fn test_recommend_projects_requires_job_type() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/projects/recommend",
            Some(json!({ "projects": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recommend_projects_requires_array() {
        let (status, _) = send(
            app(false),
            "POST",
            "/api/v1/projects/recommend",
            Some(json!({ "projects": "nope", "job_type": "designer" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recommend_projects() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/projects/recommend",
            Some(json!({
                "projects": [
                    { "title": "Poster" },
                    { "title": "Figma UX prototype", "desc": "wireframe and user flow" }
                ],
                "job_type": "designer"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["featured_project_ids"], json!([1, 0]));
        assert_eq!(body["total_projects"], 2);
    }

    #[tokio::test]
    async fn test_completeness() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/profile/completeness",
            Some(json!({
                "profile": { "name": "김하늘", "email": "sky@example.com" },
                "previous_percentage": 0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"]["percentage"], 10);
        assert_eq!(body["level"]["level"], "beginner");
        assert_eq!(body["next_steps"].as_array().unwrap().len(), 3);
        assert_eq!(body["has_minimum_profile"], false);
        assert_eq!(body["progress_message"], "✨ +10% 증가! 잘하고 있어요!");
    }

    #[tokio::test]
    async fn test_validate_signup() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/validate/signup",
            Some(json!({ "email": "하늘@example.com", "password": "Password1", "name": "Sky" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
        assert_eq!(body["email_valid"], false);
        assert_eq!(body["password_strength"], "medium");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let (status, body) = send(app(false), "GET", "/api/v1/templates", None).await;
        assert_eq!(status, StatusCode::OK);
        let groups = body.as_array().unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[3]["label"], "기획자");
        let total: usize = groups
            .iter()
            .map(|g| g["templates"].as_array().unwrap().len())
            .sum();
        assert_eq!(total, 12);
    }

    #[tokio::test]
    async fn test_get_template() {
        let (status, body) = send(app(false), "GET", "/api/v1/templates/marketer/deck", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, body) =
            send(app(false), "GET", "/api/v1/templates/marketer/strategy", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Deck");
    }

    #[tokio::test]
    async fn test_select_template() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/templates/select",
            Some(json!({
                "answers": { "career_summary": "브랜드 스토리와 컨셉 기획" },
                "moods": ["#미니멀한"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"]["name"], "Magazine");
        assert_eq!(body["theme"]["mood"], "#미니멀한");
    }

    #[tokio::test]
    async fn test_select_template_without_answers() {
        let (status, body) =
            send(app(false), "POST", "/api/v1/templates/select", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendation"], Value::Null);
        assert_eq!(body["template"]["name"], "Bento");
        assert_eq!(body["theme"]["mood"], "#신뢰감있는");
    }

    #[tokio::test]
    async fn test_chat_answers_unavailable_without_provider() {
        let (status, body) = send(
            app(false),
            "POST",
            "/api/v1/ai/chat-answers",
            Some(json!({ "portfolio_context": "결제 API 프로젝트" })),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "LLM_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_chat_answers_rejects_empty_context() {
        let (status, _) = send(
            app(true),
            "POST",
            "/api/v1/ai/chat-answers",
            Some(json!({ "portfolio_context": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_answers_passes_hint() {
        let (status, body) = send(
            app(true),
            "POST",
            "/api/v1/ai/chat-answers",
            Some(json!({
                "portfolio_context": "결제 API 프로젝트",
                "answers": { "intro": "운영 효율 개선과 프로세스 관리" }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "stub");
        assert_eq!(body["hint"], json!({ "profession": "service", "strength": "ops" }));
        assert_eq!(body["answers"]["core_skills"], "결제 API 프로젝트");
        assert!(body["answers"]["best_project"].is_string());
    }

    #[tokio::test]
    async fn test_chat_answers_array_answers_give_default_hint() {
        let (status, body) = send(
            app(true),
            "POST",
            "/api/v1/ai/chat-answers",
            Some(json!({ "portfolio_context": "로고 디자인", "answers": ["logo"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hint"], json!({ "profession": "developer", "strength": "impl" }));
    }
}
