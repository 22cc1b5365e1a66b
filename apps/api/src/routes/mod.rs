pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::careers::handlers as careers;
use crate::quiz::handlers as quiz;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Careers API
        .route("/api/v1/careers", get(careers::handle_list_careers))
        .route("/api/v1/careers/match", post(careers::handle_match_careers))
        // Quiz API
        .route("/api/v1/quiz/score", post(quiz::handle_score))
        .route("/api/v1/quiz/sessions", post(quiz::handle_create_session))
        .route(
            "/api/v1/quiz/sessions/:id",
            get(quiz::handle_get_session).delete(quiz::handle_delete_session),
        )
        .route("/api/v1/quiz/sessions/:id/start", post(quiz::handle_start))
        .route("/api/v1/quiz/sessions/:id/answers", post(quiz::handle_answer))
        .route("/api/v1/quiz/sessions/:id/submit", post(quiz::handle_submit))
        .route("/api/v1/quiz/sessions/:id/retake", post(quiz::handle_retake))
        // Users API
        .route(
            "/api/v1/users/display-name",
            get(users::handle_display_name),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(config: Config) -> Router {
        build_router(AppState::new(config))
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_careers_returns_catalog() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/careers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
        assert!(body[0]["requirements"]["Technical"].is_u64());
    }

    #[tokio::test]
    async fn test_match_ranks_all_careers() {
        let payload = json!({ "profile": { "Technical": 90, "Analytical": 90, "Sports": 10 } });
        let (status, body) =
            send(&app(), Method::POST, "/api/v1/careers/match", Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 4);
        let scores: Vec<u64> = matches
            .iter()
            .map(|m| m["match_score"].as_u64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert!(scores.iter().all(|&s| s <= 100));
    }

    #[tokio::test]
    async fn test_match_strict_rejects_unknown_category() {
        let app = app_with(Config {
            strict_validation: true,
            ..Config::default()
        });
        let payload = json!({ "profile": { "Sports": 10 } });
        let (status, body) = send(&app, Method::POST, "/api/v1/careers/match", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_CATEGORY");
    }

    #[tokio::test]
    async fn test_stateless_score() {
        let payload = json!({
            "question_ids": ["tech-1", "tech-2", "creative-1", "ghost"],
            "answers": [
                { "question_id": "tech-1", "selected_option": "Agree" },
                { "question_id": "creative-1", "selected_option": "Agree" }
            ]
        });
        let (status, body) = send(&app(), Method::POST, "/api/v1/quiz/score", Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["Technical"], 50);
        assert_eq!(body["profile"]["Creative"], 100);
        assert_eq!(body["profile"]["Leadership"], 0);
        assert_eq!(body["matches"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_stateless_score_strict_rejects_unknown_question() {
        let app = app_with(Config {
            strict_validation: true,
            ..Config::default()
        });
        let payload = json!({ "question_ids": ["ghost"], "answers": [] });
        let (status, body) = send(&app, Method::POST, "/api/v1/quiz/score", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_QUESTION");
    }

    #[tokio::test]
    async fn test_stateless_score_strict_rejects_unknown_option() {
        let app = app_with(Config {
            strict_validation: true,
            ..Config::default()
        });
        let payload = json!({
            "question_ids": ["tech-1"],
            "answers": [{ "question_id": "tech-1", "selected_option": "Not an option" }]
        });
        let (status, body) = send(&app, Method::POST, "/api/v1/quiz/score", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_OPTION");
    }

    #[tokio::test]
    async fn test_out_of_range_ttl_neither_panics_nor_drops_live_sessions() {
        for ttl in [i64::MAX, -1] {
            let app = app_with(Config {
                session_ttl_minutes: ttl,
                ..Config::default()
            });

            let (status, first) = send(&app, Method::POST, "/api/v1/quiz/sessions", None).await;
            assert_eq!(status, StatusCode::CREATED);
            let (status, _) = send(&app, Method::POST, "/api/v1/quiz/sessions", None).await;
            assert_eq!(status, StatusCode::CREATED);

            let id = first["id"].as_str().unwrap();
            let (status, _) =
                send(&app, Method::GET, &format!("/api/v1/quiz/sessions/{id}"), None).await;
            assert_eq!(status, StatusCode::OK, "ttl = {ttl}");
        }
    }

    #[tokio::test]
    async fn test_session_full_flow() {
        let app = app();

        let (status, created) = send(&app, Method::POST, "/api/v1/quiz/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "not_started");
        let id = created["id"].as_str().unwrap().to_string();

        let (status, started) =
            send(&app, Method::POST, &format!("/api/v1/quiz/sessions/{id}/start"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(started["status"], "in_progress");
        let questions = started["questions"].as_array().unwrap().clone();
        assert_eq!(questions.len(), 12);

        let first = &questions[0];
        let answer = json!({
            "question_id": first["id"],
            "selected_option": first["options"][0],
        });
        let (status, answered) = send(
            &app,
            Method::POST,
            &format!("/api/v1/quiz/sessions/{id}/answers"),
            Some(answer),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(answered["question_index"], 1);

        let (status, submitted) =
            send(&app, Method::POST, &format!("/api/v1/quiz/sessions/{id}/submit"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(submitted["status"], "submitted");
        assert_eq!(submitted["matches"].as_array().unwrap().len(), 4);

        let (status, body) =
            send(&app, Method::POST, &format!("/api/v1/quiz/sessions/{id}/submit"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "INVALID_STATE");

        let (status, reset) =
            send(&app, Method::POST, &format!("/api/v1/quiz/sessions/{id}/retake"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reset["status"], "not_started");
        assert!(reset.get("answers").is_none());

        let (status, _) =
            send(&app, Method::DELETE, &format!("/api/v1/quiz/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) =
            send(&app, Method::GET, &format!("/api/v1/quiz/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_display_name() {
        let (status, body) = send(
            &app(),
            Method::GET,
            "/api/v1/users/display-name?raw=neha.k%40example.com",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["display_name"], "Nehak");
    }
}
