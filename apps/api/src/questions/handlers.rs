//! HTTP handlers for the assessment flow: create a session, walk it
//! forward and backward, record answers, fetch the score.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::MutexGuard;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Question, QuestionSource, RoleDescription};
use crate::questions::provider;
use crate::scoring::{self, ScoreResult};
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub source: QuestionSource,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProgress {
    pub session_id: Uuid,
    pub role_title: String,
    /// Zero-based cursor into the question sequence.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub complete: bool,
    pub current_question_id: Option<String>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl SessionProgress {
    fn of(session: &Session) -> Self {
        Self {
            session_id: session.id(),
            role_title: session.role().title.clone(),
            position: session.cursor(),
            total: session.questions().len(),
            answered: session.answers().len(),
            complete: session.is_complete(),
            current_question_id: session.current().map(|q| q.id.clone()),
            started_at: session.created_at(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub question_id: String,
    pub value: u8,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub questions: Vec<Question>,
    pub answers: HashMap<String, u8>,
}

/// Locks the session store, recovering from poisoning. Answers are
/// last-write-wins per question id, so the map stays consistent even if a
/// writer panicked mid-request; one crashed task must not take the store
/// down with it.
fn lock_sessions(state: &AppState) -> MutexGuard<'_, HashMap<Uuid, Session>> {
    state.sessions.lock().unwrap_or_else(|e| e.into_inner())
}

/// POST /api/v1/sessions
///
/// Runs the question provider for the submitted role. A backend rejection
/// surfaces as 422 INVALID_ROLE and creates no session; transport or
/// parse failures degrade silently to the catalog fallback.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(role): Json<RoleDescription>,
) -> Result<(StatusCode, Json<SessionCreated>), AppError> {
    if role.title.trim().is_empty()
        || role.industry.trim().is_empty()
        || role.experience_level.trim().is_empty()
    {
        return Err(AppError::Validation(
            "title, industry and experienceLevel must be non-empty".to_string(),
        ));
    }

    let mut rng = SmallRng::from_entropy();
    let set = provider::assemble(
        &role,
        &state.backends,
        state.config.blend_catalog_count,
        &mut rng,
    )
    .await?;

    let session = Session::new(role, set);
    let created = SessionCreated {
        session_id: session.id(),
        source: session.source(),
        questions: session.questions().to_vec(),
    };

    lock_sessions(&state).insert(session.id(), session);

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionProgress>, AppError> {
    let sessions = lock_sessions(&state);
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
    Ok(Json(SessionProgress::of(session)))
}

/// POST /api/v1/sessions/:id/answers
///
/// Records one answer and advances the cursor. Boundary violations
/// (unknown question, out-of-range value, unlisted option) are rejected
/// here and never stored.
pub async fn handle_record_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionProgress>, AppError> {
    let mut sessions = lock_sessions(&state);
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;

    session.record_answer(&req.question_id, req.value)?;
    session.advance();
    Ok(Json(SessionProgress::of(session)))
}

/// POST /api/v1/sessions/:id/back
pub async fn handle_retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionProgress>, AppError> {
    let mut sessions = lock_sessions(&state);
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
    session.retreat();
    Ok(Json(SessionProgress::of(session)))
}

/// GET /api/v1/sessions/:id/result
///
/// Only available once every question has an answer; the score is
/// recomputed from the session on each call, never stored.
pub async fn handle_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScoreResult>, AppError> {
    let sessions = lock_sessions(&state);
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;

    if !session.is_complete() {
        return Err(AppError::Incomplete(format!(
            "{} of {} questions answered",
            session.answers().len(),
            session.questions().len()
        )));
    }

    let result = scoring::score(session.questions(), session.answers());
    tracing::info!(
        session = %id,
        score = result.score,
        verdict = result.verdict.label(),
        "session scored"
    );
    Ok(Json(result))
}

/// POST /api/v1/score
///
/// Stateless scoring for callers that hold their own question set and
/// answers, mirroring the session result computation exactly.
pub async fn handle_score(
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    Ok(Json(scoring::score(&req.questions, &req.answers)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::{LlmError, TextGenBackend};
    use crate::routes::build_router;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    /// Backend that always fails, forcing the catalog fallback path so
    /// router tests run fully offline.
    struct DownBackend;

    #[async_trait]
    impl TextGenBackend for DownBackend {
        fn model(&self) -> &str {
            "down"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    fn test_config() -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            models: vec!["down".to_string()],
            llm_timeout_secs: 1,
            blend_catalog_count: 4,
            port: 0,
            rust_log: "warn".to_string(),
        }
    }

    fn test_state() -> AppState {
        AppState::new(vec![Box::new(DownBackend)], test_config())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn create_session(state: &AppState) -> Value {
        let response = build_router(state.clone())
            .oneshot(post(
                "/api/v1/sessions",
                json!({"title": "Nurse", "industry": "Healthcare", "experienceLevel": "mid"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_create_session_falls_back_to_catalog() {
        let state = test_state();
        let created = create_session(&state).await;
        assert_eq!(created["source"], "catalog");
        assert!(!created["questions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_session_rejects_empty_title() {
        let response = build_router(test_state())
            .oneshot(post(
                "/api/v1/sessions",
                json!({"title": "  ", "industry": "Tech", "experienceLevel": "mid"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_answer_and_result_flow() {
        let state = test_state();
        let created = create_session(&state).await;
        let session_id = created["sessionId"].as_str().unwrap().to_string();
        let questions = created["questions"].as_array().unwrap().clone();

        let app = build_router(state.clone());

        // Result before completion is a conflict.
        let response = app
            .clone()
            .oneshot(get(&format!("/api/v1/sessions/{session_id}/result")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        for q in &questions {
            let value = if q["type"] == "scale" {
                json!(75)
            } else {
                q["options"][0]["value"].clone()
            };
            let response = app
                .clone()
                .oneshot(post(
                    &format!("/api/v1/sessions/{session_id}/answers"),
                    json!({"questionId": q["id"], "value": value}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .clone()
            .oneshot(get(&format!("/api/v1/sessions/{session_id}/result")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let result = body_json(response).await;
        let score = result["score"].as_u64().unwrap();
        assert!(score <= 100);
        assert_eq!(result["breakdown"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_answer_boundary_violation_is_rejected() {
        let state = test_state();
        let created = create_session(&state).await;
        let session_id = created["sessionId"].as_str().unwrap().to_string();

        let response = build_router(state.clone())
            .oneshot(post(
                &format!("/api/v1/sessions/{session_id}/answers"),
                json!({"questionId": "not-a-question", "value": 50}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_session_store_survives_a_poisoned_lock() {
        let state = test_state();
        let poisoner = state.clone();
        std::thread::spawn(move || {
            let _guard = poisoner.sessions.lock().unwrap();
            panic!("writer died mid-request");
        })
        .join()
        .unwrap_err();

        let mut sessions = lock_sessions(&state);
        assert!(sessions.is_empty());
        sessions.insert(Uuid::new_v4(), {
            let set = crate::models::QuestionSet {
                source: crate::models::QuestionSource::Catalog,
                questions: crate::catalog::catalog(),
            };
            Session::new(
                crate::models::RoleDescription {
                    title: "Nurse".to_string(),
                    industry: "Healthcare".to_string(),
                    experience_level: "mid".to_string(),
                },
                set,
            )
        });
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let response = build_router(test_state())
            .oneshot(get(&format!("/api/v1/sessions/{}", Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stateless_score_endpoint() {
        let response = build_router(test_state())
            .oneshot(post(
                "/api/v1/score",
                json!({
                    "questions": [
                        {"id": "rep-1", "text": "Q", "type": "scale", "dimension": "repetition"}
                    ],
                    "answers": {"rep-1": 0}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let result = body_json(response).await;
        // repetition 0, everything else neutral 50 → pressure 0.6*0+0.4*50=20,
        // edge 50 → (50 + 80)/2 = 65.
        assert_eq!(result["score"], 65);
        assert_eq!(result["verdict"], "Strong Human Edge");
    }
}
