//! Dynamic Question Provider — assembles the question set for a role.
//!
//! Flow: build prompt → try each configured backend in order (first
//! non-empty reply wins) → parse the reply as either an explicit
//! invalid-role rejection or a question array → blend generated questions
//! with a catalog sample. Any transport or structural failure drops to the
//! deterministic tag-matching fallback over the catalog; an explicit
//! rejection never does.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog;
use crate::llm_client::{strip_json_fences, TextGenBackend};
use crate::models::{
    Question, QuestionSet, QuestionSource, QuestionType, RoleDescription, GENERATED_ID_PREFIX,
};
use crate::questions::prompts::question_prompt;

/// Cap on tag-matched questions in the fallback set.
const FALLBACK_MATCHED_LIMIT: usize = 10;
/// Cap on non-matched filler questions in the fallback set.
const FALLBACK_OTHERS_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum AssembleError {
    /// The backend judged the submitted role invalid. Terminal for the
    /// session — the fallback path must not run.
    #[error("{0}")]
    InvalidRole(String),

    /// Both the primary and fallback paths produced nothing. Near
    /// impossible in practice since the catalog is non-empty.
    #[error("no questions available from any path")]
    Exhausted,
}

/// The two reply shapes the backend contract allows.
#[derive(Debug, PartialEq)]
enum BackendReply {
    Rejection(String),
    Questions(Vec<Question>),
}

#[derive(Debug, Error)]
enum ReplyError {
    #[error("unparseable reply: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty question list")]
    Empty,

    #[error("error object without invalid_role marker")]
    UnknownErrorObject,

    #[error("question '{id}' failed structural check: {reason}")]
    Structure { id: String, reason: &'static str },
}

/// Shape of the explicit rejection object.
#[derive(Debug, Deserialize)]
struct RejectionObject {
    error: String,
    #[serde(default)]
    message: String,
}

/// Assembles the question set for `role`.
///
/// `blend_catalog_count` is how many catalog questions are mixed into a
/// successful generated set (empirically tuned, configurable). `rng`
/// drives every shuffle so tests can seed it; order is never semantically
/// meaningful, only membership is.
pub async fn assemble<R: Rng>(
    role: &RoleDescription,
    backends: &[Box<dyn TextGenBackend>],
    blend_catalog_count: usize,
    rng: &mut R,
) -> Result<QuestionSet, AssembleError> {
    let prompt = question_prompt(&role.title, &role.industry, &role.experience_level);
    let pool = catalog::catalog();

    if let Some(raw) = try_backends(backends, &prompt).await {
        match parse_reply(&raw) {
            Ok(BackendReply::Rejection(message)) => {
                info!(title = %role.title, "role rejected by backend");
                return Err(AssembleError::InvalidRole(message));
            }
            Ok(BackendReply::Questions(generated)) => {
                let questions = blend_with_catalog(generated, &pool, blend_catalog_count, rng);
                return Ok(QuestionSet {
                    source: QuestionSource::Generated,
                    questions,
                });
            }
            Err(err) => {
                warn!(error = %err, "backend reply failed structural checks, using catalog fallback");
            }
        }
    } else {
        warn!("all configured models failed, using catalog fallback");
    }

    let questions = fallback_selection(role, &pool, rng);
    if questions.is_empty() {
        return Err(AssembleError::Exhausted);
    }
    Ok(QuestionSet {
        source: QuestionSource::Catalog,
        questions,
    })
}

/// Sequential first-success-wins loop over the configured backends.
/// Each failure is soft: logged at warn, never fatal on its own.
async fn try_backends(backends: &[Box<dyn TextGenBackend>], prompt: &str) -> Option<String> {
    for backend in backends {
        match backend.generate(prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(model = %backend.model(), "backend responded");
                return Some(text);
            }
            Ok(_) => warn!(model = %backend.model(), "backend returned empty text"),
            Err(err) => warn!(model = %backend.model(), error = %err, "backend attempt failed"),
        }
    }
    None
}

/// Parses a raw backend reply into one of the two allowed shapes.
///
/// The rejection object is probed first; an object that parses but does
/// not carry `error == "invalid_role"` is a malformed reply, not a
/// rejection — conflating the two would let garbage output masquerade as
/// a legitimate judgment.
fn parse_reply(raw: &str) -> Result<BackendReply, ReplyError> {
    let text = strip_json_fences(raw);

    if let Ok(rejection) = serde_json::from_str::<RejectionObject>(text) {
        if rejection.error == "invalid_role" {
            return Ok(BackendReply::Rejection(rejection.message));
        }
        return Err(ReplyError::UnknownErrorObject);
    }

    let questions: Vec<Question> = serde_json::from_str(text)?;
    if questions.is_empty() {
        return Err(ReplyError::Empty);
    }
    let questions = questions
        .into_iter()
        .map(|q| {
            validate_question(&q)?;
            Ok(namespace_generated(q))
        })
        .collect::<Result<Vec<_>, ReplyError>>()?;
    Ok(BackendReply::Questions(questions))
}

/// Structural checks only — question quality is the prompt's job.
fn validate_question(q: &Question) -> Result<(), ReplyError> {
    if q.id.trim().is_empty() {
        return Err(ReplyError::Structure {
            id: q.id.clone(),
            reason: "empty id",
        });
    }
    if q.text.trim().is_empty() {
        return Err(ReplyError::Structure {
            id: q.id.clone(),
            reason: "empty text",
        });
    }
    match q.kind {
        QuestionType::MultipleChoice => {
            if q.options.is_empty() {
                return Err(ReplyError::Structure {
                    id: q.id.clone(),
                    reason: "multiple-choice without options",
                });
            }
            if q.options.iter().any(|o| o.value > 100) {
                return Err(ReplyError::Structure {
                    id: q.id.clone(),
                    reason: "option value above 100",
                });
            }
        }
        QuestionType::Scale => {}
    }
    Ok(())
}

/// The prompt demands the `ai-` prefix, but the namespace invariant must
/// hold even when the model forgets it.
fn namespace_generated(mut q: Question) -> Question {
    if !q.id.starts_with(GENERATED_ID_PREFIX) {
        q.id = format!("{GENERATED_ID_PREFIX}{}", q.id);
    }
    q
}

/// Blended path: a random catalog sample mixed into the generated set so
/// every session carries both populations. Duplicate ids are dropped,
/// keeping the first occurrence.
fn blend_with_catalog<R: Rng>(
    generated: Vec<Question>,
    pool: &[Question],
    catalog_count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut sample: Vec<Question> = pool.to_vec();
    sample.shuffle(rng);
    sample.truncate(catalog_count);

    let mut seen: HashSet<String> = HashSet::new();
    let mut combined: Vec<Question> = sample
        .into_iter()
        .chain(generated)
        .filter(|q| seen.insert(q.id.clone()))
        .collect();
    combined.shuffle(rng);
    combined
}

/// Fallback path: deterministic tag matching over the catalog.
///
/// A question matches when any of its tags substring-matches (either
/// direction) any lowercase whitespace term of the role's title or
/// industry. Up to 10 matched plus up to 5 non-matched questions, all
/// shuffled. Fewer available means fewer returned, never an error.
pub fn fallback_selection<R: Rng>(
    role: &RoleDescription,
    pool: &[Question],
    rng: &mut R,
) -> Vec<Question> {
    let title = role.title.to_lowercase();
    let industry = role.industry.to_lowercase();
    let terms: Vec<&str> = title
        .split_whitespace()
        .chain(industry.split_whitespace())
        .collect();

    let (mut matched, mut others): (Vec<Question>, Vec<Question>) =
        pool.iter().cloned().partition(|q| {
            q.tags
                .iter()
                .any(|tag| terms.iter().any(|t| t.contains(tag.as_str()) || tag.contains(t)))
        });

    matched.shuffle(rng);
    matched.truncate(FALLBACK_MATCHED_LIMIT);
    others.shuffle(rng);
    others.truncate(FALLBACK_OTHERS_LIMIT);

    let mut selection = matched;
    selection.extend(others);
    selection.shuffle(rng);
    selection
}
