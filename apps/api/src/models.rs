//! Core data model for the resilience assessment engine.
//!
//! Wire names are camelCase (`minLabel`, `experienceLevel`) to match the
//! JSON shapes the presentation layer and the text-generation backend
//! already speak.

use serde::{Deserialize, Serialize};

/// Id prefix carried by every dynamically generated question. Catalog
/// questions never use it, so downstream code can tell the two
/// populations apart by prefix alone.
pub const GENERATED_ID_PREFIX: &str = "ai-";

/// The 7 fixed human-trait dimensions. Closed set — scoring weights in
/// `scoring.rs` assume exactly these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    #[serde(alias = "Repetition")]
    Repetition,
    #[serde(alias = "Creativity")]
    Creativity,
    #[serde(alias = "Emotions")]
    Emotions,
    #[serde(alias = "Strategy")]
    Strategy,
    #[serde(alias = "Physical")]
    Physical,
    #[serde(alias = "Data")]
    Data,
    #[serde(alias = "Adaptability")]
    Adaptability,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Repetition,
        Dimension::Creativity,
        Dimension::Emotions,
        Dimension::Strategy,
        Dimension::Physical,
        Dimension::Data,
        Dimension::Adaptability,
    ];
}

/// How a question is answered. `Scale` accepts any integer in [0,100];
/// the UI only offers five snap points but the engine must not assume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Scale,
}

/// One answer option of a multiple-choice question. `value` is the
/// resilience contribution in [0,100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: u8,
}

/// A single diagnostic question, either from the static catalog or
/// generated by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub dimension: Dimension,
    /// Topical labels used only by the fallback tag matcher.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Required (non-empty) for multiple-choice, unused for scale.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    /// Display-only anchor label at the 0 end of a scale.
    #[serde(rename = "minLabel", default, skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    /// Display-only anchor label at the 100 end of a scale.
    #[serde(rename = "maxLabel", default, skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}

impl Question {
    /// Whether this question came from the generative backend rather
    /// than the static catalog.
    pub fn is_generated(&self) -> bool {
        self.id.starts_with(GENERATED_ID_PREFIX)
    }

    /// Whether `value` is an acceptable answer for this question:
    /// any integer in [0,100] for scale, a listed option value for
    /// multiple-choice.
    pub fn accepts_value(&self, value: u8) -> bool {
        match self.kind {
            QuestionType::Scale => value <= 100,
            QuestionType::MultipleChoice => self.options.iter().any(|o| o.value == value),
        }
    }
}

/// The role being assessed. All fields are opaque free text; non-empty is
/// the only contract enforced at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDescription {
    pub title: String,
    pub industry: String,
    pub experience_level: String,
}

/// Which path of the provider produced a question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    /// Primary path succeeded: generated questions blended with a
    /// catalog sample.
    Generated,
    /// Fallback path: deterministic tag matching over the catalog.
    Catalog,
}

/// The ordered question sequence handed to a session. Fixed once built.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSet {
    pub source: QuestionSource,
    pub questions: Vec<Question>,
}
