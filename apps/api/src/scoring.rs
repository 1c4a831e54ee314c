//! Scoring Engine — turns a question set plus answers into a ScoreResult.
//!
//! Pure function of its inputs: no hidden state, no randomness, no clock.
//! The weighting encodes the model's domain claim — repetitive,
//! data-literal work is automatable; creative, emotional, strategic,
//! dexterous and adaptive work is not — blended as a simple average so the
//! function stays monotonic in every dimension.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Dimension, Question};
use crate::verdict::Verdict;

/// Average assigned to a dimension with no answered questions, so an
/// uncovered dimension pulls the result toward neither extreme.
pub const NEUTRAL_AVERAGE: f64 = 50.0;

/// The six display facets of the radar breakdown. Derived from, not
/// identical to, the seven raw dimensions: Intuition inverts the data
/// average (heavy data-literalism implies low gut-feel reliance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Facet {
    Creativity,
    Empathy,
    Strategy,
    Dexterity,
    Intuition,
    Evolution,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetScore {
    pub facet: Facet,
    pub value: f64,
}

/// Final engine output. Derived, never stored — recompute when answers
/// change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Overall resilience, clamped and rounded to an integer in [0,100].
    pub score: u8,
    pub dimension_averages: BTreeMap<Dimension, f64>,
    pub breakdown: Vec<FacetScore>,
    pub verdict: Verdict,
}

/// Computes the resilience score for a completed (or partial) answer map.
/// Answers keyed by ids outside the question set are ignored.
pub fn score(questions: &[Question], answers: &HashMap<String, u8>) -> ScoreResult {
    let mut grouped: BTreeMap<Dimension, Vec<u8>> = BTreeMap::new();
    for (id, value) in answers {
        if let Some(question) = questions.iter().find(|q| &q.id == id) {
            grouped.entry(question.dimension).or_default().push(*value);
        }
    }

    let avg = |dim: Dimension| -> f64 {
        match grouped.get(&dim) {
            Some(values) if !values.is_empty() => {
                values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
            }
            _ => NEUTRAL_AVERAGE,
        }
    };

    let averages: BTreeMap<Dimension, f64> =
        Dimension::ALL.iter().map(|d| (*d, avg(*d))).collect();

    let automation_pressure =
        0.6 * averages[&Dimension::Repetition] + 0.4 * averages[&Dimension::Data];
    let human_edge = 0.25 * averages[&Dimension::Creativity]
        + 0.25 * averages[&Dimension::Emotions]
        + 0.20 * averages[&Dimension::Strategy]
        + 0.20 * averages[&Dimension::Physical]
        + 0.10 * averages[&Dimension::Adaptability];

    let raw = (human_edge + (100.0 - automation_pressure)) / 2.0;
    let score = raw.clamp(0.0, 100.0).round() as u8;

    let breakdown = vec![
        FacetScore {
            facet: Facet::Creativity,
            value: averages[&Dimension::Creativity],
        },
        FacetScore {
            facet: Facet::Empathy,
            value: averages[&Dimension::Emotions],
        },
        FacetScore {
            facet: Facet::Strategy,
            value: averages[&Dimension::Strategy],
        },
        FacetScore {
            facet: Facet::Dexterity,
            value: averages[&Dimension::Physical],
        },
        FacetScore {
            facet: Facet::Intuition,
            value: 100.0 - averages[&Dimension::Data],
        },
        FacetScore {
            facet: Facet::Evolution,
            value: averages[&Dimension::Adaptability],
        },
    ];

    ScoreResult {
        score,
        dimension_averages: averages,
        breakdown,
        verdict: Verdict::classify(score),
    }
}
