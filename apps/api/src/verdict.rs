//! Verdict Classifier — maps a final score to one of four ordered tiers.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// The four resilience tiers, lowest to highest. Each tier owns a closed
/// integer range; together they partition [0,100] with no gap or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Human in Training")]
    HumanInTraining,
    #[serde(rename = "Evolving Professional")]
    EvolvingProfessional,
    #[serde(rename = "Strong Human Edge")]
    StrongHumanEdge,
    #[serde(rename = "Certified AI Proof")]
    CertifiedAiProof,
}

impl Verdict {
    /// Classifies a clamped score. Callers are expected to pass values the
    /// scoring engine produced, i.e. already in [0,100].
    pub fn classify(score: u8) -> Verdict {
        debug_assert!(score <= 100, "score {score} outside [0,100]");
        match score {
            0..=25 => Verdict::HumanInTraining,
            26..=50 => Verdict::EvolvingProfessional,
            51..=75 => Verdict::StrongHumanEdge,
            _ => Verdict::CertifiedAiProof,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::HumanInTraining => "Human in Training",
            Verdict::EvolvingProfessional => "Evolving Professional",
            Verdict::StrongHumanEdge => "Strong Human Edge",
            Verdict::CertifiedAiProof => "Certified AI Proof",
        }
    }

    pub fn range(&self) -> RangeInclusive<u8> {
        match self {
            Verdict::HumanInTraining => 0..=25,
            Verdict::EvolvingProfessional => 26..=50,
            Verdict::StrongHumanEdge => 51..=75,
            Verdict::CertifiedAiProof => 76..=100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_score_maps_to_exactly_one_tier() {
        for score in 0..=100u8 {
            let verdict = Verdict::classify(score);
            assert!(verdict.range().contains(&score));
        }
    }

    #[test]
    fn test_tier_boundaries_are_adjacent() {
        assert_eq!(Verdict::classify(25), Verdict::HumanInTraining);
        assert_eq!(Verdict::classify(26), Verdict::EvolvingProfessional);
        assert_eq!(Verdict::classify(50), Verdict::EvolvingProfessional);
        assert_eq!(Verdict::classify(51), Verdict::StrongHumanEdge);
        assert_eq!(Verdict::classify(75), Verdict::StrongHumanEdge);
        assert_eq!(Verdict::classify(76), Verdict::CertifiedAiProof);
    }

    #[test]
    fn test_extremes_map_to_lowest_and_highest_tiers() {
        assert_eq!(Verdict::classify(0), Verdict::HumanInTraining);
        assert_eq!(Verdict::classify(100), Verdict::CertifiedAiProof);
    }

    #[test]
    fn test_verdict_serializes_as_display_label() {
        let json = serde_json::to_string(&Verdict::CertifiedAiProof).unwrap();
        assert_eq!(json, r#""Certified AI Proof""#);
    }

    #[test]
    fn test_tiers_are_ordered_by_resilience() {
        assert!(Verdict::HumanInTraining < Verdict::EvolvingProfessional);
        assert!(Verdict::EvolvingProfessional < Verdict::StrongHumanEdge);
        assert!(Verdict::StrongHumanEdge < Verdict::CertifiedAiProof);
    }
}
