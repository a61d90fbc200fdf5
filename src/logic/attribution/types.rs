//! Attribution Types
//!
//! Core types for threat-actor attribution. No logic here, only data
//! structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// THREAT ACTOR
// ============================================================================

/// Fixed enumeration of threat-actor archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatActor {
    #[serde(rename = "State-Sponsored APT")]
    StateSponsoredApt,
    #[serde(rename = "Criminal Organization")]
    CriminalOrganization,
    #[serde(rename = "Hacktivist Collective")]
    HacktivistCollective,
    #[serde(rename = "Script Kiddie")]
    ScriptKiddie,
    Unknown,
}

impl ThreatActor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatActor::StateSponsoredApt => "State-Sponsored APT",
            ThreatActor::CriminalOrganization => "Criminal Organization",
            ThreatActor::HacktivistCollective => "Hacktivist Collective",
            ThreatActor::ScriptKiddie => "Script Kiddie",
            ThreatActor::Unknown => "Unknown",
        }
    }

    /// Tie-break priority: lower wins when weighted sums are equal
    pub fn priority(&self) -> u8 {
        match self {
            ThreatActor::StateSponsoredApt => 0,
            ThreatActor::CriminalOrganization => 1,
            ThreatActor::HacktivistCollective => 2,
            ThreatActor::ScriptKiddie => 3,
            ThreatActor::Unknown => 4,
        }
    }
}

impl std::fmt::Display for ThreatActor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SUB-SCORES
// ============================================================================

/// The four attribution sub-scores for one actor, each in [0, 1]
/// before weighting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub signature: f64,
    pub geographic: f64,
    pub timing: f64,
    pub operational: f64,
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// Weighted contributions behind the winning confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub signature_contribution: f64,
    pub geographic_contribution: f64,
    pub timing_contribution: f64,
    pub operational_contribution: f64,
    pub confidence: f64,
}

// ============================================================================
// ATTRIBUTION RESULT
// ============================================================================

/// Result of attributing one candidate campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    /// Winning archetype (Unknown when nothing clears the threshold)
    pub actor: ThreatActor,
    /// Weighted sum of the winner's sub-scores, in [0, 1]
    pub confidence: f64,
    /// The winner's unweighted sub-scores
    pub sub_scores: SubScores,
    /// Weighted contributions for explainability
    pub score_breakdown: ScoreBreakdown,
}
