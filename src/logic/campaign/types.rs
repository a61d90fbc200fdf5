//! Campaign Types
//!
//! Output records of one detection pass. Immutable once created; a new
//! pass supersedes them wholesale.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EncodingError;
use crate::logic::attribution::{ScoreBreakdown, ThreatActor};

// ============================================================================
// SOPHISTICATION
// ============================================================================

/// Derived ordinal sophistication level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sophistication {
    Low,
    Medium,
    High,
}

impl Sophistication {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sophistication::Low => "Low",
            Sophistication::Medium => "Medium",
            Sophistication::High => "High",
        }
    }
}

impl std::fmt::Display for Sophistication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CAMPAIGN RECORD
// ============================================================================

/// One detected campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    /// Deterministic id, `CAMPAIGN_0001` style, numbered in output order
    pub campaign_id: String,
    /// Winning archetype
    pub attributed_actor: ThreatActor,
    /// Weighted attribution confidence in [0, 1]
    pub confidence: f64,
    /// Derived ordinal level
    pub sophistication: Sophistication,
    /// Most frequent source country, ties lexicographic
    pub primary_source_country: String,
    /// Events per attack type (wire names)
    pub attack_types: BTreeMap<String, usize>,
    /// Member count, >= min_samples by construction
    pub num_attacks: usize,
    /// max timestamp - min timestamp among members
    pub duration_minutes: f64,
    /// min(10, mean_intensity * 0.6 + min(n, 10) * 0.4)
    pub severity_score: f64,
    /// Earliest / latest member timestamps
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Member event ids in input order
    pub attack_ids: Vec<String>,
    /// Distinct attack types present (wire names, sorted)
    pub signature: Vec<String>,
    /// Mean gap between consecutive events in minutes
    pub avg_interval_minutes: f64,
    /// Weighted contributions behind `confidence`
    pub score_breakdown: ScoreBreakdown,
}

// ============================================================================
// CAMPAIGN ANALYSIS (aggregate response)
// ============================================================================

/// Result of one full detection pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignAnalysis {
    /// Detected campaigns, descending size then earliest start
    pub campaigns: Vec<CampaignRecord>,
    /// Campaign count
    pub total_detected: usize,
    /// Events that survived encoding and entered clustering
    pub total_attacks_analyzed: usize,
    /// Events excluded because the codebook could not encode them
    pub encoding_errors: Vec<EncodingError>,
}

impl CampaignAnalysis {
    /// Well-formed empty result (empty input, or too few events)
    pub fn empty(analyzed: usize, encoding_errors: Vec<EncodingError>) -> Self {
        Self {
            campaigns: Vec::new(),
            total_detected: 0,
            total_attacks_analyzed: analyzed,
            encoding_errors,
        }
    }
}
