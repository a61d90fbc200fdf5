//! Attribution Module - Who Is Behind a Campaign
//!
//! Scores each candidate campaign against a fixed set of threat-actor
//! archetypes. Four sub-scores (signature, geography, timing,
//! operational) combine as a weighted sum; the archetype with the
//! highest sum wins. Every archetype is described by data in `rules`,
//! so adding one is a data change, not a control-flow change.
//!
//! ## Structure
//! - `types`: ThreatActor, SubScores, Attribution result
//! - `rules`: weights, per-actor rule table, thresholds
//! - `scorer`: evidence extraction and scoring logic

pub mod types;
pub mod rules;
pub mod scorer;

// Re-export main types for convenience
pub use types::{Attribution, ScoreBreakdown, SubScores, ThreatActor};
pub use rules::{
    ActorRule, AttributionWeights, SignaturePattern, OperationalPreference, TimingPreference,
    DEFAULT_MIN_CONFIDENCE,
};
pub use scorer::{AttributionScorer, ClusterEvidence};
