//! Attribution Rules & Weights
//!
//! Weights, thresholds, and the per-actor rule table. No scoring logic
//! here, only constants and configuration data.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::logic::events::AttackType;

use super::types::ThreatActor;

// ============================================================================
// WEIGHTS (How much each sub-score contributes to confidence)
// ============================================================================

/// Weight of the attack-type signature sub-score (40%)
pub const SIGNATURE_WEIGHT: f64 = 0.40;

/// Weight of the geographic sub-score (25%)
pub const GEOGRAPHIC_WEIGHT: f64 = 0.25;

/// Weight of the timing-regularity sub-score (20%)
pub const TIMING_WEIGHT: f64 = 0.20;

/// Weight of the operational-sophistication sub-score (15%)
pub const OPERATIONAL_WEIGHT: f64 = 0.15;

/// Tolerance when checking that weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Below this best confidence, attribution falls back to Unknown
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.55;

/// Neutral sub-score used when an actor has no preference or the
/// cluster carries no usable evidence for a factor
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Geographic sub-score when the primary source country is in the
/// actor's associated list / when it is not
pub const GEO_MATCH_SCORE: f64 = 0.90;
pub const GEO_MISS_SCORE: f64 = 0.40;

// ============================================================================
// CONFIGURABLE WEIGHTS
// ============================================================================

/// Attribution weights (must sum to 1.0, checked by `DetectionConfig`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributionWeights {
    pub signature: f64,
    pub geographic: f64,
    pub timing: f64,
    pub operational: f64,
}

impl Default for AttributionWeights {
    fn default() -> Self {
        Self {
            signature: SIGNATURE_WEIGHT,
            geographic: GEOGRAPHIC_WEIGHT,
            timing: TIMING_WEIGHT,
            operational: OPERATIONAL_WEIGHT,
        }
    }
}

impl AttributionWeights {
    pub fn sum(&self) -> f64 {
        self.signature + self.geographic + self.timing + self.operational
    }
}

// ============================================================================
// RULE TABLE
// ============================================================================

/// How an attack-type mix matches a signature pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SignaturePattern {
    /// The mix contains every listed type
    ContainsAll(Vec<AttackType>),
    /// The mix is exactly the listed set
    Exactly(Vec<AttackType>),
    /// The mix is a single type drawn from the listed set
    SingleOf(Vec<AttackType>),
    /// The listed type accounts for at least `share` of the events
    DominantShare(AttackType, f64),
    /// At least `min` distinct types present
    MinVariety(usize),
}

impl SignaturePattern {
    /// Does the pattern match a cluster's attack-type evidence?
    pub fn matches(&self, distinct: &BTreeSet<AttackType>, counts: &[(AttackType, usize)]) -> bool {
        match self {
            SignaturePattern::ContainsAll(types) => types.iter().all(|t| distinct.contains(t)),
            SignaturePattern::Exactly(types) => {
                distinct.len() == types.len() && types.iter().all(|t| distinct.contains(t))
            }
            SignaturePattern::SingleOf(types) => {
                distinct.len() == 1 && types.iter().any(|t| distinct.contains(t))
            }
            SignaturePattern::DominantShare(ty, share) => {
                let total: usize = counts.iter().map(|(_, c)| c).sum();
                if total == 0 {
                    return false;
                }
                let hits = counts
                    .iter()
                    .find(|(t, _)| t == ty)
                    .map(|(_, c)| *c)
                    .unwrap_or(0);
                hits as f64 / total as f64 >= *share
            }
            SignaturePattern::MinVariety(min) => distinct.len() >= *min,
        }
    }
}

/// Timing preference over the cluster's cadence regularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimingPreference {
    /// Regular cadence fits this actor (coordinated operations)
    Regular,
    /// Irregular cadence fits this actor (opportunistic)
    Irregular,
    /// Timing carries no signal for this actor
    Neutral,
}

/// Operational preference over the cluster's sophistication proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationalPreference {
    /// Larger, more severe, more varied clusters fit this actor
    High,
    /// Small, simple clusters fit this actor
    Low,
    /// Sophistication carries no signal for this actor
    Neutral,
}

/// Complete scoring rule for one archetype. First matching signature
/// pattern wins; `signature_default` applies when none match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRule {
    pub actor: ThreatActor,
    /// (pattern, score) pairs evaluated in order
    pub signature_patterns: Vec<(SignaturePattern, f64)>,
    /// Signature score when no pattern matches
    pub signature_default: f64,
    /// Source countries historically associated with this archetype.
    /// Empty list means geography is neutral for the actor.
    pub associated_countries: Vec<String>,
    pub timing: TimingPreference,
    pub operational: OperationalPreference,
}

/// Default rule table, one entry per archetype
pub static DEFAULT_ACTOR_RULES: Lazy<Vec<ActorRule>> = Lazy::new(|| {
    use AttackType::*;
    vec![
        ActorRule {
            actor: ThreatActor::StateSponsoredApt,
            signature_patterns: vec![
                (SignaturePattern::ContainsAll(vec![DDoS, Malware]), 0.95),
                (SignaturePattern::MinVariety(3), 0.85),
            ],
            signature_default: 0.40,
            associated_countries: vec![
                "Russia".to_string(),
                "China".to_string(),
                "Iran".to_string(),
                "North Korea".to_string(),
            ],
            timing: TimingPreference::Regular,
            operational: OperationalPreference::High,
        },
        ActorRule {
            actor: ThreatActor::CriminalOrganization,
            signature_patterns: vec![
                (SignaturePattern::ContainsAll(vec![Ransomware, Malware]), 0.90),
                (SignaturePattern::ContainsAll(vec![Ransomware]), 0.85),
                (SignaturePattern::ContainsAll(vec![Phishing, Malware]), 0.75),
            ],
            signature_default: 0.40,
            associated_countries: vec![
                "Russia".to_string(),
                "Brazil".to_string(),
                "Romania".to_string(),
            ],
            timing: TimingPreference::Neutral,
            operational: OperationalPreference::High,
        },
        ActorRule {
            actor: ThreatActor::HacktivistCollective,
            signature_patterns: vec![
                (SignaturePattern::Exactly(vec![DDoS]), 0.90),
                (SignaturePattern::DominantShare(DDoS, 2.0 / 3.0), 0.70),
            ],
            signature_default: 0.35,
            associated_countries: vec![],
            timing: TimingPreference::Regular,
            operational: OperationalPreference::Neutral,
        },
        ActorRule {
            actor: ThreatActor::ScriptKiddie,
            signature_patterns: vec![
                (SignaturePattern::Exactly(vec![BruteForce]), 0.85),
                (SignaturePattern::SingleOf(vec![BruteForce, SqlInjection, Xss]), 0.70),
            ],
            signature_default: 0.40,
            associated_countries: vec![],
            timing: TimingPreference::Irregular,
            operational: OperationalPreference::Low,
        },
        ActorRule {
            actor: ThreatActor::Unknown,
            signature_patterns: vec![],
            signature_default: NEUTRAL_SCORE,
            associated_countries: vec![],
            timing: TimingPreference::Neutral,
            operational: OperationalPreference::Neutral,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = AttributionWeights::default();
        assert!((weights.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_rule_table_covers_all_archetypes() {
        let actors: Vec<ThreatActor> = DEFAULT_ACTOR_RULES.iter().map(|r| r.actor).collect();
        assert_eq!(actors.len(), 5);
        assert!(actors.contains(&ThreatActor::Unknown));
    }

    #[test]
    fn test_exactly_pattern() {
        use AttackType::*;
        let pattern = SignaturePattern::Exactly(vec![DDoS]);
        let only_ddos: BTreeSet<_> = [DDoS].into_iter().collect();
        let mixed: BTreeSet<_> = [DDoS, Malware].into_iter().collect();
        assert!(pattern.matches(&only_ddos, &[(DDoS, 3)]));
        assert!(!pattern.matches(&mixed, &[(DDoS, 2), (Malware, 1)]));
    }

    #[test]
    fn test_dominant_share_pattern() {
        use AttackType::*;
        let pattern = SignaturePattern::DominantShare(DDoS, 2.0 / 3.0);
        let mixed: BTreeSet<_> = [DDoS, Malware].into_iter().collect();
        assert!(pattern.matches(&mixed, &[(DDoS, 2), (Malware, 1)]));
        assert!(!pattern.matches(&mixed, &[(DDoS, 1), (Malware, 2)]));
    }

    #[test]
    fn test_contains_all_pattern() {
        use AttackType::*;
        let pattern = SignaturePattern::ContainsAll(vec![Ransomware, Malware]);
        let both: BTreeSet<_> = [Ransomware, Malware, Phishing].into_iter().collect();
        let one: BTreeSet<_> = [Ransomware].into_iter().collect();
        assert!(pattern.matches(&both, &[]));
        assert!(!pattern.matches(&one, &[]));
    }
}
