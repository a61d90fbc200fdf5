//! Attribution Scorer
//!
//! Extracts cluster evidence once, then evaluates every archetype rule
//! uniformly and returns the best match. Attribution never fails: when
//! nothing clears the minimum confidence the result is Unknown carrying
//! the best score.

use std::collections::{BTreeMap, BTreeSet};

use crate::logic::events::{AttackEvent, AttackType};

use super::rules::{
    ActorRule, AttributionWeights, OperationalPreference, TimingPreference, DEFAULT_ACTOR_RULES,
    DEFAULT_MIN_CONFIDENCE, GEO_MATCH_SCORE, GEO_MISS_SCORE, NEUTRAL_SCORE,
};
use super::types::{Attribution, ScoreBreakdown, SubScores, ThreatActor};

// ============================================================================
// CLUSTER EVIDENCE
// ============================================================================

/// Raw evidence extracted from one candidate campaign, computed once
/// and shared by the scorer and the aggregator
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterEvidence {
    /// Events per attack type, deterministic iteration order
    pub type_counts: BTreeMap<AttackType, usize>,
    /// Distinct attack types present
    pub distinct_types: BTreeSet<AttackType>,
    /// Most frequent source country, ties broken lexicographically
    pub primary_country: String,
    /// Cluster size
    pub num_attacks: usize,
    /// Mean intensity over members
    pub mean_intensity: f64,
    /// Mean gap between consecutive events in minutes (timestamps
    /// sorted ascending); None below 2 events
    pub avg_interval_minutes: Option<f64>,
    /// Coefficient of variation of the gaps; None below 3 events or
    /// when the mean gap is zero
    pub interval_cv: Option<f64>,
}

impl ClusterEvidence {
    /// Extract evidence from the member events of one cluster.
    /// Assumes a non-empty slice (clusters hold >= min_samples events).
    pub fn from_events(events: &[&AttackEvent]) -> Self {
        let mut type_counts: BTreeMap<AttackType, usize> = BTreeMap::new();
        let mut country_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut intensity_sum = 0.0;

        for event in events {
            *type_counts.entry(event.attack_type).or_insert(0) += 1;
            *country_counts.entry(event.source_country.as_str()).or_insert(0) += 1;
            intensity_sum += event.intensity as f64;
        }

        let distinct_types: BTreeSet<AttackType> = type_counts.keys().copied().collect();

        // Mode; count ties resolve toward the lexicographically
        // smaller name
        let primary_country = country_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, _)| name.to_string())
            .unwrap_or_default();

        let mut timestamps: Vec<_> = events.iter().map(|e| e.timestamp).collect();
        timestamps.sort();
        let gaps: Vec<f64> = timestamps
            .windows(2)
            .map(|w| (w[1] - w[0]).num_milliseconds() as f64 / 60_000.0)
            .collect();

        let avg_interval_minutes = if gaps.is_empty() {
            None
        } else {
            Some(gaps.iter().sum::<f64>() / gaps.len() as f64)
        };

        let interval_cv = match avg_interval_minutes {
            Some(mean) if gaps.len() >= 2 && mean > 0.0 => {
                let var = gaps.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / gaps.len() as f64;
                Some(var.sqrt() / mean)
            }
            // A mean gap of zero (burst in the same instant) counts as
            // perfectly regular
            Some(mean) if gaps.len() >= 2 && mean == 0.0 => Some(0.0),
            _ => None,
        };

        Self {
            type_counts,
            distinct_types,
            primary_country,
            num_attacks: events.len(),
            mean_intensity: intensity_sum / events.len() as f64,
            avg_interval_minutes,
            interval_cv,
        }
    }

    /// Cadence regularity in (0, 1]: 1 for a perfectly even spacing,
    /// toward 0 as the spacing gets erratic. None without enough gaps.
    pub fn regularity(&self) -> Option<f64> {
        self.interval_cv.map(|cv| 1.0 / (1.0 + cv))
    }

    /// Sophistication proxy in [0, 1] from variety, size, and severity
    pub fn sophistication(&self) -> f64 {
        let variety = ((self.distinct_types.len().saturating_sub(1)) as f64 / 3.0).min(1.0);
        let size = (self.num_attacks as f64 / 20.0).min(1.0);
        let severity = self.mean_intensity / 10.0;
        0.35 * variety + 0.35 * size + 0.30 * severity
    }

    /// Attack-type counts as ordered pairs, for pattern matching
    fn count_pairs(&self) -> Vec<(AttackType, usize)> {
        self.type_counts.iter().map(|(t, c)| (*t, *c)).collect()
    }
}

// ============================================================================
// ATTRIBUTION SCORER
// ============================================================================

/// Evaluates the archetype rule table against cluster evidence
#[derive(Debug, Clone)]
pub struct AttributionScorer {
    weights: AttributionWeights,
    min_confidence: f64,
    rules: Vec<ActorRule>,
}

impl Default for AttributionScorer {
    fn default() -> Self {
        Self::new(
            AttributionWeights::default(),
            DEFAULT_MIN_CONFIDENCE,
            DEFAULT_ACTOR_RULES.clone(),
        )
    }
}

impl AttributionScorer {
    pub fn new(weights: AttributionWeights, min_confidence: f64, rules: Vec<ActorRule>) -> Self {
        Self {
            weights,
            min_confidence,
            rules,
        }
    }

    /// Attribute one candidate campaign. Always returns a profile.
    pub fn attribute(&self, evidence: &ClusterEvidence) -> Attribution {
        let mut best: Option<(f64, &ActorRule, SubScores)> = None;

        for rule in &self.rules {
            let sub = self.sub_scores(rule, evidence);
            let confidence = self.weighted_sum(&sub);

            let replace = match &best {
                None => true,
                Some((best_conf, best_rule, _)) => {
                    confidence > *best_conf
                        || (confidence == *best_conf
                            && rule.actor.priority() < best_rule.actor.priority())
                }
            };
            if replace {
                best = Some((confidence, rule, sub));
            }
        }

        // Rules are static and non-empty; the unreachable default only
        // guards a misconfigured empty table
        let (confidence, rule, sub_scores) = match best {
            Some(found) => found,
            None => {
                return Attribution {
                    actor: ThreatActor::Unknown,
                    confidence: 0.0,
                    sub_scores: SubScores {
                        signature: 0.0,
                        geographic: 0.0,
                        timing: 0.0,
                        operational: 0.0,
                    },
                    score_breakdown: ScoreBreakdown {
                        signature_contribution: 0.0,
                        geographic_contribution: 0.0,
                        timing_contribution: 0.0,
                        operational_contribution: 0.0,
                        confidence: 0.0,
                    },
                }
            }
        };

        let actor = if confidence >= self.min_confidence {
            rule.actor
        } else {
            log::debug!(
                "best actor {} at {:.3} below min confidence {:.3}, falling back to Unknown",
                rule.actor,
                confidence,
                self.min_confidence
            );
            ThreatActor::Unknown
        };

        Attribution {
            actor,
            confidence,
            sub_scores,
            score_breakdown: ScoreBreakdown {
                signature_contribution: sub_scores.signature * self.weights.signature,
                geographic_contribution: sub_scores.geographic * self.weights.geographic,
                timing_contribution: sub_scores.timing * self.weights.timing,
                operational_contribution: sub_scores.operational * self.weights.operational,
                confidence,
            },
        }
    }

    /// The four unweighted sub-scores of one actor for this evidence
    fn sub_scores(&self, rule: &ActorRule, evidence: &ClusterEvidence) -> SubScores {
        SubScores {
            signature: self.signature_score(rule, evidence),
            geographic: self.geographic_score(rule, evidence),
            timing: self.timing_score(rule, evidence),
            operational: self.operational_score(rule, evidence),
        }
    }

    fn signature_score(&self, rule: &ActorRule, evidence: &ClusterEvidence) -> f64 {
        let counts = evidence.count_pairs();
        for (pattern, score) in &rule.signature_patterns {
            if pattern.matches(&evidence.distinct_types, &counts) {
                return *score;
            }
        }
        rule.signature_default
    }

    fn geographic_score(&self, rule: &ActorRule, evidence: &ClusterEvidence) -> f64 {
        if rule.associated_countries.is_empty() {
            return NEUTRAL_SCORE;
        }
        if rule
            .associated_countries
            .iter()
            .any(|c| c == &evidence.primary_country)
        {
            GEO_MATCH_SCORE
        } else {
            GEO_MISS_SCORE
        }
    }

    fn timing_score(&self, rule: &ActorRule, evidence: &ClusterEvidence) -> f64 {
        let regularity = match evidence.regularity() {
            Some(r) => r,
            None => return NEUTRAL_SCORE,
        };
        match rule.timing {
            TimingPreference::Regular => regularity,
            TimingPreference::Irregular => 1.0 - regularity,
            TimingPreference::Neutral => NEUTRAL_SCORE,
        }
    }

    fn operational_score(&self, rule: &ActorRule, evidence: &ClusterEvidence) -> f64 {
        let s = evidence.sophistication();
        match rule.operational {
            OperationalPreference::High => s,
            OperationalPreference::Low => 1.0 - s,
            OperationalPreference::Neutral => NEUTRAL_SCORE,
        }
    }

    fn weighted_sum(&self, sub: &SubScores) -> f64 {
        (sub.signature * self.weights.signature
            + sub.geographic * self.weights.geographic
            + sub.timing * self.weights.timing
            + sub.operational * self.weights.operational)
            .clamp(0.0, 1.0)
    }
}
