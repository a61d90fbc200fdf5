//! Campaign Aggregator
//!
//! Groups events by non-noise cluster label, computes summary
//! statistics, delegates attribution, and orders the output for stable
//! presentation. Campaign ids are assigned after sorting so identical
//! input reproduces identical ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::logic::attribution::{AttributionScorer, ClusterEvidence};
use crate::logic::clustering::ClusterLabel;
use crate::logic::events::AttackEvent;

use super::types::{CampaignRecord, Sophistication};

// ============================================================================
// SOPHISTICATION THRESHOLDS
// ============================================================================

/// High requires confidence >= this ...
pub const HIGH_CONFIDENCE_MIN: f64 = 0.80;
/// ... and an operational sub-score >= this
pub const HIGH_OPERATIONAL_MIN: f64 = 0.60;
/// Medium requires confidence >= this
pub const MEDIUM_CONFIDENCE_MIN: f64 = 0.60;

/// Confidence-to-sophistication thresholds (configurable)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SophisticationThresholds {
    /// High needs confidence >= this ...
    pub high_confidence_min: f64,
    /// ... and an operational sub-score >= this
    pub high_operational_min: f64,
    /// Medium needs confidence >= this
    pub medium_confidence_min: f64,
}

impl Default for SophisticationThresholds {
    fn default() -> Self {
        Self {
            high_confidence_min: HIGH_CONFIDENCE_MIN,
            high_operational_min: HIGH_OPERATIONAL_MIN,
            medium_confidence_min: MEDIUM_CONFIDENCE_MIN,
        }
    }
}

impl SophisticationThresholds {
    pub fn level(&self, confidence: f64, operational: f64) -> Sophistication {
        if confidence >= self.high_confidence_min && operational >= self.high_operational_min {
            Sophistication::High
        } else if confidence >= self.medium_confidence_min {
            Sophistication::Medium
        } else {
            Sophistication::Low
        }
    }
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity on a 0-10 scale, rounded to 2 decimals:
/// min(10, mean_intensity * 0.6 + min(n, 10) * 0.4)
fn severity_score(mean_intensity: f64, num_attacks: usize) -> f64 {
    let raw = (mean_intensity * 0.6 + (num_attacks.min(10) as f64) * 0.4).min(10.0);
    (raw * 100.0).round() / 100.0
}

// ============================================================================
// CAMPAIGN AGGREGATOR
// ============================================================================

/// Builds ordered campaign records from events and cluster labels
#[derive(Debug, Clone)]
pub struct CampaignAggregator {
    scorer: AttributionScorer,
    thresholds: SophisticationThresholds,
}

impl CampaignAggregator {
    pub fn new(scorer: AttributionScorer, thresholds: SophisticationThresholds) -> Self {
        Self { scorer, thresholds }
    }

    /// Aggregate one pass. `labels[i]` labels `events[i]`; the slices
    /// must be the same length. Noise rows produce no output.
    pub fn aggregate(
        &self,
        events: &[&AttackEvent],
        labels: &[ClusterLabel],
    ) -> Vec<CampaignRecord> {
        debug_assert_eq!(events.len(), labels.len());

        // Group member indices by cluster id, input order preserved
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, label) in labels.iter().enumerate() {
            if let Some(id) = label.cluster_id() {
                groups.entry(id).or_default().push(i);
            }
        }

        let mut records: Vec<CampaignRecord> = groups
            .values()
            .map(|members| self.build_record(events, members))
            .collect();

        // Descending size, then earliest start, for stable presentation
        records.sort_by(|a, b| {
            b.num_attacks
                .cmp(&a.num_attacks)
                .then_with(|| a.start_time.cmp(&b.start_time))
        });

        // Ids follow the final presentation order
        for (i, record) in records.iter_mut().enumerate() {
            record.campaign_id = format!("CAMPAIGN_{:04}", i + 1);
        }

        log::info!("aggregated {} campaigns", records.len());
        records
    }

    fn build_record(&self, events: &[&AttackEvent], members: &[usize]) -> CampaignRecord {
        let cluster_events: Vec<&AttackEvent> = members.iter().map(|&i| events[i]).collect();
        let evidence = ClusterEvidence::from_events(&cluster_events);
        let attribution = self.scorer.attribute(&evidence);

        let start_time = cluster_events.iter().map(|e| e.timestamp).min().unwrap_or_default();
        let end_time = cluster_events.iter().map(|e| e.timestamp).max().unwrap_or_default();
        let duration_minutes = (end_time - start_time).num_milliseconds() as f64 / 60_000.0;

        let attack_types: BTreeMap<String, usize> = evidence
            .type_counts
            .iter()
            .map(|(ty, count)| (ty.as_str().to_string(), *count))
            .collect();
        let signature: Vec<String> = evidence
            .distinct_types
            .iter()
            .map(|ty| ty.as_str().to_string())
            .collect();

        CampaignRecord {
            // Placeholder, replaced once the final order is known
            campaign_id: String::new(),
            attributed_actor: attribution.actor,
            confidence: attribution.confidence,
            sophistication: self
                .thresholds
                .level(attribution.confidence, attribution.sub_scores.operational),
            primary_source_country: evidence.primary_country.clone(),
            attack_types,
            num_attacks: evidence.num_attacks,
            duration_minutes,
            severity_score: severity_score(evidence.mean_intensity, evidence.num_attacks),
            start_time,
            end_time,
            attack_ids: cluster_events.iter().map(|e| e.id.clone()).collect(),
            signature,
            avg_interval_minutes: evidence.avg_interval_minutes.unwrap_or(0.0),
            score_breakdown: attribution.score_breakdown,
        }
    }
}

impl Default for CampaignAggregator {
    fn default() -> Self {
        Self::new(AttributionScorer::default(), SophisticationThresholds::default())
    }
}
