//! Detection Pipeline
//!
//! The full pass: validate config -> extract features -> cluster ->
//! aggregate. Pure synchronous batch computation; the caller hands in
//! an immutable snapshot of the working set and gets a result back.
//! Nothing is retained between invocations.

use crate::error::DetectionResult;
use crate::logic::attribution::AttributionScorer;
use crate::logic::campaign::{CampaignAggregator, CampaignAnalysis};
use crate::logic::clustering::Dbscan;
use crate::logic::config::DetectionConfig;
use crate::logic::events::AttackEvent;
use crate::logic::features::FeatureExtractor;

#[cfg(test)]
mod tests;

// ============================================================================
// CAMPAIGN DETECTOR
// ============================================================================

/// Runs the full detection pass over one working set
#[derive(Debug, Clone)]
pub struct CampaignDetector {
    config: DetectionConfig,
    extractor: FeatureExtractor,
    dbscan: Dbscan,
    aggregator: CampaignAggregator,
}

impl CampaignDetector {
    /// Build a detector from validated configuration
    pub fn new(config: DetectionConfig) -> DetectionResult<Self> {
        config.validate()?;

        let extractor = FeatureExtractor::new(config.codebook.clone());
        let dbscan = Dbscan::new(config.eps, config.min_samples);
        let scorer = AttributionScorer::new(
            config.weights,
            config.min_confidence,
            config.actor_rules.clone(),
        );
        let aggregator = CampaignAggregator::new(scorer, config.sophistication);

        Ok(Self {
            config,
            extractor,
            dbscan,
            aggregator,
        })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect campaigns in one working set of events.
    ///
    /// Events the codebook cannot encode are excluded and reported in
    /// `CampaignAnalysis::encoding_errors`; everything else ends up in
    /// a campaign or stays noise. Deterministic for identical input
    /// ordering and configuration.
    pub fn detect(&self, events: &[AttackEvent]) -> DetectionResult<CampaignAnalysis> {
        let (matrix, encoding_errors) = self.extractor.extract(events);
        let analyzed = matrix.nrows();

        // Fewer encodable events than the campaign floor: nothing can
        // cluster, skip the quadratic work
        if analyzed < self.config.min_samples {
            log::debug!(
                "{} events below min_samples {}, empty result",
                analyzed,
                self.config.min_samples
            );
            return Ok(CampaignAnalysis::empty(analyzed, encoding_errors));
        }

        let labels = self.dbscan.cluster(&matrix.data);

        let encoded_events: Vec<&AttackEvent> =
            matrix.event_index.iter().map(|&i| &events[i]).collect();
        let campaigns = self.aggregator.aggregate(&encoded_events, &labels);

        log::info!(
            "pass complete: {} campaigns from {} attacks ({} excluded)",
            campaigns.len(),
            analyzed,
            encoding_errors.len()
        );

        Ok(CampaignAnalysis {
            total_detected: campaigns.len(),
            campaigns,
            total_attacks_analyzed: analyzed,
            encoding_errors,
        })
    }
}
