//! Detection Configuration
//!
//! Every tunable the core consumes, validated up front. A pass never
//! runs with invalid parameters; misleading output is worse than no
//! output.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::logic::attribution::rules::{
    ActorRule, AttributionWeights, DEFAULT_ACTOR_RULES, DEFAULT_MIN_CONFIDENCE,
    WEIGHT_SUM_TOLERANCE,
};
use crate::logic::campaign::SophisticationThresholds;
use crate::logic::features::Codebook;

// ============================================================================
// DEFAULTS
// ============================================================================

/// Default DBSCAN neighborhood radius in scaled feature space
pub const DEFAULT_EPS: f64 = 0.5;

/// Default minimum cluster size (also the campaign size floor)
pub const DEFAULT_MIN_SAMPLES: usize = 3;

// ============================================================================
// DETECTION CONFIG
// ============================================================================

/// Full configuration surface of one detection pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// DBSCAN neighborhood radius (> 0)
    pub eps: f64,
    /// DBSCAN minimum neighborhood size (>= 2); doubles as the
    /// minimum campaign size
    pub min_samples: usize,
    /// Attribution weights (must sum to 1.0 within 1e-6)
    pub weights: AttributionWeights,
    /// Best confidence below this falls back to Unknown
    pub min_confidence: f64,
    /// Confidence-to-sophistication thresholds
    pub sophistication: SophisticationThresholds,
    /// Categorical encoding tables
    pub codebook: Codebook,
    /// Per-archetype scoring rules
    pub actor_rules: Vec<ActorRule>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            min_samples: DEFAULT_MIN_SAMPLES,
            weights: AttributionWeights::default(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            sophistication: SophisticationThresholds::default(),
            codebook: Codebook::default(),
            actor_rules: DEFAULT_ACTOR_RULES.clone(),
        }
    }
}

impl DetectionConfig {
    /// Reject invalid parameters before any data is touched
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.eps > 0.0) {
            return Err(ConfigurationError::InvalidEps(self.eps));
        }
        if self.min_samples < 2 {
            return Err(ConfigurationError::InvalidMinSamples(self.min_samples));
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigurationError::WeightsNotNormalized(sum));
        }
        Ok(())
    }
}
