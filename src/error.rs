//! Error handling
//!
//! Two failure classes exist in the core:
//! - `ConfigurationError`: invalid parameters, fatal for the pass.
//! - `EncodingError`: a single event references a name outside the
//!   codebook; the event is excluded and the error travels alongside
//!   the partial result so the operator can extend the codebook.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type DetectionResult<T> = Result<T, DetectionError>;

// ============================================================================
// ENCODING ERRORS (per-event, non-fatal)
// ============================================================================

/// Which codebook field the event failed to encode against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingField {
    SourceCountry,
    TargetCountry,
    AttackType,
}

impl EncodingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingField::SourceCountry => "source_country",
            EncodingField::TargetCountry => "target_country",
            EncodingField::AttackType => "attack_type",
        }
    }
}

/// An event referenced a country or attack type outside the codebook.
///
/// Never coerced to a default code - the event is dropped from the pass
/// and this record is reported with the result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("event {event_id}: unknown {} \"{value}\"", .field.as_str())]
pub struct EncodingError {
    /// Id of the rejected event
    pub event_id: String,
    /// Which field failed to encode
    pub field: EncodingField,
    /// The value missing from the codebook
    pub value: String,
}

// ============================================================================
// CONFIGURATION ERRORS (fatal for the pass)
// ============================================================================

/// Invalid detection parameters. Checked before any data is touched so
/// the pipeline can never run with misleading settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("eps must be > 0, got {0}")]
    InvalidEps(f64),

    #[error("min_samples must be >= 2, got {0}")]
    InvalidMinSamples(usize),

    #[error("attribution weights must sum to 1.0 (+/- 1e-6), got {0}")]
    WeightsNotNormalized(f64),
}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Errors surfaced by [`crate::CampaignDetector`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}
