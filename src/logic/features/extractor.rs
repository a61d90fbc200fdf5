//! Feature Extractor - Events to Scaled Matrix
//!
//! Converts the working set into an 8-dimensional matrix per
//! `layout::FEATURE_LAYOUT`, encodes categoricals through the codebook,
//! and standard-scales the result. Events the codebook cannot encode
//! are excluded and reported, not dropped silently.

use chrono::{Datelike, Timelike};
use ndarray::Array2;

use crate::error::EncodingError;
use crate::logic::events::AttackEvent;

use super::codebook::Codebook;
use super::layout::{layout_hash, FEATURE_COUNT, FEATURE_VERSION};
use super::scaler::StandardScaler;

// ============================================================================
// FEATURE MATRIX
// ============================================================================

/// Scaled feature matrix for one pass, with layout metadata
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Scaled values, one row per encoded event
    pub data: Array2<f64>,
    /// Row -> index into the original input slice
    pub event_index: Vec<usize>,
    /// Normalization parameters fitted on this batch
    pub scaler: StandardScaler,
}

impl FeatureMatrix {
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }
}

// ============================================================================
// FEATURE EXTRACTOR
// ============================================================================

/// Encodes events against a codebook and produces the scaled matrix
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    codebook: Codebook,
}

impl FeatureExtractor {
    pub fn new(codebook: Codebook) -> Self {
        Self { codebook }
    }

    /// Build the scaled feature matrix for the working set.
    ///
    /// Returns the matrix over the events that encoded cleanly, plus
    /// one `EncodingError` per rejected event. Input order is
    /// preserved; `event_index` maps rows back to the input slice.
    pub fn extract(&self, events: &[AttackEvent]) -> (FeatureMatrix, Vec<EncodingError>) {
        let mut rows: Vec<[f64; FEATURE_COUNT]> = Vec::with_capacity(events.len());
        let mut event_index = Vec::with_capacity(events.len());
        let mut rejected = Vec::new();

        for (i, event) in events.iter().enumerate() {
            match self.codebook.encode_event(event) {
                Ok((source_code, attack_code, target_code)) => {
                    rows.push([
                        event.timestamp.hour() as f64,
                        event.timestamp.weekday().num_days_from_monday() as f64,
                        source_code as f64,
                        attack_code as f64,
                        event.intensity as f64,
                        target_code as f64,
                        event.source_lat / 90.0,
                        event.source_lon / 180.0,
                    ]);
                    event_index.push(i);
                }
                Err(err) => {
                    log::warn!("excluding event from pass: {}", err);
                    rejected.push(err);
                }
            }
        }

        let raw = Array2::from_shape_vec(
            (rows.len(), FEATURE_COUNT),
            rows.into_iter().flatten().collect(),
        )
        .unwrap_or_else(|_| Array2::zeros((0, FEATURE_COUNT)));

        let (data, scaler) = StandardScaler::fit_transform(&raw);

        let matrix = FeatureMatrix {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            data,
            event_index,
            scaler,
        };
        (matrix, rejected)
    }
}
