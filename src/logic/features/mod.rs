//! Features Module - Feature Engineering
//!
//! Turns raw attack events into a normalized numeric matrix.
//! - `layout`: the authoritative feature ordering, versioned
//! - `codebook`: explicit country / attack-type code tables
//! - `scaler`: per-column standard scaling
//! - `extractor`: assembly of the scaled feature matrix

pub mod layout;
pub mod codebook;
pub mod scaler;
pub mod extractor;

// Re-export common types
pub use codebook::Codebook;
pub use extractor::{FeatureExtractor, FeatureMatrix};
pub use layout::{layout_hash, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use scaler::StandardScaler;
