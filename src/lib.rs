//! Campaign Detection Core
//!
//! Pure batch engine that groups discrete cyber-attack events into
//! coordinated campaigns and attributes each campaign to a threat-actor
//! archetype.
//!
//! ## Pipeline
//! ```text
//! raw events -> FeatureExtractor -> Dbscan -> CampaignAggregator <-> AttributionScorer -> CampaignRecord
//! ```
//!
//! The crate performs no I/O and keeps no state between passes beyond
//! the configuration handed to [`CampaignDetector`]. Given the same
//! working set and configuration, two runs produce identical output.
//!
//! ## Usage
//! ```ignore
//! use campaign_detection_core::{CampaignDetector, DetectionConfig};
//!
//! let detector = CampaignDetector::new(DetectionConfig::default())?;
//! let analysis = detector.detect(&events)?;
//! for campaign in &analysis.campaigns {
//!     println!("{} -> {}", campaign.campaign_id, campaign.attributed_actor);
//! }
//! ```

pub mod error;
pub mod logic;

// Re-export the main entry points for convenience
pub use error::{ConfigurationError, DetectionError, EncodingError};
pub use logic::campaign::{CampaignAnalysis, CampaignRecord, Sophistication};
pub use logic::config::DetectionConfig;
pub use logic::events::{AttackEvent, AttackType};
pub use logic::pipeline::CampaignDetector;
