//! Attack Event Types
//!
//! Raw input records handed over by the collector. Immutable once
//! created; the core never mutates them, only reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ATTACK TYPE
// ============================================================================

/// Closed enumeration of observed attack categories.
///
/// The display names are the wire names used by the collector and in
/// `CampaignRecord::attack_types`; do not change them without a
/// codebook version bump.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AttackType {
    #[serde(rename = "DDoS")]
    DDoS,
    Malware,
    Ransomware,
    Phishing,
    #[serde(rename = "Brute Force")]
    BruteForce,
    #[serde(rename = "SQL Injection")]
    SqlInjection,
    #[serde(rename = "XSS")]
    Xss,
    Other,
}

impl AttackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackType::DDoS => "DDoS",
            AttackType::Malware => "Malware",
            AttackType::Ransomware => "Ransomware",
            AttackType::Phishing => "Phishing",
            AttackType::BruteForce => "Brute Force",
            AttackType::SqlInjection => "SQL Injection",
            AttackType::Xss => "XSS",
            AttackType::Other => "Other",
        }
    }

    /// All variants, in stable codebook order
    pub const ALL: [AttackType; 8] = [
        AttackType::DDoS,
        AttackType::Malware,
        AttackType::Ransomware,
        AttackType::Phishing,
        AttackType::BruteForce,
        AttackType::SqlInjection,
        AttackType::Xss,
        AttackType::Other,
    ];
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ATTACK EVENT
// ============================================================================

/// One observed incident from the collector feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackEvent {
    /// Unique event id
    pub id: String,
    /// When the attack was observed (UTC)
    pub timestamp: DateTime<Utc>,
    /// Country the attack originated from
    pub source_country: String,
    /// Country the attack targeted
    pub target_country: String,
    /// Attack category
    pub attack_type: AttackType,
    /// Severity 1-10
    pub intensity: u8,
    /// Source coordinates
    pub source_lat: f64,
    pub source_lon: f64,
    /// Target coordinates
    pub target_lat: f64,
    pub target_lon: f64,
}
