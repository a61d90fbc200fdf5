//! Codebook - Explicit Categorical Encodings
//!
//! Maps country names and attack types to stable integer codes used in
//! the feature vector. The tables are configuration, not baked
//! constants, so tests and operators can substitute controlled
//! codebooks. A name outside the codebook is an `EncodingError`, never
//! silently coerced to a default code.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{EncodingError, EncodingField};
use crate::logic::events::{AttackEvent, AttackType};

// ============================================================================
// DEFAULT TABLES
// ============================================================================

/// Default country codes (codes 1-15, stable)
static DEFAULT_COUNTRIES: Lazy<BTreeMap<String, u16>> = Lazy::new(|| {
    [
        ("United States", 1),
        ("China", 2),
        ("Russia", 3),
        ("Germany", 4),
        ("United Kingdom", 5),
        ("France", 6),
        ("Japan", 7),
        ("Brazil", 8),
        ("India", 9),
        ("South Korea", 10),
        ("Canada", 11),
        ("Australia", 12),
        ("Netherlands", 13),
        ("Poland", 14),
        ("Sweden", 15),
    ]
    .into_iter()
    .map(|(name, code)| (name.to_string(), code))
    .collect()
});

/// Default attack-type codes (codes 1-8, stable)
static DEFAULT_ATTACK_TYPES: Lazy<BTreeMap<AttackType, u16>> = Lazy::new(|| {
    AttackType::ALL
        .into_iter()
        .enumerate()
        .map(|(i, ty)| (ty, (i + 1) as u16))
        .collect()
});

// ============================================================================
// CODEBOOK
// ============================================================================

/// Categorical encoding tables for one detection pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codebook {
    /// Country name -> code
    pub countries: BTreeMap<String, u16>,
    /// Attack type -> code
    pub attack_types: BTreeMap<AttackType, u16>,
}

impl Default for Codebook {
    fn default() -> Self {
        Self {
            countries: DEFAULT_COUNTRIES.clone(),
            attack_types: DEFAULT_ATTACK_TYPES.clone(),
        }
    }
}

impl Codebook {
    /// Encode a country name, with the event id for error reporting
    pub fn encode_country(
        &self,
        event_id: &str,
        field: EncodingField,
        country: &str,
    ) -> Result<u16, EncodingError> {
        self.countries.get(country).copied().ok_or_else(|| EncodingError {
            event_id: event_id.to_string(),
            field,
            value: country.to_string(),
        })
    }

    /// Encode an attack type
    pub fn encode_attack_type(
        &self,
        event_id: &str,
        attack_type: AttackType,
    ) -> Result<u16, EncodingError> {
        self.attack_types
            .get(&attack_type)
            .copied()
            .ok_or_else(|| EncodingError {
                event_id: event_id.to_string(),
                field: EncodingField::AttackType,
                value: attack_type.as_str().to_string(),
            })
    }

    /// Encode all categorical fields of one event.
    /// Returns (source_country, attack_type, target_country) codes.
    pub fn encode_event(&self, event: &AttackEvent) -> Result<(u16, u16, u16), EncodingError> {
        let source =
            self.encode_country(&event.id, EncodingField::SourceCountry, &event.source_country)?;
        let attack = self.encode_attack_type(&event.id, event.attack_type)?;
        let target =
            self.encode_country(&event.id, EncodingField::TargetCountry, &event.target_country)?;
        Ok((source, attack, target))
    }
}
