//! Scenario Tests for the Full Detection Pass
//!
//! End-to-end properties over the whole pipeline: tight DDoS burst,
//! ransomware wave, isolated noise, empty input, plus determinism,
//! partition, and idempotence checks.

use chrono::{Duration, TimeZone, Utc};

use crate::error::{ConfigurationError, DetectionError};
use crate::logic::attribution::rules::AttributionWeights;
use crate::logic::attribution::ThreatActor;
use crate::logic::config::DetectionConfig;
use crate::logic::events::{AttackEvent, AttackType};
use crate::logic::pipeline::CampaignDetector;

/// Fresh detector with default configuration, logging wired up so
/// `RUST_LOG=debug cargo test` shows the pass internals
fn default_detector() -> CampaignDetector {
    let _ = env_logger::builder().is_test(true).try_init();
    CampaignDetector::new(DetectionConfig::default()).unwrap()
}

/// Builder for test events. Within-campaign events share every feature
/// column (same hour, country, type, intensity, coordinates), so their
/// scaled rows are identical no matter what else is in the batch.
fn event(
    id: &str,
    minutes: i64,
    country: &str,
    ty: AttackType,
    intensity: u8,
    lat: f64,
    lon: f64,
) -> AttackEvent {
    let base = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
    AttackEvent {
        id: id.to_string(),
        timestamp: base + Duration::minutes(minutes),
        source_country: country.to_string(),
        target_country: "Germany".to_string(),
        attack_type: ty,
        intensity,
        source_lat: lat,
        source_lon: lon,
        target_lat: 51.16,
        target_lon: 10.45,
    }
}

fn ddos_burst() -> Vec<AttackEvent> {
    vec![
        event("ddos_1", 0, "United States", AttackType::DDoS, 8, 39.8, -98.6),
        event("ddos_2", 2, "United States", AttackType::DDoS, 8, 39.8, -98.6),
        event("ddos_3", 4, "United States", AttackType::DDoS, 8, 39.8, -98.6),
    ]
}

#[test]
fn test_scenario_tight_ddos_burst_forms_one_hacktivist_campaign() {
    let detector = default_detector();
    let analysis = detector.detect(&ddos_burst()).unwrap();

    assert_eq!(analysis.total_detected, 1);
    assert_eq!(analysis.total_attacks_analyzed, 3);

    let campaign = &analysis.campaigns[0];
    assert_eq!(campaign.num_attacks, 3);
    assert_eq!(campaign.attributed_actor, ThreatActor::HacktivistCollective);
    assert_eq!(campaign.campaign_id, "CAMPAIGN_0001");
    assert_eq!(campaign.primary_source_country, "United States");
    assert_eq!(campaign.duration_minutes, 4.0);
}

#[test]
fn test_scenario_ransomware_wave_attributed_to_criminal_org() {
    // Ransomware + Malware mix: the attack-type column varies inside
    // the campaign, so a wider radius is configured for this pass
    let config = DetectionConfig {
        eps: 3.0,
        ..Default::default()
    };
    let detector = CampaignDetector::new(config).unwrap();
    let events = vec![
        event("ran_1", 0, "Brazil", AttackType::Ransomware, 4, -14.2, -51.9),
        event("ran_2", 4, "Brazil", AttackType::Malware, 4, -14.2, -51.9),
        event("ran_3", 8, "Brazil", AttackType::Ransomware, 4, -14.2, -51.9),
    ];
    let analysis = detector.detect(&events).unwrap();

    assert_eq!(analysis.total_detected, 1);
    let campaign = &analysis.campaigns[0];
    assert_eq!(campaign.attributed_actor, ThreatActor::CriminalOrganization);
    assert!(
        campaign.confidence >= 0.7 && campaign.confidence <= 0.9,
        "confidence {} outside expected band",
        campaign.confidence
    );
    assert_eq!(campaign.attack_types["Ransomware"], 2);
    assert_eq!(campaign.attack_types["Malware"], 1);
}

#[test]
fn test_scenario_isolated_events_stay_noise() {
    let detector = default_detector();
    // Mutually distant in country, type, hour, and coordinates
    let events = vec![
        event("iso_1", 0, "Japan", AttackType::Phishing, 2, 36.2, 138.2),
        event("iso_2", 300, "Canada", AttackType::Xss, 9, 56.1, -106.3),
        event("iso_3", 700, "Sweden", AttackType::BruteForce, 5, 60.1, 18.6),
    ];
    let analysis = detector.detect(&events).unwrap();

    assert_eq!(analysis.total_detected, 0);
    assert_eq!(analysis.total_attacks_analyzed, 3);
    assert!(analysis.campaigns.is_empty());
}

#[test]
fn test_single_event_below_campaign_floor_yields_empty_analysis() {
    // One event can never reach min_samples: the pass short-circuits
    // before clustering and reports a well-formed empty result
    let detector = default_detector();
    let events = vec![event("solo", 0, "Japan", AttackType::Phishing, 4, 36.2, 138.2)];
    let analysis = detector.detect(&events).unwrap();

    assert_eq!(analysis.total_attacks_analyzed, 1);
    assert_eq!(analysis.total_detected, 0);
    assert!(analysis.campaigns.is_empty());
    assert!(analysis.encoding_errors.is_empty());
}

#[test]
fn test_two_events_below_default_min_samples_yield_no_campaigns() {
    let detector = default_detector();
    let events = vec![
        event("pair_1", 0, "Japan", AttackType::Phishing, 4, 36.2, 138.2),
        event("pair_2", 2, "Japan", AttackType::Phishing, 4, 36.2, 138.2),
    ];
    let analysis = detector.detect(&events).unwrap();

    assert_eq!(analysis.total_attacks_analyzed, 2);
    assert_eq!(analysis.total_detected, 0);
    assert!(analysis.campaigns.is_empty());
}

#[test]
fn test_scenario_empty_input_is_not_an_error() {
    let detector = default_detector();
    let analysis = detector.detect(&[]).unwrap();

    assert_eq!(analysis.total_attacks_analyzed, 0);
    assert_eq!(analysis.total_detected, 0);
    assert!(analysis.campaigns.is_empty());
    assert!(analysis.encoding_errors.is_empty());
}

#[test]
fn test_noise_event_excluded_from_all_campaigns() {
    let detector = default_detector();
    let mut events = ddos_burst();
    events.push(event("lone", 500, "Sweden", AttackType::Phishing, 2, 60.1, 18.6));

    let analysis = detector.detect(&events).unwrap();
    assert_eq!(analysis.total_detected, 1);
    assert_eq!(analysis.total_attacks_analyzed, 4);
    for campaign in &analysis.campaigns {
        assert!(!campaign.attack_ids.contains(&"lone".to_string()));
    }
}

#[test]
fn test_partition_no_event_in_two_campaigns() {
    let detector = default_detector();
    let mut events = ddos_burst();
    // Second campaign in a different hour, country, and type
    for i in 0..4 {
        events.push(event(
            &format!("mal_{i}"),
            120 + i * 3,
            "China",
            AttackType::Malware,
            6,
            35.9,
            104.2,
        ));
    }
    events.push(event("lone", 700, "Sweden", AttackType::Xss, 1, 60.1, 18.6));

    let analysis = detector.detect(&events).unwrap();
    assert_eq!(analysis.total_detected, 2);

    let mut seen = std::collections::BTreeSet::new();
    for campaign in &analysis.campaigns {
        assert!(campaign.num_attacks >= detector.config().min_samples);
        for id in &campaign.attack_ids {
            assert!(seen.insert(id.clone()), "event {id} in two campaigns");
        }
    }
    // Larger campaign first
    assert_eq!(analysis.campaigns[0].num_attacks, 4);
    assert_eq!(analysis.campaigns[1].num_attacks, 3);
}

#[test]
fn test_determinism_identical_runs_identical_output() {
    let detector = default_detector();
    let mut events = ddos_burst();
    for i in 0..5 {
        events.push(event(
            &format!("mal_{i}"),
            60 + i * 2,
            "Russia",
            AttackType::Malware,
            7,
            61.5,
            105.3,
        ));
    }

    let first = detector.detect(&events).unwrap();
    let second = detector.detect(&events).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_idempotence_byte_identical_serialization() {
    let detector = default_detector();
    let events = ddos_burst();

    let a = serde_json::to_string(&detector.detect(&events).unwrap()).unwrap();
    let b = serde_json::to_string(&detector.detect(&events).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_confidence_bounds_hold_for_all_campaigns() {
    let detector = default_detector();
    let mut events = ddos_burst();
    for i in 0..6 {
        events.push(event(
            &format!("bf_{i}"),
            200 + i * 17,
            "Poland",
            AttackType::BruteForce,
            3,
            51.9,
            19.1,
        ));
    }
    let analysis = detector.detect(&events).unwrap();
    assert!(analysis.total_detected >= 1);
    for campaign in &analysis.campaigns {
        assert!((0.0..=1.0).contains(&campaign.confidence));
        let b = &campaign.score_breakdown;
        for contribution in [
            b.signature_contribution,
            b.geographic_contribution,
            b.timing_contribution,
            b.operational_contribution,
        ] {
            assert!((0.0..=1.0).contains(&contribution));
        }
    }
}

#[test]
fn test_invalid_weights_rejected_before_scoring() {
    let config = DetectionConfig {
        weights: AttributionWeights {
            signature: 0.4,
            geographic: 0.4,
            timing: 0.2,
            operational: 0.15,
        },
        ..Default::default()
    };
    let err = CampaignDetector::new(config).unwrap_err();
    assert!(matches!(
        err,
        DetectionError::Configuration(ConfigurationError::WeightsNotNormalized(_))
    ));
}

#[test]
fn test_unknown_country_reported_with_partial_result() {
    let detector = default_detector();
    let mut events = ddos_burst();
    events.push(event("bad", 6, "Atlantis", AttackType::DDoS, 8, 0.0, 0.0));

    let analysis = detector.detect(&events).unwrap();
    assert_eq!(analysis.total_attacks_analyzed, 3);
    assert_eq!(analysis.total_detected, 1);
    assert_eq!(analysis.encoding_errors.len(), 1);
    assert_eq!(analysis.encoding_errors[0].event_id, "bad");
}

#[test]
fn test_wire_shape_of_campaign_record() {
    let detector = default_detector();
    let analysis = detector.detect(&ddos_burst()).unwrap();
    let value = serde_json::to_value(&analysis.campaigns[0]).unwrap();

    assert_eq!(value["campaign_id"], "CAMPAIGN_0001");
    assert_eq!(value["attributed_actor"], "Hacktivist Collective");
    assert_eq!(value["sophistication"], "Medium");
    assert_eq!(value["primary_source_country"], "United States");
    assert_eq!(value["attack_types"]["DDoS"], 3);
    assert_eq!(value["num_attacks"], 3);
    assert_eq!(value["duration_minutes"], 4.0);
    // mean intensity 8, 3 members: 8 * 0.6 + 3 * 0.4
    assert_eq!(value["severity_score"], 6.0);
    assert!(value["confidence"].as_f64().unwrap() > 0.0);
}
