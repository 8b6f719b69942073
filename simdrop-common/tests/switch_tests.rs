//! Integration tests for Similarity Drop switch classification
//!
//! Covers:
//! - Boundary labelling of first/last positions
//! - Strict local-minimum rule for interior positions
//! - Degenerate lengths (1 and 2)
//! - Length mismatch and empty input errors
//! - Integer serialization of labels

use simdrop_common::config::NanPolicy;
use simdrop_common::switch::{classify_switches, is_similarity_drop, SwitchClassifier, SwitchLabel};
use simdrop_common::Error;

use SwitchLabel::{Boundary, NoSwitch, Switch};

#[test]
fn test_three_items_single_interior_no_switch() {
    let labels = classify_switches(&["dog", "cat", "wolf"], &[0.1, 0.9, 0.2]).unwrap();
    assert_eq!(labels, vec![Boundary, NoSwitch, Boundary]);
}

#[test]
fn test_four_items_with_switch() {
    let labels = classify_switches(&["a", "b", "c", "d"], &[0.5, 0.9, 0.2, 0.7]).unwrap();
    assert_eq!(labels, vec![Boundary, NoSwitch, Switch, Boundary]);
}

#[test]
fn test_single_item_is_boundary() {
    let labels = classify_switches(&["x"], &[0.3]).unwrap();
    assert_eq!(labels, vec![Boundary]);
}

#[test]
fn test_two_items_are_boundaries() {
    let labels = classify_switches(&["x", "y"], &[0.9, 0.1]).unwrap();
    assert_eq!(labels, vec![Boundary, Boundary]);
}

#[test]
fn test_length_mismatch() {
    let result = classify_switches(&["a", "b"], &[0.1]);
    match result {
        Err(Error::LengthMismatch { fluency, similarity }) => {
            assert_eq!(fluency, 2);
            assert_eq!(similarity, 1);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_empty_input() {
    let items: Vec<String> = Vec::new();
    let result = classify_switches(&items, &[]);
    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn test_ties_never_switch() {
    let labels = classify_switches(&["a", "b", "c", "d"], &[0.5, 0.5, 0.5, 0.9]).unwrap();
    assert_eq!(labels, vec![Boundary, NoSwitch, NoSwitch, Boundary]);

    // Tie on the right-hand side only
    let labels = classify_switches(&["a", "b", "c"], &[0.9, 0.4, 0.4]).unwrap();
    assert_eq!(labels, vec![Boundary, NoSwitch, Boundary]);
}

#[test]
fn test_consecutive_dips() {
    let similarity = [0.8, 0.3, 0.6, 0.2, 0.9, 0.5, 0.7];
    let items: Vec<usize> = (0..similarity.len()).collect();
    let labels = classify_switches(&items, &similarity).unwrap();
    assert_eq!(
        labels,
        vec![Boundary, Switch, NoSwitch, Switch, NoSwitch, Switch, Boundary]
    );
}

#[test]
fn test_monotonic_sequences_have_no_switches() {
    let rising: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
    let falling: Vec<f64> = rising.iter().rev().copied().collect();

    for similarity in [&rising, &falling] {
        let labels = classify_switches(similarity, similarity).unwrap();
        assert!(!labels.contains(&Switch));
    }
}

#[test]
fn test_output_properties_hold_across_lengths() {
    // Saw-tooth pattern: every odd index is a dip
    for len in 1..12 {
        let similarity: Vec<f64> = (0..len)
            .map(|i| if i % 2 == 1 { 0.1 } else { 0.9 })
            .collect();
        let items = vec!["item"; len];
        let labels = classify_switches(&items, &similarity).unwrap();

        assert_eq!(labels.len(), len);
        assert_eq!(labels[0], Boundary);
        assert_eq!(labels[len - 1], Boundary);
        if len <= 2 {
            assert!(labels.iter().all(|l| *l == Boundary));
        }

        for k in 1..len.saturating_sub(1) {
            let expected = if is_similarity_drop(similarity[k - 1], similarity[k], similarity[k + 1]) {
                Switch
            } else {
                NoSwitch
            };
            assert_eq!(labels[k], expected, "len {} position {}", len, k);
        }
    }
}

#[test]
fn test_inputs_are_not_modified() {
    let items = vec!["dog".to_string(), "cat".to_string(), "wolf".to_string()];
    let similarity = vec![0.4, 0.1, 0.6];
    let _ = classify_switches(&items, &similarity).unwrap();
    assert_eq!(items, vec!["dog", "cat", "wolf"]);
    assert_eq!(similarity, vec![0.4, 0.1, 0.6]);
}

#[test]
fn test_reject_policy_passes_clean_input() {
    let classifier = SwitchClassifier::with_nan_policy(NanPolicy::Reject);
    let labels = classifier
        .classify(&["a", "b", "c", "d"], &[0.5, 0.9, 0.2, 0.7])
        .unwrap();
    assert_eq!(labels, vec![Boundary, NoSwitch, Switch, Boundary]);
}

#[test]
fn test_reject_policy_reports_first_nan() {
    let classifier = SwitchClassifier::with_nan_policy(NanPolicy::Reject);
    let result = classifier.classify(&[1, 2, 3, 4], &[0.5, 0.2, f64::NAN, f64::NAN]);
    assert!(matches!(result, Err(Error::UnorderedSimilarity { index: 2 })));
}

#[test]
fn test_labels_serialize_as_codes() {
    let labels = classify_switches(&["a", "b", "c", "d"], &[0.5, 0.9, 0.2, 0.7]).unwrap();
    let json = serde_json::to_string(&labels).unwrap();
    assert_eq!(json, "[2,0,1,2]");

    let decoded: Vec<SwitchLabel> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, labels);
}

#[test]
fn test_invalid_code_rejected_on_deserialize() {
    let result: Result<Vec<SwitchLabel>, _> = serde_json::from_str("[0,1,3]");
    assert!(result.is_err());
}

#[test]
fn test_error_messages() {
    let err = classify_switches(&["a", "b"], &[0.1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Length mismatch: fluency list has 2 items, semantic similarity has 1"
    );

    let empty: [u8; 0] = [];
    let err = classify_switches(&empty, &[]).unwrap_err();
    assert!(err.to_string().starts_with("Empty input"));
}
