//! Similarity Drop switch classification
//!
//! Labels each position of a verbal fluency list as a semantic switch,
//! a non-switch, or a boundary, following the Similarity Drop method of
//! Hills, Jones & Todd (2012).
//!
//! `semantic_similarity[k]` is the similarity transitioning *into* position
//! `k` (item `k-1` to item `k`). An interior position is a switch when that
//! similarity is a strict local minimum relative to both neighbouring
//! transitions. The first and last positions have only one neighbour and are
//! always reported as [`SwitchLabel::Boundary`].

use crate::config::{ClassifierConfig, NanPolicy};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Per-position classification produced by the Similarity Drop method
///
/// Ordinals are fixed so persisted outputs stay compatible with plain
/// integer lists:
/// - 0 = no switch
/// - 1 = switch
/// - 2 = boundary (drop test not evaluable)
///
/// Serializes as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum SwitchLabel {
    /// Similarity into this position is not a strict local minimum
    NoSwitch = 0,

    /// Similarity into this position dips below both neighbours
    Switch = 1,

    /// First or last position, missing a neighbour on one side
    Boundary = 2,
}

impl SwitchLabel {
    /// Integer code (0, 1 or 2)
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            SwitchLabel::NoSwitch => "no_switch",
            SwitchLabel::Switch => "switch",
            SwitchLabel::Boundary => "boundary",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SwitchLabel::NoSwitch => "No Switch",
            SwitchLabel::Switch => "Switch",
            SwitchLabel::Boundary => "Boundary",
        }
    }

    /// All labels in ordinal order
    pub fn all_variants() -> &'static [SwitchLabel] {
        &[
            SwitchLabel::NoSwitch,
            SwitchLabel::Switch,
            SwitchLabel::Boundary,
        ]
    }
}

impl From<SwitchLabel> for u8 {
    fn from(label: SwitchLabel) -> Self {
        label.code()
    }
}

impl TryFrom<u8> for SwitchLabel {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(SwitchLabel::NoSwitch),
            1 => Ok(SwitchLabel::Switch),
            2 => Ok(SwitchLabel::Boundary),
            other => Err(Error::InvalidLabelCode(other)),
        }
    }
}

impl FromStr for SwitchLabel {
    type Err = Error;

    /// Parse a label name
    ///
    /// Case-insensitive; accepts `no_switch`, `no-switch`, `noswitch`,
    /// `switch` and `boundary`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "no_switch" | "noswitch" => Ok(SwitchLabel::NoSwitch),
            "switch" => Ok(SwitchLabel::Switch),
            "boundary" => Ok(SwitchLabel::Boundary),
            _ => Err(Error::InvalidLabelName(s.to_string())),
        }
    }
}

impl std::fmt::Display for SwitchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Strict double-sided drop test
///
/// True when `current` is strictly below both `previous` and `next`.
/// Ties and NaN on either side yield false.
pub fn is_similarity_drop(previous: f64, current: f64, next: f64) -> bool {
    next > current && previous > current
}

/// Similarity Drop classifier
///
/// Stateless apart from its NaN policy; cheap to copy and safe to share
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchClassifier {
    nan_policy: NanPolicy,
}

impl SwitchClassifier {
    /// Build a classifier from the `[classifier]` config section
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            nan_policy: config.nan_policy,
        }
    }

    pub fn with_nan_policy(nan_policy: NanPolicy) -> Self {
        Self { nan_policy }
    }

    pub fn nan_policy(&self) -> NanPolicy {
        self.nan_policy
    }

    /// Label every position of `fluency_list`
    ///
    /// Only the length of `fluency_list` is used. `semantic_similarity` must
    /// have the same length.
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`] if the two sequences differ in length
    ///   (checked first)
    /// - [`Error::EmptyInput`] if the fluency list is empty
    /// - [`Error::UnorderedSimilarity`] if any similarity is NaN and the
    ///   policy is [`NanPolicy::Reject`]
    ///
    /// # NaN handling
    /// Under [`NanPolicy::NoSwitch`] NaN values are compared with IEEE
    /// semantics: every comparison involving NaN is false, so any interior
    /// position whose drop test reads a NaN is labelled `NoSwitch`.
    pub fn classify<T>(
        &self,
        fluency_list: &[T],
        semantic_similarity: &[f64],
    ) -> Result<Vec<SwitchLabel>> {
        let len = fluency_list.len();

        if semantic_similarity.len() != len {
            return Err(Error::LengthMismatch {
                fluency: len,
                similarity: semantic_similarity.len(),
            });
        }
        if len == 0 {
            return Err(Error::EmptyInput);
        }

        if let Some(index) = semantic_similarity.iter().position(|s| s.is_nan()) {
            match self.nan_policy {
                NanPolicy::Reject => return Err(Error::UnorderedSimilarity { index }),
                NanPolicy::NoSwitch => warn!(
                    "NaN similarity at position {} of {}; affected positions labelled no-switch",
                    index, len
                ),
            }
        }

        let mut labels = Vec::with_capacity(len);
        for k in 0..len {
            if k > 0 && k < len - 1 {
                let dropped = is_similarity_drop(
                    semantic_similarity[k - 1],
                    semantic_similarity[k],
                    semantic_similarity[k + 1],
                );
                labels.push(if dropped {
                    SwitchLabel::Switch
                } else {
                    SwitchLabel::NoSwitch
                });
            } else {
                labels.push(SwitchLabel::Boundary);
            }
        }

        debug!("Classified {} fluency positions", len);
        Ok(labels)
    }
}

/// Label every position of a fluency list with the default classifier
///
/// See [`SwitchClassifier::classify`] for the rule, errors and NaN handling.
///
/// # Examples
///
/// ```
/// use simdrop_common::switch::{classify_switches, SwitchLabel};
///
/// let items = ["a", "b", "c", "d"];
/// let similarity = [0.5, 0.9, 0.2, 0.7];
/// let labels = classify_switches(&items, &similarity).unwrap();
///
/// assert_eq!(
///     labels,
///     vec![
///         SwitchLabel::Boundary,
///         SwitchLabel::NoSwitch,
///         SwitchLabel::Switch,
///         SwitchLabel::Boundary,
///     ]
/// );
/// ```
pub fn classify_switches<T>(
    fluency_list: &[T],
    semantic_similarity: &[f64],
) -> Result<Vec<SwitchLabel>> {
    SwitchClassifier::default().classify(fluency_list, semantic_similarity)
}
