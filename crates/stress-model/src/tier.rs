//! Stress Tier Mapping

use serde::Serialize;

/// Stress level tier predicted by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Low,
    Moderate,
    High,
}

struct TierRecord {
    label: i64,
    tier: Tier,
    advisory: &'static str,
}

/// Label-indexed tier table. The table is the single mapping from class
/// labels to tiers; a label without a row is an internal error, never a
/// fallen-through default.
const TIER_TABLE: [TierRecord; 3] = [
    TierRecord {
        label: 0,
        tier: Tier::Low,
        advisory: "You appear mentally balanced. You are currently experiencing a low level of \
                   stress, which indicates good emotional balance and healthy coping habits. Keep \
                   maintaining a positive lifestyle, regular physical activity, and proper rest to \
                   stay well.",
    },
    TierRecord {
        label: 1,
        tier: Tier::Moderate,
        advisory: "You may be experiencing a moderate level of stress. This is common and \
                   manageable, but it is important to pay attention to your mental well-being. \
                   Consider taking short breaks, practicing relaxation techniques, and maintaining \
                   a balanced routine.",
    },
    TierRecord {
        label: 2,
        tier: Tier::High,
        advisory: "You are experiencing a high level of stress, which may affect your mental and \
                   physical health. It is strongly recommended to seek support, reduce workload \
                   where possible, practice stress-relief activities, and consider consulting a \
                   mental health professional.",
    },
];

impl Tier {
    /// Look up the tier for a class label
    pub fn from_label(label: i64) -> Option<Tier> {
        TIER_TABLE
            .iter()
            .find(|record| record.label == label)
            .map(|record| record.tier)
    }

    /// Tier name
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Moderate => "Moderate",
            Tier::High => "High",
        }
    }

    /// Fixed advisory message for this tier
    pub fn advisory(&self) -> &'static str {
        TIER_TABLE
            .iter()
            .find(|record| record.tier == *self)
            .map(|record| record.advisory)
            .expect("every tier has a table row")
    }
}

/// Outcome of one classification request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    /// Class label returned by the model
    pub label: i64,
    /// Tier the label maps to
    pub tier: Tier,
    /// Advisory message for the tier
    pub advisory: &'static str,
}

impl PredictionResult {
    pub(crate) fn new(label: i64, tier: Tier) -> Self {
        Self {
            label,
            tier,
            advisory: tier.advisory(),
        }
    }
}
