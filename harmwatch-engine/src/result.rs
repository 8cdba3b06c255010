use serde::{Deserialize, Serialize};

use crate::rules::{Category, RiskLevel};

/// Outcome of classifying a single record: exactly one category and one
/// risk level, never unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub risk: RiskLevel,
}

/// Per-record output of a batch classification pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResult {
    pub index: usize,
    pub clean_text: String,
    pub domains: Vec<String>,
    pub category: Category,
    pub risk: RiskLevel,
}

impl RecordResult {
    pub fn new(
        index: usize,
        clean_text: String,
        domains: Vec<String>,
        classification: Classification,
    ) -> Self {
        Self {
            index,
            clean_text,
            domains,
            category: classification.category,
            risk: classification.risk,
        }
    }

    /// High and medium risk records are surfaced for review.
    pub fn is_flagged(&self) -> bool {
        self.risk.is_flagged()
    }
}
