use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordinal table for evaluation grade tokens.
///
/// Every grade comparison in the engine goes through this table so an alternate
/// alphabet can be swapped in from the catalog. Tokens missing from the table rank
/// as `0`, the same as the lowest default grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeScale {
    ordinals: BTreeMap<String, i32>,
}

impl GradeScale {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let ordinals = entries
            .into_iter()
            .map(|(token, ordinal)| (token.into().trim().to_string(), ordinal))
            .collect();
        Self { ordinals }
    }

    pub fn ordinal(&self, grade: &str) -> i32 {
        self.ordinals.get(grade.trim()).copied().unwrap_or(0)
    }

    pub fn contains(&self, grade: &str) -> bool {
        self.ordinals.contains_key(grade.trim())
    }

    /// Signed distance between two grades; positive when `a` ranks above `b`.
    pub fn compare(&self, a: &str, b: &str) -> i32 {
        self.ordinal(a) - self.ordinal(b)
    }

    pub fn satisfies(&self, grade: &str, minimum: &str) -> bool {
        self.compare(grade, minimum) >= 0
    }

    /// Tokens from highest to lowest ordinal.
    pub fn ranked(&self) -> Vec<&str> {
        let mut tokens: Vec<(&str, i32)> = self
            .ordinals
            .iter()
            .map(|(token, ordinal)| (token.as_str(), *ordinal))
            .collect();
        tokens.sort_by(|left, right| match right.1.cmp(&left.1) {
            Ordering::Equal => left.0.cmp(right.0),
            other => other,
        });
        tokens.into_iter().map(|(token, _)| token).collect()
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::new([("S", 5), ("A+", 4), ("A", 3), ("B+", 2), ("B", 1), ("C", 0)])
    }
}
