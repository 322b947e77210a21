// Match rules and the de-duplicated set used during a run

use std::collections::HashSet;

/// One matching condition: a divisor paired with an optional label.
///
/// A zero or negative divisor is legal data; whether it ever matches is
/// decided by the predicate, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub divisor: i64,
    pub label: Option<String>,
}

impl Rule {
    pub fn new(divisor: i64, label: impl Into<String>) -> Self {
        Self {
            divisor,
            label: Some(label.into()),
        }
    }

    /// A rule whose matches contribute nothing to the output text.
    pub fn unlabeled(divisor: i64) -> Self {
        Self {
            divisor,
            label: None,
        }
    }

    /// Label as rendered into output. Absent labels render as empty text,
    /// never as a placeholder.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// The order-preserving set of rules actually evaluated during one match
/// run. Rules are keyed by divisor only; the first label seen for a divisor
/// wins and later duplicates are discarded regardless of label.
#[derive(Debug, Clone)]
pub struct MatchSet {
    rules: Vec<Rule>,
}

impl MatchSet {
    pub fn from_rules(rules: &[Rule]) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(rules.len());

        for rule in rules {
            if seen.insert(rule.divisor) {
                kept.push(rule.clone());
            } else {
                tracing::debug!("discarding duplicate rule for divisor {}", rule.divisor);
            }
        }

        Self { rules: kept }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}
