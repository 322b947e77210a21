// Match engine: evaluates rules over an integer range, producing output
// strings lazily

use super::rules::{MatchSet, Rule};
use crate::error::MatchError;

/// Upper bound used when the caller does not supply one.
pub const DEFAULT_UPPER_BOUND: i64 = 100;

fn divides(candidate: i64, divisor: i64) -> bool {
    divisor != 0 && candidate % divisor == 0
}

/// Maps an integer range to output strings given a set of divisor-label
/// rules.
///
/// Each candidate that matches one or more rules yields the concatenation
/// of the matching labels in rule order; a candidate with no match yields
/// its decimal string. The predicate deciding a match defaults to plain
/// divisibility (with a zero divisor never matching) and can be replaced
/// wholesale via [`Matcher::with_predicate`].
pub struct Matcher<P = fn(i64, i64) -> bool>
where
    P: Fn(i64, i64) -> bool,
{
    predicate: P,
}

impl Matcher {
    /// Matcher using the default divisibility predicate.
    pub fn new() -> Self {
        Self { predicate: divides }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Matcher<P>
where
    P: Fn(i64, i64) -> bool,
{
    /// Matcher with a caller-supplied predicate. The predicate fully
    /// replaces the default and is invoked as `(candidate, divisor)` for
    /// every retained rule on every candidate. A panic inside it is not
    /// caught; it propagates to whoever drives the iterator.
    pub fn with_predicate(predicate: P) -> Self {
        Self { predicate }
    }

    /// Runs the rules against candidates 1..=[`DEFAULT_UPPER_BOUND`].
    pub fn matches(&self, rules: Option<&[Rule]>) -> Result<Matches<'_, P>, MatchError> {
        self.matches_up_to(rules, DEFAULT_UPPER_BOUND)
    }

    /// Runs the rules against candidates 1..=`upper_bound`.
    ///
    /// Validation and de-duplication happen eagerly here; the returned
    /// iterator computes each output string only as the consumer advances.
    /// An absent rule collection is the only error. A non-positive bound
    /// yields an empty iterator, not an error.
    pub fn matches_up_to(
        &self,
        rules: Option<&[Rule]>,
        upper_bound: i64,
    ) -> Result<Matches<'_, P>, MatchError> {
        let rules = rules.ok_or(MatchError::MissingRules)?;
        let set = MatchSet::from_rules(rules);

        tracing::debug!("matching {} rules against candidates 1..={}", set.len(), upper_bound);

        Ok(Matches {
            predicate: &self.predicate,
            set,
            next: 1,
            upper_bound,
        })
    }
}

/// Lazy stream of output strings, one per candidate in ascending order.
///
/// Dropping the iterator early is safe and runs no further candidates.
/// The stream is finite and not restartable; call the matcher again for a
/// fresh run.
pub struct Matches<'a, P>
where
    P: Fn(i64, i64) -> bool,
{
    predicate: &'a P,
    set: MatchSet,
    next: i64,
    upper_bound: i64,
}

impl<P> Iterator for Matches<'_, P>
where
    P: Fn(i64, i64) -> bool,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next > self.upper_bound {
            return None;
        }
        let candidate = self.next;
        self.next = self.next.saturating_add(1);

        let mut output = String::new();
        let mut matched = false;
        for rule in self.set.iter() {
            if (self.predicate)(candidate, rule.divisor) {
                matched = true;
                output.push_str(rule.label_text());
            }
        }

        if matched {
            Some(output)
        } else {
            Some(candidate.to_string())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .upper_bound
            .saturating_sub(self.next)
            .saturating_add(1)
            .max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl<P> ExactSizeIterator for Matches<'_, P> where P: Fn(i64, i64) -> bool {}

impl<P> std::iter::FusedIterator for Matches<'_, P> where P: Fn(i64, i64) -> bool {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_default_predicate_divisibility() {
        assert!(divides(6, 3));
        assert!(!divides(7, 3));
        assert!(divides(6, -3));
        assert!(divides(5, -1));
    }

    #[test]
    fn test_default_predicate_zero_divisor_never_matches() {
        assert!(!divides(0, 0));
        assert!(!divides(10, 0));
    }

    #[test]
    fn test_labels_concatenate_in_rule_order() {
        let rules = vec![Rule::new(5, "Buzz"), Rule::new(3, "Fizz")];
        let matcher = Matcher::new();

        let outputs: Vec<String> = matcher.matches_up_to(Some(&rules), 15).unwrap().collect();
        // Rule order, not divisor order, decides concatenation
        assert_eq!(outputs[14], "BuzzFizz");
    }

    #[test]
    fn test_candidates_evaluated_only_on_demand() {
        let evaluated = Cell::new(0i64);
        let matcher = Matcher::with_predicate(|candidate, divisor| {
            evaluated.set(evaluated.get().max(candidate));
            candidate % divisor == 0
        });
        let rules = vec![Rule::new(2, "Even")];

        let mut stream = matcher.matches_up_to(Some(&rules), 100).unwrap();
        stream.next();
        stream.next();
        drop(stream);

        // Only candidates 1 and 2 ever reached the predicate
        assert_eq!(evaluated.get(), 2);
    }

    #[test]
    fn test_exact_size_tracks_remaining() {
        let rules = vec![Rule::new(3, "Fizz")];
        let matcher = Matcher::new();

        let mut stream = matcher.matches_up_to(Some(&rules), 10).unwrap();
        assert_eq!(stream.len(), 10);
        stream.next();
        stream.next();
        assert_eq!(stream.len(), 8);
    }

    #[test]
    fn test_non_positive_bound_reports_zero_length() {
        let matcher = Matcher::new();
        let stream = matcher.matches_up_to(Some(&[]), -5).unwrap();
        assert_eq!(stream.len(), 0);
    }

    #[test]
    fn test_fresh_call_yields_fresh_stream() {
        let rules = vec![Rule::new(3, "Fizz")];
        let matcher = Matcher::new();

        let first: Vec<String> = matcher.matches_up_to(Some(&rules), 4).unwrap().collect();
        let second: Vec<String> = matcher.matches_up_to(Some(&rules), 4).unwrap().collect();
        assert_eq!(first, second);
    }
}
