//! Scoring for the tactical AI.
//!
//! The decision pipeline has two scoring layers:
//!
//! 1. **Intent selection** ([`intents`], [`selector`]): what posture to take.
//! 2. **Move scoring** ([`actions`]): which legal move best serves it.
//!
//! # Structured Scoring
//!
//! Move scores are additive. Every term is recorded in a [`Tally`] together
//! with a short reason, so the final number can always be explained term by
//! term in a decision trace.
//!
//! ```text
//! score = class base
//!       - affordability penalties
//!       + alignment(0..=10) x weight
//!       + context bonuses
//!       + tie-break noise
//! ```

pub mod actions;
pub mod intents;
pub mod selector;

/// Running sum of score terms with their reasons.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tally {
    total: f32,
    reasons: Vec<String>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term. Zero-valued terms are skipped so reasons stay meaningful.
    pub fn add(&mut self, value: f32, reason: impl AsRef<str>) {
        if value == 0.0 {
            return;
        }
        self.total += value;
        self.reasons.push(format!("{} ({:+.1})", reason.as_ref(), value));
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn into_parts(self) -> (f32, Vec<String>) {
        (self.total, self.reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_sums_and_labels_terms() {
        let mut tally = Tally::new();
        tally.add(12.0, "net damage");
        tally.add(-40.0, "unaffordable");
        tally.add(0.0, "ignored");

        assert_eq!(tally.total(), -28.0);
        assert_eq!(tally.reasons(), ["net damage (+12.0)", "unaffordable (-40.0)"]);
    }
}
