//! Intent selection (Layer 1).
//!
//! [`IntentSelector`] wraps the rule table from [`super::intents`] with the
//! configured thresholds and the trace logging used across the AI pipeline.

use game_core::TacticsConfig;

use super::intents::{self, RuleConfig};
use crate::providers::ai::{Intent, TacticalContext};

/// Intent selector for Layer 1 decision-making.
///
/// # Determinism
///
/// Selection is pure: the same context always produces the same intent, and
/// the continuation check reads nothing but the intent kind and the context.
#[derive(Clone, Copy, Debug)]
pub struct IntentSelector {
    rules: RuleConfig,
}

impl IntentSelector {
    pub fn new(config: &TacticsConfig) -> Self {
        Self {
            rules: RuleConfig {
                counter_defense_above: config.counter_defense_above,
                restore_target: config.restore_target,
            },
        }
    }

    /// Picks a fresh intent from the cascade.
    ///
    /// # Returns
    ///
    /// The intent of the first rule whose guard holds. Never fails; the last
    /// rule is an unconditional `standard_attack`.
    pub fn choose(&self, ctx: &TacticalContext) -> Intent {
        let intent = intents::first_match(ctx, &self.rules);

        tracing::debug!(
            "IntentSelector: chose {} (priority={}, reason={})",
            intent.kind,
            intent.priority,
            intent.rationale
        );

        intent
    }

    /// Whether `current` should be carried into a turn with context `ctx`.
    pub fn should_maintain(&self, current: &Intent, ctx: &TacticalContext) -> bool {
        let keep = intents::still_holds(current.kind, ctx, &self.rules);

        tracing::debug!(
            "IntentSelector: continuation for {} -> {}",
            current.kind,
            if keep { "maintain" } else { "replace" }
        );

        keep
    }
}
