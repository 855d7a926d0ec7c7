//! Explainable record of one decision.

use arrayvec::ArrayVec;
use game_core::{CombatPhase, CombatantId, TacticsConfig};
use serde::Serialize;

use super::{IntentKind, NoMoveReason, ScoredMove};

/// How the chosen move was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChoiceBasis {
    /// Highest score among the legal moves.
    TopScore,
    /// Dictated by the desperation phase.
    PhaseForced,
    /// Nothing could be chosen.
    NoMove,
}

/// A ranked candidate as it appears in a trace.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alternative {
    pub name: String,
    pub score: f32,
    pub intent_alignment: f32,
    pub reasons: Vec<String>,
    pub context_factors: Vec<String>,
}

impl From<&ScoredMove<'_>> for Alternative {
    fn from(scored: &ScoredMove<'_>) -> Self {
        Self {
            name: scored.candidate.name.clone(),
            score: scored.score,
            intent_alignment: scored.intent_alignment,
            reasons: scored.reasons.clone(),
            context_factors: scored.context_factors.clone(),
        }
    }
}

/// Everything needed to explain a decision after the fact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecisionTrace {
    pub turn: u32,
    pub combatant: CombatantId,
    pub phase: CombatPhase,
    pub intent: IntentKind,
    pub rationale: String,
    /// True when the previous intent was carried over.
    pub intent_maintained: bool,
    pub turns_held: u32,
    pub chosen: Option<String>,
    pub basis: ChoiceBasis,
    /// Best-scored candidates, best first.
    pub alternatives: ArrayVec<Alternative, { TacticsConfig::TRACE_ALTERNATIVES }>,
    /// Moves removed for being repeated too often.
    pub stale: Vec<String>,
    pub no_move: Option<NoMoveReason>,
}

impl DecisionTrace {
    /// Collects up to the configured number of top candidates.
    pub fn top_alternatives<'a, 'm: 'a>(
        ranked: impl IntoIterator<Item = &'a ScoredMove<'m>>,
    ) -> ArrayVec<Alternative, { TacticsConfig::TRACE_ALTERNATIVES }> {
        ranked
            .into_iter()
            .take(TacticsConfig::TRACE_ALTERNATIVES)
            .map(Alternative::from)
            .collect()
    }

    /// One-line summary for logs and the CLI.
    pub fn summary(&self) -> String {
        match (&self.chosen, &self.no_move) {
            (Some(name), _) => format!(
                "turn {} {}: {} via {} [{} held {}]",
                self.turn, self.combatant, name, self.basis, self.intent, self.turns_held
            ),
            (None, Some(reason)) => format!(
                "turn {} {}: no move ({reason}) [{}]",
                self.turn, self.combatant, self.intent
            ),
            (None, None) => format!("turn {} {}: no move [{}]", self.turn, self.combatant, self.intent),
        }
    }
}
