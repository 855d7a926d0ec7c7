//! Move scoring (Layer 2).
//!
//! This module turns a legal move plus the current context and intent into a
//! [`ScoredMove`]: a number with every contributing term spelled out.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: Intent → go_for_finish
//! Layer 2: Move   → Lightning Strike  ← This layer
//! ```
//!
//! # Design
//!
//! - **base**: class value (net damage, defense, utility) and status bonus
//! - **bonuses**: affordability penalties and context bonuses
//! - **alignment**: the 0-10 intent alignment table
//! - **MoveScorer**: orchestrator that sums the terms and adds tie-break noise

pub mod alignment;
pub mod base;
pub mod bonuses;

use std::fmt::Write as _;

use game_core::{
    CombatantId, CombatantSnapshot, Move, MoveCatalog, RngOracle, TacticsConfig, compute_seed,
};
use serde::Serialize;

use super::Tally;
use crate::providers::ai::{Intent, TacticalContext};

/// A move with its score and the explanation behind it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredMove<'m> {
    pub candidate: &'m Move,
    pub score: f32,
    /// Labeled terms in the order they were added.
    pub reasons: Vec<String>,
    /// Context bonuses that applied.
    pub context_factors: Vec<String>,
    /// Raw alignment with the intent, before weighting (0-10).
    pub intent_alignment: f32,
}

impl ScoredMove<'_> {
    pub fn name(&self) -> &str {
        &self.candidate.name
    }
}

/// Where tie-break noise comes from for one decision.
///
/// The draw for each candidate is seeded by the battle seed, the turn, the
/// deciding combatant and the candidate's catalog index, so replaying a
/// decision reproduces it exactly.
#[derive(Clone, Copy)]
pub struct NoiseSource<'a> {
    pub rng: &'a dyn RngOracle,
    pub catalog: &'a MoveCatalog,
    pub battle_seed: u64,
    pub turn: u32,
    pub combatant: CombatantId,
}

impl NoiseSource<'_> {
    fn draw(&self, candidate: &Move, amplitude: f32) -> f32 {
        let slot = self
            .catalog
            .index_of(&candidate.name)
            .map_or(u32::MAX, |index| index as u32);
        let seed = compute_seed(self.battle_seed, self.turn as u64, self.combatant.0, slot);
        self.rng.symmetric(seed, amplitude)
    }
}

/// Scores candidate moves against a context and intent.
///
/// Without a [`NoiseSource`] the scorer is fully deterministic and adds no
/// perturbation at all.
#[derive(Clone, Copy)]
pub struct MoveScorer<'a> {
    config: &'a TacticsConfig,
    noise: Option<NoiseSource<'a>>,
}

impl<'a> MoveScorer<'a> {
    pub fn new(config: &'a TacticsConfig) -> Self {
        Self {
            config,
            noise: None,
        }
    }

    #[must_use]
    pub fn with_noise(mut self, noise: NoiseSource<'a>) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Scores a single move.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The move to evaluate
    /// * `me` - Snapshot of the deciding combatant
    /// * `enemy` - Snapshot of the opponent
    /// * `ctx` - Tactical context extracted for this turn
    /// * `intent` - Intent the move should serve
    pub fn score_move<'m>(
        &self,
        candidate: &'m Move,
        me: &CombatantSnapshot,
        enemy: &CombatantSnapshot,
        ctx: &TacticalContext,
        intent: &Intent,
    ) -> ScoredMove<'m> {
        let config = self.config;
        let mut tally = Tally::new();
        let mut context_factors = Vec::new();

        base::class_value(candidate, enemy, intent.kind, config, &mut tally);
        bonuses::affordability(candidate, me, config, &mut tally);

        let intent_alignment = alignment::alignment(candidate, intent.kind, config);
        tally.add(
            intent_alignment * config.alignment_weight,
            format!("{} alignment {intent_alignment}/10", intent.kind),
        );

        bonuses::context_bonuses(candidate, ctx, config, &mut tally, &mut context_factors);

        if let Some(noise) = &self.noise {
            tally.add(noise.draw(candidate, config.noise_amplitude), "noise");
        }

        let (score, reasons) = tally.into_parts();

        tracing::debug!(
            "  Move {}: score={:.2} (alignment={}, factors={})",
            candidate.name,
            score,
            intent_alignment,
            context_factors.len()
        );

        ScoredMove {
            candidate,
            score,
            reasons,
            context_factors,
            intent_alignment,
        }
    }

    /// Scores every move and returns them best first.
    ///
    /// The sort is stable, so equal scores keep their input order.
    pub fn score_all<'m, I>(
        &self,
        moves: I,
        me: &CombatantSnapshot,
        enemy: &CombatantSnapshot,
        ctx: &TacticalContext,
        intent: &Intent,
    ) -> Vec<ScoredMove<'m>>
    where
        I: IntoIterator<Item = &'m Move>,
    {
        tracing::debug!("MoveScorer: Evaluating moves for intent {}", intent.kind);

        let mut scored: Vec<_> = moves
            .into_iter()
            .map(|candidate| self.score_move(candidate, me, enemy, ctx, intent))
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Renders a scored move as a multi-line explanation.
    pub fn explain(scored: &ScoredMove<'_>) -> String {
        let mut out = format!("{} = {:.2}\n", scored.candidate.name, scored.score);
        for reason in &scored.reasons {
            let _ = writeln!(out, "  {reason}");
        }
        if !scored.context_factors.is_empty() {
            let _ = writeln!(out, "  context: {}", scored.context_factors.join(", "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ai::IntentKind;
    use game_core::{BattleLog, FixedRng, MoveClass, MoveTags, PcgRng};

    fn catalog() -> MoveCatalog {
        MoveCatalog::new(vec![
            Move::new("Jab", MoveClass::Attack, 10).with_tags(MoveTags::BASIC),
            Move::new("Haymaker", MoveClass::Attack, 40)
                .with_cost(3)
                .with_tags(MoveTags::FINISHER),
            Move::new("Guard", MoveClass::DefenseBuff, 20),
            Move::new("Breathe", MoveClass::Utility, 0).with_tags(MoveTags::REST),
        ])
        .unwrap()
    }

    fn me() -> CombatantSnapshot {
        CombatantSnapshot::new(CombatantId(1), "me", 100, 12).with_resource(5)
    }

    fn enemy() -> CombatantSnapshot {
        CombatantSnapshot::new(CombatantId(2), "enemy", 100, 5)
    }

    fn context(me: &CombatantSnapshot) -> TacticalContext {
        TacticalContext::extract(
            me,
            &enemy(),
            &BattleLog::new(),
            &catalog(),
            &TacticsConfig::default(),
        )
    }

    #[test]
    fn score_all_sorts_descending() {
        let config = TacticsConfig::default();
        let catalog = catalog();
        let me = me();
        let ctx = context(&me);
        let intent = Intent::new(IntentKind::GoForFinish, "test");

        let scored = MoveScorer::new(&config).score_all(&catalog, &me, &enemy(), &ctx, &intent);

        assert_eq!(scored.len(), 4);
        assert_eq!(scored[0].name(), "Haymaker");
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_keep_input_order() {
        let config = TacticsConfig::default();
        let twins = [
            Move::new("Left", MoveClass::Attack, 10),
            Move::new("Right", MoveClass::Attack, 10),
        ];
        let me = me();
        let ctx = context(&me);
        let intent = Intent::new(IntentKind::StandardAttack, "test");

        let scored = MoveScorer::new(&config).score_all(&twins, &me, &enemy(), &ctx, &intent);
        assert_eq!(scored[0].name(), "Left");
        assert_eq!(scored[1].name(), "Right");
    }

    #[test]
    fn alignment_is_reported_unweighted() {
        let config = TacticsConfig::default();
        let catalog = catalog();
        let me = me();
        let ctx = context(&me);
        let intent = Intent::new(IntentKind::GoForFinish, "test");

        let haymaker = catalog.get("Haymaker").unwrap();
        let scored = MoveScorer::new(&config).score_move(haymaker, &me, &enemy(), &ctx, &intent);
        assert_eq!(scored.intent_alignment, 10.0);
        assert!(scored.reasons.iter().any(|r| r.contains("go_for_finish alignment")));
    }

    #[test]
    fn neutral_noise_changes_nothing() {
        let config = TacticsConfig::default();
        let catalog = catalog();
        let me = me();
        let ctx = context(&me);
        let intent = Intent::new(IntentKind::StandardAttack, "test");
        let rng = FixedRng::neutral();
        let noise = NoiseSource {
            rng: &rng,
            catalog: &catalog,
            battle_seed: 9,
            turn: 1,
            combatant: me.id,
        };

        let plain = MoveScorer::new(&config).score_all(&catalog, &me, &enemy(), &ctx, &intent);
        let noisy = MoveScorer::new(&config)
            .with_noise(noise)
            .score_all(&catalog, &me, &enemy(), &ctx, &intent);

        let plain: Vec<_> = plain.iter().map(|s| (s.name(), s.score)).collect();
        let noisy: Vec<_> = noisy.iter().map(|s| (s.name(), s.score)).collect();
        assert_eq!(plain, noisy);
    }

    #[test]
    fn noise_is_bounded_and_reproducible() {
        let config = TacticsConfig::default();
        let catalog = catalog();
        let me = me();
        let ctx = context(&me);
        let intent = Intent::new(IntentKind::StandardAttack, "test");
        let rng = PcgRng;
        let noise = NoiseSource {
            rng: &rng,
            catalog: &catalog,
            battle_seed: 1234,
            turn: 7,
            combatant: me.id,
        };

        let jab = catalog.get("Jab").unwrap();
        let plain = MoveScorer::new(&config).score_move(jab, &me, &enemy(), &ctx, &intent);
        let scorer = MoveScorer::new(&config).with_noise(noise);
        let first = scorer.score_move(jab, &me, &enemy(), &ctx, &intent);
        let second = scorer.score_move(jab, &me, &enemy(), &ctx, &intent);

        assert_eq!(first.score, second.score);
        assert!((first.score - plain.score).abs() <= config.noise_amplitude);
    }

    #[test]
    fn explain_lists_every_reason() {
        let config = TacticsConfig::default();
        let catalog = catalog();
        let me = me();
        let ctx = context(&me);
        let intent = Intent::new(IntentKind::Defend, "test");

        let guard = catalog.get("Guard").unwrap();
        let scored = MoveScorer::new(&config).score_move(guard, &me, &enemy(), &ctx, &intent);
        let text = MoveScorer::explain(&scored);

        assert!(text.starts_with("Guard = "));
        assert_eq!(text.lines().count(), 1 + scored.reasons.len() + 1);
    }
}
