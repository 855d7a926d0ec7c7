//! Tactical AI move provider.

use game_core::{PcgRng, RngOracle, TacticsConfig};

use super::legality::{self, NoMoveReason};
use super::scoring::actions::{MoveScorer, NoiseSource, ScoredMove};
use super::scoring::selector::IntentSelector;
use super::trace::{ChoiceBasis, DecisionTrace};
use super::{AiDecisionState, Intent, TacticalContext};
use crate::api::{Decision, DecisionError, DecisionRequest, MoveProvider, Result, Side};

/// Tactical AI provider driving the full decision pipeline.
///
/// # Design
///
/// Each call to [`MoveProvider::decide`]:
/// 1. Validates both snapshots
/// 2. Extracts a [`TacticalContext`]
/// 3. Keeps the previous intent if its continuation predicate still holds,
///    otherwise selects a fresh one with [`IntentSelector`]
/// 4. Filters the catalog by phase, cooldown and staleness
/// 5. Scores the survivors with [`MoveScorer`] and picks the best one, unless
///    the phase forces a move
/// 6. Returns the move, a [`DecisionTrace`] and the next [`AiDecisionState`]
///
/// The provider holds no per-battle state: everything that must survive a
/// turn lives in the returned [`AiDecisionState`]. Given the same request,
/// battle seed and oracle, the decision is always identical.
pub struct TacticalAiProvider<R = PcgRng> {
    config: TacticsConfig,
    rng: R,
    battle_seed: u64,
}

impl TacticalAiProvider<PcgRng> {
    /// Creates a provider with default thresholds and the PCG oracle.
    pub fn new(battle_seed: u64) -> Self {
        Self::with_rng(TacticsConfig::default(), PcgRng, battle_seed)
    }
}

impl<R: RngOracle> TacticalAiProvider<R> {
    pub fn with_rng(config: TacticsConfig, rng: R, battle_seed: u64) -> Self {
        Self {
            config,
            rng,
            battle_seed,
        }
    }

    pub fn config(&self) -> &TacticsConfig {
        &self.config
    }

    pub fn battle_seed(&self) -> u64 {
        self.battle_seed
    }

    /// Resolves this turn's intent from the previous state and new context.
    ///
    /// Returns the intent, how many turns it has now been held, the turn it
    /// was adopted, and whether it was carried over.
    fn resolve_intent(
        &self,
        ctx: &TacticalContext,
        request: &DecisionRequest<'_>,
    ) -> (Intent, u32, u32, bool) {
        let selector = IntentSelector::new(&self.config);

        let kept = request
            .previous
            .filter(|previous| selector.should_maintain(&previous.intent, ctx));
        if let Some(previous) = kept {
            return (
                previous.intent.clone(),
                previous.turns_held + 1,
                previous.last_intent_change,
                true,
            );
        }

        (selector.choose(ctx), 1, request.turn, false)
    }
}

impl<R: RngOracle> MoveProvider for TacticalAiProvider<R> {
    fn decide<'a>(&self, request: DecisionRequest<'a>) -> Result<Decision<'a>> {
        let DecisionRequest {
            me,
            enemy,
            turn,
            log,
            catalog,
            phase,
            ..
        } = request;

        me.validate().map_err(|source| DecisionError::InvalidSnapshot {
            side: Side::Own,
            source,
        })?;
        enemy
            .validate()
            .map_err(|source| DecisionError::InvalidSnapshot {
                side: Side::Enemy,
                source,
            })?;
        if me.id == enemy.id {
            return Err(DecisionError::SameCombatant { id: me.id });
        }

        let ctx = TacticalContext::extract(me, enemy, log, catalog, &self.config);
        let (intent, turns_held, last_intent_change, maintained) =
            self.resolve_intent(&ctx, &request);

        tracing::debug!(
            "Combatant {} turn {}: intent {} ({}, held {})",
            me.id,
            turn,
            intent.kind,
            if maintained { "maintained" } else { "fresh" },
            turns_held
        );

        let mut trace = DecisionTrace {
            turn,
            combatant: me.id,
            phase,
            intent: intent.kind,
            rationale: intent.rationale.clone(),
            intent_maintained: maintained,
            turns_held,
            chosen: None,
            basis: ChoiceBasis::NoMove,
            alternatives: Default::default(),
            stale: Vec::new(),
            no_move: None,
        };

        let chosen = match legality::legal_moves(me, catalog, phase, &self.config) {
            Ok(legal) => {
                let scorer = MoveScorer::new(&self.config).with_noise(NoiseSource {
                    rng: &self.rng,
                    catalog,
                    battle_seed: self.battle_seed,
                    turn,
                    combatant: me.id,
                });
                let ranked: Vec<ScoredMove<'a>> =
                    scorer.score_all(legal.moves.iter().copied(), me, enemy, &ctx, &intent);

                trace.alternatives = DecisionTrace::top_alternatives(&ranked);
                trace.stale = legal.stale;

                let (chosen, basis) = match legal.forced {
                    Some(forced) => (Some(forced), ChoiceBasis::PhaseForced),
                    None => (ranked.first().map(|s| s.candidate), ChoiceBasis::TopScore),
                };
                trace.basis = basis;
                chosen
            }
            Err(reason) => {
                warn_no_move(&request, reason);
                trace.no_move = Some(reason);
                None
            }
        };

        trace.chosen = chosen.map(|m| m.name.clone());

        tracing::debug!("{}", trace.summary());

        let state = AiDecisionState {
            intent,
            turns_held,
            last_intent_change,
            last_context: Some(ctx),
        };

        Ok(Decision {
            chosen,
            trace,
            state,
        })
    }
}

fn warn_no_move(request: &DecisionRequest<'_>, reason: NoMoveReason) {
    tracing::warn!(
        "Combatant {} turn {} - no legal move: {}",
        request.me.id,
        request.turn,
        reason
    );
}
