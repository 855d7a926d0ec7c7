//! Phase and staleness filters over the move catalog.
//!
//! Runs before scoring. The phase flag restricts which moves may be used at
//! all; in the normal phase the staleness filter then drops moves that were
//! just spammed, unless that would leave nothing.

use game_core::{CombatPhase, CombatantSnapshot, Move, MoveCatalog, MoveTags, TacticsConfig};
use serde::Serialize;

/// Why no move could be chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoMoveReason {
    #[error("combatant knows no catalog moves")]
    EmptyMoveset,

    #[error("every known move is on cooldown")]
    AllOnCooldown,

    #[error("no known move is allowed in the {phase} phase")]
    PhaseRestricted { phase: CombatPhase },
}

/// Moves that survived filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct LegalMoves<'m> {
    /// Candidates to score, in catalog order.
    pub moves: Vec<&'m Move>,
    /// Set when the phase dictates the move outright.
    pub forced: Option<&'m Move>,
    /// Names removed by the staleness filter.
    pub stale: Vec<String>,
}

/// Applies the phase filter and, in the normal phase, the staleness filter.
pub fn legal_moves<'m>(
    me: &CombatantSnapshot,
    catalog: &'m MoveCatalog,
    phase: CombatPhase,
    config: &TacticsConfig,
) -> Result<LegalMoves<'m>, NoMoveReason> {
    let known: Vec<&'m Move> = catalog.iter().filter(|m| me.knows(&m.name)).collect();
    if known.is_empty() {
        return Err(NoMoveReason::EmptyMoveset);
    }

    let ready: Vec<&'m Move> = known
        .into_iter()
        .filter(|m| !me.is_on_cooldown(&m.name))
        .collect();
    if ready.is_empty() {
        return Err(NoMoveReason::AllOnCooldown);
    }

    match phase {
        CombatPhase::Desperation => {
            let pool: Vec<&'m Move> = ready
                .into_iter()
                .filter(|m| m.has(MoveTags::DESPERATION) || m.has(MoveTags::FINISHER))
                .collect();
            // Any finisher outright, otherwise the strongest tagged move.
            let forced = strongest(pool.iter().copied().filter(|m| m.has(MoveTags::FINISHER)))
                .or_else(|| strongest(pool.iter().copied()))
                .ok_or(NoMoveReason::PhaseRestricted { phase })?;

            Ok(LegalMoves {
                moves: pool,
                forced: Some(forced),
                stale: Vec::new(),
            })
        }
        CombatPhase::Escalation => {
            let pool: Vec<&'m Move> = ready
                .into_iter()
                .filter(|m| m.has(MoveTags::ESCALATION) || !m.is_basic())
                .collect();
            if pool.is_empty() {
                return Err(NoMoveReason::PhaseRestricted { phase });
            }

            Ok(LegalMoves {
                moves: pool,
                forced: None,
                stale: Vec::new(),
            })
        }
        CombatPhase::Normal => Ok(drop_stale(ready, me, config)),
    }
}

/// Highest-power move; the earliest one wins a tie.
fn strongest<'m>(moves: impl Iterator<Item = &'m Move>) -> Option<&'m Move> {
    moves.min_by_key(|m| std::cmp::Reverse(m.power))
}

fn drop_stale<'m>(
    ready: Vec<&'m Move>,
    me: &CombatantSnapshot,
    config: &TacticsConfig,
) -> LegalMoves<'m> {
    let start = me.move_history.len().saturating_sub(config.stale_window);
    let recent = &me.move_history[start..];
    let is_stale = |m: &Move| {
        recent.iter().filter(|used| **used == m.name).count() >= config.stale_repeat_limit
    };

    let (stale, fresh): (Vec<&'m Move>, Vec<&'m Move>) =
        ready.iter().copied().partition(|m| is_stale(*m));

    if fresh.is_empty() {
        tracing::debug!("Legality: every ready move is stale; keeping them all");
        return LegalMoves {
            moves: ready,
            forced: None,
            stale: Vec::new(),
        };
    }

    LegalMoves {
        moves: fresh,
        forced: None,
        stale: stale.into_iter().map(|m| m.name.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CombatantId, MoveClass};

    fn catalog() -> MoveCatalog {
        MoveCatalog::new(vec![
            Move::new("Jab", MoveClass::Attack, 8).with_tags(MoveTags::BASIC),
            Move::new("Kick", MoveClass::Attack, 12).with_tags(MoveTags::BASIC),
            Move::new("Flurry", MoveClass::Attack, 25).with_tags(MoveTags::ESCALATION),
            Move::new("Last Stand", MoveClass::Attack, 20).with_tags(MoveTags::DESPERATION),
            Move::new("Finale", MoveClass::Attack, 35).with_tags(MoveTags::FINISHER),
            Move::new("Guard", MoveClass::DefenseBuff, 15).with_tags(MoveTags::BASIC),
        ])
        .unwrap()
    }

    fn fighter() -> CombatantSnapshot {
        CombatantSnapshot::new(CombatantId(1), "me", 100, 10).with_resource(5)
    }

    fn names<'a>(legal: &'a LegalMoves<'a>) -> Vec<&'a str> {
        legal.moves.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn normal_phase_keeps_every_ready_move() {
        let catalog = catalog();
        let me = fighter().with_cooldown("Finale", 1);
        let legal = legal_moves(&me, &catalog, CombatPhase::Normal, &TacticsConfig::default()).unwrap();

        assert_eq!(names(&legal), ["Jab", "Kick", "Flurry", "Last Stand", "Guard"]);
        assert!(legal.forced.is_none());
    }

    #[test]
    fn unknown_moveset_is_reported() {
        let catalog = catalog();
        let me = fighter().with_moveset(["Teleport"]);
        assert_eq!(
            legal_moves(&me, &catalog, CombatPhase::Normal, &TacticsConfig::default()),
            Err(NoMoveReason::EmptyMoveset)
        );
    }

    #[test]
    fn all_on_cooldown_is_reported() {
        let catalog = catalog();
        let me = catalog
            .iter()
            .fold(fighter(), |me, m| me.with_cooldown(m.name.clone(), 2));
        assert_eq!(
            legal_moves(&me, &catalog, CombatPhase::Normal, &TacticsConfig::default()),
            Err(NoMoveReason::AllOnCooldown)
        );
    }

    #[test]
    fn escalation_drops_plain_basics() {
        let catalog = catalog();
        let legal =
            legal_moves(&fighter(), &catalog, CombatPhase::Escalation, &TacticsConfig::default())
                .unwrap();
        assert_eq!(names(&legal), ["Flurry", "Last Stand", "Finale"]);
    }

    #[test]
    fn escalation_with_only_basics_is_restricted() {
        let catalog = catalog();
        let me = fighter().with_moveset(["Jab", "Kick"]);
        assert_eq!(
            legal_moves(&me, &catalog, CombatPhase::Escalation, &TacticsConfig::default()),
            Err(NoMoveReason::PhaseRestricted {
                phase: CombatPhase::Escalation
            })
        );
    }

    #[test]
    fn desperation_prefers_finisher() {
        let catalog = catalog();
        let legal =
            legal_moves(&fighter(), &catalog, CombatPhase::Desperation, &TacticsConfig::default())
                .unwrap();
        assert_eq!(names(&legal), ["Last Stand", "Finale"]);
        assert_eq!(legal.forced.map(|m| m.name.as_str()), Some("Finale"));
    }

    #[test]
    fn desperation_falls_back_to_desperation_move() {
        let catalog = catalog();
        let me = fighter().with_cooldown("Finale", 1);
        let legal =
            legal_moves(&me, &catalog, CombatPhase::Desperation, &TacticsConfig::default()).unwrap();
        assert_eq!(legal.forced.map(|m| m.name.as_str()), Some("Last Stand"));
    }

    #[test]
    fn desperation_finisher_wins_even_when_unaffordable() {
        let catalog = MoveCatalog::new(vec![
            Move::new("Last Stand", MoveClass::Attack, 20).with_tags(MoveTags::DESPERATION),
            Move::new("Finale", MoveClass::Attack, 35)
                .with_tags(MoveTags::FINISHER)
                .with_cost(4),
        ])
        .unwrap();
        let broke = fighter().with_resource(1);
        let legal =
            legal_moves(&broke, &catalog, CombatPhase::Desperation, &TacticsConfig::default())
                .unwrap();
        assert_eq!(legal.forced.map(|m| m.name.as_str()), Some("Finale"));
    }

    #[test]
    fn desperation_picks_strongest_finisher_first_on_tie() {
        let catalog = MoveCatalog::new(vec![
            Move::new("Last Stand", MoveClass::Attack, 90).with_tags(MoveTags::DESPERATION),
            Move::new("Finale", MoveClass::Attack, 35).with_tags(MoveTags::FINISHER),
            Move::new("Encore", MoveClass::Attack, 35).with_tags(MoveTags::FINISHER),
        ])
        .unwrap();
        let legal =
            legal_moves(&fighter(), &catalog, CombatPhase::Desperation, &TacticsConfig::default())
                .unwrap();
        assert_eq!(legal.forced.map(|m| m.name.as_str()), Some("Finale"));
    }

    #[test]
    fn desperation_without_tagged_moves_is_restricted() {
        let catalog = catalog();
        let me = fighter().with_moveset(["Jab", "Guard"]);
        assert_eq!(
            legal_moves(&me, &catalog, CombatPhase::Desperation, &TacticsConfig::default()),
            Err(NoMoveReason::PhaseRestricted {
                phase: CombatPhase::Desperation
            })
        );
    }

    #[test]
    fn stale_moves_are_dropped() {
        let catalog = catalog();
        let me = fighter()
            .with_moveset(["Jab", "Kick", "Guard"])
            .with_history(["Jab", "Kick", "Jab", "Guard"]);
        let legal = legal_moves(&me, &catalog, CombatPhase::Normal, &TacticsConfig::default()).unwrap();

        assert_eq!(names(&legal), ["Kick", "Guard"]);
        assert_eq!(legal.stale, ["Jab"]);
    }

    #[test]
    fn staleness_never_empties_the_set() {
        let catalog = catalog();
        let me = fighter()
            .with_moveset(["Jab"])
            .with_history(["Jab", "Jab", "Jab"]);
        let legal = legal_moves(&me, &catalog, CombatPhase::Normal, &TacticsConfig::default()).unwrap();

        assert_eq!(names(&legal), ["Jab"]);
        assert!(legal.stale.is_empty());
    }

    #[test]
    fn old_repeats_are_not_stale() {
        let catalog = catalog();
        let me = fighter().with_history(["Jab", "Jab", "Kick", "Guard", "Flurry", "Kick"]);
        let legal = legal_moves(&me, &catalog, CombatPhase::Normal, &TacticsConfig::default()).unwrap();

        assert!(names(&legal).contains(&"Jab"));
        assert_eq!(legal.stale, ["Kick"]);
    }
}
