//! Base value of a move by class.

use game_core::{CombatantSnapshot, Move, MoveClass, MoveTags, StatusKind, TacticsConfig};

use crate::providers::ai::IntentKind;
use crate::providers::ai::scoring::Tally;

/// Utility moves are valued at half their power.
const UTILITY_MULTIPLIER: f32 = 0.5;

/// Adds the class-driven base value of `candidate` to `tally`.
///
/// Every term here is non-decreasing in the move's power.
pub fn class_value(
    candidate: &Move,
    enemy: &CombatantSnapshot,
    intent: IntentKind,
    config: &TacticsConfig,
    tally: &mut Tally,
) {
    match candidate.class {
        MoveClass::Attack => attack_value(candidate, enemy, intent, config, tally),
        MoveClass::DefenseBuff => {
            let scale = match intent {
                IntentKind::Defend | IntentKind::RestoreChi | IntentKind::Stall => 2.0,
                IntentKind::GoForFinish | IntentKind::PressureEnemy => 0.2,
                _ => 1.0,
            };
            let value = candidate.power as f32 * config.defense_multiplier * scale;
            tally.add(value, format!("defense {} x{scale}", candidate.power));
        }
        MoveClass::Utility => {
            tally.add(
                candidate.power as f32 * UTILITY_MULTIPLIER,
                format!("utility {}", candidate.power),
            );
        }
    }

    if let Some(status) = candidate.status {
        tally.add(status_value(status.kind), format!("applies {}", status.kind));
    }
}

fn attack_value(
    candidate: &Move,
    enemy: &CombatantSnapshot,
    intent: IntentKind,
    config: &TacticsConfig,
    tally: &mut Tally,
) {
    let piercing = candidate.has(MoveTags::PIERCING);
    let defense = if piercing {
        enemy.defense / 2
    } else {
        enemy.defense
    };
    let net = candidate.power.saturating_sub(defense).max(1);
    tally.add(
        net as f32 * config.damage_multiplier,
        format!("{net} net damage vs defense {defense}"),
    );

    let heavy = candidate.power > config.high_damage_threshold;
    match intent {
        IntentKind::GoForFinish if heavy => tally.add(25.0, "heavy hit for the finish"),
        IntentKind::BreakDefense if piercing => tally.add(20.0, "pierces the guard"),
        IntentKind::DesperateAttack if candidate.has(MoveTags::DESPERATION) => {
            tally.add(15.0, "desperation move")
        }
        IntentKind::CounterAttack if candidate.has(MoveTags::COUNTER) => {
            tally.add(12.0, "counter move")
        }
        IntentKind::BuildMomentum if heavy => tally.add(10.0, "keeps momentum"),
        _ => {}
    }
}

fn status_value(kind: StatusKind) -> f32 {
    match kind {
        StatusKind::Stun => 15.0,
        StatusKind::Burn => 8.0,
        _ => 4.0,
    }
}
