//! Intent alignment table.
//!
//! Scores how well a move fits the current intent on a 0-10 scale. The scorer
//! multiplies the result by the configured alignment weight.

use game_core::{Move, MoveClass, MoveTags, TacticsConfig};

use crate::providers::ai::IntentKind;

pub const MAX_ALIGNMENT: f32 = 10.0;

/// Alignment of `candidate` with `intent`, clamped to `[0, 10]`.
pub fn alignment(candidate: &Move, intent: IntentKind, config: &TacticsConfig) -> f32 {
    let attack = candidate.class == MoveClass::Attack;
    let defense = candidate.class == MoveClass::DefenseBuff;
    let utility = candidate.class == MoveClass::Utility;
    let heavy = candidate.power > config.high_damage_threshold;
    let free = candidate.cost == 0;
    let debuff = matches!(candidate.status, Some(status) if status.kind.is_debuff());
    let tag = |t: MoveTags| candidate.has(t);

    let mut score = 0.0f32;
    let mut when = |cond: bool, points: f32| {
        if cond {
            score += points;
        }
    };

    match intent {
        IntentKind::Defend => {
            when(defense, 6.0);
            when(candidate.inflicts(game_core::StatusKind::Shield), 2.0);
            when(tag(MoveTags::COUNTER), 2.0);
            when(attack, -3.0);
        }
        IntentKind::DesperateAttack => {
            when(attack, 3.0);
            when(tag(MoveTags::DESPERATION), 5.0);
            when(heavy, 2.0);
            when(defense, -5.0);
        }
        IntentKind::RestoreChi => {
            when(tag(MoveTags::REST), 7.0);
            when(free, 2.0);
            when(defense, 1.0);
            when(!free, -3.0);
        }
        IntentKind::BreakDefense => {
            when(tag(MoveTags::PIERCING), 5.0);
            when(heavy, 3.0);
            when(attack, 2.0);
            when(defense, -4.0);
        }
        IntentKind::GoForFinish => {
            when(attack, 3.0);
            when(tag(MoveTags::FINISHER), 4.0);
            when(heavy, 3.0);
            when(defense, -5.0);
        }
        IntentKind::PressureEnemy => {
            when(attack, 4.0);
            when(debuff, 2.0);
            when(candidate.cost <= 1, 2.0);
            when(defense, -3.0);
        }
        IntentKind::BuildMomentum => {
            when(attack, 3.0);
            when(heavy, 3.0);
            when(tag(MoveTags::HIGH_DAMAGE), 2.0);
            when(tag(MoveTags::REST), -2.0);
        }
        IntentKind::StandardAttack => {
            when(attack, 4.0);
            when(tag(MoveTags::BASIC), 2.0);
            when(free, 1.0);
        }
        IntentKind::Stall => {
            when(defense, 5.0);
            when(debuff, 2.0);
            when(tag(MoveTags::REST), 2.0);
            when(attack, -2.0);
        }
        IntentKind::CounterAttack => {
            when(tag(MoveTags::COUNTER), 6.0);
            when(attack, 2.0);
            when(defense, 1.0);
        }
        IntentKind::ConservativePlay => {
            when(defense, 3.0);
            when(free, 2.0);
            when(tag(MoveTags::BASIC), 2.0);
            when(attack, 1.0);
        }
        IntentKind::WaitAndSee => {
            when(defense, 2.0);
            when(utility, 2.0);
            when(tag(MoveTags::BASIC), 1.0);
        }
    }

    score.clamp(0.0, MAX_ALIGNMENT)
}
