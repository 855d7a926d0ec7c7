//! Affordability penalties and context bonuses.

use game_core::{CombatantSnapshot, Move, MoveTags, TacticsConfig};

use crate::providers::ai::scoring::Tally;
use crate::providers::ai::{BehaviorPattern, TacticalContext};

/// Penalizes moves the combatant cannot pay for or has not recovered yet.
pub fn affordability(
    candidate: &Move,
    me: &CombatantSnapshot,
    config: &TacticsConfig,
    tally: &mut Tally,
) {
    if !me.can_afford(candidate) {
        tally.add(
            -config.unaffordable_penalty,
            format!("costs {} with {} available", candidate.cost, me.resource),
        );
    }

    let remaining = me.cooldown_of(&candidate.name);
    if remaining > 0 {
        tally.add(
            -config.cooldown_penalty,
            format!("cooling down for {remaining} turns"),
        );
    }
}

/// Adds situational bonuses and records which context factors applied.
pub fn context_bonuses(
    candidate: &Move,
    ctx: &TacticalContext,
    config: &TacticsConfig,
    tally: &mut Tally,
    factors: &mut Vec<String>,
) {
    let mut bonus = |applies: bool, value: f32, factor: &str| {
        if applies {
            tally.add(value, factor);
            factors.push(factor.to_string());
        }
    };

    bonus(
        ctx.is_early() && candidate.is_defensive(),
        5.0,
        "early game favors defense",
    );
    bonus(
        ctx.is_late() && candidate.is_high_damage(config.high_damage_threshold),
        8.0,
        "late game favors heavy hits",
    );
    bonus(
        ctx.enemy.pattern == BehaviorPattern::Defensive && candidate.has(MoveTags::PIERCING),
        6.0,
        "pierces a defensive enemy",
    );
    bonus(
        ctx.enemy.pattern == BehaviorPattern::Aggressive && candidate.has(MoveTags::COUNTER),
        6.0,
        "counters an aggressive enemy",
    );
    bonus(
        ctx.resource_pressure && candidate.cost <= 1,
        6.0,
        "cheap under resource pressure",
    );
    bonus(
        ctx.resource_pressure && candidate.has(MoveTags::REST),
        4.0,
        "recovers resource",
    );
    bonus(
        ctx.health_pressure && candidate.is_defensive(),
        4.0,
        "low health favors defense",
    );
    bonus(
        !ctx.cooldown_pressure() && candidate.cooldown.is_some(),
        3.0,
        "cooldowns are free to spend",
    );
}
