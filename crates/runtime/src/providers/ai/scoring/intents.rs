//! Intent rules (Layer 1).
//!
//! The selection table is a strictly ordered cascade: each [`Rule`] pairs a
//! guard over the [`TacticalContext`] with the intent it produces, and the
//! first guard that holds wins. Continuation predicates decide whether an
//! intent chosen on an earlier turn still makes sense in the new context.

use crate::providers::ai::{BehaviorPattern, Intent, IntentKind, TacticalContext};

// ============================================================================
// Selection Cascade
// ============================================================================

/// One row of the selection table.
pub struct Rule {
    pub kind: IntentKind,
    pub priority: u8,
    pub rationale: &'static str,
    pub guard: fn(&TacticalContext, &RuleConfig) -> bool,
}

/// Thresholds that the guards read besides the context itself.
#[derive(Clone, Copy, Debug)]
pub struct RuleConfig {
    /// Own defense above which counter-attacking is considered safe.
    pub counter_defense_above: u32,
    /// Resource level below which `restore_chi` is still worth holding.
    pub restore_target: u32,
}

/// The ordered selection table. The last row always matches.
pub static RULES: [Rule; 13] = [
    Rule {
        kind: IntentKind::Defend,
        priority: 10,
        rationale: "low health and the enemy can burst",
        guard: |ctx, _| ctx.health_pressure && ctx.enemy_burst_threat,
    },
    Rule {
        kind: IntentKind::DesperateAttack,
        priority: 9,
        rationale: "low health and losing the exchange",
        guard: |ctx, _| ctx.health_pressure && ctx.losing,
    },
    Rule {
        kind: IntentKind::RestoreChi,
        priority: 8,
        rationale: "resource pool nearly empty",
        guard: |ctx, _| ctx.resource_pressure,
    },
    Rule {
        kind: IntentKind::BreakDefense,
        priority: 7,
        rationale: "enemy is turtling and we have burst",
        guard: |ctx, _| ctx.enemy_turtling && ctx.has_burst,
    },
    Rule {
        kind: IntentKind::GoForFinish,
        priority: 7,
        rationale: "enemy is exposed and we have burst",
        guard: |ctx, _| ctx.enemy_vulnerable && ctx.has_burst,
    },
    Rule {
        kind: IntentKind::PressureEnemy,
        priority: 6,
        rationale: "enemy is exposed",
        guard: |ctx, _| ctx.enemy_vulnerable && !ctx.has_burst,
    },
    Rule {
        kind: IntentKind::BuildMomentum,
        priority: 6,
        rationale: "ahead on damage with burst ready",
        guard: |ctx, _| ctx.has_momentum && ctx.has_burst,
    },
    Rule {
        kind: IntentKind::StandardAttack,
        priority: 4,
        rationale: "dominating with no threat incoming",
        guard: |ctx, _| ctx.dominating && !ctx.enemy_burst_threat,
    },
    Rule {
        kind: IntentKind::Defend,
        priority: 6,
        rationale: "enemy can burst",
        guard: |ctx, _| ctx.enemy_burst_threat && !ctx.health_pressure,
    },
    Rule {
        kind: IntentKind::Stall,
        priority: 5,
        rationale: "behind on health, buying time",
        guard: |ctx, _| ctx.losing && !ctx.health_pressure,
    },
    Rule {
        kind: IntentKind::CounterAttack,
        priority: 5,
        rationale: "enemy is aggressive and our guard is up",
        guard: |ctx, cfg| {
            ctx.enemy.pattern == BehaviorPattern::Aggressive
                && ctx.me.defense > cfg.counter_defense_above
        },
    },
    Rule {
        kind: IntentKind::ConservativePlay,
        priority: 3,
        rationale: "early game without momentum",
        guard: |ctx, _| ctx.is_early() && !ctx.has_momentum,
    },
    Rule {
        kind: IntentKind::StandardAttack,
        priority: 3,
        rationale: "no special circumstances",
        guard: |_, _| true,
    },
];

/// Runs the cascade and returns the first matching row's intent.
pub fn first_match(ctx: &TacticalContext, cfg: &RuleConfig) -> Intent {
    // The final row is unconditional, so the fallback is never reached.
    let rule = RULES
        .iter()
        .find(|rule| (rule.guard)(ctx, cfg))
        .unwrap_or(&RULES[RULES.len() - 1]);

    Intent::new(rule.kind, rule.rationale).with_priority(rule.priority)
}

// ============================================================================
// Continuation Predicates
// ============================================================================

/// Whether an intent of `kind` still holds in `ctx`.
///
/// `wait_and_see` has no condition of its own and is always kept.
pub fn still_holds(kind: IntentKind, ctx: &TacticalContext, cfg: &RuleConfig) -> bool {
    match kind {
        IntentKind::Defend => ctx.health_pressure || ctx.enemy_burst_threat,
        IntentKind::DesperateAttack => ctx.health_pressure,
        IntentKind::RestoreChi => ctx.me.resource < cfg.restore_target,
        IntentKind::BreakDefense => ctx.enemy_turtling,
        IntentKind::GoForFinish | IntentKind::PressureEnemy => ctx.enemy_vulnerable,
        IntentKind::BuildMomentum => ctx.has_momentum,
        IntentKind::StandardAttack => {
            !(ctx.health_pressure
                || ctx.resource_pressure
                || ctx.enemy_vulnerable
                || ctx.enemy_burst_threat)
        }
        IntentKind::Stall => ctx.losing,
        IntentKind::CounterAttack => ctx.enemy.pattern == BehaviorPattern::Aggressive,
        IntentKind::ConservativePlay => ctx.is_early() && !ctx.has_momentum,
        IntentKind::WaitAndSee => true,
    }
}
