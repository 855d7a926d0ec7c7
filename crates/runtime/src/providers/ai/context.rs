//! Tactical context extraction.
//!
//! The [`TacticalContext`] is the "blackboard" for one decision: a flat set of
//! derived signals (pressure, streaks, patterns, momentum, game phase) computed
//! from the two combatant snapshots and the battle log. It is recomputed every
//! turn, never persisted, and is a pure function of its inputs, so it can be
//! tested in isolation and compared across calls.

use game_core::{BattleLog, CombatantSnapshot, EffectPolarity, Move, MoveCatalog, TacticsConfig};
use serde::Serialize;

/// Coarse behavioral read of one side's recent moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BehaviorPattern {
    Aggressive,
    Defensive,
    Mixed,
    /// No moves recorded yet.
    Unknown,
}

/// Stage of the battle by elapsed turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

/// Which way a single history entry leans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MoveLean {
    Attack,
    Defense,
    Other,
}

/// Signals derived for one combatant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SideSignals {
    pub health: u32,
    pub max_health: u32,
    pub health_pct: u32,
    pub defense: u32,
    pub resource: u32,
    pub last_move: Option<String>,
    /// Consecutive defensive moves at the end of the history.
    pub defensive_streak: u32,
    /// Consecutive attacks at the end of the history.
    pub attack_streak: u32,
    pub pattern: BehaviorPattern,
    /// Damage dealt within the recent log window.
    pub recent_damage: u32,
    /// An off-cooldown, affordable attack above the high-damage threshold exists.
    pub has_burst: bool,
    /// Enough moves are cooling down to constrain choices.
    pub cooldown_pressure: bool,
    /// Active beneficial effects.
    pub buffs: usize,
    /// Active harmful effects.
    pub debuffs: usize,
}

/// Derived, ephemeral snapshot of everything the AI reasons about.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TacticalContext {
    /// Highest turn recorded in the log.
    pub turn: u32,
    pub me: SideSignals,
    pub enemy: SideSignals,

    pub health_pressure: bool,
    pub resource_pressure: bool,
    pub enemy_vulnerable: bool,
    pub enemy_turtling: bool,
    pub has_momentum: bool,
    pub has_burst: bool,
    pub enemy_burst_threat: bool,
    pub losing: bool,
    pub dominating: bool,

    pub game_phase: GamePhase,
    /// Own recent damage over enemy recent damage; 1.0 when the enemy dealt none.
    pub damage_ratio: f32,
}

impl TacticalContext {
    /// Extracts the context for `me` facing `enemy`.
    ///
    /// Never fails: missing optional data (empty history, empty log, unknown
    /// move names) simply produces neutral signals.
    pub fn extract(
        me: &CombatantSnapshot,
        enemy: &CombatantSnapshot,
        log: &BattleLog,
        catalog: &MoveCatalog,
        config: &TacticsConfig,
    ) -> Self {
        let mine = side_signals(me, log, catalog, config);
        let theirs = side_signals(enemy, log, catalog, config);

        let damage_ratio = if theirs.recent_damage == 0 {
            1.0
        } else {
            mine.recent_damage as f32 / theirs.recent_damage as f32
        };

        let turn = log.turn_count();
        let game_phase = if turn <= config.early_game_until {
            GamePhase::Early
        } else if turn > config.late_game_after {
            GamePhase::Late
        } else {
            GamePhase::Mid
        };

        let health_pressure = (me.health as u64) * 100
            < (config.health_pressure_pct as u64) * (me.max_health as u64);

        Self {
            turn,
            health_pressure,
            resource_pressure: me.resource < config.resource_pressure_below,
            enemy_vulnerable: enemy.defense < config.vulnerable_defense_below,
            enemy_turtling: theirs.defensive_streak >= config.turtling_streak,
            has_momentum: mine.recent_damage
                > theirs.recent_damage.saturating_add(config.momentum_margin),
            has_burst: mine.has_burst,
            enemy_burst_threat: theirs.has_burst,
            losing: mine.health_pct.saturating_add(config.losing_margin_pct) < theirs.health_pct,
            dominating: mine.health_pct
                >= theirs.health_pct.saturating_add(config.dominating_margin_pct),
            game_phase,
            damage_ratio,
            me: mine,
            enemy: theirs,
        }
    }

    pub fn is_early(&self) -> bool {
        self.game_phase == GamePhase::Early
    }

    pub fn is_late(&self) -> bool {
        self.game_phase == GamePhase::Late
    }

    pub fn cooldown_pressure(&self) -> bool {
        self.me.cooldown_pressure
    }
}

fn side_signals(
    who: &CombatantSnapshot,
    log: &BattleLog,
    catalog: &MoveCatalog,
    config: &TacticsConfig,
) -> SideSignals {
    let leans: Vec<MoveLean> = who
        .move_history
        .iter()
        .map(|name| lean_of(name, catalog))
        .collect();

    SideSignals {
        health: who.health,
        max_health: who.max_health,
        health_pct: who.health_pct(),
        defense: who.defense,
        resource: who.resource,
        last_move: who.last_move().map(str::to_string),
        defensive_streak: streak(&leans, MoveLean::Defense),
        attack_streak: streak(&leans, MoveLean::Attack),
        pattern: classify_pattern(&leans, config.pattern_window),
        recent_damage: log.recent_damage_by(who.id, config.damage_window),
        has_burst: who
            .usable_moves(catalog)
            .any(|candidate| is_burst(candidate, config)),
        cooldown_pressure: who.moves_on_cooldown() >= config.cooldown_pressure_count,
        buffs: who.effects.count(EffectPolarity::Buff),
        debuffs: who.effects.count(EffectPolarity::Debuff),
    }
}

fn is_burst(candidate: &Move, config: &TacticsConfig) -> bool {
    candidate.is_attack() && candidate.power > config.high_damage_threshold
}

/// Classifies a history entry, preferring catalog data over name heuristics.
fn lean_of(name: &str, catalog: &MoveCatalog) -> MoveLean {
    if let Some(entry) = catalog.get(name) {
        return if entry.is_attack() {
            MoveLean::Attack
        } else if entry.is_defensive() {
            MoveLean::Defense
        } else {
            MoveLean::Other
        };
    }

    let lowered = name.to_ascii_lowercase();
    if ["defend", "defense", "block", "guard"]
        .iter()
        .any(|needle| lowered.contains(needle))
    {
        MoveLean::Defense
    } else if ["attack", "strike"].iter().any(|needle| lowered.contains(needle)) {
        MoveLean::Attack
    } else {
        MoveLean::Other
    }
}

fn streak(leans: &[MoveLean], wanted: MoveLean) -> u32 {
    leans.iter().rev().take_while(|&&lean| lean == wanted).count() as u32
}

fn classify_pattern(leans: &[MoveLean], window: usize) -> BehaviorPattern {
    let start = leans.len().saturating_sub(window);
    let recent = &leans[start..];
    if recent.is_empty() {
        return BehaviorPattern::Unknown;
    }

    let attacks = recent.iter().filter(|&&l| l == MoveLean::Attack).count();
    let defenses = recent.iter().filter(|&&l| l == MoveLean::Defense).count();

    if attacks > defenses + 1 {
        BehaviorPattern::Aggressive
    } else if defenses > attacks + 1 {
        BehaviorPattern::Defensive
    } else {
        BehaviorPattern::Mixed
    }
}
