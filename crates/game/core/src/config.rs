/// Tunable thresholds for the tactical AI.
///
/// Every numeric cut-off used by context extraction, intent selection, move
/// scoring and the legality filter lives here so balance changes never touch
/// decision code. Missing keys in a TOML file fall back to the defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TacticsConfig {
    // ===== context extraction =====
    /// Health below this percentage of max counts as health pressure.
    pub health_pressure_pct: u32,
    /// Resource pool strictly below this value counts as resource pressure.
    pub resource_pressure_below: u32,
    /// Enemy defense strictly below this value marks the enemy as vulnerable.
    pub vulnerable_defense_below: u32,
    /// Enemy defensive streak at or above this length counts as turtling.
    pub turtling_streak: u32,
    /// Own recent damage must exceed the enemy's by more than this for momentum.
    pub momentum_margin: u32,
    /// Number of trailing log entries summed for recent damage.
    pub damage_window: usize,
    /// Number of trailing moves inspected for pattern classification.
    pub pattern_window: usize,
    /// Turns at or below this count are the early game.
    pub early_game_until: u32,
    /// Turns above this count are the late game.
    pub late_game_after: u32,
    /// Move power strictly above this value is a burst move.
    pub high_damage_threshold: u32,
    /// Moves on cooldown at or above this count signal cooldown pressure.
    pub cooldown_pressure_count: usize,
    /// Health-percentage gap (enemy ahead) that counts as losing.
    pub losing_margin_pct: u32,
    /// Health-percentage gap (self ahead) that counts as dominating.
    pub dominating_margin_pct: u32,

    // ===== intent selection =====
    /// Own defense above this value enables `counter_attack` against aggressors.
    pub counter_defense_above: u32,
    /// `restore_chi` is kept until the pool reaches this value.
    pub restore_target: u32,

    // ===== scoring =====
    /// Multiplier applied to net expected damage of attack moves.
    pub damage_multiplier: f32,
    /// Multiplier applied to defensive power of defense moves.
    pub defense_multiplier: f32,
    /// Weight applied to the [0, 10] intent alignment.
    pub alignment_weight: f32,
    /// Flat penalty for a move costing more than the current pool.
    pub unaffordable_penalty: f32,
    /// Flat penalty for a move currently on cooldown.
    pub cooldown_penalty: f32,
    /// Half-width of the uniform tie-break perturbation.
    pub noise_amplitude: f32,

    // ===== legality =====
    /// Trailing own-history window inspected for staleness.
    pub stale_window: usize,
    /// Uses within the window at or above which a move is stale.
    pub stale_repeat_limit: usize,
}

impl TacticsConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_ACTIVE_EFFECTS: usize = 8;
    pub const TRACE_ALTERNATIVES: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HEALTH_PRESSURE_PCT: u32 = 30;
    pub const DEFAULT_RESOURCE_PRESSURE_BELOW: u32 = 2;
    pub const DEFAULT_VULNERABLE_DEFENSE_BELOW: u32 = 10;
    pub const DEFAULT_TURTLING_STREAK: u32 = 3;
    pub const DEFAULT_MOMENTUM_MARGIN: u32 = 2;
    pub const DEFAULT_DAMAGE_WINDOW: usize = 6;
    pub const DEFAULT_PATTERN_WINDOW: usize = 5;
    pub const DEFAULT_EARLY_GAME_UNTIL: u32 = 4;
    pub const DEFAULT_LATE_GAME_AFTER: u32 = 12;
    pub const DEFAULT_HIGH_DAMAGE_THRESHOLD: u32 = 30;
    pub const DEFAULT_NOISE_AMPLITUDE: f32 = 0.75;

    pub fn new() -> Self {
        Self {
            health_pressure_pct: Self::DEFAULT_HEALTH_PRESSURE_PCT,
            resource_pressure_below: Self::DEFAULT_RESOURCE_PRESSURE_BELOW,
            vulnerable_defense_below: Self::DEFAULT_VULNERABLE_DEFENSE_BELOW,
            turtling_streak: Self::DEFAULT_TURTLING_STREAK,
            momentum_margin: Self::DEFAULT_MOMENTUM_MARGIN,
            damage_window: Self::DEFAULT_DAMAGE_WINDOW,
            pattern_window: Self::DEFAULT_PATTERN_WINDOW,
            early_game_until: Self::DEFAULT_EARLY_GAME_UNTIL,
            late_game_after: Self::DEFAULT_LATE_GAME_AFTER,
            high_damage_threshold: Self::DEFAULT_HIGH_DAMAGE_THRESHOLD,
            cooldown_pressure_count: 2,
            losing_margin_pct: 15,
            dominating_margin_pct: 25,
            counter_defense_above: 15,
            restore_target: 4,
            damage_multiplier: 1.5,
            defense_multiplier: 0.6,
            alignment_weight: 2.0,
            unaffordable_penalty: 40.0,
            cooldown_penalty: 50.0,
            noise_amplitude: Self::DEFAULT_NOISE_AMPLITUDE,
            stale_window: 4,
            stale_repeat_limit: 2,
        }
    }
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self::new()
    }
}
