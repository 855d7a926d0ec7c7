//! Append-only battle history.
//!
//! Combat resolution appends one entry per resolved action. The AI reads a
//! trailing window to derive recent damage and game phase.

use crate::combatant::CombatantId;

/// One resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Turn in which the action resolved (1-based).
    pub turn: u32,
    pub actor: CombatantId,
    pub move_name: String,
    /// Damage dealt to the opponent; zero for non-damaging actions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: u32,
}

impl LogEntry {
    pub fn new(turn: u32, actor: CombatantId, move_name: impl Into<String>, damage: u32) -> Self {
        Self {
            turn,
            actor,
            move_name: move_name.into(),
            damage,
        }
    }
}

/// Ordered battle log. Entries can be appended but never edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Highest turn recorded so far; zero for an empty log.
    pub fn turn_count(&self) -> u32 {
        self.entries.iter().map(|e| e.turn).max().unwrap_or(0)
    }

    /// Damage dealt by `actor` within the last `window` entries.
    pub fn recent_damage_by(&self, actor: CombatantId, window: usize) -> u32 {
        self.recent(window)
            .iter()
            .filter(|e| e.actor == actor && e.damage > 0)
            .fold(0u32, |total, e| total.saturating_add(e.damage))
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<LogEntry> for BattleLog {
    fn from_iter<T: IntoIterator<Item = LogEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: CombatantId = CombatantId(1);
    const B: CombatantId = CombatantId(2);

    #[test]
    fn recent_window_clamps_to_length() {
        let log: BattleLog = (1..=3).map(|t| LogEntry::new(t, A, "Jab", 4)).collect();
        assert_eq!(log.recent(10).len(), 3);
        assert_eq!(log.recent(2)[0].turn, 2);
        assert!(BattleLog::new().recent(6).is_empty());
    }

    #[test]
    fn recent_damage_is_attributed() {
        let mut log = BattleLog::new();
        log.push(LogEntry::new(1, A, "Jab", 100));
        log.push(LogEntry::new(1, B, "Kick", 3));
        log.push(LogEntry::new(2, A, "Jab", 5));
        log.push(LogEntry::new(2, B, "Guard", 0));

        // The first entry falls outside a window of three.
        assert_eq!(log.recent_damage_by(A, 3), 5);
        assert_eq!(log.recent_damage_by(B, 3), 3);
    }

    #[test]
    fn recent_damage_saturates_instead_of_overflowing() {
        let log: BattleLog = [
            LogEntry::new(1, A, "Meteor", u32::MAX - 1),
            LogEntry::new(2, A, "Jab", 5),
        ]
        .into_iter()
        .collect();
        assert_eq!(log.recent_damage_by(A, 6), u32::MAX);
    }

    #[test]
    fn turn_count_tracks_highest_turn() {
        let mut log = BattleLog::new();
        assert_eq!(log.turn_count(), 0);
        log.push(LogEntry::new(7, A, "Jab", 1));
        log.push(LogEntry::new(7, B, "Jab", 1));
        assert_eq!(log.turn_count(), 7);
    }
}
