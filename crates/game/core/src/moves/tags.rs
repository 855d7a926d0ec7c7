//! Capability flags carried by moves.
//!
//! Tags arrive from data files as free-form strings. They are parsed once,
//! when the move is built, into a closed bitset so a misspelled tag fails
//! loudly instead of silently misclassifying the move.

use bitflags::bitflags;

use crate::error::MoveError;

bitflags! {
    /// Closed set of capability flags a move may carry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MoveTags: u16 {
        /// Ignores part of the target's defense; answers turtling.
        const PIERCING    = 1 << 0;
        /// Recovers resource instead of spending it.
        const REST        = 1 << 1;
        /// Legal during the desperation phase.
        const DESPERATION = 1 << 2;
        /// Intended to end the fight; preferred outright in desperation.
        const FINISHER    = 1 << 3;
        /// Punishes an aggressive opponent.
        const COUNTER     = 1 << 4;
        /// Marked as a heavy hitter independent of raw power.
        const HIGH_DAMAGE = 1 << 5;
        /// Legal during the escalation phase regardless of class.
        const ESCALATION  = 1 << 6;
        /// Plain everyday move, excluded once the fight escalates.
        const BASIC       = 1 << 7;
    }
}

impl MoveTags {
    /// Parses a single tag name.
    ///
    /// Accepts snake_case or kebab-case and the `desperate` alias.
    pub fn parse_one(tag: &str) -> Result<Self, MoveError> {
        let normalized = tag.trim().to_ascii_lowercase().replace('-', "_");
        let flag = match normalized.as_str() {
            "piercing" => Self::PIERCING,
            "rest" => Self::REST,
            "desperation" | "desperate" => Self::DESPERATION,
            "finisher" => Self::FINISHER,
            "counter" => Self::COUNTER,
            "high_damage" => Self::HIGH_DAMAGE,
            "escalation" => Self::ESCALATION,
            "basic" => Self::BASIC,
            _ => {
                return Err(MoveError::UnknownTag {
                    tag: tag.to_string(),
                });
            }
        };
        Ok(flag)
    }

    /// Parses a list of tag names into a flag set.
    ///
    /// Duplicates collapse into one flag; any unknown name is an error.
    pub fn parse<I, S>(tags: I) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .try_fold(Self::empty(), |acc, tag| Ok(acc | Self::parse_one(tag.as_ref())?))
    }

    /// Canonical snake_case names of the set flags, in bit order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter_names().map(|(name, _)| match name {
            "PIERCING" => "piercing",
            "REST" => "rest",
            "DESPERATION" => "desperation",
            "FINISHER" => "finisher",
            "COUNTER" => "counter",
            "HIGH_DAMAGE" => "high_damage",
            "ESCALATION" => "escalation",
            _ => "basic",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags_and_aliases() {
        let tags = MoveTags::parse(["piercing", "high-damage", "desperate"]).unwrap();
        assert_eq!(
            tags,
            MoveTags::PIERCING | MoveTags::HIGH_DAMAGE | MoveTags::DESPERATION
        );
    }

    #[test]
    fn duplicates_collapse() {
        let tags = MoveTags::parse(["rest", "Rest", "REST"]).unwrap();
        assert_eq!(tags, MoveTags::REST);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = MoveTags::parse(["piercing", "peircing"]).unwrap_err();
        assert_eq!(
            err,
            MoveError::UnknownTag {
                tag: "peircing".to_string()
            }
        );
    }

    #[test]
    fn names_are_snake_case() {
        let tags = MoveTags::FINISHER | MoveTags::HIGH_DAMAGE;
        let names: Vec<_> = tags.names().collect();
        assert_eq!(names, vec!["finisher", "high_damage"]);
    }
}
