/// Externally driven combat phase that hard-restricts legal moves.
///
/// The surrounding simulation owns phase transitions; the AI only reacts to
/// the phase it is handed. This is the single authoritative phase signal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatPhase {
    /// Every known move is eligible.
    #[default]
    Normal,
    /// Basic moves are locked out unless tagged for escalation.
    Escalation,
    /// Only desperation and finisher moves are eligible.
    Desperation,
}
