//! Run the tactical AI over a scenario and print its decision traces.
//!
//! With more than one turn, both combatants are driven by the AI and a
//! sparring resolution advances the snapshots between decisions. Sparring only
//! ticks cooldowns, spends and regains resource, and applies flat damage.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use game_core::{CombatantSnapshot, LogEntry, Move, MoveClass, MoveTags, PcgRng};
use runtime::{
    AiDecisionState, DecisionRequest, DecisionTrace, IntentKind, MoveProvider, TacticalAiProvider,
};

use crate::utils::{ContentArgs, check_moveset, load_scenario, parse_intent};

/// Resource regained per turn while sparring.
const SPAR_REGEN: u32 = 1;
/// Extra resource regained by a rest move.
const SPAR_REST_BONUS: u32 = 2;

/// Run the AI over a scenario and print its decisions
#[derive(Parser)]
pub struct Decide {
    /// Built-in scenario name or path to a scenario RON file
    #[arg(value_name = "SCENARIO", default_value = "finishing_blow")]
    scenario: String,

    /// Number of turns to play (both sides act from the second turn on)
    #[arg(short, long, default_value_t = 1)]
    turns: u32,

    /// Battle seed for the tie-break noise (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Opening stance held until the situation calls for something else
    #[arg(long, value_name = "INTENT", value_parser = parse_intent)]
    opening: Option<IntentKind>,

    /// Print each trace as JSON instead of a summary
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    content: ContentArgs,
}

impl Decide {
    pub fn execute(self) -> Result<()> {
        let scenario = load_scenario(&self.scenario)?;
        let catalog = self.content.load_catalog()?;
        let config = self.content.load_config()?;
        check_moveset(&scenario, &catalog)?;

        let seed = self.seed.unwrap_or_else(rand::random);
        let provider = TacticalAiProvider::with_rng(config, PcgRng, seed);

        if !self.json {
            println!(
                "{} {} (seed {})",
                style("Scenario:").bold().cyan(),
                scenario.name,
                seed
            );
            println!();
        }

        let mut fighters = [scenario.me.clone(), scenario.enemy.clone()];
        let opening = self.opening.map(|kind| AiDecisionState::seeded(kind, 0));
        let mut states = [opening.clone(), opening];
        let mut log = scenario.log.clone();

        for offset in 0..self.turns {
            let turn = scenario.turn + offset;
            // The scenario is framed from `me`; the enemy joins once play starts.
            let sides: &[usize] = if offset == 0 { &[0] } else { &[0, 1] };

            for &side in sides {
                if fighters.iter().any(|f| f.health == 0) {
                    return Ok(());
                }
                let (me, enemy) = (&fighters[side], &fighters[1 - side]);
                let request = DecisionRequest::new(me, enemy, turn, &log, &catalog)
                    .with_phase(scenario.phase)
                    .with_previous(states[side].as_ref());
                let decision = provider
                    .decide(request)
                    .with_context(|| format!("Decision failed on turn {turn}"))?;

                self.report(&decision.trace)?;

                let chosen = decision.chosen.cloned();
                states[side] = Some(decision.state);

                let [first, second] = &mut fighters;
                let (actor, target) = if side == 0 {
                    (first, second)
                } else {
                    (second, first)
                };
                let damage = spar(actor, target, chosen.as_ref());
                if let Some(chosen) = chosen {
                    log.push(LogEntry::new(turn, actor.id, chosen.name, damage));
                }
            }
        }

        Ok(())
    }

    fn report(&self, trace: &DecisionTrace) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(trace)
                .context("Failed to serialize decision trace to JSON")?;
            println!("{}", json);
            return Ok(());
        }

        println!("{}", style(trace.summary()).bold().green());
        println!("  {}", style(&trace.rationale).dim());
        for alternative in &trace.alternatives {
            println!(
                "  {:<16} {:>7.2}  alignment {}",
                alternative.name, alternative.score, alternative.intent_alignment
            );
        }
        if !trace.stale.is_empty() {
            println!("  stale: {}", trace.stale.join(", "));
        }
        if let Some(best) = trace.alternatives.first() {
            tracing::debug!("best candidate reasons: {}", best.reasons.join("; "));
        }
        println!();
        Ok(())
    }
}

/// Apply a chosen move with sparring rules and return the damage dealt.
fn spar(
    actor: &mut CombatantSnapshot,
    target: &mut CombatantSnapshot,
    chosen: Option<&Move>,
) -> u32 {
    actor.cooldowns.retain(|_, turns| {
        *turns = turns.saturating_sub(1);
        *turns > 0
    });
    actor.resource += SPAR_REGEN;

    let Some(chosen) = chosen else {
        return 0;
    };

    actor.resource = actor.resource.saturating_sub(chosen.cost);
    if chosen.has(MoveTags::REST) {
        actor.resource += SPAR_REST_BONUS;
    }
    if let Some(turns) = chosen.cooldown {
        actor.cooldowns.insert(chosen.name.clone(), turns);
    }
    actor.move_history.push(chosen.name.clone());

    if chosen.class != MoveClass::Attack {
        return 0;
    }
    let damage = chosen.power.saturating_sub(target.defense / 2).max(1);
    target.health = target.health.saturating_sub(damage);
    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CombatantId;

    fn fighter(id: u32) -> CombatantSnapshot {
        CombatantSnapshot::new(CombatantId(id), format!("f{id}"), 50, 10).with_resource(3)
    }

    #[test]
    fn spar_spends_cost_and_starts_cooldown() {
        let (mut actor, mut target) = (fighter(1), fighter(2));
        let blast = Move::new("Blast", MoveClass::Attack, 20)
            .with_cost(2)
            .with_cooldown(2);

        let damage = spar(&mut actor, &mut target, Some(&blast));

        assert_eq!(damage, 15);
        assert_eq!(target.health, 35);
        assert_eq!(actor.resource, 2);
        assert_eq!(actor.cooldown_of("Blast"), 2);
        assert_eq!(actor.last_move(), Some("Blast"));
    }

    #[test]
    fn spar_ticks_cooldowns_when_passing() {
        let mut actor = fighter(1).with_cooldown("Blast", 1);
        let mut target = fighter(2);

        assert_eq!(spar(&mut actor, &mut target, None), 0);
        assert!(!actor.is_on_cooldown("Blast"));
        assert!(actor.cooldowns.is_empty());
    }
}
