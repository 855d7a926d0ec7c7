//! Score every legal move of a scenario and explain the numbers.

use anyhow::Result;
use clap::Parser;
use console::style;

use runtime::{Intent, IntentKind, IntentSelector, MoveScorer, TacticalContext};

use crate::utils::{ContentArgs, check_moveset, load_scenario, parse_intent};

/// Score every move of a scenario under an intent
#[derive(Parser)]
pub struct Score {
    /// Built-in scenario name or path to a scenario RON file
    #[arg(value_name = "SCENARIO")]
    scenario: String,

    /// Score under this intent instead of the one the selector picks
    #[arg(short, long, value_name = "INTENT", value_parser = parse_intent)]
    intent: Option<IntentKind>,

    #[command(flatten)]
    content: ContentArgs,
}

impl Score {
    pub fn execute(self) -> Result<()> {
        let scenario = load_scenario(&self.scenario)?;
        let catalog = self.content.load_catalog()?;
        let config = self.content.load_config()?;
        check_moveset(&scenario, &catalog)?;

        let ctx = TacticalContext::extract(
            &scenario.me,
            &scenario.enemy,
            &scenario.log,
            &catalog,
            &config,
        );
        let intent = match self.intent {
            Some(kind) => Intent::new(kind, "requested on the command line"),
            None => IntentSelector::new(&config).choose(&ctx),
        };

        println!(
            "{} {} ({})",
            style("Scenario:").bold().cyan(),
            scenario.name,
            scenario.description
        );
        println!(
            "{} {} - {}",
            style("Intent:").bold().cyan(),
            intent.kind,
            intent.rationale
        );
        println!();

        // No tie-break noise, so the printout shows the deterministic terms only.
        let scorer = MoveScorer::new(&config);
        let ranked = scorer.score_all(
            scenario.me.known_moves(&catalog),
            &scenario.me,
            &scenario.enemy,
            &ctx,
            &intent,
        );

        for (rank, scored) in ranked.iter().enumerate() {
            let header = format!("#{} ", rank + 1);
            print!("{}", style(header).bold().yellow());
            print!("{}", MoveScorer::explain(scored));
        }

        Ok(())
    }
}
