//! List the moves of a catalog.

use anyhow::Result;
use clap::Parser;
use console::style;

use game_core::{Move, MoveClass};

use crate::utils::ContentArgs;

/// List the moves of a catalog
#[derive(Parser)]
pub struct Catalog {
    #[command(flatten)]
    content: ContentArgs,

    /// Only show moves carrying this tag (e.g. finisher, high-damage)
    #[arg(short, long, value_name = "TAG")]
    tag: Option<String>,
}

impl Catalog {
    pub fn execute(self) -> Result<()> {
        let catalog = self.content.load_catalog()?;
        let filter = self
            .tag
            .as_deref()
            .map(game_core::MoveTags::parse_one)
            .transpose()?;

        println!(
            "{} {} moves",
            style("Catalog:").bold().cyan(),
            catalog.len()
        );
        println!();

        for (index, candidate) in catalog.iter().enumerate() {
            if filter.is_some_and(|tag| !candidate.has(tag)) {
                continue;
            }
            print_move(index, candidate);
        }

        Ok(())
    }
}

fn print_move(index: usize, candidate: &Move) {
    let class = match candidate.class {
        MoveClass::Attack => style(candidate.class.as_ref()).red(),
        MoveClass::DefenseBuff => style(candidate.class.as_ref()).blue(),
        MoveClass::Utility => style(candidate.class.as_ref()).green(),
    };
    let tags: Vec<_> = candidate.tags.names().collect();

    println!(
        "  {:>2}. {:<16} {:<12} power {:>3}  cost {}  cooldown {}  {}",
        index,
        style(&candidate.name).bold(),
        class,
        candidate.power,
        candidate.cost,
        candidate.cooldown.unwrap_or(0),
        tags.join(", ")
    );
    if let Some(status) = candidate.status {
        println!("      inflicts {} for {} turns", status.kind, status.duration);
    }
}
