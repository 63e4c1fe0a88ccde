use anyhow::{anyhow, Context, Result};
use clap::Parser;

use tally::cli::CliArgs;
use tally::commands::{execute, COMMANDS};
use tally::document::RopeDocument;
use tally::source::LineSource;

fn main() -> Result<()> {
    tally::tracing::init();

    let args = CliArgs::parse();
    let list = args.list;
    let Some(invocation) = args.into_invocation().map_err(|e| anyhow!(e))? else {
        if list {
            for def in COMMANDS {
                println!("{:<22} {}", def.name, def.label);
            }
        }
        return Ok(());
    };

    let mut doc = RopeDocument::from_file(&invocation.file)
        .with_context(|| format!("Failed to read {}", invocation.file.display()))?;
    doc.set_caret(invocation.caret);

    let outcome = execute(invocation.command, &mut doc, &invocation.config);

    if invocation.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("{}: {}", invocation.command, outcome);
    }

    if invocation.write && matches!(outcome, tally::Outcome::Edited { .. }) {
        doc.save(&invocation.file)
            .with_context(|| format!("Failed to write {}", invocation.file.display()))?;
        tracing::info!("Wrote {}", invocation.file.display());
    }

    Ok(())
}
