use anyhow::{Context, Result};
use fps_reconcile::facts::{FactsSource, FileFacts};

use crate::cli::FactsArgs;

pub fn run_facts(args: FactsArgs) -> Result<()> {
    let records = FileFacts::new(&args.file)
        .fetch()
        .with_context(|| format!("failed to load facts {}", args.file.display()))?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
