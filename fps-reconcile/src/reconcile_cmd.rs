use anyhow::{Context, Result};
use fps_reconcile::device::{DiscardApplier, FileApplier};
use fps_reconcile::execute::{execute, ReconcileOutcome};
use fps_reconcile::facts::{FactsError, FactsSource, FileFacts};
use fps_reconcile::model::{load_want, FlexiblePort};
use fps_reconcile::report::render_outcome;

use crate::cli::{OutputFormat, ReconcileArgs};

/// Facts source serving the pre-apply snapshot on the first fetch and the
/// post-apply snapshot on every later fetch.
struct StagedFacts {
    before: FileFacts,
    after: FileFacts,
    fetched: bool,
}

impl FactsSource for StagedFacts {
    fn fetch(&mut self) -> Result<Vec<FlexiblePort>, FactsError> {
        if self.fetched {
            self.after.fetch()
        } else {
            self.fetched = true;
            self.before.fetch()
        }
    }
}

pub fn run_reconcile(args: ReconcileArgs) -> Result<()> {
    let want = load_want(&args.config)
        .with_context(|| format!("failed to load want config {}", args.config.display()))?;

    let after_path = args.after_facts.as_ref().unwrap_or(&args.facts);
    let mut facts = StagedFacts {
        before: FileFacts::new(&args.facts),
        after: FileFacts::new(after_path),
        fetched: false,
    };

    let outcome = run_pipeline(&mut facts, &args, &want)
        .with_context(|| format!("reconciliation failed for {}", args.config.display()))?;

    match args.format {
        OutputFormat::Text => println!("{}", render_outcome(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

fn run_pipeline(
    facts: &mut StagedFacts,
    args: &ReconcileArgs,
    want: &[FlexiblePort],
) -> Result<ReconcileOutcome> {
    let outcome = match &args.applied_xml {
        Some(path) => {
            let mut applier = FileApplier::new(path);
            execute(facts, &mut applier, want, args.state)?
        }
        None => {
            let mut applier = DiscardApplier;
            execute(facts, &mut applier, want, args.state)?
        }
    };
    Ok(outcome)
}
