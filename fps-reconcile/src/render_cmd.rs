use std::fs;

use anyhow::{Context, Result};
use fps_reconcile::device::wrap_config;
use fps_reconcile::facts::{FactsSource, FileFacts};
use fps_reconcile::model::load_want;
use fps_reconcile::payload::build_payload;
use fps_reconcile::reconcile::reconcile;

use crate::cli::RenderArgs;

pub fn run_render(args: RenderArgs) -> Result<()> {
    let want = load_want(&args.config)
        .with_context(|| format!("failed to load want config {}", args.config.display()))?;

    let have = match &args.facts {
        Some(path) => FileFacts::new(path)
            .fetch()
            .with_context(|| format!("failed to load facts {}", path.display()))?,
        None => Vec::new(),
    };

    let fragments = reconcile(&want, &have, args.state);
    let mut payload = build_payload(fragments)?;
    if args.envelope {
        payload = wrap_config(&payload);
    }

    match &args.output {
        Some(path) => fs::write(path, &payload)
            .with_context(|| format!("failed to write payload {}", path.display()))?,
        None => println!("{}", String::from_utf8_lossy(&payload)),
    }

    Ok(())
}
