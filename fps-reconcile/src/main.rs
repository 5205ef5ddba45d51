use anyhow::Result;
use clap::Parser;

mod cli;
mod facts_cmd;
mod reconcile_cmd;
mod render_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => render_cmd::run_render(args),
        Command::Reconcile(args) => reconcile_cmd::run_reconcile(args),
        Command::Facts(args) => facts_cmd::run_facts(args),
    }
}
