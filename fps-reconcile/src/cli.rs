use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fps_reconcile::model::State;

#[derive(Parser, Debug)]
#[command(name = "fps-reconcile")]
#[command(about = "Reconcile flexible-port configuration into NETCONF edit-config payloads")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate the edit payload for a want config without applying it.
    Render(RenderArgs),
    /// Run the full pipeline against saved device facts and report changes.
    Reconcile(ReconcileArgs),
    /// Parse a device facts file and print the flexible-port records.
    Facts(FactsArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Want config TOML file ([[fp]] tables).
    pub config: PathBuf,
    /// Reconciliation mode.
    #[arg(long, value_enum)]
    pub state: State,
    /// Facts XML giving the device's current configuration. Omitting it
    /// renders against an empty device.
    #[arg(long)]
    pub facts: Option<PathBuf>,
    /// Emit the full <config> envelope instead of the bare <fps> payload.
    #[arg(long)]
    pub envelope: bool,
    /// Write the payload to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ReconcileArgs {
    /// Want config TOML file ([[fp]] tables).
    pub config: PathBuf,
    /// Reconciliation mode.
    #[arg(long, value_enum)]
    pub state: State,
    /// Facts XML giving the device's pre-apply configuration.
    #[arg(long)]
    pub facts: PathBuf,
    /// Facts XML giving the post-apply configuration. Defaults to re-reading
    /// --facts, which models a no-op apply.
    #[arg(long)]
    pub after_facts: Option<PathBuf>,
    /// Write the submitted <config> envelope to a file.
    #[arg(long)]
    pub applied_xml: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct FactsArgs {
    /// Facts XML file (a saved get-config reply or bare <fps> subtree).
    pub file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
