//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "setup-order",
    version,
    about = "Enforce declaration order in Vue <script setup> blocks",
    long_about = "setup-order — lint and fix the order of top-level declarations in Vue <script setup> blocks.\n\nConfiguration precedence: CLI > setup-order.toml > defaults.",
    after_help = "Examples:\n  setup-order lint\n  setup-order lint --pattern 'src/**/*.vue' --output json\n  setup-order format --diff\n  setup-order format --write",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for linting and formatting.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current setup-order version.")]
    Version,
    /// Report files whose declarations are out of order
    #[command(
        about = "Run lint checks",
        long_about = "Report every component whose <script setup> declarations are not in the configured order. Exits non-zero when any error is found.",
        after_help = "Examples:\n  setup-order lint\n  setup-order lint --output json"
    )]
    Lint {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long = "pattern", help = "Glob pattern relative to the repo root (repeatable, default: **/*.vue)")]
        patterns: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Reorder declarations
    #[command(
        about = "Apply declaration order",
        long_about = "Rewrite <script setup> blocks into the configured order. When --diff or --check is set, write is disabled.",
        after_help = "Examples:\n  setup-order format --diff\n  setup-order format --write"
    )]
    Format {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long = "pattern", help = "Glob pattern relative to the repo root (repeatable, default: **/*.vue)")]
        patterns: Vec<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Write changes to files")]
        write: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Show diffs for changed files (implies write=false)")]
        diff: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if changes would occur (implies write=false)")]
        check: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
