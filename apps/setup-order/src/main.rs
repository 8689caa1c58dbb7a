//! setup-order CLI binary entry point.
//! Delegates to the library for lint/format and prints results.

use clap::Parser;
use setup_order::cli::{Cli, Commands};
use setup_order::config::{self, Effective};
use setup_order::utils::{error_prefix, info_prefix, note_prefix};
use setup_order::{format, lint, output};

/// Resolve config or exit with status 2.
fn effective_or_exit(
    repo_root: Option<&str>,
    patterns: &[String],
    output: Option<&str>,
    write: Option<bool>,
    diff: Option<bool>,
    check: Option<bool>,
) -> Effective {
    match config::resolve_effective(repo_root, patterns, output, write, diff, check) {
        Ok(eff) => {
            if eff.output != "json" {
                if !eff.config_found {
                    eprintln!("{} No setup-order.toml found; using defaults.", note_prefix());
                }
                if patterns.is_empty() && eff.patterns == config::default_patterns() {
                    eprintln!(
                        "{} Using default patterns: [{}]",
                        info_prefix(),
                        eff.patterns.join(", ")
                    );
                }
            }
            eff
        }
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(2);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            repo_root,
            patterns,
            output,
        } => {
            let eff = effective_or_exit(
                repo_root.as_deref(),
                &patterns,
                output.as_deref(),
                None,
                None,
                None,
            );
            let repo_root_str = eff.repo_root.to_string_lossy().to_string();
            let result = lint::run_lint(&repo_root_str, &eff.patterns, &eff.order);
            output::print_lint(&result, &eff.output);
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
        }
        Commands::Format {
            repo_root,
            patterns,
            write,
            diff,
            check,
            output,
        } => {
            let eff = effective_or_exit(
                repo_root.as_deref(),
                &patterns,
                output.as_deref(),
                if write { Some(true) } else { None },
                if diff { Some(true) } else { None },
                if check { Some(true) } else { None },
            );
            // If diff or check is enabled, force write=false for this run.
            let eff_write = if eff.diff || eff.check { false } else { eff.write };
            let repo_root_str = eff.repo_root.to_string_lossy().to_string();
            let (results, errors) = format::run_format(
                &repo_root_str,
                &eff.patterns,
                &eff.order,
                eff_write,
                eff.diff || eff.check,
            );
            output::print_format(&results, &eff.output, eff_write, eff.diff, &errors);
            if !errors.is_empty() {
                std::process::exit(2);
            }
            if eff.check && results.iter().any(|r| r.changed) {
                std::process::exit(1);
            }
        }
    }
}
