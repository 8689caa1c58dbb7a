//! Lint runner for `<script setup>` declaration order.
//!
//! Produces a `LintResult` with issues and a summary. Files that cannot be
//! read or parsed become issues of their own and never abort the run.

use crate::models::options::OrderOptions;
use crate::models::{Issue, LintResult, Summary};
use crate::rule::check_source;
use crate::utils::display_path;
use glob::glob;
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand glob patterns relative to `root` into a sorted, de-duplicated list.
///
/// Invalid patterns are returned as issues.
pub fn collect_targets(root: &Path, patterns: &[String]) -> (Vec<PathBuf>, Vec<Issue>) {
    let mut targets: BTreeSet<PathBuf> = BTreeSet::new();
    let mut issues = Vec::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        match glob(&pattern) {
            Ok(paths) => {
                for entry in paths {
                    match entry {
                        Ok(p) if p.is_file() => {
                            targets.insert(p);
                        }
                        Ok(_) => {}
                        Err(e) => warn!("skipping unreadable path: {e}"),
                    }
                }
            }
            Err(e) => issues.push(Issue {
                file: pat.clone(),
                rule: "load-pattern".into(),
                severity: "error".into(),
                line: 0,
                column: 0,
                message: format!("Invalid glob pattern: {e}"),
            }),
        }
    }
    (targets.into_iter().collect(), issues)
}

/// Check a single file, returning its issues.
pub fn lint_file(root: &Path, path: &Path, options: &OrderOptions) -> Vec<Issue> {
    let file = display_path(root, path);
    debug!("checking {file}");
    let data = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!("cannot read {file}: {e}");
            return vec![Issue {
                file,
                rule: "read-file".into(),
                severity: "error".into(),
                line: 0,
                column: 0,
                message: format!("File could not be read: {e}"),
            }];
        }
    };
    match check_source(&data, options) {
        Ok(None) => Vec::new(),
        Ok(Some(diag)) => vec![Issue {
            file,
            rule: diag.rule.to_string(),
            severity: "error".into(),
            line: diag.line,
            column: diag.column,
            message: diag.message.to_string(),
        }],
        Err(e) => vec![Issue {
            file,
            rule: "parse-error".into(),
            severity: "error".into(),
            line: 0,
            column: 0,
            message: e.to_string(),
        }],
    }
}

/// Run lint across files matched by `patterns` under `repo_root`.
pub fn run_lint(repo_root: &str, patterns: &[String], options: &OrderOptions) -> LintResult {
    let root = PathBuf::from(repo_root);
    let (targets, mut issues) = collect_targets(&root, patterns);
    debug!("{} file(s) matched", targets.len());

    let per_file: Vec<Vec<Issue>> = targets
        .par_iter()
        .map(|path| lint_file(&root, path, options))
        .collect();
    // Deterministic ordering of issues by file then message
    let mut combined: Vec<Issue> = per_file.into_iter().flatten().collect();
    combined.sort_by(|a, b| a.file.cmp(&b.file).then(a.message.cmp(&b.message)));
    issues.extend(combined);

    let mut summary = Summary {
        files: targets.len(),
        ..Summary::default()
    };
    for is in &issues {
        match is.severity.as_str() {
            "error" => summary.errors += 1,
            "warning" => summary.warnings += 1,
            _ => summary.infos += 1,
        }
    }
    LintResult { issues, summary }
}
