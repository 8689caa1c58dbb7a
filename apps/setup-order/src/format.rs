//! Formatter applying the `declaration-order` fix to component files.
//!
//! Each file gets at most one range replacement, computed by the rule. The
//! regenerated text is already in sorted, grouped form, so one pass is
//! enough: running the formatter again reports no change.

use crate::lint::collect_targets;
use crate::models::options::OrderOptions;
use crate::models::Issue;
use crate::rule::fix_source;
use crate::utils::display_path;
use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FormatResult {
    pub file: String,
    pub changed: bool,
    pub preview: Option<String>,
    pub original: Option<String>,
}

impl FormatResult {
    fn unchanged(file: String, original: Option<String>) -> Self {
        Self {
            file,
            changed: false,
            preview: None,
            original,
        }
    }
}

/// Format one file. Errors are returned as an issue instead of a result.
pub fn format_file(
    root: &Path,
    path: &Path,
    options: &OrderOptions,
    write: bool,
    capture_old: bool,
) -> Result<FormatResult, Issue> {
    let file = display_path(root, path);
    debug!("formatting {file}");
    let issue = |rule: &str, message: String| Issue {
        file: file.clone(),
        rule: rule.to_string(),
        severity: "error".into(),
        line: 0,
        column: 0,
        message,
    };
    let data = fs::read_to_string(path)
        .map_err(|e| issue("read-file", format!("File could not be read: {e}")))?;
    let fixed = fix_source(&data, options).map_err(|e| issue("parse-error", e.to_string()))?;
    let Some(fixed) = fixed else {
        return Ok(FormatResult::unchanged(
            file.clone(),
            capture_old.then_some(data),
        ));
    };
    if write {
        fs::write(path, &fixed)
            .map_err(|e| issue("write-file", format!("File could not be written: {e}")))?;
        return Ok(FormatResult {
            file: file.clone(),
            changed: true,
            preview: None,
            original: capture_old.then_some(data),
        });
    }
    Ok(FormatResult {
        file: file.clone(),
        changed: true,
        preview: Some(fixed),
        original: capture_old.then_some(data),
    })
}

/// Format files matched by `patterns`.
///
/// When `write` is false, changed files carry a preview of the fixed
/// contents; `capture_old` also keeps the original for diffs.
pub fn run_format(
    repo_root: &str,
    patterns: &[String],
    options: &OrderOptions,
    write: bool,
    capture_old: bool,
) -> (Vec<FormatResult>, Vec<Issue>) {
    let root = PathBuf::from(repo_root);
    let (targets, mut errors) = collect_targets(&root, patterns);

    let outcomes: Vec<Result<FormatResult, Issue>> = targets
        .par_iter()
        .map(|path| format_file(&root, path, options, write, capture_old))
        .collect();

    let mut results = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(r) => results.push(r),
            Err(issue) => {
                warn!("{}: {}", issue.file, issue.message);
                errors.push(issue);
            }
        }
    }
    results.sort_by(|a, b| a.file.cmp(&b.file));
    (results, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const UNSORTED: &str = "<template><div /></template>\n<script setup lang=\"ts\">\n  const count = ref(0);\n  const props = defineProps<{ a: string }>();\n  function go() {}\n  onMounted(() => go());\n</script>\n";
    const FIXED: &str = "<template><div /></template>\n<script setup lang=\"ts\">\n  const props = defineProps<{ a: string }>();\n\n  const count = ref(0);\n\n  onMounted(() => go());\n\n  function go() {}\n</script>\n";

    #[test]
    fn test_write_applies_fix_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("Comp.vue"), UNSORTED).unwrap();
        let patterns = vec!["*.vue".to_string()];
        let opts = OrderOptions::default();

        let (results, errors) = run_format(root.to_str().unwrap(), &patterns, &opts, true, false);
        assert!(errors.is_empty());
        assert_eq!(results.len(), 1);
        assert!(results[0].changed);
        assert_eq!(fs::read_to_string(root.join("Comp.vue")).unwrap(), FIXED);

        let (again, _) = run_format(root.to_str().unwrap(), &patterns, &opts, true, false);
        assert!(!again[0].changed);
    }

    #[test]
    fn test_preview_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("Comp.vue"), UNSORTED).unwrap();
        let (results, _) = run_format(
            root.to_str().unwrap(),
            &["*.vue".to_string()],
            &OrderOptions::default(),
            false,
            true,
        );
        assert_eq!(results[0].preview.as_deref(), Some(FIXED));
        assert_eq!(results[0].original.as_deref(), Some(UNSORTED));
        assert_eq!(fs::read_to_string(root.join("Comp.vue")).unwrap(), UNSORTED);
    }

    #[test]
    fn test_parse_failure_is_an_error_not_a_result() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("Bad.vue"), "<script setup>\nconst a = 1;\n").unwrap();
        let (results, errors) = run_format(
            root.to_str().unwrap(),
            &["*.vue".to_string()],
            &OrderOptions::default(),
            true,
            false,
        );
        assert!(results.is_empty());
        assert_eq!(errors[0].rule, "parse-error");
    }
}
