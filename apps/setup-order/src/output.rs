//! Output rendering for lint and format commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::format::FormatResult;
use crate::models::{Issue, LintResult};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn print_json(value: &JsonVal) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
    }
}

fn issue_line(is: &Issue, color: bool) -> String {
    let sev = match is.severity.as_str() {
        "error" => {
            if color {
                "⟦error⟧".red().bold().to_string()
            } else {
                "⟦error⟧".to_string()
            }
        }
        "warning" | "warn" => {
            if color {
                "⟦warn⟧".yellow().bold().to_string()
            } else {
                "⟦warn⟧".to_string()
            }
        }
        _ => {
            if color {
                "⟦info⟧".blue().bold().to_string()
            } else {
                "⟦info⟧".to_string()
            }
        }
    };
    let location = if is.line > 0 {
        format!("{}:{}:{}", is.file, is.line, is.column)
    } else {
        is.file.clone()
    };
    let location = if color {
        location.bold().to_string()
    } else {
        location
    };
    format!("{} {} ❲{}❳ — {}", sev, location, is.rule, is.message)
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: &str) {
    match output {
        "json" => print_json(&compose_lint_json(res)),
        _ => {
            let color = use_colors(output);
            for is in &res.issues {
                println!("{}", issue_line(is, color));
            }
            let summary = format!(
                "— Summary — errors={} warnings={} infos={} files={}",
                res.summary.errors, res.summary.warnings, res.summary.infos, res.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print formatting results. When `write` is false, previews and diffs
/// can be emitted; otherwise only file statuses are shown.
pub fn print_format(results: &[FormatResult], output: &str, write: bool, diff: bool, errors: &[Issue]) {
    match output {
        "json" => print_json(&compose_format_json(results, write, diff, errors)),
        _ => {
            let color = use_colors(output);
            for is in errors {
                eprintln!("{}", issue_line(is, color));
            }
            for r in results {
                if !r.changed {
                    if color {
                        println!("{} {}", "no changes:".bright_black(), r.file);
                    } else {
                        println!("no changes: {}", r.file);
                    }
                    continue;
                }
                if write {
                    if color {
                        println!("{} {}", "formatted:".green().bold(), r.file.bold());
                    } else {
                        println!("formatted: {}", r.file);
                    }
                    continue;
                }
                let body = if diff {
                    build_line_diff(r.original.as_deref(), r.preview.as_deref())
                        .or_else(|| r.preview.clone())
                } else {
                    r.preview.clone()
                };
                if let Some(body) = body {
                    if color {
                        println!("{} {}\n{}", "---".cyan().bold(), r.file.bold(), body);
                    } else {
                        println!("--- {}\n{}", r.file, body);
                    }
                }
            }
        }
    }
}

/// Minimal diff of the changed region: common leading and trailing lines are
/// trimmed, the rest is shown as removed then added.
pub fn build_line_diff(old: Option<&str>, new: Option<&str>) -> Option<String> {
    let old: Vec<&str> = old?.lines().collect();
    let new: Vec<&str> = new?.lines().collect();
    let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let mut out = format!(
        "@@ -{},{} +{},{} @@\n",
        prefix + 1,
        old.len() - prefix - suffix,
        prefix + 1,
        new.len() - prefix - suffix
    );
    for line in &old[prefix..old.len() - suffix] {
        out.push_str(&format!("-{}\n", line));
    }
    for line in &new[prefix..new.len() - suffix] {
        out.push_str(&format!("+{}\n", line));
    }
    Some(out)
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    json!({
        "issues": res.issues,
        "summary": res.summary,
    })
}

/// Compose format JSON object (pure) for testing/snapshot purposes.
pub fn compose_format_json(
    results: &[FormatResult],
    write: bool,
    diff: bool,
    errors: &[Issue],
) -> JsonVal {
    let items: Vec<_> = results
        .iter()
        .map(|r| {
            json!({
                "file": r.file,
                "changed": r.changed,
                "wrote": write && r.changed,
                "preview": if !write { r.preview.as_ref() } else { None },
                "diff": if diff && !write { build_line_diff(r.original.as_deref(), r.preview.as_deref()) } else { None }
            })
        })
        .collect();
    let summary = json!({
        "changed": results.iter().filter(|r| r.changed).count(),
        "total": results.len(),
        "wrote": if write { results.iter().filter(|r| r.changed).count() } else { 0 },
        "errors": errors.len(),
    });
    json!({"results": items, "errors": errors, "summary": summary})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_format_json_write_and_preview_diff() {
        let results = vec![
            FormatResult {
                file: "A.vue".into(),
                changed: true,
                preview: Some("<script setup>\nconst p = defineProps();\n\nconst a = 1;\n</script>".into()),
                original: Some("<script setup>\nconst a = 1;\nconst p = defineProps();\n</script>".into()),
            },
            FormatResult {
                file: "B.vue".into(),
                changed: false,
                preview: None,
                original: Some("<script setup>\n</script>".into()),
            },
        ];
        // Case: write=false, diff=true ⇒ previews and diffs present for changed item
        let out = compose_format_json(&results, false, true, &[]);
        assert_eq!(out["summary"]["changed"], 1);
        assert_eq!(out["summary"]["wrote"], 0);
        assert!(out["results"][0]["preview"].is_string());
        assert!(out["results"][0]["diff"].is_string());
        // Case: write=true ⇒ no preview/diff, wrote equals changed
        let out2 = compose_format_json(&results, true, false, &[]);
        assert_eq!(out2["summary"]["wrote"], 1);
        assert!(out2["results"][0]["preview"].is_null());
        assert!(out2["results"][0]["diff"].is_null());
    }

    #[test]
    fn test_line_diff_trims_common_lines() {
        let old = "<script setup>\nconst a = 1;\nconst p = defineProps();\n</script>";
        let new = "<script setup>\nconst p = defineProps();\n\nconst a = 1;\n</script>";
        let d = build_line_diff(Some(old), Some(new)).unwrap();
        assert_eq!(
            d,
            "@@ -2,2 +2,3 @@\n-const a = 1;\n-const p = defineProps();\n+const p = defineProps();\n+\n+const a = 1;\n"
        );
    }

    #[test]
    fn test_compose_lint_json_shape() {
        let res = LintResult {
            issues: vec![Issue {
                file: "App.vue".into(),
                rule: "declaration-order".into(),
                severity: "error".into(),
                line: 3,
                column: 1,
                message: "msg".into(),
            }],
            summary: crate::models::Summary {
                errors: 1,
                warnings: 0,
                infos: 0,
                files: 1,
            },
        };
        let out = compose_lint_json(&res);
        assert_eq!(out["summary"]["errors"], 1);
        assert_eq!(out["issues"][0]["line"], 3);
        assert_eq!(out["issues"][0]["rule"], "declaration-order");
    }
}
