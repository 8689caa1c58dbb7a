//! Scope extraction: which statements belong to `<script setup>`.
//!
//! Imports never take part. Only the first setup element holding a
//! statement is considered, so the replacement never spans markup.
//!
//! Non-whitespace text between two survivors is attached to one of them so
//! that the replacement cannot drop it: comments on the same line as the end
//! of a statement trail that statement, anything after the line break leads
//! the next one with its blank lines dropped.

use crate::models::statement::{SetupStatement, Span, Statement};
use crate::sfc::Document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupScope {
    pub statements: Vec<SetupStatement>,
    /// `[first.start, last.end)` in original order, widened over a comment
    /// that closes the last statement's line.
    pub fix_range: Span,
}

/// Survivors of the program body, or `None` when nothing is applicable.
pub fn extract_setup_statements(
    source: &str,
    body: &[Statement],
    document: &Document,
) -> Option<SetupScope> {
    let applicable = |stmt: &Statement, region: &Span| !stmt.is_import() && region.contains(&stmt.span);
    let setup = document
        .setup_scripts()
        .find(|el| body.iter().any(|s| applicable(s, &el.span)))?;
    let kept: Vec<&Statement> = body
        .iter()
        .filter(|s| applicable(s, &setup.span))
        .collect();
    let (first, last) = (kept.first()?, kept.len() - 1);
    let mut ends: Vec<usize> = kept.iter().map(|s| s.span.end).collect();
    let mut leads: Vec<String> = vec![String::new(); kept.len()];
    for i in 1..kept.len() {
        let gap_start = kept[i - 1].span.end;
        let gap = &source[gap_start..kept[i].span.start];
        let trailing = trailing_len(gap);
        if trailing > 0 {
            ends[i - 1] = gap_start + gap[..trailing].trim_end().len();
        }
        let lead = gap[trailing..].trim_start();
        if !lead.is_empty() {
            leads[i] = collapse_blank_lines(lead);
        }
    }

    // A comment closing the last statement's line stays with it.
    let tail = &source[kept[last].span.end..setup.content.end];
    let trailing = trailing_len(tail);
    if trailing > 0 {
        ends[last] = kept[last].span.end + tail[..trailing].trim_end().len();
    }
    let fix_range = Span::new(first.span.start, ends[last]);

    let statements = kept
        .iter()
        .enumerate()
        .map(|(index, stmt)| SetupStatement {
            shape: stmt.shape.clone(),
            span: stmt.span,
            index,
            text: format!("{}{}", leads[index], &source[stmt.span.start..ends[index]]),
        })
        .collect();
    Some(SetupScope {
        statements,
        fix_range,
    })
}

/// Drops blank lines outside block comments. The last segment is the
/// statement's own line prefix and is always kept.
fn collapse_blank_lines(lead: &str) -> String {
    let mut segments: Vec<&str> = lead.split('\n').collect();
    let own_line = segments.pop().unwrap_or_default();
    let mut kept: Vec<&str> = Vec::with_capacity(segments.len() + 1);
    let mut in_block = false;
    for segment in segments {
        if !in_block && segment.trim().is_empty() {
            continue;
        }
        in_block = ends_inside_block_comment(segment, in_block);
        kept.push(segment);
    }
    kept.push(own_line);
    kept.join("\n")
}

fn ends_inside_block_comment(line: &str, mut in_block: bool) -> bool {
    let mut rest = line;
    loop {
        if in_block {
            match rest.find("*/") {
                Some(p) => {
                    rest = &rest[p + 2..];
                    in_block = false;
                }
                None => return true,
            }
        } else {
            let line_comment = rest.find("//");
            match rest.find("/*") {
                Some(p) if line_comment.map_or(true, |l| p < l) => {
                    rest = &rest[p + 2..];
                    in_block = true;
                }
                _ => return false,
            }
        }
    }
}

/// Length of the comments that follow a statement on its own line.
fn trailing_len(gap: &str) -> usize {
    let bytes = gap.as_bytes();
    let mut i = 0;
    let mut end = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => break,
            b' ' | b'\t' | b'\r' => i += 1,
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                end = gap[i..].find('\n').map_or(gap.len(), |p| i + p);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                end = gap[i + 2..].find("*/").map_or(gap.len(), |p| i + 2 + p + 2);
                i = end;
            }
            _ => break,
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_setup_scripts;

    fn scope_of(src: &str) -> Option<SetupScope> {
        let doc = Document::parse(src).unwrap();
        let body = parse_setup_scripts(src, &doc).unwrap();
        extract_setup_statements(src, &body, &doc)
    }

    fn texts(scope: &SetupScope) -> Vec<&str> {
        scope.statements.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_imports_and_plain_scripts_are_excluded() {
        let src = "<script>\nconst blah = () => {}\n</script>\n<script setup>\nimport { ref } from \"vue\";\nconst a = 1;\nconst b = ref(2);\n</script>\n";
        let scope = scope_of(src).unwrap();
        assert_eq!(texts(&scope), vec!["const a = 1;", "const b = ref(2);"]);
        assert_eq!(
            &src[scope.fix_range.start..scope.fix_range.end],
            "const a = 1;\nconst b = ref(2);"
        );
        assert_eq!(scope.statements[0].index, 0);
        assert_eq!(scope.statements[1].index, 1);
    }

    #[test]
    fn test_not_applicable_without_setup_statements() {
        assert!(scope_of("<script>\nconst a = 1;\n</script>").is_none());
        assert!(scope_of("<script setup>\nimport a from \"a\";\n</script>").is_none());
        assert!(scope_of("<template><div/></template>").is_none());
    }

    #[test]
    fn test_comments_attach_to_statements() {
        let src = "<script setup>\nconst a = 1; // first\n/* about b\n   more */\nconst b = 2;\n</script>";
        let scope = scope_of(src).unwrap();
        assert_eq!(
            texts(&scope),
            vec!["const a = 1; // first", "/* about b\n   more */\nconst b = 2;"]
        );
    }

    #[test]
    fn test_block_comment_spanning_lines_trails_whole() {
        let src = "<script setup>\nconst a = 1; /* x\ny */\nconst b = 2;\n</script>";
        let scope = scope_of(src).unwrap();
        assert_eq!(texts(&scope), vec!["const a = 1; /* x\ny */", "const b = 2;"]);
    }

    #[test]
    fn test_leading_comment_loses_blank_lines() {
        let src = "<script setup>\nconst a = 1;\n// header\n\n\nconst b = 2;\n</script>";
        let scope = scope_of(src).unwrap();
        assert_eq!(texts(&scope), vec!["const a = 1;", "// header\nconst b = 2;"]);
    }

    #[test]
    fn test_blank_lines_inside_block_comment_are_kept() {
        let src = "<script setup>\nconst a = 1;\n/* one\n\n   two */\n\nconst b = 2;\n</script>";
        let scope = scope_of(src).unwrap();
        assert_eq!(texts(&scope)[1], "/* one\n\n   two */\nconst b = 2;");
    }

    #[test]
    fn test_trailing_comment_of_last_statement_is_in_range() {
        let src = "<script setup>\nconst a = 1;\nconst p = defineProps(); // props\n</script>";
        let scope = scope_of(src).unwrap();
        assert_eq!(texts(&scope)[1], "const p = defineProps(); // props");
        assert_eq!(
            &src[scope.fix_range.start..scope.fix_range.end],
            "const a = 1;\nconst p = defineProps(); // props"
        );
    }

    #[test]
    fn test_trailing_comment_stops_at_element_end() {
        let src = "<script setup>\nconst a = 1; // last</script>";
        let scope = scope_of(src).unwrap();
        assert_eq!(texts(&scope), vec!["const a = 1; // last"]);
        assert_eq!(scope.fix_range.end, src.find("</script>").unwrap());
    }

    #[test]
    fn test_only_first_setup_element_is_used() {
        let src = "<script setup>\nconst a = 1;\n</script>\n<script setup>\nconst b = 2;\n</script>";
        let scope = scope_of(src).unwrap();
        assert_eq!(texts(&scope), vec!["const a = 1;"]);
    }
}
