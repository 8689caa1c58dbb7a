//! The `declaration-order` rule.
//!
//! Runs scope extraction, classification, sorting, grouping and text
//! regeneration for one file. Reports at most one diagnostic, whose fix
//! replaces the whole setup span in a single edit.

use crate::classify::classify_all;
use crate::error::ParseError;
use crate::models::options::OrderOptions;
use crate::models::statement::{Span, Statement};
use crate::regen::{generate_sorted_text, Layout};
use crate::scope::extract_setup_statements;
use crate::script::parse_setup_scripts;
use crate::sfc::Document;
use crate::sort::{group_nodes, sort_nodes};
use crate::utils::line_col;

pub const RULE_ID: &str = "declaration-order";
pub const ERROR_MESSAGE: &str =
    "<script setup> declarations are not correctly sorted, run \"setup-order format --write\" to fix this.";

/// A single range replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub range: Span,
    pub replacement: String,
}

impl Fix {
    pub fn apply(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() + self.replacement.len());
        out.push_str(&source[..self.range.start]);
        out.push_str(&self.replacement);
        out.push_str(&source[self.range.end..]);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub message: &'static str,
    /// Byte offset of the first setup statement.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub fix: Fix,
}

/// Check already-parsed input.
pub fn check_statements(
    source: &str,
    body: &[Statement],
    document: &Document,
    options: &OrderOptions,
) -> Option<Diagnostic> {
    let scope = extract_setup_statements(source, body, document)?;
    let classified = classify_all(&scope.statements, options);
    let groups = group_nodes(sort_nodes(classified, options));
    let layout = Layout::detect(source, scope.fix_range.start);
    let sorted_text = generate_sorted_text(&groups, &layout);
    let original = &source[scope.fix_range.start..scope.fix_range.end];
    if original == sorted_text {
        return None;
    }
    let (line, column) = line_col(source, scope.fix_range.start);
    Some(Diagnostic {
        rule: RULE_ID,
        message: ERROR_MESSAGE,
        offset: scope.fix_range.start,
        line,
        column,
        fix: Fix {
            range: scope.fix_range,
            replacement: sorted_text,
        },
    })
}

/// Parse a component file and check it.
pub fn check_source(source: &str, options: &OrderOptions) -> Result<Option<Diagnostic>, ParseError> {
    let document = Document::parse(source)?;
    let body = parse_setup_scripts(source, &document)?;
    Ok(check_statements(source, &body, &document, options))
}

/// Fixed file contents, or `None` when the file is already ordered.
pub fn fix_source(source: &str, options: &OrderOptions) -> Result<Option<String>, ParseError> {
    Ok(check_source(source, options)?.map(|d| d.fix.apply(source)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const VALID: &str = r#"
<script setup>
const emits = defineEmits();

const hello = "Hello World!";

const count = ref(0);
const msg = ref("");

onBeforeMount(() => {
  console.log("onBeforeMount");
});

const changeMsg = () => {};
function handleClick() {
  emits("click");
}
</script>
"#;

    const INVALID: &str = r#"
<script setup>
const hello = "Hello World!";
const changeMsg = () => {};
const emits = defineEmits();
onBeforeMount(() => {
  console.log("onBeforeMount");
});
function handleClick() {
  emits("click");
}
const count = ref(0);
const msg = ref("");
</script>
"#;

    fn lifecycle_only() -> OrderOptions {
        let mut lc = HashMap::new();
        lc.insert("onMounted".to_string(), 0);
        lc.insert("onBeforeMount".to_string(), 1);
        OrderOptions::new(vec!["lifecycle".into()], lc)
    }

    #[test]
    fn test_sorted_file_reports_nothing() {
        assert_eq!(check_source(VALID, &OrderOptions::default()).unwrap(), None);
    }

    #[test]
    fn test_unsorted_file_is_fixed() {
        let diag = check_source(INVALID, &OrderOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(diag.message, ERROR_MESSAGE);
        assert_eq!((diag.line, diag.column), (3, 1));
        assert_eq!(diag.fix.apply(INVALID), VALID);
    }

    #[test]
    fn test_single_line_input_is_regrouped() {
        let src = "<script setup>\nconst hello = \"Hello World!\"; const changeMsg = () => {}; const emits = defineEmits();\n</script>";
        let diag = check_source(src, &OrderOptions::default()).unwrap().unwrap();
        assert_eq!(
            diag.fix.replacement,
            "const emits = defineEmits();\n\nconst hello = \"Hello World!\";\n\nconst changeMsg = () => {};"
        );
        assert_eq!(diag.fix.range.start, src.find("const hello").unwrap());
        assert_eq!(diag.fix.range.end, src.find("\n</script>").unwrap());
    }

    #[test]
    fn test_custom_lifecycle_order_adds_no_blank_line() {
        let src = "<script setup>\nonBeforeMount(() => {\n  console.log(\"onBeforeMount\");\n});\nonMounted(() => {\n  console.log(\"onMounted\");\n});\n</script>\n";
        let fixed = fix_source(src, &lifecycle_only()).unwrap().unwrap();
        assert_eq!(
            fixed,
            "<script setup>\nonMounted(() => {\n  console.log(\"onMounted\");\n});\nonBeforeMount(() => {\n  console.log(\"onBeforeMount\");\n});\n</script>\n"
        );
        assert_eq!(fix_source(&fixed, &lifecycle_only()).unwrap(), None);
    }

    #[test]
    fn test_custom_section_order() {
        let opts = OrderOptions::new(
            vec!["defineProps".into(), "plainVars".into()],
            HashMap::new(),
        );
        let src = "\n<script setup>\nconst hello = \"Hello World!\";\nconst props = defineProps();\n</script>\n";
        let fixed = fix_source(src, &opts).unwrap().unwrap();
        assert_eq!(
            fixed,
            "\n<script setup>\nconst props = defineProps();\n\nconst hello = \"Hello World!\";\n</script>\n"
        );
    }

    #[test]
    fn test_blank_lines_inside_a_group_are_dropped() {
        let src = "<script setup>\nconst a = 1;\n\n\nconst b = 2;\n</script>";
        let fixed = fix_source(src, &OrderOptions::default()).unwrap().unwrap();
        assert_eq!(fixed, "<script setup>\nconst a = 1;\nconst b = 2;\n</script>");
    }

    #[test]
    fn test_blank_lines_after_a_comment_inside_a_group_are_dropped() {
        let src = "<script setup>\nconst a = 1;\n// header\n\nconst b = 2;\nconst p = defineProps();\n</script>";
        let fixed = fix_source(src, &OrderOptions::default()).unwrap().unwrap();
        assert_eq!(
            fixed,
            "<script setup>\nconst p = defineProps();\n\nconst a = 1;\n// header\nconst b = 2;\n</script>"
        );
        assert_eq!(fix_source(&fixed, &OrderOptions::default()).unwrap(), None);
    }

    #[test]
    fn test_comment_after_last_statement_moves_with_it() {
        let src = "<script setup>\nconst a = 1;\nconst p = defineProps(); // props\n</script>";
        let fixed = fix_source(src, &OrderOptions::default()).unwrap().unwrap();
        assert_eq!(
            fixed,
            "<script setup>\nconst p = defineProps(); // props\n\nconst a = 1;\n</script>"
        );
        assert_eq!(fix_source(&fixed, &OrderOptions::default()).unwrap(), None);
    }

    #[test]
    fn test_broken_plain_script_does_not_block_setup() {
        let src = "<script lang=\"coffee\">\nx = -> 1\n</script>\n<script setup>\nconst a = 1;\nconst p = defineProps();\n</script>";
        let fixed = fix_source(src, &OrderOptions::default()).unwrap().unwrap();
        assert!(fixed.ends_with("<script setup>\nconst p = defineProps();\n\nconst a = 1;\n</script>"));
        assert!(fixed.starts_with("<script lang=\"coffee\">\nx = -> 1\n</script>"));
    }

    #[test]
    fn test_plain_script_is_never_touched() {
        let src = "\n<script>\nconst blah = () => {}\nconst doNotReorderMe = true;\n</script>\n<script setup>\nconst emits = defineEmits();\n\nconst hello = \"Hello World!\";\n\nconst changeMsg = () => {};\n</script>\n";
        assert_eq!(check_source(src, &OrderOptions::default()).unwrap(), None);
    }

    #[test]
    fn test_parse_errors_propagate() {
        assert!(check_source("<script setup>\nconst = ;\n</script>", &OrderOptions::default()).is_err());
        assert!(check_source("<script setup>\nconst a = 1;", &OrderOptions::default()).is_err());
    }
}
