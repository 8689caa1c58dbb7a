//! Text regeneration for sorted, grouped statements.
//!
//! Statement text is copied verbatim. Statements of one group are separated
//! by a single line break and groups by exactly one blank line, whatever the
//! original spacing was. Continuation lines get the indentation of the first
//! statement so indented `<script setup>` bodies stay aligned.

use crate::models::statement::Group;

/// Line layout of the region being rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub indent: String,
    pub eol: &'static str,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent: String::new(),
            eol: "\n",
        }
    }
}

impl Layout {
    /// Derive the layout from the whitespace preceding `start` on its line.
    pub fn detect(source: &str, start: usize) -> Self {
        let line_start = source[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let prefix = &source[line_start..start];
        let indent = if prefix.chars().all(|c| c == ' ' || c == '\t') {
            prefix.to_string()
        } else {
            String::new()
        };
        let eol = if source.contains("\r\n") { "\r\n" } else { "\n" };
        Self { indent, eol }
    }
}

pub fn generate_sorted_text(groups: &[Group<'_>], layout: &Layout) -> String {
    let line_sep = format!("{}{}", layout.eol, layout.indent);
    let group_sep = format!("{}{}{}", layout.eol, layout.eol, layout.indent);
    groups
        .iter()
        .map(|g| {
            g.members
                .iter()
                .map(|m| m.node.text.as_str())
                .collect::<Vec<_>>()
                .join(&line_sep)
        })
        .collect::<Vec<_>>()
        .join(&group_sep)
}
