//! Single-file component document structure.
//!
//! Scans the top-level elements of a `.vue` file (`<template>`, `<script>`,
//! `<style>`, custom blocks) and records their byte ranges and attributes.
//! `<script>` and `<style>` bodies are raw text; other elements are matched
//! against their closing tag with nesting.

use crate::error::ParseError;
use crate::models::statement::Span;
use regex::Regex;
use std::sync::LazyLock;

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#).unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, lowercased.
    pub name: String,
    /// From `<` of the start tag to `>` of the end tag.
    pub span: Span,
    /// Between the start tag and the end tag.
    pub content: Span,
    pub attributes: Vec<Attribute>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn is_script(&self) -> bool {
        self.name == "script"
    }

    /// `<script setup>`, attribute name compared case-insensitively.
    pub fn is_setup_script(&self) -> bool {
        self.is_script() && self.has_attribute("setup")
    }

    /// Value of `lang`, lowercased, when present.
    pub fn lang(&self) -> Option<String> {
        self.attribute("lang")
            .and_then(|a| a.value.as_ref())
            .map(|v| v.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Element>,
}

impl Document {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        // ASCII lowercasing keeps byte offsets intact.
        let lower = source.to_ascii_lowercase();
        let mut children = Vec::new();
        let mut pos = 0usize;
        while let Some(rel) = lower[pos..].find('<') {
            let at = pos + rel;
            let rest = &lower[at..];
            if rest.starts_with("<!--") {
                match rest.find("-->") {
                    Some(end) => pos = at + end + 3,
                    None => break,
                }
                continue;
            }
            let name_len = tag_name_len(&rest[1..]);
            if name_len == 0 {
                // `</...>`, `<!doctype>` or a stray `<`
                pos = at + 1;
                continue;
            }
            let name = rest[1..1 + name_len].to_string();
            let attrs_start = at + 1 + name_len;
            let Some(open_end) = find_tag_end(source, attrs_start) else {
                return Err(ParseError::UnterminatedElement { tag: name, offset: at });
            };
            let self_closing = source[..open_end - 1].ends_with('/');
            let attrs_end = if self_closing { open_end - 2 } else { open_end - 1 };
            let attributes = parse_attributes(&source[attrs_start..attrs_end.max(attrs_start)]);

            let (content_end, close_end) = if self_closing {
                (open_end, open_end)
            } else if name == "script" || name == "style" {
                raw_close(&lower, &name, open_end)
                    .ok_or(ParseError::UnterminatedElement { tag: name.clone(), offset: at })?
            } else {
                nested_close(source, &lower, &name, open_end)
                    .ok_or(ParseError::UnterminatedElement { tag: name.clone(), offset: at })?
            };
            children.push(Element {
                name,
                span: Span::new(at, close_end),
                content: Span::new(open_end, content_end),
                attributes,
            });
            pos = close_end;
        }
        Ok(Self { children })
    }

    pub fn setup_scripts(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(|e| e.is_setup_script())
    }
}

fn tag_name_len(s: &str) -> usize {
    if !s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return 0;
    }
    s.find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(s.len())
}

/// Index just past the `>` closing a start tag, skipping quoted values.
fn find_tag_end(source: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, ch) in source[from..].char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '>' => return Some(from + i + 1),
            None => {}
        }
    }
    None
}

fn parse_attributes(raw: &str) -> Vec<Attribute> {
    ATTRIBUTE
        .captures_iter(raw)
        .map(|cap| Attribute {
            name: cap[1].to_string(),
            value: cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map(|m| m.as_str().to_string()),
        })
        .collect()
}

/// `(content_end, element_end)` for a raw-text element.
fn raw_close(lower: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let needle = format!("</{name}");
    let close = from + lower[from..].find(&needle)?;
    let end = close + lower[close..].find('>')? + 1;
    Some((close, end))
}

/// `(content_end, element_end)` for an element that may nest itself.
fn nested_close(source: &str, lower: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let open = format!("<{name}");
    let close = format!("</{name}");
    let mut depth = 1usize;
    let mut pos = from;
    loop {
        let rel = lower[pos..].find('<')?;
        let at = pos + rel;
        let rest = &lower[at..];
        if rest.starts_with(&close) && is_name_boundary(rest[close.len()..].chars().next()) {
            let end = at + rest.find('>')? + 1;
            depth -= 1;
            if depth == 0 {
                return Some((at, end));
            }
            pos = end;
        } else if rest.starts_with(&open) && is_name_boundary(rest[open.len()..].chars().next()) {
            let end = find_tag_end(source, at + open.len())?;
            if !source[..end - 1].ends_with('/') {
                depth += 1;
            }
            pos = end;
        } else {
            pos = at + 1;
        }
    }
}

fn is_name_boundary(next: Option<char>) -> bool {
    matches!(next, Some(c) if c.is_whitespace() || c == '>' || c == '/')
}
