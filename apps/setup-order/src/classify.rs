//! Section classifier.
//!
//! Rules live in an ordered table; the first rule whose predicate matches a
//! statement's shape decides its section and, for lifecycle hooks, its
//! sub-priority. The last rule always matches, so every statement gets
//! exactly one section.

use crate::models::options::OrderOptions;
use crate::models::statement::{ClassifiedStatement, SetupStatement, StatementShape};
use crate::sections;

enum SectionOf {
    Fixed(&'static str),
    /// The macro's own label from `sections::MACROS`.
    Macro,
}

enum PriorityOf {
    None,
    Hook,
}

struct ClassRule {
    matches: fn(&StatementShape, &OrderOptions) -> bool,
    section: SectionOf,
    priority: PriorityOf,
}

const RULES: &[ClassRule] = &[
    ClassRule {
        matches: is_macro_call,
        section: SectionOf::Macro,
        priority: PriorityOf::None,
    },
    ClassRule {
        matches: is_hook_call,
        section: SectionOf::Fixed(sections::LIFECYCLE),
        priority: PriorityOf::Hook,
    },
    ClassRule {
        matches: is_function,
        section: SectionOf::Fixed(sections::FUNCTIONS),
        priority: PriorityOf::None,
    },
    ClassRule {
        matches: is_reactive_declaration,
        section: SectionOf::Fixed(sections::REACTIVE_VARS),
        priority: PriorityOf::None,
    },
    ClassRule {
        matches: always,
        section: SectionOf::Fixed(sections::PLAIN_VARS),
        priority: PriorityOf::None,
    },
];

fn callee(shape: &StatementShape) -> Option<&str> {
    match shape {
        StatementShape::Call { callee, .. } => Some(callee.as_str()),
        _ => None,
    }
}

fn macro_label(name: &str) -> Option<&'static str> {
    sections::MACROS
        .iter()
        .find(|(m, _)| *m == name)
        .map(|(_, label)| *label)
}

fn is_macro_call(shape: &StatementShape, _: &OrderOptions) -> bool {
    callee(shape).and_then(macro_label).is_some()
}

fn is_hook_call(shape: &StatementShape, options: &OrderOptions) -> bool {
    callee(shape).is_some_and(|name| options.is_lifecycle_hook(name))
}

fn always(_: &StatementShape, _: &OrderOptions) -> bool {
    true
}

fn is_function(shape: &StatementShape, _: &OrderOptions) -> bool {
    matches!(shape, StatementShape::Function)
}

fn is_reactive_declaration(shape: &StatementShape, _: &OrderOptions) -> bool {
    match shape {
        StatementShape::Call {
            callee,
            declared: true,
        } => sections::REACTIVE_CONSTRUCTORS.contains(&callee.as_str()),
        _ => false,
    }
}

/// Section label and optional sub-priority for one statement shape.
pub fn classify(shape: &StatementShape, options: &OrderOptions) -> (String, Option<i64>) {
    for rule in RULES {
        if !(rule.matches)(shape, options) {
            continue;
        }
        let section = match rule.section {
            SectionOf::Fixed(label) => label,
            SectionOf::Macro => callee(shape)
                .and_then(macro_label)
                .unwrap_or(sections::PLAIN_VARS),
        };
        let priority = match rule.priority {
            PriorityOf::None => None,
            PriorityOf::Hook => callee(shape).map(|name| options.hook_priority(name)),
        };
        return (section.to_string(), priority);
    }
    (sections::PLAIN_VARS.to_string(), None)
}

/// Classify every setup statement, keeping input order.
pub fn classify_all<'a>(
    nodes: &'a [SetupStatement],
    options: &OrderOptions,
) -> Vec<ClassifiedStatement<'a>> {
    nodes
        .iter()
        .map(|node| {
            let (section, sub_priority) = classify(&node.shape, options);
            ClassifiedStatement {
                node,
                section,
                sub_priority,
                original_index: node.index,
            }
        })
        .collect()
}
