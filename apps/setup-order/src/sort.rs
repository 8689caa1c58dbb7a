//! Order comparator, stable sort and grouping of classified statements.

use crate::models::options::OrderOptions;
use crate::models::statement::{ClassifiedStatement, Group};
use std::cmp::Ordering;

/// Compare two classified statements.
///
/// Keys, in order: section rank (unlisted sections last), sub-priority when
/// both sides carry one, original index.
pub fn compare(
    a: &ClassifiedStatement<'_>,
    b: &ClassifiedStatement<'_>,
    options: &OrderOptions,
) -> Ordering {
    let by_section = options
        .section_rank(&a.section)
        .cmp(&options.section_rank(&b.section))
        // Two distinct unlisted sections share a rank; keep them apart.
        .then_with(|| {
            if a.section == b.section {
                Ordering::Equal
            } else {
                a.section.cmp(&b.section)
            }
        });
    let by_priority = match (a.sub_priority, b.sub_priority) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        _ => Ordering::Equal,
    };
    by_section
        .then(by_priority)
        .then(a.original_index.cmp(&b.original_index))
}

/// Stable sort with [`compare`].
pub fn sort_nodes<'a>(
    mut nodes: Vec<ClassifiedStatement<'a>>,
    options: &OrderOptions,
) -> Vec<ClassifiedStatement<'a>> {
    nodes.sort_by(|a, b| compare(a, b, options));
    nodes
}

/// Split a sorted sequence into runs sharing one section.
pub fn group_nodes(sorted: Vec<ClassifiedStatement<'_>>) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    for node in sorted {
        match groups.last_mut() {
            Some(g) if g.section == node.section => g.members.push(node),
            _ => groups.push(Group {
                section: node.section.clone(),
                members: vec![node],
            }),
        }
    }
    groups
}
