//! # Inheritance Cycle Detector
//!
//! Builds the category-parent graph over the merged view and reports every
//! inheritance cycle with its exact path.
//!
//! The parent relation has out-degree at most one, so detection is an
//! iterative chain walk with three-color marking: unvisited, in-progress,
//! done. Hitting an in-progress node closes a cycle, and the suffix of the
//! current chain from that node is the exact cycle path. No recursion, so
//! arbitrarily deep hierarchies cannot overflow the stack.
//!
//! The graph is rebuilt from scratch every run: a draft can add or remove
//! canonical edges, so nothing is cacheable across runs. Start nodes are
//! iterated in lexicographic order, which fixes both the finding order and
//! the node each cycle path is rendered from.

use std::collections::BTreeMap;

use odg_core::{EntityKind, Finding, FindingCode};

use crate::lookup::EntityLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Detect inheritance cycles in the merged category graph.
///
/// Emits one `CIRCULAR_INHERITANCE` error per distinct node on a cycle.
/// Every finding for the same cycle carries the same path message, rendered
/// `"A -> B -> ... -> A"` from the node where the walk entered the cycle.
/// A self-parent is a valid 1-edge cycle (`"A -> A"`).
pub fn check_inheritance(lookup: &EntityLookup) -> Vec<Finding> {
    // child -> effective parent, restricted to edges whose target is also a
    // node of the merged graph. Entities absent from both draft and
    // canonical are not nodes, so an edge to a missing parent simply does
    // not exist here (the reference checker owns that failure).
    let mut parent_of: BTreeMap<&str, Option<&str>> = BTreeMap::new();
    for id in lookup.merged_category_ids() {
        let parent = lookup
            .effective(EntityKind::Category, id)
            .and_then(|def| def.as_category())
            .and_then(|category| category.parent.as_deref())
            .filter(|parent| lookup.exists(EntityKind::Category, parent));
        parent_of.insert(id, parent);
    }

    let mut color: BTreeMap<&str, Color> = parent_of
        .keys()
        .map(|&id| (id, Color::Unvisited))
        .collect();
    let mut findings = Vec::new();

    for &start in parent_of.keys() {
        if color.get(start).copied() != Some(Color::Unvisited) {
            continue;
        }

        // Walk the parent chain from `start`, recording it for path
        // recovery. In-progress nodes are exactly the current chain.
        let mut chain: Vec<&str> = Vec::new();
        let mut current = start;
        loop {
            color.insert(current, Color::InProgress);
            chain.push(current);

            let Some(parent) = parent_of.get(current).copied().flatten() else {
                break; // root of the hierarchy
            };
            match color.get(parent).copied().unwrap_or(Color::Done) {
                Color::Unvisited => current = parent,
                Color::Done => break, // joins an already-settled subtree
                Color::InProgress => {
                    let Some(entry) = chain.iter().position(|&node| node == parent) else {
                        break;
                    };
                    let cycle = &chain[entry..];
                    let path = render_path(cycle);
                    for &node in cycle {
                        findings.push(
                            Finding::error(
                                EntityKind::Category,
                                node,
                                FindingCode::CircularInheritance,
                                format!("inheritance cycle detected: {path}"),
                            )
                            .with_field("parent"),
                        );
                    }
                    break;
                }
            }
        }

        for node in chain {
            color.insert(node, Color::Done);
        }
    }

    findings
}

/// Render a cycle as `"A -> B -> ... -> A"`, closing back on the entry node.
fn render_path(cycle: &[&str]) -> String {
    let mut parts: Vec<&str> = cycle.to_vec();
    if let Some(&first) = cycle.first() {
        parts.push(first);
    }
    parts.join(" -> ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use odg_core::{CategoryDef, DraftEntity, DraftPayload, InMemorySnapshot};
    use proptest::prelude::*;

    proptest! {
        /// Forests (every parent index strictly above the child) can never
        /// produce a cycle finding.
        #[test]
        fn forests_are_always_clean(parents in prop::collection::vec(0usize..50, 1..50)) {
            let count = parents.len();
            let draft = DraftPayload {
                categories: parents
                    .iter()
                    .enumerate()
                    .map(|(i, &offset)| {
                        // Parent strictly later in the index order, or none
                        // past the end: the graph is a forest by construction.
                        let parent_index = i + 1 + offset;
                        let parent = (parent_index < count)
                            .then(|| format!("cat_{parent_index:03}"));
                        DraftEntity::upsert(
                            format!("cat_{i:03}"),
                            CategoryDef { parent, ..Default::default() },
                        )
                    })
                    .collect(),
                ..Default::default()
            };

            let lookup = EntityLookup::build(&draft, &InMemorySnapshot::new()).unwrap();
            prop_assert!(check_inheritance(&lookup).is_empty());
        }

        /// Detection is deterministic: same inputs, same findings.
        #[test]
        fn detection_is_deterministic(parents in prop::collection::vec(0usize..20, 1..20)) {
            let count = parents.len();
            let draft = DraftPayload {
                categories: parents
                    .iter()
                    .enumerate()
                    .map(|(i, &target)| {
                        // Arbitrary edges, cycles allowed.
                        let parent = (target < count && target != i)
                            .then(|| format!("cat_{target:03}"));
                        DraftEntity::upsert(
                            format!("cat_{i:03}"),
                            CategoryDef { parent, ..Default::default() },
                        )
                    })
                    .collect(),
                ..Default::default()
            };

            let lookup = EntityLookup::build(&draft, &InMemorySnapshot::new()).unwrap();
            let first = check_inheritance(&lookup);
            let second = check_inheritance(&lookup);
            prop_assert_eq!(first, second);
        }
    }
}
