use super::MenuRecord;
use crate::shared::logging::NavEvent;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A menu record with its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuTreeNode {
    #[serde(flatten)]
    pub record: MenuRecord,
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    pub fn id(&self) -> u64 {
        self.record.id
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn path(&self) -> &str {
        &self.record.path
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

pub fn forest_node_count(roots: &[MenuTreeNode]) -> usize {
    roots.iter().map(MenuTreeNode::node_count).sum()
}

/// Depth-first, pre-order walk over a forest.
pub fn walk_forest<'a>(roots: &'a [MenuTreeNode], mut visit: impl FnMut(&'a MenuTreeNode, usize)) {
    let mut stack: Vec<(&MenuTreeNode, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        visit(node, depth);
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeIssue {
    InvalidId { title: String, path: String },
    DuplicateId { id: u64 },
    Orphan { id: u64, parent_id: u64 },
    Cycle { id: u64, parent_id: u64 },
}

impl TreeIssue {
    pub fn to_event(&self) -> NavEvent {
        match self {
            Self::InvalidId { title, path } => NavEvent::warn(
                "menu.invalid_id",
                format!("menu record `{title}` ({path}) has id 0 and was skipped"),
            ),
            Self::DuplicateId { id } => NavEvent::warn(
                "menu.duplicate_id",
                format!("menu id {id} appears more than once; last record wins"),
            ),
            Self::Orphan { id, parent_id } => NavEvent::warn(
                "menu.orphan",
                format!("menu id {id} references missing parent {parent_id}; promoted to root"),
            ),
            Self::Cycle { id, parent_id } => NavEvent::warn(
                "menu.cycle",
                format!("menu id {id} closes a parent cycle through {parent_id}; promoted to root"),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeBuild {
    pub roots: Vec<MenuTreeNode>,
    pub issues: Vec<TreeIssue>,
}

pub fn build_menu_tree(records: &[MenuRecord]) -> Vec<MenuTreeNode> {
    build_menu_tree_with_report(records).roots
}

/// Turns flat records into a forest.
///
/// One node is created per unique non-zero id. Parents may appear after their children.
/// Missing parents and parent cycles re-root the affected node instead of failing, and
/// every such repair is reported in [`TreeBuild::issues`]. Siblings are stable-sorted by
/// `sort_order`; unordered records follow the ordered ones in input order.
pub fn build_menu_tree_with_report(records: &[MenuRecord]) -> TreeBuild {
    let mut issues = Vec::new();
    let mut order: Vec<u64> = Vec::new();
    let mut by_id: HashMap<u64, MenuRecord> = HashMap::new();

    for record in records {
        if record.id == 0 {
            issues.push(TreeIssue::InvalidId {
                title: record.title.clone(),
                path: record.path.clone(),
            });
            continue;
        }
        if by_id.insert(record.id, record.clone()).is_some() {
            issues.push(TreeIssue::DuplicateId { id: record.id });
        } else {
            order.push(record.id);
        }
    }

    let mut parents: HashMap<u64, Option<u64>> = HashMap::with_capacity(order.len());
    for id in &order {
        let record = &by_id[id];
        let parent_id = record.parent_id;
        let parent = if record.is_root_reference() {
            None
        } else if by_id.contains_key(&parent_id) {
            Some(parent_id)
        } else {
            issues.push(TreeIssue::Orphan {
                id: *id,
                parent_id,
            });
            None
        };
        parents.insert(*id, parent);
    }

    break_parent_cycles(&order, &mut parents, &mut issues);

    let mut roots: Vec<u64> = Vec::new();
    let mut children: HashMap<u64, Vec<u64>> = HashMap::new();
    for id in &order {
        match parents[id] {
            Some(parent) => children.entry(parent).or_default().push(*id),
            None => roots.push(*id),
        }
    }

    let sibling_key = |id: &u64| {
        let sort_order = by_id[id].sort_order;
        (sort_order.is_none(), sort_order.unwrap_or(0))
    };
    roots.sort_by_key(sibling_key);
    for siblings in children.values_mut() {
        siblings.sort_by_key(sibling_key);
    }

    TreeBuild {
        roots: materialize(&roots, &children, by_id),
        issues,
    }
}

/// Walks each parent chain once; a link pointing back into the chain being walked is cut
/// and its owner becomes a root.
fn break_parent_cycles(
    order: &[u64],
    parents: &mut HashMap<u64, Option<u64>>,
    issues: &mut Vec<TreeIssue>,
) {
    let mut settled: HashSet<u64> = HashSet::with_capacity(order.len());
    for &start in order {
        let mut chain: Vec<u64> = Vec::new();
        let mut on_chain: HashSet<u64> = HashSet::new();
        let mut current = start;
        loop {
            if settled.contains(&current) {
                break;
            }
            on_chain.insert(current);
            chain.push(current);
            match parents.get(&current).copied().flatten() {
                None => break,
                Some(next) if on_chain.contains(&next) => {
                    issues.push(TreeIssue::Cycle {
                        id: current,
                        parent_id: next,
                    });
                    parents.insert(current, None);
                    break;
                }
                Some(next) => current = next,
            }
        }
        settled.extend(chain);
    }
}

fn materialize(
    roots: &[u64],
    children: &HashMap<u64, Vec<u64>>,
    mut by_id: HashMap<u64, MenuRecord>,
) -> Vec<MenuTreeNode> {
    let mut built: HashMap<u64, MenuTreeNode> = HashMap::with_capacity(by_id.len());
    let mut stack: Vec<(u64, bool)> = roots.iter().rev().map(|id| (*id, false)).collect();
    while let Some((id, expanded)) = stack.pop() {
        let child_ids = children.get(&id).map(Vec::as_slice).unwrap_or(&[]);
        if expanded {
            let Some(record) = by_id.remove(&id) else {
                continue;
            };
            let nodes = child_ids.iter().filter_map(|c| built.remove(c)).collect();
            built.insert(
                id,
                MenuTreeNode {
                    record,
                    children: nodes,
                },
            );
        } else {
            stack.push((id, true));
            stack.extend(child_ids.iter().rev().map(|c| (*c, false)));
        }
    }
    roots.iter().filter_map(|id| built.remove(id)).collect()
}
