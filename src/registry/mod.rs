//! The ownership registry: a binary search tree of owners keyed by
//! case-insensitive name.
//!
//! Ordering is deliberately two-armed: a strictly greater node name
//! sends the probe left, anything else (including an equal name) goes
//! right. Insertion and the deletion search share this rule, so a node
//! reachable by its insertion path is always reachable when deleting.

mod node;
mod traversal;

pub use node::{AddOutcome, EvolveOutcome, OwnerNode};

use tracing::debug;

/// Case-folded form of an owner or item name, used for every comparison
/// in the registry.
pub(crate) fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Binary search tree of [`OwnerNode`]s. Owns the root exclusively; all
/// mutation goes through `insert`, `remove` and `reorder_by_size`.
#[derive(Debug, Default)]
pub struct Registry {
    root: Option<Box<OwnerNode>>,
}

impl Registry {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        self.for_each_preorder(|_| count += 1);
        count
    }

    /// Attach a new owner. Always succeeds structurally; duplicate-name
    /// policy is the caller's (check `find` first to keep names unique).
    pub fn insert(&mut self, node: Box<OwnerNode>) {
        debug!(owner = %node.name, "inserting owner");
        insert_into(&mut self.root, node);
    }

    /// Look up an owner by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&OwnerNode> {
        find_in(self.root.as_deref(), &name_key(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut OwnerNode> {
        find_in_mut(self.root.as_deref_mut(), &name_key(name))
    }

    /// Remove an owner by name. Returns false, leaving the tree
    /// untouched, when no owner matches.
    pub fn remove(&mut self, name: &str) -> bool {
        let (root, removed) = remove_in(self.root.take(), &name_key(name));
        self.root = root;
        if removed {
            debug!(owner = %name, "removed owner");
        }
        removed
    }

    /// Flatten the tree, stable-sort by (Pokédex size, name) ascending,
    /// and rebuild by inserting in that order. Returns the sorted
    /// `(name, item count)` report; empty when the registry is empty.
    ///
    /// The rebuilt tree is shaped by insertion order, not balanced: this
    /// re-ranks owners for display, it does not optimize search.
    pub fn reorder_by_size(&mut self) -> Vec<(String, usize)> {
        let mut flat: Vec<Box<OwnerNode>> = Vec::new();
        collect_owners(self.root.take(), &mut flat);
        flat.sort_by_key(|o| (o.pokedex.len(), name_key(&o.name)));

        let report = flat
            .iter()
            .map(|o| (o.name.clone(), o.pokedex.len()))
            .collect();

        let mut sorted = flat.into_iter();
        self.root = sorted.next();
        for owner in sorted {
            self.insert(owner);
        }
        debug!(owners = self.len(), "rebuilt registry by collection size");
        report
    }
}

fn insert_into(link: &mut Option<Box<OwnerNode>>, node: Box<OwnerNode>) {
    match link {
        None => *link = Some(node),
        Some(cur) => {
            if name_key(&cur.name) > name_key(&node.name) {
                insert_into(&mut cur.left, node);
            } else {
                insert_into(&mut cur.right, node);
            }
        }
    }
}

fn find_in<'a>(link: Option<&'a OwnerNode>, key: &str) -> Option<&'a OwnerNode> {
    let node = link?;
    let node_key = name_key(&node.name);
    if node_key == key {
        Some(node)
    } else if node_key.as_str() > key {
        find_in(node.left.as_deref(), key)
    } else {
        find_in(node.right.as_deref(), key)
    }
}

fn find_in_mut<'a>(link: Option<&'a mut OwnerNode>, key: &str) -> Option<&'a mut OwnerNode> {
    let node = link?;
    let node_key = name_key(&node.name);
    if node_key == key {
        Some(node)
    } else if node_key.as_str() > key {
        find_in_mut(node.left.as_deref_mut(), key)
    } else {
        find_in_mut(node.right.as_deref_mut(), key)
    }
}

fn remove_in(link: Option<Box<OwnerNode>>, key: &str) -> (Option<Box<OwnerNode>>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };
    let node_key = name_key(&node.name);
    if node_key.as_str() > key {
        let (left, removed) = remove_in(node.left.take(), key);
        node.left = left;
        (Some(node), removed)
    } else if node_key.as_str() < key {
        let (right, removed) = remove_in(node.right.take(), key);
        node.right = right;
        (Some(node), removed)
    } else {
        (remove_node(node), true)
    }
}

/// Structural removal of a matched node. Zero or one child: the survivor
/// replaces the node. Two children: the in-order successor's name and
/// Pokédex overwrite the node in place and the successor is detached.
fn remove_node(mut node: Box<OwnerNode>) -> Option<Box<OwnerNode>> {
    match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (left, Some(right)) => {
            let (successor, remainder) = detach_min(right);
            node.name = successor.name;
            node.pokedex = successor.pokedex;
            node.left = left;
            node.right = remainder;
            Some(node)
        }
    }
}

/// Detach the leftmost node of a subtree, returning it together with
/// what is left of the subtree.
fn detach_min(mut node: Box<OwnerNode>) -> (Box<OwnerNode>, Option<Box<OwnerNode>>) {
    match node.left.take() {
        None => {
            let remainder = node.right.take();
            (node, remainder)
        }
        Some(left) => {
            let (min, remainder) = detach_min(left);
            node.left = remainder;
            (min, Some(node))
        }
    }
}

/// Move every owner into `out` in preorder, shedding child links as we
/// go. The old tree shape is abandoned.
fn collect_owners(link: Option<Box<OwnerNode>>, out: &mut Vec<Box<OwnerNode>>) {
    let Some(mut node) = link else {
        return;
    };
    let left = node.left.take();
    let right = node.right.take();
    out.push(node);
    collect_owners(left, out);
    collect_owners(right, out);
}
