//! Read-only traversals over the registry tree. The three depth-first
//! orders recurse; level order uses an explicit queue so call-stack
//! depth never tracks tree depth.

use std::collections::VecDeque;

use super::{OwnerNode, Registry};

impl Registry {
    /// Visit self, then the left subtree, then the right subtree.
    pub fn for_each_preorder<F: FnMut(&OwnerNode)>(&self, mut visit: F) {
        preorder(self.root.as_deref(), &mut visit);
    }

    /// Visit the left subtree, then self, then the right subtree.
    /// Yields owners in ascending case-insensitive name order.
    pub fn for_each_inorder<F: FnMut(&OwnerNode)>(&self, mut visit: F) {
        inorder(self.root.as_deref(), &mut visit);
    }

    /// Visit the left subtree, then the right subtree, then self.
    pub fn for_each_postorder<F: FnMut(&OwnerNode)>(&self, mut visit: F) {
        postorder(self.root.as_deref(), &mut visit);
    }

    /// Visit level by level, left to right within a level.
    pub fn for_each_level_order<F: FnMut(&OwnerNode)>(&self, mut visit: F) {
        let mut queue: VecDeque<&OwnerNode> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            visit(node);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
    }
}

fn preorder<'a>(link: Option<&'a OwnerNode>, visit: &mut impl FnMut(&'a OwnerNode)) {
    if let Some(node) = link {
        visit(node);
        preorder(node.left.as_deref(), visit);
        preorder(node.right.as_deref(), visit);
    }
}

fn inorder<'a>(link: Option<&'a OwnerNode>, visit: &mut impl FnMut(&'a OwnerNode)) {
    if let Some(node) = link {
        inorder(node.left.as_deref(), visit);
        visit(node);
        inorder(node.right.as_deref(), visit);
    }
}

fn postorder<'a>(link: Option<&'a OwnerNode>, visit: &mut impl FnMut(&'a OwnerNode)) {
    if let Some(node) = link {
        postorder(node.left.as_deref(), visit);
        postorder(node.right.as_deref(), visit);
        visit(node);
    }
}
