//! Traversal and copy-on-write mutation over a course structure tree.
//!
//! Mutating operations return a new `Vec<Arc<Node>>` in which only the
//! nodes on the path to the target are rebuilt; every other subtree is
//! shared with the input tree by reference. Callers holding the previous
//! tree (an undo stack, a concurrently rendered view) are never mutated
//! underneath.

use crate::errors::StoreError;
use crate::model::course::{Node, Subcategory};
use std::sync::Arc;

/// Pre-order, left-to-right depth-first search. Returns the first node
/// whose id matches. Curriculum trees are a handful of levels deep, so a
/// plain recursive descent with early exit is sufficient.
pub fn find_node<'a>(tree: &'a [Arc<Node>], id: &str) -> Option<&'a Arc<Node>> {
    for node in tree {
        if node.id() == id {
            return Some(node);
        }
        if let Node::Subcategory(sub) = node.as_ref() {
            if let Some(found) = find_node(&sub.children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Returns a new tree in which the node with `id` has been replaced by
/// `updater(node)`. Ancestors on the path are rebuilt; subtrees not on the
/// path are reused unchanged.
///
/// Fails with [`StoreError::NotFound`] when no node carries `id`.
pub fn update_node<F>(tree: &[Arc<Node>], id: &str, updater: F) -> Result<Vec<Arc<Node>>, StoreError>
where
    F: FnOnce(&Node) -> Node,
{
    let mut updater = Some(updater);
    let updated = rebuild(tree, id, &mut updater);
    if updater.is_some() {
        return Err(StoreError::NotFound(format!(
            "Node with id {} not found in structure tree.",
            id
        )));
    }
    Ok(updated)
}

fn rebuild<F>(tree: &[Arc<Node>], id: &str, updater: &mut Option<F>) -> Vec<Arc<Node>>
where
    F: FnOnce(&Node) -> Node,
{
    tree.iter()
        .map(|node| {
            // The first match consumes the updater; everything after it is
            // shared as-is.
            if updater.is_none() {
                return Arc::clone(node);
            }
            if node.id() == id {
                if let Some(apply) = updater.take() {
                    return Arc::new(apply(node));
                }
            }
            match node.as_ref() {
                Node::Subcategory(sub) => {
                    let children = rebuild(&sub.children, id, updater);
                    if updater.is_none() {
                        // Match was inside this subtree: rebuild the path.
                        Arc::new(Node::Subcategory(Subcategory {
                            id: sub.id.clone(),
                            title: sub.title.clone(),
                            children,
                        }))
                    } else {
                        Arc::clone(node)
                    }
                }
                Node::Lesson(_) => Arc::clone(node),
            }
        })
        .collect()
}

/// Returns a new tree with `new_node` appended under `parent_id`, or at
/// the root of the tree when `parent_id` is `None`.
///
/// Fails with [`StoreError::NotFound`] when the parent id is absent and
/// with [`StoreError::InvalidParent`] when it resolves to a lesson, since
/// lessons are leaves.
pub fn insert_child(
    tree: &[Arc<Node>],
    parent_id: Option<&str>,
    new_node: Node,
) -> Result<Vec<Arc<Node>>, StoreError> {
    let Some(parent_id) = parent_id else {
        let mut updated: Vec<Arc<Node>> = tree.iter().map(Arc::clone).collect();
        updated.push(Arc::new(new_node));
        return Ok(updated);
    };

    match find_node(tree, parent_id) {
        None => Err(StoreError::NotFound(format!(
            "Parent node with id {} not found in structure tree.",
            parent_id
        ))),
        Some(parent) if parent.is_leaf() => Err(StoreError::InvalidParent(format!(
            "Node with id {} is a lesson and cannot hold children.",
            parent_id
        ))),
        Some(_) => update_node(tree, parent_id, |parent| match parent {
            Node::Subcategory(sub) => {
                let mut updated = sub.clone();
                updated.children.push(Arc::new(new_node));
                Node::Subcategory(updated)
            }
            // Leaf parents were rejected before the rebuild.
            Node::Lesson(lesson) => Node::Lesson(lesson.clone()),
        }),
    }
}
