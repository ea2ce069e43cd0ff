//! Depth-first traversal with an ancestor stack.
//!
//! The stack is a contiguous buffer from the root down to the current node,
//! current node last. Every node gets a `Push` event before its children
//! and a `Pop` event after them.

use crate::domain::ast::{NodeId, SyntaxTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Push,
    Pop,
}

enum Step {
    Enter(NodeId),
    Leave(NodeId),
}

/// Walks `tree` in preorder, calling `visit(node, event, stack)`.
///
/// Returning `Ok(false)` on `Push` skips the node's children and its `Pop`.
/// The first error stops the walk and is returned.
pub fn walk_with_stack<E, F>(tree: &SyntaxTree, mut visit: F) -> Result<(), E>
where
    F: FnMut(NodeId, Event, &[NodeId]) -> Result<bool, E>,
{
    let mut stack: Vec<NodeId> = Vec::new();
    let mut work = vec![Step::Enter(tree.root())];

    while let Some(step) = work.pop() {
        match step {
            Step::Enter(id) => {
                stack.push(id);
                if visit(id, Event::Push, &stack)? {
                    work.push(Step::Leave(id));
                    // Reversed so the first child is popped first.
                    work.extend(tree.kind(id).children().into_iter().rev().map(Step::Enter));
                } else {
                    stack.pop();
                }
            }
            Step::Leave(id) => {
                visit(id, Event::Pop, &stack)?;
                stack.pop();
            }
        }
    }

    Ok(())
}
