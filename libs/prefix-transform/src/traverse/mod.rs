//! # Traversal
//!
//! Depth-first walk with enter/exit callbacks.
//!
//! For every node `n` with parent `p`, the walk calls `enter(n, p)`, then
//! walks each child of `n` in order with `n` as parent, then calls
//! `exit(n, p)`. `p` is `None` only for the root.
//!
//! ## Example
//!
//! ```rust
//! use prefix_ast::source::Node;
//! use prefix_transform::{traverse, EventLog};
//!
//! let tree = Node::program(vec![Node::number("1")]);
//! let mut log = EventLog::default();
//! traverse(&tree, &mut log).unwrap();
//! assert_eq!(
//!     log.to_string(),
//!     "enter Program\nenter NumberLiteral\nexit NumberLiteral\nexit Program"
//! );
//! ```

mod event_log;
mod nodes;
mod source_visitor;

pub use event_log::{EventLog, Phase, TraversalEvent};
pub use source_visitor::{traverse_source, SourceVisitor};

use crate::error::TraverseError;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use std::ops::Deref;

// =============================================================================
// TRAVERSABLE
// =============================================================================

/// A tree the traverser can walk.
///
/// Implementors supply the per-kind child-enumeration rule and nothing else.
pub trait Traversable: Sized {
    /// Name of this node's kind, for diagnostics.
    fn kind_name(&self) -> &str;

    /// Children in visiting order.
    ///
    /// Fails with [`TraverseError::UnknownNodeKind`] when the kind has no
    /// child rule.
    fn children(&self) -> Result<&[Self], TraverseError>;
}

// =============================================================================
// NODE IDENTITY
// =============================================================================

/// Pre-order index of a node within one traversal. The root is `NodeId(0)`.
///
/// Stable for the duration of a single `traverse` call, so visitors can key
/// side tables on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Identity of the traversal root.
    pub const ROOT: NodeId = NodeId(0);
}

/// A node together with its identity in the current traversal.
pub struct NodeRef<'a, N> {
    node: &'a N,
    id: NodeId,
}

impl<'a, N> NodeRef<'a, N> {
    /// The node itself.
    pub fn node(&self) -> &'a N {
        self.node
    }

    /// Identity of the node in this traversal.
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl<N> Clone for NodeRef<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for NodeRef<'_, N> {}

impl<N> Deref for NodeRef<'_, N> {
    type Target = N;

    fn deref(&self) -> &N {
        self.node
    }
}

// =============================================================================
// VISITOR
// =============================================================================

/// Callbacks invoked by [`traverse`]. Both default to doing nothing.
pub trait Visitor<N> {
    /// Called before any child of `node` is visited.
    fn enter(
        &mut self,
        _node: NodeRef<'_, N>,
        _parent: Option<NodeRef<'_, N>>,
    ) -> Result<(), TraverseError> {
        Ok(())
    }

    /// Called after every child of `node` has been visited.
    fn exit(
        &mut self,
        _node: NodeRef<'_, N>,
        _parent: Option<NodeRef<'_, N>>,
    ) -> Result<(), TraverseError> {
        Ok(())
    }
}

/// Walk `root` depth-first, calling `visitor` at entry and exit of every node.
///
/// Stops at the first error, whether raised by a child rule or by the
/// visitor.
pub fn traverse<N, V>(root: &N, visitor: &mut V) -> Result<(), TraverseError>
where
    N: Traversable,
    V: Visitor<N> + ?Sized,
{
    let mut walker = Walker {
        visitor,
        next_id: 0,
    };
    walker.visit(root, None)
}

struct Walker<'v, V: ?Sized> {
    visitor: &'v mut V,
    next_id: usize,
}

impl<V: ?Sized> Walker<'_, V> {
    fn visit<'n, N>(
        &mut self,
        node: &'n N,
        parent: Option<NodeRef<'n, N>>,
    ) -> Result<(), TraverseError>
    where
        N: Traversable,
        V: Visitor<N>,
    {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let current = NodeRef {
                node,
                id: NodeId(self.next_id),
            };
            self.next_id += 1;

            self.visitor.enter(current, parent)?;
            for child in node.children()? {
                self.visit(child, Some(current))?;
            }
            self.visitor.exit(current, parent)
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use prefix_ast::source::Node;

    #[derive(Default)]
    struct ParentIds(Vec<(NodeId, Option<NodeId>)>);

    impl Visitor<Node> for ParentIds {
        fn enter(
            &mut self,
            node: NodeRef<'_, Node>,
            parent: Option<NodeRef<'_, Node>>,
        ) -> Result<(), TraverseError> {
            self.0.push((node.id(), parent.map(|p| p.id())));
            Ok(())
        }
    }

    #[test]
    fn test_ids_are_preorder() {
        let tree = Node::program(vec![
            Node::call("a", vec![Node::number("1")]),
            Node::number("2"),
        ]);
        let mut seen = ParentIds::default();
        traverse(&tree, &mut seen).unwrap();
        assert_eq!(
            seen.0,
            vec![
                (NodeId(0), None),
                (NodeId(1), Some(NodeId(0))),
                (NodeId(2), Some(NodeId(1))),
                (NodeId(3), Some(NodeId(0))),
            ]
        );
    }

    struct FailOnString;

    impl Visitor<Node> for FailOnString {
        fn enter(
            &mut self,
            node: NodeRef<'_, Node>,
            _parent: Option<NodeRef<'_, Node>>,
        ) -> Result<(), TraverseError> {
            match &*node {
                Node::StringLiteral { .. } => Err(TraverseError::DetachedNode { kind: node.kind() }),
                _ => Ok(()),
            }
        }
    }

    #[test]
    fn test_visitor_error_stops_walk() {
        let tree = Node::program(vec![Node::string("x"), Node::number("1")]);
        let err = traverse(&tree, &mut FailOnString).unwrap_err();
        assert!(matches!(err, TraverseError::DetachedNode { .. }));
    }

    #[test]
    fn test_default_visitor_walks_everything() {
        struct Nothing;
        impl Visitor<Node> for Nothing {}
        let tree = Node::program(vec![Node::call("f", vec![Node::string("s")])]);
        assert!(traverse(&tree, &mut Nothing).is_ok());
    }
}
