//! # Transformer
//!
//! Rewrites a source tree into a target tree during a single traversal.
//!
//! ## Insertion slots
//!
//! The target tree is built in an arena of *slots*, each an ordered list of
//! pending entries. Slot 0 becomes the target `Program.body`; every source
//! `CallExpression` allocates one slot that becomes its `arguments`. A side
//! table maps each source node's [`NodeId`] to the slot its children append
//! into, so the source tree is never mutated and nothing outlives the run.
//!
//! Every node below the root appends to its parent's slot exactly once. A
//! call binds its own slot before the walk reaches its first child; a nested
//! `Program` has no place in the target tree and is rejected.
//!
//! ```text
//! (add 2 (subtract 4 2))
//!
//! slot 0: [Call add -> slot 1, statement]
//! slot 1: [2, Call subtract -> slot 2]
//! slot 2: [4, 2]
//! ```

use crate::error::TraverseError;
use crate::traverse::{traverse_source, NodeId, NodeRef, SourceVisitor};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use prefix_ast::target::Identifier;
use prefix_ast::{source, target, NodeKind};
use stacker::maybe_grow;
use std::collections::HashMap;

/// Build the target tree for `program`.
///
/// `program` should be a `Program` root as produced by the parser. Only
/// shape violations in the input tree cause an error.
pub fn transform(program: &source::Node) -> Result<target::Node, TraverseError> {
    let mut builder = TargetBuilder::new();
    traverse_source(program, &mut builder)?;
    Ok(builder.finish())
}

// =============================================================================
// SLOT ARENA
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotId(usize);

impl SlotId {
    const PROGRAM_BODY: SlotId = SlotId(0);
}

#[derive(Debug)]
enum Entry {
    /// A finished target node.
    Node(target::Node),
    /// A call whose arguments are still being collected in `arguments`.
    Call {
        callee: Identifier,
        arguments: SlotId,
        statement: bool,
    },
}

struct TargetBuilder {
    slots: Vec<Vec<Entry>>,
    bindings: HashMap<NodeId, SlotId>,
}

impl TargetBuilder {
    fn new() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(NodeId::ROOT, SlotId::PROGRAM_BODY);
        Self {
            slots: vec![Vec::new()],
            bindings,
        }
    }

    fn allocate_slot(&mut self) -> SlotId {
        self.slots.push(Vec::new());
        SlotId(self.slots.len() - 1)
    }

    /// Append `entry` to the slot bound to `parent`.
    fn append(
        &mut self,
        node: NodeRef<'_, source::Node>,
        parent: Option<NodeRef<'_, source::Node>>,
        entry: Entry,
    ) -> Result<(), TraverseError> {
        let slot = parent
            .and_then(|p| self.bindings.get(&p.id()).copied())
            .ok_or(TraverseError::DetachedNode { kind: node.kind() })?;
        self.slots[slot.0].push(entry);
        Ok(())
    }

    fn append_literal(
        &mut self,
        node: NodeRef<'_, source::Node>,
        parent: Option<NodeRef<'_, source::Node>>,
    ) -> Result<(), TraverseError> {
        let literal = match node.node() {
            source::Node::NumberLiteral { value } => target::Node::number(value.clone()),
            source::Node::StringLiteral { value } => target::Node::string(value.clone()),
            _ => return Ok(()),
        };
        self.append(node, parent, Entry::Node(literal))
    }

    /// Turn the arena into the owned target tree.
    fn finish(mut self) -> target::Node {
        let body = self.assemble(SlotId::PROGRAM_BODY);
        target::Node::program(body)
    }

    fn assemble(&mut self, slot: SlotId) -> Vec<target::Node> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let entries = std::mem::take(&mut self.slots[slot.0]);
            entries
                .into_iter()
                .map(|entry| match entry {
                    Entry::Node(node) => node,
                    Entry::Call {
                        callee,
                        arguments,
                        statement,
                    } => {
                        let call = target::Node::CallExpression {
                            callee,
                            arguments: self.assemble(arguments),
                        };
                        if statement {
                            target::Node::statement(call)
                        } else {
                            call
                        }
                    }
                })
                .collect()
        })
    }
}

impl SourceVisitor for TargetBuilder {
    fn enter_program(
        &mut self,
        node: NodeRef<'_, source::Node>,
        parent: Option<NodeRef<'_, source::Node>>,
    ) -> Result<(), TraverseError> {
        // Only the root may be a program; its slot is bound up front.
        match parent {
            Some(_) => Err(TraverseError::DetachedNode { kind: node.kind() }),
            None => Ok(()),
        }
    }

    fn enter_number_literal(
        &mut self,
        node: NodeRef<'_, source::Node>,
        parent: Option<NodeRef<'_, source::Node>>,
    ) -> Result<(), TraverseError> {
        self.append_literal(node, parent)
    }

    fn enter_string_literal(
        &mut self,
        node: NodeRef<'_, source::Node>,
        parent: Option<NodeRef<'_, source::Node>>,
    ) -> Result<(), TraverseError> {
        self.append_literal(node, parent)
    }

    fn enter_call_expression(
        &mut self,
        node: NodeRef<'_, source::Node>,
        parent: Option<NodeRef<'_, source::Node>>,
    ) -> Result<(), TraverseError> {
        let source::Node::CallExpression { name, .. } = node.node() else {
            return Ok(());
        };

        let arguments = self.allocate_slot();
        self.bindings.insert(node.id(), arguments);

        // Only a call nested in another call is an expression.
        let statement = parent.map_or(true, |p| p.kind() != NodeKind::CallExpression);
        let entry = Entry::Call {
            callee: Identifier::new(name.clone()),
            arguments,
            statement,
        };
        self.append(node, parent, entry)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use source::Node as S;
    use target::Node as T;

    #[test]
    fn test_literal_at_top_level_is_not_wrapped() {
        let out = transform(&S::program(vec![S::number("123")])).unwrap();
        assert_eq!(out, T::program(vec![T::number("123")]));
    }

    #[test]
    fn test_nested_call_is_expression() {
        let input = S::program(vec![S::call(
            "add",
            vec![
                S::number("2"),
                S::call("subtract", vec![S::number("4"), S::number("2")]),
            ],
        )]);
        let expected = T::program(vec![T::statement(T::call(
            "add",
            vec![
                T::number("2"),
                T::call("subtract", vec![T::number("4"), T::number("2")]),
            ],
        ))]);
        assert_eq!(transform(&input).unwrap(), expected);
    }

    #[test]
    fn test_sibling_calls_get_separate_slots() {
        let input = S::program(vec![
            S::call("a", vec![S::call("b", vec![S::number("1")]), S::number("2")]),
            S::call("c", vec![S::string("x")]),
        ]);
        let expected = T::program(vec![
            T::statement(T::call(
                "a",
                vec![T::call("b", vec![T::number("1")]), T::number("2")],
            )),
            T::statement(T::call("c", vec![T::string("x")])),
        ]);
        assert_eq!(transform(&input).unwrap(), expected);
    }

    #[test]
    fn test_zero_argument_call() {
        let out = transform(&S::program(vec![S::call("now", Vec::new())])).unwrap();
        assert_eq!(out, T::program(vec![T::statement(T::call("now", Vec::new()))]));
    }

    #[test]
    fn test_nested_program_is_detached() {
        let detached = TraverseError::DetachedNode {
            kind: NodeKind::Program,
        };
        let with_literal = S::program(vec![S::call(
            "f",
            vec![S::program(vec![S::number("1")])],
        )]);
        assert_eq!(transform(&with_literal).unwrap_err(), detached);

        let empty = S::program(vec![S::call(
            "f",
            vec![S::number("1"), S::program(Vec::new())],
        )]);
        assert_eq!(transform(&empty).unwrap_err(), detached);

        let top_level = S::program(vec![S::program(Vec::new())]);
        assert_eq!(transform(&top_level).unwrap_err(), detached);
    }

    #[test]
    fn test_literal_root_is_detached() {
        assert_eq!(
            transform(&S::number("1")).unwrap_err(),
            TraverseError::DetachedNode {
                kind: NodeKind::NumberLiteral
            }
        );
    }

    #[test]
    fn test_source_is_untouched() {
        let input = S::program(vec![S::call("f", vec![S::number("1")])]);
        let before = input.clone();
        transform(&input).unwrap();
        assert_eq!(input, before);
    }
}
