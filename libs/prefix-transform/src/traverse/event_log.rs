//! Visitor that records every enter/exit event, for diagnostics and tests.

use super::{NodeId, NodeRef, Traversable, Visitor};
use crate::error::TraverseError;
use std::fmt;

/// Which side of a node an event was recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
}

/// One recorded callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalEvent {
    pub id: NodeId,
    pub kind: String,
    pub phase: Phase,
}

/// Records `(node, phase)` for every callback of a traversal, in order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<TraversalEvent>,
}

impl EventLog {
    fn record<N: Traversable>(&mut self, node: NodeRef<'_, N>, phase: Phase) {
        self.events.push(TraversalEvent {
            id: node.id(),
            kind: node.kind_name().to_string(),
            phase,
        });
    }
}

impl<N: Traversable> Visitor<N> for EventLog {
    fn enter(
        &mut self,
        node: NodeRef<'_, N>,
        _parent: Option<NodeRef<'_, N>>,
    ) -> Result<(), TraverseError> {
        self.record(node, Phase::Enter);
        Ok(())
    }

    fn exit(
        &mut self,
        node: NodeRef<'_, N>,
        _parent: Option<NodeRef<'_, N>>,
    ) -> Result<(), TraverseError> {
        self.record(node, Phase::Exit);
        Ok(())
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let phase = match event.phase {
                Phase::Enter => "enter",
                Phase::Exit => "exit",
            };
            write!(f, "{phase} {}", event.kind)?;
        }
        Ok(())
    }
}
