//! # Prefix Transform
//!
//! Walks syntax trees and rewrites the source tree into the target tree.
//!
//! ## Architecture
//!
//! ```text
//! source::Node ──traverse + SourceVisitor──▶ TargetBuilder ──▶ target::Node
//! ```
//!
//! The traverser is generic over any [`Traversable`] tree and knows nothing
//! about what its visitor does. The transformer is one such visitor.
//!
//! ## Example
//!
//! ```rust
//! use prefix_ast::{source, target};
//! use prefix_transform::transform;
//!
//! let program = source::Node::program(vec![source::Node::call(
//!     "add",
//!     vec![source::Node::number("1")],
//! )]);
//! let out = transform(&program).unwrap();
//! assert_eq!(
//!     out,
//!     target::Node::program(vec![target::Node::statement(target::Node::call(
//!         "add",
//!         vec![target::Node::number("1")],
//!     ))])
//! );
//! ```

pub mod error;
pub mod transformer;
pub mod traverse;

pub use error::TraverseError;
pub use transformer::transform;
pub use traverse::{
    traverse, traverse_source, EventLog, NodeId, NodeRef, Phase, SourceVisitor, Traversable,
    TraversalEvent, Visitor,
};
