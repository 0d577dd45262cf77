//! # Prefix AST Crate
//!
//! The two tree vocabularies of the prefix-call compiler, plus an untyped
//! interchange form for trees handed over by a host.
//!
//! ## Architecture
//!
//! ```text
//! prefix-parser → source::Node → prefix-transform → target::Node → prefix-codegen
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use prefix_ast::source;
//!
//! let program = source::Node::program(vec![source::Node::call(
//!     "add",
//!     vec![source::Node::number("2"), source::Node::number("3")],
//! )]);
//! assert_eq!(program.children().len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! - **Two Vocabularies**: Source and target trees are distinct enums so a
//!   stage can never be handed the wrong shape
//! - **Tree, not Graph**: Children are owned; no sharing, no cycles
//! - **Original JSON Shape**: Both enums serialize with a `"type"` tag

pub mod kind;
pub mod serialized;
pub mod source;
pub mod target;

pub use kind::NodeKind;
pub use serialized::SerializedNode;
