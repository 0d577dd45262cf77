//! # Prefix Codegen
//!
//! Renders a target syntax tree as infix call text.
//!
//! ```text
//! Program
//! └─ ExpressionStatement          add(2, subtract(4, 2));
//!    └─ CallExpression add
//!       ├─ NumberLiteral 2
//!       └─ CallExpression subtract
//! ```
//!
//! Statements are joined with a newline, arguments with `", "`. A string
//! literal is emitted between double quotes with no escaping.
//!
//! ## Example
//!
//! ```rust
//! use prefix_ast::target::Node;
//! use prefix_codegen::generate;
//!
//! let program = Node::program(vec![Node::statement(Node::call(
//!     "add",
//!     vec![Node::number("1"), Node::string("a")],
//! ))]);
//! assert_eq!(generate(&program).unwrap(), "add(1, \"a\");");
//! ```

pub mod error;
pub mod generator;

pub use error::CodeGenError;
pub use generator::{generate, Emit};
