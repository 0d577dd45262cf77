//! # Config Crate
//!
//! Centralized configuration constants for the prefix-call compiler pipeline.
//! Emitted punctuation and recursion tuning live here so that every stage
//! agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ARGUMENT_SEPARATOR, STATEMENT_TERMINATOR};
//!
//! let call = format!("add({}){}", ["1", "2"].join(ARGUMENT_SEPARATOR), STATEMENT_TERMINATOR);
//! assert_eq!(call, "add(1, 2);");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Every crate in the workspace can depend on this one

pub mod constants;
