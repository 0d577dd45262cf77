//! # Compile Errors
//!
//! One variant per pipeline stage, each wrapping that stage's own error.

use prefix_codegen::CodeGenError;
use prefix_parser::{LexError, ParseError};
use prefix_transform::TraverseError;
use std::fmt;
use thiserror::Error;

/// Pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Lex,
    Parse,
    Transform,
    Generate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Lex => "lex",
            Stage::Parse => "parse",
            Stage::Transform => "transform",
            Stage::Generate => "generate",
        })
    }
}

/// The first error raised by any stage. Later stages never run after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("transform error: {0}")]
    Transform(#[from] TraverseError),

    #[error("codegen error: {0}")]
    Generate(#[from] CodeGenError),
}

impl CompileError {
    /// Stage that raised this error.
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Lex(_) => Stage::Lex,
            CompileError::Parse(_) => Stage::Parse,
            CompileError::Transform(_) => Stage::Transform,
            CompileError::Generate(_) => Stage::Generate,
        }
    }
}
