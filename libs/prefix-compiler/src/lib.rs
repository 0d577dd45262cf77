//! # Prefix Compiler
//!
//! Compiles prefix call expressions into infix call statements.
//!
//! ```text
//! (add 2 (subtract 4 2))  ──▶  add(2, subtract(4, 2));
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! &str ─tokenize─▶ Vec<Token> ─parse─▶ source::Node ─transform─▶ target::Node ─generate─▶ String
//! ```
//!
//! Each stage is also exported on its own. The first failing stage aborts the
//! run and its error is returned wrapped in [`CompileError`].
//!
//! ## Example
//!
//! ```rust
//! use prefix_compiler::compile;
//!
//! assert_eq!(compile("(add 2 (subtract 4 2))").unwrap(), "add(2, subtract(4, 2));");
//! ```

pub mod error;

pub use error::{CompileError, Stage};
pub use prefix_codegen::generate;
pub use prefix_parser::{parse, tokenize};
pub use prefix_transform::{transform, traverse};

use config::constants::GlobalConfig;
use prefix_ast::{source, target};
use prefix_parser::Token;
use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

/// Compile `source` to infix text.
///
/// Each stage's result is handed to the next and dropped once used.
pub fn compile(source: &str) -> Result<String, CompileError> {
    logged(lex(source).and_then(parse_tokens).and_then(|ast| {
        let target = lower(&ast)?;
        drop(ast);
        emit(&target)
    }))
}

// =============================================================================
// STAGES
// =============================================================================

fn lex(input: &str) -> Result<Vec<Token>, CompileError> {
    let tokens = debug_span!("lex").in_scope(|| tokenize(input))?;
    debug!(tokens = tokens.len(), "tokenized");
    trace!(?tokens);
    Ok(tokens)
}

fn parse_tokens(tokens: Vec<Token>) -> Result<source::Node, CompileError> {
    let source = debug_span!("parse").in_scope(|| parse(tokens))?;
    debug!(statements = source.children().len(), "parsed");
    trace!(?source);
    Ok(source)
}

fn lower(source: &source::Node) -> Result<target::Node, CompileError> {
    let target = debug_span!("transform").in_scope(|| transform(source))?;
    debug!(statements = target.children().len(), "transformed");
    trace!(?target);
    Ok(target)
}

fn emit(target: &target::Node) -> Result<String, CompileError> {
    let output = debug_span!("generate").in_scope(|| generate(target))?;
    debug!(bytes = output.len(), "generated");
    trace!(%output);
    Ok(output)
}

fn logged<T>(result: Result<T, CompileError>) -> Result<T, CompileError> {
    result.map_err(|err| {
        debug!(stage = %err.stage(), error = %err, "compilation failed");
        err
    })
}

// =============================================================================
// COMPILATION
// =============================================================================

/// Every intermediate value of one successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub source: source::Node,
    pub target: target::Node,
    pub output: String,
}

impl Compilation {
    /// Run all four stages on `input`, keeping each stage's result.
    pub fn run(input: &str) -> Result<Self, CompileError> {
        logged(Self::stages(input))
    }

    fn stages(input: &str) -> Result<Self, CompileError> {
        let tokens = lex(input)?;
        // The parser consumes its tokens; keep a copy for the caller.
        let source = parse_tokens(tokens.clone())?;
        let target = lower(&source)?;
        let output = emit(&target)?;
        Ok(Self {
            tokens,
            source,
            target,
            output,
        })
    }
}

// =============================================================================
// BATCH
// =============================================================================

/// Compile independent inputs in parallel on the global thread pool.
///
/// Results are in input order.
pub fn compile_batch(inputs: &[&str]) -> Vec<Result<String, CompileError>> {
    inputs.par_iter().map(|input| compile(input)).collect()
}

/// Like [`compile_batch`], on a dedicated pool sized by `config`.
pub fn compile_batch_with(
    config: &GlobalConfig,
    inputs: &[&str],
) -> Result<Vec<Result<String, CompileError>>, rayon::ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .stack_size(config.worker_stack_size)
        .build()?;
    Ok(pool.install(|| compile_batch(inputs)))
}

// =============================================================================
// TESTS
// =============================================================================
