//! Centralized configuration values shared across the compiler pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// RECURSION CONSTANTS
// =============================================================================

/// Remaining stack below which a recursive stage asks `stacker` for more.
///
/// Parser, traverser and code generator all recurse once per nesting level,
/// so each recursive step is wrapped in `stacker::maybe_grow` with this red
/// zone.
///
/// # Examples
/// ```
/// use config::constants::STACKER_RED_ZONE_BYTES;
/// assert!(STACKER_RED_ZONE_BYTES >= 32 * 1024);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space allocated each time `stacker` grows the stack.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 1024 * 1024;

// =============================================================================
// EMISSION CONSTANTS
// =============================================================================

/// Separator placed between top-level statements of a generated program.
///
/// # Examples
/// ```
/// use config::constants::STATEMENT_SEPARATOR;
/// assert_eq!(["a();", "b();"].join(STATEMENT_SEPARATOR), "a();\nb();");
/// ```
pub const STATEMENT_SEPARATOR: &str = "\n";

/// Separator placed between the arguments of a generated call.
///
/// # Examples
/// ```
/// use config::constants::ARGUMENT_SEPARATOR;
/// assert_eq!(["1", "2"].join(ARGUMENT_SEPARATOR), "1, 2");
/// ```
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Terminator appended to every expression statement.
pub const STATEMENT_TERMINATOR: &str = ";";

/// Delimiter that opens and closes a string literal, in source and output.
///
/// # Examples
/// ```
/// use config::constants::STRING_DELIMITER;
/// assert_eq!(STRING_DELIMITER, '"');
/// ```
pub const STRING_DELIMITER: char = '"';

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Default stack size for batch worker threads.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_WORKER_STACK_BYTES, STACKER_RED_ZONE_BYTES};
/// assert!(DEFAULT_WORKER_STACK_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const DEFAULT_WORKER_STACK_BYTES: usize = 8 * 1024 * 1024;

/// Settings for compiling many inputs at once.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.threads, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Worker thread count. Zero lets the thread pool pick.
    pub threads: usize,
    /// Initial stack of each worker thread.
    pub worker_stack_size: usize,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting a worker stack that cannot hold the
    /// recursion red zone.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(4, 512 * 1024).expect("valid config");
    /// assert_eq!(cfg.threads, 4);
    /// ```
    pub fn new(threads: usize, worker_stack_size: usize) -> Result<Self, ConfigError> {
        if worker_stack_size <= STACKER_RED_ZONE_BYTES {
            return Err(ConfigError::InvalidStackSize {
                red_zone: STACKER_RED_ZONE_BYTES,
                stack_size: worker_stack_size,
            });
        }
        Ok(Self {
            threads,
            worker_stack_size,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            worker_stack_size: DEFAULT_WORKER_STACK_BYTES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a worker stack would be no larger than the red zone.
    InvalidStackSize {
        /// Red zone the stack must exceed.
        red_zone: usize,
        /// Requested stack size.
        stack_size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStackSize {
                red_zone,
                stack_size,
            } => {
                write!(f, "worker_stack_size must exceed red_zone ({red_zone}): {stack_size}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
