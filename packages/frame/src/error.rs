//! Error types for the frame layer.

use thiserror::Error;

/// Errors building call tables and routing calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A call table was given no functions.
    #[error("call table has no functions")]
    EmptyTable,

    /// Two calls claimed the same function index in one module.
    #[error("duplicate function index {index}")]
    DuplicateFunctionIndex { index: u8 },

    /// A call was registered under an index other than its own.
    #[error("call registered at function index {index} reports index {function_index}")]
    IndexMismatch { index: u8, function_index: u8 },

    /// A module index was registered twice with the router.
    #[error("duplicate module index {index}")]
    DuplicateModule { index: u8 },

    /// A module's call reports a module index other than the one it is
    /// registered under.
    #[error("module registered at index {index} has a call reporting module {module_index}")]
    ModuleIndexMismatch { index: u8, module_index: u8 },

    /// The router already holds its configured maximum of modules.
    #[error("router is full: at most {max_modules} module(s)")]
    TooManyModules { max_modules: usize },

    /// No module is registered at this index.
    #[error("unknown module {module}")]
    UnknownModule { module: u8 },

    /// The module has no function at this index.
    #[error("unknown function {function} in module {module}")]
    UnknownFunction { module: u8, function: u8 },

    /// The encoded call could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] extrinsic_codec::Error),
}

/// Result type alias for frame operations.
pub type Result<T> = std::result::Result<T, Error>;
