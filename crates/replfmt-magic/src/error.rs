//! Error types for magic command dispatch.

use std::fmt;
use std::path::PathBuf;

/// The primary error type for magic command handling.
#[derive(Debug)]
pub enum Error {
    /// Command name not present in the command table
    UnknownCommand(String),
    /// Known command invoked with the wrong argument shape
    Usage(UsageError),
    /// Argument line could not be split into words
    BadArgs(String),
    /// Filesystem errors from `cd` and `pwd`
    Io(std::io::Error),
    /// Session-reported script failure
    Script(ScriptError),
    /// Session-reported debugger failure
    Debugger(String),
}

/// Arity or argument-shape violation for a known command.
#[derive(Debug)]
pub struct UsageError {
    pub command: &'static str,
    pub usage: &'static str,
}

/// Failure reported by the session while running a script.
#[derive(Debug)]
pub struct ScriptError {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCommand(cmd) => write!(f, "Invalid magic command {cmd}"),
            Error::Usage(e) => write!(f, "Usage: {}", e.usage),
            Error::BadArgs(msg) => write!(f, "Bad arguments: {msg}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Script(e) => {
                write!(f, "Script error in {}: {}", e.path.display(), e.message)
            }
            Error::Debugger(msg) => write!(f, "Debugger error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<UsageError> for Error {
    fn from(err: UsageError) -> Self {
        Error::Usage(err)
    }
}

impl From<ScriptError> for Error {
    fn from(err: ScriptError) -> Self {
        Error::Script(err)
    }
}

/// A specialized Result type for magic command operations.
pub type Result<T> = std::result::Result<T, Error>;
