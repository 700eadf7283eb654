//! The session trait magic commands act upon.

use std::path::Path;

use replfmt_core::{Formatter, Value};

/// Host REPL state seen by magic commands.
///
/// Commands never talk to a concrete interpreter. They reconfigure the
/// session's [`Formatter`], enumerate its variables, and ask it to run
/// scripts or start a debugger, so any host that implements this trait
/// can reuse the whole command table.
pub trait Session {
    /// The formatter used to render values in this session.
    fn formatter(&mut self) -> &mut Formatter;

    /// Current variable bindings, in the order the host defines.
    fn variables(&self) -> Vec<(String, Value)>;

    /// Execute a script file in the session.
    ///
    /// The error string is surfaced to the user verbatim.
    fn run_script(&mut self, path: &Path) -> Result<(), String>;

    /// Enter the host's interactive debugger.
    fn start_debugger(&mut self) -> Result<(), String>;
}
