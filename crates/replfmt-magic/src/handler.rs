//! The `%` command table and dispatcher.

use std::path::PathBuf;

use replfmt_core::{Radix, Style, StyledText};

use crate::args::split_args;
use crate::error::{Error, Result, ScriptError, UsageError};
use crate::session::Session;

/// One entry in the command table.
struct Command {
    name: &'static str,
    help: &'static str,
    run: fn(&MagicHandler, &mut dyn Session, &[String]) -> Result<Option<StyledText>>,
}

/// Registered commands, in `%help` listing order.
const COMMANDS: &[Command] = &[
    Command {
        name: "hex",
        help: "print integers in hexadecimal",
        run: cmd_hex,
    },
    Command {
        name: "dec",
        help: "print integers in decimal",
        run: cmd_dec,
    },
    Command {
        name: "bin",
        help: "print integers in binary",
        run: cmd_bin,
    },
    Command {
        name: "oct",
        help: "print integers in octal",
        run: cmd_oct,
    },
    Command {
        name: "pretty",
        help: "print objects as attribute blocks",
        run: cmd_pretty,
    },
    Command {
        name: "simple",
        help: "print objects by their textual representation",
        run: cmd_simple,
    },
    Command {
        name: "run",
        help: "run script files in the session",
        run: cmd_run,
    },
    Command {
        name: "cd",
        help: "change the working directory",
        run: cmd_cd,
    },
    Command {
        name: "pwd",
        help: "print the working directory",
        run: cmd_pwd,
    },
    Command {
        name: "vars",
        help: "list session variables",
        run: cmd_vars,
    },
    Command {
        name: "debug",
        help: "start the interactive debugger",
        run: cmd_debug,
    },
    Command {
        name: "help",
        help: "list available magic commands",
        run: cmd_help,
    },
];

/// Extracts the command line from a magic invocation.
///
/// Returns the text after the `%` prefix, or `None` when the line is not
/// a magic invocation. Only a `%` as the first non-whitespace character
/// counts, so expressions like `100 % 3` pass through untouched.
///
/// # Example
///
/// ```
/// use replfmt_magic::split_magic;
///
/// assert_eq!(split_magic("%hex"), Some("hex"));
/// assert_eq!(split_magic("  %run setup"), Some("run setup"));
/// assert_eq!(split_magic("100 % 3"), None);
/// ```
pub fn split_magic(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix('%')
}

/// Dispatcher for `%`-prefixed magic commands.
///
/// The handler itself is stateless apart from the optional script
/// extension; all effects land on the [`Session`] passed to
/// [`run`](MagicHandler::run).
#[derive(Debug, Clone, Default)]
pub struct MagicHandler {
    script_extension: Option<String>,
}

impl MagicHandler {
    /// Create a handler with no script extension probing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe `NAME.ext` when a `%run` argument names no existing file.
    #[must_use]
    pub fn with_script_extension(mut self, ext: impl Into<String>) -> Self {
        self.script_extension = Some(ext.into());
        self
    }

    /// Parse and execute one magic command line (the text after `%`).
    ///
    /// Returns the command's styled output, or `None` for commands that
    /// only mutate the session.
    pub fn run(&self, session: &mut dyn Session, line: &str) -> Result<Option<StyledText>> {
        let words = split_args(line)?;
        let Some((name, args)) = words.split_first() else {
            return Err(Error::BadArgs("empty magic command".into()));
        };
        let command = COMMANDS
            .iter()
            .find(|c| c.name == name.as_str())
            .ok_or_else(|| Error::UnknownCommand(name.clone()))?;
        tracing::debug!(
            command = command.name,
            args = args.len(),
            "dispatching magic command"
        );
        (command.run)(self, session, args)
    }

    fn resolve_script(&self, arg: &str) -> PathBuf {
        let path = PathBuf::from(arg);
        if path.exists() {
            return path;
        }
        if let Some(ext) = &self.script_extension {
            let probed = PathBuf::from(format!("{arg}.{ext}"));
            if probed.exists() {
                return probed;
            }
        }
        path
    }
}

fn cmd_hex(_: &MagicHandler, session: &mut dyn Session, _: &[String]) -> Result<Option<StyledText>> {
    session.formatter().set_int_fmt(Radix::Hex, "0x", 2);
    Ok(None)
}

fn cmd_dec(_: &MagicHandler, session: &mut dyn Session, _: &[String]) -> Result<Option<StyledText>> {
    session.formatter().set_int_fmt(Radix::Dec, "", 1);
    Ok(None)
}

fn cmd_bin(_: &MagicHandler, session: &mut dyn Session, _: &[String]) -> Result<Option<StyledText>> {
    session.formatter().set_int_fmt(Radix::Bin, "0b", 8);
    Ok(None)
}

fn cmd_oct(_: &MagicHandler, session: &mut dyn Session, _: &[String]) -> Result<Option<StyledText>> {
    session.formatter().set_int_fmt(Radix::Oct, "0o", 1);
    Ok(None)
}

fn cmd_pretty(
    _: &MagicHandler,
    session: &mut dyn Session,
    _: &[String],
) -> Result<Option<StyledText>> {
    session.formatter().set_obj_fmt_pretty();
    Ok(None)
}

fn cmd_simple(
    _: &MagicHandler,
    session: &mut dyn Session,
    _: &[String],
) -> Result<Option<StyledText>> {
    session.formatter().set_obj_fmt_simple();
    Ok(None)
}

fn cmd_run(
    handler: &MagicHandler,
    session: &mut dyn Session,
    args: &[String],
) -> Result<Option<StyledText>> {
    if args.is_empty() {
        return Err(UsageError {
            command: "run",
            usage: "%run SCRIPT [SCRIPT ...]",
        }
        .into());
    }
    for arg in args {
        let path = handler.resolve_script(arg);
        if let Err(message) = session.run_script(&path) {
            return Err(ScriptError { path, message }.into());
        }
    }
    Ok(None)
}

fn cmd_cd(_: &MagicHandler, _: &mut dyn Session, args: &[String]) -> Result<Option<StyledText>> {
    let [dir] = args else {
        return Err(UsageError {
            command: "cd",
            usage: "%cd DIRECTORY",
        }
        .into());
    };
    std::env::set_current_dir(dir)?;
    Ok(None)
}

fn cmd_pwd(_: &MagicHandler, _: &mut dyn Session, _: &[String]) -> Result<Option<StyledText>> {
    let dir = std::env::current_dir()?;
    let mut out = StyledText::new();
    out.push(Style::STRING, dir.display().to_string());
    Ok(Some(out))
}

fn cmd_vars(
    _: &MagicHandler,
    session: &mut dyn Session,
    _: &[String],
) -> Result<Option<StyledText>> {
    let vars = session.variables();
    let mut out = StyledText::new();
    if vars.is_empty() {
        out.push(Style::DIM, "(no variables)");
        return Ok(Some(out));
    }
    let formatter = session.formatter();
    for (name, value) in &vars {
        out.push(Style::PLAIN, format!("{name}: "));
        let mut rendered = formatter.format(value);
        rendered.strip_trailing_newline();
        out.append(rendered);
        out.push(Style::PLAIN, "\n");
    }
    out.strip_trailing_newline();
    Ok(Some(out))
}

fn cmd_debug(
    _: &MagicHandler,
    session: &mut dyn Session,
    _: &[String],
) -> Result<Option<StyledText>> {
    session.start_debugger().map_err(Error::Debugger)?;
    Ok(None)
}

fn cmd_help(_: &MagicHandler, _: &mut dyn Session, _: &[String]) -> Result<Option<StyledText>> {
    let mut out = StyledText::new();
    for command in COMMANDS {
        out.push(Style::CONSTANT, format!("%{:<7}", command.name));
        out.push(Style::PLAIN, format!("- {}\n", command.help));
    }
    out.strip_trailing_newline();
    Ok(Some(out))
}
