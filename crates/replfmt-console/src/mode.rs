//! Output mode detection for pipe-safe console output.
//!
//! Rendering adapts to where output lands: richly colored for a human
//! terminal, plain text for pipes, CI, and dumb terminals, JSON span
//! arrays for programmatic consumers.
//!
//! # Detection Priority
//!
//! The detection follows this priority order (first match wins):
//!
//! 1. `REPLFMT_MODE=plain|rich|json` - explicit override
//! 2. `NO_COLOR` - standard env var for disabling colors
//! 3. `CI` truthy - CI environment
//! 4. `TERM=dumb` - dumb terminal
//! 5. `!is_terminal(stdout)` - piped or redirected output
//! 6. Default: rich output

use std::env;
use std::io::IsTerminal;

/// Output mode for console rendering.
///
/// Detected from the environment and terminal state, or forced via
/// `REPLFMT_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OutputMode {
    /// Plain text output, no ANSI codes. Machine-parseable.
    Plain,

    /// Colored output for interactive human terminal sessions.
    #[default]
    Rich,

    /// Structured JSON span output for tool integrations.
    Json,
}

impl OutputMode {
    /// Detect the appropriate output mode from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use replfmt_console::OutputMode;
    ///
    /// let mode = OutputMode::detect();
    /// match mode {
    ///     OutputMode::Plain => println!("plain text"),
    ///     OutputMode::Rich => println!("colored output"),
    ///     OutputMode::Json => println!("JSON spans"),
    /// }
    /// ```
    #[must_use]
    pub fn detect() -> Self {
        // Explicit override (highest priority); unrecognized values fall
        // through to detection
        if let Some(mode) = env::var("REPLFMT_MODE")
            .ok()
            .as_deref()
            .and_then(Self::from_name)
        {
            return mode;
        }

        // Standard "no color" convention (https://no-color.org/)
        if env::var("NO_COLOR").is_ok() {
            return Self::Plain;
        }

        // CI environments
        if env_is_truthy("CI") {
            return Self::Plain;
        }

        // Dumb terminal
        if env::var("TERM").is_ok_and(|t| t == "dumb") {
            return Self::Plain;
        }

        // Not a TTY (piped, redirected)
        if !std::io::stdout().is_terminal() {
            return Self::Plain;
        }

        // Default: rich output for humans
        Self::Rich
    }

    /// Parse a mode name as used by `REPLFMT_MODE`, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "rich" => Some(Self::Rich),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Check if this mode should use ANSI escape codes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use replfmt_console::OutputMode;
    ///
    /// assert!(!OutputMode::Plain.supports_ansi());
    /// assert!(OutputMode::Rich.supports_ansi());
    /// assert!(!OutputMode::Json.supports_ansi());
    /// ```
    #[must_use]
    pub const fn supports_ansi(&self) -> bool {
        matches!(self, Self::Rich)
    }

    /// Check if this mode emits structured output.
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode is plain text.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }

    /// Check if this mode uses rich formatting.
    #[must_use]
    pub const fn is_rich(&self) -> bool {
        matches!(self, Self::Rich)
    }

    /// Get the mode name as a string slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use replfmt_console::OutputMode;
    ///
    /// assert_eq!(OutputMode::Plain.as_str(), "plain");
    /// assert_eq!(OutputMode::Rich.as_str(), "rich");
    /// assert_eq!(OutputMode::Json.as_str(), "json");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Rich => "rich",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if an environment variable is set to a truthy value.
///
/// Recognizes: `1`, `true`, `yes`, `on` (case-insensitive).
fn env_is_truthy(name: &str) -> bool {
    env::var(name).is_ok_and(|v| {
        let v = v.to_lowercase();
        v == "1" || v == "true" || v == "yes" || v == "on"
    })
}
