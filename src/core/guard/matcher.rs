//! Line matcher: recognizes logging calls at the start of a line and
//! prefixes them with the guard condition.
//!
//! Matching is a prefix regex, not a parser. A call preceded by other code on
//! the same line, a call split across lines, or a call inside a string or
//! comment that happens to start a line are all treated purely by text.

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// How a file is recognized as already processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardMode {
    /// Skip a file when it contains the guard followed by the receiver of the
    /// first call (`if (process.env.DEBUG) console.` with the stock settings),
    /// whichever method follows it.
    Legacy,
    /// Skip a file only when it contains the exact guarded form of one of the
    /// configured calls.
    Strict,
}

impl GuardMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            GuardMode::Strict
        } else {
            GuardMode::Legacy
        }
    }
}

/// Result of wrapping one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedContent {
    pub content: String,
    pub changes: usize,
}

#[derive(Debug, Clone)]
pub struct CallMatcher {
    pattern: Regex,
    guard: String,
    legacy_marker: String,
    markers: Vec<String>,
}

impl CallMatcher {
    /// Build a matcher for `calls` (names such as `console.log`, without the
    /// parenthesis). Names are matched literally and case-sensitively, each
    /// followed directly by `(`.
    pub fn new(calls: &[String], guard: &str) -> Result<Self> {
        if calls.is_empty() {
            return Err(Error::config_invalid_value(
                "calls",
                None,
                "at least one call name is required",
            ));
        }

        let alternatives = calls
            .iter()
            .map(|c| regex::escape(c))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(r"^(\s*)(?:{})\(", alternatives)).map_err(|e| {
            Error::config_invalid_value("calls", Some(calls.join(", ")), e.to_string())
        })?;

        let markers = calls
            .iter()
            .map(|c| format!("{} {}", guard, c))
            .collect();

        // `console.log` -> `console.`; a name without a `.` is used whole.
        let first = &calls[0];
        let receiver = first.rfind('.').map_or(first.as_str(), |dot| &first[..=dot]);
        let legacy_marker = format!("{} {}", guard, receiver);

        Ok(Self {
            pattern,
            guard: guard.to_string(),
            legacy_marker,
            markers,
        })
    }

    /// Byte length of the leading whitespace when `line` starts with a
    /// recognized call, `None` otherwise.
    pub fn match_line(&self, line: &str) -> Option<usize> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|indent| indent.end())
    }

    /// `<indent><guard> <rest>` for a matched line.
    pub fn wrap_line(&self, line: &str) -> Option<String> {
        let indent_len = self.match_line(line)?;
        let (indent, rest) = line.split_at(indent_len);
        Some(format!("{}{} {}", indent, self.guard, rest))
    }

    /// Wrap every matched line. Lines are split and rejoined on `\n` only, so
    /// `\r` stays attached to its line and a trailing newline survives as a
    /// trailing empty line.
    pub fn wrap_content(&self, content: &str) -> WrappedContent {
        let mut changes = 0;
        let lines: Vec<String> = content
            .split('\n')
            .map(|line| match self.wrap_line(line) {
                Some(wrapped) => {
                    changes += 1;
                    wrapped
                }
                None => line.to_string(),
            })
            .collect();

        WrappedContent {
            content: lines.join("\n"),
            changes,
        }
    }

    /// Whether `content` already carries the guard, per `mode`.
    pub fn already_guarded(&self, content: &str, mode: GuardMode) -> bool {
        match mode {
            GuardMode::Legacy => content.contains(self.legacy_marker.as_str()),
            GuardMode::Strict => self
                .markers
                .iter()
                .any(|marker| content.contains(marker.as_str())),
        }
    }
}
