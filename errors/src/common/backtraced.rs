// Copyright (C) 2019-2025 Provable Inc.
// This file is part of the Tny library.

// The Tny library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Tny library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Tny library. If not, see <https://www.gnu.org/licenses/>.

use backtrace::Backtrace;
use colored::Colorize;
use std::fmt;

/// A diagnostic without a source location, used for errors that arise
/// outside of any particular span (file I/O, serialization, and the like).
#[derive(Debug)]
pub struct Backtraced {
    /// The error message.
    pub message: String,
    /// An optional line of advice shown under the message.
    pub help: Option<String>,
    /// The absolute error code (mask + entry index).
    pub code: i32,
    /// The three-letter code identifier, e.g. `PAR`.
    pub code_identifier: String,
    /// The name of the error type that generated this diagnostic.
    pub type_: String,
    /// Whether this diagnostic is an error rather than a warning.
    pub error: bool,
    /// A backtrace captured where the diagnostic was created.
    pub backtrace: Backtrace,
}

impl Backtraced {
    /// Creates a backtraced diagnostic from its parts.
    pub fn new_from_backtrace<S>(
        message: S,
        help: Option<String>,
        code: i32,
        code_identifier: String,
        type_: String,
        error: bool,
        backtrace: Backtrace,
    ) -> Self
    where
        S: ToString,
    {
        Self {
            message: message.to_string(),
            help,
            code,
            code_identifier,
            type_,
            error,
            backtrace,
        }
    }

    /// Returns the full error code, e.g. `EPAR0370006`.
    pub fn error_code(&self) -> String {
        let kind = if self.error { "E" } else { "W" };
        format!("{kind}{}{:07}", self.code_identifier, self.code)
    }

    /// Returns the absolute exit code for this diagnostic.
    pub fn exit_code(&self) -> i32 {
        self.code
    }
}

impl PartialEq for Backtraced {
    // The backtrace is intentionally left out of the comparison.
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.code == other.code && self.code_identifier == other.code_identifier
    }
}

impl Eq for Backtraced {}

impl fmt::Display for Backtraced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.error { "Error" } else { "Warning" };
        let leading = format!("{kind} [{}]:", self.error_code());
        let leading = if self.error { leading.bold().red() } else { leading.bold().yellow() };
        write!(f, "{leading} {}", self.message)?;

        if let Some(help) = &self.help {
            write!(f, "\n     = {help}")?;
        }

        if std::env::var("TNY_BACKTRACE").unwrap_or_default() == "1" {
            write!(f, "\n{:?}", self.backtrace)?;
        }

        Ok(())
    }
}

impl std::error::Error for Backtraced {}
