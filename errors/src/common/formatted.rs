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

use crate::Backtraced;

use tny_span::Span;

use backtrace::Backtrace;
use colored::Colorize;
use std::fmt;

/// A diagnostic anchored to a source location, rendered with the path,
/// the offending line, and a caret underline.
#[derive(Debug, PartialEq, Eq)]
pub struct Formatted {
    /// The location the diagnostic points at.
    pub span: Span,
    /// The rest of the diagnostic payload.
    pub backtrace: Backtraced,
}

impl Formatted {
    /// Creates a formatted diagnostic pointing at `span`.
    pub fn new_from_span<S>(
        message: S,
        help: Option<String>,
        code: i32,
        code_identifier: String,
        type_: String,
        error: bool,
        span: &Span,
    ) -> Self
    where
        S: ToString,
    {
        Self {
            span: span.clone(),
            backtrace: Backtraced::new_from_backtrace(
                message,
                help,
                code,
                code_identifier,
                type_,
                error,
                Backtrace::new(),
            ),
        }
    }

    /// Returns the full error code, e.g. `ETYC0372003`.
    pub fn error_code(&self) -> String {
        self.backtrace.error_code()
    }

    /// Returns the absolute exit code for this diagnostic.
    pub fn exit_code(&self) -> i32 {
        self.backtrace.exit_code()
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.backtrace.error { "Error" } else { "Warning" };
        let leading = format!("{kind} [{}]:", self.error_code());
        let leading = if self.backtrace.error { leading.bold().red() } else { leading.bold().yellow() };
        writeln!(f, "{leading} {}", self.backtrace.message)?;

        let gutter = " ".repeat(self.span.line_start.to_string().len());
        writeln!(
            f,
            "{gutter}--> {}:{}:{}",
            self.span.path, self.span.line_start, self.span.col_start
        )?;

        // The source excerpt with a caret underline, on a best-effort basis:
        // a dummy span has no content to show.
        if !self.span.content.is_empty() {
            let line = self
                .span
                .content
                .lines()
                .next()
                .unwrap_or(&self.span.content);
            writeln!(f, "{gutter} |")?;
            writeln!(f, "{} | {line}", self.span.line_start)?;
            write!(f, "{gutter} | {}", underline(&self.span, line))?;
        }

        if let Some(help) = &self.backtrace.help {
            write!(f, "\n{gutter} |\n{gutter} = {help}")?;
        }

        if std::env::var("TNY_BACKTRACE").unwrap_or_default() == "1" {
            write!(f, "\n{:?}", self.backtrace.backtrace)?;
        }

        Ok(())
    }
}

/// Builds the `^^^` underline for the start line of `span`.
fn underline(span: &Span, line: &str) -> String {
    let start = span.col_start.max(1) - 1;
    let stop = if span.line_start == span.line_stop {
        span.col_stop.max(span.col_start)
    } else {
        line.len() + 1
    };
    let width = (stop - 1).saturating_sub(start).max(1);
    format!("{}{}", " ".repeat(start), "^".repeat(width))
}

impl std::error::Error for Formatted {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_error_code_format() {
        let span = Span::new(2, 2, 1, 2, Arc::new("test.tny".to_string()), "x := b".to_string());
        let formatted = Formatted::new_from_span(
            "assignment of a different type value",
            None,
            372_004,
            "TYC".to_string(),
            "TypeCheckerError".to_string(),
            true,
            &span,
        );
        assert_eq!(formatted.error_code(), "ETYC0372004");
        assert_eq!(formatted.exit_code(), 372_004);
    }

    #[test]
    fn test_underline_is_anchored_to_columns() {
        let span = Span::new(1, 1, 6, 7, Arc::new("test.tny".to_string()), "x := b".to_string());
        assert_eq!(underline(&span, "x := b"), "     ^");
    }
}
