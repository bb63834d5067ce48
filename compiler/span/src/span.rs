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

use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// A region of source code, pointing back into the text it came from.
///
/// Lines and columns are 1-indexed; a dummy span is all zeros.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The line on which the region starts.
    pub line_start: usize,
    /// The line on which the region stops.
    pub line_stop: usize,
    /// The column (within `line_start`) at which the region starts.
    pub col_start: usize,
    /// The column (within `line_stop`) at which the region stops.
    pub col_stop: usize,
    /// The path to the source file.
    pub path: Arc<String>,
    /// The text of the line the region starts on, used for diagnostics.
    pub content: String,
}

impl Span {
    /// Generates a new span from its parts.
    pub fn new(
        line_start: usize,
        line_stop: usize,
        col_start: usize,
        col_stop: usize,
        path: Arc<String>,
        content: String,
    ) -> Self {
        Self { line_start, line_stop, col_start, col_stop, path, content }
    }

    /// Generates a dummy span with all defaults.
    pub fn dummy() -> Self {
        Self::default()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line_start == self.line_stop {
            write!(f, "{}:{}-{}", self.line_start, self.col_start, self.col_stop)
        } else {
            write!(f, "{}:{}-{}:{}", self.line_start, self.col_start, self.line_stop, self.col_stop)
        }
    }
}

impl std::ops::Add<&Span> for &Span {
    type Output = Span;

    fn add(self, other: &Span) -> Span {
        self.clone() + other.clone()
    }
}

impl std::ops::Add for Span {
    type Output = Self;

    /// Merges two spans, covering everything from the start of the earlier
    /// one to the stop of the later one.
    fn add(self, other: Self) -> Self {
        if self.line_start == other.line_start && self.line_stop == other.line_stop {
            return Span::new(
                self.line_start,
                self.line_stop,
                self.col_start.min(other.col_start),
                self.col_stop.max(other.col_stop),
                self.path,
                self.content,
            );
        }

        let (first, last) = if (self.line_start, self.col_start) <= (other.line_start, other.col_start) {
            (self, other)
        } else {
            (other, self)
        };
        let (line_stop, col_stop) = if last.line_stop >= first.line_stop {
            (last.line_stop, last.col_stop)
        } else {
            (first.line_stop, first.col_stop)
        };
        let content = if first.line_stop + 1 >= last.line_start {
            format!("{}\n{}", first.content, last.content)
        } else {
            format!("{}\n...\n{}", first.content, last.content)
        };
        Span::new(first.line_start, line_stop, first.col_start, col_stop, first.path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_add_same_line() {
        let path = Arc::new(String::from("test.tny"));
        let left = Span::new(1, 1, 1, 2, path.clone(), "x := 3".to_string());
        let right = Span::new(1, 1, 6, 7, path, "x := 3".to_string());
        let merged = left + right;
        assert_eq!(merged.line_start, 1);
        assert_eq!(merged.col_start, 1);
        assert_eq!(merged.col_stop, 7);
        assert_eq!(merged.content, "x := 3");
    }

    #[test]
    fn test_span_add_across_lines() {
        let path = Arc::new(String::from("test.tny"));
        let left = Span::new(1, 1, 4, 5, path.clone(), "if x then".to_string());
        let right = Span::new(3, 3, 1, 4, path, "end".to_string());
        let merged = &left + &right;
        assert_eq!(merged.line_start, 1);
        assert_eq!(merged.line_stop, 3);
        assert_eq!(merged.content, "if x then\n...\nend");
        assert_eq!(merged.to_string(), "1:4-3:4");
    }
}
