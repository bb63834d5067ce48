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

use super::*;

/// A literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// A boolean literal, either `true` or `false`.
    Boolean(bool, Span),
    /// An integer literal.
    Integer(i64, Span),
    /// A string literal.
    String(String, Span),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(boolean, _) => write!(f, "{boolean}"),
            Self::Integer(integer, _) => write!(f, "{integer}"),
            Self::String(string, _) => write!(f, "\"{string}\""),
        }
    }
}

impl Node for Literal {
    fn span(&self) -> &Span {
        match self {
            Self::Boolean(_, span) | Self::Integer(_, span) | Self::String(_, span) => span,
        }
    }

    fn set_span(&mut self, new_span: Span) {
        match self {
            Self::Boolean(_, span) | Self::Integer(_, span) | Self::String(_, span) => *span = new_span,
        }
    }
}
