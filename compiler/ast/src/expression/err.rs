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

/// Represents a syntactically invalid expression.
///
/// The parser reports the error and keeps going; later phases skip the node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrExpression {
    /// The span of the invalid expression.
    pub span: Span,
}

impl fmt::Display for ErrExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error")
    }
}

crate::simple_node_impl!(ErrExpression);
