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

use crate::{Block, Expression, Node, simple_node_impl};

use tny_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `while condition do block end` statement.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct WhileStatement {
    /// The `bool`-typed condition checked before each iteration.
    pub condition: Expression,
    /// The sequence to evaluate while `condition` yields `true`.
    pub block: Block,
    /// The span from `while` to `end`.
    pub span: Span,
}

impl fmt::Display for WhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "while {} do", self.condition)?;
        writeln!(f, "{}", self.block)?;
        write!(f, "end")
    }
}

simple_node_impl!(WhileStatement);
