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

/// A `repeat block until condition` statement.
///
/// The body runs at least once; the loop exits when `condition` yields `true`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct RepeatStatement {
    /// The sequence to evaluate on every iteration.
    pub block: Block,
    /// The `bool`-typed condition checked after each iteration.
    pub condition: Expression,
    /// The span from `repeat` to `condition`.
    pub span: Span,
}

impl fmt::Display for RepeatStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "repeat")?;
        writeln!(f, "{}", self.block)?;
        write!(f, "until {}", self.condition)
    }
}

simple_node_impl!(RepeatStatement);
