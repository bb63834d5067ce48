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

/// An `if condition then block (else otherwise)? end` statement.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ConditionalStatement {
    /// The `bool`-typed condition deciding what to evaluate.
    pub condition: Expression,
    /// The sequence to evaluate in case `condition` yields `true`.
    pub then: Block,
    /// The sequence, if any, to evaluate when `condition` yields `false`.
    pub otherwise: Option<Block>,
    /// The span from `if` to `end`.
    pub span: Span,
}

impl fmt::Display for ConditionalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "if {} then", self.condition)?;
        writeln!(f, "{}", self.then)?;
        if let Some(otherwise) = &self.otherwise {
            writeln!(f, "else")?;
            writeln!(f, "{otherwise}")?;
        }
        write!(f, "end")
    }
}

simple_node_impl!(ConditionalStatement);
