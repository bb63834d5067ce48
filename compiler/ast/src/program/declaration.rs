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

use crate::{Identifier, Node, Type, simple_node_impl};

use tny_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A declaration `type_ a, b, c;` introducing variables of a single type.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Declaration {
    /// The declared type.
    pub type_: Type,
    /// The variables introduced by this declaration, in source order.
    pub variables: Vec<Identifier>,
    /// The span from the type keyword to the closing `;`.
    pub span: Span,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_ = match self.type_ {
            Type::Boolean => "bool",
            Type::Integer => "int",
            Type::String => "string",
            Type::Void => "void",
        };
        write!(f, "{type_} ")?;
        for (index, variable) in self.variables.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variable}")?;
        }
        write!(f, ";")
    }
}

simple_node_impl!(Declaration);
