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

use crate::{Node, simple_node_impl};

use tny_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier in a program.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// The name of the identifier.
    pub name: String,
    /// A span locating where the identifier occurred in the source.
    pub span: Span,
}

impl Identifier {
    /// Constructs a new identifier with `name` and the given `span`.
    pub fn new(name: String, span: Span) -> Self {
        Self { name, span }
    }
}

simple_node_impl!(Identifier);

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
