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

use tny_ast::Type;
use tny_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An entry in the symbol table for a single declared variable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSymbol {
    /// The declared type of the variable.
    pub type_: Type,
    /// The memory location assigned at declaration; never reassigned.
    pub location: u32,
    /// The lines on which the variable is declared or used, in program
    /// order. The first entry is always the declaration line.
    pub lines: Vec<usize>,
    /// The span of the declaring identifier.
    pub span: Span,
}

impl fmt::Display for VariableSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} @ {}", self.location, self.type_, self.span)
    }
}
