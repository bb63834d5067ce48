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

use crate::{CodeBuffer, CodeGenerator};

use tny_ast::Program;

impl CodeGenerator<'_> {
    /// Lowers the whole program and renders the final listing.
    ///
    /// Declarations produce no code; locations are a symbol table affair.
    /// After the statement sequence, the reserved end label `L0` closes the
    /// listing.
    pub fn visit_program(&mut self, input: &Program) -> String {
        self.visit_block(&input.block);
        self.buffer.emit("label", "", "", CodeBuffer::END_LABEL);
        self.buffer.output()
    }
}
