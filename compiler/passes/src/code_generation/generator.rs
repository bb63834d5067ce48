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

use crate::CodeBuffer;

use tny_errors::emitter::Handler;

/// A compiler pass lowering a type-checked program to three-address code.
///
/// The generator walks the tree postorder and emits through a [`CodeBuffer`],
/// reserving slots for forward jumps and backpatching them once their labels
/// are placed.
pub struct CodeGenerator<'a> {
    /// The error handler.
    pub(crate) handler: &'a Handler,
    /// The instruction buffer the generator emits into.
    pub(crate) buffer: CodeBuffer,
}

impl<'a> CodeGenerator<'a> {
    /// Returns a new code generator.
    pub fn new(handler: &'a Handler) -> Self {
        Self { handler, buffer: CodeBuffer::new() }
    }
}
