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

pub mod code_buffer;
pub use code_buffer::*;

pub mod generator;
pub use generator::*;

mod visit_expressions;

mod visit_program;

mod visit_statements;

use crate::Pass;

use tny_ast::Ast;
use tny_errors::Result;
use tny_errors::emitter::Handler;

impl<'a> Pass for CodeGenerator<'a> {
    type Input = (&'a Ast, &'a Handler);
    type Output = Result<String>;

    /// Runs the compiler pass.
    fn do_pass((ast, handler): Self::Input) -> Self::Output {
        let mut generator = CodeGenerator::new(handler);
        let listing = generator.visit_program(ast.as_repr());
        generator.handler.last_err().map_err(|e| *e)?;

        Ok(listing)
    }
}
