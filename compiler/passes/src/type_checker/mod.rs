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

pub mod check_expressions;
pub use check_expressions::*;

pub mod check_statements;
pub use check_statements::*;

pub mod checker;
pub use checker::*;

use crate::{Pass, SymbolTable};

use tny_ast::{Ast, ProgramVisitor};
use tny_errors::Result;
use tny_errors::emitter::Handler;

impl<'a> Pass for TypeChecker<'a> {
    type Input = (&'a Ast, &'a SymbolTable, &'a Handler);
    type Output = Result<()>;

    /// Runs the compiler pass.
    fn do_pass((ast, symbol_table, handler): Self::Input) -> Self::Output {
        let mut visitor = TypeChecker::new(symbol_table, handler);
        visitor.visit_program(ast.as_repr());
        handler.last_err().map_err(|e| *e)?;

        Ok(())
    }
}
