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

use crate::SymbolTable;

use tny_ast::*;
use tny_errors::emitter::Handler;
use tny_errors::{TnyWarning, TypeCheckerError, TypeCheckerWarning};

use indexmap::IndexSet;

/// A compiler pass during which the `SymbolTable` is created.
///
/// Declarations fill the table first, in program order, so that locations
/// are assigned the way the declarations read. The statement walk then
/// records every use of a name against its entry; a name without an entry
/// is reported once, at its first use.
pub struct SymbolTableCreator<'a> {
    /// The `SymbolTable` constructed by this compiler pass.
    pub(crate) symbol_table: SymbolTable,
    /// The error handler.
    handler: &'a Handler,
    /// The undeclared names already reported, so each is reported once.
    unresolved: IndexSet<String>,
}

impl<'a> SymbolTableCreator<'a> {
    pub fn new(handler: &'a Handler) -> Self {
        Self { symbol_table: Default::default(), handler, unresolved: Default::default() }
    }

    /// Records a use of `name` at `identifier`'s line, reporting the first
    /// use of an undeclared name.
    fn record(&mut self, identifier: &Identifier) {
        if !self.symbol_table.record_use(&identifier.name, identifier.span.line_start)
            && self.unresolved.insert(identifier.name.clone())
        {
            self.handler
                .emit_err(TypeCheckerError::undeclared_identifier(&identifier.name, &identifier.span));
        }
    }

    /// Warns about variables that are declared but never used.
    pub(crate) fn warn_unused(&self) {
        for (name, symbol) in self.symbol_table.variables() {
            if symbol.lines.len() == 1 {
                self.handler.emit_warning(TnyWarning::TypeCheckerWarning(
                    TypeCheckerWarning::unused_variable(name, &symbol.span),
                ));
            }
        }
    }
}

impl<'a> ExpressionVisitor<'a> for SymbolTableCreator<'a> {
    type AdditionalInput = ();
    type Output = ();

    fn visit_identifier(&mut self, input: &'a Identifier, _additional: &Self::AdditionalInput) {
        self.record(input);
    }
}

impl<'a> StatementVisitor<'a> for SymbolTableCreator<'a> {
    fn visit_assign(&mut self, input: &'a AssignStatement) {
        self.record(&input.place);
        self.visit_expression(&input.value, &Default::default());
    }

    fn visit_read(&mut self, input: &'a ReadStatement) {
        self.record(&input.variable);
    }
}

impl<'a> ProgramVisitor<'a> for SymbolTableCreator<'a> {
    fn visit_declaration(&mut self, input: &'a Declaration) {
        for variable in &input.variables {
            if let Err(err) = self.symbol_table.insert_variable(&variable.name, input.type_, &variable.span) {
                self.handler.emit_err(err);
            }
        }
    }
}
