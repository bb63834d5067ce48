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

use tny_ast::Type;
use tny_errors::TypeCheckerError;
use tny_errors::emitter::Handler;

/// A compiler pass checking the type rules over the syntax tree.
///
/// Types flow bottom-up: each expression visit returns the type of the
/// expression, with [`Type::Void`] standing in where no type could be
/// resolved. Each violation produces one diagnostic and checking continues.
pub struct TypeChecker<'a> {
    /// The symbol table produced by the symbol table creation pass.
    pub(crate) symbol_table: &'a SymbolTable,
    /// The error handler.
    pub(crate) handler: &'a Handler,
}

impl<'a> TypeChecker<'a> {
    /// Returns a new type checker given the symbol table and error handler.
    pub fn new(symbol_table: &'a SymbolTable, handler: &'a Handler) -> Self {
        Self { symbol_table, handler }
    }

    /// Emits the type checker error `err`.
    pub(crate) fn emit_err(&self, err: TypeCheckerError) {
        self.handler.emit_err(err);
    }

    /// Returns the declared type of `name`, or [`Type::Void`] if absent.
    pub(crate) fn lookup_type(&self, name: &str) -> Type {
        self.symbol_table
            .lookup_variable(name)
            .map(|variable| variable.type_)
            .unwrap_or(Type::Void)
    }
}
