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

use crate::TypeChecker;

use tny_ast::*;
use tny_errors::TypeCheckerError;

impl<'a> StatementVisitor<'a> for TypeChecker<'a> {
    fn visit_assign(&mut self, input: &'a AssignStatement) {
        let value = self.visit_expression(&input.value, &Default::default());
        // The assignment takes the declared type of the assigned variable.
        let declared = self.lookup_type(&input.place.name);

        if value != declared {
            self.emit_err(TypeCheckerError::assignment_type_mismatch(value, declared, input.value.span()));
        }
    }

    fn visit_conditional(&mut self, input: &'a ConditionalStatement) {
        let condition = self.visit_expression(&input.condition, &Default::default());
        if condition != Type::Boolean {
            self.emit_err(TypeCheckerError::if_test_not_boolean(condition, input.condition.span()));
        }

        self.visit_block(&input.then);
        if let Some(otherwise) = &input.otherwise {
            self.visit_block(otherwise);
        }
    }

    fn visit_read(&mut self, _input: &'a ReadStatement) {
        // A read takes the declared type of its variable; there is nothing
        // further to constrain.
    }

    fn visit_repeat(&mut self, input: &'a RepeatStatement) {
        self.visit_block(&input.block);

        let condition = self.visit_expression(&input.condition, &Default::default());
        if condition != Type::Boolean {
            self.emit_err(TypeCheckerError::repeat_test_not_boolean(condition, input.condition.span()));
        }
    }

    fn visit_while(&mut self, input: &'a WhileStatement) {
        let condition = self.visit_expression(&input.condition, &Default::default());
        if condition != Type::Boolean {
            self.emit_err(TypeCheckerError::while_test_not_boolean(condition, input.condition.span()));
        }

        self.visit_block(&input.block);
    }

    fn visit_write(&mut self, input: &'a WriteStatement) {
        let written = self.visit_expression(&input.expression, &Default::default());
        if written != Type::Integer {
            self.emit_err(TypeCheckerError::write_non_integer(written, input.expression.span()));
        }
    }
}

impl<'a> ProgramVisitor<'a> for TypeChecker<'a> {}
