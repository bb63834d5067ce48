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

impl<'a> ExpressionVisitor<'a> for TypeChecker<'a> {
    type AdditionalInput = ();
    type Output = Type;

    fn visit_binary(&mut self, input: &'a BinaryExpression, _additional: &Self::AdditionalInput) -> Self::Output {
        let left = self.visit_expression(&input.left, &Default::default());
        let right = self.visit_expression(&input.right, &Default::default());

        if left != right {
            self.emit_err(TypeCheckerError::operand_types_not_equal(left, right, input.span()));
        }

        match input.op.is_boolean() {
            true => Type::Boolean,
            false => Type::Integer,
        }
    }

    fn visit_err(&mut self, _input: &'a ErrExpression, _additional: &Self::AdditionalInput) -> Self::Output {
        Type::Void
    }

    fn visit_identifier(&mut self, input: &'a Identifier, _additional: &Self::AdditionalInput) -> Self::Output {
        self.lookup_type(&input.name)
    }

    fn visit_literal(&mut self, input: &'a Literal, _additional: &Self::AdditionalInput) -> Self::Output {
        match input {
            Literal::Boolean(..) => Type::Boolean,
            Literal::Integer(..) => Type::Integer,
            Literal::String(..) => Type::String,
        }
    }

    fn visit_unary(&mut self, input: &'a UnaryExpression, _additional: &Self::AdditionalInput) -> Self::Output {
        let receiver = self.visit_expression(&input.receiver, &Default::default());

        if receiver != Type::Boolean {
            self.emit_err(TypeCheckerError::not_operand_not_boolean(receiver, input.span()));
        }

        Type::Boolean
    }
}
