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

use tny_ast::{BinaryExpression, BinaryOperation, ErrExpression, Expression, Identifier, Literal, UnaryExpression};

/// Implement the necessary methods to visit nodes in the AST.
//
// This pass requires a post-order traversal with a value-return channel, so
// it is implemented directly instead of through the `Visitor` traits: each
// expression visit returns the operand text naming the expression's value.
// Identifiers and literals materialise directly and allocate no temporary;
// operator nodes emit one instruction into a fresh temporary.
impl CodeGenerator<'_> {
    pub(crate) fn visit_expression(&mut self, input: &Expression) -> String {
        match input {
            Expression::Binary(expr) => self.visit_binary(expr),
            Expression::Err(expr) => self.visit_err(expr),
            Expression::Identifier(expr) => self.visit_identifier(expr),
            Expression::Literal(expr) => self.visit_literal(expr),
            Expression::Unary(expr) => self.visit_unary(expr),
        }
    }

    fn visit_identifier(&mut self, input: &Identifier) -> String {
        input.name.clone()
    }

    fn visit_literal(&mut self, input: &Literal) -> String {
        match input {
            Literal::Integer(value, _) => value.to_string(),
            // The scanner stores booleans as 1/0, and they materialise the
            // same way in the listing.
            Literal::Boolean(value, _) => u8::from(*value).to_string(),
            Literal::String(value, _) => format!("\"{value}\""),
        }
    }

    fn visit_binary(&mut self, input: &BinaryExpression) -> String {
        let left_operand = self.visit_expression(&input.left);
        let right_operand = self.visit_expression(&input.right);

        let opcode = match input.op {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "*",
            BinaryOperation::Div => "/",
            BinaryOperation::Lt => "<",
            BinaryOperation::Le => "<=",
            BinaryOperation::Gt => ">",
            BinaryOperation::Ge => ">=",
            BinaryOperation::Eq => "=",
            BinaryOperation::And => "and",
            BinaryOperation::Or => "or",
        };

        let destination = self.buffer.new_temp();
        self.buffer.emit(opcode, left_operand, right_operand, destination.clone());

        destination
    }

    fn visit_unary(&mut self, input: &UnaryExpression) -> String {
        let operand = self.visit_expression(&input.receiver);

        let destination = self.buffer.new_temp();
        self.buffer.emit("not", operand, "", destination.clone());

        destination
    }

    fn visit_err(&mut self, _input: &ErrExpression) -> String {
        // An `Err` subtree has no lowering; the error latch keeps it out of
        // this pass, and the fallback instruction covers the rest.
        self.buffer.emit(CodeBuffer::UNKNOWN_OPERATOR, "", "", "");
        String::new()
    }
}
