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

use super::*;

use tny_ast::Node;
use tny_errors::ParserError;

/// The relational operators; at most one may appear per comparison.
const RELATIONAL_TOKENS: &[Token] = &[Token::Lt, Token::LtEq, Token::Gt, Token::GtEq, Token::Eq];

impl ParserContext<'_> {
    /// Returns an [`Expression`] AST node if the next tokens represent an expression.
    ///
    /// This is the entry point used by assignment and `write` statements; a
    /// string literal is permitted only at this level.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        if let Token::StaticString(string) = &self.token.token {
            let string = string.clone();
            self.bump();
            return Ok(Expression::Literal(Literal::String(string, self.prev_token.span.clone())));
        }
        self.parse_boolean_or_expression()
    }

    /// Constructs a binary expression `left op right`.
    fn bin_expr(left: Expression, right: Expression, op: BinaryOperation) -> Expression {
        Expression::Binary(BinaryExpression {
            span: left.span() + right.span(),
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Parses a left-associative binary expression `<left> token <right>` using `f` for left/right.
    /// The `token` is translated to `op` in the AST.
    fn parse_bin_expr(
        &mut self,
        tokens: &[Token],
        mut f: impl FnMut(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let mut expr = f(self)?;
        while let Some(op) = self.eat_bin_op(tokens) {
            expr = Self::bin_expr(expr, f(self)?, op);
        }
        Ok(expr)
    }

    /// Eats one of binary operators matching any in `tokens`.
    fn eat_bin_op(&mut self, tokens: &[Token]) -> Option<BinaryOperation> {
        self.eat_any(tokens).then(|| match &self.prev_token.token {
            Token::Add => BinaryOperation::Add,
            Token::Minus => BinaryOperation::Sub,
            Token::Mul => BinaryOperation::Mul,
            Token::Div => BinaryOperation::Div,
            Token::Lt => BinaryOperation::Lt,
            Token::LtEq => BinaryOperation::Le,
            Token::Gt => BinaryOperation::Gt,
            Token::GtEq => BinaryOperation::Ge,
            Token::Eq => BinaryOperation::Eq,
            Token::And => BinaryOperation::And,
            Token::Or => BinaryOperation::Or,
            _ => unreachable!("`eat_bin_op` shouldn't produce this"),
        })
    }

    /// Returns an [`Expression`] AST node if the next tokens represent
    /// a binary OR expression.
    ///
    /// Otherwise, tries to parse the next token using [`Self::parse_boolean_and_expression`].
    pub(super) fn parse_boolean_or_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Or], Self::parse_boolean_and_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent
    /// a binary AND expression.
    ///
    /// Otherwise, tries to parse the next token using [`Self::parse_not_expression`].
    fn parse_boolean_and_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::And], Self::parse_not_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// boolean factor: a boolean literal, a prefix `not`, or a comparison.
    fn parse_not_expression(&mut self) -> Result<Expression> {
        if self.eat(&Token::Not) {
            let span = self.prev_token.span.clone();
            let receiver = self.parse_not_expression()?;
            return Ok(Expression::Unary(UnaryExpression {
                span: &span + receiver.span(),
                op: UnaryOperation::Not,
                receiver: Box::new(receiver),
            }));
        }
        if self.eat_any(&[Token::True, Token::False]) {
            let value = matches!(self.prev_token.token, Token::True);
            return Ok(Expression::Literal(Literal::Boolean(value, self.prev_token.span.clone())));
        }
        self.parse_relational_expression()
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// relational comparison.
    ///
    /// The relational operators do not associate: at most one may appear,
    /// so `a < b < c` parses as `(a < b)` followed by a stray `< c`.
    fn parse_relational_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_additive_expression()?;
        if let Some(op) = self.eat_bin_op(RELATIONAL_TOKENS) {
            let right = self.parse_additive_expression()?;
            expr = Self::bin_expr(expr, right, op);
        }
        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary addition or subtraction.
    ///
    /// Otherwise, tries to parse the next token using [`Self::parse_multiplicative_expression`].
    fn parse_additive_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Add, Token::Minus], Self::parse_multiplicative_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary multiplication or division.
    ///
    /// Otherwise, tries to parse the next token using [`Self::parse_primary_expression`].
    fn parse_multiplicative_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Mul, Token::Div], Self::parse_primary_expression)
    }

    /// Returns an [`Expression`] AST node if the next token is a primary
    /// expression: an integer literal, an identifier, or a parenthesized
    /// expression.
    ///
    /// An unexpected token is reported and consumed, and an [`ErrExpression`]
    /// takes the place of the subtree, so that parsing continues.
    fn parse_primary_expression(&mut self) -> Result<Expression> {
        match &self.token.token {
            Token::Integer(text) => {
                let text = text.clone();
                self.bump();
                let span = self.prev_token.span.clone();
                match text.parse::<i64>() {
                    Ok(value) => Ok(Expression::Literal(Literal::Integer(value, span))),
                    Err(_) => {
                        self.emit_err(ParserError::integer_too_large(text, &span));
                        Ok(Expression::Err(ErrExpression { span }))
                    }
                }
            }
            Token::Ident(_) => {
                let identifier = self.eat_identifier().expect("checked that the token is an identifier");
                Ok(Expression::Identifier(identifier))
            }
            Token::LeftParen => {
                self.bump();
                let expr = self.parse_boolean_or_expression()?;
                self.expect_or_report(&Token::RightParen);
                Ok(expr)
            }
            Token::Eof => {
                self.emit_err(ParserError::unexpected_eof(&self.token.span));
                Ok(Expression::Err(ErrExpression { span: self.token.span.clone() }))
            }
            _ => {
                self.emit_err(ParserError::unexpected_token(&self.token.token, &self.token.span));
                self.bump();
                Ok(Expression::Err(ErrExpression { span: self.prev_token.span.clone() }))
            }
        }
    }
}
