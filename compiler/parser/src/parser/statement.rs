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

/// The tokens that terminate a statement sequence.
const SEQUENCE_TERMINATORS: &[Token] = &[Token::Eof, Token::End, Token::Else, Token::Until];

impl ParserContext<'_> {
    /// Returns a [`Statement`] AST node if the next tokens represent a statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
        match &self.token.token {
            Token::If => Ok(Statement::Conditional(self.parse_conditional_statement()?)),
            Token::Read => Ok(Statement::Read(self.parse_read_statement()?)),
            Token::Repeat => Ok(Statement::Repeat(self.parse_repeat_statement()?)),
            Token::While => Ok(Statement::While(self.parse_while_statement()?)),
            Token::Write => Ok(Statement::Write(self.parse_write_statement()?)),
            Token::Ident(_) => Ok(Statement::Assign(Box::new(self.parse_assign_statement()?))),
            Token::Eof => Err(ParserError::unexpected_eof(&self.token.span).into()),
            _ => Err(ParserError::unexpected_token(&self.token.token, &self.token.span).into()),
        }
    }

    /// Returns a [`Block`] AST node for a `statement {';' statement}` sequence.
    ///
    /// The sequence runs until one of `<eof>`, `end`, `else`, or `until`. A
    /// failed statement is reported and the parser skips to the next `;` or
    /// terminator, so one bad statement does not hide the diagnostics of the
    /// statements after it.
    pub(super) fn parse_statement_sequence(&mut self) -> Block {
        let start = self.token.span.clone();
        let mut statements = Vec::new();

        self.parse_statement_into(&mut statements);
        while !SEQUENCE_TERMINATORS.iter().any(|x| self.check(x)) {
            // A missing ';' is reported and the next statement parses anyway.
            self.expect_or_report(&Token::Semicolon);
            self.parse_statement_into(&mut statements);
        }

        let span = match statements.is_empty() {
            true => start,
            false => start + self.prev_token.span.clone(),
        };
        Block { statements, span }
    }

    /// Parses one statement into `statements`, recovering on failure.
    fn parse_statement_into(&mut self, statements: &mut Vec<Statement>) {
        match self.parse_statement() {
            Ok(statement) => statements.push(statement),
            Err(err) => {
                self.handler.emit_err(err);
                self.recover_to_statement_boundary();
            }
        }
    }

    /// Skips tokens until the next `;` or sequence terminator.
    fn recover_to_statement_boundary(&mut self) {
        while !SEQUENCE_TERMINATORS.iter().any(|x| self.check(x)) && !self.check(&Token::Semicolon) {
            self.bump();
        }
    }

    /// Returns an [`AssignStatement`] AST node if the next tokens represent an assignment.
    fn parse_assign_statement(&mut self) -> Result<AssignStatement> {
        let place = self.expect_identifier()?;

        if !self.eat(&Token::Assign) {
            // A common confusion: `=` is equality, `:=` is assignment. Report
            // the targeted hint and consume the `=` to resynchronise; other
            // mismatches do not consume.
            if self.check(&Token::Eq) {
                self.emit_err(ParserError::eq_instead_of_assign(&self.token.span));
                self.bump();
            } else {
                self.emit_err(ParserError::unexpected(
                    &self.token.token,
                    format!("'{}'", Token::Assign),
                    &self.token.span,
                ));
            }
        }

        let value = self.parse_expression()?;
        Ok(AssignStatement { span: &place.span + value.span(), place, value })
    }

    /// Returns a [`ReadStatement`] AST node if the next tokens represent a read statement.
    fn parse_read_statement(&mut self) -> Result<ReadStatement> {
        let start = self.expect(&Token::Read)?;
        let variable = self.expect_identifier()?;
        Ok(ReadStatement { span: start + variable.span.clone(), variable })
    }

    /// Returns a [`WriteStatement`] AST node if the next tokens represent a write statement.
    fn parse_write_statement(&mut self) -> Result<WriteStatement> {
        let start = self.expect(&Token::Write)?;
        let expression = self.parse_expression()?;
        Ok(WriteStatement { span: start + expression.span().clone(), expression })
    }

    /// Returns a [`ConditionalStatement`] AST node if the next tokens represent an `if` statement.
    fn parse_conditional_statement(&mut self) -> Result<ConditionalStatement> {
        let start = self.expect(&Token::If)?;
        let condition = self.parse_boolean_or_expression()?;
        self.expect_or_report(&Token::Then);
        let then = self.parse_statement_sequence();
        let otherwise = self.eat(&Token::Else).then(|| self.parse_statement_sequence());
        self.expect_or_report(&Token::End);

        Ok(ConditionalStatement { condition, then, otherwise, span: start + self.prev_token.span.clone() })
    }

    /// Returns a [`RepeatStatement`] AST node if the next tokens represent a `repeat` statement.
    fn parse_repeat_statement(&mut self) -> Result<RepeatStatement> {
        let start = self.expect(&Token::Repeat)?;
        let block = self.parse_statement_sequence();
        self.expect_or_report(&Token::Until);
        let condition = self.parse_boolean_or_expression()?;

        Ok(RepeatStatement { span: start + condition.span().clone(), block, condition })
    }

    /// Returns a [`WhileStatement`] AST node if the next tokens represent a `while` statement.
    fn parse_while_statement(&mut self) -> Result<WhileStatement> {
        let start = self.expect(&Token::While)?;
        let condition = self.parse_boolean_or_expression()?;
        self.expect_or_report(&Token::Do);
        let block = self.parse_statement_sequence();
        self.expect_or_report(&Token::End);

        Ok(WhileStatement { condition, block, span: start + self.prev_token.span.clone() })
    }
}
