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

use tny_errors::ParserError;

/// The tokens that may open a declaration in the program prologue.
const TYPE_TOKENS: &[Token] = &[Token::Int, Token::Bool, Token::String];

impl ParserContext<'_> {
    /// Returns a [`Program`] AST if all tokens can be consumed and represent a valid TINY program.
    pub fn parse_program(&mut self) -> Result<Program> {
        let declarations = self.parse_declarations();
        let block = self.parse_statement_sequence();

        if self.has_next() {
            self.emit_err(ParserError::expected_eof(&self.token.token, &self.token.span));
        }

        Ok(Program { declarations, block })
    }

    /// Parses the declaration prologue: zero or more `type_spec ID {',' ID} ';'` lines.
    ///
    /// Declarations are only recognised here, before the first statement.
    fn parse_declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        while TYPE_TOKENS.iter().any(|x| self.check(x)) {
            match self.parse_declaration() {
                Ok(declaration) => declarations.push(declaration),
                Err(err) => {
                    self.handler.emit_err(err);
                    self.recover_past_semicolon();
                }
            }
        }
        declarations
    }

    /// Returns a [`Declaration`] AST node for a single `type_spec ID {',' ID} ';'` line.
    fn parse_declaration(&mut self) -> Result<Declaration> {
        let type_ = match &self.token.token {
            Token::Bool => Type::Boolean,
            Token::Int => Type::Integer,
            Token::String => Type::String,
            _ => unreachable!("`parse_declaration` requires a type token"),
        };
        let start = self.token.span.clone();
        self.bump();

        let mut variables = vec![self.expect_identifier()?];
        while self.eat(&Token::Comma) {
            variables.push(self.expect_identifier()?);
        }
        let end = self.expect(&Token::Semicolon)?;

        Ok(Declaration { type_, variables, span: start + end })
    }

    /// Skips past the next `;`, or up to the end of the file.
    fn recover_past_semicolon(&mut self) {
        while self.has_next() && !self.eat(&Token::Semicolon) {
            self.bump();
        }
    }
}
