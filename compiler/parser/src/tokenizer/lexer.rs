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

use crate::tokenizer::Token;

use tny_errors::{ParserError, Result};
use tny_span::Span;

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::{Peekable, from_fn},
};

/// Eat an identifier, that is, a string matching '[a-zA-Z][a-zA-Z\d_]*', if any.
fn eat_identifier(input: &mut Peekable<impl Iterator<Item = char>>) -> Option<String> {
    input.peek().filter(|c| c.is_ascii_alphabetic())?;
    Some(from_fn(|| input.next_if(|c| c.is_ascii_alphanumeric() || c == &'_')).collect())
}

/// Checks if a char is a Unicode Bidirectional Override code point.
fn is_bidi_override(c: char) -> bool {
    let i = c as u32;
    (0x202A..=0x202E).contains(&i) || (0x2066..=0x2069).contains(&i)
}

impl Token {
    /// Returns a tuple: [(integer length, integer token)] if an integer can be eaten.
    /// An integer can be eaten if its bytes are at the front of the given `input` string.
    fn eat_integer(input: &mut Peekable<impl Iterator<Item = char>>) -> Result<(usize, Token)> {
        if input.peek().is_none() {
            return Err(ParserError::lexer_empty_input().into());
        }

        let mut int = String::new();
        while let Some(c) = input.next_if(|c| c.is_ascii_digit()) {
            if c == '0' && matches!(input.peek(), Some('x')) {
                int.push(c);
                int.push(input.next().expect("peeked character is present"));
                return Err(ParserError::lexer_hex_number_provided(int).into());
            }

            int.push(c);
        }

        Ok((int.len(), Token::Integer(int)))
    }

    /// Returns a tuple: [(token length, token)] if the next token can be eaten, otherwise errors.
    /// The next token can be eaten if the bytes at the front of the given `input` string can be scanned into a token.
    pub(crate) fn eat(input: &str) -> Result<(usize, Token)> {
        if input.is_empty() {
            return Err(ParserError::lexer_empty_input().into());
        }

        let mut input = input.chars().peekable();

        // Consumes a single character token.
        let single = |input: &mut Peekable<_>, token| {
            input.next();
            Ok((1, token))
        };
        // Consumes a character followed by `on` with `then` if found or `els` otherwise.
        let followed_by = |input: &mut Peekable<_>, on, then, els| {
            input.next();
            Ok(if input.next_if_eq(&on).is_some() { (2, then) } else { (1, els) })
        };

        match *input.peek().ok_or_else(ParserError::lexer_empty_input)? {
            x if x.is_ascii_whitespace() => return single(&mut input, Token::WhiteSpace),
            '"' => {
                let mut string = String::new();
                input.next();

                let mut ended = false;
                while let Some(c) = input.next() {
                    // Check for illegal characters.
                    if is_bidi_override(c) {
                        return Err(ParserError::lexer_bidi_override().into());
                    }

                    // Check for end string quotation mark.
                    if c == '"' {
                        ended = true;
                        break;
                    }
                    string.push(c);
                }

                if !ended {
                    return Err(ParserError::lexer_string_not_closed(string).into());
                }

                // + 2 to account for parsing quotation marks.
                return Ok((string.len() + 2, Token::StaticString(string)));
            }
            x if x.is_ascii_digit() => return Self::eat_integer(&mut input),
            '(' => return single(&mut input, Token::LeftParen),
            ')' => return single(&mut input, Token::RightParen),
            '*' => return single(&mut input, Token::Mul),
            '+' => return single(&mut input, Token::Add),
            ',' => return single(&mut input, Token::Comma),
            '-' => return single(&mut input, Token::Minus),
            '/' => {
                input.next();
                if input.next_if_eq(&'/').is_some() {
                    let mut comment = String::from("//");

                    while let Some(c) = input.next_if(|c| c != &'\n') {
                        if is_bidi_override(c) {
                            return Err(ParserError::lexer_bidi_override().into());
                        }
                        comment.push(c);
                    }

                    if let Some(newline) = input.next_if_eq(&'\n') {
                        comment.push(newline);
                    }

                    return Ok((comment.len(), Token::CommentLine(comment)));
                } else if input.next_if_eq(&'*').is_some() {
                    let mut comment = String::from("/*");

                    if input.peek().is_none() {
                        return Err(ParserError::lexer_empty_block_comment().into());
                    }

                    let mut ended = false;
                    while let Some(c) = input.next() {
                        if is_bidi_override(c) {
                            return Err(ParserError::lexer_bidi_override().into());
                        }
                        comment.push(c);
                        if c == '*' && input.next_if_eq(&'/').is_some() {
                            comment.push('/');
                            ended = true;
                            break;
                        }
                    }

                    if !ended {
                        return Err(ParserError::lexer_block_comment_does_not_close_before_eof(comment).into());
                    }
                    return Ok((comment.len(), Token::CommentBlock(comment)));
                }
                return Ok((1, Token::Div));
            }
            ':' => {
                input.next();
                if input.next_if_eq(&'=').is_some() {
                    return Ok((2, Token::Assign));
                }
                return Err(ParserError::could_not_lex(':').into());
            }
            ';' => return single(&mut input, Token::Semicolon),
            '<' => return followed_by(&mut input, '=', Token::LtEq, Token::Lt),
            '=' => return single(&mut input, Token::Eq),
            '>' => return followed_by(&mut input, '=', Token::GtEq, Token::Gt),
            _ => (),
        }
        if let Some(ident) = eat_identifier(&mut input) {
            return Ok((
                ident.len(),
                match &*ident {
                    "and" => Token::And,
                    "bool" => Token::Bool,
                    "do" => Token::Do,
                    "else" => Token::Else,
                    "end" => Token::End,
                    "false" => Token::False,
                    "if" => Token::If,
                    "int" => Token::Int,
                    "not" => Token::Not,
                    "or" => Token::Or,
                    "read" => Token::Read,
                    "repeat" => Token::Repeat,
                    "string" => Token::String,
                    "then" => Token::Then,
                    "true" => Token::True,
                    "until" => Token::Until,
                    "while" => Token::While,
                    "write" => Token::Write,
                    _ => Token::Ident(ident),
                },
            ));
        }

        Err(ParserError::could_not_lex(input.take_while(|c| *c != ';' && !c.is_whitespace()).collect::<String>()).into())
    }
}

/// A token covering a region of the source text.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SpannedToken {
    /// The token.
    pub token: Token,
    /// The region the token was scanned from.
    pub span: Span,
}

impl SpannedToken {
    /// Returns a dummy token at a dummy span.
    pub fn dummy() -> Self {
        Self { token: Token::WhiteSpace, span: Span::dummy() }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ ", self.token)?;
        self.span.fmt(f)
    }
}
