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

use crate::create_messages;

use std::fmt::Display;

create_messages!(
    /// ParserError enum that represents all the errors for the `tny-parser` crate.
    ParserError,
    code_mask: 370000i32,
    code_prefix: "PAR",

    /// For when the parser encountered a token it did not expect at this position.
    @formatted
    unexpected_token {
        args: (found: impl Display),
        msg: format!("unexpected token: '{found}'"),
        help: None,
    }

    /// For when the parser expected one token but found another.
    @formatted
    unexpected {
        args: (found: impl Display, expected: impl Display),
        msg: format!("expected {expected} -- found '{found}'"),
        help: None,
    }

    /// For when the parser needed an identifier but found something else.
    @formatted
    expected_identifier {
        args: (found: impl Display),
        msg: format!("expected an identifier -- found '{found}'"),
        help: None,
    }

    /// For when an assignment was written with `=` instead of `:=`.
    @formatted
    eq_instead_of_assign {
        args: (),
        msg: "unexpected '=': assignment in TINY is written ':='".to_string(),
        help: Some("replace '=' with ':='".to_string()),
    }

    /// For when the source ran out in the middle of a construct.
    @formatted
    unexpected_eof {
        args: (),
        msg: "unexpected end of file".to_string(),
        help: None,
    }

    /// For when a parenthesized expression was not closed.
    @formatted
    unclosed_paren {
        args: (found: impl Display),
        msg: format!("parenthesis matching error -- expected ')' but found '{found}'"),
        help: None,
    }

    /// For when the program's statement sequence ended before the source did.
    @formatted
    expected_eof {
        args: (found: impl Display),
        msg: format!("expected the end of the program -- found '{found}'"),
        help: None,
    }

    /// For when an integer literal does not fit the integer type.
    @formatted
    integer_too_large {
        args: (value: impl Display),
        msg: format!("integer literal '{value}' is too large"),
        help: None,
    }

    /// For when the lexer ran out of characters mid-token.
    @backtraced
    lexer_empty_input {
        args: (),
        msg: "Expected more characters to lex but found none.".to_string(),
        help: None,
    }

    /// For when a string literal was never closed.
    @backtraced
    lexer_string_not_closed {
        args: (input: impl Display),
        msg: format!("Expected a closed string but found `{input}`."),
        help: None,
    }

    /// For when a block comment was never closed.
    @backtraced
    lexer_block_comment_does_not_close_before_eof {
        args: (input: impl Display),
        msg: format!("Block comment does not close with content: `{input}`."),
        help: None,
    }

    /// For when a block comment was empty and unclosed.
    @backtraced
    lexer_empty_block_comment {
        args: (),
        msg: "Empty block comment.".to_string(),
        help: None,
    }

    /// For when a bidi override code point was encountered.
    @backtraced
    lexer_bidi_override {
        args: (),
        msg: "Unicode bidi override code point encountered.".to_string(),
        help: None,
    }

    /// For when a hex number is provided.
    @backtraced
    lexer_hex_number_provided {
        args: (input: impl Display),
        msg: format!("A hex number `{input}..` was provided but hex is not allowed."),
        help: None,
    }

    /// For when the lexer could not lex some text.
    @backtraced
    could_not_lex {
        args: (input: impl Display),
        msg: format!("Could not lex the following content: `{input}`."),
        help: None,
    }
);
