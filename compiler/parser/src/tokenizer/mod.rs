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

//! The tokenizer to convert TINY code text into tokens.
//!
//! This module contains the [`tokenize()`] method which breaks down string text into tokens,
//! separated by whitespace.

pub(crate) mod token;
pub use self::token::KEYWORD_TOKENS;
pub(crate) use self::token::*;

pub(crate) mod lexer;
pub(crate) use self::lexer::*;

use tny_errors::Result;
use tny_span::Span;

use std::{iter, sync::Arc};

/// Creates a new vector of spanned tokens from the given source code text.
pub(crate) fn tokenize(path: &str, source: &str) -> Result<Vec<SpannedToken>> {
    tokenize_iter(path, source).collect()
}

/// Yields spanned tokens from the given source code text.
///
/// Tracks lines and columns as it goes; the span of every token carries the
/// text of the line it starts on for diagnostics.
pub(crate) fn tokenize_iter<'a>(path: &'a str, source: &'a str) -> impl 'a + Iterator<Item = Result<SpannedToken>> {
    let path = Arc::new(path.to_string());
    let mut index = 0usize;
    let mut line_no = 1usize;
    let mut line_start = 0usize;
    iter::from_fn(move || {
        while source.len() > index {
            let (token_len, token) = match Token::eat(&source[index..]) {
                Err(e) => return Some(Err(e)),
                Ok(t) => t,
            };

            let lexeme = &source[index..index + token_len];
            let col_start = index - line_start + 1;
            let start_line_no = line_no;
            let start_line_start = line_start;

            // Account for the lines the lexeme spans.
            for (offset, byte) in lexeme.bytes().enumerate() {
                if byte == b'\n' {
                    line_no += 1;
                    line_start = index + offset + 1;
                }
            }
            index += token_len;

            match token {
                Token::WhiteSpace => continue,
                _ => {
                    let content = line_content(source, start_line_start);
                    let col_stop = index - line_start + 1;
                    let span = Span::new(start_line_no, line_no, col_start, col_stop, path.clone(), content);
                    return Some(Ok(SpannedToken { token, span }));
                }
            }
        }

        None
    })
}

/// Returns the text of the line beginning at byte `line_start`.
fn line_content(source: &str, line_start: usize) -> String {
    let rest = &source[line_start..];
    rest.lines().next().unwrap_or(rest).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize("test.tny", source)
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn test_tokenizer() {
        let raw = r#"
    "test"
    test_ident
    12345
    bool
    int
    string
    and
    do
    else
    end
    false
    if
    not
    or
    read
    repeat
    then
    true
    until
    while
    write
    (
    )
    *
    +
    ,
    -
    /
    :=
    ;
    <
    <=
    =
    >
    >=
    // test
    /* test */
    "#;
        let tokens = tokenize("test.tny", raw).unwrap();
        let mut output = String::new();
        for SpannedToken { token, .. } in tokens.iter() {
            output += &format!("{token} ");
        }
        assert_eq!(
            output,
            r#""test" test_ident 12345 bool int string and do else end false if not or read repeat then true until while write ( ) * + , - / := ; < <= = > >= // test
 /* test */ "#
        );
    }

    #[test]
    fn test_spans() {
        let raw = "int x;\nx := 3;\nwrite x";
        let tokens = tokenize("test.tny", raw).unwrap();

        let x_assign = &tokens[3];
        assert_eq!(x_assign.token, Token::Ident("x".to_string()));
        assert_eq!(x_assign.span.line_start, 2);
        assert_eq!(x_assign.span.col_start, 1);
        assert_eq!(x_assign.span.content, "x := 3;");

        let write = &tokens[7];
        assert_eq!(write.token, Token::Write);
        assert_eq!(write.span.line_start, 3);
        assert_eq!(write.span.content, "write x");
    }

    #[test]
    fn test_keywords_lex_as_keywords() {
        assert_eq!(tokens("if whilex while0 while"), vec![
            Token::If,
            Token::Ident("whilex".to_string()),
            Token::Ident("while0".to_string()),
            Token::While,
        ]);
    }

    #[test]
    fn test_assign_requires_colon_equals() {
        assert_eq!(tokens("x := 3"), vec![
            Token::Ident("x".to_string()),
            Token::Assign,
            Token::Integer("3".to_string()),
        ]);
        assert!(tokenize("test.tny", "x : 3").is_err());
    }

    #[test]
    fn test_unclosed_string_errors() {
        assert!(tokenize("test.tny", "\"abc").is_err());
    }
}
