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

use crate::{Identifier, Node};

use tny_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

mod binary;
pub use binary::*;
mod err;
pub use err::*;
mod literal;
pub use literal::*;
mod unary;
pub use unary::*;

/// Expression that evaluates to a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// A binary expression, e.g., `42 + 24`.
    Binary(BinaryExpression),
    /// An expression of type "error".
    /// Will result in a compile error eventually.
    Err(ErrExpression),
    /// An identifier expression.
    Identifier(Identifier),
    /// A literal expression.
    Literal(Literal),
    /// An unary expression.
    Unary(UnaryExpression),
}

impl Node for Expression {
    fn span(&self) -> &Span {
        use Expression::*;
        match self {
            Binary(n) => n.span(),
            Err(n) => n.span(),
            Identifier(n) => n.span(),
            Literal(n) => n.span(),
            Unary(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            Binary(n) => n.set_span(span),
            Err(n) => n.set_span(span),
            Identifier(n) => n.set_span(span),
            Literal(n) => n.set_span(span),
            Unary(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expression::*;
        match self {
            Binary(n) => n.fmt(f),
            Err(n) => n.fmt(f),
            Identifier(n) => n.fmt(f),
            Literal(n) => n.fmt(f),
            Unary(n) => n.fmt(f),
        }
    }
}
