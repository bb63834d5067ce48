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

pub mod assign;
pub use assign::*;

pub mod block;
pub use block::*;

pub mod conditional;
pub use conditional::*;

pub mod read;
pub use read::*;

pub mod repeat;
pub use repeat::*;

pub mod while_;
pub use while_::*;

pub mod write;
pub use write::*;

use crate::Node;

use tny_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Program statement that defines some action to be carried out.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Statement {
    /// An assignment statement.
    Assign(Box<AssignStatement>),
    /// An `if` statement.
    Conditional(ConditionalStatement),
    /// A `read` statement.
    Read(ReadStatement),
    /// A `repeat`-`until` statement.
    Repeat(RepeatStatement),
    /// A `while` statement.
    While(WhileStatement),
    /// A `write` statement.
    Write(WriteStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign(x) => x.fmt(f),
            Statement::Conditional(x) => x.fmt(f),
            Statement::Read(x) => x.fmt(f),
            Statement::Repeat(x) => x.fmt(f),
            Statement::While(x) => x.fmt(f),
            Statement::Write(x) => x.fmt(f),
        }
    }
}

impl Node for Statement {
    fn span(&self) -> &Span {
        use Statement::*;
        match self {
            Assign(n) => n.span(),
            Conditional(n) => n.span(),
            Read(n) => n.span(),
            Repeat(n) => n.span(),
            While(n) => n.span(),
            Write(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Statement::*;
        match self {
            Assign(n) => n.set_span(span),
            Conditional(n) => n.set_span(span),
            Read(n) => n.set_span(span),
            Repeat(n) => n.set_span(span),
            While(n) => n.set_span(span),
            Write(n) => n.set_span(span),
        }
    }
}
