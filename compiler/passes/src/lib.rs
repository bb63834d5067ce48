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

//! The compiler passes for the TINY compiler.
//!
//! A pass consumes the [`Ast`](tny_ast::Ast) (and whatever earlier passes
//! produced) and either enriches the compilation with new information, such
//! as the symbol table, or produces the final three-address code listing.

#![forbid(unsafe_code)]

pub mod common;
pub use common::*;

pub mod code_generation;
pub use code_generation::*;

pub mod symbol_table_creation;
pub use symbol_table_creation::*;

pub mod type_checker;
pub use type_checker::*;

mod pass;
pub use self::pass::*;

#[cfg(test)]
mod test_passes;
