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

//! The compiler for TINY programs.
//!
//! The [`Compiler`] sequences the phases: parse, symbol table creation,
//! type checking, and code generation, gating each phase on the previous
//! ones having reported no errors.

#![forbid(unsafe_code)]

pub mod compiler;
pub use compiler::*;

pub mod options;
pub use options::*;
