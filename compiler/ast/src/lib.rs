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

//! The abstract syntax tree (ast) for a TINY program.
//!
//! This module contains the [`Ast`] type, a wrapper around the [`Program`]
//! type. The [`Ast`] is produced by the parser and consumed by the semantic
//! analysis and code generation passes.

#![forbid(unsafe_code)]

pub mod common;
pub use self::common::*;

pub mod expression;
pub use self::expression::*;

pub mod passes;
pub use self::passes::*;

pub mod program;
pub use self::program::*;

pub mod statement;
pub use self::statement::*;

pub mod types;
pub use self::types::*;

use tny_errors::{AstError, Result};

/// The abstract syntax tree (AST) for a TINY program.
///
/// The [`Ast`] type represents a TINY program as a series of recursive data
/// types. These data types form a tree that begins from a [`Program`] root.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ast {
    pub ast: Program,
}

impl Ast {
    /// Creates a new AST from a given program tree.
    pub fn new(program: Program) -> Self {
        Self { ast: program }
    }

    /// Returns a reference to the inner program AST representation.
    pub fn as_repr(&self) -> &Program {
        &self.ast
    }

    /// Consumes the AST and returns the inner program representation.
    pub fn into_repr(self) -> Program {
        self.ast
    }

    /// Serializes the ast into a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.ast)
            .map_err(|e| AstError::failed_to_convert_ast_to_json_string(&e))?)
    }

    /// Serializes the ast into a JSON file.
    pub fn to_json_file(&self, mut path: std::path::PathBuf, file_name: &str) -> Result<()> {
        path.push(file_name);
        let file = std::fs::File::create(&path).map_err(|e| AstError::failed_to_create_ast_json_file(&path, &e))?;
        let writer = std::io::BufWriter::new(file);
        Ok(serde_json::to_writer_pretty(writer, &self.ast)
            .map_err(|e| AstError::failed_to_write_ast_to_json_file(&path, &e))?)
    }
}
