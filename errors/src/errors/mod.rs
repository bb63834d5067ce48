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

/// Contains the AST error definitions.
pub mod ast;
pub use self::ast::*;

/// Contains the compiler error definitions.
pub mod compiler;
pub use self::compiler::*;

/// Contains the parser error definitions.
pub mod parser;
pub use self::parser::*;

/// Contains the type checker error and warning definitions.
pub mod type_checker;
pub use self::type_checker::*;

/// The umbrella error type for the tny crates.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TnyError {
    /// Represents an AST error.
    #[error(transparent)]
    AstError(#[from] AstError),

    /// Represents a compiler error.
    #[error(transparent)]
    CompilerError(#[from] CompilerError),

    /// Represents a parser error.
    #[error(transparent)]
    ParserError(#[from] ParserError),

    /// Represents a type checker error.
    #[error(transparent)]
    TypeCheckerError(#[from] TypeCheckerError),

    /// A sentinel pointing back at the last error the handler emitted.
    #[error("")]
    LastErrorCode(i32),
}

impl TnyError {
    /// Implement error code for each type of error.
    pub fn error_code(&self) -> String {
        match self {
            Self::AstError(error) => error.error_code(),
            Self::CompilerError(error) => error.error_code(),
            Self::ParserError(error) => error.error_code(),
            Self::TypeCheckerError(error) => error.error_code(),
            Self::LastErrorCode(_) => unreachable!(),
        }
    }

    /// Implement exit code for each type of error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AstError(error) => error.exit_code(),
            Self::CompilerError(error) => error.exit_code(),
            Self::ParserError(error) => error.exit_code(),
            Self::TypeCheckerError(error) => error.exit_code(),
            Self::LastErrorCode(code) => *code,
        }
    }
}

/// The umbrella warning type for the tny crates.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TnyWarning {
    /// Represents a type checker warning.
    #[error(transparent)]
    TypeCheckerWarning(#[from] TypeCheckerWarning),
}

impl TnyWarning {
    /// Implement warning code for each type of warning.
    pub fn warning_code(&self) -> String {
        match self {
            Self::TypeCheckerWarning(warning) => warning.error_code(),
        }
    }
}
