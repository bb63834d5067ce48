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
//! The [`Compiler`] type compiles TINY programs into three-address code.

use crate::OutputOptions;

use tny_ast::Ast;
use tny_errors::emitter::Handler;
use tny_errors::{CompilerError, Result};
use tny_passes::{CodeGenerator, Pass, SymbolTable, SymbolTableCreator, TypeChecker};

use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// The primary entry point of the TINY compiler.
#[derive(Clone)]
pub struct Compiler<'a> {
    /// The handler is used for error and warning emissions.
    handler: &'a Handler,
    /// The path to the main source file.
    main_file_path: PathBuf,
    /// The path to where the compiler outputs all generated files.
    output_directory: PathBuf,
    /// The AST for the program.
    pub ast: Ast,
    /// Compiler options on some optional output files.
    output_options: OutputOptions,
}

impl<'a> Compiler<'a> {
    /// Returns a new TINY compiler.
    pub fn new(
        handler: &'a Handler,
        main_file_path: PathBuf,
        output_directory: PathBuf,
        output_options: Option<OutputOptions>,
    ) -> Self {
        Self {
            handler,
            main_file_path,
            output_directory,
            ast: Ast::default(),
            output_options: output_options.unwrap_or_default(),
        }
    }

    /// Returns a SHA256 checksum of the program file.
    pub fn checksum(&self) -> Result<String> {
        // Read in the main file as string.
        let unparsed_file = fs::read_to_string(&self.main_file_path)
            .map_err(|e| CompilerError::file_read_error(&self.main_file_path, e))?;

        // Hash the file contents.
        let mut hasher = Sha256::new();
        hasher.update(unparsed_file.as_bytes());
        let hash = hasher.finalize();

        Ok(format!("{hash:x}"))
    }

    /// Parses and stores a program file content from a string, constructs a
    /// syntax tree, and generates a program.
    pub fn parse_program_from_string(&mut self, program_string: &str, name: &str) -> Result<()> {
        // Use the parser to construct the abstract syntax tree (ast).
        let ast = tny_parser::parse_ast(self.handler, name, program_string)?;
        self.handler.last_err().map_err(|e| *e)?;

        if self.output_options.initial_ast {
            ast.to_json_file(self.output_directory.clone(), "initial_ast.json")?;
        }

        self.ast = ast;

        Ok(())
    }

    /// Parses and stores the main program file, constructs a syntax tree,
    /// and generates a program.
    pub fn parse_program(&mut self) -> Result<()> {
        // Load the program file.
        let program_string = fs::read_to_string(&self.main_file_path)
            .map_err(|e| CompilerError::file_read_error(&self.main_file_path, e))?;

        let name = self.main_file_path.display().to_string();
        self.parse_program_from_string(&program_string, &name)
    }

    /// Runs the symbol table pass.
    pub fn symbol_table_pass(&self) -> Result<SymbolTable> {
        tracing::debug!("running the symbol table pass");
        let symbol_table = SymbolTableCreator::do_pass((&self.ast, self.handler))?;

        if self.output_options.symbol_table {
            symbol_table.to_json_file(self.output_directory.clone(), "symbol_table.json")?;
        }

        Ok(symbol_table)
    }

    /// Runs the type checker pass.
    pub fn type_checker_pass(&self, symbol_table: &SymbolTable) -> Result<()> {
        tracing::debug!("running the type checker pass");
        TypeChecker::do_pass((&self.ast, symbol_table, self.handler))
    }

    /// Runs the code generation pass, returning the listing.
    pub fn code_generation_pass(&self) -> Result<String> {
        tracing::debug!("running the code generation pass");
        CodeGenerator::do_pass((&self.ast, self.handler))
    }

    /// Runs the compiler stages on the parsed program.
    pub fn compiler_stages(&mut self) -> Result<String> {
        let symbol_table = self.symbol_table_pass()?;
        self.type_checker_pass(&symbol_table)?;
        self.code_generation_pass()
    }

    /// Returns the three-address code listing of a compiled TINY program.
    pub fn compile(&mut self) -> Result<String> {
        self.parse_program()?;
        self.compiler_stages()
    }
}
