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

//! The `tny` command line tool: compiles a TINY source file and prints the
//! three-address code listing to standard output. Diagnostics go to
//! standard error; any diagnostic makes the exit status 1.

use tny_compiler::{Compiler, OutputOptions};
use tny_errors::TnyError;
use tny_errors::emitter::Handler;

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

/// Compile a TINY source file to a three-address code listing.
#[derive(Parser)]
#[command(name = "tny", version, about)]
struct Cli {
    /// Path to the source file; `.tny` is appended when the path has no extension.
    path: PathBuf,

    /// Write the post-parse AST to `initial_ast.json` in the output directory.
    #[arg(long)]
    initial_ast: bool,

    /// Write the symbol table to `symbol_table.json` in the output directory.
    #[arg(long)]
    symbol_table: bool,

    /// The directory generated artifacts are written to.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Print compiler phase tracing to standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        true => tracing_subscriber::EnvFilter::new("debug"),
        false => tracing_subscriber::EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut path = cli.path;
    if path.extension().is_none() {
        path.set_extension("tny");
    }

    let handler = Handler::default();
    let options = OutputOptions { initial_ast: cli.initial_ast, symbol_table: cli.symbol_table };
    let mut compiler = Compiler::new(&handler, path, cli.output, Some(options));

    match compiler.compile() {
        Ok(listing) => print!("{listing}"),
        Err(err) => {
            // Diagnostics that went through the handler are already on
            // standard error; print the rest.
            if !matches!(err, TnyError::LastErrorCode(_)) {
                eprintln!("{err}");
            }
            exit(1);
        }
    }
}
