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

use tny_compiler::Compiler;
use tny_errors::emitter::Handler;

use std::path::PathBuf;

/// Compiles `source` end to end, returning the listing on success or the
/// rendered diagnostics on failure.
fn compile(source: &str) -> Result<String, String> {
    let (handler, buffer) = Handler::new_with_buf();
    let mut compiler = Compiler::new(&handler, PathBuf::from("test.tny"), PathBuf::new(), None);

    let listing = compiler
        .parse_program_from_string(source, "test.tny")
        .and_then(|()| compiler.compiler_stages());
    listing.map_err(|_| buffer.extract_errs().to_string())
}

/// Builds the expected listing from its lines, adding the index prefixes.
fn listing(lines: &[&str]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{index:5})  {line}\n"))
        .collect()
}

#[test]
fn test_assignment_of_constant() {
    let lowered = compile("int x;\nx := 3").unwrap();
    assert_eq!(lowered, listing(&["x := 3", "label L0"]));
}

#[test]
fn test_arithmetic_with_precedence() {
    let lowered = compile("int a,b,c;\na := b + c * 2").unwrap();
    assert_eq!(
        lowered,
        listing(&["t0 := c * 2", "t1 := b + t0", "a := t1", "label L0"])
    );
}

#[test]
fn test_if_without_else() {
    let lowered = compile("int x;\nif x < 10 then x := 0 end").unwrap();
    assert_eq!(
        lowered,
        listing(&[
            "t0 := x < 10",
            "if t0 = false goto L1",
            "x := 0",
            "label L1",
            "label L0",
        ])
    );
}

#[test]
fn test_if_with_else() {
    let lowered = compile("int x;\nif x < 10 then x := 0 else x := 1 end").unwrap();
    assert_eq!(
        lowered,
        listing(&[
            "t0 := x < 10",
            "if t0 = false goto L1",
            "x := 0",
            "goto L2",
            "label L1",
            "x := 1",
            "label L2",
            "label L0",
        ])
    );
}

#[test]
fn test_while_loop() {
    let lowered = compile("int i;\nwhile i < 5 do i := i + 1 end").unwrap();
    assert_eq!(
        lowered,
        listing(&[
            "label L1",
            "t0 := i < 5",
            "if t0 = false goto L2",
            "t1 := i + 1",
            "i := t1",
            "goto L1",
            "label L2",
            "label L0",
        ])
    );
}

#[test]
fn test_repeat_loop() {
    let lowered = compile("int i;\nrepeat i := i + 1 until i = 3").unwrap();
    assert_eq!(
        lowered,
        listing(&[
            "label L1",
            "t0 := i + 1",
            "i := t0",
            "t1 := i = 3",
            "if t1 = false goto L1",
            "label L0",
        ])
    );
}

#[test]
fn test_type_error_produces_no_listing() {
    let errs = compile("int x; bool b;\nx := b").unwrap_err();
    assert!(
        errs.contains("assignment of a different type value"),
        "unexpected diagnostics: {errs}"
    );
}

#[test]
fn test_undeclared_identifier_latches_the_pipeline() {
    let errs = compile("int x;\nx := y").unwrap_err();
    assert!(errs.contains("undeclared identifier 'y'"), "unexpected diagnostics: {errs}");
    // The type checker never sees the program, so the undeclared name is
    // the only diagnostic.
    assert_eq!(errs.matches("Error").count(), 1, "unexpected diagnostics: {errs}");
}

#[test]
fn test_syntax_error_latches_the_pipeline() {
    let errs = compile("int x;\nif x < 10 x := 0 end").unwrap_err();
    assert!(errs.contains("expected 'then'"), "unexpected diagnostics: {errs}");
}

#[test]
fn test_eq_for_assign_hint() {
    let errs = compile("int x;\nx = 3").unwrap_err();
    assert!(errs.contains(":="), "unexpected diagnostics: {errs}");
}

#[test]
fn test_boolean_literals_materialise_as_integers() {
    let lowered = compile("bool b;\nb := true;\nb := false and b").unwrap();
    assert_eq!(
        lowered,
        listing(&["b := 1", "t0 := 0 and b", "b := t0", "label L0"])
    );
}

#[test]
fn test_string_literals_lower_in_assignment() {
    let lowered = compile("string s;\ns := \"hello\"").unwrap();
    assert_eq!(lowered, listing(&["s := \"hello\"", "label L0"]));
}

#[test]
fn test_nested_control_flow() {
    let lowered = compile(
        "int i, x;\n\
         i := 0;\n\
         while i < 3 do\n\
           if i = 1 then x := i end;\n\
           i := i + 1\n\
         end",
    )
    .unwrap();
    assert_eq!(
        lowered,
        listing(&[
            "i := 0",
            "label L1",
            "t0 := i < 3",
            "if t0 = false goto L3",
            "t1 := i = 1",
            "if t1 = false goto L2",
            "x := i",
            "label L2",
            "t2 := i + 1",
            "i := t2",
            "goto L1",
            "label L3",
            "label L0",
        ])
    );
}

#[test]
fn test_compile_from_file_and_checksum() {
    let directory = tempfile::tempdir().expect("failed to create a temporary directory");
    let path = directory.path().join("sum.tny");
    std::fs::write(&path, "int i, sum;\nread i;\nsum := sum + i;\nwrite sum").unwrap();

    let handler = Handler::default();
    let mut compiler = Compiler::new(&handler, path, directory.path().to_path_buf(), None);

    let checksum = compiler.checksum().unwrap();
    assert_eq!(checksum.len(), 64, "a SHA-256 checksum has 64 hex digits");

    let lowered = compiler.compile().unwrap();
    assert_eq!(
        lowered,
        listing(&["read i", "t0 := sum + i", "sum := t0", "write sum", "label L0"])
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let handler = Handler::default();
    let mut compiler = Compiler::new(&handler, PathBuf::from("does_not_exist.tny"), PathBuf::new(), None);
    assert!(compiler.compile().is_err());
}

#[test]
fn test_ast_snapshot_is_written_when_requested() {
    let directory = tempfile::tempdir().expect("failed to create a temporary directory");
    let options = tny_compiler::OutputOptions { initial_ast: true, symbol_table: true };

    let (handler, _) = Handler::new_with_buf();
    let mut compiler = Compiler::new(
        &handler,
        PathBuf::from("test.tny"),
        directory.path().to_path_buf(),
        Some(options),
    );
    compiler.parse_program_from_string("int x;\nx := 3", "test.tny").unwrap();
    compiler.compiler_stages().unwrap();

    let ast: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(directory.path().join("initial_ast.json")).unwrap()).unwrap();
    assert_eq!(ast["declarations"][0]["variables"][0]["name"], "x");

    let symbol_table: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(directory.path().join("symbol_table.json")).unwrap()).unwrap();
    assert_eq!(symbol_table["variables"]["x"]["location"], 0);
}
