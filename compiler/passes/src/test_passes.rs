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

use crate::{CodeGenerator, Pass, SymbolTable, SymbolTableCreator, TypeChecker};

use tny_ast::{Ast, Type};
use tny_errors::emitter::{BufferEmitter, Handler};

/// Parses `source` into an AST, failing the test on any syntax error.
fn parse(source: &str) -> Ast {
    let (handler, _) = Handler::new_with_buf();
    let ast = tny_parser::parse_ast(&handler, "test.tny", source).expect("lexing should succeed");
    assert_eq!(handler.err_count(), 0, "expected a clean parse of {source:?}");
    ast
}

/// Runs the symbol table pass over `source`.
fn build_symbol_table(source: &str) -> (Result<SymbolTable, tny_errors::TnyError>, Handler, BufferEmitter) {
    let ast = parse(source);
    let (handler, buffer) = Handler::new_with_buf();
    let result = SymbolTableCreator::do_pass((&ast, &handler));
    (result, handler, buffer)
}

/// Runs the symbol table and type checking passes over `source`, returning
/// the number of type errors.
fn type_check(source: &str) -> usize {
    let ast = parse(source);
    let (symbol_handler, _) = Handler::new_with_buf();
    let symbol_table =
        SymbolTableCreator::do_pass((&ast, &symbol_handler)).expect("the symbol table should build");

    let (handler, _) = Handler::new_with_buf();
    let _ = TypeChecker::do_pass((&ast, &symbol_table, &handler));
    handler.err_count()
}

/// Compiles a clean `source` all the way to its listing.
fn lower(source: &str) -> String {
    let ast = parse(source);
    let (handler, _) = Handler::new_with_buf();
    let symbol_table = SymbolTableCreator::do_pass((&ast, &handler)).expect("the symbol table should build");
    TypeChecker::do_pass((&ast, &symbol_table, &handler)).expect("the program should type check");
    CodeGenerator::do_pass((&ast, &handler)).expect("code generation should succeed")
}

#[test]
fn test_symbol_table_records_declarations_and_uses() {
    let (result, _, _) = build_symbol_table("int x, y;\nbool b;\nx := 1;\nb := x < y");

    let table = result.unwrap();
    let x = table.lookup_variable("x").unwrap();
    assert_eq!(x.type_, Type::Integer);
    assert_eq!(x.location, 0);
    assert_eq!(x.lines, vec![1, 3, 4]);

    let y = table.lookup_variable("y").unwrap();
    assert_eq!(y.location, 1);
    assert_eq!(y.lines, vec![1, 4]);

    let b = table.lookup_variable("b").unwrap();
    assert_eq!(b.type_, Type::Boolean);
    assert_eq!(b.location, 2);
    assert_eq!(b.lines, vec![2, 4]);
}

#[test]
fn test_undeclared_identifier_is_reported_once_at_first_use() {
    let (result, handler, buffer) = build_symbol_table("int x;\nx := y;\ny := x + y");

    assert!(result.is_err());
    assert_eq!(handler.err_count(), 1, "each undeclared name is reported exactly once");
    assert!(buffer.extract_errs().to_string().contains("undeclared identifier 'y'"));
}

#[test]
fn test_each_undeclared_name_gets_its_own_diagnostic() {
    let (_, handler, _) = build_symbol_table("int x;\nx := a + b");
    assert_eq!(handler.err_count(), 2);
}

#[test]
fn test_redeclaration_is_an_error() {
    let (result, handler, buffer) = build_symbol_table("int x;\nbool x;\nx := 1");

    assert!(result.is_err());
    assert_eq!(handler.err_count(), 1);
    assert!(buffer.extract_errs().to_string().contains("declared more than once"));
}

#[test]
fn test_unused_variable_warns_but_does_not_fail() {
    let (result, handler, buffer) = build_symbol_table("int x, unused;\nx := 1");

    assert!(result.is_ok());
    assert_eq!(handler.err_count(), 0);
    assert_eq!(handler.warn_count(), 1);
    assert!(buffer.extract_warnings().to_string().contains("'unused'"));
}

#[test]
fn test_well_typed_program_passes() {
    assert_eq!(type_check("int x; bool b;\nx := x + 1;\nb := x < 2 and not b;\nwrite x"), 0);
}

#[test]
fn test_assignment_of_a_different_type_value() {
    assert_eq!(type_check("int x; bool b;\nx := b"), 1);
}

#[test]
fn test_if_test_must_be_boolean() {
    assert_eq!(type_check("int x;\nif x + 1 then x := 0 end"), 1);
}

#[test]
fn test_while_test_must_be_boolean() {
    assert_eq!(type_check("int x;\nwhile x do x := x - 1 end"), 1);
}

#[test]
fn test_repeat_test_must_be_boolean() {
    assert_eq!(type_check("int x;\nrepeat x := x + 1 until x"), 1);
}

#[test]
fn test_write_requires_an_integer() {
    assert_eq!(type_check("bool b;\nb := true;\nwrite b"), 1);
}

#[test]
fn test_not_requires_a_boolean() {
    assert_eq!(type_check("int x;\nx := 1;\nif not x then x := 0 end"), 1);
}

#[test]
fn test_operand_types_must_be_equal() {
    assert_eq!(type_check("int x; bool b;\nb := true;\nx := x + b"), 1);
}

#[test]
fn test_string_assignment_is_well_typed() {
    assert_eq!(type_check("string s;\ns := \"hello\""), 0);
}

#[test]
fn test_string_write_is_rejected() {
    assert_eq!(type_check("string s;\ns := \"hello\";\nwrite s"), 1);
}

#[test]
fn test_comparison_of_booleans_is_accepted() {
    // The rule only requires equal operand types, so boolean operands of
    // `=` are fine and the result is boolean.
    assert_eq!(type_check("bool a, b;\na := true;\nb := a = a"), 0);
}

#[test]
fn test_one_temporary_per_operator() {
    let listing = lower("int a, b, c;\na := 1;\nb := 2;\nc := a + b * (a - b) / 2");

    // Four operators, four temporaries.
    for temporary in ["t0", "t1", "t2", "t3"] {
        assert!(listing.contains(&format!("{temporary} :=")), "missing {temporary} in:\n{listing}");
    }
    assert!(!listing.contains("t4 :="));
}

#[test]
fn test_unlowerable_subtree_emits_the_fallback_instruction() {
    use tny_ast::{Block, ErrExpression, Expression, Program, Statement, WriteStatement};
    use tny_span::Span;

    let program = Program {
        declarations: Vec::new(),
        block: Block {
            statements: vec![Statement::Write(WriteStatement {
                expression: Expression::Err(ErrExpression { span: Span::dummy() }),
                span: Span::dummy(),
            })],
            span: Span::dummy(),
        },
    };

    let (handler, _) = Handler::new_with_buf();
    let listing = CodeGenerator::do_pass((&Ast::new(program), &handler)).unwrap();
    assert!(listing.contains("BUG: Unknown operator"), "missing the fallback in:\n{listing}");
}

#[test]
fn test_every_jump_lands_on_a_label() {
    let listing = lower(
        "int i, x;\n\
         i := 0;\n\
         while i < 5 do\n\
           if i = 2 then x := i else x := 0 end;\n\
           repeat i := i + 1 until i > 0\n\
         end;\n\
         write x",
    );

    let mut labels = Vec::new();
    let mut targets = Vec::new();
    for line in listing.lines() {
        let line = line.split(")  ").nth(1).expect("every line carries an index prefix");
        if let Some(label) = line.strip_prefix("label ") {
            labels.push(label.to_string());
        } else if let Some(target) = line.strip_prefix("goto ") {
            targets.push(target.to_string());
        } else if let Some(rest) = line.split(" goto ").nth(1) {
            targets.push(rest.to_string());
        }
    }

    assert!(labels.contains(&"L0".to_string()), "the end label closes the listing");
    for target in targets {
        assert!(labels.contains(&target), "jump target {target} has no label in:\n{listing}");
    }
}
