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

use crate::parse;

use tny_ast::*;
use tny_errors::emitter::Handler;

/// Parses `source`, returning the program and the number of syntax errors.
fn parse_program(source: &str) -> (Program, usize) {
    let (handler, _) = Handler::new_with_buf();
    let program = parse(&handler, "test.tny", source).expect("lexing should succeed");
    (program, handler.err_count())
}

/// Parses `source` and asserts that no syntax errors were reported.
fn parse_clean(source: &str) -> Program {
    let (program, err_count) = parse_program(source);
    assert_eq!(err_count, 0, "expected a clean parse of {source:?}");
    program
}

#[test]
fn test_declarations_and_assignment() {
    let program = parse_clean("int x;\nx := 3");

    assert_eq!(program.declarations.len(), 1);
    let declaration = &program.declarations[0];
    assert_eq!(declaration.type_, Type::Integer);
    assert_eq!(declaration.variables.len(), 1);
    assert_eq!(declaration.variables[0].name, "x");
    assert_eq!(declaration.span.line_start, 1);

    assert_eq!(program.block.statements.len(), 1);
    let Statement::Assign(assign) = &program.block.statements[0] else {
        panic!("expected an assignment");
    };
    assert_eq!(assign.place.name, "x");
    assert_eq!(assign.span.line_start, 2);
    assert!(matches!(assign.value, Expression::Literal(Literal::Integer(3, _))));
}

#[test]
fn test_declaration_lists_each_variable() {
    let program = parse_clean("int a, b, c;\nbool flag;\na := 1");

    assert_eq!(program.declarations.len(), 2);
    let names: Vec<_> = program.declarations[0].variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(program.declarations[1].type_, Type::Boolean);
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let program = parse_clean("int a, b, c;\na := b + c * 2");

    let Statement::Assign(assign) = &program.block.statements[0] else {
        panic!("expected an assignment");
    };
    let Expression::Binary(add) = &assign.value else {
        panic!("expected a binary expression");
    };
    assert_eq!(add.op, BinaryOperation::Add);
    assert!(matches!(&*add.left, Expression::Identifier(identifier) if identifier.name == "b"));
    let Expression::Binary(mul) = &*add.right else {
        panic!("expected the right operand to be a multiplication");
    };
    assert_eq!(mul.op, BinaryOperation::Mul);
}

#[test]
fn test_boolean_operators_bind_looser_than_comparison() {
    let program = parse_clean("int a, b;\nif a < 1 or b > 2 and not b = 3 then a := 0 end");

    let Statement::Conditional(conditional) = &program.block.statements[0] else {
        panic!("expected a conditional");
    };
    // `or` is outermost, `and` next, `not` applies to the comparison.
    let Expression::Binary(or) = &conditional.condition else {
        panic!("expected a binary expression");
    };
    assert_eq!(or.op, BinaryOperation::Or);
    let Expression::Binary(and) = &*or.right else {
        panic!("expected the right operand to be a conjunction");
    };
    assert_eq!(and.op, BinaryOperation::And);
    let Expression::Unary(not) = &*and.right else {
        panic!("expected the right operand to be a negation");
    };
    assert_eq!(not.op, UnaryOperation::Not);
    assert!(matches!(&*not.receiver, Expression::Binary(eq) if eq.op == BinaryOperation::Eq));
}

#[test]
fn test_relational_operators_do_not_associate() {
    let (_, err_count) = parse_program("int a, b, c;\na := a < b < c");
    assert_ne!(err_count, 0, "a second relational operator is a syntax error");
}

#[test]
fn test_parenthesized_comparison_can_be_negated() {
    let program = parse_clean("int x;\nif not (x < 10) then x := 0 end");

    let Statement::Conditional(conditional) = &program.block.statements[0] else {
        panic!("expected a conditional");
    };
    let Expression::Unary(not) = &conditional.condition else {
        panic!("expected a negation");
    };
    assert!(matches!(&*not.receiver, Expression::Binary(lt) if lt.op == BinaryOperation::Lt));
}

#[test]
fn test_if_without_else_has_no_otherwise() {
    let program = parse_clean("int x;\nif x < 10 then x := 0 end");

    let Statement::Conditional(conditional) = &program.block.statements[0] else {
        panic!("expected a conditional");
    };
    assert_eq!(conditional.then.statements.len(), 1);
    assert!(conditional.otherwise.is_none());
}

#[test]
fn test_if_with_else_keeps_both_sequences() {
    let program = parse_clean("int x;\nif x < 10 then x := 0; x := 1 else x := 2 end");

    let Statement::Conditional(conditional) = &program.block.statements[0] else {
        panic!("expected a conditional");
    };
    assert_eq!(conditional.then.statements.len(), 2);
    assert_eq!(conditional.otherwise.as_ref().map(|block| block.statements.len()), Some(1));
}

#[test]
fn test_repeat_holds_body_then_condition() {
    let program = parse_clean("int i;\nrepeat i := i + 1 until i = 3");

    let Statement::Repeat(repeat) = &program.block.statements[0] else {
        panic!("expected a repeat statement");
    };
    assert_eq!(repeat.block.statements.len(), 1);
    assert!(matches!(&repeat.condition, Expression::Binary(eq) if eq.op == BinaryOperation::Eq));
}

#[test]
fn test_while_statement_shape() {
    let program = parse_clean("int i;\nwhile i < 5 do i := i + 1 end");

    let Statement::While(while_) = &program.block.statements[0] else {
        panic!("expected a while statement");
    };
    assert!(matches!(&while_.condition, Expression::Binary(lt) if lt.op == BinaryOperation::Lt));
    assert_eq!(while_.block.statements.len(), 1);
}

#[test]
fn test_read_and_write() {
    let program = parse_clean("int x;\nread x;\nwrite x + 1");

    assert!(matches!(&program.block.statements[0], Statement::Read(read) if read.variable.name == "x"));
    assert!(matches!(&program.block.statements[1], Statement::Write(_)));
}

#[test]
fn test_string_literal_is_permitted_in_assignment() {
    let program = parse_clean("string s;\ns := \"hello\"");

    let Statement::Assign(assign) = &program.block.statements[0] else {
        panic!("expected an assignment");
    };
    assert!(matches!(&assign.value, Expression::Literal(Literal::String(s, _)) if s == "hello"));
}

#[test]
fn test_eq_instead_of_assign_is_reported_and_consumed() {
    let (program, err_count) = parse_program("int x;\nx = 3");

    assert_eq!(err_count, 1);
    // The parser resynchronises and still produces the assignment.
    let Statement::Assign(assign) = &program.block.statements[0] else {
        panic!("expected an assignment");
    };
    assert!(matches!(assign.value, Expression::Literal(Literal::Integer(3, _))));
}

#[test]
fn test_missing_semicolon_is_reported() {
    let (program, err_count) = parse_program("int x;\nx := 1\nx := 2");

    assert_ne!(err_count, 0);
    // Both assignments survive.
    assert_eq!(program.block.statements.len(), 2);
}

#[test]
fn test_recovery_reports_later_errors_too() {
    // Two statements with bad leading tokens, with a good one in between.
    let (program, err_count) = parse_program("int x;\nthen;\nx := 1;\nuntil x");

    assert!(err_count >= 2, "expected both bad statements to be reported, got {err_count}");
    assert_eq!(program.block.statements.len(), 1);
}

#[test]
fn test_source_after_program_end_is_reported() {
    let (_, err_count) = parse_program("int x;\nx := 1 end");
    assert_ne!(err_count, 0);
}

#[test]
fn test_declarations_after_statements_are_not_declarations() {
    // `int` after the first statement is a syntax error, not a declaration.
    let (_, err_count) = parse_program("int x;\nx := 1;\nint y;\ny := 2");
    assert_ne!(err_count, 0);
}

#[test]
fn test_unclosed_paren_is_reported() {
    let (_, err_count) = parse_program("int x;\nx := (1 + 2");
    assert_ne!(err_count, 0);
}
