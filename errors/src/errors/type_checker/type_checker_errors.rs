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

use crate::create_messages;

use std::fmt::Display;

create_messages!(
    /// TypeCheckerError enum that represents all the errors for the semantic analysis passes.
    TypeCheckerError,
    code_mask: 372000i32,
    code_prefix: "TYC",

    /// For when a name is used without ever being declared.
    @formatted
    undeclared_identifier {
        args: (name: impl Display),
        msg: format!("undeclared identifier '{name}'"),
        help: None,
    }

    /// For when the operand of `not` is not boolean.
    @formatted
    not_operand_not_boolean {
        args: (type_: impl Display),
        msg: "'not' operator needs a boolean expression".to_string(),
        help: Some(format!("the operand has type `{type_}`")),
    }

    /// For when the two operands of a binary operator differ in type.
    @formatted
    operand_types_not_equal {
        args: (left: impl Display, right: impl Display),
        msg: "the types of operands are not equal".to_string(),
        help: Some(format!("the operands have types `{left}` and `{right}`")),
    }

    /// For when an `if` condition is not boolean.
    @formatted
    if_test_not_boolean {
        args: (type_: impl Display),
        msg: "if test is not Boolean".to_string(),
        help: Some(format!("the condition has type `{type_}`")),
    }

    /// For when a `while` condition is not boolean.
    @formatted
    while_test_not_boolean {
        args: (type_: impl Display),
        msg: "while test is not Boolean".to_string(),
        help: Some(format!("the condition has type `{type_}`")),
    }

    /// For when a `repeat` condition is not boolean.
    @formatted
    repeat_test_not_boolean {
        args: (type_: impl Display),
        msg: "repeat test is not Boolean".to_string(),
        help: Some(format!("the condition has type `{type_}`")),
    }

    /// For when the assigned value's type differs from the variable's declared type.
    @formatted
    assignment_type_mismatch {
        args: (value: impl Display, declared: impl Display),
        msg: "assignment of a different type value".to_string(),
        help: Some(format!("expected `{declared}`, found `{value}`")),
    }

    /// For when `write` is applied to a non-integer value.
    @formatted
    write_non_integer {
        args: (type_: impl Display),
        msg: "write of non-integer value".to_string(),
        help: Some(format!("the written value has type `{type_}`")),
    }
);
