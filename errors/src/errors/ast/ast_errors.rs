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

use std::fmt::{Debug, Display};

create_messages!(
    /// AstError enum that represents all the errors for the `tny-ast` crate.
    AstError,
    code_mask: 2000i32,
    code_prefix: "AST",

    /// For when the AST fails to be represented as a JSON string.
    @backtraced
    failed_to_convert_ast_to_json_string {
        args: (error: impl Display),
        msg: format!("failed to convert ast to a json string {error}"),
        help: None,
    }

    /// For when the AST fails to create the AST JSON file.
    @backtraced
    failed_to_create_ast_json_file {
        args: (path: impl Debug, error: impl Display),
        msg: format!("failed to create ast json file `{path:?}` {error}"),
        help: None,
    }

    /// For when the AST fails to be written to the AST JSON file.
    @backtraced
    failed_to_write_ast_to_json_file {
        args: (path: impl Debug, error: impl Display),
        msg: format!("failed to write ast to a json file `{path:?}` {error}"),
        help: None,
    }

    /// For when the symbol table fails to be represented as a JSON string.
    @backtraced
    failed_to_convert_symbol_table_to_json_string {
        args: (error: impl Display),
        msg: format!("failed to convert symbol table to a json string {error}"),
        help: None,
    }

    /// For when the symbol table fails to create the symbol table JSON file.
    @backtraced
    failed_to_create_symbol_table_json_file {
        args: (path: impl Debug, error: impl Display),
        msg: format!("failed to create symbol table json file `{path:?}` {error}"),
        help: None,
    }

    /// For when the symbol table fails to be written to the symbol table JSON file.
    @backtraced
    failed_to_write_symbol_table_to_json_file {
        args: (path: impl Debug, error: impl Display),
        msg: format!("failed to write symbol table to a json file `{path:?}` {error}"),
        help: None,
    }

    /// For when a variable is declared a second time.
    @formatted
    redeclared_variable {
        args: (name: impl Display),
        msg: format!("variable '{name}' is declared more than once"),
        help: Some("the first declaration and its location are kept".to_string()),
    }
);
