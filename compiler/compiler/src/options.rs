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

/// Toggles for the optional artifacts the compiler writes alongside the
/// listing. All off by default.
#[derive(Clone, Default)]
pub struct OutputOptions {
    /// Whether to write the AST to a JSON file after parsing.
    pub initial_ast: bool,
    /// Whether to write the symbol table to a JSON file after the symbol
    /// table pass.
    pub symbol_table: bool,
}
