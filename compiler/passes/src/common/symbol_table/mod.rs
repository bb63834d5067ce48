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

pub mod variable_symbol;
pub use variable_symbol::*;

use tny_ast::Type;
use tny_errors::{AstError, Result};
use tny_span::Span;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The single global scope of a TINY program.
///
/// Maps each declared name to its [`VariableSymbol`]. Iteration follows
/// declaration order, which is also the order of the assigned locations.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolTable {
    /// The variables declared in the program.
    variables: IndexMap<String, VariableSymbol>,
    /// The memory location handed to the next inserted variable.
    next_location: u32,
}

impl SymbolTable {
    /// Inserts a variable into the symbol table, assigning it the next
    /// memory location.
    ///
    /// TINY has one global name space: declaring the same name twice is an
    /// error, and the first entry with its location is kept.
    pub fn insert_variable(&mut self, name: &str, type_: Type, span: &Span) -> Result<()> {
        if self.variables.contains_key(name) {
            return Err(AstError::redeclared_variable(name, span).into());
        }

        let location = self.next_location;
        self.next_location += 1;
        self.variables.insert(
            name.to_string(),
            VariableSymbol { type_, location, lines: vec![span.line_start], span: span.clone() },
        );
        Ok(())
    }

    /// Appends a use of `name` on `line` to its entry, preserving program
    /// order. Returns `false` if the name was never declared.
    pub fn record_use(&mut self, name: &str, line: usize) -> bool {
        match self.variables.get_mut(name) {
            Some(variable) => {
                variable.lines.push(line);
                true
            }
            None => false,
        }
    }

    /// Attempts to look up a variable in the symbol table.
    pub fn lookup_variable(&self, name: &str) -> Option<&VariableSymbol> {
        self.variables.get(name)
    }

    /// Iterates over the declared variables in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = (&String, &VariableSymbol)> {
        self.variables.iter()
    }

    /// Serializes the symbol table into a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)
            .map_err(|e| AstError::failed_to_convert_symbol_table_to_json_string(&e))?)
    }

    /// Serializes the symbol table into a JSON file.
    pub fn to_json_file(&self, mut path: std::path::PathBuf, file_name: &str) -> Result<()> {
        path.push(file_name);
        let file = std::fs::File::create(&path)
            .map_err(|e| AstError::failed_to_create_symbol_table_json_file(&path, &e))?;
        let writer = std::io::BufWriter::new(file);
        Ok(serde_json::to_writer_pretty(writer, &self)
            .map_err(|e| AstError::failed_to_write_symbol_table_to_json_file(&path, &e))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_are_assigned_in_insertion_order() {
        let mut table = SymbolTable::default();
        table.insert_variable("a", Type::Integer, &Span::dummy()).unwrap();
        table.insert_variable("b", Type::Boolean, &Span::dummy()).unwrap();
        table.insert_variable("c", Type::String, &Span::dummy()).unwrap();

        assert_eq!(table.lookup_variable("a").unwrap().location, 0);
        assert_eq!(table.lookup_variable("b").unwrap().location, 1);
        assert_eq!(table.lookup_variable("c").unwrap().location, 2);
    }

    #[test]
    fn test_redeclaration_keeps_the_first_entry() {
        let mut table = SymbolTable::default();
        table.insert_variable("x", Type::Integer, &Span::dummy()).unwrap();
        assert!(table.insert_variable("x", Type::Boolean, &Span::dummy()).is_err());

        let symbol = table.lookup_variable("x").unwrap();
        assert_eq!(symbol.type_, Type::Integer);
        assert_eq!(symbol.location, 0);
    }

    #[test]
    fn test_use_lines_preserve_program_order() {
        let mut table = SymbolTable::default();
        let mut span = Span::dummy();
        span.line_start = 1;
        table.insert_variable("x", Type::Integer, &span).unwrap();

        assert!(table.record_use("x", 3));
        assert!(table.record_use("x", 3));
        assert!(table.record_use("x", 7));
        assert!(!table.record_use("y", 2));

        assert_eq!(table.lookup_variable("x").unwrap().lines, vec![1, 3, 3, 7]);
    }
}
