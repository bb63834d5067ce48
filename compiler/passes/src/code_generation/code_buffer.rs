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

use std::fmt::Write as _;

/// A single three-address instruction: an operator and up to three operand
/// fields. Fields that an instruction does not use stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    pub op: String,
    pub a: String,
    pub b: String,
    pub c: String,
}

impl Instruction {
    /// Creates a new instruction from its four fields.
    pub fn new(
        op: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
    ) -> Self {
        Self { op: op.into(), a: a.into(), b: b.into(), c: c.into() }
    }
}

/// A mutable instruction buffer with the skip/backup/restore discipline
/// needed for single-pass backpatching.
///
/// `emit_loc` is the next write position and `high_emit_loc` the highest
/// position ever reserved. A forward control transfer reserves its slot
/// with [`emit_skip`](Self::emit_skip), and once the target is known the
/// generator backs up, writes the jump, and restores the cursor.
#[derive(Debug)]
pub struct CodeBuffer {
    /// The emitted instructions; reserved slots hold default instructions
    /// until they are backpatched.
    instructions: Vec<Instruction>,
    /// The next position to write.
    emit_loc: usize,
    /// The highest position ever reserved.
    high_emit_loc: usize,
    /// The number of the next temporary.
    next_temporary: u32,
    /// The number of the next label.
    next_label: u32,
}

impl CodeBuffer {
    /// The label reserved for the end of the program.
    pub const END_LABEL: &'static str = "L0";

    /// The fallback instruction emitted for anything the generator cannot
    /// lower. Printed verbatim; it need not round-trip.
    pub const UNKNOWN_OPERATOR: &'static str = "BUG: Unknown operator";

    /// Returns an empty buffer. Label numbering starts at 1; `L0` is
    /// reserved for the end of the program.
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
            emit_loc: 0,
            high_emit_loc: 0,
            next_temporary: 0,
            next_label: 1,
        }
    }

    /// Writes an instruction at `emit_loc` and advances it, raising the
    /// high-water mark when surpassed.
    pub fn emit(
        &mut self,
        op: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
    ) {
        let instruction = Instruction::new(op, a, b, c);
        if self.emit_loc == self.instructions.len() {
            self.instructions.push(instruction);
        } else {
            self.instructions[self.emit_loc] = instruction;
        }
        self.emit_loc += 1;
        if self.high_emit_loc < self.emit_loc {
            self.high_emit_loc = self.emit_loc;
        }
    }

    /// Skips `how_many` code positions for a later backpatch and returns
    /// the position of the first skipped slot.
    pub fn emit_skip(&mut self, how_many: usize) -> usize {
        let location = self.emit_loc;
        self.emit_loc += how_many;
        if self.high_emit_loc < self.emit_loc {
            self.high_emit_loc = self.emit_loc;
            self.instructions.resize_with(self.high_emit_loc, Default::default);
        }
        location
    }

    /// Backs up to `location`, a previously skipped position.
    pub fn emit_backup(&mut self, location: usize) {
        debug_assert!(location <= self.high_emit_loc, "emit_backup past the high-water mark");
        self.emit_loc = location;
    }

    /// Restores the current position to the highest previously unemitted
    /// position.
    pub fn emit_restore(&mut self) {
        self.emit_loc = self.high_emit_loc;
    }

    /// Returns a fresh temporary name: `t0`, `t1`, ...
    pub fn new_temp(&mut self) -> String {
        let temporary = format!("t{}", self.next_temporary);
        self.next_temporary += 1;
        temporary
    }

    /// Returns a fresh label name: `L1`, `L2`, ...
    pub fn new_label(&mut self) -> String {
        let label = format!("L{}", self.next_label);
        self.next_label += 1;
        label
    }

    /// The next write position.
    pub fn emit_loc(&self) -> usize {
        self.emit_loc
    }

    /// The highest position ever reserved.
    pub fn high_emit_loc(&self) -> usize {
        self.high_emit_loc
    }

    /// The emitted instructions, up to the high-water mark.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions[..self.high_emit_loc]
    }

    /// Formats all instructions `0..high_emit_loc` into the final listing.
    pub fn output(&self) -> String {
        let mut listing = String::new();
        for (index, instruction) in self.instructions().iter().enumerate() {
            let Instruction { op, a, b, c } = instruction;
            let line = match op.as_str() {
                "+" | "-" | "*" | "/" | "and" | "or" | "<" | "<=" | ">" | ">=" | "=" => {
                    format!("{c} := {a} {op} {b}")
                }
                "read" => format!("read {c}"),
                "write" => format!("write {a}"),
                ":=" => format!("{c} := {a}"),
                "label" | "goto" => format!("{op} {c}"),
                "j=" => format!("if {a} = {b} goto {c}"),
                _ => format!("{op} {a} {b} {c}"),
            };
            let _ = writeln!(listing, "{index:5})  {line}");
        }
        listing
    }
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_advances_both_cursors() {
        let mut buffer = CodeBuffer::new();
        buffer.emit(":=", "3", "", "x");
        buffer.emit("write", "x", "", "");

        assert_eq!(buffer.emit_loc(), 2);
        assert_eq!(buffer.high_emit_loc(), 2);
    }

    #[test]
    fn test_skip_backup_restore_round_trip() {
        let mut buffer = CodeBuffer::new();
        buffer.emit(":=", "1", "", "x");
        let saved = buffer.emit_skip(1);
        buffer.emit(":=", "2", "", "y");

        buffer.emit_backup(saved);
        assert_eq!(buffer.emit_loc(), saved);
        buffer.emit("j=", "t0", "false", "L1");
        buffer.emit_restore();

        assert_eq!(buffer.emit_loc(), buffer.high_emit_loc());
        assert_eq!(buffer.instructions()[1].op, "j=");
        assert_eq!(buffer.instructions()[2].c, "y");
    }

    #[test]
    fn test_no_slot_is_left_uninitialised_after_backpatch() {
        let mut buffer = CodeBuffer::new();
        let saved = buffer.emit_skip(1);
        buffer.emit("label", "", "", "L1");
        buffer.emit_backup(saved);
        buffer.emit("goto", "", "", "L1");
        buffer.emit_restore();

        assert!(buffer.instructions().iter().all(|instruction| !instruction.op.is_empty()));
    }

    #[test]
    fn test_temporaries_and_labels_are_monotone() {
        let mut buffer = CodeBuffer::new();
        assert_eq!(buffer.new_temp(), "t0");
        assert_eq!(buffer.new_temp(), "t1");
        assert_eq!(buffer.new_temp(), "t2");

        // L0 is reserved for the end of the program.
        assert_eq!(buffer.new_label(), "L1");
        assert_eq!(buffer.new_label(), "L2");
    }

    #[test]
    fn test_unknown_operator_prints_verbatim() {
        let mut buffer = CodeBuffer::new();
        buffer.emit(CodeBuffer::UNKNOWN_OPERATOR, "", "", "");
        assert_eq!(buffer.output(), "    0)  BUG: Unknown operator   \n");
    }

    #[test]
    fn test_output_formats() {
        let mut buffer = CodeBuffer::new();
        buffer.emit("+", "b", "t0", "t1");
        buffer.emit(":=", "t1", "", "a");
        buffer.emit("read", "", "", "x");
        buffer.emit("write", "x", "", "");
        buffer.emit("j=", "t1", "false", "L1");
        buffer.emit("label", "", "", "L1");
        buffer.emit("goto", "", "", "L2");

        assert_eq!(
            buffer.output(),
            "    0)  t1 := b + t0\n\
             \u{20}   1)  a := t1\n\
             \u{20}   2)  read x\n\
             \u{20}   3)  write x\n\
             \u{20}   4)  if t1 = false goto L1\n\
             \u{20}   5)  label L1\n\
             \u{20}   6)  goto L2\n"
        );
    }
}
