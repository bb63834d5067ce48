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

use crate::CodeGenerator;

use tny_ast::{
    AssignStatement, Block, ConditionalStatement, ReadStatement, RepeatStatement, Statement, WhileStatement,
    WriteStatement,
};

impl CodeGenerator<'_> {
    pub(crate) fn visit_statement(&mut self, input: &Statement) {
        match input {
            Statement::Assign(stmt) => self.visit_assign(stmt),
            Statement::Conditional(stmt) => self.visit_conditional(stmt),
            Statement::Read(stmt) => self.visit_read(stmt),
            Statement::Repeat(stmt) => self.visit_repeat(stmt),
            Statement::While(stmt) => self.visit_while(stmt),
            Statement::Write(stmt) => self.visit_write(stmt),
        }
    }

    pub(crate) fn visit_block(&mut self, input: &Block) {
        for statement in &input.statements {
            self.visit_statement(statement);
        }
    }

    fn visit_assign(&mut self, input: &AssignStatement) {
        let value = self.visit_expression(&input.value);
        self.buffer.emit(":=", value, "", input.place.name.clone());
    }

    fn visit_read(&mut self, input: &ReadStatement) {
        self.buffer.emit("read", "", "", input.variable.name.clone());
    }

    fn visit_write(&mut self, input: &WriteStatement) {
        let value = self.visit_expression(&input.expression);
        self.buffer.emit("write", value, "", "");
    }

    fn visit_conditional(&mut self, input: &ConditionalStatement) {
        let condition = self.visit_expression(&input.condition);

        // Reserve the slot for the false-branch jump; its target is not
        // known until the then-sequence is lowered.
        let false_jump = self.buffer.emit_skip(1);
        self.visit_block(&input.then);

        // With an else-sequence, also reserve the unconditional jump over it.
        let else_jump = input.otherwise.as_ref().map(|_| self.buffer.emit_skip(1));

        let join = self.buffer.new_label();
        self.buffer.emit("label", "", "", join.clone());
        self.buffer.emit_backup(false_jump);
        self.buffer.emit("j=", condition, "false", join);
        self.buffer.emit_restore();

        if let (Some(otherwise), Some(else_jump)) = (&input.otherwise, else_jump) {
            self.visit_block(otherwise);

            let exit = self.buffer.new_label();
            self.buffer.emit("label", "", "", exit.clone());
            self.buffer.emit_backup(else_jump);
            self.buffer.emit("goto", "", "", exit);
            self.buffer.emit_restore();
        }
    }

    fn visit_repeat(&mut self, input: &RepeatStatement) {
        let head = self.buffer.new_label();
        self.buffer.emit("label", "", "", head.clone());

        self.visit_block(&input.block);

        // The loop exits when the condition comes out true.
        let condition = self.visit_expression(&input.condition);
        self.buffer.emit("j=", condition, "false", head);
    }

    fn visit_while(&mut self, input: &WhileStatement) {
        let head = self.buffer.new_label();
        self.buffer.emit("label", "", "", head.clone());

        let condition = self.visit_expression(&input.condition);
        let exit_jump = self.buffer.emit_skip(1);

        self.visit_block(&input.block);
        self.buffer.emit("goto", "", "", head);

        let exit = self.buffer.new_label();
        self.buffer.emit("label", "", "", exit.clone());
        self.buffer.emit_backup(exit_jump);
        self.buffer.emit("j=", condition, "false", exit);
        self.buffer.emit_restore();
    }
}
