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
    /// TypeCheckerWarning enum that represents all the warnings for the semantic analysis passes.
    TypeCheckerWarning,
    code_mask: 372000i32,
    code_prefix: "TYC",

    /// For when a variable is declared but never read or assigned.
    @formatted
    unused_variable {
        args: (name: impl Display),
        msg: format!("variable '{name}' is declared but never used"),
        help: None,
    }
);
