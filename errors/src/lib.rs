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

//! The errors for the TINY compiler.
//!
//! Each compiler phase has its own error enum, generated by the
//! [`create_messages!`](crate::create_messages) macro with a stable error
//! code per variant. Errors are reported through the
//! [`Handler`](crate::emitter::Handler) so that a phase can keep going after
//! a diagnostic and the driver can gate later phases on the error count.

#![forbid(unsafe_code)]

/// Contains the common functionalities for errors.
pub mod common;
pub use self::common::*;

/// Contains the error emitter and handler.
pub mod emitter;

/// Contains the phase error types.
mod errors;
pub use self::errors::*;

/// A global result type for all errors in the tny crates.
pub type Result<T = (), E = TnyError> = core::result::Result<T, E>;
