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

/// A macro that, given an error type name, a code mask, a code prefix, and a
/// list of tagged entries, generates a diagnostic enum with one constructor
/// per entry and a stable error code assigned in declaration order.
///
/// Entries tagged `@formatted` take a trailing `span` argument and render
/// with a source excerpt; entries tagged `@backtraced` capture a backtrace
/// instead. A type whose name ends in `Warning` renders as a warning.
#[macro_export]
macro_rules! create_messages {
    // All entries consumed: record how many codes were assigned.
    (@step $code:expr,) => {
        #[inline(always)]
        #[allow(dead_code)]
        fn num_exit_codes() -> i32 {
            $code
        }
    };
    // Generate a constructor for a formatted (span-carrying) entry.
    (@step $code:expr, $(#[$error_func_docs:meta])* @formatted $name:ident { args: ($($arg_names:ident: $arg_types:ty),* $(,)?), msg: $message:expr, help: $help:expr, } $($tail:tt)*) => {
        $(#[$error_func_docs])*
        pub fn $name($($arg_names: $arg_types,)* span: &::tny_span::Span) -> Self {
            Self::Formatted($crate::Formatted::new_from_span(
                $message,
                $help,
                $code + Self::code_mask(),
                Self::code_identifier(),
                Self::error_type(),
                Self::is_error(),
                span,
            ))
        }

        $crate::create_messages!(@step $code + 1i32, $($tail)*);
    };
    // Generate a constructor for a backtraced (span-less) entry.
    (@step $code:expr, $(#[$error_func_docs:meta])* @backtraced $name:ident { args: ($($arg_names:ident: $arg_types:ty),* $(,)?), msg: $message:expr, help: $help:expr, } $($tail:tt)*) => {
        $(#[$error_func_docs])*
        pub fn $name($($arg_names: $arg_types),*) -> Self {
            Self::Backtraced($crate::Backtraced::new_from_backtrace(
                $message,
                $help,
                $code + Self::code_mask(),
                Self::code_identifier(),
                Self::error_type(),
                Self::is_error(),
                ::backtrace::Backtrace::new(),
            ))
        }

        $crate::create_messages!(@step $code + 1i32, $($tail)*);
    };
    // The entry point: generate the enum and its helpers, then step through the entries.
    ($(#[$error_type_docs:meta])* $type_:ident, code_mask: $code_mask:expr, code_prefix: $code_prefix:expr, $($tail:tt)*) => {
        $(#[$error_type_docs])*
        #[derive(Debug, ::thiserror::Error, PartialEq, Eq)]
        pub enum $type_ {
            #[error(transparent)]
            Formatted(#[from] $crate::Formatted),

            #[error(transparent)]
            Backtraced(#[from] $crate::Backtraced),
        }

        impl $type_ {
            #[inline(always)]
            fn error_type() -> String {
                stringify!($type_).to_string()
            }

            #[inline(always)]
            fn code_mask() -> i32 {
                $code_mask
            }

            #[inline(always)]
            fn code_identifier() -> String {
                $code_prefix.to_string()
            }

            #[inline(always)]
            fn is_error() -> bool {
                !stringify!($type_).ends_with("Warning")
            }

            /// Returns the full code of the diagnostic, e.g. `EPAR0370001`.
            pub fn error_code(&self) -> String {
                match self {
                    Self::Formatted(formatted) => formatted.error_code(),
                    Self::Backtraced(backtraced) => backtraced.error_code(),
                }
            }

            /// Returns the absolute exit code of the diagnostic.
            pub fn exit_code(&self) -> i32 {
                match self {
                    Self::Formatted(formatted) => formatted.exit_code(),
                    Self::Backtraced(backtraced) => backtraced.exit_code(),
                }
            }

            $crate::create_messages!(@step 0i32, $($tail)*);
        }
    };
}
