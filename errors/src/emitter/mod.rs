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

use crate::{Result, TnyError, TnyWarning};

use std::{cell::RefCell, fmt, rc::Rc};

/// Types that are sinks for compiler errors.
pub trait Emitter {
    /// Emit the error `err`.
    fn emit_err(&mut self, err: TnyError);

    /// Tracks the absolute code of the last emitted error, if any.
    fn last_emitted_err_code(&self) -> Option<i32>;

    /// Emit the warning `warning`.
    fn emit_warning(&mut self, warning: TnyWarning);
}

/// A trivial `Emitter` that prints to standard error.
pub struct StderrEmitter {
    /// The exit code of the last emitted error.
    last_error_code: Option<i32>,
}

impl Emitter for StderrEmitter {
    fn emit_err(&mut self, err: TnyError) {
        self.last_error_code = Some(err.exit_code());
        eprintln!("{err}");
    }

    fn last_emitted_err_code(&self) -> Option<i32> {
        self.last_error_code
    }

    fn emit_warning(&mut self, warning: TnyWarning) {
        eprintln!("{warning}");
    }
}

/// A buffer of `T`s shared between a [`Handler`] and the code that inspects it.
#[derive(Debug)]
pub struct Buffer<T>(Rc<RefCell<Vec<T>>>);

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }
}

impl<T> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Buffer<T> {
    /// Pushes `x` onto the buffer.
    pub fn push(&self, x: T) {
        self.0.borrow_mut().push(x);
    }

    /// Extracts all the elements pushed so far.
    pub fn into_inner(self) -> Vec<T> {
        self.0.take()
    }

    /// Returns the number of elements pushed so far.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if nothing was pushed.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.0.borrow().iter().enumerate() {
            if index != 0 {
                writeln!(f)?;
            }
            entry.fmt(f)?;
        }
        Ok(())
    }
}

/// A buffer of errors.
pub type ErrBuffer = Buffer<TnyError>;
/// A buffer of warnings.
pub type WarningBuffer = Buffer<TnyWarning>;

/// An `Emitter` that collects diagnostics into buffers, for tests and for
/// callers that render diagnostics themselves.
#[derive(Clone, Default)]
pub struct BufferEmitter(ErrBuffer, WarningBuffer);

impl BufferEmitter {
    /// Returns a new buffered emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the errors collected so far.
    pub fn extract_errs(&self) -> ErrBuffer {
        self.0.clone()
    }

    /// Extracts the warnings collected so far.
    pub fn extract_warnings(&self) -> WarningBuffer {
        self.1.clone()
    }
}

impl Emitter for BufferEmitter {
    fn emit_err(&mut self, err: TnyError) {
        self.0.push(err);
    }

    fn last_emitted_err_code(&self) -> Option<i32> {
        self.0 .0.borrow().last().map(|err| err.exit_code())
    }

    fn emit_warning(&mut self, warning: TnyWarning) {
        self.1.push(warning);
    }
}

/// Contains the actual data for `Handler`.
///
/// Modeled this way to afford an API using interior mutability.
struct HandlerInner {
    /// The number of errors emitted so far.
    err_count: usize,
    /// The number of warnings emitted so far.
    warn_count: usize,
    /// The sink the diagnostics go to.
    emitter: Box<dyn Emitter>,
}

/// A handler deals with diagnostics emitted during a compilation.
///
/// Each phase reports through a shared `Handler` and keeps going, so that a
/// single run surfaces as many diagnostics as possible; the driver then gates
/// later phases on [`Handler::err_count`].
pub struct Handler {
    /// The inner handler.
    inner: RefCell<HandlerInner>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(Box::new(StderrEmitter { last_error_code: None }))
    }
}

impl Handler {
    /// Construct a `Handler` using the given `emitter`.
    pub fn new(emitter: Box<dyn Emitter>) -> Self {
        let inner = RefCell::new(HandlerInner { err_count: 0, warn_count: 0, emitter });
        Self { inner }
    }

    /// Construct a `Handler` that will append to `buf`.
    pub fn new_with_buf() -> (Self, BufferEmitter) {
        let buf = BufferEmitter::new();
        let handler = Self::new(Box::new(buf.clone()));
        (handler, buf)
    }

    /// Emit the error `err`.
    pub fn emit_err<E: Into<TnyError>>(&self, err: E) {
        let mut inner = self.inner.borrow_mut();
        inner.err_count = inner.err_count.saturating_add(1);
        inner.emitter.emit_err(err.into());
    }

    /// Emit the warning `warning`.
    pub fn emit_warning(&self, warning: TnyWarning) {
        let mut inner = self.inner.borrow_mut();
        inner.warn_count = inner.warn_count.saturating_add(1);
        inner.emitter.emit_warning(warning);
    }

    /// Emits the error `err` and returns a sentinel referring back to it.
    pub fn extend_if_error<T>(&self, result: Result<T>) -> Result<T> {
        match result {
            Ok(t) => Ok(t),
            Err(err) => {
                self.emit_err(err);
                Err(TnyError::LastErrorCode(self.last_err_code().unwrap_or_default()))
            }
        }
    }

    /// The number of errors emitted so far.
    pub fn err_count(&self) -> usize {
        self.inner.borrow().err_count
    }

    /// The number of warnings emitted so far.
    pub fn warn_count(&self) -> usize {
        self.inner.borrow().warn_count
    }

    /// Did we have any errors so far?
    pub fn had_errors(&self) -> bool {
        self.err_count() > 0
    }

    /// Gets the last emitted error's exit code, if any.
    fn last_err_code(&self) -> Option<i32> {
        self.inner.borrow().emitter.last_emitted_err_code()
    }

    /// If any errors were emitted, returns a sentinel error referring back to
    /// the last of them; otherwise returns `Ok(())`.
    pub fn last_err(&self) -> Result<(), Box<TnyError>> {
        if let Some(code) = self.last_err_code() {
            Err(Box::new(TnyError::LastErrorCode(code)))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserError;
    use tny_span::Span;

    #[test]
    fn test_handler_counts_and_latches() {
        let (handler, buf) = Handler::new_with_buf();
        assert!(!handler.had_errors());
        assert!(handler.last_err().is_ok());

        handler.emit_err(ParserError::unexpected_eof(&Span::dummy()));
        handler.emit_err(ParserError::unexpected_token("until", &Span::dummy()));

        assert_eq!(handler.err_count(), 2);
        assert!(handler.had_errors());
        assert!(matches!(*handler.last_err().unwrap_err(), TnyError::LastErrorCode(_)));
        assert_eq!(buf.extract_errs().len(), 2);
    }
}
