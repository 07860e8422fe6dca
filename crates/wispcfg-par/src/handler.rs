//! The boundary between the driver and the semantic layer.
//!
//! Grammars name their handlers through the call enum `C` carried in
//! their tables; the semantic layer implements [`Dispatch`] by matching
//! on that enum. Handlers read captured values through [`CallCtx`] and
//! may redirect the driver by overriding the next state. They must not
//! retain anything borrowed from the context beyond their own
//! invocation, which the borrow checker enforces.

use std::fmt;

use tracing::{error, warn};

use wispcfg_util::ParseError;

use crate::context::{ParseContext, ParseOutput};
use crate::grammar::StateId;
use crate::stack::ValueStack;

/// A set of semantic handlers for one grammar.
pub trait Dispatch {
    /// The grammar's call identifiers, generated alongside its tables.
    type Call: Copy + 'static;

    /// Invoked for every `__CALL` edge the driver takes.
    fn call(&mut self, call: Self::Call, ctx: &mut CallCtx<'_>);

    /// Invoked whenever an `end` token closes a directive, so the
    /// semantic layer can reinitialize per-directive matching state.
    /// The default does nothing.
    fn reset(&mut self) {}
}

/// Read access to captured values plus the writable handler outputs,
/// scoped to a single handler invocation.
pub struct CallCtx<'a> {
    stack: &'a ValueStack,
    context: &'a mut ParseContext,
    output: &'a mut ParseOutput,
    next_state: StateId,
}

impl<'a> CallCtx<'a> {
    pub(crate) fn new(
        stack: &'a ValueStack,
        context: &'a mut ParseContext,
        output: &'a mut ParseOutput,
        next_state: StateId,
    ) -> Self {
        Self {
            stack,
            context,
            output,
            next_state,
        }
    }

    /// The string captured under `identifier`, if any.
    pub fn get_string(&self, identifier: &str) -> Option<&str> {
        self.stack.get_string(identifier)
    }

    /// The integer captured under `identifier`; 0 when absent, by
    /// contract.
    pub fn get_long(&self, identifier: &str) -> i64 {
        self.stack.get_long(identifier)
    }

    /// The state the driver will adopt after this handler returns.
    /// Seeded from the grammar table's `then` state.
    pub fn next_state(&self) -> StateId {
        self.next_state
    }

    /// Redirects the driver, e.g. to pop out of a nested block early.
    pub fn set_next_state(&mut self, state: StateId) {
        self.next_state = state;
    }

    /// Reports a semantic error for the current directive. Sets the
    /// context error flag; parsing continues.
    pub fn error(&mut self, message: impl fmt::Display) {
        error!("{} (in file {})", message, self.context.display_filename());
        self.context.has_errors = true;
    }

    /// Reports a warning for the current directive.
    pub fn warn(&mut self, message: impl fmt::Display) {
        warn!("{} (in file {})", message, self.context.display_filename());
    }

    /// Appends a record to the parse's diagnostic stream.
    pub fn emit(&mut self, record: ParseError) {
        self.context.has_errors = true;
        self.output.errors.push(record);
    }
}
