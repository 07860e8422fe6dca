//! The parser driver.
//!
//! One loop iteration handles one token: skip horizontal whitespace,
//! try the current state's descriptors in table order, and either take
//! the first match's transition or enter error recovery. The loop runs
//! until the scanner has consumed the virtual NUL position at
//! end-of-input, so malformed input can never end a parse early.

use tracing::{debug, trace};

use wispcfg_lex::Scanner;

use crate::context::{ParseContext, ParseOutput};
use crate::error::FatalError;
use crate::grammar::{Grammar, Next, StateId, TokenDef, TokenKind, INITIAL};
use crate::handler::{CallCtx, Dispatch};
use crate::report;
use crate::stack::ValueStack;
use crate::trail::StateTrail;

/// A single parse in progress. Owns all per-parse state so concurrent
/// parses never share anything but the immutable grammar tables.
pub struct Parser<'a, D: Dispatch> {
    grammar: &'a Grammar<D::Call>,
    dispatch: &'a mut D,
    context: &'a mut ParseContext,
    scanner: Scanner<'a>,
    state: StateId,
    stack: ValueStack,
    trail: StateTrail,
    output: ParseOutput,
}

impl<'a, D: Dispatch> Parser<'a, D> {
    /// Prepares a parse of `input` under `grammar`. The input buffer is
    /// borrowed; captured values are copied out of it as they match.
    pub fn new(
        input: &'a str,
        grammar: &'a Grammar<D::Call>,
        dispatch: &'a mut D,
        context: &'a mut ParseContext,
    ) -> Self {
        Self {
            grammar,
            dispatch,
            context,
            scanner: Scanner::new(input),
            state: INITIAL,
            stack: ValueStack::new(),
            trail: StateTrail::new(),
            output: ParseOutput::default(),
        }
    }

    /// Runs the parse to completion.
    ///
    /// Syntax errors are reported into the output and recovered from;
    /// the only `Err` conditions are grammar-table bugs ([`FatalError`]).
    pub fn run(mut self) -> Result<ParseOutput, FatalError> {
        debug!(
            file = self.context.display_filename(),
            bytes = self.scanner.input().len(),
            "parsing configuration"
        );

        while !self.scanner.finished() {
            self.scanner.skip_blank();

            let tokens = self.grammar.tokens(self.state);
            let mut handled = false;
            for def in tokens {
                if !self.try_token(def)? {
                    continue;
                }
                self.transition(def)?;
                if matches!(def.kind, TokenKind::End) {
                    self.dispatch.reset();
                }
                handled = true;
                break;
            }

            if !handled {
                self.recover(tokens)?;
            }
        }

        Ok(self.output)
    }

    /// Attempts to match one descriptor at the cursor. On a match the
    /// input is consumed and an identified value is captured; otherwise
    /// the scanner is left untouched.
    fn try_token(&mut self, def: &TokenDef<D::Call>) -> Result<bool, FatalError> {
        match def.kind {
            TokenKind::Literal(spelling) => {
                if !self.scanner.scan_literal(spelling) {
                    return Ok(false);
                }
                if let Some(identifier) = def.identifier {
                    self.stack.push_str(identifier, spelling.to_string())?;
                }
            }
            TokenKind::Number => match self.scanner.scan_number() {
                Some(value) => {
                    if let Some(identifier) = def.identifier {
                        self.stack.push_long(identifier, value)?;
                    }
                }
                None => return Ok(false),
            },
            TokenKind::String | TokenKind::Word => {
                let value = if matches!(def.kind, TokenKind::Word) {
                    self.scanner.scan_word()
                } else {
                    self.scanner.scan_string()
                };
                match value {
                    Some(value) => {
                        if let Some(identifier) = def.identifier {
                            self.stack.push_str(identifier, value)?;
                        }
                    }
                    None => return Ok(false),
                }
            }
            TokenKind::Line => self.scanner.scan_line(),
            TokenKind::End => {
                if !self.scanner.scan_end() {
                    return Ok(false);
                }
            }
            // Only the recovery engine follows error descriptors.
            TokenKind::Error => return Ok(false),
        }
        Ok(true)
    }

    /// Commits the transition of a matched descriptor: runs the handler
    /// on a `__CALL` edge, adopts the next state, clears captures when
    /// entering the start state, and updates the trail.
    fn transition(&mut self, def: &TokenDef<D::Call>) -> Result<(), FatalError> {
        let next = match def.next {
            Next::Goto(state) => state,
            Next::Call { call, then } => {
                let mut ctx =
                    CallCtx::new(&self.stack, self.context, &mut self.output, then);
                self.dispatch.call(call, &mut ctx);
                let next = ctx.next_state();
                self.stack.clear();
                next
            }
        };

        self.state = next;
        if next == INITIAL {
            self.stack.clear();
        }
        if !self.trail.record(next) {
            return Err(FatalError::TrailOverflow {
                state: self.grammar.state_name(next),
            });
        }
        trace!(state = self.grammar.state_name(next), "transition");
        Ok(())
    }

    /// Error recovery: report, resynchronize at the next line, and jump
    /// to the nearest enclosing state that admits an `<error>` token.
    fn recover(&mut self, tokens: &'static [TokenDef<D::Call>]) -> Result<(), FatalError> {
        report::syntax_error(&self.scanner, tokens, self.context, &mut self.output);

        self.scanner.skip_to_line_end();
        self.stack.clear();

        let mut recovery: Option<&'static TokenDef<D::Call>> = None;
        for &state in self.trail.states().iter().rev() {
            recovery = self
                .grammar
                .tokens(state)
                .iter()
                .find(|def| matches!(def.kind, TokenKind::Error));
            if recovery.is_some() {
                break;
            }
        }

        match recovery {
            Some(def) => self.transition(def),
            // The generated start state always carries an error token;
            // reaching this means the tables were edited by hand.
            None => Err(FatalError::NoErrorToken),
        }
    }
}

/// Parses `input` under `grammar`, dispatching semantic callbacks to
/// `dispatch` and mutating `context` (error flag, line snapshot).
///
/// Always consumes the entire input: every offending line yields one
/// diagnostic record in the returned output and parsing resumes at the
/// next line. `Err` is reserved for grammar-table bugs.
pub fn parse<D: Dispatch>(
    input: &str,
    grammar: &Grammar<D::Call>,
    dispatch: &mut D,
    context: &mut ParseContext,
) -> Result<ParseOutput, FatalError> {
    Parser::new(input, grammar, dispatch, context).run()
}
