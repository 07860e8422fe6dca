//! Grammar-table types.
//!
//! A grammar is static data: one ordered token table per state, compiled
//! ahead of time from the declarative grammar specification. The tables
//! in `wispcfg-sem` are the generated instance for the wisp
//! configuration language; the test suites build small table sets of
//! their own.
//!
//! Ordering inside a table is semantically significant: the driver tries
//! descriptors first to last and the first match wins. There is no
//! longest-match rule across descriptors.

use std::fmt;

/// Identifier of a grammar state: an index into [`Grammar::states`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateId(pub u16);

/// The distinguished start state. Every grammar places it at index 0,
/// and its token table must contain an `error` descriptor so recovery
/// always has somewhere to land.
pub const INITIAL: StateId = StateId(0);

/// The kinds of token a state may accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A fixed spelling, matched ASCII-case-insensitively as a prefix.
    Literal(&'static str),
    /// A bareword: quoted like a string, or unquoted up to whitespace,
    /// `]`, `,`, `;` or end-of-line.
    Word,
    /// Quoted, or unquoted up to end-of-line.
    String,
    /// Signed decimal integer.
    Number,
    /// The remainder of the line including its terminator.
    Line,
    /// A line terminator or end-of-input; closes a directive.
    End,
    /// Recovery marker; never matched by the driver directly, only
    /// followed by the recovery engine.
    Error,
}

impl fmt::Display for TokenKind {
    /// Formats the kind the way it appears in "Expected one of these
    /// tokens" messages: literals single-quoted, named kinds in angle
    /// brackets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal(spelling) => write!(f, "'{}'", spelling),
            TokenKind::Word => write!(f, "<word>"),
            TokenKind::String => write!(f, "<string>"),
            TokenKind::Number => write!(f, "<number>"),
            TokenKind::Line => write!(f, "<line>"),
            TokenKind::End => write!(f, "<end>"),
            TokenKind::Error => write!(f, "<error>"),
        }
    }
}

/// Where a matched descriptor leads.
#[derive(Clone, Copy, Debug)]
pub enum Next<C: 'static> {
    /// Transition straight to a state.
    Goto(StateId),
    /// Invoke the handler selected by `call`. `then` seeds the next
    /// state; the handler may override it through its context.
    Call { call: C, then: StateId },
}

/// One entry in a state's token table.
#[derive(Clone, Copy, Debug)]
pub struct TokenDef<C: 'static> {
    pub kind: TokenKind,
    /// Identifier under which the matched value is captured. `None`
    /// matches without capturing.
    pub identifier: Option<&'static str>,
    pub next: Next<C>,
}

/// A state: its display name plus its ordered token table.
#[derive(Debug)]
pub struct State<C: 'static> {
    pub name: &'static str,
    pub tokens: &'static [TokenDef<C>],
}

/// A complete set of grammar tables, indexed by [`StateId`].
#[derive(Debug)]
pub struct Grammar<C: 'static> {
    pub states: &'static [State<C>],
}

impl<C> Grammar<C> {
    /// Token table of `state`, in declared order.
    #[inline]
    pub fn tokens(&self, state: StateId) -> &'static [TokenDef<C>] {
        self.states[state.0 as usize].tokens
    }

    /// Display name of `state`, for logs and fatal errors.
    #[inline]
    pub fn state_name(&self, state: StateId) -> &'static str {
        self.states[state.0 as usize].name
    }
}
