//! wispcfg-par - Table-driven parser core for wisp configuration files.
//!
//! The grammar lives in static tables (one ordered token table per
//! state, compiled ahead of time); this crate is the machine that runs
//! them: the driver loop, the captured-value stack that threads
//! identified matches to semantic handlers, the state trail used to
//! find a recovery scope, and line-granular error recovery with
//! human-readable and machine-readable reporting.
//!
//! The wisp grammar itself and its handlers live in `wispcfg-sem`;
//! everything here is grammar-agnostic.
//!
//! # Example
//!
//! ```
//! use wispcfg_par::{
//!     parse, CallCtx, Dispatch, Grammar, Next, ParseContext, State, TokenDef, TokenKind,
//!     INITIAL,
//! };
//!
//! #[derive(Clone, Copy)]
//! enum Call {
//!     SetWorkspace,
//! }
//!
//! static INITIAL_TOKENS: &[TokenDef<Call>] = &[
//!     TokenDef { kind: TokenKind::End, identifier: None, next: Next::Goto(INITIAL) },
//!     TokenDef { kind: TokenKind::Error, identifier: None, next: Next::Goto(INITIAL) },
//!     TokenDef {
//!         kind: TokenKind::Literal("workspace"),
//!         identifier: None,
//!         next: Next::Goto(wispcfg_par::StateId(1)),
//!     },
//! ];
//! static WORKSPACE_TOKENS: &[TokenDef<Call>] = &[TokenDef {
//!     kind: TokenKind::Number,
//!     identifier: Some("num"),
//!     next: Next::Call { call: Call::SetWorkspace, then: INITIAL },
//! }];
//! static GRAMMAR: Grammar<Call> = Grammar {
//!     states: &[
//!         State { name: "INITIAL", tokens: INITIAL_TOKENS },
//!         State { name: "WORKSPACE", tokens: WORKSPACE_TOKENS },
//!     ],
//! };
//!
//! struct Handlers {
//!     workspaces: Vec<i64>,
//! }
//!
//! impl Dispatch for Handlers {
//!     type Call = Call;
//!     fn call(&mut self, call: Call, ctx: &mut CallCtx<'_>) {
//!         match call {
//!             Call::SetWorkspace => self.workspaces.push(ctx.get_long("num")),
//!         }
//!     }
//! }
//!
//! let mut handlers = Handlers { workspaces: Vec::new() };
//! let mut context = ParseContext::new();
//! let output = parse("workspace 5\n", &GRAMMAR, &mut handlers, &mut context).unwrap();
//! assert!(output.is_clean());
//! assert_eq!(handlers.workspaces, [5]);
//! ```

pub mod context;
pub mod driver;
pub mod error;
pub mod grammar;
pub mod handler;
mod report;
pub mod stack;
pub mod trail;

pub use context::{ParseContext, ParseOutput};
pub use driver::{parse, Parser};
pub use error::FatalError;
pub use grammar::{Grammar, Next, State, StateId, TokenDef, TokenKind, INITIAL};
pub use handler::{CallCtx, Dispatch};
pub use stack::{Value, ValueStack, STACK_CAPACITY};
pub use trail::{StateTrail, TRAIL_CAPACITY};
