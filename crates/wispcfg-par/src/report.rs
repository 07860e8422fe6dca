//! Syntax-error reporting.
//!
//! Produces both audiences' views of the same error: the structured
//! [`ParseError`] record appended to the parse output, and a log block
//! with the offending line in context (up to two lines before and
//! after, plus a caret underline).

use tracing::error;

use wispcfg_lex::Scanner;
use wispcfg_util::{ParseError, Snippet};

use crate::context::{ParseContext, ParseOutput};
use crate::grammar::{TokenDef, TokenKind};

/// Builds the `Expected one of these tokens: ...` message for a token
/// table. Entries keep table order; the `error` descriptor is omitted
/// because it is internal to recovery and would only confuse users.
pub(crate) fn expected_tokens<C>(tokens: &[TokenDef<C>]) -> String {
    let mut list = String::new();
    for def in tokens {
        if matches!(def.kind, TokenKind::Error) {
            continue;
        }
        if !list.is_empty() {
            list.push_str(", ");
        }
        list.push_str(&def.kind.to_string());
    }
    format!("Expected one of these tokens: {}", list)
}

/// Reports a syntax error at the scanner's current position: appends
/// the machine-readable record, sets the context error flag, and logs
/// the message with source context. Never fails.
pub(crate) fn syntax_error<C>(
    scanner: &Scanner<'_>,
    tokens: &[TokenDef<C>],
    context: &mut ParseContext,
    output: &mut ParseOutput,
) {
    let message = expected_tokens(tokens);
    let input = scanner.input();
    let snippet = Snippet::around(input, scanner.offset(), scanner.line());

    error!("{}", message);
    error!("(in file {})", context.display_filename());
    for (number, text) in &snippet.before {
        error!("Line {:>3}: {}", number, text);
    }
    error!("Line {:>3}: {}", snippet.line.0, snippet.line.1);
    error!("          {}", snippet.caret);
    for (number, text) in &snippet.after {
        error!("Line {:>3}: {}", number, text);
    }

    context.has_errors = true;
    context.last_line = Some(snippet.line.1.clone());
    output
        .errors
        .push(ParseError::new(message, input, snippet.caret));
}
