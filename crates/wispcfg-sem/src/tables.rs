//! Token tables for the wisp configuration grammar.
//!
//! Derived from `parser-specs/config.spec`; state indices and token
//! order here must match that file's declaration order. Prefix-sharing
//! literals (`workspace_layout` before `workspace`, `exec_always`
//! before `exec`) rely on that order because literal matching has no
//! boundary rule.

use wispcfg_par::{Grammar, Next, State, StateId, TokenDef, TokenKind, INITIAL};

/// Handlers of the wisp configuration grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigCall {
    Font,
    FloatingModifier,
    DefaultBorder,
    WorkspaceLayout,
    FocusFollowsMouse,
    Workspace,
    Exec,
    Binding,
    EnterMode,
    ModeBinding,
    BarPosition,
    BarStatusCommand,
    BarFinish,
}

pub const IGNORE_LINE: StateId = StateId(1);
pub const FONT: StateId = StateId(2);
pub const FLOATING_MODIFIER: StateId = StateId(3);
pub const DEFAULT_BORDER: StateId = StateId(4);
pub const WORKSPACE_LAYOUT: StateId = StateId(5);
pub const FOCUS_FOLLOWS_MOUSE: StateId = StateId(6);
pub const WORKSPACE: StateId = StateId(7);
pub const WORKSPACE_OUTPUT: StateId = StateId(8);
pub const WORKSPACE_OUTPUT_NAME: StateId = StateId(9);
pub const EXEC: StateId = StateId(10);
pub const BINDING: StateId = StateId(11);
pub const BINDCOMMAND: StateId = StateId(12);
pub const MODENAME: StateId = StateId(13);
pub const MODEBRACE: StateId = StateId(14);
pub const MODE: StateId = StateId(15);
pub const MODE_BINDING: StateId = StateId(16);
pub const MODE_BINDCOMMAND: StateId = StateId(17);
pub const MODE_IGNORE_LINE: StateId = StateId(18);
pub const BARBRACE: StateId = StateId(19);
pub const BAR: StateId = StateId(20);
pub const BAR_POSITION: StateId = StateId(21);
pub const BAR_STATUS: StateId = StateId(22);
pub const BAR_IGNORE_LINE: StateId = StateId(23);

/// The complete table set.
pub static GRAMMAR: Grammar<ConfigCall> = Grammar {
    states: &[
        State {
            name: "INITIAL",
            tokens: &[
                TokenDef { kind: TokenKind::End, identifier: None, next: Next::Goto(INITIAL) },
                TokenDef { kind: TokenKind::Error, identifier: None, next: Next::Goto(INITIAL) },
                TokenDef { kind: TokenKind::Literal("#"), identifier: None, next: Next::Goto(IGNORE_LINE) },
                TokenDef { kind: TokenKind::Literal("set"), identifier: None, next: Next::Goto(IGNORE_LINE) },
                TokenDef { kind: TokenKind::Literal("font"), identifier: None, next: Next::Goto(FONT) },
                TokenDef { kind: TokenKind::Literal("floating_modifier"), identifier: None, next: Next::Goto(FLOATING_MODIFIER) },
                TokenDef { kind: TokenKind::Literal("default_border"), identifier: None, next: Next::Goto(DEFAULT_BORDER) },
                TokenDef { kind: TokenKind::Literal("workspace_layout"), identifier: None, next: Next::Goto(WORKSPACE_LAYOUT) },
                TokenDef { kind: TokenKind::Literal("focus_follows_mouse"), identifier: None, next: Next::Goto(FOCUS_FOLLOWS_MOUSE) },
                TokenDef { kind: TokenKind::Literal("workspace"), identifier: None, next: Next::Goto(WORKSPACE) },
                TokenDef { kind: TokenKind::Literal("exec_always"), identifier: Some("exectype"), next: Next::Goto(EXEC) },
                TokenDef { kind: TokenKind::Literal("exec"), identifier: Some("exectype"), next: Next::Goto(EXEC) },
                TokenDef { kind: TokenKind::Literal("bindsym"), identifier: Some("bindtype"), next: Next::Goto(BINDING) },
                TokenDef { kind: TokenKind::Literal("bindcode"), identifier: Some("bindtype"), next: Next::Goto(BINDING) },
                TokenDef { kind: TokenKind::Literal("mode"), identifier: None, next: Next::Goto(MODENAME) },
                TokenDef { kind: TokenKind::Literal("bar"), identifier: None, next: Next::Goto(BARBRACE) },
            ],
        },
        State {
            name: "IGNORE_LINE",
            tokens: &[TokenDef { kind: TokenKind::Line, identifier: None, next: Next::Goto(INITIAL) }],
        },
        State {
            name: "FONT",
            tokens: &[TokenDef {
                kind: TokenKind::String,
                identifier: Some("font"),
                next: Next::Call { call: ConfigCall::Font, then: INITIAL },
            }],
        },
        State {
            name: "FLOATING_MODIFIER",
            tokens: &[TokenDef {
                kind: TokenKind::Word,
                identifier: Some("modifiers"),
                next: Next::Call { call: ConfigCall::FloatingModifier, then: INITIAL },
            }],
        },
        State {
            name: "DEFAULT_BORDER",
            tokens: &[
                TokenDef { kind: TokenKind::Literal("normal"), identifier: Some("border"), next: Next::Call { call: ConfigCall::DefaultBorder, then: INITIAL } },
                TokenDef { kind: TokenKind::Literal("pixel"), identifier: Some("border"), next: Next::Call { call: ConfigCall::DefaultBorder, then: INITIAL } },
                TokenDef { kind: TokenKind::Literal("none"), identifier: Some("border"), next: Next::Call { call: ConfigCall::DefaultBorder, then: INITIAL } },
            ],
        },
        State {
            name: "WORKSPACE_LAYOUT",
            tokens: &[
                TokenDef { kind: TokenKind::Literal("default"), identifier: Some("layout"), next: Next::Call { call: ConfigCall::WorkspaceLayout, then: INITIAL } },
                TokenDef { kind: TokenKind::Literal("stacking"), identifier: Some("layout"), next: Next::Call { call: ConfigCall::WorkspaceLayout, then: INITIAL } },
                TokenDef { kind: TokenKind::Literal("tabbed"), identifier: Some("layout"), next: Next::Call { call: ConfigCall::WorkspaceLayout, then: INITIAL } },
            ],
        },
        State {
            name: "FOCUS_FOLLOWS_MOUSE",
            tokens: &[
                TokenDef { kind: TokenKind::Literal("yes"), identifier: Some("value"), next: Next::Call { call: ConfigCall::FocusFollowsMouse, then: INITIAL } },
                TokenDef { kind: TokenKind::Literal("no"), identifier: Some("value"), next: Next::Call { call: ConfigCall::FocusFollowsMouse, then: INITIAL } },
            ],
        },
        State {
            name: "WORKSPACE",
            tokens: &[TokenDef {
                kind: TokenKind::Number,
                identifier: Some("workspace"),
                next: Next::Goto(WORKSPACE_OUTPUT),
            }],
        },
        State {
            name: "WORKSPACE_OUTPUT",
            tokens: &[TokenDef {
                kind: TokenKind::Literal("output"),
                identifier: None,
                next: Next::Goto(WORKSPACE_OUTPUT_NAME),
            }],
        },
        State {
            name: "WORKSPACE_OUTPUT_NAME",
            tokens: &[TokenDef {
                kind: TokenKind::Word,
                identifier: Some("output"),
                next: Next::Call { call: ConfigCall::Workspace, then: INITIAL },
            }],
        },
        State {
            name: "EXEC",
            tokens: &[
                TokenDef { kind: TokenKind::Literal("--no-startup-id"), identifier: Some("nosn"), next: Next::Goto(EXEC) },
                TokenDef {
                    kind: TokenKind::String,
                    identifier: Some("command"),
                    next: Next::Call { call: ConfigCall::Exec, then: INITIAL },
                },
            ],
        },
        State {
            name: "BINDING",
            tokens: &[
                TokenDef { kind: TokenKind::Literal("--release"), identifier: Some("release"), next: Next::Goto(BINDING) },
                TokenDef { kind: TokenKind::Word, identifier: Some("combo"), next: Next::Goto(BINDCOMMAND) },
            ],
        },
        State {
            name: "BINDCOMMAND",
            tokens: &[TokenDef {
                kind: TokenKind::String,
                identifier: Some("command"),
                next: Next::Call { call: ConfigCall::Binding, then: INITIAL },
            }],
        },
        State {
            name: "MODENAME",
            tokens: &[TokenDef {
                kind: TokenKind::String,
                identifier: Some("mode"),
                next: Next::Call { call: ConfigCall::EnterMode, then: MODEBRACE },
            }],
        },
        State {
            name: "MODEBRACE",
            tokens: &[
                TokenDef { kind: TokenKind::End, identifier: None, next: Next::Goto(MODEBRACE) },
                TokenDef { kind: TokenKind::Literal("{"), identifier: None, next: Next::Goto(MODE) },
            ],
        },
        State {
            name: "MODE",
            tokens: &[
                TokenDef { kind: TokenKind::End, identifier: None, next: Next::Goto(MODE) },
                TokenDef { kind: TokenKind::Error, identifier: None, next: Next::Goto(MODE) },
                TokenDef { kind: TokenKind::Literal("#"), identifier: None, next: Next::Goto(MODE_IGNORE_LINE) },
                TokenDef { kind: TokenKind::Literal("set"), identifier: None, next: Next::Goto(MODE_IGNORE_LINE) },
                TokenDef { kind: TokenKind::Literal("bindsym"), identifier: Some("bindtype"), next: Next::Goto(MODE_BINDING) },
                TokenDef { kind: TokenKind::Literal("bindcode"), identifier: Some("bindtype"), next: Next::Goto(MODE_BINDING) },
                TokenDef { kind: TokenKind::Literal("}"), identifier: None, next: Next::Goto(INITIAL) },
            ],
        },
        State {
            name: "MODE_BINDING",
            tokens: &[
                TokenDef { kind: TokenKind::Literal("--release"), identifier: Some("release"), next: Next::Goto(MODE_BINDING) },
                TokenDef { kind: TokenKind::Word, identifier: Some("combo"), next: Next::Goto(MODE_BINDCOMMAND) },
            ],
        },
        State {
            name: "MODE_BINDCOMMAND",
            tokens: &[TokenDef {
                kind: TokenKind::String,
                identifier: Some("command"),
                next: Next::Call { call: ConfigCall::ModeBinding, then: MODE },
            }],
        },
        State {
            name: "MODE_IGNORE_LINE",
            tokens: &[TokenDef { kind: TokenKind::Line, identifier: None, next: Next::Goto(MODE) }],
        },
        State {
            name: "BARBRACE",
            tokens: &[
                TokenDef { kind: TokenKind::End, identifier: None, next: Next::Goto(BARBRACE) },
                TokenDef { kind: TokenKind::Literal("{"), identifier: None, next: Next::Goto(BAR) },
            ],
        },
        State {
            name: "BAR",
            tokens: &[
                TokenDef { kind: TokenKind::End, identifier: None, next: Next::Goto(BAR) },
                TokenDef { kind: TokenKind::Error, identifier: None, next: Next::Goto(BAR) },
                TokenDef { kind: TokenKind::Literal("#"), identifier: None, next: Next::Goto(BAR_IGNORE_LINE) },
                TokenDef { kind: TokenKind::Literal("position"), identifier: None, next: Next::Goto(BAR_POSITION) },
                TokenDef { kind: TokenKind::Literal("status_command"), identifier: None, next: Next::Goto(BAR_STATUS) },
                TokenDef {
                    kind: TokenKind::Literal("}"),
                    identifier: None,
                    next: Next::Call { call: ConfigCall::BarFinish, then: INITIAL },
                },
            ],
        },
        State {
            name: "BAR_POSITION",
            tokens: &[
                TokenDef { kind: TokenKind::Literal("top"), identifier: Some("position"), next: Next::Call { call: ConfigCall::BarPosition, then: BAR } },
                TokenDef { kind: TokenKind::Literal("bottom"), identifier: Some("position"), next: Next::Call { call: ConfigCall::BarPosition, then: BAR } },
            ],
        },
        State {
            name: "BAR_STATUS",
            tokens: &[TokenDef {
                kind: TokenKind::String,
                identifier: Some("command"),
                next: Next::Call { call: ConfigCall::BarStatusCommand, then: BAR },
            }],
        },
        State {
            name: "BAR_IGNORE_LINE",
            tokens: &[TokenDef { kind: TokenKind::Line, identifier: None, next: Next::Goto(BAR) }],
        },
    ],
};
