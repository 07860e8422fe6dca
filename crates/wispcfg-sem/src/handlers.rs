//! Semantic handlers: grammar callbacks that build a [`Config`].
//!
//! Each arm of the dispatch corresponds to one `call` production in
//! `parser-specs/config.spec`. Handlers read captured values by the
//! identifiers the tables declare and never see raw input.

use wispcfg_par::{CallCtx, Dispatch};

use crate::config::{
    BarConfig, BarPosition, BindKind, Binding, BorderStyle, Config, ExecCommand, Layout,
    WorkspaceAssignment,
};
use crate::tables::ConfigCall;

/// Workspace numbers the window manager accepts.
const MAX_WORKSPACE: i64 = 1000;

/// Accumulates a [`Config`] across handler invocations of one parse.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
    /// Name of the mode block currently open, if any.
    current_mode: Option<String>,
    /// Bar block currently open, if any.
    current_bar: Option<BarConfig>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finishes the build and hands out the config.
    pub fn finish(self) -> Config {
        self.config
    }

    fn captured(ctx: &CallCtx<'_>, identifier: &str) -> String {
        ctx.get_string(identifier).unwrap_or_default().to_string()
    }

    fn binding_from(ctx: &CallCtx<'_>) -> Option<Binding> {
        let kind = BindKind::from_directive(ctx.get_string("bindtype").unwrap_or_default())?;
        Some(Binding {
            kind,
            release: ctx.get_string("release").is_some(),
            combo: Self::captured(ctx, "combo"),
            command: Self::captured(ctx, "command"),
        })
    }

    fn bar_mut(&mut self) -> &mut BarConfig {
        self.current_bar.get_or_insert_with(BarConfig::default)
    }
}

impl Dispatch for ConfigBuilder {
    type Call = ConfigCall;

    fn call(&mut self, call: ConfigCall, ctx: &mut CallCtx<'_>) {
        match call {
            ConfigCall::Font => {
                self.config.font = ctx.get_string("font").map(str::to_string);
            }
            ConfigCall::FloatingModifier => {
                self.config.floating_modifier = ctx.get_string("modifiers").map(str::to_string);
            }
            ConfigCall::DefaultBorder => {
                match BorderStyle::from_name(ctx.get_string("border").unwrap_or_default()) {
                    Some(style) => self.config.default_border = Some(style),
                    None => ctx.error("unknown default_border style"),
                }
            }
            ConfigCall::WorkspaceLayout => {
                match Layout::from_name(ctx.get_string("layout").unwrap_or_default()) {
                    Some(layout) => self.config.workspace_layout = layout,
                    None => ctx.error("unknown workspace_layout"),
                }
            }
            ConfigCall::FocusFollowsMouse => {
                self.config.focus_follows_mouse = Some(ctx.get_string("value") == Some("yes"));
            }
            ConfigCall::Workspace => {
                let number = ctx.get_long("workspace");
                if (1..=MAX_WORKSPACE).contains(&number) {
                    self.config.workspaces.push(WorkspaceAssignment {
                        number,
                        output: Self::captured(ctx, "output"),
                    });
                } else {
                    ctx.error(format!(
                        "workspace number {} out of range (1..={})",
                        number, MAX_WORKSPACE
                    ));
                }
            }
            ConfigCall::Exec => {
                self.config.execs.push(ExecCommand {
                    command: Self::captured(ctx, "command"),
                    startup_notify: ctx.get_string("nosn").is_none(),
                    always: ctx.get_string("exectype") == Some("exec_always"),
                });
            }
            ConfigCall::Binding => match Self::binding_from(ctx) {
                Some(binding) => self.config.bindings.push(binding),
                None => ctx.error("binding without bindsym/bindcode directive"),
            },
            ConfigCall::EnterMode => {
                let name = Self::captured(ctx, "mode");
                if self.config.modes.contains_key(&name) {
                    ctx.warn(format!("mode \"{}\" redefined, bindings accumulate", name));
                }
                self.config.modes.entry(name.clone()).or_insert_with(Vec::new);
                self.current_mode = Some(name);
            }
            ConfigCall::ModeBinding => match (&self.current_mode, Self::binding_from(ctx)) {
                (Some(mode), Some(binding)) => {
                    if let Some(bindings) = self.config.modes.get_mut(mode) {
                        bindings.push(binding);
                    }
                }
                _ => ctx.error("mode binding outside a mode block"),
            },
            ConfigCall::BarPosition => {
                match BarPosition::from_name(ctx.get_string("position").unwrap_or_default()) {
                    Some(position) => self.bar_mut().position = position,
                    None => ctx.error("unknown bar position"),
                }
            }
            ConfigCall::BarStatusCommand => {
                self.bar_mut().status_command = Some(Self::captured(ctx, "command"));
            }
            ConfigCall::BarFinish => {
                let bar = self.current_bar.take().unwrap_or_default();
                self.config.bars.push(bar);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wispcfg_par::{parse, ParseContext};

    use crate::tables::GRAMMAR;

    fn build(input: &str) -> (Config, ParseContext) {
        let mut builder = ConfigBuilder::new();
        let mut context = ParseContext::new();
        parse(input, &GRAMMAR, &mut builder, &mut context).expect("grammar tables are sound");
        (builder.finish(), context)
    }

    #[test]
    fn test_font_directive() {
        let (config, ctx) = build("font pango:monospace 10\n");
        assert_eq!(config.font.as_deref(), Some("pango:monospace 10"));
        assert!(!ctx.has_errors);
    }

    #[test]
    fn test_workspace_assignment() {
        let (config, _) = build("workspace 5 output HDMI-1\n");
        assert_eq!(
            config.workspaces,
            [WorkspaceAssignment {
                number: 5,
                output: "HDMI-1".to_string(),
            }]
        );
    }

    #[test]
    fn test_workspace_number_out_of_range_flags_error() {
        let (config, ctx) = build("workspace 0 output DP-1\n");
        assert!(config.workspaces.is_empty());
        assert!(ctx.has_errors);
    }

    #[test]
    fn test_exec_variants() {
        let (config, _) = build("exec --no-startup-id foo --bar\nexec_always restore-layout\n");
        assert_eq!(
            config.execs,
            [
                ExecCommand {
                    command: "foo --bar".to_string(),
                    startup_notify: false,
                    always: false,
                },
                ExecCommand {
                    command: "restore-layout".to_string(),
                    startup_notify: true,
                    always: true,
                },
            ]
        );
    }

    #[test]
    fn test_binding_with_release() {
        let (config, _) = build("bindsym --release Mod4+x kill\n");
        assert_eq!(
            config.bindings,
            [Binding {
                kind: BindKind::Sym,
                release: true,
                combo: "Mod4+x".to_string(),
                command: "kill".to_string(),
            }]
        );
    }

    #[test]
    fn test_bindcode_kind() {
        let (config, _) = build("bindcode 133 exec menu\n");
        assert_eq!(config.bindings[0].kind, BindKind::Code);
        assert_eq!(config.bindings[0].combo, "133");
    }

    #[test]
    fn test_mode_block_collects_bindings() {
        let input = "mode \"resize\" {\n  bindsym h resize shrink\n  bindsym l resize grow\n}\n";
        let (config, ctx) = build(input);
        assert_eq!(config.modes.len(), 1);
        let bindings = &config.modes["resize"];
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].combo, "h");
        assert_eq!(bindings[1].command, "resize grow");
        assert!(!ctx.has_errors);
    }

    #[test]
    fn test_modes_keep_declaration_order() {
        let input = "mode \"zz\" {\n}\nmode \"aa\" {\n}\n";
        let (config, _) = build(input);
        let names: Vec<&str> = config.modes.keys().map(String::as_str).collect();
        assert_eq!(names, ["zz", "aa"]);
    }

    #[test]
    fn test_bar_block() {
        let input = "bar {\n  position top\n  status_command wisp-status --short\n}\n";
        let (config, _) = build(input);
        assert_eq!(config.bars.len(), 1);
        assert_eq!(config.bars[0].position, BarPosition::Top);
        assert_eq!(
            config.bars[0].status_command.as_deref(),
            Some("wisp-status --short")
        );
    }

    #[test]
    fn test_empty_bar_block_uses_defaults() {
        let (config, _) = build("bar {\n}\n");
        assert_eq!(config.bars, [BarConfig::default()]);
    }

    #[test]
    fn test_focus_follows_mouse() {
        let (config, _) = build("focus_follows_mouse no\n");
        assert_eq!(config.focus_follows_mouse, Some(false));
    }

    #[test]
    fn test_workspace_layout_vs_workspace_ordering() {
        // `workspace_layout` shares a prefix with `workspace`; table
        // order must route it to the layout handler.
        let (config, ctx) = build("workspace_layout tabbed\n");
        assert_eq!(config.workspace_layout, Layout::Tabbed);
        assert!(config.workspaces.is_empty());
        assert!(!ctx.has_errors);
    }
}
