//! The configuration model populated by the semantic handlers.

use indexmap::IndexMap;
use serde::Serialize;

/// Window border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Normal,
    Pixel,
    None,
}

impl BorderStyle {
    /// Maps the grammar's literal spellings. Returns `None` for
    /// anything the tables would not have matched.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::Normal),
            "pixel" => Some(Self::Pixel),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Layout new workspaces start in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    Stacking,
    Tabbed,
}

impl Layout {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "stacking" => Some(Self::Stacking),
            "tabbed" => Some(Self::Tabbed),
            _ => None,
        }
    }
}

/// Screen edge the bar docks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarPosition {
    Top,
    #[default]
    Bottom,
}

impl BarPosition {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Whether a binding names a keysym or a keycode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindKind {
    Sym,
    Code,
}

impl BindKind {
    /// Maps the `bindsym`/`bindcode` spellings captured by the tables.
    pub fn from_directive(directive: &str) -> Option<Self> {
        match directive {
            "bindsym" => Some(Self::Sym),
            "bindcode" => Some(Self::Code),
            _ => None,
        }
    }
}

/// One key binding, top-level or inside a mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub kind: BindKind,
    /// Fires on key release instead of press.
    pub release: bool,
    /// The modifier+key combination, e.g. `Mod4+Return`.
    pub combo: String,
    pub command: String,
}

/// A `workspace N output O` assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorkspaceAssignment {
    pub number: i64,
    pub output: String,
}

/// An `exec` / `exec_always` directive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExecCommand {
    pub command: String,
    /// False when `--no-startup-id` was given.
    pub startup_notify: bool,
    /// True for `exec_always` (re-run on reload).
    pub always: bool,
}

/// One `bar { ... }` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BarConfig {
    pub position: BarPosition,
    pub status_command: Option<String>,
}

/// Everything a configuration file can set.
///
/// Modes keep their declaration order; the window manager cycles
/// through them in the order the user wrote them.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Config {
    pub font: Option<String>,
    pub floating_modifier: Option<String>,
    pub default_border: Option<BorderStyle>,
    pub workspace_layout: Layout,
    pub focus_follows_mouse: Option<bool>,
    pub workspaces: Vec<WorkspaceAssignment>,
    pub execs: Vec<ExecCommand>,
    pub bindings: Vec<Binding>,
    pub modes: IndexMap<String, Vec<Binding>>,
    pub bars: Vec<BarConfig>,
}
