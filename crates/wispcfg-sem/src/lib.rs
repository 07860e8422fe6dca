//! wispcfg-sem - The wisp configuration grammar and its semantics.
//!
//! This crate turns the grammar-agnostic machinery of `wispcfg-par`
//! into the actual wisp config parser: the generated token tables
//! (`tables`), the handlers that build a [`Config`] (`handlers`), and
//! the `set $name value` variable preprocessing (`vars`).
//!
//! # Example
//!
//! ```
//! use wispcfg_par::ParseContext;
//! use wispcfg_sem::parse_config;
//!
//! let input = "set $mod Mod4\nbindsym $mod+Return exec wisp-terminal\n";
//! let mut context = ParseContext::for_file("wisp.conf");
//! let (config, output) = parse_config(input, &mut context).unwrap();
//! assert!(output.is_clean());
//! assert_eq!(config.bindings[0].combo, "Mod4+Return");
//! ```

pub mod config;
pub mod handlers;
pub mod tables;
pub mod vars;

pub use config::{
    BarConfig, BarPosition, BindKind, Binding, BorderStyle, Config, ExecCommand, Layout,
    WorkspaceAssignment,
};
pub use handlers::ConfigBuilder;
pub use tables::{ConfigCall, GRAMMAR};
pub use vars::substitute_variables;

use wispcfg_par::{FatalError, ParseContext, ParseOutput};

/// Preprocesses and parses a complete configuration buffer.
///
/// Runs variable substitution, then the table-driven parse. Syntax
/// errors land in the returned [`ParseOutput`] and set the context
/// error flag; the [`Config`] holds everything that did parse. `Err`
/// is reserved for grammar-table bugs and cannot be triggered by
/// input.
pub fn parse_config(
    input: &str,
    context: &mut ParseContext,
) -> Result<(Config, ParseOutput), FatalError> {
    let substituted = vars::substitute_variables(input);
    let mut builder = ConfigBuilder::new();
    let output = wispcfg_par::parse(&substituted, &GRAMMAR, &mut builder, context)?;
    Ok((builder.finish(), output))
}
