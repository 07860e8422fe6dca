//! Variable preprocessing.
//!
//! `set $name value` lines define textual variables that are
//! substituted across the whole buffer before parsing. The grammar
//! itself skips `set` lines (they route to an ignore-line state), so
//! this pass only has to collect definitions and rewrite occurrences.
//!
//! Substitution is longest-name-first so `$mod2` is never clobbered by
//! a definition of `$mod`.

use rustc_hash::FxHashMap;

/// Extracts the variable definition from one line, if it is a `set`
/// line. The returned name includes the leading `$`.
fn parse_set_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start_matches([' ', '\t']);
    let rest = rest.strip_prefix("set")?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let rest = rest.trim_start_matches([' ', '\t']);
    if !rest.starts_with('$') {
        return None;
    }

    let name_end = rest.find([' ', '\t']).unwrap_or(rest.len());
    let (name, value) = rest.split_at(name_end);
    if name.len() < 2 {
        return None;
    }
    let value = value.trim_start_matches([' ', '\t']).trim_end_matches('\r');
    Some((name, value))
}

/// Collects every variable definition in the buffer. A name defined
/// twice keeps its last value.
fn collect_variables(input: &str) -> FxHashMap<&str, &str> {
    let mut variables = FxHashMap::default();
    for line in input.lines() {
        if let Some((name, value)) = parse_set_line(line) {
            variables.insert(name, value);
        }
    }
    variables
}

/// Replaces every `$name` occurrence with its value.
///
/// Occurrences are matched longest-name-first; a `$` that matches no
/// variable is copied through unchanged. Values are not re-scanned, so
/// definitions cannot expand recursively.
pub fn substitute_variables(input: &str) -> String {
    let variables = collect_variables(input);
    if variables.is_empty() {
        return input.to_string();
    }

    let mut names: Vec<&str> = variables.keys().copied().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    'copy: while !rest.is_empty() {
        if rest.starts_with('$') {
            for name in &names {
                if rest.starts_with(name) {
                    out.push_str(variables[name]);
                    rest = &rest[name.len()..];
                    continue 'copy;
                }
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
            rest = chars.as_str();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_line() {
        assert_eq!(parse_set_line("set $mod Mod4"), Some(("$mod", "Mod4")));
        assert_eq!(
            parse_set_line("  set\t$term wisp-terminal --login"),
            Some(("$term", "wisp-terminal --login"))
        );
        assert_eq!(parse_set_line("set $mod Mod4\r"), Some(("$mod", "Mod4")));
    }

    #[test]
    fn test_parse_set_line_rejects_non_definitions() {
        assert_eq!(parse_set_line("settings foo"), None);
        assert_eq!(parse_set_line("set mod Mod4"), None);
        assert_eq!(parse_set_line("set $ Mod4"), None);
        assert_eq!(parse_set_line("bindsym $mod+Return exec foo"), None);
    }

    #[test]
    fn test_substitution_basic() {
        let input = "set $mod Mod4\nbindsym $mod+Return exec term\n";
        assert_eq!(
            substitute_variables(input),
            "set Mod4 Mod4\nbindsym Mod4+Return exec term\n"
        );
    }

    #[test]
    fn test_substitution_longest_name_wins() {
        let input = "set $mod Mod4\nset $mod2 Mod2\nbindsym $mod2+x exec foo\n";
        let result = substitute_variables(input);
        assert!(result.contains("bindsym Mod2+x exec foo"));
    }

    #[test]
    fn test_unknown_dollar_passes_through() {
        let input = "set $mod Mod4\nexec echo $HOME\n";
        let result = substitute_variables(input);
        assert!(result.contains("exec echo $HOME"));
    }

    #[test]
    fn test_no_variables_is_identity() {
        let input = "font monospace\nworkspace 1 output DP-1\n";
        assert_eq!(substitute_variables(input), input);
    }

    #[test]
    fn test_last_definition_wins() {
        let input = "set $m a\nset $m b\nexec $m\n";
        let result = substitute_variables(input);
        assert!(result.ends_with("exec b\n"));
    }
}
