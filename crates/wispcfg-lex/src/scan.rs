//! Token recognizers.
//!
//! Each recognizer implements the matching rules for one token kind of
//! the grammar. A recognizer that fails leaves the scanner position
//! unchanged; a recognizer that succeeds consumes exactly the matched
//! input. Which recognizer runs at a given position is decided by the
//! parser driver from its current state's token table, so there is no
//! longest-match rule here: candidate order in the table is the
//! tie-breaker.

use crate::cursor::Cursor;

/// Bytes that terminate the unquoted form of a `word` token.
const WORD_DELIMITERS: &[u8] = &[b' ', b'\t', b']', b',', b';', b'\r', b'\n'];

/// State-directed tokenizer over a configuration buffer.
///
/// Tracks the cursor plus the 1-based line counter used by diagnostics.
/// The line counter is advanced by the `line` and `end` recognizers,
/// which are the only ones that consume line terminators.
///
/// # Example
///
/// ```
/// use wispcfg_lex::Scanner;
///
/// let mut scanner = Scanner::new("workspace 5\n");
/// assert!(scanner.scan_literal("workspace"));
/// scanner.skip_blank();
/// assert_eq!(scanner.scan_number(), Some(5));
/// assert!(scanner.scan_end());
/// assert_eq!(scanner.line(), 2);
/// ```
pub struct Scanner<'a> {
    cursor: Cursor<'a>,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner at the start of `input`, on line 1.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            line: 1,
        }
    }

    /// Returns the full input text.
    pub fn input(&self) -> &'a str {
        self.cursor.input()
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns true once the virtual NUL at end-of-input has been
    /// consumed.
    pub fn finished(&self) -> bool {
        self.cursor.past_end()
    }

    /// Skips horizontal whitespace (spaces and tabs).
    ///
    /// Line terminators are never skipped; they separate directives and
    /// must be consumed by an `end` or `line` token.
    pub fn skip_blank(&mut self) {
        while matches!(self.cursor.byte(), b' ' | b'\t') {
            self.cursor.bump();
        }
    }

    /// Matches a literal spelling, ASCII-case-insensitively.
    ///
    /// This is a plain prefix comparison: `scan_literal("no")` matches
    /// the input `nope`. Grammars that need a boundary put the longer
    /// spelling earlier in the token table.
    pub fn scan_literal(&mut self, spelling: &str) -> bool {
        let rest = self.cursor.rest().as_bytes();
        if rest.len() >= spelling.len()
            && rest[..spelling.len()].eq_ignore_ascii_case(spelling.as_bytes())
        {
            self.cursor.bump_n(spelling.len());
            return true;
        }
        false
    }

    /// Matches a signed decimal integer.
    ///
    /// # Returns
    ///
    /// The parsed value, or `None` when no digit follows the optional
    /// sign or the value overflows `i64` (an overflowing number is not a
    /// number token; some later candidate may still match).
    pub fn scan_number(&mut self) -> Option<i64> {
        let bytes = self.cursor.input().as_bytes();
        let start = self.cursor.offset();

        let mut i = start;
        let mut negative = false;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            negative = bytes[i] == b'-';
            i += 1;
        }

        // Accumulate negated so that i64::MIN parses without overflow.
        let digits_start = i;
        let mut value: i64 = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            let digit = i64::from(bytes[i] - b'0');
            value = value.checked_mul(10)?.checked_sub(digit)?;
            i += 1;
        }
        if i == digits_start {
            return None;
        }

        let value = if negative { value } else { value.checked_neg()? };
        self.cursor.bump_n(i - start);
        Some(value)
    }

    /// Matches a `string` token: quoted, or unquoted up to end-of-line.
    pub fn scan_string(&mut self) -> Option<String> {
        self.scan_text(false)
    }

    /// Matches a `word` token: quoted like a string, or unquoted up to
    /// whitespace, `]`, `,`, `;` or end-of-line.
    pub fn scan_word(&mut self) -> Option<String> {
        self.scan_text(true)
    }

    /// Shared implementation of `string` and `word`.
    ///
    /// Quoted form: the content runs from after the opening `"` to the
    /// next quote not preceded by a backslash (the scan looks exactly
    /// one byte back, so a quote after `\\` keeps the string open); an
    /// unterminated quoted value is accepted up to end-of-input. The
    /// closing quote, when present, is consumed but not captured.
    ///
    /// In both forms the only escape sequence is `\"`, which captures a
    /// literal quote; every other backslash is kept verbatim so values
    /// holding regular expressions survive unmangled.
    ///
    /// A match needs at least one byte of content.
    fn scan_text(&mut self, word: bool) -> Option<String> {
        let input = self.cursor.input();
        let bytes = input.as_bytes();
        let start = self.cursor.offset();
        if start >= bytes.len() {
            return None;
        }

        let (content, end) = if bytes[start] == b'"' {
            let content_start = start + 1;
            let mut i = content_start;
            while i < bytes.len() && (bytes[i] != b'"' || bytes[i - 1] == b'\\') {
                i += 1;
            }
            if i == content_start {
                return None;
            }
            let end = if i < bytes.len() && bytes[i] == b'"' {
                i + 1
            } else {
                i
            };
            (&input[content_start..i], end)
        } else {
            let mut i = start;
            if word {
                while i < bytes.len() && !WORD_DELIMITERS.contains(&bytes[i]) {
                    i += 1;
                }
            } else {
                while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
                    i += 1;
                }
            }
            if i == start {
                return None;
            }
            (&input[start..i], i)
        };

        let value = content.replace("\\\"", "\"");
        self.cursor.bump_n(end - start);
        Some(value)
    }

    /// Matches a `line` token: everything up to the next line
    /// terminator, plus one terminator position. Always succeeds.
    pub fn scan_line(&mut self) {
        let bytes = self.cursor.input().as_bytes();
        let mut i = self.cursor.offset();
        while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
            i += 1;
        }
        self.cursor.bump_n(i - self.cursor.offset());
        self.cursor.bump();
        self.line += 1;
    }

    /// Matches an `end` token: a line terminator or the virtual NUL.
    ///
    /// Consumes one position on success. Consuming the NUL position is
    /// what finishes the parse, so a final directive without a trailing
    /// newline is still terminated. A CRLF terminator satisfies two
    /// `end` matches (one per byte).
    pub fn scan_end(&mut self) -> bool {
        match self.cursor.byte() {
            0 | b'\r' | b'\n' => {
                self.cursor.bump();
                self.line += 1;
                true
            }
            _ => false,
        }
    }

    /// Advances to the next LF without consuming it, or past the end of
    /// the input when no LF remains. Used by error recovery to
    /// resynchronize at the next directive.
    pub fn skip_to_line_end(&mut self) {
        while !self.cursor.past_end() && self.cursor.byte() != b'\n' {
            self.cursor.bump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_blank_stops_at_newline() {
        let mut s = Scanner::new("  \t \nx");
        s.skip_blank();
        assert_eq!(s.offset(), 4);
    }

    #[test]
    fn test_literal_case_insensitive() {
        let mut s = Scanner::new("WorkSpace 1");
        assert!(s.scan_literal("workspace"));
        assert_eq!(s.offset(), 9);
    }

    #[test]
    fn test_literal_no_match_leaves_cursor() {
        let mut s = Scanner::new("window");
        assert!(!s.scan_literal("workspace"));
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_literal_matches_prefix() {
        // No boundary rule: descriptor order disambiguates in grammars.
        let mut s = Scanner::new("exec_always foo");
        assert!(s.scan_literal("exec"));
        assert_eq!(s.offset(), 4);
    }

    #[test]
    fn test_literal_at_end_of_input() {
        let mut s = Scanner::new("mod");
        assert!(!s.scan_literal("mode"));
        assert!(s.scan_literal("mod"));
    }

    #[test]
    fn test_number_plain() {
        let mut s = Scanner::new("42 rest");
        assert_eq!(s.scan_number(), Some(42));
        assert_eq!(s.offset(), 2);
    }

    #[test]
    fn test_number_signs() {
        assert_eq!(Scanner::new("-7").scan_number(), Some(-7));
        assert_eq!(Scanner::new("+7").scan_number(), Some(7));
    }

    #[test]
    fn test_number_requires_digit() {
        let mut s = Scanner::new("- 5");
        assert_eq!(s.scan_number(), None);
        assert_eq!(s.offset(), 0);
        assert_eq!(Scanner::new("abc").scan_number(), None);
    }

    #[test]
    fn test_number_limits() {
        assert_eq!(
            Scanner::new("9223372036854775807").scan_number(),
            Some(i64::MAX)
        );
        assert_eq!(
            Scanner::new("-9223372036854775808").scan_number(),
            Some(i64::MIN)
        );
    }

    #[test]
    fn test_number_overflow_is_no_match() {
        let mut s = Scanner::new("9223372036854775808");
        assert_eq!(s.scan_number(), None);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_string_unquoted_runs_to_eol() {
        let mut s = Scanner::new("exec --no-startup-id foo\nnext");
        assert_eq!(s.scan_string().as_deref(), Some("exec --no-startup-id foo"));
        assert_eq!(s.offset(), 24);
    }

    #[test]
    fn test_string_quoted() {
        let mut s = Scanner::new("\"hello world\" tail");
        assert_eq!(s.scan_string().as_deref(), Some("hello world"));
        // Closing quote consumed, not captured.
        assert_eq!(s.offset(), 13);
    }

    #[test]
    fn test_string_quoted_escape() {
        let mut s = Scanner::new("\"echo \\\"hi\\\"\"");
        assert_eq!(s.scan_string().as_deref(), Some("echo \"hi\""));
    }

    #[test]
    fn test_string_other_backslashes_verbatim() {
        let mut s = Scanner::new("\"^\\d+$\"");
        assert_eq!(s.scan_string().as_deref(), Some("^\\d+$"));
    }

    #[test]
    fn test_string_empty_quoted_no_match() {
        let mut s = Scanner::new("\"\" tail");
        assert_eq!(s.scan_string(), None);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_string_unterminated_quoted_accepted() {
        let mut s = Scanner::new("\"never closed");
        assert_eq!(s.scan_string().as_deref(), Some("never closed"));
        assert_eq!(s.offset(), 13);
    }

    #[test]
    fn scan_string_backslash_backslash_quote_keeps_string_open() {
        // The closing-quote scan looks one byte back only, so the quote
        // after a doubled backslash is still treated as escaped and the
        // string runs on to the next unescaped quote. The unescape pass
        // then collapses that `\"` pair as usual.
        let mut s = Scanner::new("\"a\\\\\" b\" tail");
        assert_eq!(s.scan_string().as_deref(), Some("a\\\" b"));
        assert_eq!(s.offset(), 8);
    }

    #[test]
    fn test_string_quoted_spans_newline() {
        let mut s = Scanner::new("\"two\nlines\" x");
        assert_eq!(s.scan_string().as_deref(), Some("two\nlines"));
    }

    #[test]
    fn test_word_stops_at_delimiters() {
        for (input, expected) in [
            ("Mod4+Return exec", "Mod4+Return"),
            ("left]", "left"),
            ("a,b", "a"),
            ("cmd;next", "cmd"),
            ("word\nnext", "word"),
        ] {
            let mut s = Scanner::new(input);
            assert_eq!(s.scan_word().as_deref(), Some(expected), "input {input:?}");
        }
    }

    #[test]
    fn test_word_quoted_form_like_string() {
        let mut s = Scanner::new("\"two words\" x");
        assert_eq!(s.scan_word().as_deref(), Some("two words"));
    }

    #[test]
    fn test_word_at_delimiter_no_match() {
        let mut s = Scanner::new("; rest");
        assert_eq!(s.scan_word(), None);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_word_utf8_content() {
        let mut s = Scanner::new("японский next");
        assert_eq!(s.scan_word().as_deref(), Some("японский"));
    }

    #[test]
    fn test_line_consumes_terminator_and_counts() {
        let mut s = Scanner::new("# a comment\nnext");
        s.scan_line();
        assert_eq!(s.offset(), 12);
        assert_eq!(s.line(), 2);
    }

    #[test]
    fn test_line_without_terminator_finishes_input() {
        let mut s = Scanner::new("# trailing comment");
        s.scan_line();
        assert!(s.finished());
    }

    #[test]
    fn test_end_matches_lf_cr_nul() {
        assert!(Scanner::new("\n").scan_end());
        assert!(Scanner::new("\r\n").scan_end());
        assert!(Scanner::new("").scan_end());
        assert!(!Scanner::new("x").scan_end());
    }

    #[test]
    fn test_end_at_nul_finishes_input() {
        let mut s = Scanner::new("");
        assert!(s.scan_end());
        assert!(s.finished());
    }

    #[test]
    fn test_end_crlf_needs_two_matches() {
        let mut s = Scanner::new("\r\nx");
        assert!(s.scan_end());
        assert!(s.scan_end());
        assert_eq!(s.offset(), 2);
        assert_eq!(s.line(), 3);
    }

    #[test]
    fn test_skip_to_line_end_stops_at_lf() {
        let mut s = Scanner::new("garbage here\nnext");
        s.skip_to_line_end();
        assert_eq!(s.offset(), 12);
        assert!(!s.finished());
    }

    #[test]
    fn test_skip_to_line_end_without_lf_finishes() {
        let mut s = Scanner::new("garbage");
        s.skip_to_line_end();
        assert!(s.finished());
    }
}

#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// No recognizer may consume more than the remaining input plus
        /// the virtual NUL, whatever bytes it is fed.
        #[test]
        fn recognizers_stay_in_bounds(input in ".{0,80}") {
            let len = input.len();
            let mut s = Scanner::new(&input);
            s.skip_blank();
            let _ = s.scan_number();
            let _ = s.scan_word();
            let _ = s.scan_string();
            let _ = s.scan_end();
            prop_assert!(s.offset() <= len + 1);
        }

        /// A matched word never contains an unquoted-form delimiter
        /// unless it came from the quoted form.
        #[test]
        fn unquoted_word_has_no_delimiters(input in "[^\"]{1,40}") {
            if let Some(word) = Scanner::new(&input).scan_word() {
                for b in [b' ', b'\t', b']', b',', b';', b'\r', b'\n'] {
                    prop_assert!(!word.as_bytes().contains(&b));
                }
            }
        }

        /// Unquoted strings never span line terminators.
        #[test]
        fn unquoted_string_stays_on_line(input in "[^\"]{1,40}") {
            if let Some(value) = Scanner::new(&input).scan_string() {
                prop_assert!(!value.contains('\n'));
                prop_assert!(!value.contains('\r'));
            }
        }

        /// Number scanning agrees with std parsing on plain digit runs.
        #[test]
        fn number_agrees_with_std(n in any::<i64>()) {
            let text = n.to_string();
            prop_assert_eq!(Scanner::new(&text).scan_number(), Some(n));
        }
    }
}
