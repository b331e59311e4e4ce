//! Character-level scanner that the tokenizer drives.
//!
//! The scanner owns the preprocessed input and exposes a code-point cursor
//! with peeking, marking and rollback. Indexing is strictly by code point:
//! a single character may span multiple bytes in the underlying buffer, so
//! the scanner keeps a byte offset per code point to be able to slice the
//! buffer and to anchor regex scans at the cursor.

use lazy_static::lazy_static;
use regex::Regex;

use crate::unicode;

lazy_static! {
    static ref RE_DIGITS: Regex = Regex::new("^[0-9]+").expect("valid pattern");
    static ref RE_HEX: Regex = Regex::new("^[0-9A-Fa-f]{1,6}").expect("valid pattern");
    static ref RE_FRACTION: Regex = Regex::new(r"^\.[0-9]+").expect("valid pattern");
}

/// The sub-matches of a numeric literal, as produced by
/// [`Scanner::scan_number_str`]. Absent fields denote parts the literal does
/// not carry (`.5` has no integer part, `12` has no fraction or exponent).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumberParts {
    pub sign: Option<String>,
    pub integer: Option<String>,
    pub fractional: Option<String>,
    pub exponent_sign: Option<String>,
    pub exponent: Option<String>,
}

/// Code-point cursor over preprocessed input.
pub struct Scanner {
    /// Preprocessed input text
    input: String,
    /// The input split into code points
    chars: Vec<char>,
    /// Byte offset into `input` for each code point
    byte_offsets: Vec<usize>,
    /// Index of the next code point to consume
    pos: usize,
    /// The most recently consumed code point
    current: Option<char>,
    /// Start of the span that will become the next token's raw text
    marker: usize,
}

impl Scanner {
    /// Creates a scanner over already-preprocessed text (see
    /// [`crate::preprocessor::preprocess`]).
    pub fn new(input: &str) -> Self {
        let mut chars = Vec::with_capacity(input.len());
        let mut byte_offsets = Vec::with_capacity(input.len());
        for (offset, c) in input.char_indices() {
            chars.push(c);
            byte_offsets.push(offset);
        }

        Self {
            input: input.to_string(),
            chars,
            byte_offsets,
            pos: 0,
            current: None,
            marker: 0,
        }
    }

    /// Rewinds the scanner to its pristine state.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.current = None;
        self.marker = 0;
    }

    /// Number of code points in the input.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true when the input contains no code points at all.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true when every code point has been consumed.
    pub fn eos(&self) -> bool {
        self.pos == self.len()
    }

    /// Index of the next code point to consume.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The most recently consumed code point, if any.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// The marked position (see [`Scanner::mark`]).
    pub fn marker(&self) -> usize {
        self.marker
    }

    /// Consumes and returns the next code point, or `None` at the end of the
    /// stream (without advancing).
    pub fn consume(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        self.current = Some(c);
        Some(c)
    }

    /// Consumes everything up to the end of the stream and returns it.
    pub fn consume_rest(&mut self) -> String {
        if self.eos() {
            return String::new();
        }

        let rest = self.input[self.byte_at(self.pos)..].to_string();
        self.current = rest.chars().last();
        self.pos = self.len();
        rest
    }

    /// The next code point, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The code point after the next one, without consuming.
    pub fn peek1(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// The next `n` code points as a string; shorter than `n` near the end of
    /// the stream.
    pub fn peekn(&self, n: usize) -> String {
        let end = (self.pos + n).min(self.len());
        self.chars[self.pos..end].iter().collect()
    }

    /// Pushes the most recently consumed code point back onto the stream, so
    /// the next [`Scanner::consume`] re-emits it.
    pub fn reconsume(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    /// Marks the current position as the start of a token.
    pub fn mark(&mut self) {
        self.marker = self.pos;
    }

    /// The text between the marker and the cursor, or `None` when that span
    /// is empty.
    pub fn marked(&self) -> Option<String> {
        if self.marker >= self.pos {
            return None;
        }

        Some(self.input[self.byte_at(self.marker)..self.byte_at(self.pos)].to_string())
    }

    /// Tries to match an anchored pattern at the cursor. On success the
    /// cursor advances past the match and the matched text is returned.
    pub fn scan(&mut self, pattern: &Regex) -> Option<String> {
        let rest = &self.input[self.byte_at(self.pos)..];
        let matched = pattern.find(rest)?;
        if matched.start() != 0 || matched.as_str().is_empty() {
            return None;
        }

        let text = matched.as_str().to_string();
        self.pos += text.chars().count();
        self.current = text.chars().last();
        Some(text)
    }

    /// Runs `f` inside a save/restore of the marker and returns the span `f`
    /// consumed, or `None` when `f` aborts (returns false) or consumed
    /// nothing.
    pub fn marking<F>(&mut self, f: F) -> Option<String>
    where
        F: FnOnce(&mut Scanner) -> bool,
    {
        let saved = self.marker;
        self.mark();
        let result = if f(self) { self.marked() } else { None };
        self.marker = saved;
        result
    }

    /// Runs `f` transactionally: when `f` returns `None` the position,
    /// current code point and marker are restored to their values on entry.
    pub fn with_rollback<T, F>(&mut self, f: F) -> Option<T>
    where
        F: FnOnce(&mut Scanner) -> Option<T>,
    {
        let (pos, current, marker) = (self.pos, self.current, self.marker);

        let result = f(self);
        if result.is_none() {
            self.pos = pos;
            self.current = current;
            self.marker = marker;
        }

        result
    }

    /// Consumes a run of ASCII digits.
    pub fn scan_digits(&mut self) -> Option<String> {
        self.scan(&RE_DIGITS)
    }

    /// Consumes up to six hex digits.
    pub fn scan_hex(&mut self) -> Option<String> {
        self.scan(&RE_HEX)
    }

    /// Consumes a fractional part: a `.` followed by at least one digit.
    pub fn scan_decimal(&mut self) -> Option<String> {
        self.scan(&RE_FRACTION)
    }

    /// Consumes code points while `pred` holds.
    pub fn scan_while<P>(&mut self, pred: P) -> Option<String>
    where
        P: Fn(char) -> bool,
    {
        self.marking(|scanner| {
            while let Some(c) = scanner.peek() {
                if !pred(c) {
                    break;
                }
                scanner.consume();
            }
            true
        })
    }

    /// Consumes an exponent part: `e` or `E`, an optional sign, and at least
    /// one digit. Rolls back and returns `None` when the digits are missing,
    /// so `5em` keeps its unit.
    pub fn scan_number_exponent(&mut self) -> Option<String> {
        self.with_rollback(|scanner| {
            scanner.marking(|scanner| {
                match scanner.peek() {
                    Some('e') | Some('E') => scanner.consume(),
                    _ => return false,
                };

                if matches!(scanner.peek(), Some(c) if unicode::is_plus_minus(c)) {
                    scanner.consume();
                }

                scanner.scan_digits().is_some()
            })
        })
    }

    /// Splits a numeric literal at the cursor into its parts. Rolls back and
    /// returns `None` when there is neither an integer nor a fractional part.
    pub fn scan_number_str(&mut self) -> Option<NumberParts> {
        self.with_rollback(|scanner| {
            let mut parts = NumberParts::default();

            if matches!(scanner.peek(), Some(c) if unicode::is_plus_minus(c)) {
                parts.sign = scanner.consume().map(String::from);
            }

            parts.integer = scanner.scan_digits();

            if let Some(fraction) = scanner.scan_decimal() {
                parts.fractional = Some(fraction[1..].to_string());
            }

            if parts.integer.is_none() && parts.fractional.is_none() {
                return None;
            }

            if matches!(scanner.peek(), Some('e') | Some('E')) {
                let exponent = scanner.with_rollback(|scanner| {
                    scanner.consume();

                    let mut sign = None;
                    if matches!(scanner.peek(), Some(c) if unicode::is_plus_minus(c)) {
                        sign = scanner.consume().map(String::from);
                    }

                    scanner.scan_digits().map(|digits| (sign, digits))
                });

                if let Some((sign, digits)) = exponent {
                    parts.exponent_sign = sign;
                    parts.exponent = Some(digits);
                }
            }

            Some(parts)
        })
    }

    /// True when a quoted url argument starts at the cursor: a quote, or one
    /// whitespace code point followed by a quote.
    pub fn quoted_url_start(&self) -> bool {
        match self.peek() {
            Some('"') | Some('\'') => true,
            Some(c) if unicode::is_whitespace(c) => {
                matches!(self.peek1(), Some('"') | Some('\''))
            }
            _ => false,
        }
    }

    /// True when the body of a unicode-range starts at the cursor: a `+`
    /// followed by a hex digit or `?`.
    pub fn unicode_range_start(&self) -> bool {
        self.peek() == Some('+')
            && matches!(self.peek1(), Some(c) if unicode::is_hex_digit(c) || c == '?')
    }

    /// True when the end half of a unicode-range starts at the cursor: a `-`
    /// followed by a hex digit.
    pub fn unicode_range_end(&self) -> bool {
        self.peek() == Some('-') && matches!(self.peek1(), Some(c) if unicode::is_hex_digit(c))
    }

    /// Byte offset of the code point at `index`; one past the buffer for the
    /// end of the stream.
    fn byte_at(&self, index: usize) -> usize {
        match self.byte_offsets.get(index) {
            Some(offset) => *offset,
            None => self.input.len(),
        }
    }
}
