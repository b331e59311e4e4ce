//! CSS tokenizer according to the [w3 specification](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! The tokenizer walks the preprocessed input one code point at a time and
//! emits [`Token`]s. Every token records the literal span it was produced
//! from (`raw`), so concatenating the raw text of an emitted stream (with
//! comments preserved) reproduces the preprocessed input exactly.

use std::fmt;

use crate::config::TokenizerConfig;
use crate::preprocessor::preprocess;
use crate::scanner::Scanner;
use crate::unicode;

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A [`<whitespace-token>`](https://www.w3.org/TR/css-syntax-3/#whitespace-token-diagram);
    /// one token per whitespace code point, runs are left to the consumer
    Whitespace,
    /// An [`<ident-token>`](https://www.w3.org/TR/css-syntax-3/#ident-token-diagram)
    Ident,
    /// A [`<function-token>`](https://www.w3.org/TR/css-syntax-3/#function-token-diagram);
    /// the value does not include the `(`
    Function,
    /// An [`<at-keyword-token>`](https://www.w3.org/TR/css-syntax-3/#at-keyword-token-diagram);
    /// the value does not include the `@` marker
    AtKeyword,
    /// A [`<hash-token>`](https://www.w3.org/TR/css-syntax-3/#hash-token-diagram);
    /// the value does not include the `#` marker, the type flag is `Id` or
    /// `Unrestricted`
    Hash,
    /// A [`<string-token>`](https://www.w3.org/TR/css-syntax-3/#string-token-diagram);
    /// the value does not include the quotes
    String,
    /// A `<bad-string-token>`; always indicates a parse error
    BadString,
    /// A [`<url-token>`](https://www.w3.org/TR/css-syntax-3/#url-token-diagram)
    Url,
    /// A `<bad-url-token>`; always indicates a parse error
    BadUrl,
    /// A `<delim-token>`
    Delim,
    /// A `<number-token>`; the type flag is `Integer` or `Number`
    Number,
    /// A `<percentage-token>`
    Percentage,
    /// A `<dimension-token>`
    Dimension,
    /// A `<unicode-range-token>` with inclusive start/end code points
    UnicodeRange,
    /// `~=`
    IncludeMatch,
    /// `|=`
    DashMatch,
    /// `^=`
    PrefixMatch,
    /// `$=`
    SuffixMatch,
    /// `*=`
    SubstringMatch,
    /// `||`
    Column,
    /// `<!--`
    Cdo,
    /// `-->`
    Cdc,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// A comment; only emitted when `preserve_comments` is set
    Comment,
}

/// Payload of a token. Textual tokens carry decoded text (escapes resolved),
/// delimiters carry their code point, numeric tokens carry the converted
/// value coerced per their type flag.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Char(char),
    Str(String),
    Integer(i64),
    Float(f64),
}

/// Secondary classification: `Id`/`Unrestricted` for hash tokens,
/// `Integer`/`Number` for numeric tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFlag {
    Id,
    Unrestricted,
    Integer,
    Number,
}

/// A single token produced by the [`Tokenizer`].
///
/// `kind`, `pos` and `raw` are always meaningful; the remaining fields are
/// populated depending on the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Kind of the token
    pub kind: TokenKind,
    /// Code-point index of the start of the token in the preprocessed input
    pub pos: usize,
    /// The literal text the token was produced from
    pub raw: String,
    /// Decoded value, when the kind carries one
    pub value: Option<TokenValue>,
    /// Hash or numeric type flag
    pub type_flag: Option<TypeFlag>,
    /// Unit of a dimension token
    pub unit: Option<String>,
    /// Literal representation of a numeric value, before conversion
    pub repr: Option<String>,
    /// First code point of a unicode-range token
    pub start: Option<u32>,
    /// Last code point of a unicode-range token
    pub end: Option<u32>,
    /// True when producing this token was a parse error
    pub error: bool,
}

impl Token {
    /// Returns a new token of the given kind covering the given raw span.
    fn new(kind: TokenKind, pos: usize, raw: String) -> Token {
        Token {
            kind,
            pos,
            raw,
            value: None,
            type_flag: None,
            unit: None,
            repr: None,
            start: None,
            end: None,
            error: false,
        }
    }

    fn with_value(mut self, value: TokenValue) -> Token {
        self.value = Some(value);
        self
    }

    fn with_type_flag(mut self, type_flag: TypeFlag) -> Token {
        self.type_flag = Some(type_flag);
        self
    }

    fn with_unit(mut self, unit: String) -> Token {
        self.unit = Some(unit);
        self
    }

    fn with_repr(mut self, repr: String) -> Token {
        self.repr = Some(repr);
        self
    }

    fn with_range(mut self, start: u32, end: u32) -> Token {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    fn with_error(mut self) -> Token {
        self.error = true;
        self
    }
}

impl Token {
    /// Returns true when this token is the given delimiter.
    pub fn is_delim(&self, delim: char) -> bool {
        self.kind == TokenKind::Delim && self.value == Some(TokenValue::Char(delim))
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Ident
    }

    pub fn is_string(&self) -> bool {
        self.kind == TokenKind::String
    }
}

impl fmt::Display for Token {
    /// A token displays as its raw text, so a displayed token stream
    /// reproduces the preprocessed input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// CSS tokenizer over a single preprocessed input.
pub struct Tokenizer {
    scanner: Scanner,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Creates a tokenizer for the given source text. The input is
    /// preprocessed here; the scanner only ever sees normalized text.
    pub fn new(input: &str, config: TokenizerConfig) -> Self {
        Self::from_preprocessed(&preprocess(input), config)
    }

    /// Creates a tokenizer over text that has already been preprocessed
    /// (see [`crate::preprocessor`]), skipping the normalization pass.
    pub fn from_preprocessed(input: &str, config: TokenizerConfig) -> Self {
        Self {
            scanner: Scanner::new(input),
            config,
        }
    }

    /// Tokenizes the whole input and returns the tokens in source order.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.scanner.reset();

        let mut tokens = Vec::new();
        while let Some(token) = self.consume() {
            log::trace!("{:?}", token);
            tokens.push(token);
        }

        tokens
    }

    /// 4.3.1. [Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Returns `None` at the end of the stream.
    fn consume(&mut self) -> Option<Token> {
        loop {
            if self.scanner.eos() {
                return None;
            }
            self.scanner.mark();

            match self.consume_comments() {
                Some(comment) if self.config.preserve_comments => return Some(comment),
                Some(_) => continue,
                None => break,
            }
        }

        let c = self.scanner.consume()?;

        let token = match c {
            c if unicode::is_whitespace(c) => self.token(TokenKind::Whitespace),
            '"' | '\'' => self.consume_string(c),
            '#' => {
                let next = self.scanner.peek();
                if matches!(next, Some(c) if unicode::is_name_char(c))
                    || is_valid_escape(next, self.scanner.peek1())
                {
                    let type_flag = if self.next_starts_identifier() {
                        TypeFlag::Id
                    } else {
                        TypeFlag::Unrestricted
                    };
                    let value = self.consume_name();
                    self.token(TokenKind::Hash)
                        .with_value(TokenValue::Str(value))
                        .with_type_flag(type_flag)
                } else {
                    self.delim(c)
                }
            }
            '$' => {
                if self.scanner.peek() == Some('=') {
                    self.scanner.consume();
                    self.token(TokenKind::SuffixMatch)
                } else {
                    self.delim(c)
                }
            }
            '(' => self.token(TokenKind::LParen),
            ')' => self.token(TokenKind::RParen),
            '[' => self.token(TokenKind::LBracket),
            ']' => self.token(TokenKind::RBracket),
            '{' => self.token(TokenKind::LCurly),
            '}' => self.token(TokenKind::RCurly),
            ',' => self.token(TokenKind::Comma),
            ':' => self.token(TokenKind::Colon),
            ';' => self.token(TokenKind::Semicolon),
            '*' => {
                if self.scanner.peek() == Some('=') {
                    self.scanner.consume();
                    self.token(TokenKind::SubstringMatch)
                } else if self.config.preserve_hacks
                    && matches!(self.scanner.peek(), Some(c) if unicode::is_name_start(c))
                {
                    // IE "star property" hack
                    self.scanner.reconsume();
                    self.consume_ident()
                } else {
                    self.delim(c)
                }
            }
            '^' => {
                if self.scanner.peek() == Some('=') {
                    self.scanner.consume();
                    self.token(TokenKind::PrefixMatch)
                } else {
                    self.delim(c)
                }
            }
            '~' => {
                if self.scanner.peek() == Some('=') {
                    self.scanner.consume();
                    self.token(TokenKind::IncludeMatch)
                } else {
                    self.delim(c)
                }
            }
            '|' => match self.scanner.peek() {
                Some('=') => {
                    self.scanner.consume();
                    self.token(TokenKind::DashMatch)
                }
                Some('|') => {
                    self.scanner.consume();
                    self.token(TokenKind::Column)
                }
                _ => self.delim(c),
            },
            '+' | '.' => {
                if self.starts_number() {
                    self.scanner.reconsume();
                    self.consume_numeric()
                } else {
                    self.delim(c)
                }
            }
            '-' => {
                if self.starts_number() {
                    self.scanner.reconsume();
                    self.consume_numeric()
                } else if self.scanner.peekn(2) == "->" {
                    self.scanner.consume();
                    self.scanner.consume();
                    self.token(TokenKind::Cdc)
                } else if self.starts_identifier() {
                    self.scanner.reconsume();
                    self.consume_ident()
                } else {
                    self.delim(c)
                }
            }
            '<' => {
                if self.scanner.peekn(3) == "!--" {
                    self.scanner.consume();
                    self.scanner.consume();
                    self.scanner.consume();
                    self.token(TokenKind::Cdo)
                } else {
                    self.delim(c)
                }
            }
            '@' => {
                if self.next_starts_identifier() {
                    let value = self.consume_name();
                    self.token(TokenKind::AtKeyword)
                        .with_value(TokenValue::Str(value))
                } else {
                    self.delim(c)
                }
            }
            '\\' => {
                if is_valid_escape(Some(c), self.scanner.peek()) {
                    self.scanner.reconsume();
                    self.consume_ident()
                } else {
                    // parse error: a lone backslash
                    self.delim(c).with_error()
                }
            }
            'u' | 'U' => {
                if self.scanner.unicode_range_start() {
                    self.scanner.consume(); // '+'
                    self.consume_unicode_range()
                } else {
                    self.scanner.reconsume();
                    self.consume_ident()
                }
            }
            c if unicode::is_digit(c) => {
                self.scanner.reconsume();
                self.consume_numeric()
            }
            c if unicode::is_name_start(c) => {
                self.scanner.reconsume();
                self.consume_ident()
            }
            c => self.delim(c),
        };

        Some(token)
    }

    /// 4.3.2. [Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// Returns the comment token when one starts at the cursor; the caller
    /// decides whether to emit or discard it. An unterminated comment
    /// swallows the rest of the input and is flagged as a parse error.
    fn consume_comments(&mut self) -> Option<Token> {
        if self.scanner.peek() != Some('/') || self.scanner.peek1() != Some('*') {
            return None;
        }
        self.scanner.consume();
        self.scanner.consume();

        let value = self
            .scanner
            .marking(|scanner| {
                while !scanner.eos()
                    && !(scanner.peek() == Some('*') && scanner.peek1() == Some('/'))
                {
                    scanner.consume();
                }
                true
            })
            .unwrap_or_default();

        let unterminated = self.scanner.eos();
        if !unterminated {
            self.scanner.consume(); // '*'
            self.scanner.consume(); // '/'
        }

        let token = self
            .token(TokenKind::Comment)
            .with_value(TokenValue::Str(value));

        Some(if unterminated { token.with_error() } else { token })
    }

    /// 4.3.4. [Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    ///
    /// Returns an ident, function, url or bad-url token.
    fn consume_ident(&mut self) -> Token {
        let value = self.consume_name();

        if self.scanner.peek() != Some('(') {
            return self
                .token(TokenKind::Ident)
                .with_value(TokenValue::Str(value));
        }
        self.scanner.consume(); // '('

        if value.eq_ignore_ascii_case("url") {
            self.scanner.scan_while(unicode::is_whitespace);

            if !self.scanner.quoted_url_start() {
                return self.consume_url();
            }
            // The quoted argument is tokenized as a regular string.
        }

        self.token(TokenKind::Function)
            .with_value(TokenValue::Str(value))
    }

    /// 4.3.11. [Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    ///
    /// The caller must ensure an ident sequence starts here; this routine
    /// does no verification of its own.
    fn consume_name(&mut self) -> String {
        let mut value = String::new();

        loop {
            if let Some(run) = self.scanner.scan_while(unicode::is_name_char) {
                value.push_str(&run);
                continue;
            }

            let c = match self.scanner.consume() {
                Some(c) => c,
                None => return value,
            };

            if is_valid_escape(Some(c), self.scanner.peek()) {
                value.push(self.consume_escaped());
            } else if self.config.preserve_hacks && c == '*' {
                // IE hack: the star and whatever follows it, verbatim
                value.push(c);
                if let Some(next) = self.scanner.consume() {
                    value.push(next);
                }
            } else {
                self.scanner.reconsume();
                return value;
            }
        }
    }

    /// 4.3.7. [Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Assumes the `\` is already consumed. NULs, surrogates and
    /// out-of-range values decode to U+FFFD.
    fn consume_escaped(&mut self) -> char {
        if let Some(hex) = self.scanner.scan_hex() {
            if matches!(self.scanner.peek(), Some(c) if unicode::is_whitespace(c)) {
                self.scanner.consume();
            }

            let code_point = u32::from_str_radix(&hex, 16).unwrap_or(0);
            if code_point == 0
                || unicode::is_surrogate(code_point)
                || code_point > unicode::MAX_CODE_POINT
            {
                return unicode::REPLACEMENT_CHARACTER;
            }

            return char::from_u32(code_point).unwrap_or(unicode::REPLACEMENT_CHARACTER);
        }

        match self.scanner.consume() {
            Some(c) => c,
            // eof: parse error
            None => unicode::REPLACEMENT_CHARACTER,
        }
    }

    /// 4.3.3. [Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    ///
    /// Returns a number, percentage or dimension token.
    fn consume_numeric(&mut self) -> Token {
        let (repr, value, type_flag) = self.consume_number();

        let value = match type_flag {
            TypeFlag::Integer => TokenValue::Integer(value as i64),
            _ => TokenValue::Float(value),
        };

        if self.next_starts_identifier() {
            let unit = self.consume_name();
            return self
                .token(TokenKind::Dimension)
                .with_value(value)
                .with_type_flag(type_flag)
                .with_repr(repr)
                .with_unit(unit);
        }

        if self.scanner.peek() == Some('%') {
            self.scanner.consume();
            return self
                .token(TokenKind::Percentage)
                .with_value(value)
                .with_type_flag(type_flag)
                .with_repr(repr);
        }

        self.token(TokenKind::Number)
            .with_value(value)
            .with_type_flag(type_flag)
            .with_repr(repr)
    }

    /// 4.3.12. [Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// Returns the literal representation, the converted value, and whether
    /// the literal is an integer or a number.
    fn consume_number(&mut self) -> (String, f64, TypeFlag) {
        let mut repr = String::new();
        let mut type_flag = TypeFlag::Integer;

        if matches!(self.scanner.peek(), Some(c) if unicode::is_plus_minus(c)) {
            if let Some(sign) = self.scanner.consume() {
                repr.push(sign);
            }
        }

        if let Some(digits) = self.scanner.scan_digits() {
            repr.push_str(&digits);
        }

        if let Some(fraction) = self.scanner.scan_decimal() {
            repr.push_str(&fraction);
            type_flag = TypeFlag::Number;
        }

        if let Some(exponent) = self.scanner.scan_number_exponent() {
            repr.push_str(&exponent);
            type_flag = TypeFlag::Number;
        }

        let value = convert_string_to_number(&repr);
        (repr, value, type_flag)
    }

    /// 4.3.5. [Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// Returns a string or bad-string token. An unterminated string at the
    /// end of the stream is accepted as-is; a raw newline inside a string is
    /// a parse error and ends the token without consuming the newline.
    fn consume_string(&mut self, ending: char) -> Token {
        let mut value = String::new();

        loop {
            let c = match self.scanner.consume() {
                Some(c) => c,
                None => {
                    return self
                        .token(TokenKind::String)
                        .with_value(TokenValue::Str(value));
                }
            };

            if c == ending {
                return self
                    .token(TokenKind::String)
                    .with_value(TokenValue::Str(value));
            }

            match c {
                c if unicode::is_newline(c) => {
                    self.scanner.reconsume();
                    return self
                        .token(TokenKind::BadString)
                        .with_value(TokenValue::Str(value))
                        .with_error();
                }
                '\\' => match self.scanner.peek() {
                    // A backslash at the very end of the input vanishes.
                    None => {}
                    // Escaped newline: line continuation.
                    Some(c) if unicode::is_newline(c) => {
                        self.scanner.consume();
                    }
                    _ => value.push(self.consume_escaped()),
                },
                _ => value.push(c),
            }
        }
    }

    /// Consume a unicode-range token. The `u`/`U` and `+` are consumed.
    ///
    /// Up to six hex digits, with trailing `?` wildcards filling the range
    /// (`26?` covers 260-26F), or an explicit `-` separated end.
    fn consume_unicode_range(&mut self) -> Token {
        let mut value = self.scanner.scan_hex().unwrap_or_default();

        while value.len() < 6 && self.scanner.peek() == Some('?') {
            if let Some(c) = self.scanner.consume() {
                value.push(c);
            }
        }

        let (start, end) = if value.contains('?') {
            (
                hex_to_code_point(&value.replace('?', "0")),
                hex_to_code_point(&value.replace('?', "F")),
            )
        } else {
            let start = hex_to_code_point(&value);

            if self.scanner.unicode_range_end() {
                self.scanner.consume(); // '-'
                let end = hex_to_code_point(&self.scanner.scan_hex().unwrap_or_default());
                (start, end)
            } else {
                (start, start)
            }
        };

        self.token(TokenKind::UnicodeRange).with_range(start, end)
    }

    /// 4.3.6. [Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-a-url-token)
    ///
    /// Assumes `url(` is consumed and the argument is unquoted. Returns a
    /// url or bad-url token.
    fn consume_url(&mut self) -> Token {
        let mut value = String::new();

        self.scanner.scan_while(unicode::is_whitespace);

        loop {
            let c = match self.scanner.consume() {
                // eof: parse error, but the token is still a url
                Some(c) => c,
                None => break,
            };

            match c {
                ')' => break,
                c if unicode::is_whitespace(c) => {
                    self.scanner.scan_while(unicode::is_whitespace);

                    if self.scanner.eos() || self.scanner.peek() == Some(')') {
                        self.scanner.consume();
                        break;
                    }

                    value.push_str(&self.consume_bad_url());
                    return self
                        .token(TokenKind::BadUrl)
                        .with_value(TokenValue::Str(value))
                        .with_error();
                }
                '"' | '\'' | '(' => {
                    value.push_str(&self.consume_bad_url());
                    return self
                        .token(TokenKind::BadUrl)
                        .with_value(TokenValue::Str(value))
                        .with_error();
                }
                c if unicode::is_non_printable(c) => {
                    value.push_str(&self.consume_bad_url());
                    return self
                        .token(TokenKind::BadUrl)
                        .with_value(TokenValue::Str(value))
                        .with_error();
                }
                '\\' => {
                    if is_valid_escape(Some(c), self.scanner.peek()) {
                        value.push(self.consume_escaped());
                    } else {
                        value.push_str(&self.consume_bad_url());
                        return self
                            .token(TokenKind::BadUrl)
                            .with_value(TokenValue::Str(value))
                            .with_error();
                    }
                }
                _ => value.push(c),
            }
        }

        self.token(TokenKind::Url).with_value(TokenValue::Str(value))
    }

    /// 4.3.14. [Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    ///
    /// Consumes up to and including the closing `)` (or the end of the
    /// stream) so that normal tokenizing can resume, and returns the
    /// recovered text. Escaped closing parens do not terminate.
    fn consume_bad_url(&mut self) -> String {
        let mut value = String::new();

        while !self.scanner.eos() {
            if is_valid_escape(self.scanner.peek(), self.scanner.peek1()) {
                self.scanner.consume();
                value.push(self.consume_escaped());
                continue;
            }

            match self.scanner.consume() {
                Some(')') | None => break,
                Some(c) => value.push(c),
            }
        }

        value
    }

    /// Builds a token of the given kind from the span marked at the start of
    /// [`Tokenizer::consume`].
    fn token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.scanner.marker(),
            self.scanner.marked().unwrap_or_default(),
        )
    }

    fn delim(&self, c: char) -> Token {
        self.token(TokenKind::Delim).with_value(TokenValue::Char(c))
    }

    /// 4.3.10. Would the three code points at the cursor (current, next,
    /// next-but-one) start a number?
    fn starts_number(&self) -> bool {
        would_start_number(
            self.scanner.current(),
            self.scanner.peek(),
            self.scanner.peek1(),
        )
    }

    /// 4.3.9. Would the three code points at the cursor start an ident
    /// sequence?
    fn starts_identifier(&self) -> bool {
        would_start_identifier(
            self.scanner.current(),
            self.scanner.peek(),
            self.scanner.peek1(),
        )
    }

    /// 4.3.9 over the next three unconsumed code points.
    fn next_starts_identifier(&self) -> bool {
        let window = self.scanner.peekn(3);
        let mut chars = window.chars();
        would_start_identifier(chars.next(), chars.next(), chars.next())
    }
}

/// 4.3.8. [Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && !matches!(second, Some(c) if unicode::is_newline(c))
}

/// 4.3.9. [Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
fn would_start_identifier(
    first: Option<char>,
    second: Option<char>,
    third: Option<char>,
) -> bool {
    match first {
        Some('-') => {
            matches!(second, Some(c) if unicode::is_name_start(c))
                || second == Some('-')
                || is_valid_escape(second, third)
        }
        Some('\\') => is_valid_escape(first, second),
        Some(c) => unicode::is_name_start(c),
        None => false,
    }
}

/// 4.3.10. [Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
fn would_start_number(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        Some(c) if unicode::is_plus_minus(c) => match second {
            Some(c) if unicode::is_digit(c) => true,
            Some('.') => matches!(third, Some(c) if unicode::is_digit(c)),
            _ => false,
        },
        Some('.') => matches!(second, Some(c) if unicode::is_digit(c)),
        Some(c) => unicode::is_digit(c),
        None => false,
    }
}

/// [Convert a string to a number](https://www.w3.org/TR/css-syntax-3/#convert-string-to-number)
///
/// Computes `s · (i + f · 10^(-d)) · 10^(t · e)` from the parts of the
/// literal, clamped to the finite `f64` range.
pub fn convert_string_to_number(repr: &str) -> f64 {
    let mut scanner = Scanner::new(repr);
    let parts = match scanner.scan_number_str() {
        Some(parts) => parts,
        None => return 0.0,
    };

    let s: f64 = if parts.sign.as_deref() == Some("-") { -1.0 } else { 1.0 };
    let i: f64 = parts
        .integer
        .as_deref()
        .map_or(0.0, |v| v.parse().unwrap_or(0.0));
    let f: f64 = parts
        .fractional
        .as_deref()
        .map_or(0.0, |v| v.parse().unwrap_or(0.0));
    let d = parts.fractional.as_deref().map_or(0, str::len) as i32;
    let t: f64 = if parts.exponent_sign.as_deref() == Some("-") { -1.0 } else { 1.0 };
    let e: f64 = parts
        .exponent
        .as_deref()
        .map_or(0.0, |v| v.parse().unwrap_or(0.0));

    let magnitude = i + f * 10f64.powi(-d);
    if magnitude == 0.0 {
        // Keep a zero mantissa out of the exponent scaling: 0 · ∞ is NaN.
        return s * 0.0;
    }

    (s * magnitude * 10f64.powf(t * e)).clamp(f64::MIN, f64::MAX)
}

fn hex_to_code_point(hex: &str) -> u32 {
    u32::from_str_radix(hex, 16).unwrap_or(0)
}
