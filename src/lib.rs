//! CSS tokenizer implementing the tokenization algorithm of the
//! [CSS Syntax Module Level 3](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! The input is preprocessed (encoding replacement, newline folding, NUL
//! substitution) and then tokenized in a single pass. Tokenization never
//! fails: parse errors surface as flags on tokens or as the bad-string /
//! bad-url kinds, and the stream always covers the whole input.
//!
//! ```
//! use css3_tokenizer::{tokenize, TokenKind, TokenizerConfig};
//!
//! let tokens = tokenize("a { color: #fff }", TokenizerConfig::default());
//! assert_eq!(tokens[0].kind, TokenKind::Ident);
//!
//! // Every token keeps the literal text it was produced from.
//! let rebuilt: String = tokens.iter().map(|t| t.raw.as_str()).collect();
//! assert_eq!(rebuilt, "a { color: #fff }");
//! ```

pub mod config;
pub mod preprocessor;
pub mod scanner;
pub mod tokenizer;
pub mod unicode;

pub use config::TokenizerConfig;
pub use preprocessor::{preprocess, preprocess_bytes};
pub use scanner::Scanner;
pub use tokenizer::{Token, TokenKind, TokenValue, Tokenizer, TypeFlag};

/// Tokenizes a CSS source string and returns the tokens in source order.
pub fn tokenize(input: &str, config: TokenizerConfig) -> Vec<Token> {
    Tokenizer::new(input, config).tokenize()
}

/// Tokenizes raw bytes, decoding them as UTF-8 with U+FFFD substituted for
/// invalid sequences.
pub fn tokenize_bytes(input: &[u8], config: TokenizerConfig) -> Vec<Token> {
    Tokenizer::from_preprocessed(&preprocess_bytes(input), config).tokenize()
}
