/// TokenizerConfig holds the configuration for the tokenizer.
///
/// Both flags default to off, which matches the standard CSS Syntax Level 3
/// behavior exactly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// When true, comment tokens are emitted into the token stream. When
    /// false, comments are consumed and discarded.
    pub preserve_comments: bool,

    /// When true, two non-standard vendor allowances are enabled: a `*`
    /// followed by a name-start code point begins an identifier (the IE
    /// "star property" hack), and inside a name a `*` may be followed by any
    /// single code point, both of which are taken over verbatim.
    pub preserve_hacks: bool,
}
