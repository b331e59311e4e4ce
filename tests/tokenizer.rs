//! Cross-cutting properties of the emitted token stream: raw fidelity,
//! position bookkeeping, determinism, and the observable behavior of the
//! preprocessing pass through the public API.

use simple_logger::SimpleLogger;

use css3_tokenizer::{
    preprocess, tokenize, tokenize_bytes, Token, TokenKind, TokenValue, TokenizerConfig, TypeFlag,
};

const CORPUS: &[&str] = &[
    "a { color: red }",
    "#header .nav:hover > li[href^='https'] { margin: -1.5e2px 50%; }",
    "/* leading */ body {}/* trailing */",
    "@media screen and (max-width: 200px) { .x { width: calc(100% - 2em) } }",
    "url( images/a.png ) url('q') url(bad one) url(unterminated",
    "@font-face { unicode-range: U+26?, u+0-7f, U+1F4A9; }",
    "content: \"me \\26  you\"; content: 'bad\nstring'",
    "*zoom: 1; width\\3A 2; \\",
    "<!-- legacy --> ~= |= ^= $= *= || |",
    "  \t\n\n",
    "/* unterminated",
    "12-0red 12.red .5e3 5e 3.",
];

fn preserving() -> TokenizerConfig {
    TokenizerConfig {
        preserve_comments: true,
        preserve_hacks: false,
    }
}

fn all_configs() -> [TokenizerConfig; 4] {
    [
        TokenizerConfig::default(),
        TokenizerConfig {
            preserve_comments: true,
            preserve_hacks: false,
        },
        TokenizerConfig {
            preserve_comments: false,
            preserve_hacks: true,
        },
        TokenizerConfig {
            preserve_comments: true,
            preserve_hacks: true,
        },
    ]
}

fn rebuild(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.raw.as_str()).collect()
}

/// With comments preserved, concatenating every raw span reproduces the
/// preprocessed input exactly, with or without the vendor hacks.
#[test]
fn raw_fidelity() {
    let _ = SimpleLogger::new().init();

    for input in CORPUS {
        for preserve_hacks in [false, true] {
            let config = TokenizerConfig {
                preserve_comments: true,
                preserve_hacks,
            };
            let tokens = tokenize(input, config);
            assert_eq!(
                rebuild(&tokens),
                preprocess(input),
                "raw fidelity for {input:?} (hacks: {preserve_hacks})"
            );
        }
    }
}

#[test]
fn positions_strictly_increase() {
    for input in CORPUS {
        for config in all_configs() {
            let tokens = tokenize(input, config);
            for pair in tokens.windows(2) {
                assert!(
                    pair[0].pos < pair[1].pos,
                    "positions out of order for {input:?}: {pair:?}"
                );
            }
        }
    }
}

/// With comments preserved the tokens cover the preprocessed input without
/// gaps: the first starts at zero and the last ends at the input length.
#[test]
fn positions_cover_the_input() {
    for input in CORPUS {
        let tokens = tokenize(input, preserving());
        let total = preprocess(input).chars().count();

        assert_eq!(tokens[0].pos, 0, "first token position for {input:?}");
        let last = tokens.last().expect("at least one token");
        assert_eq!(
            last.pos + last.raw.chars().count(),
            total,
            "last token end for {input:?}"
        );

        // Each raw span length matches the gap to the next token.
        for pair in tokens.windows(2) {
            assert_eq!(
                pair[0].pos + pair[0].raw.chars().count(),
                pair[1].pos,
                "gap between tokens for {input:?}"
            );
        }
    }
}

#[test]
fn tokenization_is_deterministic() {
    for input in CORPUS {
        for config in all_configs() {
            assert_eq!(tokenize(input, config), tokenize(input, config));
        }
    }
}

#[test]
fn preprocessing_is_idempotent() {
    for input in CORPUS {
        let once = preprocess(input);
        assert_eq!(preprocess(&once), once);
    }
}

#[test]
fn newlines_are_normalized_before_tokenizing() {
    let tokens = tokenize("a\r\nb\rc\u{0C}d", TokenizerConfig::default());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Whitespace,
            TokenKind::Ident,
            TokenKind::Whitespace,
            TokenKind::Ident,
            TokenKind::Whitespace,
            TokenKind::Ident,
        ]
    );
    for token in tokens.iter().filter(|t| t.kind == TokenKind::Whitespace) {
        assert_eq!(token.raw, "\n");
    }
}

#[test]
fn bytes_are_decoded_with_replacement() {
    let tokens = tokenize_bytes(b"a\xFFb", TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(
        tokens[0].value,
        Some(TokenValue::Str("a\u{FFFD}b".to_string()))
    );

    let tokens = tokenize_bytes(b"a { color: red }", TokenizerConfig::default());
    assert_eq!(tokens[0].kind, TokenKind::Ident);
}

#[test]
fn nul_is_replaced_not_rejected() {
    let tokens = tokenize("a\u{0}b", TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(
        tokens[0].value,
        Some(TokenValue::Str("a\u{FFFD}b".to_string()))
    );
}

#[test]
fn scenario_ident_whitespace_ident() {
    let tokens = tokenize("a b", TokenizerConfig::default());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::Whitespace, TokenKind::Ident]
    );
    assert_eq!(tokens[0].value, Some(TokenValue::Str("a".to_string())));
    assert_eq!(tokens[2].value, Some(TokenValue::Str("b".to_string())));
}

#[test]
fn scenario_hash_is_an_id() {
    let tokens = tokenize("#foo", TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Hash);
    assert_eq!(tokens[0].type_flag, Some(TypeFlag::Id));
    assert_eq!(tokens[0].value, Some(TokenValue::Str("foo".to_string())));
}

#[test]
fn scenario_dimension() {
    let tokens = tokenize("3.14em", TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Dimension);
    assert_eq!(tokens[0].repr.as_deref(), Some("3.14"));
    assert_eq!(tokens[0].type_flag, Some(TypeFlag::Number));
    assert_eq!(tokens[0].unit.as_deref(), Some("em"));
    match tokens[0].value {
        Some(TokenValue::Float(value)) => assert!((value - 3.14).abs() < 1e-9),
        ref other => panic!("expected a float value, got {other:?}"),
    }
}

#[test]
fn scenario_urls() {
    let tokens = tokenize("url( 'x' )", TokenizerConfig::default());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Function,
            TokenKind::String,
            TokenKind::Whitespace,
            TokenKind::RParen,
        ]
    );
    assert_eq!(tokens[0].value, Some(TokenValue::Str("url".to_string())));
    assert_eq!(tokens[1].value, Some(TokenValue::Str("x".to_string())));

    let tokens = tokenize("url(x)", TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Url);
    assert_eq!(tokens[0].value, Some(TokenValue::Str("x".to_string())));
}

#[test]
fn scenario_comment_modes() {
    let tokens = tokenize("/* hi */a", preserving());
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, Some(TokenValue::Str(" hi ".to_string())));
    assert_eq!(tokens[1].kind, TokenKind::Ident);

    let tokens = tokenize("/* hi */a", TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
}

#[test]
fn scenario_unicode_range() {
    let tokens = tokenize("U+26?", TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::UnicodeRange);
    assert_eq!(tokens[0].start, Some(0x260));
    assert_eq!(tokens[0].end, Some(0x26F));
}

#[test]
fn scenario_bad_string() {
    let tokens = tokenize("\"ab\nc\"", TokenizerConfig::default());
    assert_eq!(tokens[0].kind, TokenKind::BadString);
    assert!(tokens[0].error);
    assert_eq!(tokens[0].value, Some(TokenValue::Str("ab".to_string())));
    assert_eq!(tokens[1].kind, TokenKind::Whitespace);
    assert_eq!(tokens[2].kind, TokenKind::Ident);
}

#[test]
fn scenario_double_dash_ident() {
    let tokens = tokenize("--foo", TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].value, Some(TokenValue::Str("--foo".to_string())));
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("", TokenizerConfig::default()).is_empty());
    assert!(tokenize_bytes(b"", TokenizerConfig::default()).is_empty());
}
