//! logos-based tokenizer for style declarations.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `50%` as [`Token::Percent`] beats `50` as `Number`)
//! 2. For equal length matches, earlier-defined variants win

use logos::Logos;

/// Style declaration token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens ──────────────────────────────────────────────

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Percent string: digits followed by `%`. Digit count is validated by the parser.
    #[regex(r"[0-9]+%")]
    Percent,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Double-quoted string literal, e.g. a font name with spaces.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Identifier: option names, named colors, keywords, booleans.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,
}

/// A character sequence no token matches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized input '{text}' after {index} token(s)")]
pub struct LexError {
    /// Index the failed token would have had in the token stream.
    pub index: usize,
    pub text: String,
}

/// Tokenize a declaration string into `(Token, text)` pairs.
///
/// Fails on the first character sequence that matches no token.
pub fn tokenize(input: &str) -> Result<Vec<(Token, String)>, LexError> {
    Token::lexer(input)
        .spanned()
        .enumerate()
        .map(|(index, (result, span))| {
            let text = input[span].to_string();
            match result {
                Ok(token) => Ok((token, text)),
                Err(()) => Err(LexError { index, text }),
            }
        })
        .collect()
}
