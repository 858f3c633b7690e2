//! # Lexer - Tokenizing the Block-Delimited Buffer
//!
//! First stage of the pass: breaking the source text into tokens with the
//! [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte of the input appears in exactly one token. Nothing is skipped
//! or discarded, so token spans index directly into the original text:
//!
//! ```
//! use spanmark_emphasis::lexer::lex;
//!
//! let input = "some **bold** text";
//! let tokens = lex(input);
//!
//! // Concatenating all token texts gives back the original
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! The lexer is deliberately coarse. Only the characters this pass cares
//! about get their own token kinds:
//!
//! - `*` and `_` lex as **maximal runs** (`***` is one token of length 3),
//!   which is exactly the delimiter-run shape the scanner needs
//! - U+0017 → [`TokenKind::BlockBreak`], the reserved sentinel an earlier
//!   pass inserts at every hard block boundary (it never appears in
//!   ordinary content)
//! - blanks and line endings → [`TokenKind::Whitespace`]
//!
//! Everything else becomes [`TokenKind::Text`], grouped into runs of
//! consecutive characters. The lexer does not decide what a run *means* -
//! whether it opens or closes a span is the classifier's and resolver's job.

use logos::Logos;

use crate::span::Span;

/// The reserved block-boundary sentinel (U+0017).
///
/// Inserted upstream of this pass; spans never cross it.
pub const BLOCK_SENTINEL: char = '\u{17}';

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of `*`.
    #[regex(r"\*+")]
    StarRun,

    /// A maximal run of `_`.
    #[regex(r"_+")]
    UnderscoreRun,

    /// The block-boundary sentinel.
    #[token("\u{17}")]
    BlockBreak,

    /// Horizontal whitespace and line endings.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Plain text - anything not matched by other rules.
    #[regex(r"[^*_ \t\r\n\u{17}]+")]
    Text,
}

/// A lexed token with its kind, text slice, and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes of the input appear in the output tokens, in
/// order, exactly once.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(kind) => kind,
            // Unrecognized input is ordinary content.
            Err(()) => TokenKind::Text,
        };
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            span: lexer.span().into(),
        });
    }

    tokens
}
