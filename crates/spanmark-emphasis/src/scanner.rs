//! # Delimiter Scanner
//!
//! Second stage: turning the token stream into per-block lists of delimiter
//! runs for one marker character.
//!
//! Blocks are the segments between [`BlockBreak`](crate::lexer::TokenKind::BlockBreak)
//! tokens. The resolver processes each block with fresh state, so grouping
//! runs by block here is what keeps spans from straddling a hard block
//! boundary. Text containing no sentinel at all is a single block.
//!
//! One rule is applied at this stage rather than in the resolver: a single
//! `_` between two alphanumeric characters is dropped outright, so
//! `foo_bar_baz` stays literal. Dropped runs never reach the resolver and
//! cannot open or close anything.

use crate::flanking::is_surrounded_by_alnum;
use crate::lexer::{TokenKind, lex};
use crate::span::Span;

/// The two markup characters resolved by this pass.
///
/// Runs of the two markers are never merged, and each marker gets its own
/// full sub-pass with independent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `*` - valid anywhere, including inside words.
    Star,
    /// `_` - a single underscore inside a word is ignored.
    Underscore,
}

impl Marker {
    /// The token kind the lexer produces for runs of this marker.
    fn token_kind(self) -> TokenKind {
        match self {
            Marker::Star => TokenKind::StarRun,
            Marker::Underscore => TokenKind::UnderscoreRun,
        }
    }

    /// Whether a length-1 run of this marker between alphanumerics is
    /// dropped by the scanner.
    fn ignores_intraword(self) -> bool {
        matches!(self, Marker::Underscore)
    }
}

/// A maximal run of one marker character: `len` consecutive occurrences
/// starting at byte `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Byte offset of the run's first character.
    pub pos: usize,
    /// Number of consecutive marker characters.
    pub len: usize,
}

impl Run {
    /// The byte span covered by the run.
    #[must_use]
    pub fn span(self) -> Span {
        Span::at(self.pos, self.len)
    }
}

/// Groups the marker's runs into per-block lists, in position order.
///
/// A sentinel token closes the current block (even if empty) and starts a
/// new one. Ignorable runs are removed here; empty blocks are harmless
/// no-ops downstream.
pub fn runs_by_block(text: &str, marker: Marker) -> Vec<Vec<Run>> {
    let mut blocks = Vec::new();
    let mut block = Vec::new();

    for token in lex(text) {
        if token.kind == TokenKind::BlockBreak {
            blocks.push(std::mem::take(&mut block));
        } else if token.kind == marker.token_kind() {
            let run = Run {
                pos: token.span.start,
                len: token.span.len(),
            };
            if !ignore_run(text, marker, run) {
                block.push(run);
            }
        }
    }
    blocks.push(block);

    blocks
}

/// The intraword-underscore exception. No other marker/length combination
/// is ever dropped at this stage.
fn ignore_run(text: &str, marker: Marker, run: Run) -> bool {
    marker.ignores_intraword() && run.len == 1 && is_surrounded_by_alnum(text, run.pos, run.len)
}
