//! # Tag Pairs
//!
//! The output protocol between the resolver and its consumer.
//!
//! The resolver does not build a tree. It emits a flat stream of
//! [`TagPair`]s - abstract position ranges claiming the markup characters of
//! one resolved span - and the receiving [`TagSink`] owns everything
//! downstream: rendering, and reconciling overlap with spans produced by
//! other inline passes.
//!
//! ## Ordering
//!
//! Pairs arrive sorted only within one block and one marker pass; the `*`
//! and `_` passes emit independently of each other. A consumer that needs a
//! single position-sorted sequence sorts the combined output itself.

use crate::span::Span;

/// The two span kinds produced by the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Emphasis, delimited by one marker character on each side.
    Em,
    /// Strong emphasis, delimited by two marker characters on each side.
    Strong,
}

impl SpanKind {
    /// Number of markup characters in each of the pair's delimiters.
    #[must_use]
    pub fn delim_len(self) -> usize {
        match self {
            SpanKind::Em => 1,
            SpanKind::Strong => 2,
        }
    }
}

/// One resolved span: a matched pair of opening and closing markup.
///
/// `open.start < close.start` holds by construction; closes are only ever
/// decided on runs encountered after the corresponding open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPair {
    pub kind: SpanKind,
    /// Markup characters consumed by the opener.
    pub open: Span,
    /// Markup characters consumed by the closer (same length as the opener).
    pub close: Span,
}

impl TagPair {
    /// Builds a pair from the open and close positions, with delimiter
    /// lengths implied by the kind.
    #[must_use]
    pub fn new(kind: SpanKind, open_pos: usize, close_pos: usize) -> Self {
        Self {
            kind,
            open: Span::at(open_pos, kind.delim_len()),
            close: Span::at(close_pos, kind.delim_len()),
        }
    }
}

/// Receiver for resolved tag pairs.
pub trait TagSink {
    /// Records one resolved span.
    fn add_tag_pair(&mut self, pair: TagPair);
}

impl TagSink for Vec<TagPair> {
    fn add_tag_pair(&mut self, pair: TagPair) {
        self.push(pair);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_lengths_follow_kind() {
        let em = TagPair::new(SpanKind::Em, 0, 4);
        assert_eq!(em.open, Span { start: 0, end: 1 });
        assert_eq!(em.close, Span { start: 4, end: 5 });

        let strong = TagPair::new(SpanKind::Strong, 0, 5);
        assert_eq!(strong.open, Span { start: 0, end: 2 });
        assert_eq!(strong.close, Span { start: 5, end: 7 });
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<TagPair> = Vec::new();
        sink.add_tag_pair(TagPair::new(SpanKind::Em, 2, 6));
        sink.add_tag_pair(TagPair::new(SpanKind::Strong, 0, 7));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].kind, SpanKind::Em);
        assert_eq!(sink[1].kind, SpanKind::Strong);
    }
}
