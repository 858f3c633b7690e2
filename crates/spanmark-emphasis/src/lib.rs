//! # spanmark-emphasis
//!
//! Emphasis and strong-emphasis span resolution for the spanmark inline
//! parser.
//!
//! Given text already split into logical blocks by an earlier pass (blocks
//! are separated by a reserved sentinel character that never appears in
//! ordinary content), this pass scans runs of a markup character (`*` or
//! `_`) and converts matched runs into paired EM and STRONG span
//! annotations: markdown's left-to-right, non-backtracking,
//! flanking-rule-based behaviour.
//!
//! The pass is a total function over any input. Unmatched or ambiguous
//! markup never errors; it simply stays literal by never being claimed by a
//! tag pair.
//!
//! ## Pipeline
//!
//! ```text
//! Source Text → Lexer → Runs by Block → Classifier → Resolver → TagSink
//!               (Logos)  (scanner)      (flanking)   (state machine)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Tokenizes the buffer with [Logos]. Marker characters lex as maximal runs
//! (`***` is one token), the sentinel as its own token. Every byte appears
//! in exactly one token.
//!
//! ### 2. Scanner ([`scanner`] module)
//!
//! Groups one marker's runs into per-block lists and drops the runs that
//! are ignored outright (a single `_` inside a word).
//!
//! ### 3. Classifier ([`flanking`] module)
//!
//! Pure predicate logic over a run's adjacent characters: may it open, may
//! it close EM, may it close STRONG.
//!
//! ### 4. Resolver ([`resolver`] module)
//!
//! A single forward scan per block. The only state is one pending open
//! position per span kind - no stack, no backtracking, no tree.
//!
//! ## Quick Start
//!
//! ```
//! use spanmark_emphasis::{SpanKind, collect_pairs};
//!
//! let pairs = collect_pairs("*hi* and **ho**");
//! assert_eq!(pairs.len(), 2);
//!
//! assert_eq!(pairs[0].kind, SpanKind::Em);
//! assert_eq!((pairs[0].open.start, pairs[0].close.start), (0, 3));
//!
//! assert_eq!(pairs[1].kind, SpanKind::Strong);
//! assert_eq!((pairs[1].open.start, pairs[1].close.start), (9, 13));
//! ```
//!
//! [Logos]: https://docs.rs/logos

pub mod flanking;
pub mod lexer;
pub mod resolver;
pub mod scanner;
pub mod span;
pub mod tag;

pub use scanner::{Marker, Run};
pub use span::Span;
pub use tag::{SpanKind, TagPair, TagSink};

/// Resolves emphasis and strong spans over the whole buffer.
///
/// Runs the `*` sub-pass and then the `_` sub-pass. The two are mutually
/// independent - neither reads nor writes anything the other produces - so
/// their order is unobservable in the emitted pairs.
pub fn resolve(text: &str, sink: &mut impl TagSink) {
    resolve_marker(text, Marker::Star, sink);
    resolve_marker(text, Marker::Underscore, sink);
}

/// Resolves spans for a single marker character.
///
/// Each block between sentinels is resolved with fresh state; a span left
/// open when its block ends is abandoned and its markup stays literal.
pub fn resolve_marker(text: &str, marker: Marker, sink: &mut impl TagSink) {
    for block in scanner::runs_by_block(text, marker) {
        resolver::resolve_block(text, &block, sink);
    }
}

/// Resolves both markers and collects the pairs into a vector.
#[must_use]
pub fn collect_pairs(text: &str) -> Vec<TagPair> {
    let mut pairs = Vec::new();
    resolve(text, &mut pairs);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    /// Renders the emitted pairs one per line for snapshotting.
    fn dump(text: &str) -> String {
        collect_pairs(text)
            .iter()
            .map(|p| {
                format!(
                    "{:?} open={}..{} close={}..{}",
                    p.kind, p.open.start, p.open.end, p.close.start, p.close.end
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn snapshot_simple_em() {
        assert_snapshot!(dump("*foo*"), @"Em open=0..1 close=4..5");
    }

    #[test]
    fn snapshot_strong_wrapping_em() {
        assert_snapshot!(dump("***foo***"), @r"
Em open=2..3 close=6..7
Strong open=0..2 close=7..9
");
    }

    #[test]
    fn snapshot_both_markers() {
        assert_snapshot!(dump("*a* and _b_"), @r"
Em open=0..1 close=2..3
Em open=8..9 close=10..11
");
    }

    #[test]
    fn no_markup_means_no_pairs() {
        assert_eq!(collect_pairs("plain text, nothing else"), vec![]);
        assert_eq!(collect_pairs(""), vec![]);
    }

    #[test]
    fn underscore_mirrors_star_for_plain_spans() {
        assert_eq!(
            collect_pairs("_foo_"),
            vec![TagPair::new(SpanKind::Em, 0, 4)]
        );
        assert_eq!(
            collect_pairs("__foo__"),
            vec![TagPair::new(SpanKind::Strong, 0, 5)]
        );
        assert_eq!(
            collect_pairs("___foo___"),
            vec![
                TagPair::new(SpanKind::Em, 2, 6),
                TagPair::new(SpanKind::Strong, 0, 7),
            ]
        );
    }

    #[test]
    fn marker_passes_do_not_interfere() {
        // The star span contains underscores and vice versa; each pass
        // sees only its own marker.
        assert_eq!(
            collect_pairs("*a_b c_d*"),
            vec![TagPair::new(SpanKind::Em, 0, 8)]
        );
    }

    #[test]
    fn pass_order_is_unobservable() {
        let text = "a *b* _c_ **d** __e__";
        let mut star_first: Vec<TagPair> = Vec::new();
        resolve_marker(text, Marker::Star, &mut star_first);
        resolve_marker(text, Marker::Underscore, &mut star_first);

        let mut underscore_first: Vec<TagPair> = Vec::new();
        resolve_marker(text, Marker::Underscore, &mut underscore_first);
        resolve_marker(text, Marker::Star, &mut underscore_first);

        star_first.sort_by_key(|p| p.open.start);
        underscore_first.sort_by_key(|p| p.open.start);
        assert_eq!(star_first, underscore_first);
    }
}
