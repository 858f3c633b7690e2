//! # Span Resolver
//!
//! The core state machine: walks one block's delimiter runs left to right
//! and decides, per run, what closes and what opens.
//!
//! ## State
//!
//! The entire state is two pending open positions, one per span kind. There
//! is no stack and no backtracking: a later open of the same kind overwrites
//! an earlier pending one (whose markup then stays literal), and anything
//! still pending when the block ends is abandoned. This bounds nesting at
//! EM + STRONG, which is all the format supports.
//!
//! ## Position Ties
//!
//! A run of three or more markers can open, or close, both span kinds at the
//! same text offset. Two tie-breaks keep every markup character accounted
//! for exactly once:
//!
//! - **start tie**: when one earlier run opened both spans at the same
//!   offset, the kind being closed by the current run is the inner span, so
//!   its recorded start shifts past the other kind's opener. When both close
//!   at once (`***foo***`), STRONG is the outer span.
//! - **end tie**: when both kinds close on the same run, the span that
//!   opened first is the outer one and its closer absorbs the other kind's
//!   markup characters.

use crate::flanking::classify;
use crate::scanner::Run;
use crate::tag::{SpanKind, TagPair, TagSink};

/// Pending-span state for one block of one marker pass.
///
/// Created fresh at the start of each block and discarded at block end;
/// nothing crosses a block boundary.
#[derive(Debug, Default)]
struct BlockState {
    /// Byte position of the pending EM opener, if any.
    em_start: Option<usize>,
    /// Byte position of the pending STRONG opener, if any.
    strong_start: Option<usize>,
}

/// Resolves one block's runs left to right, emitting tag pairs into `sink`.
///
/// Pairs of one kind are emitted in close-position order; when a single run
/// closes both kinds, the EM pair is emitted first.
pub fn resolve_block(text: &str, runs: &[Run], sink: &mut impl TagSink) {
    let mut state = BlockState::default();
    for &run in runs {
        state.step(text, run, sink);
    }
}

impl BlockState {
    /// Processes a single run: decide closes, settle position ties, emit,
    /// then open new spans over the run's tail.
    fn step(&mut self, text: &str, run: Run, sink: &mut impl TagSink) {
        let class = classify(text, run);
        let close_em = class.may_close_em && self.em_start.is_some();
        let close_strong = class.may_close_strong && self.strong_start.is_some();
        let mut remaining = run.len;

        // Start tie: both spans were opened by the same earlier run at the
        // same offset. The kind closing now is the inner span; shift its
        // start past the other kind's opener.
        if self.em_start.is_some() && self.em_start == self.strong_start {
            if close_em {
                self.em_start = self.em_start.map(|pos| pos + 2);
            } else {
                self.strong_start = self.strong_start.map(|pos| pos + 1);
            }
        }

        // End tie: both kinds close on this run. The span opened first is
        // the outer one; its closer absorbs the other kind's characters.
        let mut em_end = run.pos;
        let mut strong_end = run.pos;
        if close_em && close_strong {
            if self.em_start < self.strong_start {
                em_end += 2;
            } else {
                strong_end += 1;
            }
        }

        if close_em {
            if let Some(open) = self.em_start.take() {
                remaining -= 1;
                sink.add_tag_pair(TagPair::new(SpanKind::Em, open, em_end));
            }
        }
        if close_strong {
            if let Some(open) = self.strong_start.take() {
                remaining -= 2;
                sink.add_tag_pair(TagPair::new(SpanKind::Strong, open, strong_end));
            }
        }

        // Leftover characters may open new spans: at most three of them,
        // one for EM plus two for STRONG, taken from the tail of the run.
        remaining = if class.can_open { remaining.min(3) } else { 0 };
        let tail = run.pos + run.len - remaining;
        if remaining % 2 == 1 {
            self.em_start = Some(tail);
        }
        if remaining >= 2 {
            self.strong_start = Some(tail);
        }
    }
}
