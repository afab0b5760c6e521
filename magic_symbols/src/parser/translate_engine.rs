// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BufTextStorage, ColorMode, RecallStack, Segment, WriteToBuf};

/// What to do with the tokens while folding segments into output text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Replace tokens with terminal sequences for the given mode.
    Colorize(ColorMode),
    /// Drop tokens, keeping only the visible text.
    Strip,
}

/// Fold `segments` into the output text. Literals are copied verbatim and the escape
/// marker always becomes `unescape`, under either policy.
#[must_use]
pub fn render_segments(segments: &[Segment<'_>], unescape: &str, policy: RenderPolicy) -> String {
    let mut acc = BufTextStorage::with_capacity(
        segments.iter().map(|it| it.as_str().len()).sum::<usize>(),
    );
    let mut stack = RecallStack::new();

    for segment in segments {
        match (*segment, policy) {
            (Segment::Literal(text), _) => acc.push_str(text),
            (Segment::Escape(_), _) => acc.push_str(unescape),
            (Segment::Token { .. } | Segment::Recall { .. }, RenderPolicy::Strip) => {}
            (Segment::Token { entry, .. }, RenderPolicy::Colorize(mode)) => {
                if entry.is_color() {
                    stack.push(entry);
                }
                // Writing into a `String` never fails.
                let _ = entry.sequence_for(mode).write_to_buf(&mut acc);
            }
            (Segment::Recall { offset, .. }, RenderPolicy::Colorize(mode)) => {
                if let Some(entry) = stack.recall(offset) {
                    let _ = entry.sequence_for(mode).write_to_buf(&mut acc);
                }
            }
        }
    }

    acc
}
