// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorEntry;

/// One piece of tokenized input. Every segment borrows a non-empty slice of the input,
/// and the slices of all segments concatenate back to the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text that is not markup.
    Literal(&'a str),
    /// The escape marker, eg: `||`.
    Escape(&'a str),
    /// The recall marker and its digit, eg: `|<2`. `offset` is in `1..=9`.
    Recall { spelling: &'a str, offset: u8 },
    /// Any spelling found in the [`crate::ColorTable`].
    Token {
        spelling: &'a str,
        entry: &'a ColorEntry,
    },
}

impl<'a> Segment<'a> {
    /// The slice of input this segment was recognized from.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Literal(it) | Segment::Escape(it) => it,
            Segment::Recall { spelling, .. } | Segment::Token { spelling, .. } => spelling,
        }
    }

    #[must_use]
    pub fn is_literal(&self) -> bool { matches!(self, Segment::Literal(_)) }
}
