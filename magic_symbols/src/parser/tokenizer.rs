// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Longest-match tokenizer.
//!
//! At every position the candidate token parsers run in precedence order:
//!
//! 1. [`parse_escape()`]: the escape marker.
//! 2. [`parse_recall()`]: the recall marker followed by one digit `1..=9`.
//! 3. [`parse_table_token()`]: the longest [`ColorTable`] spelling (xterm, aliases,
//!    grayscale, ANSI, bright backgrounds).
//!
//! [`parse_token()`] keeps the candidate that consumed the most input, and the first one
//! in the list above on a tie. When no candidate matches, [`parse_plain_text()`] takes
//! characters up to the next position where one does. This is the catch all, so
//! malformed markup is always literal text and never an error.
//!
//! ```text
//! input:   "red |[511red ||rescaped"
//! pass #1: [Literal("red ")]    | "|[511red ||rescaped"
//! pass #2: [Token("|[511")]     | "red ||rescaped"
//! pass #3: [Literal("red ")]    | "||rescaped"
//! pass #4: [Escape("||")]       | "rescaped"
//! pass #5: [Literal("rescaped")]| ""
//! ```

use nom::{IResult, Parser,
          bytes::complete::tag,
          character::complete::{anychar, satisfy},
          combinator::{consumed, map, map_opt, not, recognize},
          error::{Error, ErrorKind},
          multi::many1,
          sequence::preceded};

use crate::{ColorTable, Segment};

/// Split `text` into [`Segment`]s.
#[must_use]
pub fn tokenize_segments<'a>(text: &'a str, table: &'a ColorTable) -> Vec<Segment<'a>> {
    let mut acc = vec![];
    let mut input = text;

    while !input.is_empty() {
        let result = parse_token(input, table)
            .or_else(|_| parse_plain_text(input, table));
        match result {
            Ok((rem, segment)) => {
                acc.push(segment);
                input = rem;
            }
            // The plain text parser consumes at least one char whenever no token
            // matches, so this is only reached on a parser bug.
            Err(_) => {
                acc.push(Segment::Literal(input));
                break;
            }
        }
    }

    acc
}

/// The longest token at the start of `input`. Zero length matches (eg: from an empty
/// marker) never count.
///
/// # Errors
///
/// Returns a nom error if no token starts at `input`.
pub fn parse_token<'a>(input: &'a str, table: &'a ColorTable) -> IResult<&'a str, Segment<'a>> {
    let candidates = [
        parse_escape(input, table),
        parse_recall(input, table),
        parse_table_token(input, table),
    ];

    let mut best: Option<(&'a str, Segment<'a>)> = None;
    for (rem, segment) in candidates.into_iter().flatten() {
        if rem.len() == input.len() {
            continue;
        }
        if best
            .as_ref()
            .is_none_or(|(best_rem, _)| rem.len() < best_rem.len())
        {
            best = Some((rem, segment));
        }
    }

    best.ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::Alt)))
}

/// # Errors
///
/// Returns a nom error if `input` does not start with the escape marker.
pub fn parse_escape<'a>(input: &'a str, table: &'a ColorTable) -> IResult<&'a str, Segment<'a>> {
    map(tag(table.symbols().escape.as_str()), Segment::Escape).parse(input)
}

/// # Errors
///
/// Returns a nom error if `input` does not start with the recall marker and a digit in
/// `1..=9`. A `0` digit is not a recall.
pub fn parse_recall<'a>(input: &'a str, table: &'a ColorTable) -> IResult<&'a str, Segment<'a>> {
    map_opt(
        consumed(preceded(
            tag(table.symbols().recall.as_str()),
            satisfy(|it| matches!(it, '1'..='9')),
        )),
        |(spelling, digit): (&'a str, char)| {
            let offset = u8::try_from(digit.to_digit(10)?).ok()?;
            Some(Segment::Recall { spelling, offset })
        },
    )
    .parse(input)
}

/// # Errors
///
/// Returns a nom error if no [`ColorTable`] spelling starts at `input`.
pub fn parse_table_token<'a>(
    input: &'a str,
    table: &'a ColorTable,
) -> IResult<&'a str, Segment<'a>> {
    match table.longest_match(input) {
        Some((spelling, entry)) => {
            Ok((&input[spelling.len()..], Segment::Token { spelling, entry }))
        }
        None => Err(nom::Err::Error(Error::new(input, ErrorKind::Tag))),
    }
}

/// Lowest priority parser: takes chars until a token starts.
///
/// # Errors
///
/// Returns a nom error if a token starts at `input` or `input` is empty.
pub fn parse_plain_text<'a>(
    input: &'a str,
    table: &'a ColorTable,
) -> IResult<&'a str, Segment<'a>> {
    map(
        recognize(many1(preceded(
            /* stop in front of any token */
            not(|it: &'a str| parse_token(it, table)),
            /* keep the char otherwise */
            anychar,
        ))),
        Segment::Literal,
    )
    .parse(input)
}
