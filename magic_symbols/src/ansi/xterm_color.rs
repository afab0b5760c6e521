// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! xterm-256 addressing for the two kinds of extended color tokens.
//!
//! ```text
//! RGB cube:   index = 16 + 36r + 6g + b        r, g, b in 0..=5  -> 16..=231
//! Grayscale:  'a' -> 16, 'z' -> 231, 'b'..='y' -> 134 + codepoint  -> 232..=255
//! ```
//!
//! The grayscale mapping is not a uniform ramp. Its ends are pinned to the black and
//! white corners of the cube, and the 24 letters in between land on the xterm grayscale
//! ramp through their codepoint. Markup written against other implementations of this
//! syntax depends on these exact indices.

use super::{Layer, SgrCode, SgrSequence, quantize_grayscale, quantize_rgb};

/// Largest value of a single RGB cube channel.
pub const RGB_CUBE_MAX: u8 = 5;

/// Palette index used for out of range input (white).
pub const XTERM_INVALID_INDEX: u8 = 7;

/// Index of the RGB cube cell `(r, g, b)`, or [`XTERM_INVALID_INDEX`] if any channel is
/// larger than [`RGB_CUBE_MAX`].
#[must_use]
pub const fn xterm_rgb_index(r: u8, g: u8, b: u8) -> u8 {
    if r > RGB_CUBE_MAX || g > RGB_CUBE_MAX || b > RGB_CUBE_MAX {
        return XTERM_INVALID_INDEX;
    }
    16 + 36 * r + 6 * g + b
}

/// Index of a grayscale letter, or [`XTERM_INVALID_INDEX`] if `letter` is not in
/// `'a'..='z'`.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn xterm_grayscale_index(letter: char) -> u8 {
    match letter {
        'a' => 16,
        'z' => 231,
        'b'..='y' => 134 + letter as u8,
        _ => XTERM_INVALID_INDEX,
    }
}

/// An extended color token's color, before it is rendered for a [`Layer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum XtermColor {
    Rgb(u8, u8, u8),
    Grayscale(char),
}

impl XtermColor {
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            XtermColor::Rgb(r, g, b) => xterm_rgb_index(r, g, b),
            XtermColor::Grayscale(letter) => xterm_grayscale_index(letter),
        }
    }

    /// Native xterm-256 sequence.
    #[must_use]
    pub fn native(self, layer: Layer) -> SgrSequence {
        SgrSequence::from(SgrCode::ansi256(self.index(), layer))
    }

    /// Nearest basic ANSI sequence.
    #[must_use]
    pub fn fallback(self, layer: Layer) -> SgrSequence {
        match self {
            XtermColor::Rgb(r, g, b) => quantize_rgb(r, g, b, layer),
            XtermColor::Grayscale(letter) => quantize_grayscale(letter, layer),
        }
    }
}
