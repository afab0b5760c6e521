// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::EnumIter;

/// The 8 colors that every ANSI terminal understands.
///
/// The declaration order matches the SGR parameter order, so the discriminant is the
/// offset from `30` (foreground) or `40` (background).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BasicColor {
    #[must_use]
    pub const fn sgr_offset(self) -> u8 { self as u8 }

    /// Lowercase letter used in markup. Black is spelled `x` since `b` is taken by blue.
    #[rustfmt::skip]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            BasicColor::Black   => 'x',
            BasicColor::Red     => 'r',
            BasicColor::Green   => 'g',
            BasicColor::Yellow  => 'y',
            BasicColor::Blue    => 'b',
            BasicColor::Magenta => 'm',
            BasicColor::Cyan    => 'c',
            BasicColor::White   => 'w',
        }
    }

    #[must_use]
    pub const fn upper_letter(self) -> char { self.letter().to_ascii_uppercase() }

    /// Cell of the xterm RGB cube that stands in for the "bright" background of this
    /// color, since plain ANSI has no bright background code.
    #[rustfmt::skip]
    #[must_use]
    pub const fn bright_background_rgb(self) -> (u8, u8, u8) {
        match self {
            BasicColor::Black   => (2, 2, 2),
            BasicColor::Red     => (5, 0, 0),
            BasicColor::Green   => (0, 5, 0),
            BasicColor::Yellow  => (5, 5, 0),
            BasicColor::Blue    => (0, 0, 5),
            BasicColor::Magenta => (5, 0, 5),
            BasicColor::Cyan    => (0, 5, 5),
            BasicColor::White   => (5, 5, 5),
        }
    }
}
