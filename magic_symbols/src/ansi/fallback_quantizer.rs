// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Downgrade xterm colors to the 8 basic ANSI colors, for terminals (or callers) that
//! do not want extended color. See [`quantize_rgb()`] for the decision table.

use super::{BasicColor, Layer, RGB_CUBE_MAX, SgrCode, SgrSequence};

/// Map an RGB cube cell to the nearest [`BasicColor`] and a hilite bit.
///
/// The first matching rule wins:
///
/// | Rule                    | Color   | Hilite when |
/// | :---------------------- | :------ | :---------- |
/// | `r == g == b`, `r < 3`  | black   | `r >= 1`    |
/// | `r == g == b`           | white   | `r >= 4`    |
/// | `r > g`, `r > b`        | red     | `r >= 3`    |
/// | `r == g`, `r > b`       | yellow  | `r >= 3`    |
/// | `r == b`, `r > g`       | magenta | `r >= 3`    |
/// | `g > b`                 | green   | `g >= 3`    |
/// | `g == b`                | cyan    | `g >= 3`    |
/// | otherwise               | blue    | `b >= 3`    |
///
/// Background results carry no hilite bit, since ANSI has no bright background code.
#[must_use]
pub fn quantize_rgb(r: u8, g: u8, b: u8, layer: Layer) -> SgrSequence {
    let (color, hilite) = nearest_basic_color(r, g, b);
    match layer {
        Layer::Background => SgrSequence::from(SgrCode::Background(color)),
        Layer::Foreground => SgrSequence::from([
            if hilite {
                SgrCode::Hilite
            } else {
                SgrCode::Unhilite
            },
            SgrCode::Foreground(color),
        ]),
    }
}

/// Reduce a grayscale letter to a gray level (`'a'..='e'` is 0, ... `'z'` is 5) and
/// quantize it as the RGB cell with all three channels at that level. Anything outside
/// `'a'..='z'` is treated as the lightest level.
#[must_use]
pub fn quantize_grayscale(letter: char, layer: Layer) -> SgrSequence {
    let gray = gray_level(letter);
    quantize_rgb(gray, gray, gray, layer)
}

#[allow(clippy::cast_possible_truncation)]
fn gray_level(letter: char) -> u8 {
    match letter {
        'a'..='z' => (letter as u8 - b'a') / 5,
        _ => RGB_CUBE_MAX,
    }
}

#[allow(clippy::comparison_chain)]
fn nearest_basic_color(r: u8, g: u8, b: u8) -> (BasicColor, bool) {
    if r == g && r == b && r < 3 {
        (BasicColor::Black, r >= 1)
    } else if r == g && r == b {
        (BasicColor::White, r >= 4)
    } else if r > g && r > b {
        (BasicColor::Red, r >= 3)
    } else if r == g && r > b {
        (BasicColor::Yellow, r >= 3)
    } else if r == b && r > g {
        (BasicColor::Magenta, r >= 3)
    } else if g > b {
        (BasicColor::Green, g >= 3)
    } else if g == b {
        (BasicColor::Cyan, g >= 3)
    } else {
        (BasicColor::Blue, b >= 3)
    }
}
