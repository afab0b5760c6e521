// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Which palette xterm tokens are rendered with.
///
/// ANSI tokens render the same in both modes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Native `ESC[38;5;{n}m` / `ESC[48;5;{n}m` sequences.
    #[default]
    Xterm256,
    /// The nearest of the 8 basic ANSI colors, see [`crate::quantize_rgb()`].
    AnsiFallback,
}

impl From<bool> for ColorMode {
    fn from(use_extended_color: bool) -> Self {
        if use_extended_color {
            ColorMode::Xterm256
        } else {
            ColorMode::AnsiFallback
        }
    }
}

/// Whether an SGR code targets the text or the cell behind it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Foreground,
    Background,
}
