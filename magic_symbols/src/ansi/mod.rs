// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that ends up on the wire.
//!
//! - [`SgrCode`] and [`SgrSequence`]: the `ESC [ .. m` sequences this crate emits.
//! - [`BasicColor`]: the 8 colors of classic ANSI (`30..=37`, `40..=47`).
//! - [`XtermColor`]: a 6×6×6 RGB cube cell or a grayscale letter, addressed through the
//!   xterm-256 palette.
//! - [`quantize_rgb()`] and [`quantize_grayscale()`]: the downgrade from an xterm color
//!   to the nearest [`BasicColor`] plus a hilite bit, used when extended color is off.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

// Attach.
mod basic_color;
mod color_mode;
mod fallback_quantizer;
mod sgr_code;
mod xterm_color;

// Re-export.
pub use basic_color::*;
pub use color_mode::*;
pub use fallback_quantizer::*;
pub use sgr_code::*;
pub use xterm_color::*;
