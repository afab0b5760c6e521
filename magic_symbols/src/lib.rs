// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_magic_symbols
//!
//! Translate short inline color markup into ANSI / xterm-256 terminal escape sequences.
//!
//! ```
//! use r3bl_magic_symbols::{strip, translate, translate_with_mode};
//!
//! assert_eq!(translate("|rred |nplain"), "\x1b[1m\x1b[31mred \x1b[0mplain");
//! assert_eq!(translate("|[534pink"), "\x1b[48;5;218mpink");
//! assert_eq!(translate_with_mode("|534pink", false), "\x1b[1m\x1b[31mpink");
//! assert_eq!(strip("|rred ||escaped"), "red |escaped");
//! ```
//!
//! ## Markup
//!
//! With the default symbols:
//!
//! | Markup            | Meaning                                                       |
//! | ----------------- | ------------------------------------------------------------- |
//! | `\|r` .. `\|w`    | hilite + foreground, `x r g y b m c w` (black .. white)       |
//! | `\|R` .. `\|W`    | unhilite + foreground                                         |
//! | `\|!R` .. `\|!W`  | foreground only                                               |
//! | `\|[R` .. `\|[W`  | background                                                    |
//! | `\|[r` .. `\|[w`  | bright background (xterm cell, or plain background fallback)  |
//! | `\|n` `\|u`       | reset, underline                                              |
//! | `\|h` `\|H`       | hilite, unhilite                                              |
//! | `\|534` `\|[534`  | xterm RGB cube, each digit `0..=5`                            |
//! | `\|=f` `\|[=f`    | xterm grayscale, `a` (black) .. `z` (white)                   |
//! | `\|<1` .. `\|<9`  | re-apply the color from that many tokens back                 |
//! | `\|\|`            | a literal `\|`                                                |
//!
//! Every prefix can be changed, and aliases for xterm codes can be added (eg: `|p` for
//! `|534`), with a [`SymbolConfig`] passed to [`MarkupParser::try_new()`]. Anything that
//! is not a token is copied through as is.
//!
//! ## Color modes
//!
//! [`ColorMode::AnsiFallback`] renders xterm tokens as the nearest of the 8 basic
//! colors (see [`quantize_rgb()`]), for terminals without 256 color support. ANSI
//! tokens render the same in both modes.
//!
//! ## Logging
//!
//! Table construction and alias registration log with [`tracing`] at `debug` level,
//! recall snapping and shadowed spellings at `trace` level. No subscriber is installed
//! by this crate.

// https://github.com/rust-lang/rust-clippy
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod ansi;
pub mod config;
pub mod errors;
pub mod parser;
pub mod table;

// Re-export.
pub use ansi::*;
pub use config::*;
pub use errors::*;
pub use parser::*;
pub use table::*;
