// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeMap;

use crate::SymbolConfig;

/// Markup prefixes used when a [`SymbolConfig`] leaves a field unset.
pub mod default_symbols {
    pub const FOREGROUND: &str = "|";
    pub const FOREGROUND_GRAYSCALE: &str = "|=";
    pub const BACKGROUND: &str = "|[";
    pub const BACKGROUND_GRAYSCALE: &str = "|[=";
    pub const ESCAPE: &str = "||";
    pub const UNESCAPE: &str = "|";
    pub const NO_HILITE: &str = "|!";
    pub const RECALL: &str = "|<";
}

/// The complete set of markup prefixes a parser works with. Produced by
/// [`SymbolConfig::resolve()`], and never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbols {
    /// Followed by a color letter (`|r`), a control letter (`|n`), an RGB code (`|534`)
    /// or an alias (`|p`).
    pub foreground: String,
    /// Followed by a grayscale letter, eg: `|=f`.
    pub foreground_grayscale: String,
    /// Followed by an uppercase color letter (`|[R`), a lowercase one for the bright
    /// background (`|[r`), an RGB code or an alias.
    pub background: String,
    pub background_grayscale: String,
    /// Stands for the [`Self::unescape`] text, eg: `||r` renders as `|r`.
    pub escape: String,
    pub unescape: String,
    /// Followed by an uppercase color letter, sets the color without touching hilite.
    pub no_hilite: String,
    /// Followed by a digit `1..=9`, re-applies an earlier color.
    pub recall: String,
    /// Alias name to xterm color code, eg: `"p" -> "534"`.
    pub aliases: BTreeMap<String, String>,
}

impl Default for Symbols {
    fn default() -> Self { SymbolConfig::default().resolve() }
}
