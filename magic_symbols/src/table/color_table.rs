// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Construction of the [`ColorTable`] for a set of [`Symbols`].
//!
//! With the default symbols the table holds:
//!
//! ```text
//! |n |u |h |H                       controls (reset, underline, hilite, unhilite)
//! |x .. |w     |X .. |W             hilite / unhilite foreground colors
//! |[X .. |[W   |!X .. |!W           background colors / colors that keep hilite as is
//! |000 .. |555 |[000 .. |[555       xterm RGB cube
//! |=a .. |=z   |[=a .. |[=z         xterm grayscale
//! |[x .. |[w                        bright backgrounds, through the RGB cube
//! ```
//!
//! Plus two spellings (foreground and background) per configured alias.

use std::collections::{HashMap, hash_map::Entry};

use strum::IntoEnumIterator;
use tracing::{debug, trace};

use crate::{BasicColor, ColorEntry, ConfigError, Layer, RGB_CUBE_MAX, SgrCode,
            SgrSequence, Symbols, TokenKind, XtermColor};

/// Every token spelling a parser recognizes besides the escape and recall markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTable {
    symbols: Symbols,
    entries: HashMap<String, ColorEntry>,
    /// Foreground and background spellings of every alias, longest first.
    alias_spellings: Vec<String>,
    /// Length in bytes of the longest spelling in [`Self::entries`].
    max_spelling_len: usize,
}

impl Default for ColorTable {
    fn default() -> Self { Self::build_builtin(Symbols::default()) }
}

impl ColorTable {
    /// Build the table for `symbols`, including its aliases.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownAliasTarget`] if an alias names a code that is not an
    ///   xterm color under both the foreground and background markers.
    /// - [`ConfigError::AliasCollision`] if an alias is empty or its spelling is already
    ///   taken by another token (including the escape and recall markers).
    pub fn try_build(symbols: Symbols) -> Result<Self, ConfigError> {
        let mut table = Self::build_builtin(symbols);
        table.register_aliases()?;
        debug!(
            entries = table.entries.len(),
            aliases = table.symbols.aliases.len(),
            max_spelling_len = table.max_spelling_len,
            "built color table"
        );
        Ok(table)
    }

    /// Insertion order is the tie break order for identical spellings: xterm RGB,
    /// grayscale, ANSI, bright background substitution.
    fn build_builtin(symbols: Symbols) -> Self {
        let mut table = Self {
            symbols,
            entries: HashMap::new(),
            alias_spellings: Vec::new(),
            max_spelling_len: 0,
        };
        table.insert_xterm_rgb();
        table.insert_xterm_grayscale();
        table.insert_ansi();
        table.insert_bright_backgrounds();
        table
    }

    fn insert_xterm_rgb(&mut self) {
        for r in 0..=RGB_CUBE_MAX {
            for g in 0..=RGB_CUBE_MAX {
                for b in 0..=RGB_CUBE_MAX {
                    let color = XtermColor::Rgb(r, g, b);
                    let fg = format!("{}{r}{g}{b}", self.symbols.foreground);
                    let bg = format!("{}{r}{g}{b}", self.symbols.background);
                    self.insert_xterm(fg, color, Layer::Foreground);
                    self.insert_xterm(bg, color, Layer::Background);
                }
            }
        }
    }

    fn insert_xterm_grayscale(&mut self) {
        for letter in 'a'..='z' {
            let color = XtermColor::Grayscale(letter);
            let fg = format!("{}{letter}", self.symbols.foreground_grayscale);
            let bg = format!("{}{letter}", self.symbols.background_grayscale);
            self.insert_xterm(fg, color, Layer::Foreground);
            self.insert_xterm(bg, color, Layer::Background);
        }
    }

    fn insert_ansi(&mut self) {
        let fg = self.symbols.foreground.clone();
        let bg = self.symbols.background.clone();
        let no_hilite = self.symbols.no_hilite.clone();

        self.insert_entry(format!("{fg}n"), ColorEntry::control(SgrCode::Reset));
        self.insert_entry(format!("{fg}u"), ColorEntry::control(SgrCode::Underline));
        self.insert_entry(format!("{fg}h"), ColorEntry::control(SgrCode::Hilite));
        self.insert_entry(format!("{fg}H"), ColorEntry::control(SgrCode::Unhilite));

        for color in BasicColor::iter() {
            let (lower, upper) = (color.letter(), color.upper_letter());
            self.insert_entry(
                format!("{fg}{lower}"),
                ColorEntry::ansi_color([SgrCode::Hilite, SgrCode::Foreground(color)]),
            );
            self.insert_entry(
                format!("{fg}{upper}"),
                ColorEntry::ansi_color([SgrCode::Unhilite, SgrCode::Foreground(color)]),
            );
            self.insert_entry(
                format!("{bg}{upper}"),
                ColorEntry::ansi_color(SgrCode::Background(color)),
            );
            self.insert_entry(
                format!("{no_hilite}{upper}"),
                ColorEntry::ansi_color(SgrCode::Foreground(color)),
            );
        }
    }

    /// `|[r` and friends. ANSI has no bright background code, so these render as an
    /// xterm cube color and fall back to the plain background.
    fn insert_bright_backgrounds(&mut self) {
        for color in BasicColor::iter() {
            let (r, g, b) = color.bright_background_rgb();
            let spelling = format!("{}{}", self.symbols.background, color.letter());
            self.insert_entry(
                spelling,
                ColorEntry::xterm_color(
                    XtermColor::Rgb(r, g, b).native(Layer::Background),
                    SgrSequence::from(SgrCode::Background(color)),
                ),
            );
        }
    }

    fn insert_xterm(&mut self, spelling: String, color: XtermColor, layer: Layer) {
        self.insert_entry(
            spelling,
            ColorEntry::xterm_color(color.native(layer), color.fallback(layer)),
        );
    }

    /// First spelling wins. Only custom symbols can produce duplicates.
    fn insert_entry(&mut self, spelling: String, entry: ColorEntry) {
        match self.entries.entry(spelling) {
            Entry::Occupied(it) => {
                trace!(spelling = it.key(), "spelling already taken, keeping first");
            }
            Entry::Vacant(it) => {
                self.max_spelling_len = self.max_spelling_len.max(it.key().len());
                it.insert(entry);
            }
        }
    }
}

mod aliases {
    use super::{ColorEntry, ColorTable, ConfigError, TokenKind, debug};

    impl ColorTable {
        /// Validate every alias against the built-in tokens, then register the
        /// foreground and background spelling of each.
        pub(super) fn register_aliases(&mut self) -> Result<(), ConfigError> {
            let pending = self
                .symbols
                .aliases
                .iter()
                .map(|(alias, target)| self.resolve_alias(alias, target))
                .collect::<Result<Vec<_>, _>>()?;

            for (alias, spelling, entry) in pending.into_iter().flatten() {
                if self.entries.contains_key(&spelling) {
                    return Err(ConfigError::AliasCollision { alias, spelling });
                }
                debug!(%alias, %spelling, "registered alias");
                self.max_spelling_len = self.max_spelling_len.max(spelling.len());
                self.alias_spellings.push(spelling.clone());
                self.entries.insert(spelling, entry);
            }

            self.alias_spellings
                .sort_by(|lhs, rhs| rhs.len().cmp(&lhs.len()).then_with(|| lhs.cmp(rhs)));
            Ok(())
        }

        /// Returns `(alias, spelling, entry)` for the foreground and background
        /// spelling, or nothing when the alias names itself.
        fn resolve_alias(
            &self,
            alias: &str,
            target: &str,
        ) -> Result<Vec<(String, String, ColorEntry)>, ConfigError> {
            let markers = [&self.symbols.foreground, &self.symbols.background];

            let mut acc = Vec::with_capacity(markers.len());
            for marker in markers {
                let target_spelling = format!("{marker}{target}");
                let Some(entry) = self
                    .entries
                    .get(&target_spelling)
                    .filter(|it| it.kind() == TokenKind::XtermColor)
                else {
                    debug!(%alias, %target, "alias target is not an xterm color");
                    return Err(ConfigError::UnknownAliasTarget {
                        alias: alias.to_string(),
                        target: target.to_string(),
                    });
                };
                acc.push((alias.to_string(), format!("{marker}{alias}"), entry.clone()));
            }

            if alias == target {
                return Ok(vec![]);
            }

            if let Some((_, spelling, _)) =
                acc.iter().find(|(_, spelling, _)| alias.is_empty() || self.is_reserved(spelling))
            {
                debug!(%alias, %spelling, "alias spelling is already a token");
                return Err(ConfigError::AliasCollision {
                    alias: alias.to_string(),
                    spelling: spelling.clone(),
                });
            }

            Ok(acc)
        }

        /// A spelling is reserved if it is a token already, or if it starts with the
        /// escape marker or a recall token. The longest match would otherwise let the
        /// alias swallow those markers.
        fn is_reserved(&self, spelling: &str) -> bool {
            let escape = self.symbols.escape.as_str();
            let extends_escape = !escape.is_empty() && spelling.starts_with(escape);
            let extends_recall = spelling
                .strip_prefix(self.symbols.recall.as_str())
                .is_some_and(|rest| rest.starts_with(|it: char| matches!(it, '1'..='9')));
            extends_escape || extends_recall || self.entries.contains_key(spelling)
        }
    }
}

mod lookup {
    use super::{ColorEntry, ColorTable, Symbols};

    impl ColorTable {
        #[must_use]
        pub fn symbols(&self) -> &Symbols { &self.symbols }

        #[must_use]
        pub fn get(&self, spelling: &str) -> Option<&ColorEntry> { self.entries.get(spelling) }

        /// Every registered spelling with its entry, in no particular order.
        pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorEntry)> {
            self.entries.iter().map(|(spelling, entry)| (spelling.as_str(), entry))
        }

        #[must_use]
        pub fn len(&self) -> usize { self.entries.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.entries.is_empty() }

        /// Alias spellings under both markers, longest first.
        #[must_use]
        pub fn alias_spellings(&self) -> &[String] { &self.alias_spellings }

        #[must_use]
        pub fn max_spelling_len(&self) -> usize { self.max_spelling_len }

        /// The longest spelling in this table that `input` starts with.
        #[must_use]
        pub fn longest_match<'a>(&'a self, input: &'a str) -> Option<(&'a str, &'a ColorEntry)> {
            let upper = self.max_spelling_len.min(input.len());
            (1..=upper)
                .rev()
                .filter(|&len| input.is_char_boundary(len))
                .find_map(|len| {
                    let candidate = &input[..len];
                    self.entries.get(candidate).map(|entry| (candidate, entry))
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::SymbolConfig;

    fn table_with_aliases(aliases: &[(&str, &str)]) -> Result<ColorTable, ConfigError> {
        let config = aliases
            .iter()
            .fold(SymbolConfig::default(), |acc, (alias, code)| acc.with_alias(*alias, *code));
        ColorTable::try_build(config.resolve())
    }

    #[test]
    fn default_table_size() {
        // 4 controls + 8 colors * 4 ansi spellings + 216 * 2 rgb + 26 * 2 grayscale + 8
        // bright backgrounds.
        let table = ColorTable::default();
        assert_eq!(table.len(), 4 + 32 + 432 + 52 + 8);
        assert_eq!(table.max_spelling_len(), 5);
        assert!(table.alias_spellings().is_empty());
    }

    #[test_case("|n", "\x1b[0m" ; "reset")]
    #[test_case("|u", "\x1b[4m" ; "underline")]
    #[test_case("|h", "\x1b[1m" ; "hilite")]
    #[test_case("|H", "\x1b[22m" ; "unhilite")]
    #[test_case("|r", "\x1b[1m\x1b[31m" ; "hilite red")]
    #[test_case("|Y", "\x1b[22m\x1b[33m" ; "unhilite yellow")]
    #[test_case("|[G", "\x1b[42m" ; "green background")]
    #[test_case("|!C", "\x1b[36m" ; "cyan without hilite")]
    #[test_case("|534", "\x1b[38;5;218m" ; "rgb foreground")]
    #[test_case("|[123", "\x1b[48;5;67m" ; "rgb background")]
    #[test_case("|=a", "\x1b[38;5;16m" ; "grayscale foreground")]
    #[test_case("|[=z", "\x1b[48;5;231m" ; "grayscale background")]
    #[test_case("|[m", "\x1b[48;5;201m" ; "bright magenta background")]
    #[test_case("|[x", "\x1b[48;5;102m" ; "bright black background")]
    fn native_sequences(spelling: &str, expected: &str) {
        let table = ColorTable::default();
        let entry = table.get(spelling).unwrap();
        assert_eq!(entry.native().to_string(), expected);
    }

    #[test_case("|500", "\x1b[1m\x1b[31m" ; "rgb red")]
    #[test_case("|[005", "\x1b[44m" ; "rgb blue background")]
    #[test_case("|=f", "\x1b[1m\x1b[30m" ; "dark grayscale")]
    #[test_case("|[=y", "\x1b[47m" ; "light grayscale background")]
    #[test_case("|[r", "\x1b[41m" ; "bright red background")]
    #[test_case("|[y", "\x1b[43m" ; "bright yellow background")]
    fn fallback_sequences(spelling: &str, expected: &str) {
        let table = ColorTable::default();
        let fallback = table.get(spelling).and_then(ColorEntry::fallback).unwrap();
        assert_eq!(fallback.to_string(), expected);
    }

    #[test_case("|r", TokenKind::AnsiColor ; "foreground color")]
    #[test_case("|[R", TokenKind::AnsiColor ; "background color")]
    #[test_case("|n", TokenKind::Control ; "control")]
    #[test_case("|[r", TokenKind::XtermColor ; "bright background")]
    #[test_case("|=q", TokenKind::XtermColor ; "grayscale")]
    fn kinds(spelling: &str, kind: TokenKind) {
        assert_eq!(ColorTable::default().get(spelling).unwrap().kind(), kind);
    }

    #[test_case("|p" ; "unknown letter")]
    #[test_case("|[=" ; "grayscale marker alone")]
    #[test_case("|6" ; "single digit")]
    #[test_case("|[a" ; "grayscale letter without marker")]
    #[test_case("||" ; "escape marker")]
    fn not_tokens(spelling: &str) {
        assert_eq!(ColorTable::default().get(spelling), None);
    }

    #[test]
    fn aliases_duplicate_their_target() {
        let table = table_with_aliases(&[("p", "534"), ("sg", "141")]).unwrap();
        assert_eq!(table.get("|p"), table.get("|534"));
        assert_eq!(table.get("|[p"), table.get("|[534"));
        assert_eq!(table.get("|sg"), table.get("|141"));
        assert_eq!(table.get("|[sg"), table.get("|[141"));
        assert_eq!(table.alias_spellings(), ["|[sg", "|[p", "|sg", "|p"]);
        assert_eq!(table.len(), ColorTable::default().len() + 4);
    }

    #[test]
    fn alias_to_grayscale_spelling() {
        let table = table_with_aliases(&[("gray", "=m")]).unwrap();
        assert_eq!(table.get("|gray"), table.get("|=m"));
        assert_eq!(table.get("|[gray"), table.get("|[=m"));
    }

    #[test_case("p", "634" ; "digit out of range")]
    #[test_case("p", "53" ; "too short")]
    #[test_case("p", "r" ; "ansi color")]
    #[test_case("p", "" ; "empty target")]
    #[test_case("q", "p" ; "another alias")]
    fn unknown_alias_target(alias: &str, target: &str) {
        let result = table_with_aliases(&[("p", "534"), (alias, target)]);
        assert_eq!(
            result,
            Err(ConfigError::UnknownAliasTarget {
                alias: alias.to_string(),
                target: target.to_string(),
            })
        );
    }

    #[test_case("r", "|r" ; "ansi color")]
    #[test_case("R", "|R" ; "unhilite ansi color")]
    #[test_case("n", "|n" ; "reset")]
    #[test_case("141", "|141" ; "other rgb code")]
    #[test_case("=a", "|=a" ; "grayscale")]
    #[test_case("|", "||" ; "escape marker")]
    #[test_case("<4", "|<4" ; "recall token")]
    #[test_case("|x", "||x" ; "starts with escape marker")]
    #[test_case("<1x", "|<1x" ; "starts with recall token")]
    #[test_case("", "|" ; "empty alias")]
    fn alias_collision(alias: &str, spelling: &str) {
        let result = table_with_aliases(&[(alias, "534")]);
        assert_eq!(
            result,
            Err(ConfigError::AliasCollision {
                alias: alias.to_string(),
                spelling: spelling.to_string(),
            })
        );
    }

    #[test]
    fn alias_may_start_with_recall_marker_without_digit() {
        let table = table_with_aliases(&[("<x", "534")]).unwrap();
        assert_eq!(table.get("|<x"), table.get("|534"));
    }

    #[test]
    fn alias_naming_itself_is_a_no_op() {
        let table = table_with_aliases(&[("534", "534")]).unwrap();
        assert_eq!(table.len(), ColorTable::default().len());
        assert!(table.alias_spellings().is_empty());
    }

    #[test]
    fn longest_match_prefers_longer_spellings() {
        let table = table_with_aliases(&[("s", "111"), ("sg", "141")]).unwrap();
        let (spelling, _) = table.longest_match("|sgreen").unwrap();
        assert_eq!(spelling, "|sg");
        let (spelling, _) = table.longest_match("|sun").unwrap();
        assert_eq!(spelling, "|s");
        let (spelling, _) = table.longest_match("|[511red").unwrap();
        assert_eq!(spelling, "|[511");
        assert_eq!(table.longest_match("|<1"), None);
        assert_eq!(table.longest_match("plain"), None);
    }

    #[test]
    fn longest_match_respects_char_boundaries() {
        let table = ColorTable::default();
        assert_eq!(table.longest_match("|é"), None);
        assert_eq!(table.longest_match("é|r").map(|(it, _)| it), None);
    }

    #[test]
    fn identical_spellings_keep_the_earlier_category() {
        // Grayscale under the foreground marker makes `~x` both grayscale and black.
        let config = SymbolConfig::default()
            .with_foreground_symbol("~")
            .with_foreground_grayscale_symbol("~");
        let table = ColorTable::try_build(config.resolve()).unwrap();
        assert_eq!(table.get("~x").unwrap().kind(), TokenKind::XtermColor);
        assert_eq!(table.get("~X").unwrap().kind(), TokenKind::AnsiColor);
    }
}
