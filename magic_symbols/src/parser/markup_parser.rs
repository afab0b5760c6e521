// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorMode, ColorTable, ConfigError, RenderPolicy, Segment, SymbolConfig, Symbols,
            render_segments, tokenize_segments};

/// Translates markup with one fixed set of symbols and aliases.
///
/// The [`ColorTable`] is built once in [`MarkupParser::try_new()`]. After that the
/// parser is immutable, so a single instance can be shared across threads and every
/// call starts with an empty recall history.
///
/// ```
/// use r3bl_magic_symbols::{ColorMode, MarkupParser, SymbolConfig};
///
/// let parser = MarkupParser::try_new(SymbolConfig::default().with_alias("p", "534")).unwrap();
/// assert_eq!(parser.translate("|ppink"), "\x1b[38;5;218mpink");
/// assert_eq!(
///     parser.translate_with_mode("|ppink", ColorMode::AnsiFallback),
///     "\x1b[1m\x1b[31mpink"
/// );
/// assert_eq!(parser.strip("|ppink"), "pink");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkupParser {
    table: ColorTable,
}

/// Same as [`MarkupParser::try_new()`].
///
/// # Errors
///
/// See [`MarkupParser::try_new()`].
pub fn create_parser(config: SymbolConfig) -> Result<MarkupParser, ConfigError> {
    MarkupParser::try_new(config)
}

mod construct {
    use super::{ColorTable, ConfigError, MarkupParser, SymbolConfig};

    impl MarkupParser {
        /// # Errors
        ///
        /// Returns a [`ConfigError`] if an alias targets an unknown xterm code or
        /// collides with a built-in spelling.
        pub fn try_new(config: SymbolConfig) -> Result<Self, ConfigError> {
            let table = ColorTable::try_build(config.resolve())?;
            Ok(Self { table })
        }

        /// # Errors
        ///
        /// Returns a [`ConfigError`] if the JSON is malformed or the configuration it
        /// describes is rejected by [`Self::try_new()`].
        pub fn try_from_json(json: &str) -> Result<Self, ConfigError> {
            Self::try_new(SymbolConfig::try_from_json(json)?)
        }
    }

    impl From<ColorTable> for MarkupParser {
        fn from(table: ColorTable) -> Self { Self { table } }
    }
}

mod translate {
    use super::{ColorMode, MarkupParser, RenderPolicy, Segment, render_segments,
                tokenize_segments};

    impl MarkupParser {
        /// Translate with xterm-256 colors.
        #[must_use]
        pub fn translate(&self, text: &str) -> String {
            self.translate_with_mode(text, ColorMode::Xterm256)
        }

        /// Translate, quantizing xterm colors to the 8 basic colors when `mode` is
        /// [`ColorMode::AnsiFallback`]. A `bool` "terminal supports xterm" flag is
        /// accepted too, see [`ColorMode::from()`].
        #[must_use]
        pub fn translate_with_mode(&self, text: &str, mode: impl Into<ColorMode>) -> String {
            self.render(text, RenderPolicy::Colorize(mode.into()))
        }

        /// Remove every token, keeping the visible text. Escapes still render as the
        /// unescape text.
        #[must_use]
        pub fn strip(&self, text: &str) -> String { self.render(text, RenderPolicy::Strip) }

        /// The spelling of every token and literal run in `text`, in order.
        #[must_use]
        pub fn tokenize<'a>(&'a self, text: &'a str) -> Vec<&'a str> {
            self.segments(text).iter().map(Segment::as_str).collect()
        }

        #[must_use]
        pub fn segments<'a>(&'a self, text: &'a str) -> Vec<Segment<'a>> {
            tokenize_segments(text, &self.table)
        }

        fn render(&self, text: &str, policy: RenderPolicy) -> String {
            let segments = self.segments(text);
            render_segments(&segments, &self.symbols().unescape, policy)
        }
    }
}

mod access {
    use super::{ColorTable, MarkupParser, Symbols};

    impl MarkupParser {
        #[must_use]
        pub fn table(&self) -> &ColorTable { &self.table }

        #[must_use]
        pub fn symbols(&self) -> &Symbols { self.table.symbols() }
    }
}
