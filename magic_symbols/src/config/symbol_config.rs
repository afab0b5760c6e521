// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Symbols, default_symbols};

/// Partial markup configuration. Unset fields fall back to [`default_symbols`] when
/// [resolved](Self::resolve).
///
/// It can be built in code:
///
/// ```
/// use r3bl_magic_symbols::SymbolConfig;
///
/// let config = SymbolConfig::default()
///     .with_foreground_symbol("~")
///     .with_escape_symbol("~~")
///     .with_unescape_symbol("~")
///     .with_alias("p", "534");
/// assert_eq!(config.resolve().foreground, "~");
/// ```
///
/// Or loaded from JSON, where the alias map may also be spelled `xtermAliases`:
///
/// ```
/// use r3bl_magic_symbols::SymbolConfig;
///
/// let config = SymbolConfig::try_from_json(
///     r#"{ "foreground_symbol": "~", "xtermAliases": { "sg": "141" } }"#,
/// )
/// .unwrap();
/// assert_eq!(config.aliases["sg"], "141");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_grayscale_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_grayscale_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unescape_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_hilite_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall_symbol: Option<String>,
    #[serde(alias = "xtermAliases", alias = "xterm_aliases")]
    pub aliases: BTreeMap<String, String>,
}

impl SymbolConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if `json` is not an object whose fields
    /// have the types above. Unknown fields are ignored.
    pub fn try_from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::InvalidConfig {
            reason: err.to_string(),
        })
    }

    /// Fill in every unset field from [`default_symbols`].
    #[must_use]
    pub fn resolve(self) -> Symbols {
        fn or_default(it: Option<String>, default: &str) -> String {
            it.unwrap_or_else(|| default.to_string())
        }

        Symbols {
            foreground: or_default(self.foreground_symbol, default_symbols::FOREGROUND),
            foreground_grayscale: or_default(
                self.foreground_grayscale_symbol,
                default_symbols::FOREGROUND_GRAYSCALE,
            ),
            background: or_default(self.background_symbol, default_symbols::BACKGROUND),
            background_grayscale: or_default(
                self.background_grayscale_symbol,
                default_symbols::BACKGROUND_GRAYSCALE,
            ),
            escape: or_default(self.escape_symbol, default_symbols::ESCAPE),
            unescape: or_default(self.unescape_symbol, default_symbols::UNESCAPE),
            no_hilite: or_default(self.no_hilite_symbol, default_symbols::NO_HILITE),
            recall: or_default(self.recall_symbol, default_symbols::RECALL),
            aliases: self.aliases,
        }
    }
}

mod builder {
    use super::SymbolConfig;

    impl SymbolConfig {
        #[must_use]
        pub fn with_foreground_symbol(mut self, it: impl Into<String>) -> Self {
            self.foreground_symbol = Some(it.into());
            self
        }

        #[must_use]
        pub fn with_foreground_grayscale_symbol(mut self, it: impl Into<String>) -> Self {
            self.foreground_grayscale_symbol = Some(it.into());
            self
        }

        #[must_use]
        pub fn with_background_symbol(mut self, it: impl Into<String>) -> Self {
            self.background_symbol = Some(it.into());
            self
        }

        #[must_use]
        pub fn with_background_grayscale_symbol(mut self, it: impl Into<String>) -> Self {
            self.background_grayscale_symbol = Some(it.into());
            self
        }

        #[must_use]
        pub fn with_escape_symbol(mut self, it: impl Into<String>) -> Self {
            self.escape_symbol = Some(it.into());
            self
        }

        #[must_use]
        pub fn with_unescape_symbol(mut self, it: impl Into<String>) -> Self {
            self.unescape_symbol = Some(it.into());
            self
        }

        #[must_use]
        pub fn with_no_hilite_symbol(mut self, it: impl Into<String>) -> Self {
            self.no_hilite_symbol = Some(it.into());
            self
        }

        #[must_use]
        pub fn with_recall_symbol(mut self, it: impl Into<String>) -> Self {
            self.recall_symbol = Some(it.into());
            self
        }

        #[must_use]
        pub fn with_alias(
            mut self,
            alias: impl Into<String>,
            code: impl Into<String>,
        ) -> Self {
            self.aliases.insert(alias.into(), code.into());
            self
        }
    }
}
