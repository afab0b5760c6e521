// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised while building a [`crate::MarkupParser`].
//!
//! Translation itself never fails: text that does not form a token is passed through as
//! literal text. So every error in this crate surfaces at construction time, before any
//! text is translated.

/// Why a symbol configuration could not be turned into a parser.
///
/// | Variant                  | Cause                                                  |
/// | :----------------------- | :----------------------------------------------------- |
/// | [`UnknownAliasTarget`]   | Alias points at a code that is not an xterm color      |
/// | [`AliasCollision`]       | Alias spelling is a token, extends a marker, or empty  |
/// | [`InvalidConfig`]        | Configuration document could not be deserialized       |
///
/// [`UnknownAliasTarget`]: Self::UnknownAliasTarget
/// [`AliasCollision`]: Self::AliasCollision
/// [`InvalidConfig`]: Self::InvalidConfig
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("unknown alias target: alias '{alias}' refers to undefined color code '{target}'")]
    #[diagnostic(
        code(r3bl_magic_symbols::config::unknown_alias_target),
        help(
            "An alias must name an xterm color code, either an RGB cube cell such as \
             `534` (each digit 0-5) or a grayscale spelling."
        )
    )]
    UnknownAliasTarget { alias: String, target: String },

    #[error("alias collision: alias '{alias}' is spelled '{spelling}', which is already a token")]
    #[diagnostic(
        code(r3bl_magic_symbols::config::alias_collision),
        help(
            "Pick an alias that does not repeat a built-in token, eg: single color \
             letters like `r` or `R` are taken. An alias also may not start with the \
             escape marker or a recall token."
        )
    )]
    AliasCollision { alias: String, spelling: String },

    #[error("invalid symbol configuration: {reason}")]
    #[diagnostic(
        code(r3bl_magic_symbols::config::invalid_config),
        help("Every field is optional; symbols are strings and aliases map strings to strings.")
    )]
    InvalidConfig { reason: String },
}
