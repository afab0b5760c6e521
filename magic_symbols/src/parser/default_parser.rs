// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Free functions over a shared parser with the built-in symbols and no aliases.

use std::sync::LazyLock;

use crate::{ColorMode, MarkupParser};

static DEFAULT_PARSER: LazyLock<MarkupParser> = LazyLock::new(MarkupParser::default);

/// The shared parser behind the free functions in this module.
#[must_use]
pub fn default_parser() -> &'static MarkupParser { &DEFAULT_PARSER }

/// See [`MarkupParser::translate()`].
#[must_use]
pub fn translate(text: &str) -> String { DEFAULT_PARSER.translate(text) }

/// See [`MarkupParser::translate_with_mode()`].
#[must_use]
pub fn translate_with_mode(text: &str, mode: impl Into<ColorMode>) -> String {
    DEFAULT_PARSER.translate_with_mode(text, mode)
}

/// See [`MarkupParser::strip()`].
#[must_use]
pub fn strip(text: &str) -> String { DEFAULT_PARSER.strip(text) }

/// See [`MarkupParser::tokenize()`].
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> { DEFAULT_PARSER.tokenize(text) }
