// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorMode, SgrSequence};

/// How a token takes part in translation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reset, underline, hilite, unhilite. Never remembered for recall.
    Control,
    /// One of the 8 basic colors. Always rendered natively.
    AnsiColor,
    /// RGB cube, grayscale, bright background substitution, or an alias of one of
    /// those. Rendered natively or through its fallback depending on [`ColorMode`].
    XtermColor,
}

/// What a single token spelling renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorEntry {
    kind: TokenKind,
    native: SgrSequence,
    fallback: Option<SgrSequence>,
}

impl ColorEntry {
    #[must_use]
    pub fn control(native: impl Into<SgrSequence>) -> Self {
        Self {
            kind: TokenKind::Control,
            native: native.into(),
            fallback: None,
        }
    }

    #[must_use]
    pub fn ansi_color(native: impl Into<SgrSequence>) -> Self {
        Self {
            kind: TokenKind::AnsiColor,
            native: native.into(),
            fallback: None,
        }
    }

    #[must_use]
    pub fn xterm_color(native: SgrSequence, fallback: SgrSequence) -> Self {
        Self {
            kind: TokenKind::XtermColor,
            native,
            fallback: Some(fallback),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }

    /// Colors are pushed onto the recall stack, controls are not.
    #[must_use]
    pub fn is_color(&self) -> bool { self.kind != TokenKind::Control }

    #[must_use]
    pub fn native(&self) -> &SgrSequence { &self.native }

    #[must_use]
    pub fn fallback(&self) -> Option<&SgrSequence> { self.fallback.as_ref() }

    /// The sequence to emit in `mode`. Entries without a fallback ignore the mode.
    #[must_use]
    pub fn sequence_for(&self, mode: ColorMode) -> &SgrSequence {
        match (mode, &self.fallback) {
            (ColorMode::AnsiFallback, Some(fallback)) => fallback,
            _ => &self.native,
        }
    }
}
