// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The user facing [`SymbolConfig`] (every field optional) and the [`Symbols`] it
//! resolves to (every field filled in from [`default_symbols`]).

// Attach.
mod symbol_config;
mod symbols;

// Re-export.
pub use symbol_config::*;
pub use symbols::*;
