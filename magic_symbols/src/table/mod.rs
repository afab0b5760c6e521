// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lookup from token spelling (eg: `|r`, `|[534`, `|=f`) to the sequences it renders
//! as. Built once per parser from its [`crate::Symbols`], then only read.

// Attach.
mod color_entry;
mod color_table;

// Re-export.
pub use color_entry::*;
pub use color_table::*;
