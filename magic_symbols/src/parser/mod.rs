// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tokenize markup and fold the tokens into output text.
//!
//! ```text
//! "|rh|Yello w|[Gor|nld"
//!     │
//!     ▼ tokenize_segments()
//! [Token("|r"), Literal("h"), Token("|Y"), Literal("ello w"), Token("|[G"), ...]
//!     │
//!     ├──▶ render_segments(.., Colorize(mode))  ESC[1mESC[31mh ESC[22mESC[33mello w ...
//!     └──▶ render_segments(.., Strip)           "hello world"
//! ```
//!
//! Translation and stripping walk the same segments, so they always agree on where a
//! token starts and ends.

// Attach.
mod default_parser;
mod markup_parser;
mod recall_stack;
mod segment;
mod tokenizer;
mod translate_engine;

// Re-export.
pub use default_parser::*;
pub use markup_parser::*;
pub use recall_stack::*;
pub use segment::*;
pub use tokenizer::*;
pub use translate_engine::*;
