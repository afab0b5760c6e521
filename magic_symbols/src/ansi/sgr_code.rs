// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR sequences emitted by the translator.
//!
//! Sequences are written straight into the output [`String`] with [`WriteToBuf`], so a
//! translation pass never goes through the formatting machinery per token. [`Display`]
//! is provided on top for tests and diagnostics.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use super::{BasicColor, Layer};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Hilite,
    Unhilite,
    Underline,
    Foreground(BasicColor),
    Background(BasicColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
}

const CSI: &str = "\x1b[";
const SGR: &str = "m";

impl SgrCode {
    #[must_use]
    pub const fn basic(color: BasicColor, layer: Layer) -> Self {
        match layer {
            Layer::Foreground => SgrCode::Foreground(color),
            Layer::Background => SgrCode::Background(color),
        }
    }

    #[must_use]
    pub const fn ansi256(index: u8, layer: Layer) -> Self {
        match layer {
            Layer::Foreground => SgrCode::ForegroundAnsi256(index),
            Layer::Background => SgrCode::BackgroundAnsi256(index),
        }
    }
}

/// Buffer that [`WriteToBuf`] implementations append to.
pub type BufTextStorage = String;

/// Append the wire form of `self` to a buffer, without going through the formatting
/// machinery. [`Display`] impls delegate here and write the buffer out once.
pub trait WriteToBuf {
    /// # Errors
    ///
    /// Returns an error if the formatting operation fails.
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result;

    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails.
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }
}

/// Every `u8` as decimal text, so palette indices never go through `fmt`.
#[rustfmt::skip]
const U8_STRINGS: [&str; 256] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14",
    "15", "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28",
    "29", "30", "31", "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42",
    "43", "44", "45", "46", "47", "48", "49", "50", "51", "52", "53", "54", "55", "56",
    "57", "58", "59", "60", "61", "62", "63", "64", "65", "66", "67", "68", "69", "70",
    "71", "72", "73", "74", "75", "76", "77", "78", "79", "80", "81", "82", "83", "84",
    "85", "86", "87", "88", "89", "90", "91", "92", "93", "94", "95", "96", "97", "98",
    "99", "100", "101", "102", "103", "104", "105", "106", "107", "108", "109", "110",
    "111", "112", "113", "114", "115", "116", "117", "118", "119", "120", "121", "122",
    "123", "124", "125", "126", "127", "128", "129", "130", "131", "132", "133", "134",
    "135", "136", "137", "138", "139", "140", "141", "142", "143", "144", "145", "146",
    "147", "148", "149", "150", "151", "152", "153", "154", "155", "156", "157", "158",
    "159", "160", "161", "162", "163", "164", "165", "166", "167", "168", "169", "170",
    "171", "172", "173", "174", "175", "176", "177", "178", "179", "180", "181", "182",
    "183", "184", "185", "186", "187", "188", "189", "190", "191", "192", "193", "194",
    "195", "196", "197", "198", "199", "200", "201", "202", "203", "204", "205", "206",
    "207", "208", "209", "210", "211", "212", "213", "214", "215", "216", "217", "218",
    "219", "220", "221", "222", "223", "224", "225", "226", "227", "228", "229", "230",
    "231", "232", "233", "234", "235", "236", "237", "238", "239", "240", "241", "242",
    "243", "244", "245", "246", "247", "248", "249", "250", "251", "252", "253", "254",
    "255",
];

impl WriteToBuf for SgrCode {
    /// SGR: set graphics mode command.
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        acc.push_str(CSI);
        match *self {
            SgrCode::Reset => acc.push('0'),
            SgrCode::Hilite => acc.push('1'),
            SgrCode::Unhilite => acc.push_str("22"),
            SgrCode::Underline => acc.push('4'),
            SgrCode::Foreground(color) => {
                acc.push_str(U8_STRINGS[usize::from(30 + color.sgr_offset())]);
            }
            SgrCode::Background(color) => {
                acc.push_str(U8_STRINGS[usize::from(40 + color.sgr_offset())]);
            }
            SgrCode::ForegroundAnsi256(index) => {
                acc.push_str("38;5;");
                acc.push_str(U8_STRINGS[usize::from(index)]);
            }
            SgrCode::BackgroundAnsi256(index) => {
                acc.push_str("48;5;");
                acc.push_str(U8_STRINGS[usize::from(index)]);
            }
        }
        acc.push_str(SGR);
        Ok(())
    }
}

impl Display for SgrCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = BufTextStorage::new();
        self.write_to_buf(&mut acc)?;
        self.write_buf_to_fmt(&acc, f)
    }
}

/// One or two [`SgrCode`]s emitted back to back, eg: hilite followed by red.
///
/// Each code is written as its own `ESC[..m` sequence rather than being merged into a
/// single parameter list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SgrSequence(SmallVec<[SgrCode; 2]>);

impl SgrSequence {
    #[must_use]
    pub fn codes(&self) -> &[SgrCode] { &self.0 }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<SgrCode> for SgrSequence {
    fn from(code: SgrCode) -> Self { Self(smallvec::smallvec![code]) }
}

impl<const N: usize> From<[SgrCode; N]> for SgrSequence {
    fn from(codes: [SgrCode; N]) -> Self { Self(codes.into_iter().collect()) }
}

impl WriteToBuf for SgrSequence {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        for code in &self.0 {
            code.write_to_buf(acc)?;
        }
        Ok(())
    }
}

impl Display for SgrSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = BufTextStorage::new();
        self.write_to_buf(&mut acc)?;
        self.write_buf_to_fmt(&acc, f)
    }
}
