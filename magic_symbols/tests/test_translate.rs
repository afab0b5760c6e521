// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_magic_symbols::*;
use test_case::test_case;

const HILITE: &str = "\x1b[1m";
const UNHILITE: &str = "\x1b[22m";
const RESET: &str = "\x1b[0m";
const UNDERLINE: &str = "\x1b[4m";
const BLACK: &str = "\x1b[30m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BACK_BLACK: &str = "\x1b[40m";
const BACK_RED: &str = "\x1b[41m";
const BACK_GREEN: &str = "\x1b[42m";
const BACK_YELLOW: &str = "\x1b[43m";

fn fg(index: u8) -> String { format!("\x1b[38;5;{index}m") }

fn bg(index: u8) -> String { format!("\x1b[48;5;{index}m") }

fn gray(letter: char) -> u8 { xterm_grayscale_index(letter) }

#[test]
fn untagged_text_is_unchanged() {
    assert_eq!(translate("hello world"), "hello world");
    assert_eq!(translate(""), "");
}

#[test]
fn ansi_tokens() {
    assert_eq!(
        translate("|rh|Yello w|[Gor|nld"),
        format!("{HILITE}{RED}h{UNHILITE}{YELLOW}ello w{BACK_GREEN}or{RESET}ld")
    );
    assert_eq!(
        translate("|bhello |Gworld"),
        format!("{HILITE}{BLUE}hello {UNHILITE}{GREEN}world")
    );
    assert_eq!(
        translate("|Rhe|hllo |Hworld"),
        format!("{UNHILITE}{RED}he{HILITE}llo {UNHILITE}world")
    );
    assert_eq!(
        translate("|xhello |nworld"),
        format!("{HILITE}{BLACK}hello {RESET}world")
    );
    assert_eq!(
        translate("|uhello |nworld"),
        format!("{UNDERLINE}hello {RESET}world")
    );
    assert_eq!(
        translate("|[R|[Yhello |[Xworld"),
        format!("{BACK_RED}{BACK_YELLOW}hello {BACK_BLACK}world")
    );
    assert_eq!(
        translate("|rhell|!Go wo|Hrld"),
        format!("{HILITE}{RED}hell{GREEN}o wo{UNHILITE}rld")
    );
}

#[test]
fn xterm_and_grayscale_tokens() {
    assert_eq!(
        translate("|[123he|=bll|[=ao |543world"),
        format!(
            "{}he{}ll{}o {}world",
            bg(16 + 36 + 12 + 3),
            fg(134 + b'b'),
            bg(16),
            fg(16 + 180 + 24 + 3)
        )
    );
    assert_eq!(
        translate("|[=vh|=fel|[=xlo wo|=drld"),
        format!(
            "{}h{}el{}lo wo{}rld",
            bg(gray('v')),
            fg(gray('f')),
            bg(gray('x')),
            fg(gray('d'))
        )
    );
}

#[test]
fn ansi_and_xterm_mix() {
    assert_eq!(
        translate("|[=bhe|rllo |[Gwo|123rld"),
        format!(
            "{}he{HILITE}{RED}llo {BACK_GREEN}wo{}rld",
            bg(gray('b')),
            fg(16 + 36 + 12 + 3)
        )
    );
}

#[test_case("||rhello world", "|rhello world" ; "ansi")]
#[test_case("||rhel||[Rlo w||[go||Yrld", "|rhel|[Rlo w|[go|Yrld" ; "multiple ansi")]
#[test_case("||=xhello world", "|=xhello world" ; "grayscale")]
#[test_case("||=xhe||321ll||[542o w||[=zorld", "|=xhe|321ll|[542o w|[=zorld" ; "multiple xterm")]
#[test_case(
    "||rh||[Re||=xl||[=tlo ||123wo||[321rld",
    "|rh|[Re|=xl|[=tlo |123wo|[321rld" ;
    "ansi and xterm"
)]
fn escapes(text: &str, expected: &str) {
    assert_eq!(translate(text), expected);
}

#[test]
fn escape_then_token() {
    assert_eq!(
        translate("||rhel|rlo world"),
        format!("|rhel{HILITE}{RED}lo world")
    );
    assert_eq!(
        translate("||500hel|500lo ||rwor|rld"),
        format!("|500hel{}lo |rwor{HILITE}{RED}ld", fg(196))
    );
}

#[test]
fn bright_backgrounds_use_xterm_cells() {
    let it = translate("|[mhello world");
    assert_eq!(it, format!("{}hello world", bg(16 + 180 + 5)));
    assert!(!it.contains(HILITE));

    assert_eq!(translate("|[rx"), format!("{}x", bg(196)));
    assert_eq!(translate("|[wx"), format!("{}x", bg(231)));
    assert_eq!(translate("|[xx"), format!("{}x", bg(102)));
}

#[test]
fn every_table_entry_renders_its_native_sequence() {
    let parser = MarkupParser::default();
    for (spelling, entry) in parser.table().iter() {
        assert_eq!(
            parser.translate(spelling),
            entry.native().to_string(),
            "{spelling}"
        );
        assert_eq!(
            parser.translate_with_mode(spelling, ColorMode::AnsiFallback),
            entry.sequence_for(ColorMode::AnsiFallback).to_string(),
            "{spelling}"
        );
    }
}

#[test]
fn every_table_entry_is_one_token() {
    let parser = MarkupParser::default();
    for (spelling, _) in parser.table().iter() {
        assert_eq!(parser.tokenize(spelling), [spelling]);
    }
}
