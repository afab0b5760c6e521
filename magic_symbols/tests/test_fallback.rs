// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_magic_symbols::*;
use test_case::test_case;

fn fallback(text: &str) -> String { translate_with_mode(text, false) }

#[test]
fn no_xterm_sequences() {
    for text in ["|500x", "|[500x", "|=fx", "|[=yx", "|[rx"] {
        let it = fallback(text);
        assert!(!it.contains("38;5;"), "{text}");
        assert!(!it.contains("48;5;"), "{text}");
    }
}

#[test_case("|000", "\x1b[22m\x1b[30m" ; "black")]
#[test_case("|111", "\x1b[1m\x1b[30m" ; "dark gray")]
#[test_case("|222", "\x1b[1m\x1b[30m" ; "gray")]
#[test_case("|333", "\x1b[22m\x1b[37m" ; "light gray")]
#[test_case("|444", "\x1b[1m\x1b[37m" ; "near white")]
#[test_case("|555", "\x1b[1m\x1b[37m" ; "white")]
#[test_case("|100", "\x1b[22m\x1b[31m" ; "dim red")]
#[test_case("|201", "\x1b[22m\x1b[31m" ; "dim red with blue")]
#[test_case("|321", "\x1b[1m\x1b[31m" ; "red")]
#[test_case("|544", "\x1b[1m\x1b[31m" ; "light red")]
#[test_case("|010", "\x1b[22m\x1b[32m" ; "dim green")]
#[test_case("|142", "\x1b[1m\x1b[32m" ; "green")]
#[test_case("|001", "\x1b[22m\x1b[34m" ; "dim blue")]
#[test_case("|435", "\x1b[1m\x1b[34m" ; "light blue")]
#[test_case("|221", "\x1b[22m\x1b[33m" ; "dim yellow")]
#[test_case("|554", "\x1b[1m\x1b[33m" ; "light yellow")]
#[test_case("|212", "\x1b[22m\x1b[35m" ; "dim magenta")]
#[test_case("|505", "\x1b[1m\x1b[35m" ; "magenta")]
#[test_case("|122", "\x1b[22m\x1b[36m" ; "dim cyan")]
#[test_case("|355", "\x1b[1m\x1b[36m" ; "light cyan")]
fn rgb_foregrounds(token: &str, expected: &str) {
    assert_eq!(
        fallback(&format!("{token}hello world")),
        format!("{expected}hello world")
    );
}

#[test_case("|[111", "\x1b[40m" ; "black")]
#[test_case("|[333", "\x1b[47m" ; "white")]
#[test_case("|[504", "\x1b[41m" ; "red")]
#[test_case("|[051", "\x1b[42m" ; "green")]
#[test_case("|[445", "\x1b[44m" ; "blue")]
#[test_case("|[550", "\x1b[43m" ; "yellow")]
#[test_case("|[525", "\x1b[45m" ; "magenta")]
#[test_case("|[255", "\x1b[46m" ; "cyan")]
fn rgb_backgrounds(token: &str, expected: &str) {
    assert_eq!(
        fallback(&format!("{token}hello world")),
        format!("{expected}hello world")
    );
}

#[test]
fn grayscale_foregrounds() {
    for letter in 'a'..='z' {
        let expected = match letter {
            'a'..='e' => "\x1b[22m\x1b[30m",
            'f'..='o' => "\x1b[1m\x1b[30m",
            'p'..='t' => "\x1b[22m\x1b[37m",
            _ => "\x1b[1m\x1b[37m",
        };
        assert_eq!(fallback(&format!("|={letter}x")), format!("{expected}x"), "{letter}");
    }
}

#[test]
fn grayscale_backgrounds() {
    for letter in 'a'..='z' {
        let expected = if letter <= 'o' { "\x1b[40m" } else { "\x1b[47m" };
        assert_eq!(fallback(&format!("|[={letter}x")), format!("{expected}x"), "{letter}");
    }
}

#[test]
fn bright_backgrounds_fall_back_to_plain() {
    assert_eq!(fallback("|[rhello world"), "\x1b[41mhello world");
    assert_eq!(fallback("hello |[yworld"), "hello \x1b[43mworld");
}

#[test]
fn ansi_tokens_ignore_mode() {
    let text = "|rh|Yello w|[Gor|nld|!B|u|h|H";
    assert_eq!(fallback(text), translate(text));
}
