// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{Error, ErrorKind};

/// Tokens a `Cursor` can scan for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Token {
    /// Zero or more of tab, space, CR and LF.
    Whitespace,
    Comma,
    OpenParen,
    CloseParen,
    /// A single `0` or `1`.
    Flag,
    SignedNumber,
    NonNegativeNumber,
}

/// A scanner over the arguments of a single command.
///
/// The command name is kept only to build error messages and positions:
/// every reported offset is relative to `name + text`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    name: &'a str,
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(name: &'a str, text: &'a str) -> Self {
        Cursor { name, text, pos: 0 }
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub fn has_more(&self) -> bool {
        self.pos < self.text.len()
    }

    /// Returns the text not scanned yet.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Offset of the scan position inside the whole command string.
    #[inline]
    pub fn position(&self) -> usize {
        self.name.len() + self.pos
    }

    /// Consumes `token` at the current position and returns the matched text.
    ///
    /// Returns an empty string and leaves the position untouched when
    /// nothing matches.
    pub fn consume(&mut self, token: Token) -> &'a str {
        let len = self.match_len(token).unwrap_or(0);
        let start = self.pos;
        self.pos += len;
        &self.text[start..self.pos]
    }

    /// Consumes `token` and reports whether it matched.
    ///
    /// `Token::Whitespace` always matches, possibly with zero length.
    pub fn eat(&mut self, token: Token) -> bool {
        match self.match_len(token) {
            Some(len) => {
                self.pos += len;
                true
            }
            None => false,
        }
    }

    /// Builds an error pointing at the current position.
    pub fn error(&self, kind: ErrorKind) -> Error {
        Error::at(kind, format!("{}{}", self.name, self.text), self.position())
    }

    /// Builds an error pointing at the command name.
    pub fn error_at_start(&self, kind: ErrorKind) -> Error {
        Error::at(kind, format!("{}{}", self.name, self.text), 0)
    }

    fn match_len(&self, token: Token) -> Option<usize> {
        let s = &self.text.as_bytes()[self.pos..];
        match token {
            Token::Whitespace => {
                Some(s.iter().take_while(|c| is_wsp(**c)).count())
            }
            Token::Comma => single(s, b','),
            Token::OpenParen => single(s, b'('),
            Token::CloseParen => single(s, b')'),
            Token::Flag => match s.first() {
                Some(b'0') | Some(b'1') => Some(1),
                _ => None,
            },
            Token::SignedNumber => number_len(s, true),
            Token::NonNegativeNumber => number_len(s, false),
        }
    }
}

#[inline]
fn is_wsp(c: u8) -> bool {
    matches!(c, b'\t' | b' ' | b'\r' | b'\n')
}

#[inline]
fn single(s: &[u8], c: u8) -> Option<usize> {
    if s.first() == Some(&c) { Some(1) } else { None }
}

#[inline]
fn digits(s: &[u8], from: usize) -> usize {
    s[from..].iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Matches `[+-]?(\d*\.\d+|\d+\.?)([eE][+-]?\d+)*` anchored at the start of `s`.
fn number_len(s: &[u8], signed: bool) -> Option<usize> {
    let mut i = 0;
    if signed && matches!(s.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_digits = digits(s, i);
    i += int_digits;

    if s.get(i) == Some(&b'.') {
        let frac_digits = digits(s, i + 1);
        if frac_digits > 0 {
            i += 1 + frac_digits;
        } else if int_digits > 0 {
            i += 1;
        } else {
            return None;
        }
    } else if int_digits == 0 {
        return None;
    }

    // An exponent is only taken when it carries digits, so `1e` stops at `1`.
    while matches!(s.get(i), Some(b'e') | Some(b'E')) {
        let mut k = i + 1;
        if matches!(s.get(k), Some(b'+') | Some(b'-')) {
            k += 1;
        }

        let exp_digits = digits(s, k);
        if exp_digits == 0 {
            break;
        }

        i = k + exp_digits;
    }

    Some(i)
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test {
        ($name:ident, $token:expr, $text:expr, $matched:expr) => (
            #[test]
            fn $name() {
                let mut c = Cursor::new("M", $text);
                assert_eq!(c.consume($token), $matched);
            }
        )
    }

    test!(wsp_1, Token::Whitespace, " \t\r\n1", " \t\r\n");
    test!(wsp_empty, Token::Whitespace, "1", "");
    test!(comma_1, Token::Comma, ",,", ",");
    test!(flag_1, Token::Flag, "012", "0");
    test!(flag_2, Token::Flag, "2", "");
    test!(number_int, Token::SignedNumber, "10 20", "10");
    test!(number_sign, Token::SignedNumber, "-10-20", "-10");
    test!(number_plus, Token::SignedNumber, "+.5", "+.5");
    test!(number_trailing_dot, Token::SignedNumber, "1.x", "1.");
    test!(number_two_dots, Token::SignedNumber, "0.1.2", "0.1");
    test!(number_exp, Token::SignedNumber, "1e+2 0", "1e+2");
    test!(number_repeated_exp, Token::SignedNumber, "1e2e3", "1e2e3");
    test!(number_bare_exp, Token::SignedNumber, "0e", "0");
    test!(number_dot_exp, Token::SignedNumber, ".e3", "");
    test!(number_sign_only, Token::SignedNumber, "+", "");
    test!(number_greedy_zeros, Token::SignedNumber, "00", "00");
    test!(nonnegative_rejects_sign, Token::NonNegativeNumber, "-10", "");
    test!(nonnegative_1, Token::NonNegativeNumber, "10.5", "10.5");

    #[test]
    fn position_includes_name() {
        let mut c = Cursor::new("rotate", "( 10)");
        assert!(c.eat(Token::OpenParen));
        c.consume(Token::Whitespace);
        assert_eq!(c.position(), 8);
        assert!(!c.eat(Token::CloseParen));
        assert_eq!(c.position(), 8);
    }

    #[test]
    fn error_points_into_command() {
        let mut c = Cursor::new("L", "1 x");
        c.consume(Token::SignedNumber);
        c.consume(Token::Whitespace);
        let e = c.error(ErrorKind::ExpectedNumber);
        assert_eq!(e.text, "L1 x");
        assert_eq!(e.position, Some(3));
    }
}
