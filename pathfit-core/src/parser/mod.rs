// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grammar machinery shared by the path data and transform list parsers.

use kurbo::Point;

use crate::{ArcArgs, Error, ErrorKind, Result};

mod cursor;
pub(crate) mod path;
pub(crate) mod transform;

pub(crate) use self::cursor::{Cursor, Token};

const PATH_COMMANDS: &[u8] = b"MmZzLlHhVvCcSsQqTtAa";

const TRANSFORM_NAMES: &[&str] = &[
    "matrix", "translate", "scale", "rotate", "skewX", "skewY",
];

/// Describes how a text splits into commands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Grammar {
    /// Single-letter SVG path commands.
    PathData,
    /// Named SVG transform functions.
    TransformList,
}

impl Grammar {
    /// Returns the length of a command name starting at `s`.
    fn command_len(self, s: &[u8]) -> Option<usize> {
        match self {
            Grammar::PathData => {
                let c = s.first()?;
                if PATH_COMMANDS.contains(c) { Some(1) } else { None }
            }
            Grammar::TransformList => {
                TRANSFORM_NAMES.iter()
                    .find(|name| s.starts_with(name.as_bytes()))
                    .map(|name| name.len())
            }
        }
    }

    /// Splits `text` into per-command cursors.
    ///
    /// Only whitespace may precede the first command. A text with no
    /// commands at all and nothing else yields an empty list.
    pub fn split(self, text: &str) -> Result<Vec<Cursor>> {
        let bytes = text.as_bytes();

        let mut starts = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            match self.command_len(&bytes[i..]) {
                Some(len) => {
                    starts.push((i, len));
                    i += len;
                }
                None => i += 1,
            }
        }

        let prefix_end = starts.first().map(|&(start, _)| start).unwrap_or(text.len());
        let prefix = &text[..prefix_end];
        if !prefix.bytes().all(|c| matches!(c, b'\t' | b' ' | b'\r' | b'\n')) {
            let name = starts.first()
                .map(|&(start, len)| &text[start..start + len])
                .unwrap_or("");
            return Err(Error::at(
                ErrorKind::ExpectedNothingBeforeCommand,
                format!("{}{}", prefix, name),
                0,
            ));
        }

        let mut commands = Vec::with_capacity(starts.len());
        for (idx, &(start, len)) in starts.iter().enumerate() {
            let end = starts.get(idx + 1).map(|&(next, _)| next).unwrap_or(text.len());
            let cursor = Cursor::new(&text[start..start + len], &text[start + len..end]);
            log::trace!("{:?} command: {:?}", self, &text[start..end]);
            commands.push(cursor);
        }

        Ok(commands)
    }
}

/// Parses a number, optionally rejecting a sign.
pub(crate) fn number(c: &mut Cursor, nonnegative: bool) -> Result<f64> {
    let token = if nonnegative { Token::NonNegativeNumber } else { Token::SignedNumber };
    let start = *c;
    match parse_float(c.consume(token)) {
        Some(n) => Ok(n),
        None => Err(start.error(ErrorKind::ExpectedNumber)),
    }
}

/// Converts a scanned number token.
///
/// Everything from a second exponent marker on is ignored, so `1e2e3`
/// reads as `100`.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }

    let mut markers = text.match_indices(|c| c == 'e' || c == 'E').map(|(i, _)| i);
    let end = markers.nth(1).unwrap_or(text.len());
    let n: f64 = text[..end].parse().ok()?;
    if n.is_finite() { Some(n) } else { None }
}

pub(crate) fn flag(c: &mut Cursor) -> Result<bool> {
    match c.consume(Token::Flag) {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(c.error(ErrorKind::ExpectedFlag)),
    }
}

/// Skips whitespace with at most one comma inside. Returns whether a comma
/// was seen.
pub(crate) fn comma_wsp(c: &mut Cursor) -> bool {
    c.consume(Token::Whitespace);
    let comma = c.eat(Token::Comma);
    c.consume(Token::Whitespace);
    comma
}

pub(crate) fn coordinate_pair(c: &mut Cursor) -> Result<Point> {
    let x = number(c, false)?;
    comma_wsp(c);
    let y = number(c, false)?;
    Ok(Point::new(x, y))
}

/// Parses `N` coordinate pairs separated by comma-whitespace.
///
/// Curves use this for their control points followed by the end point.
pub(crate) fn coordinate_pairs<const N: usize>(c: &mut Cursor) -> Result<[Point; N]> {
    let mut points = [Point::ZERO; N];
    for (i, p) in points.iter_mut().enumerate() {
        if i != 0 {
            comma_wsp(c);
        }

        *p = coordinate_pair(c)?;
    }

    Ok(points)
}

pub(crate) fn elliptical_arc(c: &mut Cursor) -> Result<ArcArgs> {
    let rx = number(c, true)?;
    comma_wsp(c);
    let ry = number(c, true)?;
    comma_wsp(c);
    let x_axis_rotation = number(c, false)?;
    comma_wsp(c);
    let large_arc = flag(c)?;
    comma_wsp(c);
    let sweep = flag(c)?;
    comma_wsp(c);
    let end = coordinate_pair(c)?;

    Ok(ArcArgs { rx, ry, x_axis_rotation, large_arc, sweep, end })
}

/// Checks that only whitespace is left.
pub(crate) fn test_end(c: &mut Cursor, kind: ErrorKind) -> Result<()> {
    c.consume(Token::Whitespace);
    if c.has_more() {
        return Err(c.error(kind));
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_path() {
        let commands = Grammar::PathData.split(" M0 0l1 1z").unwrap();
        let names: Vec<_> = commands.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["M", "l", "z"]);
    }

    #[test]
    fn split_transform() {
        let commands = Grammar::TransformList.split("translate(1) scale(2)").unwrap();
        let names: Vec<_> = commands.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["translate", "scale"]);
    }

    #[test]
    fn split_empty() {
        assert!(Grammar::PathData.split(" \n").unwrap().is_empty());
    }

    #[test]
    fn split_leading_junk() {
        let e = Grammar::PathData.split("0 M1 1").unwrap_err();
        assert_eq!(e.kind, ErrorKind::ExpectedNothingBeforeCommand);
        assert_eq!(e.text, "0 M");
    }

    #[test]
    fn split_only_junk() {
        let e = Grammar::TransformList.split("bla(10)").unwrap_err();
        assert_eq!(e.kind, ErrorKind::ExpectedNothingBeforeCommand);
    }

    #[test]
    fn split_non_ascii() {
        let e = Grammar::PathData.split("é M0 0").unwrap_err();
        assert_eq!(e.kind, ErrorKind::ExpectedNothingBeforeCommand);
    }

    #[test]
    fn parse_float_repeated_exponent() {
        assert_eq!(parse_float("1e2e3"), Some(100.0));
        assert_eq!(parse_float("-.5E1"), Some(-5.0));
        assert_eq!(parse_float("1e400"), None);
    }

    #[test]
    fn comma_wsp_single_comma() {
        let mut c = Cursor::new("M", " , ,1");
        assert!(comma_wsp(&mut c));
        assert_eq!(c.position(), 4);
    }

    #[test]
    fn arc_with_packed_flags() {
        let mut c = Cursor::new("A", "10 15 20 012-3");
        let arc = elliptical_arc(&mut c).unwrap();
        assert!(!arc.large_arc);
        assert!(arc.sweep);
        assert_eq!(arc.end, Point::new(2.0, -3.0));
    }

    #[test]
    fn arc_negative_radius() {
        let mut c = Cursor::new("A", "-10 15 20 0 1 2 3");
        let e = elliptical_arc(&mut c).unwrap_err();
        assert_eq!(e.kind, ErrorKind::ExpectedNumber);
        assert_eq!(e.position, Some(1));
    }

    #[test]
    fn cubic_pairs() {
        let mut c = Cursor::new("C", "1 2,3 4 5-6");
        let [c1, c2, end] = coordinate_pairs::<3>(&mut c).unwrap();
        assert_eq!(c1, Point::new(1.0, 2.0));
        assert_eq!(c2, Point::new(3.0, 4.0));
        assert_eq!(end, Point::new(5.0, -6.0));
    }
}
